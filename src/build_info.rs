//! Build-time information
//!
//! Metadata captured at compile time by `build.rs`. Used for the CLI's
//! `--version` output and the `User-Agent` sent with every probe.

/// Build timestamp (when the binary was compiled)
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// Cargo optimization level (0, 1, 2, 3, s, z)
pub const CARGO_OPT_LEVEL: &str = env!("VERGEN_CARGO_OPT_LEVEL");

/// Target triple (e.g., x86_64-unknown-linux-gnu, x86_64-apple-darwin)
pub const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

/// Rust compiler version (e.g., 1.75.0)
pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the `User-Agent` header value for outgoing probes
///
/// Format: `prod-smoke/{version}`
pub fn user_agent() -> String {
    format!("prod-smoke/{}", PKG_VERSION)
}

/// Long `--version` text: package version followed by build metadata
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nBuilt: ",
    env!("VERGEN_BUILD_TIMESTAMP"),
    "\nTarget: ",
    env!("VERGEN_CARGO_TARGET_TRIPLE"),
    "-opt",
    env!("VERGEN_CARGO_OPT_LEVEL"),
    "\nRustc: ",
    env!("VERGEN_RUSTC_SEMVER"),
);
