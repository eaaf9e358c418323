//! Formatting and reporting for production test results

use colored::Colorize;

use super::check::CheckStatus;
use super::checks::ConnectivityCheck;
use super::runner::RunReport;

const RULE_WIDTH: usize = 50;

/// Formats the fixed-layout text summary of a run
pub fn format_report(report: &RunReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut output = String::new();

    output.push_str(&format!("{}\n", rule));
    output.push_str(&format!("{}\n", "PRODUCTION TEST RESULTS".bold()));
    output.push_str(&format!("{}\n", rule));

    for check in ConnectivityCheck::ALL {
        let status = CheckStatus::from_passed(report.connectivity.get(check));
        output.push_str(&format!("{}: {}\n", check.label(), status.as_colored_str()));
    }

    output.push_str("\nCritical Endpoints:\n");
    for result in &report.critical_endpoints {
        let code = result
            .status_code
            .map_or_else(|| "None".to_string(), |code| code.to_string());
        output.push_str(&format!(
            "  {}: {} ({})\n",
            result.endpoint,
            result.status().as_colored_str(),
            code
        ));
    }

    output.push_str("\nPerformance:\n");
    for sample in &report.performance.performance_tests {
        match sample.avg_response_time {
            Some(avg) => output.push_str(&format!("  {}: {:.3}s avg\n", sample.endpoint, avg)),
            None => output.push_str(&format!(
                "  {}: {}\n",
                sample.endpoint,
                "no successful samples".yellow()
            )),
        }
    }

    output.push_str(&format_summary(report));
    output
}

fn format_summary(report: &RunReport) -> String {
    let overall = if report.is_healthy() {
        "✅ ALL TESTS PASSED".green().bold()
    } else {
        "❌ SOME TESTS FAILED".red().bold()
    };
    format!("\nOverall Result: {}\n", overall)
}

/// Pretty-printed JSON dump of the full report
pub fn format_json(report: &RunReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Prints the summary to stdout, followed by the JSON dump when `verbose`
pub fn print_report(report: &RunReport, verbose: bool) -> Result<(), serde_json::Error> {
    println!();
    print!("{}", format_report(report));

    if verbose {
        println!("\nDetailed Results:");
        println!("{}", format_json(report)?);
    }

    Ok(())
}
