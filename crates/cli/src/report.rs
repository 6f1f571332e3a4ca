use comfy_table::{Cell, Table};
use jping_domain::{CheckMode, CheckReport};

/// Renders everything a run produced, tables separated by blank lines.
pub fn render(report: &CheckReport) -> String {
    let mut sections = Vec::new();

    match report.mode {
        CheckMode::Pre => sections.push(pre_check_table(report).to_string()),
        CheckMode::Post => {
            sections.push(comparison_table(report).to_string());
            sections.push(regression_summary(report));
        }
    }

    if report.has_failures() {
        sections.push(failure_table(report).to_string());
    }

    sections.join("\n\n")
}

fn pre_check_table(report: &CheckReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Router", "Neighbors", "Reachable", "Unreachable"]);

    for summary in report.summaries() {
        table.add_row(vec![
            Cell::new(&summary.hostname),
            Cell::new(summary.entries),
            Cell::new(summary.reachable),
            Cell::new(summary.unreachable()),
        ]);
    }

    table
}

fn comparison_table(report: &CheckReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Router",
        "Interface",
        "IP Address",
        "Success on First Run",
        "Success on Second Run",
    ]);

    for row in report.rows() {
        table.add_row(vec![
            Cell::new(&row.hostname),
            Cell::new(&row.interface),
            Cell::new(&row.ip_address),
            Cell::new(row.first_run),
            Cell::new(row.second_run),
        ]);
    }

    table
}

fn regression_summary(report: &CheckReport) -> String {
    let regressions: Vec<String> = report
        .regressions()
        .map(|row| format!("  {} {} ({})", row.hostname, row.ip_address, row.interface))
        .collect();

    if regressions.is_empty() {
        return format!(
            "No regressions across {} neighbors.",
            report.rows().count()
        );
    }

    format!(
        "{} neighbors reachable before are now unreachable:\n{}",
        regressions.len(),
        regressions.join("\n")
    )
}

fn failure_table(report: &CheckReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Router", "Error"]);

    for (hostname, error) in report.failures() {
        table.add_row(vec![Cell::new(hostname), Cell::new(error)]);
    }

    table
}
