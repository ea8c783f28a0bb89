use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use scrub_model::{Finding, Severity};

use crate::commands::CheckResult;

pub fn print_check_summary(result: &CheckResult) {
    println!("File: {}", result.file.display());
    println!(
        "Transaction: {} ({} claim(s), {} segment(s))",
        result.transaction.transaction_type,
        result.transaction.claims.len(),
        result.transaction.segment_count()
    );
    println!(
        "Rule set: {} ({} rule(s))",
        result.rule_set, result.rule_count
    );
    if let Some(path) = &result.report_path {
        println!("Findings report: {}", path.display());
    }

    if result.findings.is_empty() {
        println!("No findings.");
        return;
    }

    // Display sorted by severity; the report file keeps rule order.
    let mut ordered: Vec<&Finding> = result.findings.iter().collect();
    ordered.sort_by_key(|finding| (finding.severity.rank(), finding.issue_id.clone()));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Issue"),
        header_cell("Why failed"),
        header_cell("What to fix"),
    ]);
    apply_table_style(&mut table);
    for finding in ordered {
        table.add_row(vec![
            severity_cell(finding.severity),
            Cell::new(&finding.issue_id),
            Cell::new(&finding.why_failed),
            Cell::new(&finding.what_to_fix),
        ]);
    }
    println!("{table}");
}

/// True when any finding should fail the invocation.
pub fn has_blocking_findings(findings: &[Finding]) -> bool {
    findings
        .iter()
        .any(|finding| matches!(finding.severity, Severity::Critical | Severity::High))
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn severity_cell(severity: Severity) -> Cell {
    let cell = Cell::new(severity.as_str());
    match severity {
        Severity::Critical => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        Severity::High => cell.fg(Color::Red),
        Severity::Medium => cell.fg(Color::Yellow),
        Severity::Low => cell.fg(Color::Cyan),
        Severity::Info => cell.add_attribute(Attribute::Dim),
    }
}
