//! Machine-readable findings report.
//!
//! The JSON report is the boundary consumed by downstream collaborators
//! (dashboard, explanation generator); none of them are called from here.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use scrub_model::{Finding, ParsedTransaction, TransactionType};

const REPORT_SCHEMA: &str = "claim-scrubber.findings-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct FindingsReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub transaction_type: TransactionType,
    pub transaction_type_source: &'a str,
    pub claim_count: usize,
    pub segment_count: usize,
    pub finding_count: usize,
    pub findings: &'a [Finding],
}

pub fn write_findings_report_json(
    output_dir: &Path,
    transaction: &ParsedTransaction,
    findings: &[Finding],
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("findings_report.json");
    let payload = FindingsReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        transaction_type: transaction.transaction_type,
        transaction_type_source: &transaction.transaction_type_source,
        claim_count: transaction.claims.len(),
        segment_count: transaction.segment_count(),
        finding_count: findings.len(),
        findings,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
