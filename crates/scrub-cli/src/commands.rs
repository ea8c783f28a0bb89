use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use scrub_model::{Finding, ParsedTransaction};
use scrub_parse::parse_transaction;
use scrub_rules::{RuleEvaluator, RuleStore};

use crate::cli::{CheckArgs, ParseArgs};
use crate::report::write_findings_report_json;

/// Everything `check` produces, handed to the summary printer.
#[derive(Debug)]
pub struct CheckResult {
    pub file: PathBuf,
    pub rule_set: String,
    pub rule_count: usize,
    pub transaction: ParsedTransaction,
    pub findings: Vec<Finding>,
    pub report_path: Option<PathBuf>,
}

pub fn run_parse(args: &ParseArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("read claim file {}", args.file.display()))?;
    let parsed = parse_transaction(&raw);

    let json = if args.pretty {
        serde_json::to_string_pretty(&parsed)
    } else {
        serde_json::to_string(&parsed)
    }
    .context("serialize parsed transaction")?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("write parsed transaction to {}", path.display()))?;
            info!(output = %path.display(), "wrote parsed transaction");
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("read claim file {}", args.file.display()))?;
    let transaction = parse_transaction(&raw);

    let store = match &args.rules_dir {
        Some(dir) => RuleStore::new(dir),
        None => RuleStore::open_default(),
    };
    let rules = store
        .load(&args.rule_set)
        .with_context(|| format!("load rule set `{}`", args.rule_set))?;
    debug!(rule_set = %args.rule_set, rules = rules.len(), "evaluating rules");

    let evaluator = RuleEvaluator::new();
    let findings = evaluator.evaluate(&transaction, &rules);
    info!(
        findings = findings.len(),
        claims = transaction.claims.len(),
        "evaluation complete"
    );

    let report_path = match &args.output_dir {
        Some(output_dir) => Some(
            write_findings_report_json(output_dir, &transaction, &findings)
                .context("write findings report")?,
        ),
        None => None,
    };

    Ok(CheckResult {
        file: args.file.clone(),
        rule_set: args.rule_set.clone(),
        rule_count: rules.len(),
        transaction,
        findings,
        report_path,
    })
}
