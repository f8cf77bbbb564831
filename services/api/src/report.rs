use clap::Args;
use loan_advisor::config::AppConfig;
use loan_advisor::error::AppError;
use loan_advisor::workflows::import::LoanApplicationImporter;
use loan_advisor::workflows::loans::{
    DecisionEngine, IntakeGuard, LoanApplicationInput, LoanDecision, LoanPurpose,
    LoanRequestStatus, RiskPreview, RiskScorer,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Credit score (300-850)
    #[arg(long)]
    pub(crate) credit_score: u16,
    /// Annual income
    #[arg(long)]
    pub(crate) income: f64,
    /// Years with the current employer
    #[arg(long, default_value_t = 0.0)]
    pub(crate) employment_years: f64,
    /// Requested loan amount
    #[arg(long)]
    pub(crate) amount: f64,
    /// Loan purpose label, e.g. "Home Purchase"
    #[arg(long)]
    pub(crate) purpose: Option<String>,
    /// Emit JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with credit_score,income,employment_years,amount,purpose columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Emit JSON instead of a text table
    #[arg(long)]
    pub(crate) json: bool,
}

/// Advisory preview plus the rubric decision, or the intake reason that blocked it.
#[derive(Debug, Serialize)]
pub(crate) struct ApplicationReport {
    pub(crate) input: LoanApplicationInput,
    pub(crate) preview: RiskPreview,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) decision: Option<LoanDecision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) intake_error: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchRow {
    pub(crate) row: usize,
    #[serde(flatten)]
    pub(crate) report: ApplicationReport,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub(crate) struct BatchSummary {
    pub(crate) total: usize,
    pub(crate) approved: usize,
    pub(crate) rejected: usize,
    pub(crate) invalid: usize,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchReport {
    pub(crate) summary: BatchSummary,
    pub(crate) rows: Vec<BatchRow>,
}

pub(crate) fn build_report(engine: &DecisionEngine, input: LoanApplicationInput) -> ApplicationReport {
    let preview = RiskScorer.preview(&input);
    match IntakeGuard.validate(&input) {
        Ok(()) => ApplicationReport {
            decision: Some(engine.decide(&input)),
            input,
            preview,
            intake_error: None,
        },
        Err(violation) => ApplicationReport {
            input,
            preview,
            decision: None,
            intake_error: Some(violation.to_string()),
        },
    }
}

pub(crate) fn build_batch(
    engine: &DecisionEngine,
    applications: Vec<LoanApplicationInput>,
) -> BatchReport {
    let mut summary = BatchSummary::default();
    let rows: Vec<BatchRow> = applications
        .into_iter()
        .enumerate()
        .map(|(index, input)| {
            let report = build_report(engine, input);
            summary.total += 1;
            match report.decision.as_ref().map(|decision| decision.status) {
                Some(LoanRequestStatus::Approved) => summary.approved += 1,
                Some(LoanRequestStatus::Rejected) => summary.rejected += 1,
                None => summary.invalid += 1,
            }
            // header is line 1
            BatchRow {
                row: index + 2,
                report,
            }
        })
        .collect();

    BatchReport { summary, rows }
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = DecisionEngine::new(config.decision);

    let input = LoanApplicationInput {
        credit_score: args.credit_score,
        income: args.income,
        employment_years: args.employment_years,
        amount: args.amount,
        purpose: args
            .purpose
            .map(LoanPurpose::from)
            .unwrap_or(LoanPurpose::Unspecified),
    };
    let report = build_report(&engine, input);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&report);
    }
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = DecisionEngine::new(config.decision);

    let applications = LoanApplicationImporter::from_path(&args.csv)?;
    let batch = build_batch(&engine, applications);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
        return Ok(());
    }

    println!("Loan batch: {}", args.csv.display());
    println!(
        "- {} applications | {} approved | {} rejected | {} invalid",
        batch.summary.total, batch.summary.approved, batch.summary.rejected, batch.summary.invalid
    );
    for row in &batch.rows {
        let estimate = row.report.preview.estimate;
        let outcome = match (&row.report.decision, &row.report.intake_error) {
            (Some(decision), _) => decision.summary(),
            (None, Some(reason)) => format!("invalid: {reason}"),
            (None, None) => "not decided".to_string(),
        };
        println!(
            "  row {:>4}: advisory {:>2}% ({}) -> {}",
            row.row,
            estimate.probability,
            estimate.outlook.label(),
            outcome
        );
    }
    Ok(())
}

fn render_report(report: &ApplicationReport) {
    let estimate = report.preview.estimate;
    println!("Loan application assessment");
    println!(
        "- Advisory approval estimate: {}% ({})",
        estimate.probability,
        estimate.outlook.label()
    );
    println!("  Risk factors:");
    for factor in report.preview.assessment.reported_factors(&report.input) {
        println!(
            "    - {}: {} / {} impact (weight {}%)",
            factor.kind.label(),
            factor.rating.label(),
            factor.impact.label(),
            factor.weight
        );
    }

    match (&report.decision, &report.intake_error) {
        (Some(decision), _) => {
            println!(
                "- Decision: {} (score {})",
                decision.summary(),
                decision.total_score
            );
            println!("  Recommendations:");
            for recommendation in &decision.recommendations {
                println!("    - {recommendation}");
            }
        }
        (None, Some(reason)) => println!("- Not submitted: {reason}"),
        (None, None) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loan_advisor::workflows::loans::DecisionConfig;

    fn engine() -> DecisionEngine {
        DecisionEngine::new(DecisionConfig::default())
    }

    fn application(credit_score: u16, purpose: &str) -> LoanApplicationInput {
        LoanApplicationInput {
            credit_score,
            income: 120_000.0,
            employment_years: 6.0,
            amount: 200_000.0,
            purpose: LoanPurpose::from(purpose),
        }
    }

    #[test]
    fn valid_application_includes_decision() {
        let report = build_report(&engine(), application(780, "Home Purchase"));

        assert_eq!(report.preview.estimate.probability, 45);
        let decision = report.decision.expect("decision present");
        assert_eq!(decision.status, LoanRequestStatus::Approved);
        assert!(report.intake_error.is_none());
    }

    #[test]
    fn invalid_application_keeps_preview_without_decision() {
        let report = build_report(&engine(), application(780, ""));

        assert!(report.decision.is_none());
        assert_eq!(report.intake_error.as_deref(), Some("loan purpose is required"));
        assert_eq!(report.preview.estimate.probability, 40);
    }

    #[test]
    fn batch_summary_counts_outcomes() {
        let applications = vec![
            application(780, "Home Purchase"),
            LoanApplicationInput {
                credit_score: 560,
                income: 24_000.0,
                employment_years: 0.5,
                amount: 30_000.0,
                purpose: LoanPurpose::PersonalOther,
            },
            application(200, "Education"),
        ];

        let batch = build_batch(&engine(), applications);

        assert_eq!(
            batch.summary,
            BatchSummary {
                total: 3,
                approved: 1,
                rejected: 1,
                invalid: 1,
            }
        );
        assert_eq!(batch.rows[0].row, 2);
        assert!(batch.rows[2].report.intake_error.is_some());
    }
}
