mod config;
mod policy;
mod rules;

pub use config::{DecisionConfig, DecisionConfigError, NEAR_MISS_MARGIN};
pub use policy::ConfidenceLevel;

use serde::{Deserialize, Serialize};

use super::domain::{LoanApplicationInput, LoanRequestStatus};
use super::risk::RiskFactorKind;
use policy::{confidence_for, recommendations_for};

/// Name reported alongside every decision produced by this engine.
pub const RULE_BASED_METHOD: &str = "rule_based";

/// Stateless evaluator that applies the decision rubric to an application.
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    config: DecisionConfig,
}

impl DecisionEngine {
    pub fn new(config: DecisionConfig) -> Self {
        Self { config }
    }

    /// Like [`DecisionEngine::new`] but rejects incoherent rubric settings up front.
    pub fn try_new(config: DecisionConfig) -> Result<Self, DecisionConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    pub fn decide(&self, input: &LoanApplicationInput) -> LoanDecision {
        let scored = rules::score_application(input, &self.config);

        let approval_probability = (f64::from(scored.total_score) / 100.0)
            .max(self.config.probability_floor)
            .min(self.config.probability_ceiling);
        let status = if scored.total_score >= self.config.approval_threshold {
            LoanRequestStatus::Approved
        } else {
            LoanRequestStatus::Rejected
        };
        let recommendations = recommendations_for(
            input,
            &self.config,
            status,
            scored.total_score,
            approval_probability,
            scored.debt_to_income,
        );

        LoanDecision {
            status,
            approval_probability,
            confidence: confidence_for(approval_probability),
            total_score: scored.total_score,
            components: scored.components,
            recommendations,
            method: RULE_BASED_METHOD.to_string(),
        }
    }
}

/// Contribution of one rubric factor, kept for audit trails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: DecisionFactor,
    pub points: i16,
    pub notes: String,
}

/// Rubric factors: the advisory dimensions plus the loan purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionFactor {
    Risk(RiskFactorKind),
    Purpose,
}

/// Authoritative decision returned for a submitted loan request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanDecision {
    pub status: LoanRequestStatus,
    pub approval_probability: f64,
    pub confidence: ConfidenceLevel,
    pub total_score: i16,
    pub components: Vec<ScoreComponent>,
    pub recommendations: Vec<String>,
    pub method: String,
}

impl LoanDecision {
    pub fn summary(&self) -> String {
        format!(
            "{} with {:.0}% probability ({} confidence)",
            self.status.label(),
            self.approval_probability * 100.0,
            self.confidence.label()
        )
    }
}
