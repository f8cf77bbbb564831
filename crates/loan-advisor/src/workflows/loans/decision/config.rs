use serde::{Deserialize, Serialize};

/// Points below the approval threshold that still count as a near miss.
pub const NEAR_MISS_MARGIN: i16 = 10;

/// Rubric dials for the rule-based decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionConfig {
    pub approval_threshold: i16,
    pub near_miss_threshold: i16,
    pub assumed_annual_rate: f64,
    pub probability_floor: f64,
    pub probability_ceiling: f64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            approval_threshold: 65,
            near_miss_threshold: 65 - NEAR_MISS_MARGIN,
            assumed_annual_rate: 0.06,
            probability_floor: 0.05,
            probability_ceiling: 0.95,
        }
    }
}

impl DecisionConfig {
    /// Moves the approval threshold and keeps the near-miss band the same width below it.
    pub fn with_approval_threshold(mut self, threshold: i16) -> Self {
        self.approval_threshold = threshold;
        self.near_miss_threshold = threshold.saturating_sub(NEAR_MISS_MARGIN);
        self
    }

    pub fn validate(&self) -> Result<(), DecisionConfigError> {
        let unit = 0.0..=1.0;
        if !unit.contains(&self.probability_floor) || !unit.contains(&self.probability_ceiling) {
            return Err(DecisionConfigError::ProbabilityOutOfRange {
                floor: self.probability_floor,
                ceiling: self.probability_ceiling,
            });
        }
        if self.probability_floor > self.probability_ceiling {
            return Err(DecisionConfigError::InvertedProbabilityBounds {
                floor: self.probability_floor,
                ceiling: self.probability_ceiling,
            });
        }
        if !self.assumed_annual_rate.is_finite() || self.assumed_annual_rate <= 0.0 {
            return Err(DecisionConfigError::InvalidAnnualRate(
                self.assumed_annual_rate,
            ));
        }
        if self.near_miss_threshold > self.approval_threshold {
            return Err(DecisionConfigError::NearMissAboveApproval {
                near_miss: self.near_miss_threshold,
                approval: self.approval_threshold,
            });
        }
        Ok(())
    }
}

/// Rubric settings that cannot produce a coherent decision.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecisionConfigError {
    #[error("probability bounds must lie within [0, 1] (floor {floor}, ceiling {ceiling})")]
    ProbabilityOutOfRange { floor: f64, ceiling: f64 },
    #[error("probability floor {floor} exceeds ceiling {ceiling}")]
    InvertedProbabilityBounds { floor: f64, ceiling: f64 },
    #[error("assumed annual rate must be a positive number (found {0})")]
    InvalidAnnualRate(f64),
    #[error("near-miss threshold {near_miss} is above the approval threshold {approval}")]
    NearMissAboveApproval { near_miss: i16, approval: i16 },
}
