//! Selection configuration

use serde::Deserialize;

use super::ValidationError;
use crate::domain::selection::{RecencyBasis, SelectionPolicy};

/// Tuning for the recency-weighted selector
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionConfig {
    /// Days after which an entry's weight halves
    #[serde(default = "default_half_life")]
    pub recency_half_life_days: f64,

    /// Which timestamp ages an entry
    #[serde(default)]
    pub recency_basis: RecencyBasis,

    /// Keep answered entries in the pool
    #[serde(default)]
    pub include_answered: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            recency_half_life_days: default_half_life(),
            recency_basis: RecencyBasis::default(),
            include_answered: false,
        }
    }
}

fn default_half_life() -> f64 {
    7.0
}

impl SelectionConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.recency_half_life_days.is_finite() || self.recency_half_life_days <= 0.0 {
            return Err(ValidationError::InvalidHalfLife(self.recency_half_life_days));
        }
        Ok(())
    }

    pub fn policy(&self) -> SelectionPolicy {
        SelectionPolicy {
            half_life_days: self.recency_half_life_days,
            basis: self.recency_basis,
            include_answered: self.include_answered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_defaults_match_policy_defaults() {
        let config = SelectionConfig::default();
        assert_eq!(config.policy(), SelectionPolicy::default());
    }

    #[test]
    fn test_rejects_non_positive_half_life() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = SelectionConfig {
                recency_half_life_days: bad,
                ..SelectionConfig::default()
            };
            assert!(config.validate().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_selection_deserialization() {
        let json = r#"{
            "recency_half_life_days": 14.0,
            "recency_basis": "created",
            "include_answered": true
        }"#;
        let config: SelectionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.recency_basis, RecencyBasis::Created);
        assert!(config.include_answered);
        assert_eq!(config.policy().half_life_days, 14.0);
    }
}
