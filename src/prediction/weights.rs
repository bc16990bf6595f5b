//! Parameter weight configuration

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PredictionError;
use crate::models::Parameter;

/// Relative importance of each parameter. Need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weights {
    pub schumann_resonance: f64,
    pub total_electron_content: f64,
    pub elf_burst_activity: f64,
    pub gravity_field: f64,
}

impl Default for Weights {
    /// Weights used by the scoring algorithm
    fn default() -> Self {
        Self {
            schumann_resonance: 0.35,
            total_electron_content: 0.25,
            elf_burst_activity: 0.25,
            gravity_field: 0.15,
        }
    }
}

impl Weights {
    /// Weights quoted in the dashboard copy and assistant answers:
    /// ELF 45%, TEC 35%, Schumann 15%, gravity 5%.
    pub fn narrative() -> Self {
        Self {
            schumann_resonance: 0.15,
            total_electron_content: 0.35,
            elf_burst_activity: 0.45,
            gravity_field: 0.05,
        }
    }

    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::SchumannResonance => self.schumann_resonance,
            Parameter::TotalElectronContent => self.total_electron_content,
            Parameter::ElfBurstActivity => self.elf_burst_activity,
            Parameter::GravityField => self.gravity_field,
        }
    }

    pub fn total(&self) -> f64 {
        Parameter::ALL.iter().map(|p| self.get(*p)).sum()
    }

    /// Scale the weights so they sum to 1.
    ///
    /// Rejects negative or non-finite weights and an all-zero set.
    pub fn normalized(&self) -> Result<NormalizedWeights, PredictionError> {
        for parameter in Parameter::ALL {
            let value = self.get(parameter);
            if !value.is_finite() || value < 0.0 {
                return Err(PredictionError::InvalidWeight {
                    parameter: parameter.field_name(),
                    value,
                });
            }
        }

        let total = self.total();
        if total <= 0.0 {
            return Err(PredictionError::ZeroTotalWeight);
        }

        Ok(NormalizedWeights(Weights {
            schumann_resonance: self.schumann_resonance / total,
            total_electron_content: self.total_electron_content / total,
            elf_burst_activity: self.elf_burst_activity / total,
            gravity_field: self.gravity_field / total,
        }))
    }
}

/// Weights guaranteed to be non-negative and sum to 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedWeights(Weights);

impl NormalizedWeights {
    pub fn get(&self, parameter: Parameter) -> f64 {
        self.0.get(parameter)
    }
}

/// Named weight preset, selected through configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeightProfile {
    #[default]
    Algorithm,
    Narrative,
}

impl WeightProfile {
    pub fn weights(&self) -> Weights {
        match self {
            WeightProfile::Algorithm => Weights::default(),
            WeightProfile::Narrative => Weights::narrative(),
        }
    }
}

impl FromStr for WeightProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "algorithm" | "default" => Ok(WeightProfile::Algorithm),
            "narrative" => Ok(WeightProfile::Narrative),
            other => Err(format!("unknown weight profile '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sums_to_one(weights: &Weights) {
        let normalized = weights.normalized().unwrap();
        let sum: f64 = Parameter::ALL.iter().map(|p| normalized.get(*p)).sum();
        assert!((sum - 1.0).abs() < 1e-9, "sum was {}", sum);
    }

    #[test]
    fn test_presets_normalize_to_one() {
        assert_sums_to_one(&Weights::default());
        assert_sums_to_one(&Weights::narrative());
    }

    #[test]
    fn test_arbitrary_weights_normalize_to_one() {
        let configs = [
            (1.0, 1.0, 1.0, 1.0),
            (10.0, 0.0, 0.0, 0.0),
            (0.001, 3.5, 7.25, 100.0),
            (2.0, 2.0, 0.0, 6.0),
        ];
        for (s, t, e, g) in configs {
            assert_sums_to_one(&Weights {
                schumann_resonance: s,
                total_electron_content: t,
                elf_burst_activity: e,
                gravity_field: g,
            });
        }
    }

    #[test]
    fn test_normalization_preserves_ratios() {
        let weights = Weights {
            schumann_resonance: 2.0,
            total_electron_content: 1.0,
            elf_burst_activity: 1.0,
            gravity_field: 0.0,
        };
        let normalized = weights.normalized().unwrap();
        assert!((normalized.get(Parameter::SchumannResonance) - 0.5).abs() < 1e-12);
        assert!((normalized.get(Parameter::ElfBurstActivity) - 0.25).abs() < 1e-12);
        assert_eq!(normalized.get(Parameter::GravityField), 0.0);
    }

    #[test]
    fn test_zero_weights_rejected() {
        let weights = Weights {
            schumann_resonance: 0.0,
            total_electron_content: 0.0,
            elf_burst_activity: 0.0,
            gravity_field: 0.0,
        };
        assert_eq!(weights.normalized(), Err(PredictionError::ZeroTotalWeight));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let weights = Weights {
            gravity_field: -0.1,
            ..Weights::default()
        };
        assert!(matches!(
            weights.normalized(),
            Err(PredictionError::InvalidWeight { parameter: "gravityField", .. })
        ));
    }

    #[test]
    fn test_profile_parsing() {
        assert_eq!("narrative".parse::<WeightProfile>(), Ok(WeightProfile::Narrative));
        assert_eq!("Algorithm".parse::<WeightProfile>(), Ok(WeightProfile::Algorithm));
        assert!("random".parse::<WeightProfile>().is_err());
        assert_eq!(WeightProfile::default().weights(), Weights::default());
    }
}
