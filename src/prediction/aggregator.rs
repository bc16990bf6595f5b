//! Weighted multi-parameter aggregation

use chrono::Utc;

use super::processors::{
    process_elf_burst_activity, process_gravity_field, process_schumann_resonance,
    process_total_electron_content,
};
use super::{PredictionError, Weights};
use crate::models::{
    AlertLevel, ContributingFactors, Parameter, ParameterReadings, PredictionRecord,
    ProcessedData,
};

/// Combine sub-scores into a prediction.
///
/// Parameters missing from `processed` are skipped; their weight is not
/// redistributed. When the weighted score is zero every contributing
/// factor is zero.
pub fn calculate_prediction_score(
    processed: &ProcessedData,
    weights: &Weights,
) -> Result<PredictionRecord, PredictionError> {
    let normalized = weights.normalized()?;

    let mut score = 0.0;
    let mut confidence = 0.0;
    let mut shares = ContributingFactors::default();

    for parameter in Parameter::ALL {
        let Some(sub) = processed.get(parameter) else {
            continue;
        };
        let weight = normalized.get(parameter);
        let weighted = sub.anomaly_score() * weight;

        score += weighted;
        confidence += sub.confidence() * weight;
        shares.set(parameter, weighted);
    }

    // Float error can push a full-weight sum just past 1
    let score = score.clamp(0.0, 1.0);
    let confidence = confidence.clamp(0.0, 1.0);

    let contributing_factors = if score > 0.0 {
        let mut factors = ContributingFactors::default();
        for parameter in Parameter::ALL {
            factors.set(parameter, shares.get(parameter) / score);
        }
        factors
    } else {
        ContributingFactors::default()
    };

    debug_assert!(score == 0.0 || (contributing_factors.total() - 1.0).abs() < 1e-9);

    let alert_level = AlertLevel::from_score(score);
    tracing::debug!(
        score,
        confidence,
        alert_level = alert_level.as_str(),
        parameters = processed.present_count(),
        "Prediction score calculated"
    );

    Ok(PredictionRecord {
        score,
        confidence,
        alert_level,
        timestamp: Utc::now(),
        contributing_factors,
        processed_data: None,
    })
}

/// Full pipeline: process each available reading against its baseline,
/// aggregate, and attach the sub-scores to the record.
pub fn generate_prediction(
    raw: &ParameterReadings,
    baseline: &ParameterReadings,
    weights: &Weights,
) -> Result<PredictionRecord, PredictionError> {
    let processed = ProcessedData {
        schumann_resonance: raw
            .schumann_resonance
            .as_ref()
            .map(|r| process_schumann_resonance(r, baseline.schumann_resonance.as_ref())),
        total_electron_content: raw
            .total_electron_content
            .as_ref()
            .map(|r| process_total_electron_content(r, baseline.total_electron_content.as_ref())),
        elf_burst_activity: raw
            .elf_burst_activity
            .as_ref()
            .map(|r| process_elf_burst_activity(r, baseline.elf_burst_activity.as_ref())),
        gravity_field: raw
            .gravity_field
            .as_ref()
            .map(|r| process_gravity_field(r, baseline.gravity_field.as_ref())),
    };

    let mut record = calculate_prediction_score(&processed, weights)?;
    record.processed_data = Some(processed);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ElfReading, ElfScore, GravityReading, GravityScore, SchumannReading, SchumannScore,
        TecReading, TecScore,
    };
    use tokio_test::{assert_err, assert_ok};

    fn scores(values: [(f64, f64); 4]) -> ProcessedData {
        let [s, t, e, g] = values;
        ProcessedData {
            schumann_resonance: Some(SchumannScore {
                anomaly_score: s.0,
                confidence: s.1,
                ..Default::default()
            }),
            total_electron_content: Some(TecScore {
                anomaly_score: t.0,
                confidence: t.1,
                ..Default::default()
            }),
            elf_burst_activity: Some(ElfScore {
                anomaly_score: e.0,
                confidence: e.1,
                ..Default::default()
            }),
            gravity_field: Some(GravityScore {
                anomaly_score: g.0,
                confidence: g.1,
                ..Default::default()
            }),
        }
    }

    fn moderate() -> ProcessedData {
        scores([(0.6, 0.8), (0.7, 0.8), (0.8, 0.8), (0.3, 0.7)])
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_no_anomalies() {
        let data = scores([(0.0, 0.9); 4]);
        let record = assert_ok!(calculate_prediction_score(&data, &Weights::default()));

        assert_eq!(record.score, 0.0);
        assert!(close(record.confidence, 0.9));
        assert_eq!(record.alert_level, AlertLevel::None);
        assert_eq!(record.contributing_factors, ContributingFactors::default());
        assert!(record.processed_data.is_none());
    }

    #[test]
    fn test_moderate_anomalies_algorithm_weights() {
        let record = calculate_prediction_score(&moderate(), &Weights::default()).unwrap();

        // 0.6*0.35 + 0.7*0.25 + 0.8*0.25 + 0.3*0.15
        assert!(close(record.score, 0.63), "score was {}", record.score);
        // 0.8*0.85 + 0.7*0.15
        assert!(close(record.confidence, 0.785));
        assert_eq!(record.alert_level, AlertLevel::Low);
    }

    #[test]
    fn test_moderate_anomalies_narrative_weights() {
        let record = calculate_prediction_score(&moderate(), &Weights::narrative()).unwrap();

        // 0.6*0.15 + 0.7*0.35 + 0.8*0.45 + 0.3*0.05
        assert!(close(record.score, 0.71), "score was {}", record.score);
        assert_eq!(record.alert_level, AlertLevel::Medium);
    }

    #[test]
    fn test_high_anomalies() {
        let data = scores([(0.8, 0.9), (0.9, 0.9), (0.9, 0.9), (0.7, 0.8)]);
        let record = calculate_prediction_score(&data, &Weights::default()).unwrap();

        // 0.28 + 0.225 + 0.225 + 0.105
        assert!(close(record.score, 0.835));
        assert_eq!(record.alert_level, AlertLevel::High);
    }

    #[test]
    fn test_contributing_factors_sum_to_one() {
        let record = calculate_prediction_score(&moderate(), &Weights::default()).unwrap();
        let factors = record.contributing_factors;

        assert!(close(factors.total(), 1.0));
        assert!(close(factors.schumann_resonance, 0.21 / 0.63));
        assert!(close(factors.gravity_field, 0.045 / 0.63));
    }

    #[test]
    fn test_each_parameter_may_be_missing() {
        for missing in Parameter::ALL {
            let mut data = moderate();
            match missing {
                Parameter::SchumannResonance => data.schumann_resonance = None,
                Parameter::TotalElectronContent => data.total_electron_content = None,
                Parameter::ElfBurstActivity => data.elf_burst_activity = None,
                Parameter::GravityField => data.gravity_field = None,
            }

            let record = assert_ok!(calculate_prediction_score(&data, &Weights::default()));
            assert!(record.score > 0.0 && record.score <= 1.0);
            assert_eq!(record.contributing_factors.get(missing), 0.0);
            assert!(close(record.contributing_factors.total(), 1.0));
        }
    }

    #[test]
    fn test_missing_weight_is_not_redistributed() {
        let data = ProcessedData {
            elf_burst_activity: Some(ElfScore {
                anomaly_score: 1.0,
                confidence: 1.0,
                ..Default::default()
            }),
            ..Default::default()
        };
        let record = calculate_prediction_score(&data, &Weights::default()).unwrap();

        assert!(close(record.score, 0.25));
        assert!(close(record.contributing_factors.elf_burst_activity, 1.0));
    }

    #[test]
    fn test_empty_input() {
        let record = calculate_prediction_score(&ProcessedData::default(), &Weights::default())
            .unwrap();
        assert_eq!(record.score, 0.0);
        assert_eq!(record.confidence, 0.0);
        assert_eq!(record.alert_level, AlertLevel::None);
    }

    #[test]
    fn test_zero_weights_are_an_error() {
        let weights = Weights {
            schumann_resonance: 0.0,
            total_electron_content: 0.0,
            elf_burst_activity: 0.0,
            gravity_field: 0.0,
        };
        let err = assert_err!(calculate_prediction_score(&moderate(), &weights));
        assert_eq!(err, PredictionError::ZeroTotalWeight);
    }

    #[test]
    fn test_full_scores_stay_in_range() {
        let configs = [
            (0.1, 0.2, 0.3, 0.7),
            (1.0 / 3.0, 1.0 / 7.0, 1.0 / 11.0, 1.0 / 13.0),
            (0.35, 0.25, 0.25, 0.15),
            (1e-6, 1e6, 0.3, 0.7),
        ];
        for (s, t, e, g) in configs {
            let weights = Weights {
                schumann_resonance: s,
                total_electron_content: t,
                elf_burst_activity: e,
                gravity_field: g,
            };
            let record = assert_ok!(calculate_prediction_score(
                &scores([(1.0, 1.0); 4]),
                &weights
            ));
            assert!(record.score <= 1.0 && close(record.score, 1.0), "score {}", record.score);
            assert!(record.confidence <= 1.0, "confidence {}", record.confidence);
            assert_eq!(record.alert_level, AlertLevel::Critical);
        }
    }

    #[test]
    fn test_generate_prediction_attaches_processed_data() {
        let raw = ParameterReadings {
            schumann_resonance: Some(SchumannReading {
                frequency: 8.2,
                amplitude: 1.5,
            }),
            total_electron_content: Some(TecReading {
                tec_value: 35.0,
                region: None,
            }),
            elf_burst_activity: Some(ElfReading {
                burst_intensity: 15.0,
                ..Default::default()
            }),
            gravity_field: Some(GravityReading {
                gravity_value: 0.8,
                region: Some("Western US".to_string()),
            }),
        };
        let baseline = ParameterReadings {
            schumann_resonance: Some(SchumannReading {
                frequency: 7.83,
                amplitude: 1.0,
            }),
            ..Default::default()
        };

        let record = generate_prediction(&raw, &baseline, &Weights::default()).unwrap();
        let processed = record.processed_data.expect("processed data attached");

        assert_eq!(processed.present_count(), 4);
        // Processors are placeholders: everything aggregates to zero.
        assert_eq!(record.score, 0.0);
        assert_eq!(record.alert_level, AlertLevel::None);
    }

    #[test]
    fn test_generate_prediction_skips_missing_readings() {
        let raw = ParameterReadings {
            total_electron_content: Some(TecReading::default()),
            ..Default::default()
        };
        let record =
            generate_prediction(&raw, &ParameterReadings::default(), &Weights::default()).unwrap();

        let processed = record.processed_data.unwrap();
        assert_eq!(processed.present_count(), 1);
        assert!(processed.total_electron_content.is_some());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = calculate_prediction_score(&moderate(), &Weights::default()).unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["alertLevel"], "low");
        assert!(json["contributingFactors"]["elfBurstActivity"].is_number());
        assert!(json.get("processedData").is_none());
    }
}
