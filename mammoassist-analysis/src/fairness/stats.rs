//! Confusion-matrix-derived statistics for a case set.

use serde::{Deserialize, Serialize};

use mammoassist_core::types::{Case, GroundTruth};

/// Rates for one case set against a fixed decision threshold.
/// Pure function of the input; recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubgroupStats {
    /// Fraction of cases with `risk_score > threshold`.
    pub selection_rate: f64,
    /// False positives / benign cases; 0.0 when there are no benign cases.
    pub false_positive_rate: f64,
    /// False negatives / malignant cases; 0.0 when there are no
    /// malignant cases.
    pub false_negative_rate: f64,
    /// Arithmetic mean of confidence over all cases in the set.
    pub average_confidence: f64,
}

/// Compute rates for a case set.
///
/// Returns `None` for the empty set — the mean confidence would be
/// undefined. Callers partition first and skip empty buckets, so the
/// guard only trips on an empty corpus.
///
/// A case is a false positive iff `risk_score > threshold` and the
/// ground truth is benign; a false negative iff `risk_score <=
/// threshold` and the ground truth is malignant. Cases without ground
/// truth contribute to selection rate and mean confidence only. Both
/// error-rate denominators are special-cased to 0.0 rather than
/// faulting.
pub fn subgroup_stats(cases: &[&Case], threshold: u8) -> Option<SubgroupStats> {
    if cases.is_empty() {
        return None;
    }
    let total = cases.len() as f64;

    let mut high_risk = 0usize;
    let mut benign = 0usize;
    let mut malignant = 0usize;
    let mut false_positives = 0usize;
    let mut false_negatives = 0usize;
    let mut confidence_sum = 0.0f64;

    for case in cases {
        let selected = case.risk_score > threshold;
        if selected {
            high_risk += 1;
        }
        confidence_sum += case.confidence;

        match case.ground_truth {
            Some(GroundTruth::Benign) => {
                benign += 1;
                if selected {
                    false_positives += 1;
                }
            }
            Some(GroundTruth::Malignant) => {
                malignant += 1;
                if !selected {
                    false_negatives += 1;
                }
            }
            None => {}
        }
    }

    Some(SubgroupStats {
        selection_rate: high_risk as f64 / total,
        false_positive_rate: rate(false_positives, benign),
        false_negative_rate: rate(false_negatives, malignant),
        average_confidence: confidence_sum / total,
    })
}

/// Numerator over denominator, 0.0 when the denominator is 0.
fn rate(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mammoassist_core::types::{
        AgeBand, CaseStatus, DensityCategory, DeviceType, Modality,
    };

    fn case(risk: u8, confidence: f64, truth: Option<GroundTruth>) -> Case {
        Case {
            id: "c".to_string(),
            created_at: "2025-06-01T09:00:00Z".to_string(),
            status: CaseStatus::Pending,
            risk_score: risk,
            confidence,
            uncertainty_flag: false,
            patient_masked_id: "pt".to_string(),
            modality: Modality::Mammogram,
            notes: String::new(),
            age_band: AgeBand::Fifties,
            device_type: DeviceType::VendorB,
            density_category: DensityCategory::Dense,
            ground_truth: truth,
        }
    }

    #[test]
    fn empty_set_is_none() {
        assert!(subgroup_stats(&[], 75).is_none());
    }

    #[test]
    fn threshold_is_strict() {
        // risk == threshold is not selected
        let at = case(75, 0.9, None);
        let above = case(76, 0.9, None);
        let stats = subgroup_stats(&[&at, &above], 75).unwrap();
        assert_eq!(stats.selection_rate, 0.5);
    }

    #[test]
    fn zero_benign_cases_gives_zero_fp_rate() {
        let c1 = case(90, 0.9, Some(GroundTruth::Malignant));
        let c2 = case(40, 0.7, None);
        let stats = subgroup_stats(&[&c1, &c2], 75).unwrap();
        assert_eq!(stats.false_positive_rate, 0.0);
    }

    #[test]
    fn zero_malignant_cases_gives_zero_fn_rate() {
        let c1 = case(90, 0.9, Some(GroundTruth::Benign));
        let stats = subgroup_stats(&[&c1], 75).unwrap();
        assert_eq!(stats.false_negative_rate, 0.0);
        assert_eq!(stats.false_positive_rate, 1.0);
    }

    #[test]
    fn average_confidence_is_arithmetic_mean() {
        let c1 = case(10, 0.5, None);
        let c2 = case(20, 0.9, None);
        let stats = subgroup_stats(&[&c1, &c2], 75).unwrap();
        assert!((stats.average_confidence - 0.7).abs() < 1e-12);
    }

    #[test]
    fn missing_ground_truth_skips_error_rates() {
        // High-risk case with no label: counted in selection, not in FP.
        let c1 = case(90, 0.8, None);
        let c2 = case(90, 0.8, Some(GroundTruth::Benign));
        let stats = subgroup_stats(&[&c1, &c2], 75).unwrap();
        assert_eq!(stats.selection_rate, 1.0);
        assert_eq!(stats.false_positive_rate, 1.0); // 1 FP / 1 benign
    }
}
