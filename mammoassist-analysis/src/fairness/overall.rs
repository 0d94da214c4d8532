//! Population-wide statistics aggregator.

use serde::{Deserialize, Serialize};

use mammoassist_core::types::{Case, GroundTruth};

/// Corpus-wide counters and confusion-matrix statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct OverallStatistics {
    pub total: usize,
    /// Cases with `risk_score > threshold`.
    pub high_risk: usize,
    /// Cases with the uncertainty flag set.
    pub uncertain: usize,
    pub avg_confidence: f64,
    /// (TP + TN) / total. Note the denominator counts every case,
    /// including those without ground truth, matching the upstream
    /// dashboard contract.
    pub accuracy: f64,
    /// TP / (TP + FP); 0.0 when the denominator is 0.
    pub precision: f64,
    /// TP / (TP + FN); 0.0 when the denominator is 0.
    pub recall: f64,
    pub true_positives: usize,
    pub false_positives: usize,
    pub true_negatives: usize,
    pub false_negatives: usize,
}

/// Aggregate the whole corpus.
///
/// Cases without ground truth are counted in `total`, `high_risk`,
/// `uncertain`, and `avg_confidence`, but land in none of the four
/// confusion-matrix buckets, so `TP+FP+TN+FN` equals the number of
/// labeled cases. An empty corpus yields an all-zero record.
pub fn overall_statistics(cases: &[Case], threshold: u8) -> OverallStatistics {
    let total = cases.len();
    if total == 0 {
        return OverallStatistics::default();
    }

    let mut high_risk = 0usize;
    let mut uncertain = 0usize;
    let mut confidence_sum = 0.0f64;
    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut tn = 0usize;
    let mut fn_ = 0usize;

    for case in cases {
        let selected = case.risk_score > threshold;
        if selected {
            high_risk += 1;
        }
        if case.uncertainty_flag {
            uncertain += 1;
        }
        confidence_sum += case.confidence;

        match (selected, case.ground_truth) {
            (true, Some(GroundTruth::Malignant)) => tp += 1,
            (true, Some(GroundTruth::Benign)) => fp += 1,
            (false, Some(GroundTruth::Benign)) => tn += 1,
            (false, Some(GroundTruth::Malignant)) => fn_ += 1,
            (_, None) => {}
        }
    }

    OverallStatistics {
        total,
        high_risk,
        uncertain,
        avg_confidence: confidence_sum / total as f64,
        accuracy: (tp + tn) as f64 / total as f64,
        precision: checked_ratio(tp, tp + fp),
        recall: checked_ratio(tp, tp + fn_),
        true_positives: tp,
        false_positives: fp,
        true_negatives: tn,
        false_negatives: fn_,
    }
}

fn checked_ratio(numerator: usize, denominator: usize) -> f64 {
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

    fn case(risk: u8, truth: Option<GroundTruth>) -> Case {
        Case {
            id: "c".to_string(),
            created_at: "2025-06-01T09:00:00Z".to_string(),
            status: CaseStatus::Pending,
            risk_score: risk,
            confidence: 0.8,
            uncertainty_flag: false,
            patient_masked_id: "pt".to_string(),
            modality: Modality::Mammogram,
            notes: String::new(),
            age_band: AgeBand::Sixties,
            device_type: DeviceType::VendorC,
            density_category: DensityCategory::Heterogeneous,
            ground_truth: truth,
        }
    }

    #[test]
    fn empty_corpus_is_all_zero() {
        let stats = overall_statistics(&[], 75);
        assert_eq!(stats, OverallStatistics::default());
    }

    #[test]
    fn unlabeled_cases_stay_out_of_the_confusion_matrix() {
        let cases = vec![
            case(90, None),
            case(90, Some(GroundTruth::Malignant)),
            case(10, Some(GroundTruth::Benign)),
        ];
        let stats = overall_statistics(&cases, 75);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.high_risk, 2);
        let matrix = stats.true_positives
            + stats.false_positives
            + stats.true_negatives
            + stats.false_negatives;
        assert_eq!(matrix, 2);
    }

    #[test]
    fn precision_zero_when_nothing_selected() {
        let cases = vec![case(10, Some(GroundTruth::Malignant))];
        let stats = overall_statistics(&cases, 75);
        assert_eq!(stats.precision, 0.0);
        assert_eq!(stats.recall, 0.0);
        assert_eq!(stats.false_negatives, 1);
    }
}
