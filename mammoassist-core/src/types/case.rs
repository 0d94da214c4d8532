//! The screening case record and its categorical attributes.
//!
//! A `Case` is a read-only input to the fairness engine. Risk scores live
//! on a 0–100 integer scale, confidences on [0, 1]. The three subgroup
//! attributes are closed enumerations: every case maps to exactly one
//! variant per attribute, so partitions over a corpus are total and
//! disjoint.

use serde::{Deserialize, Serialize};

use super::attribute::SubgroupAttribute;
use crate::errors::MetricsError;

/// Review lifecycle state of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStatus {
    Pending,
    InReview,
    Finalized,
    NeedsSecondReview,
}

/// Imaging modality the case was acquired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modality {
    Mammogram,
    Tomosynthesis,
    Ultrasound,
}

/// Simulated ground-truth label, used only for offline fairness
/// evaluation. Never shown to the reviewing user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroundTruth {
    Benign,
    Malignant,
}

/// Patient age band at screening time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    #[serde(rename = "40-49")]
    Forties,
    #[serde(rename = "50-59")]
    Fifties,
    #[serde(rename = "60-69")]
    Sixties,
    #[serde(rename = "70+")]
    SeventyPlus,
}

/// Acquisition device vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceType {
    VendorA,
    VendorB,
    VendorC,
}

/// BI-RADS-style breast tissue density category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DensityCategory {
    #[serde(rename = "a-fatty")]
    Fatty,
    #[serde(rename = "b-scattered")]
    Scattered,
    #[serde(rename = "c-heterogeneous")]
    Heterogeneous,
    #[serde(rename = "d-dense")]
    Dense,
}

/// A single screening case as supplied by the corpus provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub id: String,
    /// RFC 3339 timestamp, supplied by the data source.
    pub created_at: String,
    pub status: CaseStatus,
    /// Model-predicted malignancy risk on a 0–100 scale.
    pub risk_score: u8,
    /// Model self-reported confidence in [0, 1].
    pub confidence: f64,
    pub uncertainty_flag: bool,
    pub patient_masked_id: String,
    pub modality: Modality,
    pub notes: String,
    pub age_band: AgeBand,
    pub device_type: DeviceType,
    pub density_category: DensityCategory,
    /// Absent when no simulated label exists; such cases contribute to
    /// selection/confidence statistics but to none of TP/FP/TN/FN.
    pub ground_truth: Option<GroundTruth>,
}

impl Case {
    /// The wire key of this case's value for the given subgroup attribute
    /// (e.g. `"40-49"`, `"vendor-a"`, `"c-heterogeneous"`).
    pub fn subgroup_key(&self, attribute: SubgroupAttribute) -> &'static str {
        match attribute {
            SubgroupAttribute::AgeBand => self.age_band.as_str(),
            SubgroupAttribute::DeviceType => self.device_type.as_str(),
            SubgroupAttribute::DensityCategory => self.density_category.as_str(),
        }
    }

    /// Check numeric field ranges. Corpus providers call this on ingest;
    /// the engine itself never rejects a case.
    pub fn validate(&self) -> Result<(), MetricsError> {
        if self.risk_score > 100 {
            return Err(MetricsError::OutOfRangeValue {
                case_id: self.id.clone(),
                field: "risk_score",
                value: f64::from(self.risk_score),
            });
        }
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(MetricsError::OutOfRangeValue {
                case_id: self.id.clone(),
                field: "confidence",
                value: self.confidence,
            });
        }
        Ok(())
    }
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Pending => "pending",
            CaseStatus::InReview => "in-review",
            CaseStatus::Finalized => "finalized",
            CaseStatus::NeedsSecondReview => "needs-second-review",
        }
    }
}

impl AgeBand {
    /// All bands in reporting order.
    pub const ALL: [AgeBand; 4] = [
        AgeBand::Forties,
        AgeBand::Fifties,
        AgeBand::Sixties,
        AgeBand::SeventyPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBand::Forties => "40-49",
            AgeBand::Fifties => "50-59",
            AgeBand::Sixties => "60-69",
            AgeBand::SeventyPlus => "70+",
        }
    }
}

impl DeviceType {
    /// All vendors in reporting order.
    pub const ALL: [DeviceType; 3] = [DeviceType::VendorA, DeviceType::VendorB, DeviceType::VendorC];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::VendorA => "vendor-a",
            DeviceType::VendorB => "vendor-b",
            DeviceType::VendorC => "vendor-c",
        }
    }
}

impl DensityCategory {
    /// All categories in reporting order.
    pub const ALL: [DensityCategory; 4] = [
        DensityCategory::Fatty,
        DensityCategory::Scattered,
        DensityCategory::Heterogeneous,
        DensityCategory::Dense,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DensityCategory::Fatty => "a-fatty",
            DensityCategory::Scattered => "b-scattered",
            DensityCategory::Heterogeneous => "c-heterogeneous",
            DensityCategory::Dense => "d-dense",
        }
    }
}
