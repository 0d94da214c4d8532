//! Subgroup attribute selector.

use serde::{Deserialize, Serialize};

use super::case::{AgeBand, DensityCategory, DeviceType};

/// One of the three categorical attributes a corpus can be partitioned by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubgroupAttribute {
    AgeBand,
    DeviceType,
    DensityCategory,
}

impl SubgroupAttribute {
    /// All attributes in the fixed reporting order: age band, device
    /// type, density category.
    pub const ALL: [SubgroupAttribute; 3] = [
        SubgroupAttribute::AgeBand,
        SubgroupAttribute::DeviceType,
        SubgroupAttribute::DensityCategory,
    ];

    /// Kebab-case key used in metric identifiers.
    pub fn key(&self) -> &'static str {
        match self {
            SubgroupAttribute::AgeBand => "age-band",
            SubgroupAttribute::DeviceType => "device-type",
            SubgroupAttribute::DensityCategory => "density-category",
        }
    }

    /// Human-readable attribute name for report output.
    pub fn display_name(&self) -> &'static str {
        match self {
            SubgroupAttribute::AgeBand => "Age Band",
            SubgroupAttribute::DeviceType => "Device Type",
            SubgroupAttribute::DensityCategory => "Density Category",
        }
    }

    /// Wire keys of every possible value of this attribute, in reporting
    /// order. Partition output follows this order.
    pub fn value_keys(&self) -> &'static [&'static str] {
        match self {
            SubgroupAttribute::AgeBand => &["40-49", "50-59", "60-69", "70+"],
            SubgroupAttribute::DeviceType => &["vendor-a", "vendor-b", "vendor-c"],
            SubgroupAttribute::DensityCategory => {
                &["a-fatty", "b-scattered", "c-heterogeneous", "d-dense"]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // value_keys must stay in sync with the enum definitions.
    #[test]
    fn value_keys_match_enum_variants() {
        let band_keys: Vec<&str> = AgeBand::ALL.iter().map(|b| b.as_str()).collect();
        assert_eq!(SubgroupAttribute::AgeBand.value_keys(), band_keys.as_slice());

        let device_keys: Vec<&str> = DeviceType::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(
            SubgroupAttribute::DeviceType.value_keys(),
            device_keys.as_slice()
        );

        let density_keys: Vec<&str> =
            DensityCategory::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(
            SubgroupAttribute::DensityCategory.value_keys(),
            density_keys.as_slice()
        );
    }
}
