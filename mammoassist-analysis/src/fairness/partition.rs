//! Subgroup partitioner.

use rustc_hash::FxHashMap;

use mammoassist_core::types::{Case, SubgroupAttribute};

/// Partition a corpus by one subgroup attribute.
///
/// Returns `(value key, cases)` pairs for every observed value of the
/// attribute, in the attribute's fixed reporting order. Each bucket
/// holds case references in corpus order. Unobserved values produce no
/// bucket, so no bucket is ever empty; an empty corpus yields an empty
/// partition.
///
/// The partition is total and disjoint: every case lands in exactly one
/// bucket.
pub fn partition_by<'a>(
    cases: &'a [Case],
    attribute: SubgroupAttribute,
) -> Vec<(&'static str, Vec<&'a Case>)> {
    let mut buckets: FxHashMap<&'static str, Vec<&'a Case>> = FxHashMap::default();
    for case in cases {
        buckets.entry(case.subgroup_key(attribute)).or_default().push(case);
    }

    attribute
        .value_keys()
        .iter()
        .filter_map(|key| buckets.remove(key).map(|bucket| (*key, bucket)))
        .collect()
}
