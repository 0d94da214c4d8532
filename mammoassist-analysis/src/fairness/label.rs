//! Subgroup label formatting.

/// Format a hyphenated or underscored wire key as a human-readable
/// label: each segment is capitalized and segments are joined with
/// spaces (`"vendor-a"` -> `"Vendor A"`, `"b-scattered"` ->
/// `"B Scattered"`). Keys without separators pass through with their
/// first character capitalized (`"70+"` -> `"70+"`).
pub fn format_subgroup_label(key: &str) -> String {
    key.split(['-', '_'])
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_key_becomes_title_case() {
        assert_eq!(format_subgroup_label("vendor-a"), "Vendor A");
        assert_eq!(format_subgroup_label("b-scattered"), "B Scattered");
    }

    #[test]
    fn underscores_are_separators_too() {
        assert_eq!(format_subgroup_label("needs_review"), "Needs Review");
    }

    #[test]
    fn separator_free_key_passes_through() {
        assert_eq!(format_subgroup_label("70+"), "70+");
    }
}
