//! Merge policy for candidates coming from several sources.

use std::collections::HashSet;

/// Case-insensitive dedup keeping the first-seen spelling and order.
/// Blank candidates are dropped.
pub fn merge_translations<I>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for candidate in candidates {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            continue;
        }
        if seen.insert(candidate.to_lowercase()) {
            merged.push(candidate.to_string());
        }
    }

    merged
}

/// Keep back-translations that differ from the looked-up word and from each other.
///
/// Back-translation only approximates synonymy; results are not lexically checked.
pub fn collect_synonyms<I>(word: &str, back_translations: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let word = word.trim().to_lowercase();
    merge_translations(back_translations)
        .into_iter()
        .filter(|candidate| candidate.to_lowercase() != word)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_merge_dedups_case_insensitively_in_first_seen_order() {
        let merged = merge_translations(strings(&[
            "maison", "Domicile", "MAISON", "foyer", "domicile", "Maison",
        ]));
        assert_eq!(merged, strings(&["maison", "Domicile", "foyer"]));
    }

    #[test]
    fn test_merge_drops_blank_candidates() {
        let merged = merge_translations(strings(&["", "  ", "chien", " chien "]));
        assert_eq!(merged, strings(&["chien"]));
    }

    #[test]
    fn test_merge_each_lowercase_form_once() {
        let merged = merge_translations(strings(&["a", "A", "b", "B", "a", "c"]));
        let lowered: Vec<String> = merged.iter().map(|s| s.to_lowercase()).collect();
        let unique: HashSet<&String> = lowered.iter().collect();
        assert_eq!(lowered.len(), unique.len());
        assert_eq!(lowered, strings(&["a", "b", "c"]));
    }

    #[test]
    fn test_synonyms_exclude_source_word() {
        let synonyms = collect_synonyms(
            "Haus",
            strings(&["haus", "Gebäude", "HAUS", "Wohnung", "gebäude"]),
        );
        assert_eq!(synonyms, strings(&["Gebäude", "Wohnung"]));
        assert!(synonyms.iter().all(|s| s.to_lowercase() != "haus"));
    }
}
