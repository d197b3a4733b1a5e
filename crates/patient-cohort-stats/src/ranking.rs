//! Frequency ranking of free-text tags
//!
//! Tags are compared as exact, case-sensitive strings: "Diabetes" and
//! "diabetes" are two labels.

use crate::aggregate::percent_of;
use crate::snapshot::RankedLabel;
use indexmap::IndexMap;

/// Rank tags by how many records carry them.
///
/// `tag_sets` yields one set of tags per record; `total` is the cohort size
/// used for percentages. Ordered by descending count, ties in first-seen
/// order, truncated to `limit`. Empty tags are skipped.
pub fn rank_tags<'a, I, T>(tag_sets: I, total: usize, limit: usize) -> Vec<RankedLabel>
where
    I: IntoIterator<Item = T>,
    T: IntoIterator<Item = &'a str>,
{
    // IndexMap keeps first-seen order for the stable sort below
    let mut counts: IndexMap<&'a str, usize> = IndexMap::new();
    for tags in tag_sets {
        for tag in tags {
            if !tag.is_empty() {
                *counts.entry(tag).or_insert(0) += 1;
            }
        }
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|(_, a), (_, b)| b.cmp(a));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(label, count)| RankedLabel {
            label: label.to_string(),
            count,
            percent: percent_of(count, total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(ranked: &[RankedLabel]) -> Vec<(&str, usize)> {
        ranked.iter().map(|r| (r.label.as_str(), r.count)).collect()
    }

    #[test]
    fn test_case_sensitive_labels_tie_by_first_seen() {
        let sets = [vec!["Diabetes"], vec!["diabetes"], vec!["Asthma"]];
        let ranked = rank_tags(sets.iter().map(|s| s.iter().copied()), 3, 5);
        assert_eq!(labels(&ranked), vec![("Diabetes", 1), ("diabetes", 1), ("Asthma", 1)]);

        let top = rank_tags(sets.iter().map(|s| s.iter().copied()), 3, 1);
        assert_eq!(labels(&top), vec![("Diabetes", 1)]);
    }

    #[test]
    fn test_descending_count() {
        let sets = [
            vec!["Asthma"],
            vec!["Hypertension", "Asthma"],
            vec!["Hypertension", "COPD"],
            vec!["Hypertension"],
        ];
        let ranked = rank_tags(sets.iter().map(|s| s.iter().copied()), 4, 5);
        assert_eq!(labels(&ranked), vec![("Hypertension", 3), ("Asthma", 2), ("COPD", 1)]);
        assert_eq!(ranked[0].percent, 75.0);
        assert_eq!(ranked[2].percent, 25.0);
    }

    #[test]
    fn test_limit_zero_and_empty() {
        let sets = [vec!["Asthma"]];
        assert!(rank_tags(sets.iter().map(|s| s.iter().copied()), 1, 0).is_empty());

        let none: [Vec<&str>; 0] = [];
        assert!(rank_tags(none.iter().map(|s| s.iter().copied()), 0, 5).is_empty());

        let blank = [vec![""]];
        assert!(rank_tags(blank.iter().map(|s| s.iter().copied()), 1, 5).is_empty());
    }
}
