// Pure filtering for the FAQ search and the speaker track pills. Views own
// the selected filter state; these functions never touch it.

use crate::content::{FaqEntry, FaqGroup, Speaker};

/// Group filter value meaning "no group restriction".
pub const ALL: &str = "all";

/// Case-insensitive substring match over any of the given fields. An empty
/// or whitespace query matches everything.
pub fn matches_query(fields: &[&str], query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

#[derive(Debug, PartialEq)]
pub struct FilteredGroup<'a> {
    pub category: &'a str,
    pub entries: Vec<&'a FaqEntry>,
}

/// Applies the category filter, then the text query over question and
/// answer. Groups left without entries are dropped. Order is preserved.
pub fn filter_faqs<'a>(
    groups: &'a [FaqGroup],
    category: &str,
    query: &str,
) -> Vec<FilteredGroup<'a>> {
    groups
        .iter()
        .filter(|g| category == ALL || g.category == category)
        .filter_map(|g| {
            let entries: Vec<&FaqEntry> = g
                .entries
                .iter()
                .filter(|e| matches_query(&[e.question, e.answer], query))
                .collect();
            if entries.is_empty() {
                None
            } else {
                Some(FilteredGroup {
                    category: g.category,
                    entries,
                })
            }
        })
        .collect()
}

/// Keeps the speakers on the given track, or all of them for [`ALL`].
pub fn filter_speakers<'a>(
    speakers: impl IntoIterator<Item = &'a Speaker>,
    track: &str,
) -> Vec<&'a Speaker> {
    speakers
        .into_iter()
        .filter(|s| track == ALL || s.track == track)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FAQS;

    const SPEAKER_FIXTURES: &[Speaker] = &[
        Speaker {
            name: "Grace Hopper",
            title: "Engineer",
            company: "Navy Labs",
            topic: "Compilers for Money Movement",
            time: "August 2, 1:00 PM",
            track: "payments",
        },
        Speaker {
            name: "Satoshi N.",
            title: "Researcher",
            company: "Unknown",
            topic: "Settlement Without Middlemen",
            time: "August 2, 2:00 PM",
            track: "web3",
        },
        Speaker {
            name: "Mary Allen",
            title: "Quant",
            company: "Wilkes Capital",
            topic: "Signals in Alternative Data",
            time: "August 3, 10:00 AM",
            track: "investing",
        },
    ];

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_query(&["anything"], ""));
        assert!(matches_query(&["anything"], "   "));
    }

    #[test]
    fn query_matching_is_case_insensitive() {
        assert!(matches_query(&["What is MoneyHacks?"], "moneyhacks"));
        assert!(matches_query(&["completely free"], "FREE"));
        assert!(!matches_query(&["completely free"], "fee waiver"));
    }

    #[test]
    fn clearing_filters_restores_the_original_collection() {
        let cleared = filter_faqs(FAQS, ALL, "");
        assert_eq!(cleared.len(), FAQS.len());
        for (filtered, original) in cleared.iter().zip(FAQS) {
            assert_eq!(filtered.category, original.category);
            assert_eq!(filtered.entries.len(), original.entries.len());
            for (kept, source) in filtered.entries.iter().zip(original.entries) {
                assert_eq!(kept.question, source.question);
            }
        }
    }

    #[test]
    fn category_filter_keeps_one_group_intact() {
        let result = filter_faqs(FAQS, "Prizes", "");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].category, "Prizes");
        assert_eq!(result[0].entries.len(), 3);
    }

    #[test]
    fn retained_entries_all_match_the_query() {
        let result = filter_faqs(FAQS, ALL, "prize");
        assert!(!result.is_empty());
        for group in &result {
            for entry in &group.entries {
                assert!(matches_query(&[entry.question, entry.answer], "prize"));
            }
        }
    }

    #[test]
    fn filtered_result_is_a_subset_of_the_input() {
        let result = filter_faqs(FAQS, ALL, "hackathon");
        for group in &result {
            let source = FAQS
                .iter()
                .find(|g| g.category == group.category)
                .expect("filtered group must come from the input");
            for entry in &group.entries {
                assert!(source.entries.iter().any(|e| std::ptr::eq(e, *entry)));
            }
        }
    }

    #[test]
    fn groups_without_matches_are_dropped() {
        let result = filter_faqs(FAQS, ALL, "sleeping bag");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].category, "Logistics");
        assert_eq!(result[0].entries.len(), 1);
    }

    #[test]
    fn no_match_yields_an_empty_result() {
        assert!(filter_faqs(FAQS, ALL, "blockchain zebra").is_empty());
        assert!(filter_faqs(FAQS, "General", "sleeping bag").is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let once = filter_faqs(FAQS, "Technical", "code");
        let twice = filter_faqs(FAQS, "Technical", "code");
        assert_eq!(once, twice);
        // Re-applying the predicate to the survivors keeps all of them.
        for group in &once {
            for entry in &group.entries {
                assert!(matches_query(&[entry.question, entry.answer], "code"));
            }
        }
    }

    #[test]
    fn speaker_filter_by_track() {
        let payments = filter_speakers(SPEAKER_FIXTURES, "payments");
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].name, "Grace Hopper");

        let everyone = filter_speakers(SPEAKER_FIXTURES, ALL);
        assert_eq!(everyone.len(), SPEAKER_FIXTURES.len());

        assert!(filter_speakers(SPEAKER_FIXTURES, "wildcard").is_empty());
    }
}
