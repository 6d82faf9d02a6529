//! Client table filtering.
//!
//! A stable filter over the fixture list: records are kept in their
//! original order and the source slice is never touched.

use super::types::{ClientRecord, FilterCriteria, FilterOutcome};

/// Return the records that satisfy every criterion, in input order.
pub fn filter_clients(records: &[ClientRecord], criteria: &FilterCriteria) -> Vec<ClientRecord> {
    let needle = criteria.search_term.to_lowercase();

    records
        .iter()
        .filter(|r| matches_search(r, &needle))
        .filter(|r| criteria.stage.matches(&r.stage))
        .filter(|r| criteria.contact_method.matches(&r.last_contact_method))
        .cloned()
        .collect()
}

/// Filter and keep the unfiltered count alongside for empty-state display.
pub fn filter_with_outcome(records: &[ClientRecord], criteria: &FilterCriteria) -> FilterOutcome {
    FilterOutcome {
        clients: filter_clients(records, criteria),
        total: records.len(),
    }
}

/// `needle` must already be lowercased.
fn matches_search(record: &ClientRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.name.to_lowercase().contains(needle) || record.contact.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::types::{ContactMethod, Selection, Stage};
    use crate::fixtures::medical_clients;

    fn names(records: &[ClientRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_unfiltered_criteria_is_identity() {
        let records = medical_clients();
        let result = filter_clients(&records, &FilterCriteria::default());
        assert_eq!(result, records);
    }

    #[test]
    fn test_stage_filter_keeps_original_order() {
        let records = medical_clients();
        let criteria = FilterCriteria {
            stage: Selection::Only(Stage::Intent),
            ..Default::default()
        };
        let result = filter_clients(&records, &criteria);
        assert_eq!(names(&result), vec!["北京协和医院", "广州中山医院"]);
    }

    #[test]
    fn test_search_matches_contact_case_insensitively() {
        let records = medical_clients();
        let criteria = FilterCriteria {
            search_term: "ZHANG".to_string(),
            ..Default::default()
        };
        let result = filter_clients(&records, &criteria);
        assert!(!result.is_empty());
        for r in &result {
            assert!(
                r.contact.to_lowercase().contains("zhang")
                    || r.name.to_lowercase().contains("zhang"),
                "Unexpected match: {}",
                r.name
            );
        }
    }

    #[test]
    fn test_search_matches_name_substring() {
        let records = medical_clients();
        let criteria = FilterCriteria {
            search_term: "协和".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&filter_clients(&records, &criteria)), vec!["北京协和医院"]);
    }

    #[test]
    fn test_unmatched_search_is_empty_regardless_of_other_criteria() {
        let records = medical_clients();
        for stage in [Selection::All, Selection::Only(Stage::Interest)] {
            for method in [Selection::All, Selection::Only(ContactMethod::Phone)] {
                let criteria = FilterCriteria {
                    search_term: "不存在的客户".to_string(),
                    stage,
                    contact_method: method,
                };
                assert!(filter_clients(&records, &criteria).is_empty());
            }
        }
    }

    #[test]
    fn test_all_criteria_are_conjunctive() {
        let records = medical_clients();
        let intent_visit = FilterCriteria {
            search_term: String::new(),
            stage: Selection::Only(Stage::Intent),
            contact_method: Selection::Only(ContactMethod::Visit),
        };
        for r in filter_clients(&records, &intent_visit) {
            assert_eq!(r.stage, Stage::Intent);
            assert_eq!(r.last_contact_method, ContactMethod::Visit);
        }
    }

    #[test]
    fn test_output_is_ordered_subset_for_every_combination() {
        let records = medical_clients();
        let stages = std::iter::once(Selection::All).chain(Stage::ALL.map(Selection::Only));
        for stage in stages {
            let methods =
                std::iter::once(Selection::All).chain(ContactMethod::ALL.map(Selection::Only));
            for contact_method in methods {
                let criteria = FilterCriteria {
                    search_term: String::new(),
                    stage,
                    contact_method,
                };
                let result = filter_clients(&records, &criteria);
                let positions: Vec<usize> = result
                    .iter()
                    .map(|r| {
                        records
                            .iter()
                            .position(|src| src.id == r.id)
                            .expect("filtered record must come from the source")
                    })
                    .collect();
                assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn test_filter_does_not_touch_source() {
        let records = medical_clients();
        let before = records.clone();
        let criteria = FilterCriteria {
            search_term: "医院".to_string(),
            stage: Selection::Only(Stage::Potential),
            ..Default::default()
        };
        let _ = filter_clients(&records, &criteria);
        assert_eq!(records, before);
    }

    #[test]
    fn test_outcome_reports_total() {
        let records = medical_clients();
        let criteria = FilterCriteria {
            search_term: "nobody".to_string(),
            ..Default::default()
        };
        let outcome = filter_with_outcome(&records, &criteria);
        assert_eq!(outcome.total, 4);
        assert!(outcome.is_empty_match());
    }
}
