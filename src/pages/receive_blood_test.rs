use super::{filter_banks, unique_blood_groups};
use crate::net::types::BloodBankEntry;

fn bank(id: i64, hospital_name: &str, blood_group: &str, bag_quantity: i64) -> BloodBankEntry {
    BloodBankEntry {
        id,
        hospital: Some(id),
        hospital_name: hospital_name.to_string(),
        blood_group: blood_group.to_string(),
        bag_quantity,
        is_available: true,
    }
}

fn inventory() -> Vec<BloodBankEntry> {
    vec![
        bank(1, "City General", "A+", 12),
        bank(2, "City General", "O-", 3),
        bank(3, "Riverside Clinic", "A+", 7),
        bank(4, "Hilltop Hospital", "B+", 0),
    ]
}

// =========================================================================
// filter_banks
// =========================================================================

#[test]
fn no_filters_returns_everything() {
    assert_eq!(filter_banks(&inventory(), "", "").len(), 4);
}

#[test]
fn search_matches_hospital_name_case_insensitively() {
    let filtered = filter_banks(&inventory(), "riverside", "");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 3);
}

#[test]
fn search_term_is_trimmed() {
    assert_eq!(filter_banks(&inventory(), "  city  ", "").len(), 2);
}

#[test]
fn group_filter_is_exact() {
    let filtered = filter_banks(&inventory(), "", "A+");
    assert_eq!(
        filtered.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![1, 3]
    );
}

#[test]
fn search_and_group_compose() {
    let filtered = filter_banks(&inventory(), "city", "A+");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, 1);
}

#[test]
fn unmatched_filters_give_empty_list() {
    assert!(filter_banks(&inventory(), "nowhere", "").is_empty());
    assert!(filter_banks(&inventory(), "", "AB-").is_empty());
}

// =========================================================================
// unique_blood_groups
// =========================================================================

#[test]
fn groups_are_deduplicated_and_sorted() {
    assert_eq!(unique_blood_groups(&inventory()), vec!["A+", "B+", "O-"]);
}

#[test]
fn empty_groups_are_skipped() {
    let mut banks = inventory();
    banks.push(bank(5, "Unlabelled", "", 1));
    assert_eq!(unique_blood_groups(&banks), vec!["A+", "B+", "O-"]);
}
