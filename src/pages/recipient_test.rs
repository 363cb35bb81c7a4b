use super::*;

#[test]
fn display_date_takes_the_date_part_of_a_timestamp() {
    assert_eq!(display_date("2024-05-02T08:30:00Z"), "2024-05-02");
    assert_eq!(display_date("2024-05-02T08:30:00.123456+05:30"), "2024-05-02");
}

#[test]
fn display_date_passes_through_unrecognized_values() {
    assert_eq!(display_date(""), "");
    assert_eq!(display_date("yesterday"), "yesterday");
    assert_eq!(display_date("2024-05-02"), "2024-05-02");
}
