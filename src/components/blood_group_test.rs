use super::*;

#[test]
fn known_blood_groups_have_distinct_colors() {
    let groups = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];
    for (i, a) in groups.iter().enumerate() {
        for b in &groups[i + 1..] {
            assert_ne!(blood_group_color(a), blood_group_color(b));
        }
    }
}

#[test]
fn unknown_blood_group_falls_back_to_grey() {
    assert_eq!(blood_group_color(""), "#6b7280");
    assert_eq!(blood_group_color("C+"), "#6b7280");
}

#[test]
fn quantity_class_bands() {
    assert_eq!(quantity_class(0), "qty qty--low");
    assert_eq!(quantity_class(5), "qty qty--low");
    assert_eq!(quantity_class(6), "qty qty--medium");
    assert_eq!(quantity_class(10), "qty qty--medium");
    assert_eq!(quantity_class(11), "qty qty--high");
}
