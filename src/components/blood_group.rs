//! Blood-group badge and quantity highlighting.

#[cfg(test)]
#[path = "blood_group_test.rs"]
mod blood_group_test;

use leptos::prelude::*;

/// Badge color per blood group; grey for anything unrecognized.
pub fn blood_group_color(blood_group: &str) -> &'static str {
    match blood_group {
        "A+" => "#ef4444",
        "A-" => "#f87171",
        "B+" => "#3b82f6",
        "B-" => "#60a5fa",
        "AB+" => "#8b5cf6",
        "AB-" => "#a78bfa",
        "O+" => "#22c55e",
        "O-" => "#4ade80",
        _ => "#6b7280",
    }
}

/// Highlight class for a unit count: low stock reads as a warning.
pub fn quantity_class(bag_quantity: i64) -> &'static str {
    if bag_quantity <= 5 {
        "qty qty--low"
    } else if bag_quantity <= 10 {
        "qty qty--medium"
    } else {
        "qty qty--high"
    }
}

#[component]
pub fn BloodGroupBadge(blood_group: String) -> impl IntoView {
    let color = blood_group_color(&blood_group);
    view! {
        <span class="blood-group-badge" style=format!("background-color: {color}")>
            {blood_group}
        </span>
    }
}
