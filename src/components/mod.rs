//! Shared UI components.

pub mod blood_group;
pub mod feedback;
pub mod nav_bar;
pub mod route_guard;
