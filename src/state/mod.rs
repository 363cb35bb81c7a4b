//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The auth state is provided as an `RwSignal<AuthState>` context at the root
//! composition, not as an ambient global: everything below `App` receives the
//! same session object and mutates it through its methods.

pub mod auth;
