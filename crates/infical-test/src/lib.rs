//! Infinite calendar - integration test support.
//!
//! This crate re-exports the workspace crates under one `component` path for
//! the integration tests.

pub mod component {
    pub use infical_calendar::*;
    pub use infical_core::*;

    pub mod years {
        pub use infical_years::*;
    }

    pub mod app {
        pub use infical_app::*;
    }
}
