//! Date grid layout and selection-state engine.
//!
//! Everything in this crate is a pure function of its inputs: callers pass
//! "today", the selection and the constraints explicitly on every render.

pub mod date;
pub mod format;
pub mod grid;
pub mod policy;
pub mod selection;
pub mod theme;

pub use date::{DateKey, WeekRow};
pub use policy::{Constraints, DayPolicy, DisplayBounds, WeekdayMask};
pub use selection::{NormalizedSelection, Selection};
