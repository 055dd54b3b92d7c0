//! Page-local view state.
//!
//! Plain data held in `RwSignal`s by the pages; no browser access.

pub mod pager;
