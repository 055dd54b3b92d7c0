//! Display helpers shared by the pages.

pub mod format;
