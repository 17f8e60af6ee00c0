//! Command implementations for bibkeep

pub mod annotate;
pub mod dispatch;
pub mod format;
pub mod list;
pub mod summary;
