//! Bibkeep Core Library
//!
//! Core domain logic for the bibkeep annotated bibliography system:
//! entry records and metadata extraction, markdown rendering, and the
//! parsed document model behind annotation, listing, and summarizing.

pub mod config;
pub mod document;
pub mod entry;
pub mod error;
pub mod format;
pub mod logging;
pub mod render;
pub mod text;
