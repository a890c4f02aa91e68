//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Browse error types and message formatting
//! - file: Image detection and entry classification
//! - formatting: Human-readable times, sizes and names
//! - layout: Grid cell sizing and scrolling
//! - navigation: Grid selection movement
//! - path: Parent computation and display paths
//! - sorting: Modification-time ordering

pub mod errors;
pub mod file;
pub mod formatting;
pub mod layout;
pub mod navigation;
pub mod path;
pub mod sorting;
