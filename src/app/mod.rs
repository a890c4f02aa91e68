//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in picstash::model)
//! - The directory browser (picstash::browser)
//! - Handlers (in src/handlers/)
//! - UI rendering (in src/ui/)

pub(crate) mod navigation;
pub(crate) mod preview;
