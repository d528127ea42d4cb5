//! App Orchestration Methods
//!
//! This module contains App implementation methods that orchestrate between:
//! - Model state (pure, in src/model/)
//! - Logic (pure cursor/layout calculations in src/logic/)
//! - UI rendering (in src/ui/)
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod navigation;
