//! Business Logic
//!
//! Pure functions that can be unit tested in isolation:
//! - layout: panel visibility calculations
//! - navigation: cursor movement with wrapping

pub mod layout;
pub mod navigation;
