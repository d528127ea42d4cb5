//! Input Handlers
//!
//! - keyboard: translates key events into App actions

pub mod keyboard;
