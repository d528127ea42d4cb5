//! Pure navigation model
//!
//! This module defines the cloneable core state of the application:
//!
//! - **types**: the immutable tree (`NavItem`), materialized `Level` views,
//!   and the `Direction` display hint
//! - **navigation**: the `NavigationState` stack machine over that tree
//!
//! Key principles:
//! - Clone + Debug + PartialEq: state can be snapshotted and compared
//! - No I/O: tree loading and rendering live outside the model
//! - Silent no-op guards instead of errors (trusted, static input)

pub mod navigation;
pub mod types;

pub use navigation::NavigationState;
pub use types::{Direction, Level, NavItem};
