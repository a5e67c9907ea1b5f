//! Utility Module
//!
//! - [`time`]: frame clock with scaled and unscaled time, and the
//!   [`MenuHost`] trait the menu uses to pause gameplay.

pub mod time;

pub use time::{GameClock, MenuHost};
