//! Animation playback for menu properties.
//!
//! Clips hold scalar keyframe tracks that target [`AnimatedProperty`] values.
//! An [`AnimationMixer`] blends one [`AnimationAction`] per clip by weight, and
//! an [`AnimationGraph`] owns the mixer for the lifetime of a menu.

mod values;
pub mod tracks;
pub mod clip;
pub mod action;
pub mod binding;
pub mod mixer;
pub mod graph;

pub use values::{Interpolatable, smooth_toward};
pub use clip::{AnimationClip, Track};
pub use action::AnimationAction;
pub use mixer::AnimationMixer;
pub use graph::AnimationGraph;
pub use binding::{AnimatedProperties, AnimatedProperty};
pub use tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
