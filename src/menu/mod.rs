//! The quick menu.
//!
//! - [`hierarchy`]: the static tree of entries and their actions
//! - [`controller`]: the navigation state machine ([`QuickMenu`])
//! - [`presentation`]: text, colors, selector and opacity derived from the state
//! - [`animator`]: select/decision/cancel clip playback

pub mod animator;
pub mod controller;
pub mod hierarchy;
pub mod presentation;

pub use animator::{MenuAnimator, MenuClip, MenuClips};
pub use controller::{MenuPhase, QuickMenu, QuickMenuBuilder, wrap_index};
pub use hierarchy::{
    MenuAction, MenuActivation, MenuDescription, MenuHierarchy, MenuNode, MenuNodeHandle,
};
pub use presentation::{MenuLine, MenuPresenter, QuadColors, line_palette};
