//! # Quick Menu
//!
//! A hierarchical, animated, keyboard-driven in-game menu.
//!
//! The menu is a static tree of named entries. Up/Down walk the current level
//! (wrapping at both ends), Confirm descends into an entry or fires its action,
//! Cancel (or a back entry) returns to the parent level and finally closes the
//! menu. Opening the menu pauses gameplay time; the menu itself keeps running on
//! unscaled time.
//!
//! ```rust,ignore
//! use quick_menu::prelude::*;
//!
//! let hierarchy = MenuHierarchy::from_json_str(MENU_JSON)?;
//! let mut menu = QuickMenu::builder()
//!     .hierarchy(hierarchy)
//!     .clips(clips)
//!     .glyph_metrics(font_table)
//!     .build()?;
//!
//! menu.on_activated().subscribe(|entry| log::info!("activated {}", entry.name));
//!
//! // every frame, after gameplay animation:
//! clock.tick();
//! let buttons = menu.sample_input(&input);
//! menu.frame(&buttons, &mut clock);
//! input.start_frame();
//! ```

pub mod animation;
pub mod errors;
pub mod events;
pub mod input;
pub mod menu;
pub mod settings;
pub mod text;
pub mod utils;

pub use errors::{QuickMenuError, Result};
pub use events::{EventHub, SubscriptionId};
pub use input::{Input, Key, MenuBindings, MenuButton, MenuInput};
pub use menu::{
    MenuActivation, MenuClip, MenuClips, MenuDescription, MenuHierarchy, MenuNodeHandle,
    MenuPhase, QuickMenu, QuickMenuBuilder,
};
pub use settings::MenuSettings;
pub use text::{GlyphMetrics, GlyphTable};
pub use utils::{GameClock, MenuHost};

pub mod prelude {
    pub use crate::animation::{AnimatedProperty, AnimationClip, Track};
    pub use crate::input::{ButtonState, Input, Key, MenuInput};
    pub use crate::menu::{
        MenuActivation, MenuClips, MenuHierarchy, MenuPhase, QuickMenu,
    };
    pub use crate::settings::MenuSettings;
    pub use crate::text::GlyphTable;
    pub use crate::utils::{GameClock, MenuHost};
}
