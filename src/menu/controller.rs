//! Quick menu controller.
//!
//! [`QuickMenu`] owns the hierarchy and drives navigation, presentation and
//! clip playback once per frame.
//!
//! # Frame pipeline
//!
//! Each frame runs in two phases, in this order:
//!
//! 1. [`animate`](QuickMenu::animate): advances the clips on unscaled time and
//!    writes the animated selector properties.
//! 2. [`late_update`](QuickMenu::late_update): runs the state machine and the
//!    presentation step, reading the properties written in phase 1.
//!
//! [`frame`](QuickMenu::frame) runs both.
//!
//! # Phases
//!
//! | Phase      | Behavior                                                          |
//! |------------|-------------------------------------------------------------------|
//! | `Select`   | Up/Down move the selection (with cooldown), Confirm/Cancel leave   |
//! | `Decision` | Waits for the decision clip, fades out, descends and fires actions |
//! | `Cancel`   | Waits for the cancel clip, fades out, goes up a level or closes    |

use crate::animation::AnimatedProperties;
use crate::errors::{QuickMenuError, Result};
use crate::events::EventHub;
use crate::input::{Input, MenuInput};
use crate::menu::animator::{MenuAnimator, MenuClip, MenuClips};
use crate::menu::hierarchy::{MenuActivation, MenuHierarchy, MenuNodeHandle};
use crate::menu::presentation::MenuPresenter;
use crate::settings::MenuSettings;
use crate::text::{GlyphMetrics, measure_text};
use crate::utils::MenuHost;

/// Navigation phase while the menu is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuPhase {
    #[default]
    Select,
    /// Confirmed an entry; waiting to descend into it (or to fire it).
    Decision,
    /// Cancelled or confirmed a back entry; waiting to go up a level.
    Cancel,
}

/// Steps `index` by `delta` within `0..count`, wrapping at both ends.
#[must_use]
pub fn wrap_index(index: usize, delta: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (index as isize + delta).rem_euclid(count as isize) as usize
}

/// A hierarchical quick menu: navigation state, presentation and clip playback.
pub struct QuickMenu {
    hierarchy: MenuHierarchy,
    settings: MenuSettings,
    metrics: Box<dyn GlyphMetrics>,
    animator: MenuAnimator,
    properties: AnimatedProperties,
    presenter: MenuPresenter,
    activated: EventHub<MenuActivation>,

    current: MenuNodeHandle,
    phase: MenuPhase,
    visible: bool,
    waiting: bool,
    wait_timer: f32,
    resume_time_scale: f32,
}

impl QuickMenu {
    #[must_use]
    pub fn builder() -> QuickMenuBuilder {
        QuickMenuBuilder::default()
    }

    // ========== State ==========

    #[must_use]
    pub fn hierarchy(&self) -> &MenuHierarchy {
        &self.hierarchy
    }

    #[must_use]
    pub fn settings(&self) -> &MenuSettings {
        &self.settings
    }

    /// The highlighted entry.
    #[must_use]
    pub fn current(&self) -> MenuNodeHandle {
        self.current
    }

    /// Name of the highlighted entry.
    #[must_use]
    pub fn current_name(&self) -> &str {
        self.hierarchy.name(self.current).unwrap_or_default()
    }

    /// Line index of the highlighted entry among its siblings.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.hierarchy.sibling_index(self.current)
    }

    /// Depth of the displayed level (0 for the root's children).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.hierarchy.depth(self.current)
    }

    #[must_use]
    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether Up/Down are currently ignored after a selection step.
    #[must_use]
    pub fn is_cooling_down(&self) -> bool {
        self.waiting
    }

    #[must_use]
    pub fn presenter(&self) -> &MenuPresenter {
        &self.presenter
    }

    #[must_use]
    pub fn properties(&self) -> &AnimatedProperties {
        &self.properties
    }

    #[must_use]
    pub fn animator(&self) -> &MenuAnimator {
        &self.animator
    }

    /// Fired whenever an entry is activated, after that entry's own action.
    ///
    /// The returned hub is a shared handle; clone it to keep a subscription
    /// point outside the menu.
    #[must_use]
    pub fn on_activated(&self) -> &EventHub<MenuActivation> {
        &self.activated
    }

    /// Samples the configured key bindings.
    #[must_use]
    pub fn sample_input(&self, input: &Input) -> MenuInput {
        self.settings.bindings.sample(input)
    }

    // ========== Frame ==========

    /// Runs both frame phases in order.
    pub fn frame(&mut self, input: &MenuInput, host: &mut dyn MenuHost) {
        let dt = host.unscaled_delta();
        self.animate(dt);
        self.late_update(input, host);
    }

    /// Phase 1: advances clip playback by the unscaled delta.
    pub fn animate(&mut self, dt: f32) {
        self.animator.evaluate(dt, &mut self.properties);
    }

    /// Phase 2: state machine and presentation.
    pub fn late_update(&mut self, input: &MenuInput, host: &mut dyn MenuHost) {
        let dt = host.unscaled_delta();

        if !self.visible {
            self.presenter
                .fade_canvas_toward(0.0, self.settings.canvas_fade_rate, dt);
            if input.open_released {
                self.open(host);
            }
            return;
        }

        self.update_selector();

        match self.phase {
            MenuPhase::Select => self.update_select(input, dt),
            MenuPhase::Decision => self.update_transition(MenuClip::Decision, host, dt),
            MenuPhase::Cancel => self.update_transition(MenuClip::Cancel, host, dt),
        }
    }

    /// Releases the animation graph. Later calls (and drop) do nothing.
    pub fn shutdown(&mut self) -> bool {
        self.animator.release()
    }

    // ========== Transitions ==========

    fn open(&mut self, host: &mut dyn MenuHost) {
        self.resume_time_scale = host.time_scale();
        host.set_time_scale(0.0);

        self.visible = true;
        self.phase = MenuPhase::Select;
        self.waiting = false;
        self.wait_timer = 0.0;
        if let Some(first) = self.hierarchy.child(self.hierarchy.root(), 0) {
            self.current = first;
        }
        self.rebuild();
        self.animator.play(Some(MenuClip::Select));
        log::info!("Quick menu opened");
    }

    fn close(&mut self, host: &mut dyn MenuHost) {
        self.animator.play(None);
        self.phase = MenuPhase::Select;
        host.set_time_scale(self.resume_time_scale);
        self.visible = false;
        log::info!("Quick menu closed");
    }

    fn update_select(&mut self, input: &MenuInput, dt: f32) {
        if self.waiting {
            self.wait_timer += dt;
            if self.wait_timer >= self.settings.select_wait_time {
                self.wait_timer = 0.0;
                self.waiting = false;
            }
        } else if input.up {
            self.step_selection(-1);
        } else if input.down {
            self.step_selection(1);
        }

        if input.confirm {
            if self.hierarchy.is_back(self.current) {
                self.begin(MenuPhase::Cancel);
            } else {
                self.begin(MenuPhase::Decision);
            }
        }
        if input.cancel {
            self.begin(MenuPhase::Cancel);
        }

        let selected = self.selected_index();
        let smooth = self.settings.smooth;
        self.presenter
            .scroll_toward(self.settings.line_offset(selected), smooth, dt);
        self.presenter.fade_lines_toward(selected, smooth, dt);
        self.presenter
            .fade_canvas_toward(1.0, self.settings.canvas_fade_rate, dt);
        self.presenter.fade_title_toward(1.0, smooth, dt);
    }

    fn step_selection(&mut self, delta: isize) {
        let Some(parent) = self.hierarchy.parent(self.current) else {
            return;
        };
        let count = self.hierarchy.children(parent).len();
        let index = wrap_index(self.selected_index(), delta, count);

        self.animator.play(Some(MenuClip::Select));
        if let Some(next) = self.hierarchy.child(parent, index) {
            self.current = next;
        }
        self.waiting = true;
        log::trace!("Selected '{}' ({index}/{count})", self.current_name());
    }

    fn begin(&mut self, phase: MenuPhase) {
        let clip = match phase {
            MenuPhase::Select => MenuClip::Select,
            MenuPhase::Decision => MenuClip::Decision,
            MenuPhase::Cancel => MenuClip::Cancel,
        };
        self.animator.play(Some(clip));
        self.phase = phase;
        log::debug!("'{}': {phase:?}", self.current_name());
    }

    fn update_transition(&mut self, clip: MenuClip, host: &mut dyn MenuHost, dt: f32) {
        if !self.animator.is_finished(clip) {
            return;
        }

        // Activating a leaf stays on the same level: no fade needed.
        if self.phase == MenuPhase::Decision && self.hierarchy.children(self.current).is_empty() {
            self.activate(self.current);
            self.animator.play(Some(MenuClip::Select));
            self.phase = MenuPhase::Select;
            return;
        }

        self.presenter.fade_text_out(self.settings.smooth, dt);
        if self.presenter.title_alpha() > self.settings.fade_out_threshold {
            return;
        }

        match self.phase {
            MenuPhase::Cancel => self.finish_cancel(host),
            MenuPhase::Decision => self.finish_decision(),
            MenuPhase::Select => {}
        }
    }

    fn finish_cancel(&mut self, host: &mut dyn MenuHost) {
        let root = self.hierarchy.root();
        let Some(parent) = self.hierarchy.parent(self.current) else {
            return;
        };

        if parent == root {
            if let Some(first) = self.hierarchy.child(root, 0) {
                self.current = first;
            }
            self.rebuild();
            self.close(host);
            return;
        }

        // Up one level, back to its first line.
        let level = self.hierarchy.parent(parent).unwrap_or(root);
        if let Some(first) = self.hierarchy.child(level, 0) {
            self.current = first;
        }
        self.rebuild();
        self.animator.play(Some(MenuClip::Select));
        self.phase = MenuPhase::Select;
    }

    fn finish_decision(&mut self) {
        self.activate(self.current);

        if let Some(first) = self.hierarchy.child(self.current, 0) {
            self.current = first;
        }
        self.rebuild();
        self.animator.play(Some(MenuClip::Select));
        self.phase = MenuPhase::Select;
    }

    /// Fires the entry's own action, then the menu-wide event.
    fn activate(&self, node: MenuNodeHandle) {
        let Some(entry) = self.hierarchy.get(node) else {
            return;
        };
        let activation = MenuActivation {
            node,
            name: entry.name().to_string(),
            depth: self.hierarchy.depth(node),
        };
        log::debug!("Activated '{}'", self.hierarchy.path_of(node));

        entry.action().notify(&activation);
        self.activated.notify(&activation);
    }

    // ========== Presentation ==========

    /// Re-renders the level that contains the current entry.
    fn rebuild(&mut self) {
        let Some(parent) = self.hierarchy.parent(self.current) else {
            return;
        };
        let title = self.hierarchy.name(parent).unwrap_or_default();
        let names = self
            .hierarchy
            .children(parent)
            .iter()
            .filter_map(|&c| self.hierarchy.name(c));
        let offset = self.settings.line_offset(self.hierarchy.sibling_index(self.current));
        self.presenter.rebuild(title, names, offset);
    }

    fn update_selector(&mut self) {
        let text = self
            .presenter
            .line_text(self.selected_index())
            .unwrap_or_default();
        let width = measure_text(
            self.metrics.as_ref(),
            text,
            self.settings.text_length_multiplier,
        );
        self.presenter.update_selector(width, &self.properties);
    }
}

impl std::fmt::Debug for QuickMenu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuickMenu")
            .field("current", &self.hierarchy.path_of(self.current))
            .field("phase", &self.phase)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

/// Assembles a [`QuickMenu`]. Hierarchy, clips and glyph metrics are required.
#[derive(Default)]
pub struct QuickMenuBuilder {
    hierarchy: Option<MenuHierarchy>,
    settings: MenuSettings,
    clips: Option<MenuClips>,
    metrics: Option<Box<dyn GlyphMetrics>>,
}

impl QuickMenuBuilder {
    #[must_use]
    pub fn hierarchy(mut self, hierarchy: MenuHierarchy) -> Self {
        self.hierarchy = Some(hierarchy);
        self
    }

    #[must_use]
    pub fn settings(mut self, settings: MenuSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn clips(mut self, clips: MenuClips) -> Self {
        self.clips = Some(clips);
        self
    }

    #[must_use]
    pub fn glyph_metrics(mut self, metrics: impl GlyphMetrics + 'static) -> Self {
        self.metrics = Some(Box::new(metrics));
        self
    }

    /// Validates the hierarchy and clips, then builds a hidden menu on its first entry.
    pub fn build(self) -> Result<QuickMenu> {
        let hierarchy = self
            .hierarchy
            .ok_or(QuickMenuError::MissingComponent("hierarchy"))?;
        let clips = self
            .clips
            .ok_or(QuickMenuError::MissingComponent("animation clips"))?;
        let metrics = self
            .metrics
            .ok_or(QuickMenuError::MissingComponent("glyph metrics"))?;
        hierarchy.validate()?;
        clips.validate()?;

        let root = hierarchy.root();
        let current = hierarchy
            .child(root, 0)
            .ok_or_else(|| QuickMenuError::EmptyRoot(hierarchy.path_of(root)))?;

        let settings = self.settings;
        let properties = AnimatedProperties {
            selector_blend: settings.selector_blend,
            target_width: settings.target_width,
            selector_offset: settings.selector_offset,
        };

        let mut menu = QuickMenu {
            animator: MenuAnimator::new(&clips),
            hierarchy,
            settings,
            metrics,
            properties,
            presenter: MenuPresenter::new(),
            activated: EventHub::new(),
            current,
            phase: MenuPhase::Select,
            visible: false,
            waiting: false,
            wait_timer: 0.0,
            resume_time_scale: 1.0,
        };
        menu.rebuild();
        log::debug!(
            "Built quick menu '{}' with {} entries",
            menu.hierarchy.path_of(root),
            menu.hierarchy.len() - 1
        );
        Ok(menu)
    }
}
