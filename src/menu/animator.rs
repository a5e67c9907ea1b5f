use std::sync::Arc;

use crate::animation::{
    AnimatedProperties, AnimationAction, AnimationClip, AnimationGraph, AnimationMixer,
};
use crate::errors::Result;

/// The three clips the menu switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuClip {
    /// Played on open and on every selection step.
    Select,
    Decision,
    Cancel,
}

impl MenuClip {
    pub const ALL: [Self; 3] = [Self::Select, Self::Decision, Self::Cancel];

    /// Mixer input that holds this clip.
    #[inline]
    #[must_use]
    pub fn input_index(self) -> usize {
        self as usize
    }
}

/// Clip assets for a menu.
#[derive(Debug, Clone)]
pub struct MenuClips {
    pub select: Arc<AnimationClip>,
    pub decision: Arc<AnimationClip>,
    pub cancel: Arc<AnimationClip>,
}

impl MenuClips {
    #[must_use]
    pub fn new(select: AnimationClip, decision: AnimationClip, cancel: AnimationClip) -> Self {
        Self {
            select: Arc::new(select),
            decision: Arc::new(decision),
            cancel: Arc::new(cancel),
        }
    }

    /// Validates all three clips.
    pub fn validate(&self) -> Result<()> {
        MenuClip::ALL
            .into_iter()
            .try_for_each(|clip| self.get(clip).validate())
    }

    #[must_use]
    pub fn get(&self, clip: MenuClip) -> &Arc<AnimationClip> {
        match clip {
            MenuClip::Select => &self.select,
            MenuClip::Decision => &self.decision,
            MenuClip::Cancel => &self.cancel,
        }
    }
}

/// Hard-cuts between the menu clips on a three-input mixer.
#[derive(Debug)]
pub struct MenuAnimator {
    graph: AnimationGraph,
}

impl MenuAnimator {
    pub const GRAPH_NAME: &'static str = "QuickMenuAnimation";

    #[must_use]
    pub fn new(clips: &MenuClips) -> Self {
        let mut mixer = AnimationMixer::new();
        for clip in MenuClip::ALL {
            let mut action = AnimationAction::new(Arc::clone(clips.get(clip)));
            action.weight = 0.0;
            mixer.add_action(action);
        }
        Self {
            graph: AnimationGraph::create(Self::GRAPH_NAME, mixer),
        }
    }

    /// Plays `clip` from time zero at full weight and silences the others.
    /// `None` silences every clip.
    pub fn play(&mut self, clip: Option<MenuClip>) {
        let Some(mixer) = self.graph.mixer_mut() else {
            log::warn!("Ignoring {clip:?} playback: animation graph was released");
            return;
        };
        mixer.play_exclusive(clip.map(MenuClip::input_index));
    }

    /// The clip currently at full weight, if any.
    #[must_use]
    pub fn playing(&self) -> Option<MenuClip> {
        let mixer = self.graph.mixer()?;
        MenuClip::ALL
            .into_iter()
            .find(|clip| mixer.input(clip.input_index()).is_some_and(|a| a.weight > 0.0))
    }

    /// Local playback time of `clip`'s input.
    #[must_use]
    pub fn time(&self, clip: MenuClip) -> Option<f32> {
        self.graph
            .mixer()
            .and_then(|m| m.input(clip.input_index()))
            .map(|a| a.time)
    }

    #[must_use]
    pub fn weight(&self, clip: MenuClip) -> Option<f32> {
        self.graph
            .mixer()
            .and_then(|m| m.input(clip.input_index()))
            .map(|a| a.weight)
    }

    /// Whether `clip` has played through once since it was last started.
    ///
    /// A released graph has nothing left to wait for and reports `true`.
    #[must_use]
    pub fn is_finished(&self, clip: MenuClip) -> bool {
        self.graph
            .mixer()
            .and_then(|m| m.input(clip.input_index()))
            .is_none_or(AnimationAction::is_finished)
    }

    /// Advances playback and applies the blended property values.
    pub fn evaluate(&mut self, dt: f32, properties: &mut AnimatedProperties) {
        self.graph.evaluate(dt, properties);
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.graph.is_valid()
    }

    /// Releases the animation graph. Safe to call more than once.
    pub fn release(&mut self) -> bool {
        self.graph.destroy()
    }
}
