use crate::animation::action::AnimationAction;
use crate::animation::binding::{AnimatedProperties, AnimatedProperty};

/// Weighted set of animation inputs.
///
/// Every input advances its own local time each update, whatever its weight;
/// only weighted inputs contribute when the mixer is applied.
#[derive(Debug, Clone, Default)]
pub struct AnimationMixer {
    actions: Vec<AnimationAction>,
}

impl AnimationMixer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an input and returns its index.
    pub fn add_action(&mut self, action: AnimationAction) -> usize {
        self.actions.push(action);
        self.actions.len() - 1
    }

    #[must_use]
    pub fn input_count(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn input(&self, index: usize) -> Option<&AnimationAction> {
        self.actions.get(index)
    }

    pub fn input_mut(&mut self, index: usize) -> Option<&mut AnimationAction> {
        self.actions.get_mut(index)
    }

    /// Gives input `index` full weight from time zero and silences the rest.
    ///
    /// `None` silences every input.
    pub fn play_exclusive(&mut self, index: Option<usize>) {
        for (i, action) in self.actions.iter_mut().enumerate() {
            if Some(i) == index {
                action.weight = 1.0;
                action.restart();
            } else {
                action.weight = 0.0;
            }
        }
    }

    pub fn update(&mut self, dt: f32) {
        for action in &mut self.actions {
            action.update(dt);
        }
    }

    /// Writes the weight-blended value of every property driven by a weighted
    /// input. Properties no weighted input drives keep their value.
    pub fn apply(&mut self, properties: &mut AnimatedProperties) {
        let mut sums = [0.0_f32; AnimatedProperty::ALL.len()];
        let mut weights = [0.0_f32; AnimatedProperty::ALL.len()];

        for action in &mut self.actions {
            if action.weight <= 0.0 {
                continue;
            }
            let weight = action.weight;

            for track_index in 0..action.clip().tracks.len() {
                let target = action.clip().tracks[track_index].target;
                let Some(value) = action.sample_track(track_index) else {
                    continue;
                };
                let slot = target.slot();
                sums[slot] += value * weight;
                weights[slot] += weight;
            }
        }

        for property in AnimatedProperty::ALL {
            let slot = property.slot();
            if weights[slot] > 0.0 {
                properties.set(property, sums[slot] / weights[slot]);
            }
        }
    }
}
