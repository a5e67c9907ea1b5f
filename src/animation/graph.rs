use crate::animation::binding::AnimatedProperties;
use crate::animation::mixer::AnimationMixer;

/// Owned playback graph: a named mixer that lives from creation until
/// [`destroy`](Self::destroy) or drop, whichever comes first.
///
/// Releasing is idempotent. A released graph ignores every request.
#[derive(Debug)]
pub struct AnimationGraph {
    name: String,
    mixer: Option<AnimationMixer>,
}

impl AnimationGraph {
    #[must_use]
    pub fn create(name: impl Into<String>, mixer: AnimationMixer) -> Self {
        let name = name.into();
        log::debug!("Created animation graph '{}' with {} inputs", name, mixer.input_count());
        Self {
            name,
            mixer: Some(mixer),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.mixer.is_some()
    }

    #[must_use]
    pub fn mixer(&self) -> Option<&AnimationMixer> {
        self.mixer.as_ref()
    }

    pub fn mixer_mut(&mut self) -> Option<&mut AnimationMixer> {
        self.mixer.as_mut()
    }

    /// Advances every input and writes the blended result into `properties`.
    pub fn evaluate(&mut self, dt: f32, properties: &mut AnimatedProperties) {
        if let Some(mixer) = self.mixer.as_mut() {
            mixer.update(dt);
            mixer.apply(properties);
        }
    }

    /// Releases the graph. Returns `true` only for the call that released it.
    pub fn destroy(&mut self) -> bool {
        if self.mixer.take().is_some() {
            log::debug!("Destroyed animation graph '{}'", self.name);
            true
        } else {
            false
        }
    }
}

impl Drop for AnimationGraph {
    fn drop(&mut self) {
        self.destroy();
    }
}
