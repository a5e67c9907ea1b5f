use crate::animation::binding::AnimatedProperty;
use crate::errors::{QuickMenuError, Result};
use crate::animation::tracks::{InterpolationMode, KeyframeTrack};

/// One keyframed channel of a clip and the property it drives.
#[derive(Debug, Clone)]
pub struct Track {
    pub target: AnimatedProperty,
    pub data: KeyframeTrack<f32>,
}

impl Track {
    #[must_use]
    pub fn new(target: AnimatedProperty, data: KeyframeTrack<f32>) -> Self {
        Self { target, data }
    }

    /// Linear track through `(time, value)` pairs.
    #[must_use]
    pub fn linear(target: AnimatedProperty, keys: &[(f32, f32)]) -> Self {
        let (times, values): (Vec<f32>, Vec<f32>) = keys.iter().copied().unzip();
        Self::new(target, KeyframeTrack::new(times, values, InterpolationMode::Linear))
    }
}

#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
    pub tracks: Vec<Track>,
}

impl AnimationClip {
    /// Creates a clip whose duration is the end of its longest track.
    #[must_use]
    pub fn new(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        let duration = tracks
            .iter()
            .map(|t| t.data.end_time())
            .fold(0.0_f32, f32::max);

        Self {
            name: name.into(),
            duration,
            tracks,
        }
    }

    /// Clip without tracks that only occupies time.
    #[must_use]
    pub fn empty(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration: duration.max(0.0),
            tracks: Vec::new(),
        }
    }

    /// Rejects tracks that would sample out of range.
    pub fn validate(&self) -> Result<()> {
        for (index, track) in self.tracks.iter().enumerate() {
            track.data.validate().map_err(|reason| QuickMenuError::InvalidClip {
                clip: self.name.clone(),
                reason: format!("track {index} ({:?}): {reason}", track.target),
            })?;
        }
        Ok(())
    }

    /// Overrides the computed duration (e.g. a clip with a trailing hold).
    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration.max(0.0);
        self
    }
}
