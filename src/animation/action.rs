use std::sync::Arc;

use crate::animation::{clip::AnimationClip, tracks::KeyframeCursor};

/// Playback state of one clip: local time and weight.
///
/// Plays once and clamps at the end of the clip until restarted.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<AnimationClip>,

    pub time: f32,
    pub weight: f32,
    paused: bool,

    track_cursors: Vec<KeyframeCursor>,
}

impl AnimationAction {
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>) -> Self {
        let track_count = clip.tracks.len();
        Self {
            clip,
            time: 0.0,
            weight: 1.0,
            paused: false,
            track_cursors: vec![KeyframeCursor::default(); track_count],
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    /// Rewinds to time zero and resumes playback.
    pub fn restart(&mut self) {
        self.time = 0.0;
        self.paused = false;
    }

    /// Whether a single play-through has completed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.time >= self.clip.duration
    }

    /// Advances local time, stopping at the end of the clip.
    pub fn update(&mut self, dt: f32) {
        if self.paused {
            return;
        }

        let duration = self.clip.duration;
        if duration <= 0.0 {
            return;
        }

        self.time += dt;
        if self.time >= duration {
            self.time = duration;
            self.paused = true;
        }
    }

    /// Samples track `track_index` at the current time.
    pub fn sample_track(&mut self, track_index: usize) -> Option<f32> {
        let track = self.clip.tracks.get(track_index)?;
        let cursor = self.track_cursors.get_mut(track_index)?;
        track.data.sample_with_cursor(self.time, cursor)
    }
}
