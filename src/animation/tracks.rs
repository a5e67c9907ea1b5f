use crate::animation::values::Interpolatable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    Linear,
    Step,
    CubicSpline,
}

const MAX_SCAN_OFFSET: usize = 3;

/// Remembers the last sampled keyframe so forward playback is O(1).
#[derive(Debug, Clone, Default)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    pub times: Vec<f32>,
    pub values: Vec<T>, // For CubicSpline, length is times.len() * 3 (in-tangent, value, out-tangent)
    pub interpolation: InterpolationMode,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Self {
        Self {
            times,
            values,
            interpolation,
        }
    }

    /// Time of the last keyframe.
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Checks that sampling cannot index out of range: one value per key
    /// (three for cubic splines) and non-decreasing key times.
    pub fn validate(&self) -> Result<(), String> {
        let per_key = match self.interpolation {
            InterpolationMode::CubicSpline => 3,
            _ => 1,
        };
        let expected = self.times.len() * per_key;
        if self.values.len() != expected {
            return Err(format!(
                "{} keys need {expected} values, found {}",
                self.times.len(),
                self.values.len()
            ));
        }
        let ascending = self.times.windows(2).all(|w| w[0] <= w[1]);
        if !ascending || !self.times.iter().all(|t| t.is_finite()) {
            return Err("key times must be finite and ascending".to_string());
        }
        Ok(())
    }

    /// Samples without a cursor (binary search every call).
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<T> {
        if self.times.is_empty() {
            return None;
        }
        let next_idx = self.times.partition_point(|&t| t <= time);
        Some(self.sample_at_frame(next_idx, time))
    }

    /// Samples using `cursor` as a hint and updates it.
    ///
    /// Scans forward a few keyframes from the last position before falling
    /// back to a binary search (seeks, restarts, rewinds).
    pub fn sample_with_cursor(&self, time: f32, cursor: &mut KeyframeCursor) -> Option<T> {
        let len = self.times.len();
        if len == 0 {
            return None;
        }
        if len == 1 {
            return Some(self.value_at(0));
        }

        let start = cursor.last_index.min(len - 1);
        let mut next_idx = None;
        if time >= self.times[start] {
            for offset in 0..=MAX_SCAN_OFFSET {
                let i = start + offset;
                if i + 1 >= len {
                    next_idx = Some(len);
                    break;
                }
                if time < self.times[i + 1] {
                    next_idx = Some(i + 1);
                    break;
                }
            }
        }
        let next_idx = next_idx.unwrap_or_else(|| self.times.partition_point(|&t| t <= time));

        cursor.last_index = next_idx.saturating_sub(1);
        Some(self.sample_at_frame(next_idx, time))
    }

    fn sample_at_frame(&self, next_idx: usize, time: f32) -> T {
        if next_idx == 0 {
            return self.value_at(0);
        }
        if next_idx >= self.times.len() {
            return self.value_at(self.times.len() - 1);
        }

        let prev_idx = next_idx - 1;
        let t0 = self.times[prev_idx];
        let t1 = self.times[next_idx];
        let dt = t1 - t0;
        let t = if dt > 0.0 { (time - t0) / dt } else { 0.0 };

        match self.interpolation {
            InterpolationMode::Step => self.value_at(prev_idx),
            InterpolationMode::Linear => {
                T::interpolate_linear(self.value_at(prev_idx), self.value_at(next_idx), t)
            }
            InterpolationMode::CubicSpline => {
                let v0 = self.values[prev_idx * 3 + 1];
                let out_tangent0 = self.values[prev_idx * 3 + 2];
                let in_tangent1 = self.values[next_idx * 3];
                let v1 = self.values[next_idx * 3 + 1];
                T::interpolate_cubic(v0, out_tangent0, in_tangent1, v1, t, dt)
            }
        }
    }

    fn value_at(&self, index: usize) -> T {
        match self.interpolation {
            InterpolationMode::CubicSpline => self.values[index * 3 + 1],
            _ => self.values[index],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_recovers_after_rewind() {
        let track = KeyframeTrack::new(
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![0.0_f32, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            InterpolationMode::Linear,
        );
        let mut cursor = KeyframeCursor::default();

        assert_eq!(track.sample_with_cursor(5.5, &mut cursor), Some(5.5));
        assert_eq!(cursor.last_index, 5);
        // Restarting the clip jumps back to the beginning.
        assert_eq!(track.sample_with_cursor(0.25, &mut cursor), Some(0.25));
        assert_eq!(cursor.last_index, 0);
    }

    #[test]
    fn empty_track_samples_nothing() {
        let track = KeyframeTrack::<f32>::new(Vec::new(), Vec::new(), InterpolationMode::Linear);
        assert_eq!(track.sample(0.0), None);
        assert_eq!(track.end_time(), 0.0);
    }

    #[test]
    fn validate_checks_value_count_and_key_order() {
        let cubic = |values: Vec<f32>| {
            KeyframeTrack::new(vec![0.0, 0.5], values, InterpolationMode::CubicSpline)
        };
        assert!(cubic(vec![1.0, 0.0]).validate().is_err());
        assert!(cubic(vec![0.0, 1.0, 0.0, 0.0, 0.0, 0.0]).validate().is_ok());

        let linear = |times: Vec<f32>| {
            KeyframeTrack::new(times, vec![0.0_f32, 1.0], InterpolationMode::Linear)
        };
        assert!(linear(vec![0.0, 1.0]).validate().is_ok());
        assert!(linear(vec![1.0, 0.0]).validate().is_err());
        assert!(linear(vec![0.0, f32::NAN]).validate().is_err());
        assert!(linear(vec![0.0]).validate().is_err());
    }
}
