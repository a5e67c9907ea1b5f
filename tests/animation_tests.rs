//! Animation System Tests
//!
//! Tests for:
//! - KeyframeTrack linear/step/cubic interpolation
//! - KeyframeCursor forward scan and binary search fallback
//! - AnimationAction play-once clamping and restart
//! - AnimationClip duration auto-computation
//! - AnimationMixer exclusive playback and weighted blending
//! - AnimationGraph lifecycle

use std::sync::Arc;

use quick_menu::animation::{
    AnimatedProperties, AnimatedProperty, AnimationAction, AnimationClip, AnimationGraph,
    AnimationMixer, InterpolationMode, KeyframeCursor, KeyframeTrack, Track,
    smooth_toward,
};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn props() -> AnimatedProperties {
    AnimatedProperties {
        selector_blend: 0.0,
        target_width: 4.0,
        selector_offset: 0.25,
    }
}

fn ramp_clip(name: &str, target: AnimatedProperty, from: f32, to: f32) -> Arc<AnimationClip> {
    Arc::new(AnimationClip::new(
        name,
        vec![Track::linear(target, &[(0.0, from), (1.0, to)])],
    ))
}

// ============================================================================
// KeyframeTrack
// ============================================================================

#[test]
fn track_linear_midpoint_and_clamping() {
    let track = KeyframeTrack::new(vec![0.0, 1.0], vec![0.0_f32, 10.0], InterpolationMode::Linear);

    assert_eq!(track.sample(0.5), Some(5.0));
    assert_eq!(track.sample(-1.0), Some(0.0));
    assert_eq!(track.sample(3.0), Some(10.0));
}

#[test]
fn track_step_holds_previous_value() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0],
        vec![1.0_f32, 2.0, 3.0],
        InterpolationMode::Step,
    );

    assert_eq!(track.sample(0.99), Some(1.0));
    assert_eq!(track.sample(1.0), Some(2.0));
    assert_eq!(track.sample(1.5), Some(2.0));
}

#[test]
fn track_cubic_hits_keyframes() {
    // (in-tangent, value, out-tangent) per key
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![0.0_f32, 0.0, 1.0, 1.0, 1.0, 0.0],
        InterpolationMode::CubicSpline,
    );

    assert!(approx(track.sample(0.0).unwrap(), 0.0));
    assert!(approx(track.sample(1.0).unwrap(), 1.0));
    let mid = track.sample(0.5).unwrap();
    assert!(mid > 0.0 && mid < 1.0, "got {mid}");
}

#[test]
fn empty_track_samples_nothing() {
    let track: KeyframeTrack<f32> = KeyframeTrack::new(vec![], vec![], InterpolationMode::Linear);
    let mut cursor = KeyframeCursor::default();
    assert_eq!(track.sample(0.0), None);
    assert_eq!(track.sample_with_cursor(0.0, &mut cursor), None);
    assert_eq!(track.end_time(), 0.0);
}

#[test]
fn cursor_matches_binary_search() {
    let times: Vec<f32> = (0..20).map(|i| i as f32 * 0.5).collect();
    let values: Vec<f32> = times.iter().map(|t| t * t).collect();
    let track = KeyframeTrack::new(times, values, InterpolationMode::Linear);

    let mut cursor = KeyframeCursor::default();
    let probes = [0.1, 0.2, 0.9, 1.3, 4.7, 4.8, 9.4, 2.0, 0.0, 12.0, 3.3];
    for t in probes {
        let with_cursor = track.sample_with_cursor(t, &mut cursor).unwrap();
        let direct = track.sample(t).unwrap();
        assert!(approx(with_cursor, direct), "t={t}: {with_cursor} vs {direct}");
    }
}

// ============================================================================
// Smoothing
// ============================================================================

#[test]
fn smooth_toward_moves_by_rate_times_dt() {
    assert!(approx(smooth_toward(0.0_f32, 1.0, 6.0, 0.1), 0.6));
    // Large steps land exactly on the target.
    assert_eq!(smooth_toward(0.0_f32, 1.0, 10.0, 1.0), 1.0);
    assert_eq!(smooth_toward(0.3_f32, 1.0, 10.0, 0.0), 0.3);
}

// ============================================================================
// AnimationClip
// ============================================================================

#[test]
fn clip_duration_is_longest_track() {
    let clip = AnimationClip::new(
        "select",
        vec![
            Track::linear(AnimatedProperty::SelectorBlend, &[(0.0, 0.0), (0.3, 1.0)]),
            Track::linear(AnimatedProperty::SelectorOffset, &[(0.0, 0.0), (0.5, 1.0)]),
        ],
    );
    assert!(approx(clip.duration, 0.5));
    assert!(approx(clip.with_duration(0.8).duration, 0.8));
    assert_eq!(AnimationClip::empty("hold", -1.0).duration, 0.0);
}

// ============================================================================
// AnimationAction
// ============================================================================

#[test]
fn action_clamps_and_finishes() {
    let mut action = AnimationAction::new(ramp_clip("c", AnimatedProperty::SelectorBlend, 0.0, 1.0));

    action.update(0.6);
    assert!(!action.is_finished());
    action.update(0.6);
    assert!(action.is_finished());
    assert_eq!(action.time, 1.0);

    action.restart();
    assert!(!action.is_finished());
    assert_eq!(action.time, 0.0);
}

#[test]
fn zero_length_action_stays_put() {
    let mut action = AnimationAction::new(Arc::new(AnimationClip::empty("instant", 0.0)));
    action.update(0.5);
    assert_eq!(action.time, 0.0);
    assert!(action.is_finished());
}

// ============================================================================
// AnimationMixer
// ============================================================================

#[test]
fn exclusive_play_restarts_and_silences_others() {
    let mut mixer = AnimationMixer::new();
    let a = mixer.add_action(AnimationAction::new(ramp_clip("a", AnimatedProperty::SelectorBlend, 0.0, 1.0)));
    let b = mixer.add_action(AnimationAction::new(ramp_clip("b", AnimatedProperty::SelectorBlend, 1.0, 0.0)));

    mixer.update(0.5);
    mixer.play_exclusive(Some(b));
    assert_eq!(mixer.input(a).unwrap().weight, 0.0);
    assert_eq!(mixer.input(b).unwrap().weight, 1.0);
    assert_eq!(mixer.input(b).unwrap().time, 0.0);
    // Silenced inputs keep their clock.
    assert!(approx(mixer.input(a).unwrap().time, 0.5));

    mixer.play_exclusive(None);
    assert!((0..mixer.input_count()).all(|i| mixer.input(i).unwrap().weight == 0.0));
}

#[test]
fn apply_blends_by_weight() {
    let mut mixer = AnimationMixer::new();
    let a = mixer.add_action(AnimationAction::new(ramp_clip("a", AnimatedProperty::TargetWidth, 2.0, 2.0)));
    let b = mixer.add_action(AnimationAction::new(ramp_clip("b", AnimatedProperty::TargetWidth, 8.0, 8.0)));
    mixer.input_mut(a).unwrap().weight = 3.0;
    mixer.input_mut(b).unwrap().weight = 1.0;

    let mut properties = props();
    mixer.apply(&mut properties);
    assert!(approx(properties.target_width, 3.5));
}

#[test]
fn apply_leaves_undriven_properties() {
    let mut mixer = AnimationMixer::new();
    mixer.add_action(AnimationAction::new(ramp_clip("a", AnimatedProperty::SelectorBlend, 0.0, 1.0)));
    let silent = mixer.add_action(AnimationAction::new(ramp_clip("b", AnimatedProperty::SelectorOffset, 9.0, 9.0)));
    mixer.input_mut(silent).unwrap().weight = 0.0;

    mixer.update(0.5);
    let mut properties = props();
    mixer.apply(&mut properties);

    assert!(approx(properties.selector_blend, 0.5));
    assert_eq!(properties.target_width, 4.0);
    assert_eq!(properties.selector_offset, 0.25);
}

// ============================================================================
// AnimationGraph
// ============================================================================

#[test]
fn graph_evaluates_until_destroyed() {
    let mut mixer = AnimationMixer::new();
    mixer.add_action(AnimationAction::new(ramp_clip("a", AnimatedProperty::SelectorBlend, 0.0, 1.0)));
    let mut graph = AnimationGraph::create("menu", mixer);
    assert_eq!(graph.name(), "menu");

    let mut properties = props();
    graph.evaluate(0.25, &mut properties);
    assert!(approx(properties.selector_blend, 0.25));

    assert!(graph.destroy());
    assert!(!graph.is_valid());
    assert!(graph.mixer().is_none());

    graph.evaluate(0.25, &mut properties);
    assert!(approx(properties.selector_blend, 0.25));
}

#[test]
fn graph_destroy_is_idempotent() {
    let mut graph = AnimationGraph::create("menu", AnimationMixer::new());
    assert!(graph.is_valid());
    assert!(graph.destroy());
    assert!(!graph.destroy());
    assert!(!graph.destroy());
}
