//! Keyboard/mouse stand-in for a camera hand tracker.
//!
//! The window event loop edits [`SimControls`]; the capture thread turns the
//! current controls into a synthetic 21-point hand every frame.

use std::sync::{Arc, Mutex, PoisonError};

use glam::Vec2;
use tree_core::{HandLandmarks, HandSource, FINGERTIPS, LANDMARK_COUNT, MIDDLE_MCP, WRIST};

/// Fingertip spread (wrist to tip, normalized image units) per pose.
const FIST_SPREAD: f32 = 0.12;
const OPEN_SPREAD: f32 = 0.45;
const RELAXED_SPREAD: f32 = 0.27;
/// Wrist sits this far below the palm centre.
const PALM_LENGTH: f32 = 0.1;
/// Fan angles of index, middle, ring and pinky tips around straight up.
const FINGER_FAN: [f32; 4] = [-0.3, -0.1, 0.1, 0.3];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimPose {
    Fist,
    Open,
    /// Between the thresholds; classifies as neither.
    Relaxed,
}

impl SimPose {
    fn spread(self) -> f32 {
        match self {
            SimPose::Fist => FIST_SPREAD,
            SimPose::Open => OPEN_SPREAD,
            SimPose::Relaxed => RELAXED_SPREAD,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SimControls {
    /// Palm centre in normalized image coordinates, origin top-left.
    pub cursor: Vec2,
    pub pose: SimPose,
    pub present: bool,
}

impl Default for SimControls {
    fn default() -> Self {
        Self {
            cursor: Vec2::splat(0.5),
            pose: SimPose::Relaxed,
            present: true,
        }
    }
}

pub type SharedControls = Arc<Mutex<SimControls>>;

pub struct SimulatedHand {
    controls: SharedControls,
}

impl SimulatedHand {
    pub fn new(controls: SharedControls) -> Self {
        Self { controls }
    }
}

impl HandSource for SimulatedHand {
    fn next_frame(&mut self) -> Option<HandLandmarks> {
        let controls = *self.controls.lock().unwrap_or_else(PoisonError::into_inner);
        controls
            .present
            .then(|| synth_hand(controls.cursor, controls.pose))
    }

    fn close(&mut self) {
        log::info!("[sim] hand source closed");
    }
}

/// Hand with the middle knuckle at `centre` and every fingertip exactly
/// `pose.spread()` from the wrist.
pub fn synth_hand(centre: Vec2, pose: SimPose) -> HandLandmarks {
    let wrist = centre + Vec2::new(0.0, PALM_LENGTH);
    let spread = pose.spread();
    let mut points = [centre; LANDMARK_COUNT];
    points[WRIST] = wrist;
    points[MIDDLE_MCP] = centre;
    for (tip, angle) in FINGERTIPS.into_iter().zip(FINGER_FAN) {
        points[tip] = wrist + Vec2::new(angle.sin(), -angle.cos()) * spread;
    }
    HandLandmarks::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_core::{classify, Gesture, GestureThresholds};

    fn gesture_of(pose: SimPose) -> Gesture {
        let hand = synth_hand(Vec2::new(0.3, 0.6), pose);
        classify(&hand, &GestureThresholds::default()).gesture()
    }

    #[test]
    fn poses_classify_as_intended() {
        assert_eq!(gesture_of(SimPose::Fist), Gesture::Fist);
        assert_eq!(gesture_of(SimPose::Open), Gesture::Open);
        assert_eq!(gesture_of(SimPose::Relaxed), Gesture::Indeterminate);
    }

    #[test]
    fn pointer_follows_cursor() {
        let hand = synth_hand(Vec2::new(0.75, 0.25), SimPose::Open);
        let sample = classify(&hand, &GestureThresholds::default());
        assert!((sample.x - 0.5).abs() < 1e-6);
        assert!((sample.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn hidden_hand_yields_no_frame() {
        let controls = SharedControls::default();
        let mut source = SimulatedHand::new(Arc::clone(&controls));
        assert!(source.next_frame().is_some());
        controls.lock().unwrap().present = false;
        assert!(source.next_frame().is_none());
    }
}
