//! Two-pose hand gesture classification.
//!
//! The classifier consumes the 21 landmarks of a single tracked hand in
//! normalized image coordinates (`[0, 1]`, y pointing down) and reduces them
//! to a [`HandSample`]: whether the hand is a fist, an open palm, or neither,
//! plus a pointer position in a symmetric `[-1, 1]` range with y pointing up.

use glam::Vec2;
use thiserror::Error;

use crate::constants::{FIST_DISTANCE_BELOW, OPEN_DISTANCE_ABOVE};

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// Fingertips used for the curl measure. The thumb is excluded.
pub const FINGERTIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GestureError {
    #[error("expected 42 (x, y) or 63 (x, y, z) landmark floats, got {0}")]
    WrongLength(usize),
    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// One frame of hand landmarks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarks {
    points: [Vec2; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Vec2; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Build landmarks from a flat float array as delivered by a hand tracker.
    ///
    /// Accepts either `x, y` pairs or `x, y, z` triples; depth is ignored.
    pub fn from_flat(coords: &[f32]) -> Result<Self, GestureError> {
        let stride = match coords.len() {
            n if n == LANDMARK_COUNT * 2 => 2,
            n if n == LANDMARK_COUNT * 3 => 3,
            n => return Err(GestureError::WrongLength(n)),
        };
        let mut points = [Vec2::ZERO; LANDMARK_COUNT];
        for (index, (point, chunk)) in points
            .iter_mut()
            .zip(coords.chunks_exact(stride))
            .enumerate()
        {
            let p = Vec2::new(chunk[0], chunk[1]);
            if !p.is_finite() {
                return Err(GestureError::NonFinite { index });
            }
            *point = p;
        }
        Ok(Self { points })
    }

    #[inline]
    pub fn point(&self, index: usize) -> Vec2 {
        self.points[index]
    }

    pub fn points(&self) -> &[Vec2; LANDMARK_COUNT] {
        &self.points
    }

    /// Mean wrist-to-fingertip distance over the four non-thumb fingers.
    pub fn average_fingertip_distance(&self) -> f32 {
        let wrist = self.points[WRIST];
        let total: f32 = FINGERTIPS
            .iter()
            .map(|&tip| self.points[tip].distance(wrist))
            .sum();
        total / FINGERTIPS.len() as f32
    }

    /// Hand centre mapped to `[-1, 1]` with y flipped so that up is positive.
    pub fn pointer(&self) -> Vec2 {
        let centre = self.points[MIDDLE_MCP];
        Vec2::new((centre.x - 0.5) * 2.0, (centre.y - 0.5) * -2.0)
    }
}

/// Distance thresholds separating fist, open hand and the dead zone between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureThresholds {
    pub fist_below: f32,
    pub open_above: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            fist_below: FIST_DISTANCE_BELOW,
            open_above: OPEN_DISTANCE_ABOVE,
        }
    }
}

impl GestureThresholds {
    /// Returns `(is_fist, is_open)`. Both comparisons are strict.
    #[inline]
    pub fn classify_distance(&self, avg_dist: f32) -> (bool, bool) {
        (avg_dist < self.fist_below, avg_dist > self.open_above)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Fist,
    Open,
    Indeterminate,
}

/// Classified hand state for one processed camera frame.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct HandSample {
    pub is_fist: bool,
    pub is_open: bool,
    pub x: f32,
    pub y: f32,
}

impl HandSample {
    #[inline]
    pub fn pointer(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn gesture(&self) -> Gesture {
        match (self.is_fist, self.is_open) {
            (true, _) => Gesture::Fist,
            (false, true) => Gesture::Open,
            (false, false) => Gesture::Indeterminate,
        }
    }
}

pub fn classify(landmarks: &HandLandmarks, thresholds: &GestureThresholds) -> HandSample {
    let (is_fist, is_open) = thresholds.classify_distance(landmarks.average_fingertip_distance());
    let pointer = landmarks.pointer();
    HandSample {
        is_fist,
        is_open,
        x: pointer.x,
        y: pointer.y,
    }
}

/// Classify a frame that may not contain a hand at all.
#[inline]
pub fn classify_frame(
    landmarks: Option<&HandLandmarks>,
    thresholds: &GestureThresholds,
) -> Option<HandSample> {
    landmarks.map(|l| classify(l, thresholds))
}
