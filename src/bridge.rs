//! Entry points for the page's hand tracker.
//!
//! The tracker runs in JavaScript; each processed camera frame calls
//! `push_hand_landmarks` or `clear_hand`, and `camera_ready` once the camera
//! stream starts. Samples land in a single shared [`HandSlot`] read by the
//! frame loop.

use std::cell::RefCell;
use tree_core::{classify, GestureThresholds, HandLandmarks, HandSlot};
use wasm_bindgen::prelude::*;

thread_local! {
    static SLOT: HandSlot = HandSlot::new();
    static THRESHOLDS: RefCell<GestureThresholds> = RefCell::new(GestureThresholds::default());
}

/// Handle to the slot shared with the frame loop.
pub fn slot() -> HandSlot {
    SLOT.with(HandSlot::clone)
}

pub fn set_thresholds(thresholds: GestureThresholds) {
    THRESHOLDS.with(|t| *t.borrow_mut() = thresholds);
}

/// Landmarks of the first detected hand, flattened as `x, y[, z]` per point
/// in normalized image coordinates. Malformed input counts as no hand.
#[wasm_bindgen]
pub fn push_hand_landmarks(flat: &[f32]) {
    let sample = match HandLandmarks::from_flat(flat) {
        Ok(landmarks) => {
            let thresholds = THRESHOLDS.with(|t| *t.borrow());
            Some(classify(&landmarks, &thresholds))
        }
        Err(e) => {
            log::warn!("[bridge] rejected landmarks: {e}");
            None
        }
    };
    SLOT.with(|slot| slot.publish(sample));
}

/// The tracker processed a frame without a hand.
#[wasm_bindgen]
pub fn clear_hand() {
    SLOT.with(|slot| slot.publish(None));
}

#[wasm_bindgen]
pub fn camera_ready() {
    log::info!("[bridge] camera ready");
    SLOT.with(HandSlot::mark_ready);
}
