#![allow(dead_code)]
use glam::Vec2;
use tree_core::{HandLandmarks, FINGERTIPS, LANDMARK_COUNT, MIDDLE_MCP, WRIST};

/// Synthetic hand: wrist below the centre, all four fingertips straight up at
/// `spread` from the wrist, middle MCP at `centre`.
pub fn hand(centre: Vec2, spread: f32) -> HandLandmarks {
    let wrist = Vec2::new(centre.x, centre.y + 0.1);
    let mut points = [centre; LANDMARK_COUNT];
    points[WRIST] = wrist;
    points[MIDDLE_MCP] = centre;
    for tip in FINGERTIPS {
        points[tip] = Vec2::new(wrist.x, wrist.y - spread);
    }
    HandLandmarks::new(points)
}

pub fn fist() -> HandLandmarks {
    hand(Vec2::new(0.5, 0.5), 0.1)
}

pub fn open_hand() -> HandLandmarks {
    hand(Vec2::new(0.5, 0.5), 0.45)
}

pub fn relaxed() -> HandLandmarks {
    hand(Vec2::new(0.5, 0.5), 0.27)
}
