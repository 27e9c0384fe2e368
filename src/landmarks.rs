//! Flattening of detected hand landmarks into classifier feature vectors.
//!
//! A landmark detector reports one point per hand joint. The classifier only
//! sees the flattened coordinates, so every vector must be produced by the
//! same function with the same landmark order.

use serde::{Deserialize, Serialize};

/// Landmarks reported per detected hand.
pub const HAND_LANDMARK_COUNT: usize = 21;
/// Coordinates contributed by each landmark (x, y, z).
pub const COORDINATES_PER_LANDMARK: usize = 3;
/// Feature vector length for a single flattened hand.
pub const HAND_FEATURE_DIMENSIONS: usize = HAND_LANDMARK_COUNT * COORDINATES_PER_LANDMARK;

/// A single detected landmark in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Flattens landmarks into `[x0, y0, z0, x1, y1, z1, ...]`, preserving landmark order.
pub fn flatten_landmarks(landmarks: &[Landmark]) -> Vec<f64> {
    let mut flattened = Vec::with_capacity(landmarks.len() * COORDINATES_PER_LANDMARK);
    for landmark in landmarks {
        flattened.extend_from_slice(&[landmark.x, landmark.y, landmark.z]);
    }
    flattened
}

/// Flattens every detected hand in a frame. A frame with no hands yields no vectors.
pub fn flatten_hands(hands: &[Vec<Landmark>]) -> Vec<Vec<f64>> {
    hands.iter().map(|hand| flatten_landmarks(hand)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_in_landmark_order() {
        let landmarks = [Landmark::new(0.1, 0.2, 0.3), Landmark::new(0.4, 0.5, 0.6)];
        assert_eq!(flatten_landmarks(&landmarks), vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
    }

    #[test]
    fn full_hand_has_expected_dimensions() {
        let hand = vec![Landmark::default(); HAND_LANDMARK_COUNT];
        assert_eq!(flatten_landmarks(&hand).len(), HAND_FEATURE_DIMENSIONS);
        assert_eq!(HAND_FEATURE_DIMENSIONS, 63);
    }

    #[test]
    fn frame_without_hands_yields_nothing() {
        assert!(flatten_hands(&[]).is_empty());
    }

    #[test]
    fn landmarks_deserialize_from_detector_json() {
        let hand: Vec<Landmark> =
            serde_json::from_str(r#"[{"x": 0.5, "y": 0.25, "z": -0.01}]"#).unwrap();
        assert_eq!(flatten_landmarks(&hand), vec![0.5, 0.25, -0.01]);
    }
}
