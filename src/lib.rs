pub mod coords;
pub mod data;
pub mod geometry;
pub mod model;
pub mod profile;
pub mod spots;

use serde::{Deserialize, Serialize};

/// Point in the map renderer's flat Cartesian system.
///
/// Origin is the map's top-left corner; x grows rightward and y grows
/// *negative* downward (the rendering library's convention).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct RenderPoint {
    pub x: f64,
    pub y: f64,
}

impl RenderPoint {
    pub fn new(x: f64, y: f64) -> Self {
        RenderPoint { x, y }
    }

    pub fn distance(&self, other: &RenderPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// In-game position in whole meters, origin at the map's top-left corner,
/// y increasing downward.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GamePoint {
    pub x: i32,
    pub y: i32,
}

/// Position in raw map-image pixels, before render scaling is applied.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}
