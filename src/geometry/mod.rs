pub mod intersect;

use serde::{Deserialize, Serialize};

use crate::RenderPoint;

/// Directed segment in render space, parametrized so that `start` is t=0 and
/// `end` is t=1.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    pub start: RenderPoint,
    pub end: RenderPoint,
}

impl Segment {
    pub fn new(start: RenderPoint, end: RenderPoint) -> Self {
        Segment { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    pub fn point_at(&self, t: f64) -> RenderPoint {
        RenderPoint {
            x: self.start.x + t * (self.end.x - self.start.x),
            y: self.start.y + t * (self.end.y - self.start.y),
        }
    }

    /// The segment stretched symmetrically by `ratio` of its own length on
    /// each end. Aircraft fly a straight line through and beyond the marked
    /// endpoints, so the drawable corridor extends past both.
    pub fn extended(&self, ratio: f64) -> Segment {
        Segment {
            start: self.point_at(-ratio),
            end: self.point_at(1.0 + ratio),
        }
    }
}
