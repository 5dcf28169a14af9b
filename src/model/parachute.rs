use std::cmp::Ordering;

use serde::Serialize;

use crate::coords::{meters_to_render_units, render_to_game_coords, render_units_to_meters};
use crate::geometry::intersect::{line_circle_intersections, DEFAULT_EXTENSION};
use crate::geometry::Segment;
use crate::profile::MapProfile;
use crate::{GamePoint, RenderPoint};

/// Cruise speed of the drop aircraft, roughly 600 km/h.
pub const PLANE_SPEED_MPS: f64 = 166.0;

/// Jump-distance presets offered by the surrounding UI, in meters.
pub const PARACHUTE_DISTANCE_PRESETS: [f64; 5] = [1000.0, 1500.0, 2000.0, 2500.0, 3000.0];

const DEFAULT_RADIUS_M: f64 = 1000.0;

/// One jump point: where the flight corridor crosses a jump-distance circle.
///
/// Distances and time carry full precision; rounding for display belongs to
/// the presentation layer.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
pub struct JumpResult {
    /// The circle this intersection belongs to, in meters.
    pub radius_meters: f64,
    /// Intersection position in render units.
    pub point: RenderPoint,
    /// Intersection position in whole game meters.
    pub game_coords: GamePoint,
    /// Meters flown from the corridor entry to this point.
    pub dist_from_entry_m: f64,
    /// Glide distance from this point to the landing point, in meters.
    pub dist_to_landing_m: f64,
    /// Seconds from corridor entry at cruise speed.
    pub flight_time_s: f64,
}

/// Landing point plus the set of jump-distance circles around it.
///
/// Results are always recomputed from scratch; nothing here is patched
/// incrementally.
#[derive(Debug)]
pub struct ParachuteModel {
    landing: Option<RenderPoint>,
    radii_m: Vec<f64>,
}

impl Default for ParachuteModel {
    fn default() -> Self {
        ParachuteModel {
            landing: None,
            radii_m: vec![DEFAULT_RADIUS_M],
        }
    }
}

impl ParachuteModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace the landing point. Its lifecycle is independent of the
    /// flight path: circles can exist with no corridor to intersect.
    pub fn set_landing_point(&mut self, p: RenderPoint) {
        self.landing = Some(p);
    }

    pub fn clear_landing_point(&mut self) {
        self.landing = None;
    }

    pub fn landing(&self) -> Option<RenderPoint> {
        self.landing
    }

    /// Replace the radius set. Non-finite and non-positive values are
    /// discarded here so the solver only ever sees usable circles; the rest
    /// are kept in ascending order. An empty set clears all circles.
    pub fn set_radii(&mut self, values: &[f64]) {
        let mut radii: Vec<f64> = values
            .iter()
            .copied()
            .filter(|r| r.is_finite() && *r > 0.0)
            .collect();
        radii.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        self.radii_m = radii;
    }

    /// Radii in meters, ascending.
    pub fn radii(&self) -> &[f64] {
        &self.radii_m
    }

    /// Compute every jump point for the current landing point and radius set
    /// against `flight`, radius ascending and `t` ascending within a radius.
    ///
    /// A missing flight segment, landing point, or radius set yields an empty
    /// result; that is a normal outcome, distinct from "corridor present but
    /// out of reach", and the caller picks the message.
    pub fn recompute(&self, flight: Option<&Segment>, profile: &MapProfile) -> Vec<JumpResult> {
        let (Some(segment), Some(center)) = (flight, self.landing) else {
            return Vec::new();
        };

        let mut results = Vec::new();
        for &radius_m in &self.radii_m {
            let radius_units = meters_to_render_units(radius_m, profile);
            for hit in line_circle_intersections(
                segment.start,
                segment.end,
                center,
                radius_units,
                DEFAULT_EXTENSION,
            ) {
                let dist_from_entry_m =
                    render_units_to_meters(segment.start.distance(&hit.point), profile);
                let dist_to_landing_m =
                    render_units_to_meters(hit.point.distance(&center), profile);
                results.push(JumpResult {
                    radius_meters: radius_m,
                    point: hit.point,
                    game_coords: render_to_game_coords(hit.point.x, hit.point.y, profile),
                    dist_from_entry_m,
                    dist_to_landing_m,
                    flight_time_s: dist_from_entry_m / PLANE_SPEED_MPS,
                });
            }
        }
        results
    }
}
