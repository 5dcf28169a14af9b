use dropmap_engine::coords::{pixel_to_render_point, render_to_game_coords};
use dropmap_engine::geometry::intersect::DEFAULT_EXTENSION;
use dropmap_engine::geometry::Segment;
use dropmap_engine::model::parachute::ParachuteModel;
use dropmap_engine::profile::{profile_for, MapId};
use dropmap_engine::spots::source::{build_overlay, RawSpotMap, RawVehicleMap};
use dropmap_engine::RenderPoint;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde::{Deserialize, Serialize};

/// Per-radius marker colors, reused cyclically when more circles are
/// requested than the palette holds. Purely presentational; result ordering
/// is what the engine guarantees.
const DISTANCE_COLORS: [&str; 11] = [
    "#00ff88", "#00ccff", "#ffaa00", "#ff66aa", "#aa66ff", "#66ffcc", "#ff6644", "#44aaff",
    "#ffcc00", "#ff44aa", "#66ff66",
];

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum EngineRequest {
    /// Render-space position to in-game meters (the map's coordinate readout).
    GameCoords { map: MapId, x: f64, y: f64 },
    /// Jump points where the flight corridor crosses the jump circles.
    JumpPoints {
        map: MapId,
        landing: [f64; 2],
        #[serde(default)]
        radii: Vec<f64>,
        flight: Option<FlightEndpoints>,
    },
    /// Decode a raw vehicle-spot payload into overlay markers.
    DecodeSpots {
        map: MapId,
        spots: RawSpotMap,
        #[serde(default)]
        vehicles: RawVehicleMap,
        /// Category slugs to keep; absent means all groups.
        categories: Option<Vec<String>>,
    },
}

#[derive(Debug, Deserialize)]
struct FlightEndpoints {
    entry: [f64; 2],
    exit: [f64; 2],
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum EngineResponse {
    GameCoords {
        x: i32,
        y: i32,
    },
    JumpPoints {
        outcome: JumpOutcome,
        corridor: Option<CorridorResult>,
        results: Vec<JumpPointResult>,
    },
    Spots {
        groups: Vec<SpotGroupResult>,
        dropped: usize,
    },
    Error {
        message: String,
    },
}

/// Why a jump-point response may be empty; the UI picks its empty-state
/// message off this.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum JumpOutcome {
    Ok,
    NoFlightPath,
    NoIntersection,
}

#[derive(Debug, Serialize)]
struct CorridorResult {
    start: [f64; 2],
    end: [f64; 2],
}

#[derive(Debug, Serialize)]
struct JumpPointResult {
    radius_m: f64,
    color: &'static str,
    coords: [i32; 2],
    dist_from_entry_m: i64,
    dist_to_landing_m: i64,
    flight_time_s: i64,
}

#[derive(Debug, Serialize)]
struct SpotGroupResult {
    category: &'static str,
    label: &'static str,
    color: &'static str,
    vehicle_names: Vec<String>,
    /// Raw image-pixel positions.
    pixels: Vec<[f64; 2]>,
    /// The same positions in the renderer's coordinate system.
    render: Vec<[f64; 2]>,
}

async fn handler(event: LambdaEvent<EngineRequest>) -> Result<EngineResponse, Error> {
    let req = event.payload;
    match req {
        EngineRequest::GameCoords { map, x, y } => {
            if !(x.is_finite() && y.is_finite()) {
                return Ok(EngineResponse::Error {
                    message: "coordinates must be finite".into(),
                });
            }
            let profile = profile_for(map);
            let coords = render_to_game_coords(x, y, profile);
            Ok(EngineResponse::GameCoords {
                x: coords.x,
                y: coords.y,
            })
        }
        EngineRequest::JumpPoints {
            map,
            landing,
            radii,
            flight,
        } => {
            let profile = profile_for(map);

            let endpoints = flight
                .iter()
                .flat_map(|f| f.entry.iter().chain(f.exit.iter()));
            if !landing.iter().chain(endpoints).all(|v| v.is_finite()) {
                return Ok(EngineResponse::Error {
                    message: "coordinates must be finite".into(),
                });
            }

            let mut model = ParachuteModel::new();
            model.set_landing_point(RenderPoint::new(landing[0], landing[1]));
            if !radii.is_empty() {
                model.set_radii(&radii);
            }

            let segment = flight.map(|f| {
                Segment::new(
                    RenderPoint::new(f.entry[0], f.entry[1]),
                    RenderPoint::new(f.exit[0], f.exit[1]),
                )
            });
            let results = model.recompute(segment.as_ref(), profile);

            let outcome = match (&segment, results.is_empty()) {
                (None, _) => JumpOutcome::NoFlightPath,
                (Some(_), true) => JumpOutcome::NoIntersection,
                (Some(_), false) => JumpOutcome::Ok,
            };
            let corridor = segment.map(|s| {
                let extended = s.extended(DEFAULT_EXTENSION);
                CorridorResult {
                    start: [extended.start.x, extended.start.y],
                    end: [extended.end.x, extended.end.y],
                }
            });

            let radii_sorted = model.radii().to_vec();
            let results = results
                .into_iter()
                .map(|r| {
                    let radius_idx = radii_sorted
                        .iter()
                        .position(|&m| m == r.radius_meters)
                        .unwrap_or(0);
                    JumpPointResult {
                        radius_m: r.radius_meters,
                        color: DISTANCE_COLORS[radius_idx % DISTANCE_COLORS.len()],
                        coords: [r.game_coords.x, r.game_coords.y],
                        dist_from_entry_m: r.dist_from_entry_m.round() as i64,
                        dist_to_landing_m: r.dist_to_landing_m.round() as i64,
                        flight_time_s: r.flight_time_s.round() as i64,
                    }
                })
                .collect();

            Ok(EngineResponse::JumpPoints {
                outcome,
                corridor,
                results,
            })
        }
        EngineRequest::DecodeSpots {
            map,
            spots,
            vehicles,
            categories,
        } => {
            let profile = profile_for(map);
            let overlay = build_overlay(map, &spots, &vehicles, profile);

            let groups = overlay
                .groups
                .into_iter()
                .filter(|g| match &categories {
                    Some(wanted) => wanted.iter().any(|c| c == g.group.category()),
                    None => true,
                })
                .map(|g| {
                    let render = g
                        .points
                        .iter()
                        .map(|&p| {
                            let rp = pixel_to_render_point(p);
                            [rp.x, rp.y]
                        })
                        .collect();
                    SpotGroupResult {
                        category: g.group.category(),
                        label: g.group.label(),
                        color: g.group.color(),
                        vehicle_names: g.vehicle_names,
                        pixels: g.points.iter().map(|p| [p.x, p.y]).collect(),
                        render,
                    }
                })
                .collect();

            Ok(EngineResponse::Spots {
                groups,
                dropped: overlay.dropped,
            })
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let func = service_fn(handler);
    lambda_runtime::run(func).await
}
