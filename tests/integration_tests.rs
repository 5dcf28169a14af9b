use std::cell::RefCell;
use std::rc::Rc;

use assert_approx_eq::assert_approx_eq;
use dropmap_engine::coords::{meters_to_render_units, render_to_game_coords};
use dropmap_engine::model::flight_path::{FlightPathModel, PathEndpoint};
use dropmap_engine::model::parachute::{ParachuteModel, PLANE_SPEED_MPS};
use dropmap_engine::profile::{profile_for, MapId};
use dropmap_engine::spots::decoder::decode_spot;
use dropmap_engine::spots::source::{build_overlay, RawSpotMap, RawVehicleMap, SpawnGroup};
use dropmap_engine::{GamePoint, RenderPoint};

#[test]
fn integration_flight_path_drives_jump_results() {
    let profile = profile_for(MapId::Erangel);

    // Wire the models together the way the surrounding app does: the flight
    // path's observer recomputes jump points on every change.
    let parachute = Rc::new(RefCell::new(ParachuteModel::new()));
    parachute
        .borrow_mut()
        .set_landing_point(RenderPoint::new(50.0, 0.0));
    parachute.borrow_mut().set_radii(&[937.5]);

    let observed_counts = Rc::new(RefCell::new(Vec::new()));
    let mut flight = FlightPathModel::new();
    {
        let parachute = Rc::clone(&parachute);
        let observed_counts = Rc::clone(&observed_counts);
        flight.on_change(move |segment| {
            let results = parachute.borrow().recompute(segment.as_ref(), profile);
            observed_counts.borrow_mut().push(results.len());
        });
    }

    flight.place_point(RenderPoint::new(0.0, 0.0));
    flight.place_point(RenderPoint::new(100.0, 0.0));
    // Dragging the exit back to the circle center shortens the corridor, so
    // the far crossing falls outside the extension window.
    flight.relocate(PathEndpoint::Exit, RenderPoint::new(50.0, 0.0));
    flight.reset();

    assert_eq!(*observed_counts.borrow(), vec![0, 2, 1, 0]);

    // Recompute once more with the final defined segment to check metrics.
    let mut flight = FlightPathModel::new();
    flight.place_point(RenderPoint::new(0.0, 0.0));
    flight.place_point(RenderPoint::new(100.0, 0.0));
    let segment = flight.effective_segment().expect("defined");
    let results = parachute.borrow().recompute(Some(&segment), profile);

    assert_eq!(results.len(), 2);
    assert_approx_eq!(results[0].dist_from_entry_m, 625.0, 1e-9);
    assert_approx_eq!(results[0].flight_time_s, 625.0 / PLANE_SPEED_MPS, 1e-9);
    assert_eq!(results[0].game_coords, GamePoint { x: 625, y: 0 });
    assert_approx_eq!(results[1].dist_from_entry_m, 2500.0, 1e-9);
}

#[test]
fn integration_conversions_agree_with_the_map_profile() {
    let profile = profile_for(MapId::Erangel);
    assert_approx_eq!(meters_to_render_units(937.5, profile), 30.0, 1e-9);
    assert_eq!(
        render_to_game_coords(128.0, -128.0, profile),
        GamePoint { x: 4000, y: 4000 }
    );
}

#[test]
fn integration_spot_payload_decodes_into_overlay() {
    let profile = profile_for(MapId::Erangel);

    let spots: RawSpotMap = serde_json::from_str(
        r#"{ "EThingSpotGroupType::GroupA": [
            [-1172676566, -1172650519],
            [-1172551764, -1172650519]
        ] }"#,
    )
    .expect("spots payload");
    let vehicles: RawVehicleMap =
        serde_json::from_str(r#"{ "EThingSpotGroupType::GroupA": { "vehicles": { "uaz": {} } } }"#)
            .expect("vehicles payload");

    let overlay = build_overlay(MapId::Erangel, &spots, &vehicles, profile);
    assert_eq!(overlay.groups.len(), 1);
    assert_eq!(overlay.groups[0].group, SpawnGroup::Road);
    assert_eq!(overlay.groups[0].points.len(), 1);
    assert_eq!(overlay.dropped, 1);

    // The surviving point matches a direct decode of the same pair.
    let direct = decode_spot(-1_172_676_566, -1_172_650_519, profile).expect("in bounds");
    assert_eq!(overlay.groups[0].points[0], direct);
    assert_approx_eq!(direct.x, 100.97335025380706, 1e-9);
}
