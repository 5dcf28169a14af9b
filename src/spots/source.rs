use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::profile::{MapId, MapProfile};
use crate::spots::decoder::decode_spot;
use crate::PixelPoint;

/// Spawn-location category in the upstream map-data format.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SpawnGroup {
    Road,
    StartArea,
    Garage,
    Waterway,
    Glider,
    SpecialArmored,
}

impl SpawnGroup {
    pub const ALL: [SpawnGroup; 6] = [
        SpawnGroup::Road,
        SpawnGroup::StartArea,
        SpawnGroup::Garage,
        SpawnGroup::Waterway,
        SpawnGroup::Glider,
        SpawnGroup::SpecialArmored,
    ];

    /// The provider's JSON key for this group.
    pub fn key(&self) -> &'static str {
        match self {
            SpawnGroup::Road => "EThingSpotGroupType::GroupA",
            SpawnGroup::StartArea => "EThingSpotGroupType::GroupB",
            SpawnGroup::Garage => "EThingSpotGroupType::GroupC",
            SpawnGroup::Waterway => "EThingSpotGroupType::GroupE",
            SpawnGroup::Glider => "EThingSpotGroupType::GroupG",
            SpawnGroup::SpecialArmored => "EThingSpotGroupType::GroupL",
        }
    }

    pub fn from_key(key: &str) -> Option<SpawnGroup> {
        GROUP_BY_KEY.get(key).copied()
    }

    /// Short category slug used for overlay filtering.
    pub fn category(&self) -> &'static str {
        match self {
            SpawnGroup::Road => "road",
            SpawnGroup::StartArea => "start",
            SpawnGroup::Garage => "garage",
            SpawnGroup::Waterway => "water",
            SpawnGroup::Glider => "glider",
            SpawnGroup::SpecialArmored => "armored",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpawnGroup::Road => "Road vehicles",
            SpawnGroup::StartArea => "Starting-area vehicles",
            SpawnGroup::Garage => "Garage vehicles",
            SpawnGroup::Waterway => "Watercraft",
            SpawnGroup::Glider => "Motor gliders",
            SpawnGroup::SpecialArmored => "Armored vehicles",
        }
    }

    /// Marker color for this group's overlay dots.
    pub fn color(&self) -> &'static str {
        match self {
            SpawnGroup::Road => "#4CAF50",
            SpawnGroup::StartArea => "#FF9800",
            SpawnGroup::Garage => "#2196F3",
            SpawnGroup::Waterway => "#00BCD4",
            SpawnGroup::Glider => "#E91E63",
            SpawnGroup::SpecialArmored => "#795548",
        }
    }
}

static GROUP_BY_KEY: Lazy<HashMap<&'static str, SpawnGroup>> = Lazy::new(|| {
    SpawnGroup::ALL
        .iter()
        .map(|group| (group.key(), *group))
        .collect()
});

/// Raw `vehicleSpots-condensed.json` payload: group key to encoded
/// `[raw_x, raw_y]` pairs. Keys the catalog does not know are skipped during
/// decoding, not rejected at parse time.
pub type RawSpotMap = HashMap<String, Vec<[i32; 2]>>;

/// One group's entry in the provider's `vehicles.json`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GroupVehicles {
    /// Vehicle type name to provider metadata we have no use for.
    #[serde(default)]
    pub vehicles: BTreeMap<String, serde_json::Value>,
}

/// Raw `vehicles.json` payload: group key to the vehicle types spawning there.
pub type RawVehicleMap = HashMap<String, GroupVehicles>;

/// Decoded spawn positions for one group.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DecodedGroup {
    pub group: SpawnGroup,
    pub vehicle_names: Vec<String>,
    pub points: Vec<PixelPoint>,
}

/// Everything the overlay needs for one map, decoded once per load; the raw
/// pairs are not retained.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SpotOverlay {
    pub map_id: MapId,
    pub groups: Vec<DecodedGroup>,
    /// Source entries that decoded off-map or to NaN and were dropped.
    pub dropped: usize,
}

/// Decode a raw spot payload into an overlay.
///
/// Groups come back in the fixed catalog order regardless of payload key
/// order, with their vehicle names sorted; groups absent from the payload are
/// omitted. Unknown group keys and invalid coordinate pairs are skipped.
pub fn build_overlay(
    map_id: MapId,
    spots: &RawSpotMap,
    vehicles: &RawVehicleMap,
    profile: &MapProfile,
) -> SpotOverlay {
    let mut groups = Vec::new();
    let mut dropped = 0usize;

    for group in SpawnGroup::ALL {
        let Some(pairs) = spots.get(group.key()) else {
            continue;
        };

        let mut points = Vec::with_capacity(pairs.len());
        for &[raw_x, raw_y] in pairs {
            match decode_spot(raw_x, raw_y, profile) {
                Some(point) => points.push(point),
                None => dropped += 1,
            }
        }

        // BTreeMap keys are already in order.
        let vehicle_names = vehicles
            .get(group.key())
            .map(|v| v.vehicles.keys().cloned().collect())
            .unwrap_or_default();

        groups.push(DecodedGroup {
            group,
            vehicle_names,
            points,
        });
    }

    SpotOverlay {
        map_id,
        groups,
        dropped,
    }
}
