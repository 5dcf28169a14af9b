use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a supported map.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MapId {
    Erangel,
    Miramar,
    Sanhok,
    Vikendi,
    Taego,
    Rondo,
}

impl MapId {
    pub const ALL: [MapId; 6] = [
        MapId::Erangel,
        MapId::Miramar,
        MapId::Sanhok,
        MapId::Vikendi,
        MapId::Taego,
        MapId::Rondo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MapId::Erangel => "erangel",
            MapId::Miramar => "miramar",
            MapId::Sanhok => "sanhok",
            MapId::Vikendi => "vikendi",
            MapId::Taego => "taego",
            MapId::Rondo => "rondo",
        }
    }
}

impl fmt::Display for MapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable per-map descriptor, built once at startup and never mutated.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct MapProfile {
    pub id: MapId,
    pub name: &'static str,
    /// Internal name the upstream map-data service keys its files by.
    pub codename: &'static str,
    /// Square edge length in kilometers.
    pub size_km: u32,
    /// Edge length of the map image in pixels.
    pub image_size: u32,
    /// Maximum native tile zoom level.
    pub max_zoom: u8,
    /// Asset scaling for maps whose raw image is oversized relative to the
    /// playable area. Applies to raw-pixel conversions only, never to the
    /// meter/render-unit conversions.
    pub size_scale: Option<f64>,
}

impl MapProfile {
    pub fn size_meters(&self) -> f64 {
        f64::from(self.size_km) * 1000.0
    }

    /// Strictly positive for every profile in the table.
    pub fn pixels_per_meter(&self) -> f64 {
        f64::from(self.image_size) / self.size_meters()
    }

    pub fn asset_scale(&self) -> f64 {
        self.size_scale.unwrap_or(1.0)
    }
}

pub static MAP_PROFILES: [MapProfile; 6] = [
    MapProfile {
        id: MapId::Erangel,
        name: "Erangel",
        codename: "Baltic",
        size_km: 8,
        image_size: 8192,
        max_zoom: 5,
        size_scale: None,
    },
    MapProfile {
        id: MapId::Miramar,
        name: "Miramar",
        codename: "Desert",
        size_km: 8,
        image_size: 8192,
        max_zoom: 5,
        size_scale: None,
    },
    MapProfile {
        id: MapId::Sanhok,
        name: "Sanhok",
        codename: "Savage",
        size_km: 4,
        image_size: 8192,
        max_zoom: 5,
        // The Savage asset is rendered at double scale relative to its 4 km
        // playable area.
        size_scale: Some(0.5),
    },
    MapProfile {
        id: MapId::Vikendi,
        name: "Vikendi",
        codename: "DihorOtok",
        size_km: 8,
        image_size: 8192,
        max_zoom: 5,
        size_scale: None,
    },
    MapProfile {
        id: MapId::Taego,
        name: "Taego",
        codename: "Tiger",
        size_km: 8,
        image_size: 8192,
        max_zoom: 5,
        size_scale: None,
    },
    MapProfile {
        id: MapId::Rondo,
        name: "Rondo",
        codename: "Neon",
        size_km: 8,
        image_size: 8192,
        max_zoom: 5,
        size_scale: None,
    },
];

pub fn profile_for(id: MapId) -> &'static MapProfile {
    match id {
        MapId::Erangel => &MAP_PROFILES[0],
        MapId::Miramar => &MAP_PROFILES[1],
        MapId::Sanhok => &MAP_PROFILES[2],
        MapId::Vikendi => &MAP_PROFILES[3],
        MapId::Taego => &MAP_PROFILES[4],
        MapId::Rondo => &MAP_PROFILES[5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_table_entries() {
        for id in MapId::ALL {
            assert_eq!(profile_for(id).id, id);
        }
    }

    #[test]
    fn pixel_density_is_positive() {
        for profile in &MAP_PROFILES {
            assert!(profile.pixels_per_meter() > 0.0);
        }
    }

    #[test]
    fn sanhok_is_the_only_scaled_asset() {
        for profile in &MAP_PROFILES {
            if profile.id == MapId::Sanhok {
                assert_eq!(profile.asset_scale(), 0.5);
                assert_eq!(profile.size_km, 4);
            } else {
                assert_eq!(profile.asset_scale(), 1.0);
                assert_eq!(profile.size_km, 8);
            }
        }
    }

    #[test]
    fn map_id_serializes_lowercase() {
        let id: MapId = serde_json::from_str("\"sanhok\"").expect("map id");
        assert_eq!(id, MapId::Sanhok);
        assert_eq!(serde_json::to_string(&MapId::Rondo).expect("json"), "\"rondo\"");
    }
}
