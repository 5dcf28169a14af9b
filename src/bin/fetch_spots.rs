use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use dropmap_engine::data::write_overlay_to_file;
use dropmap_engine::profile::{MapProfile, MAP_PROFILES};
use dropmap_engine::spots::source::{build_overlay, RawSpotMap, RawVehicleMap, SpotOverlay};
use log::{info, warn};
use reqwest::blocking::Client;
use serde::Serialize;

const SPOT_DATA_BASE: &str = "https://battlegrounds.party/map/data";

#[derive(Debug, Serialize)]
struct OverlayMetadata {
    map: String,
    codename: String,
    groups: usize,
    spots: usize,
    dropped: usize,
    generated_at_epoch: u64,
}

fn main() -> Result<()> {
    env_logger::init();

    let client = Client::builder()
        .user_agent("dropmap-engine-spot-fetcher/0.1")
        .build()?;

    let output_dir = PathBuf::from("data");
    fs::create_dir_all(&output_dir).context("failed to create data output directory")?;

    let mut manifest = Vec::new();
    for profile in &MAP_PROFILES {
        let overlay = match fetch_map_overlay(&client, profile) {
            Ok(overlay) => overlay,
            Err(err) => {
                warn!("Skipping {}: {err:#}", profile.id);
                continue;
            }
        };

        let spot_count: usize = overlay.groups.iter().map(|g| g.points.len()).sum();
        let bundle_path = output_dir.join(format!("{}.bin", profile.id));
        write_overlay_to_file(&overlay, &bundle_path)
            .with_context(|| format!("failed to write bundle to {}", bundle_path.display()))?;

        info!(
            "Wrote {} ({} groups, {} spots, {} dropped)",
            bundle_path.display(),
            overlay.groups.len(),
            spot_count,
            overlay.dropped
        );

        manifest.push(OverlayMetadata {
            map: profile.id.to_string(),
            codename: profile.codename.to_string(),
            groups: overlay.groups.len(),
            spots: spot_count,
            dropped: overlay.dropped,
            generated_at_epoch: current_epoch_seconds(),
        });
    }

    let manifest_path = output_dir.join("spots.meta.json");
    let manifest_json = serde_json::to_vec_pretty(&manifest)?;
    fs::write(&manifest_path, manifest_json)
        .with_context(|| format!("failed to write manifest to {}", manifest_path.display()))?;

    info!("Wrote manifest for {} maps to {}", manifest.len(), manifest_path.display());

    Ok(())
}

fn fetch_map_overlay(client: &Client, profile: &'static MapProfile) -> Result<SpotOverlay> {
    let spots_url = format!("{SPOT_DATA_BASE}/{}/vehicleSpots-condensed.json", profile.codename);
    let vehicles_url = format!("{SPOT_DATA_BASE}/{}/vehicles.json", profile.codename);

    let spots: RawSpotMap = fetch_json(client, &spots_url)?;
    let vehicles: RawVehicleMap = fetch_json(client, &vehicles_url)?;

    Ok(build_overlay(profile.id, &spots, &vehicles, profile))
}

fn fetch_json<T: serde::de::DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("failed to query {url}"))?
        .error_for_status()
        .with_context(|| format!("{url} returned an error status"))?;
    response
        .json()
        .with_context(|| format!("failed to parse payload from {url}"))
}

fn current_epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
