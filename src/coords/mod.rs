use crate::profile::MapProfile;
use crate::{GamePoint, PixelPoint, RenderPoint};

/// Fixed ratio between raw image pixels and render units: 2^5, matching the
/// renderer's maximum native zoom. One render unit spans 32 image pixels.
pub const RENDER_SCALE: f64 = 32.0;

/// Convert a distance in meters to the renderer's unit system.
pub fn meters_to_render_units(meters: f64, profile: &MapProfile) -> f64 {
    meters * profile.pixels_per_meter() / RENDER_SCALE
}

/// Exact inverse of [`meters_to_render_units`].
pub fn render_units_to_meters(units: f64, profile: &MapProfile) -> f64 {
    units * RENDER_SCALE / profile.pixels_per_meter()
}

/// Convert a raw image-pixel distance to render units.
pub fn pixels_to_render_units(pixels: f64) -> f64 {
    pixels / RENDER_SCALE
}

/// Place a raw image-pixel position into the renderer's coordinate system,
/// where y grows negative downward.
pub fn pixel_to_render_point(p: PixelPoint) -> RenderPoint {
    RenderPoint {
        x: p.x / RENDER_SCALE,
        y: -p.y / RENDER_SCALE,
    }
}

/// Map a render-space position to in-game meters, rounded to the nearest
/// whole meter. Game space has its origin at the map's top-left corner with
/// y increasing downward, so the renderer's negative-growing y flips sign.
pub fn render_to_game_coords(x: f64, y: f64, profile: &MapProfile) -> GamePoint {
    let span = f64::from(profile.image_size) / RENDER_SCALE;
    let game_x = (x / span) * profile.size_meters();
    let game_y = (-y / span) * profile.size_meters();
    GamePoint {
        x: game_x.round() as i32,
        y: game_y.round() as i32,
    }
}
