use crate::profile::MapProfile;
use crate::PixelPoint;

// Deobfuscation parameters for the upstream map-data service's condensed
// coordinate format. All of these are reverse-engineered from the provider's
// published data and must be reproduced exactly; the format itself is
// undocumented.
const XOR_KEY: u32 = 3_122_512_141;
const OFFSET_TABLE: [i32; 10] = [
    201_029, 255_880, 315_876, 196_809, 282_172, 270_304, 50_578, 234_400, 331_944, 111_170,
];
const COORD_BIAS: f64 = 42_044.0;
const COORD_SCALE: f64 = 0.788;

/// How far outside the map image a decoded pixel may land before the entry is
/// treated as corrupt or off-map.
const BOUNDS_SLACK_PX: f64 = 100.0;

/// Decode one obfuscated spawn coordinate pair into map-image pixels.
///
/// The encoder multiplied true values by ten before XOR-ing with a 32-bit
/// key, so the descramble is an i32 XOR followed by float division. The y
/// axis additionally carries an offset selected by a digit derived from the
/// fractional part of the decoded x value; that index formula is a black box
/// and is kept verbatim, double-mod guard included.
///
/// Returns `None` for entries that decode to NaN or land more than
/// [`BOUNDS_SLACK_PX`] outside the image on either axis. That filtering is
/// expected for off-map and corrupt source rows; no input is an error.
pub fn decode_spot(raw_x: i32, raw_y: i32, profile: &MapProfile) -> Option<PixelPoint> {
    let decoded_x = xor_descramble(raw_x);
    let decoded_y = xor_descramble(raw_y);

    let k = (((10.0 * decoded_x) % 10.0 + 10.0) % 10.0).floor() as usize;

    let game_x = (decoded_x - COORD_BIAS) / COORD_SCALE;
    let game_y = (decoded_y - COORD_BIAS + f64::from(OFFSET_TABLE[k])) / COORD_SCALE;

    let scale = profile.asset_scale();
    let px = game_x / 100.0 / scale;
    let py = game_y / 100.0 / scale;

    if px.is_nan() || py.is_nan() {
        return None;
    }
    let max = f64::from(profile.image_size) + BOUNDS_SLACK_PX;
    if px < -BOUNDS_SLACK_PX || px > max || py < -BOUNDS_SLACK_PX || py > max {
        return None;
    }

    Some(PixelPoint { x: px, y: py })
}

/// The provider's values are JS `ToInt32` arithmetic; the key reinterprets
/// as a negative i32 and the division is plain double-precision.
fn xor_descramble(raw: i32) -> f64 {
    f64::from((XOR_KEY as i32) ^ raw) / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{profile_for, MapId};
    use assert_approx_eq::assert_approx_eq;

    // Fixture pairs recorded from the reference decoder; the expected pixel
    // values are exact doubles, not approximations.

    #[test]
    fn decodes_recorded_erangel_fixture() {
        let profile = profile_for(MapId::Erangel);
        let p = decode_spot(-1_172_676_566, -1_172_650_519, profile).expect("in bounds");
        assert_approx_eq!(p.x, 100.97335025380706, 1e-9);
        assert_approx_eq!(p.y, 3024.8274111675128, 1e-9);
    }

    #[test]
    fn decoder_is_bit_for_bit_deterministic() {
        let profile = profile_for(MapId::Erangel);
        let a = decode_spot(-1_172_676_566, -1_172_650_519, profile).expect("in bounds");
        let b = decode_spot(-1_172_676_566, -1_172_650_519, profile).expect("in bounds");
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
    }

    #[test]
    fn asset_scale_doubles_sanhok_pixels() {
        let profile = profile_for(MapId::Sanhok);
        let p = decode_spot(-1_172_625_643, -1_172_615_491, profile).expect("in bounds");
        assert_approx_eq!(p.x, 80.40609137055837, 1e-9);
        assert_approx_eq!(p.y, 5126.522842639594, 1e-9);
    }

    #[test]
    fn far_out_of_bounds_entry_is_dropped() {
        let profile = profile_for(MapId::Erangel);
        // Decodes to roughly -407 px on x, well past the 100 px slack.
        assert!(decode_spot(-1_172_551_764, -1_172_650_519, profile).is_none());
    }

    #[test]
    fn offset_index_follows_the_decoded_fraction() {
        // The Erangel fixture's descrambled x ends in digit 7, selecting
        // offset 234400; a y-only change of one raw unit shifts the output by
        // 0.1 / 0.788 / 100 px without touching the index.
        let profile = profile_for(MapId::Erangel);
        let a = decode_spot(-1_172_676_566, -1_172_650_519, profile).expect("in bounds");
        let b = decode_spot(-1_172_676_566, -1_172_650_518, profile).expect("in bounds");
        assert_approx_eq!(a.x, b.x, 1e-12);
        assert_approx_eq!((b.y - a.y).abs(), 0.1 / COORD_SCALE / 100.0, 1e-9);
    }
}
