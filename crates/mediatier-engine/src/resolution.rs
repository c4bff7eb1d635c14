//! Resolution tier rules
//!
//! Pure bucket functions mapping an image's pixel count or a video's
//! vertical resolution to a tier.

use mediatier_core::models::Tier;

/// Pixel count from which an image reaches tier 1.
pub const SMALL_IMAGE_PIXELS: u64 = 100_000;

/// Pixel count from which an image reaches tier 2.
pub const MEDIUM_IMAGE_PIXELS: u64 = 420_000;

/// Pixel count from which an image reaches tier 4.
pub const LARGE_IMAGE_PIXELS: u64 = 950_000;

/// Vertical resolution from which a video counts as high quality.
pub const HIGH_QUALITY_VIDEO_HEIGHT: u64 = 480;

/// Tier an image earns from its pixel count alone.
///
/// The buckets jump from tier 2 straight to tier 4; tier 3 is not awarded
/// on resolution grounds.
pub fn image_resolution_tier(pixel_count: u64) -> Tier {
    if pixel_count >= LARGE_IMAGE_PIXELS {
        Tier::T4
    } else if pixel_count >= MEDIUM_IMAGE_PIXELS {
        Tier::T2
    } else if pixel_count >= SMALL_IMAGE_PIXELS {
        Tier::T1
    } else {
        Tier::T0
    }
}

/// Whether a video's vertical resolution alone earns it the top tier.
pub fn is_high_quality_video(height: u64) -> bool {
    height >= HIGH_QUALITY_VIDEO_HEIGHT
}
