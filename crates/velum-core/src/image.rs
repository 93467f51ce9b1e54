//! Downscale policy for capping image pixel area.

/// Default pixel-area budget for previewed images.
pub const DEFAULT_MAX_PIXEL_AREA: f64 = 1280.0 * 720.0;

/// Returns the uniform scale factor that brings `width * height` under
/// `max_area`, or `1.0` when the image already fits. The caller applies the
/// factor to both axes through the host's scaling primitive, preserving
/// aspect ratio.
pub fn downscale_factor(width: f64, height: f64, max_area: f64) -> f64 {
    let area = width * height;
    if area <= max_area {
        1.0
    } else {
        max_area / area
    }
}

/// [`downscale_factor`] with the [`DEFAULT_MAX_PIXEL_AREA`] budget.
pub fn downscale_factor_default(width: f64, height: f64) -> f64 {
    downscale_factor(width, height, DEFAULT_MAX_PIXEL_AREA)
}
