/// Thresholds for the plate-shape filter. The defaults are the contractual
/// constants any upstream contour step must be compatible with; they are
/// grouped here so a caller with a different camera setup can retune them.
#[derive(Clone, Copy, Debug)]
pub struct DetectConfig {
    /// The longer side of a candidate box must exceed this many pixels.
    pub min_long_side: f32,
    /// The shorter side of a candidate box must exceed this many pixels.
    pub min_short_side: f32,
    /// Aspect ratio (long/short in either measurement order) must be
    /// strictly inside (min_aspect, max_aspect).
    pub min_aspect: f32,
    pub max_aspect: f32,
    /// Maximum deviation of |angle| from 0 or 90 degrees; both express a
    /// visually horizontal minimal-area box.
    pub max_tilt_degrees: f32,
    /// frame_height / box_height must exceed this ratio.
    pub min_frame_height_ratio: f32,
    /// frame_width / box_width must exceed this ratio.
    pub min_frame_width_ratio: f32,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            min_long_side: 50.0,
            min_short_side: 10.0,
            min_aspect: 3.0,
            max_aspect: 5.0,
            max_tilt_degrees: 10.0,
            min_frame_height_ratio: 5.0,
            min_frame_width_ratio: 3.0,
        }
    }
}
