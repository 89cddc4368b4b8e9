use crate::geometry::{margin_corners, AxisRect, OrientedRect};
use crate::postprocess::merge_overlapping;
use crate::types::DetectConfig;

/// Result of one detection call: the crop regions plus diagnostic counts.
/// The counts exist for observability only; rejection is never an error.
#[derive(Clone, Debug)]
pub struct DetectOutput {
    /// Crop regions believed to contain exactly one plate each, in contour
    /// scan order (post merge).
    pub regions: Vec<AxisRect>,
    /// Contour boxes that passed the shape filter.
    pub accepted: usize,
    /// Contour boxes discarded by the shape filter or as degenerate.
    pub rejected: usize,
}

/// Locates probable number-plate regions among the minimal-area boxes of one
/// vehicle crop. Pure and stateless; safe to share across threads.
pub struct RegionDetector {
    pub cfg: DetectConfig,
}

impl RegionDetector {
    pub fn new(cfg: DetectConfig) -> Self {
        Self { cfg }
    }

    /// Filter the contour boxes down to plate-like rectangles, resolve
    /// overlaps into enclosing rectangles, and keep only landscape results.
    ///
    /// `frame_height` and `frame_width` are the pixel dimensions of the
    /// vehicle crop the boxes came from.
    pub fn detect(
        &self,
        rects: &[OrientedRect],
        frame_height: u32,
        frame_width: u32,
    ) -> DetectOutput {
        let mut candidates: Vec<AxisRect> = Vec::new();
        let mut rejected = 0usize;

        for rect in rects {
            if !self.plate_like(rect, frame_height, frame_width) {
                rejected += 1;
                continue;
            }
            let axis = margin_corners(rect.center, &rect.corners);
            if axis.width() <= 0 || axis.height() <= 0 {
                rejected += 1;
                continue;
            }
            candidates.push(axis);
        }

        let accepted = candidates.len();
        let merged = merge_overlapping(&candidates);

        // Plates read wider than tall; anything else after the merge is an
        // artifact of stacked candidates.
        let regions: Vec<AxisRect> = merged
            .into_iter()
            .filter(|r| r.width() > r.height())
            .collect();

        log::debug!(
            "plate detection: {} contours in, {} plate-like, {} rejected, {} regions out",
            rects.len(),
            accepted,
            rejected,
            regions.len()
        );

        DetectOutput {
            regions,
            accepted,
            rejected,
        }
    }

    /// Shape/size/orientation/scale heuristics for one minimal-area box.
    fn plate_like(&self, rect: &OrientedRect, frame_height: u32, frame_width: u32) -> bool {
        let cfg = &self.cfg;
        let w = rect.width;
        let h = rect.height;

        if !(w.max(h) > cfg.min_long_side && w.min(h) > cfg.min_short_side) {
            return false;
        }

        // Ratio is undefined (and the box useless) when either side is 0.
        let right_ratio = w > 0.0
            && h > 0.0
            && ((cfg.min_aspect < w / h && w / h < cfg.max_aspect)
                || (cfg.min_aspect < h / w && h / w < cfg.max_aspect));
        if !right_ratio {
            return false;
        }

        // Near 0 and near 90 both mean visually horizontal under the
        // minimal-area box convention.
        let angle = rect.angle_degrees.abs();
        if !((angle - 90.0).abs() <= cfg.max_tilt_degrees || angle <= cfg.max_tilt_degrees) {
            return false;
        }

        // A plate is small relative to the vehicle crop; near-frame-sized
        // boxes are the vehicle outline, not a plate.
        frame_height as f32 / h > cfg.min_frame_height_ratio
            && frame_width as f32 / w > cfg.min_frame_width_ratio
    }
}

impl Default for RegionDetector {
    fn default() -> Self {
        Self::new(DetectConfig::default())
    }
}
