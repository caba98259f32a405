//! Pan-zoom transform for carousel pages.
//!
//! Every page in the swipeable viewport is scaled down and pulled toward the
//! centre in proportion to how far its centre sits from the viewport centre.
//! The math is isolated here so the host only has to sample geometry and
//! apply the result.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Maximum horizontal pull applied to an off-centre page, in dp.
pub const MAX_TRANSLATE_OFFSET_X_DIP: f32 = 180.0;

/// How strongly the centre offset shrinks a page.
const OFFSET_RATE_FACTOR: f32 = 0.38;

/// Geometry sampled by the host on every layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ViewportGeometry {
    pub viewport_width: f32,
    pub viewport_left_scroll: f32,
    pub page_left: f32,
    pub page_width: f32,
}

impl ViewportGeometry {
    /// Signed distance between the page centre and the viewport centre.
    pub fn center_offset(&self) -> f32 {
        let left_in_screen = self.page_left - self.viewport_left_scroll;
        let page_center = left_in_screen + self.page_width / 2.0;
        page_center - self.viewport_width / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TransformResult {
    pub scale_factor: f32,
    pub translate_x: f32,
    pub elevation: f32,
}

impl TransformResult {
    /// Whether scale and translation should be applied to the page.
    ///
    /// A non-positive scale means the page is far off-screen; the host keeps
    /// the previous scale/translation and only updates the elevation.
    pub fn is_visible(&self) -> bool {
        self.scale_factor > 0.0
    }
}

/// Computes [`TransformResult`]s for a fixed maximum pull in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometryTransform {
    max_offset_px: f32,
}

impl PageGeometryTransform {
    pub fn new(max_offset_px: f32) -> Self {
        Self { max_offset_px }
    }

    /// Builds the transform from a dp length and the host density factor.
    pub fn from_density(max_offset_dip: f32, density: f32) -> Self {
        Self::new(dp_to_px(max_offset_dip, density) as f32)
    }

    pub fn max_offset_px(&self) -> f32 {
        self.max_offset_px
    }

    pub fn compute(&self, geom: &ViewportGeometry) -> TransformResult {
        let offset_rate = if geom.viewport_width > 0.0 {
            geom.center_offset() * OFFSET_RATE_FACTOR / geom.viewport_width
        } else {
            0.0
        };
        let scale_factor = 1.0 - offset_rate.abs();
        TransformResult {
            scale_factor,
            translate_x: -self.max_offset_px * offset_rate,
            elevation: scale_factor,
        }
    }
}

/// Converts density-independent units to whole pixels, rounding half up.
pub fn dp_to_px(dip: f32, density: f32) -> u32 {
    (dip * density + 0.5).max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(
        viewport_width: f32,
        scroll: f32,
        page_left: f32,
        page_width: f32,
    ) -> ViewportGeometry {
        ViewportGeometry {
            viewport_width,
            viewport_left_scroll: scroll,
            page_left,
            page_width,
        }
    }

    #[test]
    fn centred_page_is_untouched() {
        let transform = PageGeometryTransform::new(360.0);
        let result = transform.compute(&geometry(1000.0, 0.0, 0.0, 1000.0));
        assert_eq!(
            result,
            TransformResult {
                scale_factor: 1.0,
                translate_x: 0.0,
                elevation: 1.0,
            }
        );
        assert!(result.is_visible());
    }

    #[test]
    fn full_width_page_aligned_with_scroll_has_zero_offset() {
        let transform = PageGeometryTransform::new(360.0);
        let result = transform.compute(&geometry(720.0, 1440.0, 1440.0, 720.0));
        assert_eq!(result.scale_factor, 1.0);
        assert_eq!(result.translate_x, 0.0);
    }

    #[test]
    fn neighbour_page_shrinks_and_pulls_inward() {
        let transform = PageGeometryTransform::new(100.0);
        // Page one full viewport to the right: offset 1000, rate 0.38.
        let result = transform.compute(&geometry(1000.0, 0.0, 1000.0, 1000.0));
        assert!((result.scale_factor - 0.62).abs() < 1e-6);
        assert!((result.translate_x + 38.0).abs() < 1e-4);
        assert_eq!(result.elevation, result.scale_factor);

        let left = transform.compute(&geometry(1000.0, 1000.0, 0.0, 1000.0));
        assert!((left.scale_factor - 0.62).abs() < 1e-6);
        assert!((left.translate_x - 38.0).abs() < 1e-4);
    }

    #[test]
    fn distant_page_is_reported_as_hidden() {
        let transform = PageGeometryTransform::new(100.0);
        let result = transform.compute(&geometry(1000.0, 0.0, 3000.0, 1000.0));
        assert!(result.scale_factor <= 0.0);
        assert!(!result.is_visible());
        assert_eq!(result.elevation, result.scale_factor);
    }

    #[test]
    fn scale_never_exceeds_one() {
        let transform = PageGeometryTransform::new(360.0);
        for left in [0.0, 125.0, 480.0, 999.0, 5000.0] {
            for scroll in [0.0, 250.0, 4000.0] {
                let result = transform.compute(&geometry(1080.0, scroll, left, 900.0));
                assert!(result.scale_factor <= 1.0);
            }
        }
    }

    #[test]
    fn compute_is_deterministic() {
        let transform = PageGeometryTransform::from_density(MAX_TRANSLATE_OFFSET_X_DIP, 2.75);
        let geom = geometry(1080.0, 312.0, 900.0, 860.0);
        assert_eq!(transform.compute(&geom), transform.compute(&geom));
    }

    #[test]
    fn converts_dp_with_half_up_rounding() {
        assert_eq!(dp_to_px(180.0, 1.0), 180);
        assert_eq!(dp_to_px(180.0, 2.625), 473);
        assert_eq!(dp_to_px(1.0, 1.5), 2);
        let transform = PageGeometryTransform::from_density(MAX_TRANSLATE_OFFSET_X_DIP, 3.0);
        assert_eq!(transform.max_offset_px(), 540.0);
    }
}
