//! Aspect-ratio resize policy for a base/overlay image pair.
//!
//! The two unequal-ratio branches are deliberately asymmetric: when the
//! base is proportionally wider, the overlay keeps its width and
//! shrinks in height; when the overlay is proportionally wider, the
//! base is scaled to the overlay's height. A resized overlay can
//! therefore end up wider than the canvas, in which case compositing
//! clips it.

use super::ComposeError;

/// Width and height of a raster image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Aspect ratio as width / height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Resize targets for a base/overlay pair.
///
/// At most one of the two images ever changes size; the plan records
/// the final dimensions of both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePlan {
    /// Final base dimensions (also the output canvas size)
    pub base: Dimensions,
    /// Final overlay dimensions
    pub overlay: Dimensions,
}

impl ResizePlan {
    /// Compute the resize targets for the given input dimensions.
    ///
    /// - Equal aspect ratios: whichever image has strictly greater
    ///   width is downsized to the other's exact dimensions; equal
    ///   widths leave both untouched.
    /// - Base proportionally wider: overlay becomes
    ///   `(overlay.width, trunc(overlay.width / base_ratio))`.
    /// - Overlay proportionally wider: base becomes
    ///   `(trunc(overlay.height * base_ratio), overlay.height)`.
    ///
    /// Fails with `InvalidGeometry` if an input or a computed target
    /// has a zero dimension.
    pub fn for_pair(base: Dimensions, overlay: Dimensions) -> Result<Self, ComposeError> {
        for dims in [base, overlay] {
            if dims.is_degenerate() {
                return Err(ComposeError::InvalidGeometry {
                    width: dims.width,
                    height: dims.height,
                });
            }
        }

        let base_ratio = base.aspect_ratio();
        let overlay_ratio = overlay.aspect_ratio();

        let plan = if base_ratio == overlay_ratio {
            if base.width > overlay.width {
                Self { base: overlay, overlay }
            } else if overlay.width > base.width {
                Self { base, overlay: base }
            } else {
                Self { base, overlay }
            }
        } else if base_ratio > overlay_ratio {
            let target = Dimensions::new(
                overlay.width,
                (overlay.width as f64 / base_ratio) as u32,
            );
            Self { base, overlay: target }
        } else {
            let target = Dimensions::new(
                (overlay.height as f64 * base_ratio) as u32,
                overlay.height,
            );
            Self { base: target, overlay }
        };

        for dims in [plan.base, plan.overlay] {
            if dims.is_degenerate() {
                return Err(ComposeError::InvalidGeometry {
                    width: dims.width,
                    height: dims.height,
                });
            }
        }

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_ratio_larger_base_downsized() {
        let plan = ResizePlan::for_pair(Dimensions::new(400, 200), Dimensions::new(200, 100))
            .unwrap();
        assert_eq!(plan.base, Dimensions::new(200, 100));
        assert_eq!(plan.overlay, Dimensions::new(200, 100));
    }

    #[test]
    fn test_equal_ratio_larger_overlay_downsized() {
        let plan = ResizePlan::for_pair(Dimensions::new(100, 100), Dimensions::new(300, 300))
            .unwrap();
        assert_eq!(plan.base, Dimensions::new(100, 100));
        assert_eq!(plan.overlay, Dimensions::new(100, 100));
    }

    #[test]
    fn test_equal_ratio_equal_width_untouched() {
        let plan = ResizePlan::for_pair(Dimensions::new(100, 100), Dimensions::new(100, 100))
            .unwrap();
        assert_eq!(plan.base, Dimensions::new(100, 100));
        assert_eq!(plan.overlay, Dimensions::new(100, 100));
    }

    #[test]
    fn test_wider_base_shrinks_overlay_height() {
        // base 200x100 (2.0) vs overlay 50x50 (1.0)
        let plan = ResizePlan::for_pair(Dimensions::new(200, 100), Dimensions::new(50, 50))
            .unwrap();
        assert_eq!(plan.base, Dimensions::new(200, 100));
        assert_eq!(plan.overlay, Dimensions::new(50, 25));
    }

    #[test]
    fn test_wider_base_truncates_overlay_height() {
        // base 300x100 (3.0) vs overlay 100x100 (1.0): 100 / 3.0 truncates to 33
        let plan = ResizePlan::for_pair(Dimensions::new(300, 100), Dimensions::new(100, 100))
            .unwrap();
        assert_eq!(plan.base, Dimensions::new(300, 100));
        assert_eq!(plan.overlay, Dimensions::new(100, 33));
    }

    #[test]
    fn test_wider_overlay_scales_base_to_overlay_height() {
        // base 100x200 (0.5) vs overlay 300x300 (1.0)
        let plan = ResizePlan::for_pair(Dimensions::new(100, 200), Dimensions::new(300, 300))
            .unwrap();
        assert_eq!(plan.base, Dimensions::new(150, 300));
        assert_eq!(plan.overlay, Dimensions::new(300, 300));
    }

    #[test]
    fn test_extreme_ratio_mismatch_rejected() {
        // base 1000x10 (100.0) vs overlay 50x100 (0.5): 50 / 100.0 truncates to 0
        let err = ResizePlan::for_pair(Dimensions::new(1000, 10), Dimensions::new(50, 100))
            .unwrap_err();
        assert!(matches!(err, ComposeError::InvalidGeometry { width: 50, height: 0 }));
    }

    #[test]
    fn test_zero_dimension_input_rejected() {
        let err = ResizePlan::for_pair(Dimensions::new(0, 100), Dimensions::new(50, 50))
            .unwrap_err();
        assert!(matches!(err, ComposeError::InvalidGeometry { width: 0, height: 100 }));
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(Dimensions::new(200, 100).aspect_ratio(), 2.0);
        assert_eq!(Dimensions::new(100, 100).aspect_ratio(), 1.0);
    }
}
