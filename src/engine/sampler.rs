//! Scroll sampling — normalizes a scroll position to a progress fraction.

/// Host capability: where the scrollable content currently sits.
///
/// Units are whatever the host measures in (pixels, terminal rows); only
/// ratios matter here.
pub trait ScrollSurface {
    /// Current vertical scroll offset from the top.
    fn offset(&self) -> f64;
    /// Total height of the scrollable content.
    fn content_height(&self) -> f64;
    /// Height of the visible viewport.
    fn viewport_height(&self) -> f64;
}

/// Read the surface and return scroll progress in `[0, 1]`.
///
/// The scrollable extent is floored at 1 so a document shorter than the
/// viewport yields progress 0 instead of a division by zero.
pub fn sample(surface: &impl ScrollSurface) -> f64 {
    let extent = (surface.content_height() - surface.viewport_height()).max(1.0);
    (surface.offset() / extent).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeSurface {
        offset: f64,
        content: f64,
        viewport: f64,
    }

    impl ScrollSurface for FakeSurface {
        fn offset(&self) -> f64 {
            self.offset
        }
        fn content_height(&self) -> f64 {
            self.content
        }
        fn viewport_height(&self) -> f64 {
            self.viewport
        }
    }

    #[test]
    fn midpoint_maps_to_half() {
        let s = FakeSurface {
            offset: 450.0,
            content: 1000.0,
            viewport: 100.0,
        };
        assert!((sample(&s) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn progress_is_clamped_at_both_ends() {
        let mut s = FakeSurface {
            offset: -50.0,
            content: 1000.0,
            viewport: 100.0,
        };
        assert_eq!(sample(&s), 0.0);

        // Overscroll past the bottom (rubber-banding hosts report this).
        s.offset = 1500.0;
        assert_eq!(sample(&s), 1.0);
    }

    #[test]
    fn zero_extent_floors_instead_of_dividing_by_zero() {
        // Content no taller than the viewport: nothing to scroll.
        let s = FakeSurface {
            offset: 0.0,
            content: 80.0,
            viewport: 100.0,
        };
        assert_eq!(sample(&s), 0.0);
    }
}
