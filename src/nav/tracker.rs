//! Section-tracking policy.
//!
//! The observer watches every section the menu can navigate to and considers
//! a section "current" the moment any part of it enters a narrow horizontal
//! band of the viewport. The band is expressed to IntersectionObserver as a
//! root margin that cuts 20% off the top and 70% off the bottom, leaving the
//! middle 10%; the threshold of zero makes any overlap count. Sections in
//! one observation batch are handled in order, so overlapping bands resolve
//! to the last one processed.

/// Root margin handed to IntersectionObserver.
pub const ROOT_MARGIN: &str = "-20% 0px -70% 0px";

/// Intersection threshold: any overlap with the band triggers.
pub const THRESHOLD: f64 = 0.0;

/// Fraction of the viewport excluded above the band.
pub const BAND_TOP_FRACTION: f64 = 0.20;

/// Fraction of the viewport excluded below the band.
pub const BAND_BOTTOM_FRACTION: f64 = 0.70;

/// Mirror of the margin math: does a section spanning `top..bottom` (in
/// viewport coordinates) overlap the trigger band? Exists so the band policy
/// is testable without a browser; the live path lets the observer do this.
pub fn band_contains(viewport_height: f64, top: f64, bottom: f64) -> bool {
    let band_top = viewport_height * BAND_TOP_FRACTION;
    let band_bottom = viewport_height * (1.0 - BAND_BOTTOM_FRACTION);
    top < band_bottom && bottom > band_top
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_covers_middle_tenth() {
        // 1000px viewport: band is 200..300.
        assert!(band_contains(1000.0, 250.0, 600.0));
        assert!(band_contains(1000.0, 0.0, 201.0));
        assert!(band_contains(1000.0, 299.0, 1500.0));
    }

    #[test]
    fn band_excludes_top_and_bottom_regions() {
        assert!(!band_contains(1000.0, 0.0, 200.0));
        assert!(!band_contains(1000.0, 300.0, 900.0));
        assert!(!band_contains(1000.0, 950.0, 1400.0));
    }
}
