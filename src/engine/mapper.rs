//! Progress → media-time mapping.

/// Map scroll progress onto a media timestamp.
///
/// Pure: `progress × duration`, clamped to `[0, duration − end_guard]`.
/// The guard keeps the result strictly short of end-of-media.
pub fn map_to_target(progress: f64, duration: f64, end_guard: f64) -> f64 {
    let upper = (duration - end_guard).max(0.0);
    (progress * duration).clamp(0.0, upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GUARD: f64 = 0.001;

    #[test]
    fn endpoints_map_to_zero_and_guarded_end() {
        assert_eq!(map_to_target(0.0, 18.0, GUARD), 0.0);
        assert!((map_to_target(1.0, 18.0, GUARD) - (18.0 - GUARD)).abs() < 1e-12);
    }

    #[test]
    fn result_stays_inside_the_duration_for_any_progress() {
        for i in 0..=100 {
            let p = i as f64 / 100.0;
            for d in [0.5, 1.0, 18.0, 42.0, 300.0] {
                let t = map_to_target(p, d, GUARD);
                assert!(t >= 0.0, "p={p} d={d} t={t}");
                assert!(t < d, "p={p} d={d} t={t}");
            }
        }
    }

    #[test]
    fn mapping_is_monotone_in_progress() {
        let mut prev = -1.0;
        for i in 0..=50 {
            let t = map_to_target(i as f64 / 50.0, 42.0, GUARD);
            assert!(t >= prev);
            prev = t;
        }
    }

    #[test]
    fn degenerate_duration_collapses_to_zero() {
        // Guard wider than the media itself: the only valid target is 0.
        assert_eq!(map_to_target(1.0, 0.0005, GUARD), 0.0);
    }
}
