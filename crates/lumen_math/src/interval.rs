/// A closed range of real values `[min, max]`.
///
/// Used both as the valid-`t` window for ray queries and as the clamp range
/// when quantizing colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    ///
    /// NaN is never surrounded, so degenerate ray parameters fall out as misses.
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Same interval with its upper bound replaced.
    #[inline]
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }

    /// Channel range that maps onto `[0, 256)` without reaching 256.
    pub const INTENSITY: Interval = Interval {
        min: 0.0,
        max: 0.999,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.001, f32::INFINITY);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.001));
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(f32::INFINITY));
        assert!(!interval.surrounds(f32::NAN));

        assert!(interval.surrounds(0.5));
        assert!(interval.surrounds(1e30));
    }

    #[test]
    fn test_interval_with_max() {
        let narrowed = Interval::new(0.001, f32::INFINITY).with_max(2.0);
        assert_eq!(narrowed, Interval::new(0.001, 2.0));
        assert!(!narrowed.surrounds(2.0));
    }

    #[test]
    fn test_intensity_clamp() {
        assert_eq!(Interval::INTENSITY.clamp(-1.0), 0.0);
        assert_eq!(Interval::INTENSITY.clamp(0.5), 0.5);
        assert_eq!(Interval::INTENSITY.clamp(1.0), 0.999);
    }
}
