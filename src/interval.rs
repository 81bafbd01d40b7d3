//! Closed parameter window [min, max] for ray t-values.

/// Closed interval [min, max] for range checking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f32,
    /// Maximum value of the interval
    pub max: f32,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Everything from `min` up to positive infinity.
    pub fn from_min(min: f32) -> Self {
        Self::new(min, f32::INFINITY)
    }

    /// Check if the interval contains the given value (inclusive bounds)
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Same window with the upper bound pulled in to `max`.
    pub fn with_max(self, max: f32) -> Self {
        Self::new(self.min, max)
    }
}
