//! Parameter ranges for ray queries.

/// Interval of ray parameters `t`, queried either open or closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound
    pub min: f32,
    /// Upper bound
    pub max: f32,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Interval starting just past a surface and extending to infinity.
    pub fn from_epsilon(epsilon: f32) -> Self {
        Self::new(epsilon, f32::INFINITY)
    }

    /// Same lower bound, new upper bound.
    ///
    /// Used by nearest-hit searches to shrink the query as closer hits are found.
    pub fn with_max(self, max: f32) -> Self {
        Self { max, ..self }
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamp the given value to be within this interval's bounds
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}
