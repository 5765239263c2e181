//! Bounded orbit-trail buffer.
//!
//! An `OrbitTrail` is the ordered history of a planet's past positions:
//! append-only at the back, truncated only from the front. The length
//! policy itself lives in [`Planet::post_step`](crate::simulation::states::Planet::post_step);
//! this type just stores points and drops the oldest on demand.

use std::collections::VecDeque;

use crate::simulation::states::NVec2;

#[derive(Debug, Clone, Default)]
pub struct OrbitTrail {
    points: VecDeque<NVec2>,
}

impl OrbitTrail {
    pub fn new() -> Self {
        Self {
            points: VecDeque::new(),
        }
    }

    /// Append a position to the back of the trail.
    pub fn record(&mut self, position: NVec2) {
        self.points.push_back(position);
    }

    /// Drop points from the front until at most `max_points` remain.
    pub fn truncate_to(&mut self, max_points: usize) {
        while self.points.len() > max_points {
            self.points.pop_front();
        }
    }

    /// Oldest-to-newest iteration over the stored positions.
    pub fn points(&self) -> impl Iterator<Item = &NVec2> {
        self.points.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A trail is only drawn as a polyline once it has more than 2 points.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.points.len() > 2
    }
}
