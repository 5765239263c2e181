//! Core state types for the solar-system simulation.
//!
//! Defines the 2D body/system structs:
//! - `Body`   – physical state plus display attributes for one object
//! - `Planet` – a `Body` plus an orbit trail and star-distance tracking
//! - `System` – one star and its planets, with the current time `t`
//!
//! The system owns all bodies exclusively; nothing is added or removed
//! after construction.

use nalgebra::Vector2;

use crate::configuration::config::DisplayColor;
use crate::simulation::trail::OrbitTrail;

pub type NVec2 = Vector2<f64>;

/// One astronomical unit in meters.
pub const AU: f64 = 1.496e11;

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // label only
    pub radius: f64, // display radius in pixels, not physical
    pub color: DisplayColor,
    pub m: f64, // mass, kg (always > 0)
    pub x: NVec2, // position, m
    pub v: NVec2, // velocity, m/s
}

/// A planet is a body that also remembers where it has been and how far
/// it currently sits from its parent star.
#[derive(Debug, Clone)]
pub struct Planet {
    pub body: Body,
    pub trail: OrbitTrail,
    pub distance_to_parent: f64, // m, recomputed every step
}

impl Planet {
    pub fn new(body: Body, star_position: NVec2) -> Self {
        let distance_to_parent = (body.x - star_position).norm();
        Self {
            body,
            trail: OrbitTrail::new(),
            distance_to_parent,
        }
    }

    /// Post-integration bookkeeping for one tick: refresh the distance to
    /// the star, record the new position in the trail, and trim the trail
    /// to `floor(distance_to_parent * scale)` points.
    ///
    /// The bound is the trail's on-screen length in pixels reused as a
    /// point count. Dimensionally odd, but it is what ties trail memory to
    /// the display scale, so it is kept as-is.
    pub fn post_step(&mut self, star_position: NVec2, scale: f64) {
        self.distance_to_parent = (self.body.x - star_position).norm();
        self.trail.record(self.body.x);

        let tail_length = (self.distance_to_parent * scale).floor() as usize;
        self.trail.truncate_to(tail_length);
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub star: Body,
    pub planets: Vec<Planet>, // fixed order, used for iteration and reports
    pub t: f64, // simulated time, s
}
