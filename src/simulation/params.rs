//! Numerical and display parameters for the simulation.
//!
//! `Parameters` holds the process-wide, read-only settings fixed at
//! startup: the integration step, the gravitational constant, and the
//! display scale that also bounds orbit-trail length.

use crate::simulation::states::AU;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // fixed time step, s
    pub g: f64, // gravitational constant
    pub pixels_per_au: f64, // display scale
}

impl Parameters {
    /// Display scale in pixels per meter.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.pixels_per_au / AU
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: 60.0 * 60.0 * 24.0, // one day
            g: 6.67428e-11,
            pixels_per_au: 200.0,
        }
    }
}
