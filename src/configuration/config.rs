//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – time step, gravitational constant, display scale
//! - [`BodyConfig`]       – initial state for the star and each planet
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario file
//!
//! # YAML format
//! The shipped `scenarios/solar_system.yaml` matches these types:
//!
//! ```yaml
//! parameters:
//!   dt: 86400.0           # one simulated day per tick
//!   g: 6.67428e-11        # gravitational constant
//!   pixels_per_au: 200.0  # display scale
//!
//! reference: Earth        # planet whose nearest neighbour is tallied
//!
//! star:
//!   name: Sun
//!   color: yellow
//!   radius: 16.0          # display radius, px
//!   m: 1.98892e30         # mass, kg
//!   x_au: [0.0, 0.0]      # position, AU
//!   v: [0.0, 0.0]         # velocity, m/s
//!
//! planets:
//!   - name: Earth
//!     color: blue
//!     radius: 5.0
//!     m: 5.9742e24
//!     x_au: [1.0, 0.0]
//!     v: [0.0, 29783.0]
//! ```
//!
//! Positions are given in AU for readability and converted to meters when
//! the runtime scenario is built.

use serde::Deserialize;

/// Closed set of display colors for bodies.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    White,
    Black,
    Yellow,
    Gray,
    Orange,
    Blue,
    Red,
}

impl DisplayColor {
    /// Fixed RGB triple for this color.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            DisplayColor::White => (255, 255, 255),
            DisplayColor::Black => (0, 0, 0),
            DisplayColor::Yellow => (255, 255, 0),
            DisplayColor::Gray => (128, 128, 128),
            DisplayColor::Orange => (255, 128, 0),
            DisplayColor::Blue => (0, 0, 255),
            DisplayColor::Red => (255, 0, 0),
        }
    }
}

/// Global numerical and display parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,            // fixed time step, s
    pub g: f64,             // gravitational constant
    pub pixels_per_au: f64, // display scale
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub color: DisplayColor,
    pub radius: f64,    // display radius, px
    pub m: f64,         // mass, kg; must be positive
    pub x_au: [f64; 2], // initial position, AU
    pub v: [f64; 2],    // initial velocity, m/s
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub reference: String, // name of the tally's reference planet
    pub star: BodyConfig,
    pub planets: Vec<BodyConfig>,
}
