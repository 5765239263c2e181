//! Build a fully-initialized runtime scenario from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with the star and planets at t = 0)
//! - the nearest-neighbour tally and the reference planet index
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration and visualization systems.

use anyhow::{ensure, Context, Result};
use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::neighbour::NeighbourTally;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, Planet, System, AU};

/// Bevy resource representing a fully-initialized simulation scenario.
///
/// `nearest` caches the index of the planet that won the current tick's
/// nearest-neighbour poll, so the draw systems can highlight it without
/// re-scanning.
#[derive(Debug, Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub reference: usize, // index into system.planets
    pub tally: NeighbourTally,
    pub nearest: Option<usize>,
}

impl Scenario {
    /// Validate `cfg` and build the runtime scenario at t = 0.
    ///
    /// Fails on nonpositive masses and on a `reference` name that does not
    /// match any configured planet.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let parameters = Parameters {
            dt: cfg.parameters.dt,
            g: cfg.parameters.g,
            pixels_per_au: cfg.parameters.pixels_per_au,
        };

        let star = body_from_config(&cfg.star)?;

        // Planets keep their configured order; it drives integration
        // order, tie-breaking, and the report layout.
        let mut planets = Vec::with_capacity(cfg.planets.len());
        for bc in &cfg.planets {
            planets.push(Planet::new(body_from_config(bc)?, star.x));
        }

        let reference = planets
            .iter()
            .position(|p| p.body.name == cfg.reference)
            .with_context(|| {
                format!("reference planet '{}' is not in the planet list", cfg.reference)
            })?;

        let tally = NeighbourTally::new(planets.len());

        Ok(Self {
            parameters,
            system: System {
                star,
                planets,
                t: 0.0,
            },
            reference,
            tally,
            nearest: None,
        })
    }
}

/// Map a `BodyConfig` to a runtime `Body`, converting AU positions to
/// meters.
fn body_from_config(bc: &BodyConfig) -> Result<Body> {
    ensure!(
        bc.m > 0.0,
        "body '{}' must have positive mass, got {}",
        bc.name,
        bc.m
    );

    Ok(Body {
        name: bc.name.clone(),
        radius: bc.radius,
        color: bc.color,
        m: bc.m,
        x: NVec2::new(bc.x_au[0] * AU, bc.x_au[1] * AU),
        v: NVec2::new(bc.v[0], bc.v[1]),
    })
}
