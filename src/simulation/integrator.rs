//! Fixed-step semi-implicit Euler integration.
//!
//! One tick advances the whole system by `params.dt`: the star first,
//! pulled by the planet list, then each planet in order against the full
//! body set. The velocity update uses this step's acceleration *before*
//! the position update – the symplectic ordering that keeps the orbits
//! visually stable at a day-long step.

use std::iter;

use super::forces::net_force;
use super::params::Parameters;
use super::states::{Body, NVec2, System};

/// Apply one semi-implicit Euler update to a single body:
/// `v += (F/m) dt`, then `x += v dt` with the *new* velocity.
pub fn euler_step(body: &mut Body, force: NVec2, dt: f64) {
    let acceleration = force / body.m;
    body.v += acceleration * dt;
    body.x += body.v * dt;
}

/// Advance the system by one tick of `params.dt`.
///
/// Update order is deliberate and trajectory-affecting:
/// 1. the star moves first, using the planets' pre-tick positions
///    (mutual gravity – the star is perturbed, not pinned), then
/// 2. each planet moves in list order against `{star} ∪ {other planets}`,
///    observing the star's and earlier planets' already-updated positions.
///
/// This Gauss–Seidel-style sweep affects trajectories; a parallel
/// (snapshot) sweep would produce different orbits.
pub fn euler_integrator(sys: &mut System, params: &Parameters) {
    let star_force = net_force(&sys.star, sys.planets.iter().map(|p| &p.body), params.g);
    euler_step(&mut sys.star, star_force, params.dt);

    let scale = params.scale();
    for i in 0..sys.planets.len() {
        let force = {
            let me = &sys.planets[i].body;
            let others = iter::once(&sys.star).chain(
                sys.planets
                    .iter()
                    .enumerate()
                    .filter_map(|(j, p)| (j != i).then_some(&p.body)),
            );
            net_force(me, others, params.g)
        };

        let star_position = sys.star.x;
        let planet = &mut sys.planets[i];
        euler_step(&mut planet.body, force, params.dt);
        planet.post_step(star_position, scale);
    }

    sys.t += params.dt;
}
