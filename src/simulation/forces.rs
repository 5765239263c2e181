//! Pairwise Newtonian gravity for the solar-system engine.
//!
//! Forces are computed per body against every *other* body: magnitude
//! `F = G m1 m2 / d^2`, direction from the angle of the separation vector.
//! Self-interaction is excluded by identity – callers never put the body
//! itself into the `others` set – so two coincident but distinct bodies
//! still attract each other.

use crate::simulation::states::{Body, NVec2};

/// Floor for the squared separation in the force law, m^2.
///
/// Two bodies at identical coordinates would otherwise divide by zero.
/// Clamping yields a large but finite pull; the shipped scenario never
/// comes close to triggering it.
pub const MIN_SEPARATION_SQ: f64 = 1.0;

/// Displacement from `a` to `b`.
#[inline]
pub fn distance_vector(a: &Body, b: &Body) -> NVec2 {
    b.x - a.x
}

/// Gravitational force exerted on `a` by `b`.
///
/// Decomposed through `atan2` of the separation vector, so the returned
/// vector points from `a` toward `b`.
pub fn force_between(a: &Body, b: &Body, g: f64) -> NVec2 {
    let r = distance_vector(a, b);
    let d2 = r.norm_squared().max(MIN_SEPARATION_SQ);

    let force = g * a.m * b.m / d2;
    let theta = r.y.atan2(r.x);

    NVec2::new(force * theta.cos(), force * theta.sin())
}

/// Sum of the pairwise forces on `body` from every body in `others`.
///
/// Summation follows the iteration order of `others`; callers pass a fixed
/// order (star first, then planets in system order) so the floating-point
/// result is reproducible run to run.
pub fn net_force<'a, I>(body: &Body, others: I, g: f64) -> NVec2
where
    I: IntoIterator<Item = &'a Body>,
{
    let mut total = NVec2::zeros();
    for other in others {
        total += force_between(body, other, g);
    }
    total
}
