//! Nearest-neighbour lookup and the long-run tally.
//!
//! Every tick the driver asks which planet currently sits closest to the
//! reference planet (Earth in the shipped scenario) and bumps that
//! planet's counter. The counters always sum to the number of recorded
//! ticks, which is what makes the live percentages meaningful.

use crate::simulation::states::Planet;

/// Index of the planet nearest to `planets[reference]`, excluding the
/// reference itself.
///
/// Ties keep the first candidate encountered in list order. Returns
/// `None` when the reference index is out of range or no other candidate
/// exists – a valid outcome, not an error.
pub fn nearest_neighbour(reference: usize, planets: &[Planet]) -> Option<usize> {
    let reference_position = planets.get(reference)?.body.x;

    let mut nearest = None;
    let mut nearest_distance = f64::INFINITY;

    for (i, planet) in planets.iter().enumerate() {
        if i == reference {
            continue;
        }

        let distance = (planet.body.x - reference_position).norm();
        if distance < nearest_distance {
            nearest_distance = distance;
            nearest = Some(i);
        }
    }

    nearest
}

/// Per-planet hit counters for the nearest-neighbour poll.
#[derive(Debug, Clone)]
pub struct NeighbourTally {
    counts: Vec<u64>, // indexed like System::planets
    ticks: u64,
}

impl NeighbourTally {
    pub fn new(planet_count: usize) -> Self {
        Self {
            counts: vec![0; planet_count],
            ticks: 0,
        }
    }

    /// Record that planet `i` won this tick's nearest-neighbour poll.
    pub fn record(&mut self, i: usize) {
        if let Some(count) = self.counts.get_mut(i) {
            *count += 1;
            self.ticks += 1;
        }
    }

    pub fn count(&self, i: usize) -> u64 {
        self.counts.get(i).copied().unwrap_or(0)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Share of recorded ticks won by planet `i`, in percent.
    pub fn percentage(&self, i: usize) -> f64 {
        if self.ticks == 0 {
            return 0.0;
        }
        self.count(i) as f64 / self.ticks as f64 * 100.0
    }

    /// One line of the on-screen report: name left-justified to 10
    /// columns, rounded percentage right-justified to 3. Exact halves
    /// round to the even neighbour (2.5% shows as 2%, 7.5% as 8%).
    pub fn report_line(&self, i: usize, name: &str) -> String {
        format!("{:<10}{:>3}%", name, self.percentage(i).round_ties_even() as u64)
    }
}
