//! Core constants and the simulation clock shared by every propagation mode.

/// Julian date of the J2000.0 epoch (January 1, 2000, 12:00 TT).
pub const J2000_JD: f64 = 2451545.0;

/// Days in a Julian century, the unit of the secular element rates.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Gaussian gravitational constant k (AU^(3/2) / (M☉^(1/2) · day)).
pub const GAUSSIAN_GRAVITATIONAL_CONSTANT: f64 = 0.01720209895;

/// G expressed in AU³ / (M☉ · day²), i.e. k².
pub const G_AU_DAY: f64 = GAUSSIAN_GRAVITATIONAL_CONSTANT * GAUSSIAN_GRAVITATIONAL_CONSTANT;

/// Simulation clock advanced once per tick.
///
/// Time is a Julian date. The clock never reads the wall clock: the host
/// decides how often to tick, and the tick size decides how far each tick
/// moves simulated time.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationClock {
    /// Time the next tick will be computed at (Julian date)
    current: f64,
    /// Simulated days per tick
    tick_size: f64,
    /// Completed ticks since construction
    ticks: u64,
    /// Whether ticking is suspended
    pub paused: bool,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(J2000_JD, 1.0)
    }
}

impl SimulationClock {
    /// Create a clock starting at `start` (Julian date) advancing `tick_size` days per tick.
    pub fn new(start: f64, tick_size: f64) -> Self {
        Self {
            current: start,
            tick_size,
            ticks: 0,
            paused: false,
        }
    }

    /// Time the next tick will be computed at.
    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn tick_size(&self) -> f64 {
        self.tick_size
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Move the clock forward by one tick.
    pub fn advance(&mut self) {
        self.current += self.tick_size;
        self.ticks += 1;
    }

    /// Julian centuries between the current time and `epoch`.
    pub fn centuries_since(&self, epoch: f64) -> f64 {
        (self.current - epoch) / DAYS_PER_JULIAN_CENTURY
    }
}
