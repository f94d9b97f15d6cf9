//! Time-driven detail value for animated previews.
//!
//! The detail value oscillates between coarse and fine: elapsed time is
//! scaled, folded into a triangle wave on `[0, 1]` and eased with out-quad so
//! the preview lingers near full detail.

/// Default time scale applied before folding (half a cycle per second).
pub const DEFAULT_SPEED: f64 = 0.5;

/// Fold `x` into a triangle wave with period 2: `0 → 1 → 0`.
pub fn ping_pong(x: f64) -> f64 {
    let phase = x.rem_euclid(2.0);
    if phase <= 1.0 {
        phase
    } else {
        2.0 - phase
    }
}

/// Quadratic ease-out on `[0, 1]`.
pub fn ease_out_quad(x: f64) -> f64 {
    1.0 - (1.0 - x) * (1.0 - x)
}

/// Accumulates elapsed time and yields the current detail value.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailAnimator {
    elapsed: f64,
    speed: f64,
    value: f64,
}

impl Default for DetailAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

impl DetailAnimator {
    pub fn new(speed: f64) -> Self {
        Self {
            elapsed: 0.0,
            speed,
            value: 0.0,
        }
    }

    /// Advance by `dt` seconds and return the new detail value.
    pub fn advance(&mut self, dt: f64) -> f64 {
        self.elapsed += dt;
        self.value = ease_out_quad(ping_pong(self.elapsed * self.speed));
        self.value
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
