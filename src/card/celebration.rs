//! Confetti timing: two mirrored bursts per animation frame until the deadline.

use crate::effects::{BurstConfig, Origin, ParticleEffects};

pub const PARTICLES_PER_BURST: u32 = 5;
pub const LEFT_ANGLE_DEG: f64 = 60.0;
pub const SPREAD_DEG: f64 = 55.0;
pub const PALETTE: [&str; 5] = ["#ff6b6b", "#feca57", "#ff9ff3", "#54a0ff", "#5f27cd"];

/// Left burst fires from the left edge at 60°, right burst from the right edge
/// at the mirrored 120°.
pub fn mirrored_bursts() -> [BurstConfig; 2] {
    let colors: Vec<String> = PALETTE.iter().map(|c| (*c).to_string()).collect();
    let left = BurstConfig {
        particle_count: PARTICLES_PER_BURST,
        angle: LEFT_ANGLE_DEG,
        spread: SPREAD_DEG,
        origin: Origin { x: 0.0, y: None },
        colors: colors.clone(),
    };
    let right = BurstConfig {
        angle: 180.0 - LEFT_ANGLE_DEG,
        origin: Origin { x: 1.0, y: None },
        colors,
        ..left.clone()
    };
    [left, right]
}

#[derive(Clone, Debug)]
pub struct Celebration {
    deadline_ms: f64,
    bursts: [BurstConfig; 2],
}

impl Celebration {
    pub fn starting_at(now_ms: f64, duration_ms: f64) -> Self {
        Self {
            deadline_ms: now_ms + duration_ms,
            bursts: mirrored_bursts(),
        }
    }

    pub fn deadline_ms(&self) -> f64 {
        self.deadline_ms
    }

    /// Fire both bursts, then report whether another frame should be scheduled.
    pub fn tick(&self, fx: &dyn ParticleEffects, now_ms: f64) -> bool {
        for burst in &self.bursts {
            fx.burst(burst);
        }
        now_ms < self.deadline_ms
    }
}
