//! Victory celebration particles
//!
//! A fixed pool of particles, each tracing its own randomized cubic Bezier
//! arc derived from a shared template anchored at the victory platform. The
//! pool fills lazily: the first update after activation creates every
//! particle at once, and nothing is created again until a reset re-arms it.

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bezier::sample_curve3;
use crate::tuning::EmitterTuning;

/// Progress cap; `progress / PROGRESS_CAP` is the curve parameter, so a
/// particle parks at the end of its arc instead of cycling.
pub const PROGRESS_CAP: f32 = 280.0;

/// Control-point offsets every particle's arc starts from, before
/// per-particle jitter. Indexed P0..P3, relative to the template position.
const ARC_OFFSETS: [Vec3; 4] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(-0.5, 121.5, 0.0),
    Vec3::new(-0.7, 51.5, 0.0),
    Vec3::new(-0.5, 0.0, 0.0),
];

/// One celebration particle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec3,
    pub scale: f32,
    /// Drift velocity inherited from the template; informational, the arc
    /// alone drives position.
    pub speed: Vec3,
    /// Remaining lifetime in milliseconds; informational, never a kill
    /// condition. Only a reset clears the pool.
    pub ttl_ms: i64,
    control: [Vec3; 4],
    progress: f32,
    added_speed: f32,
}

impl Particle {
    fn update(&mut self, elapsed_ms: i64) {
        self.progress = (self.progress + self.added_speed).min(PROGRESS_CAP);
        let t = self.progress / PROGRESS_CAP;
        self.position = sample_curve3(&self.control, t);
        self.ttl_ms -= elapsed_ms;
    }
}

/// Lazily-filled pool of celebration particles.
///
/// The `active` flag gates the whole update; arm it on victory, and reset
/// clears the pool and disarms it again.
#[derive(Debug, Clone)]
pub struct ParticleEmitter {
    base_position: Vec3,
    tuning: EmitterTuning,
    particles: Vec<Particle>,
    active: bool,
    filled: bool,
    rng: Pcg32,
}

impl ParticleEmitter {
    /// `rng` is the injected randomness source; seed it to make runs
    /// reproducible.
    pub fn new(base_position: Vec3, tuning: EmitterTuning, rng: Pcg32) -> Self {
        Self {
            base_position,
            tuning,
            particles: Vec::new(),
            active: false,
            filled: false,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Drive the pool for one tick. Existing particles advance first; the
    /// one-time fill happens afterwards, so fresh particles hold their
    /// spawn position until the next call.
    pub fn update(&mut self, elapsed_ms: i64) {
        if !self.active {
            return;
        }
        for particle in &mut self.particles {
            particle.update(elapsed_ms);
        }
        if !self.filled {
            for _ in 0..self.tuning.max_particles {
                let particle = self.spawn();
                self.particles.push(particle);
            }
            self.filled = true;
            log::debug!("celebration pool filled: {} particles", self.particles.len());
        }
    }

    /// Clear the pool, disarm, and re-arm the one-time fill.
    pub fn reset(&mut self) {
        self.particles.clear();
        self.active = false;
        self.filled = false;
    }

    fn spawn(&mut self) -> Particle {
        let base = self.base_position;
        let mut control = ARC_OFFSETS.map(|offset| base + offset);

        // Arc jitter: lateral spread on the later control points, a little
        // height and depth wobble on the middle ones.
        let spread = match self.rng.random_range(0..3) {
            0 => -1.0,
            1 => 0.0,
            _ => 1.0,
        };
        control[1].z += spread * self.rng.random::<f32>() * 5.0;
        let sign = coin(&mut self.rng);
        control[2].z += sign * self.rng.random::<f32>() * 5.0;
        control[3].z += sign * self.rng.random::<f32>() * 5.0;
        let sign = coin(&mut self.rng);
        control[1].y += sign * self.rng.random::<f32>() * 2.0;
        control[2].y += sign * self.rng.random::<f32>() * 2.0;
        let sign = coin(&mut self.rng);
        control[1].x += sign * self.rng.random::<f32>();
        control[2].x += sign * self.rng.random::<f32>();
        control[3].x += sign * self.rng.random::<f32>();
        let added_speed = self.rng.random::<f32>() * 1.5 + 1.0;

        // Template-level perturbation, one magnitude shared across axes.
        let sign = coin(&mut self.rng);
        let speed_inc = sign * self.rng.random::<f32>() * self.tuning.speed_rnd_range;
        let pos_inc = sign * self.rng.random::<f32>() * self.tuning.position_rnd_range;
        let scale_inc = sign * self.rng.random::<f32>() * self.tuning.scale_rnd_range;

        Particle {
            position: base + Vec3::splat(pos_inc),
            scale: self.tuning.base_scale + scale_inc,
            speed: self.tuning.base_speed + Vec3::splat(speed_inc),
            ttl_ms: self.tuning.ttl_ms,
            control,
            progress: 0.0,
            added_speed,
        }
    }
}

/// -1.0 or 1.0 with equal probability.
fn coin(rng: &mut Pcg32) -> f32 {
    if rng.random::<f32>() > 0.5 { -1.0 } else { 1.0 }
}
