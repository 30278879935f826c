//! Particle engine
//!
//! A bounded-lifetime population of glowing dots with simple inertial
//! physics: position integrates velocity, velocity decays under drag, and
//! life ticks down by a fixed per-particle decay until the particle is
//! culled. Radius and opacity both scale with remaining life, so particles
//! shrink and fade out together.
//!
//! The engine owns the collection exclusively; the only mutations are burst
//! spawns, the per-frame advance, and teardown. There is no population cap:
//! bursts are short-lived by construction and attrition through decay is the
//! only limiter.

use super::canvas::Canvas;

/// A single live particle. Everything but position, velocity and life is
/// fixed at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Surface position
    pub x: f32,
    pub y: f32,
    /// Velocity in surface units per frame
    pub vx: f32,
    pub vy: f32,
    /// Remaining life, 1.0 at spawn, drawn while > 0
    pub life: f32,
    /// Per-frame life reduction
    pub decay: f32,
    /// Base radius; drawn radius is size * life
    pub size: f32,
    /// Color hue in degrees (saturation/lightness are fixed by the canvas)
    pub hue: f32,
}

/// Tunables for spawning and integration. Defaults match the authored
/// landing-page effect.
#[derive(Debug, Clone, Copy)]
pub struct EngineParams {
    /// Per-frame velocity multiplier
    pub drag: f32,
    /// Probability of one ambient spawn per frame
    pub ambient_rate: f32,
    /// Spawn velocity components are uniform in [-speed, speed)
    pub speed: f32,
    /// Spawn decay range [min, max)
    pub decay_min: f32,
    pub decay_max: f32,
    /// Spawn size range [min, max)
    pub size_min: f32,
    pub size_max: f32,
    /// Spawn hue range [min, max), degrees
    pub hue_min: f32,
    pub hue_max: f32,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            drag: 0.98,
            ambient_rate: 0.03,
            speed: 3.0,
            decay_min: 0.01,
            decay_max: 0.03,
            size_min: 2.0,
            size_max: 6.0,
            hue_min: 160.0,
            hue_max: 220.0,
        }
    }
}

/// The engine: particle collection, surface dimensions, PRNG, running flag.
pub struct ParticleEngine {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    params: EngineParams,
    /// Checked at the top of every operation; teardown just flips it
    running: bool,
    /// Simple PRNG state for randomization
    rng_state: u32,
    /// Total particles ever spawned (bursts + ambient)
    spawned: u64,
}

impl ParticleEngine {
    /// Engine bound to a surface of the given size, empty collection
    #[allow(dead_code)] // default-params convenience; the app builds from config
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_params(width, height, EngineParams::default())
    }

    pub fn with_params(width: f32, height: f32, params: EngineParams) -> Self {
        Self {
            particles: Vec::new(),
            width,
            height,
            params,
            running: true,
            rng_state: 12345,
            spawned: 0,
        }
    }

    /// Reseed the PRNG (zero is remapped; xorshift locks up on zero state)
    #[allow(dead_code)] // deterministic tests reseed, production keeps the default
    pub fn set_seed(&mut self, seed: u32) {
        self.rng_state = if seed == 0 { 1 } else { seed };
    }

    /// Fast xorshift PRNG (no external deps, deterministic).
    /// `u32::MAX as f32` rounds to 2^32, so the result is in [0, 1).
    fn next_random(&mut self) -> f32 {
        self.rng_state ^= self.rng_state << 13;
        self.rng_state ^= self.rng_state >> 17;
        self.rng_state ^= self.rng_state << 5;
        (self.rng_state as f32) / (u32::MAX as f32)
    }

    /// Random float in [min, max)
    fn random_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_random() * (max - min)
    }

    /// A fresh particle at (x, y) with randomized velocity, decay, size, hue
    fn new_particle(&mut self, x: f32, y: f32) -> Particle {
        Particle {
            x,
            y,
            vx: self.random_range(-self.params.speed, self.params.speed),
            vy: self.random_range(-self.params.speed, self.params.speed),
            life: 1.0,
            decay: self.random_range(self.params.decay_min, self.params.decay_max),
            size: self.random_range(self.params.size_min, self.params.size_max),
            hue: self.random_range(self.params.hue_min, self.params.hue_max),
        }
    }

    /// Burst `count` particles at (x, y). Appends; nothing is deduplicated,
    /// two calls give twice the particles. No-op after teardown.
    pub fn spawn_explosion(&mut self, x: f32, y: f32, count: usize) {
        if !self.running {
            return;
        }
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = self.new_particle(x, y);
            self.particles.push(particle);
        }
        self.spawned += count as u64;
    }

    /// One frame: clear, advance every particle in insertion order, draw the
    /// survivors, cull the expired, then maybe spawn one ambient particle.
    /// The caller loops; a torn-down engine does nothing.
    pub fn step(&mut self, canvas: &mut dyn Canvas) {
        if !self.running {
            return;
        }

        canvas.clear();

        let drag = self.params.drag;
        self.particles.retain_mut(|p| {
            p.x += p.vx;
            p.y += p.vy;
            p.vx *= drag;
            p.vy *= drag;
            p.life -= p.decay;

            if p.life > 0.0 {
                canvas.fill_circle(p.x, p.y, p.size * p.life, p.hue, p.life);
                true
            } else {
                false
            }
        });

        // Ambient sparkle: occasionally one particle somewhere on the surface
        if self.next_random() < self.params.ambient_rate {
            let x = self.random_range(0.0, self.width);
            let y = self.random_range(0.0, self.height);
            let particle = self.new_particle(x, y);
            self.particles.push(particle);
            self.spawned += 1;
        }
    }

    /// Rebind surface dimensions after a resize. Existing particles keep
    /// their position and state; only the ambient spawn area changes.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Stop the frame loop's effect and drop all particles. Idempotent.
    pub fn teardown(&mut self) {
        self.running = false;
        self.particles.clear();
    }

    #[allow(dead_code)] // inspection API, exercised by tests
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Live particle count
    pub fn count(&self) -> usize {
        self.particles.len()
    }

    /// Total particles ever spawned (bursts + ambient)
    #[allow(dead_code)] // inspection API, exercised by tests
    pub fn total_spawned(&self) -> u64 {
        self.spawned
    }

    #[allow(dead_code)] // inspection API, exercised by tests
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    fn inject(&mut self, particle: Particle) {
        self.particles.push(particle);
    }
}
