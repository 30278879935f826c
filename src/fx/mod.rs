//! Decorative Particle Overlay
//!
//! The one piece of this crate with real per-frame state: a population of
//! short-lived glowing dots with inertial motion, drag, and fading opacity.
//! Bursts ("explosions") are triggered by the landing screen on entrance and
//! on clicks; a low-probability ambient spawn keeps the screen alive between
//! them.
//!
//! Key pieces:
//! - Particle / ParticleEngine: the collection and its per-frame advance
//! - Canvas: the drawing seam (screen in production, recorder in tests)
//! - ParticleOverlay: a handle that may be inert, so the rest of the app
//!   can call it unconditionally and degrade to nothing

pub mod canvas;
pub mod particles;

pub use canvas::{Canvas, ScreenCanvas};
pub use particles::{EngineParams, Particle, ParticleEngine};

/// Handle the composition root hands to anything that wants to trigger
/// bursts. Constructed inert when the overlay is disabled or the host
/// prefers reduced motion; every call on an inert handle is a silent no-op.
pub struct ParticleOverlay {
    engine: Option<ParticleEngine>,
}

impl ParticleOverlay {
    /// An overlay backed by a live engine
    pub fn active(engine: ParticleEngine) -> Self {
        Self { engine: Some(engine) }
    }

    /// An overlay that ignores everything
    pub fn inert() -> Self {
        Self { engine: None }
    }

    #[allow(dead_code)] // inspection API, exercised by tests
    pub fn is_active(&self) -> bool {
        self.engine.is_some()
    }

    /// Burst `count` particles at (x, y); no-op when inert
    pub fn spawn_explosion(&mut self, x: f32, y: f32, count: usize) {
        if let Some(engine) = &mut self.engine {
            engine.spawn_explosion(x, y, count);
        }
    }

    /// One frame of advance-and-render; no-op when inert
    pub fn step(&mut self, canvas: &mut dyn Canvas) {
        if let Some(engine) = &mut self.engine {
            engine.step(canvas);
        }
    }

    /// Rebind the drawable area after a window resize
    pub fn resize(&mut self, width: f32, height: f32) {
        if let Some(engine) = &mut self.engine {
            engine.resize(width, height);
        }
    }

    /// Stop the engine and drop all particles; safe to call repeatedly
    pub fn teardown(&mut self) {
        if let Some(engine) = &mut self.engine {
            engine.teardown();
        }
    }

    /// Live particle count (0 when inert)
    #[allow(dead_code)] // inspection API, exercised by tests
    pub fn count(&self) -> usize {
        self.engine.as_ref().map_or(0, ParticleEngine::count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullCanvas;
    impl Canvas for NullCanvas {
        fn clear(&mut self) {}
        fn fill_circle(&mut self, _x: f32, _y: f32, _radius: f32, _hue: f32, _alpha: f32) {}
    }

    #[test]
    fn test_inert_overlay_ignores_everything() {
        let mut overlay = ParticleOverlay::inert();
        overlay.spawn_explosion(100.0, 100.0, 80);
        overlay.step(&mut NullCanvas);
        overlay.resize(640.0, 480.0);
        overlay.teardown();
        assert!(!overlay.is_active());
        assert_eq!(overlay.count(), 0);
    }

    #[test]
    fn test_active_overlay_forwards_spawns() {
        let mut overlay = ParticleOverlay::active(ParticleEngine::new(800.0, 600.0));
        overlay.spawn_explosion(400.0, 300.0, 25);
        assert!(overlay.is_active());
        assert_eq!(overlay.count(), 25);
        overlay.teardown();
        assert_eq!(overlay.count(), 0);
    }
}
