//! GLIMMER: decorative particle overlay for landing screens
//!
//! A native rendition of a marketing-page decoration layer: hero copy that
//! fades and slides in, a cursor glow, smooth scrolling, and on top of it
//! all a particle engine firing teal bursts on entrance and on clicks.
//!
//! Composition happens here and only here: the motion preference is read
//! once, the entrance driver and the overlay handle are built from it, and
//! everything downstream just uses what it was given.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod anim;
mod config;
mod fx;
mod hero;
mod motion;

use macroquad::prelude::*;
use std::path::Path;

use fx::{ParticleEngine, ParticleOverlay, ScreenCanvas};
use hero::HeroState;
use motion::MotionPreference;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Glimmer v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let config = config::load_or_default(Path::new("glimmer.ron"));
    let prefs = motion::detect(config.reduced_motion);
    let driver = anim::driver_for(prefs);

    // The overlay is built once: live, or inert when the host prefers no
    // motion or the config switched it off. Inert handles no-op everything.
    let mut overlay = if prefs == MotionPreference::Reduced {
        println!("Reduced motion requested, particle overlay inert");
        ParticleOverlay::inert()
    } else if !config.overlay_enabled {
        println!("Particle overlay disabled by config");
        ParticleOverlay::inert()
    } else {
        ParticleOverlay::active(ParticleEngine::with_params(
            screen_width(),
            screen_height(),
            config.engine_params(),
        ))
    };

    let mut canvas = ScreenCanvas;
    let mut hero = HeroState::new(prefs == MotionPreference::Full);
    let start_time = get_time();
    let mut last_size = (screen_width(), screen_height());

    loop {
        #[cfg(not(target_arch = "wasm32"))]
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let size = (screen_width(), screen_height());
        if size != last_size {
            // Only the drawable area changes; particles keep their state
            overlay.resize(size.0, size.1);
            last_size = size;
        }

        let t = (get_time() - start_time) as f32;
        let mouse = mouse_position();
        let clicked = is_mouse_button_pressed(MouseButton::Left);
        let wheel = mouse_wheel().1;

        clear_background(hero::BG_COLOR);
        hero.update(t, size, mouse, clicked, wheel, &mut overlay, &config);
        hero.draw(t, driver.as_ref(), size.0, size.1);

        // Particles render last so bursts sit on top of the page layer
        overlay.step(&mut canvas);

        next_frame().await;
    }

    overlay.teardown();
}
