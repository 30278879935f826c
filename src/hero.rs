//! Landing screen
//!
//! The "page" the particle overlay decorates. Hero copy fades and slides in
//! through the injected entrance driver, the entrance explosion fires after
//! a settling delay so it lands mid-sequence, and clicks burst at the
//! pointer. Scroll position and the cursor glow both ease toward their
//! targets instead of snapping.

use macroquad::prelude::*;

use crate::anim::{Entrance, EntranceDriver};
use crate::config::DecorConfig;
use crate::fx::ParticleOverlay;

/// Colors matching the overlay's teal hue band
pub const BG_COLOR: Color = Color::new(0.05, 0.06, 0.09, 1.0);
const TEXT_COLOR: Color = Color::new(0.9, 0.9, 0.92, 1.0);
const MUTED_COLOR: Color = Color::new(0.55, 0.58, 0.64, 1.0);
const ACCENT_COLOR: Color = Color::new(0.15, 0.8, 0.9, 1.0);
const SECTION_BG: Color = Color::new(0.08, 0.09, 0.13, 1.0);

/// Staggered entrance windows for the hero elements
const TITLE_ENTRANCE: Entrance = Entrance::new(0.2, 0.8);
const TAGLINE_ENTRANCE: Entrance = Entrance::new(0.5, 0.8);
const SUBTITLE_ENTRANCE: Entrance = Entrance::new(0.8, 0.8);
const HINT_ENTRANCE: Entrance = Entrance::new(1.1, 0.8);

/// Per-frame easing factors for scroll and cursor follow
const SCROLL_EASE: f32 = 0.15;
const CURSOR_EASE: f32 = 0.1;

/// How far the info sections can scroll up
const MAX_SCROLL: f32 = 420.0;

/// State for the landing screen (smoothed scroll, cursor glow, burst latch)
pub struct HeroState {
    pub scroll_y: f32,
    scroll_target: f32,
    cursor_x: f32,
    cursor_y: f32,
    cursor_enabled: bool,
    entrance_burst_fired: bool,
}

impl HeroState {
    pub fn new(cursor_enabled: bool) -> Self {
        Self {
            scroll_y: 0.0,
            scroll_target: 0.0,
            cursor_x: 0.0,
            cursor_y: 0.0,
            cursor_enabled,
            entrance_burst_fired: false,
        }
    }

    /// Per-frame input handling and smoothing. Kept free of draw calls (and
    /// of macroquad queries) so it runs headless in tests.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        t: f32,
        surface: (f32, f32),
        mouse: (f32, f32),
        clicked: bool,
        wheel: f32,
        overlay: &mut ParticleOverlay,
        config: &DecorConfig,
    ) {
        self.scroll_target = (self.scroll_target + wheel * 0.5).clamp(-MAX_SCROLL, 0.0);
        self.scroll_y = approach(self.scroll_y, self.scroll_target, SCROLL_EASE);

        self.cursor_x = approach(self.cursor_x, mouse.0, CURSOR_EASE);
        self.cursor_y = approach(self.cursor_y, mouse.1, CURSOR_EASE);

        // Entrance explosion: once, at the viewport center, after the copy
        // has had time to settle in
        if !self.entrance_burst_fired && t >= config.settle_delay {
            self.entrance_burst_fired = true;
            overlay.spawn_explosion(surface.0 / 2.0, surface.1 / 2.0, config.entrance_burst);
        }

        if clicked {
            overlay.spawn_explosion(mouse.0, mouse.1, config.click_burst);
        }
    }

    /// Draw the screen. Entrance opacity/offset come from the driver, so a
    /// reduced-motion run shows everything settled on frame one.
    pub fn draw(&self, t: f32, driver: &dyn EntranceDriver, width: f32, height: f32) {
        let center_x = width / 2.0;
        let hero_y = height * 0.30 + self.scroll_y;

        draw_entering_text(
            "GLIMMER",
            center_x,
            hero_y,
            64.0,
            ACCENT_COLOR,
            t,
            &TITLE_ENTRANCE,
            driver,
        );
        draw_entering_text(
            "Particles with a pulse",
            center_x,
            hero_y + 54.0,
            26.0,
            TEXT_COLOR,
            t,
            &TAGLINE_ENTRANCE,
            driver,
        );
        draw_entering_text(
            "A decorative overlay engine: bursts, drift, and fade",
            center_x,
            hero_y + 90.0,
            18.0,
            MUTED_COLOR,
            t,
            &SUBTITLE_ENTRANCE,
            driver,
        );
        draw_entering_text(
            "Click anywhere to burst  ·  scroll for more",
            center_x,
            hero_y + 130.0,
            16.0,
            MUTED_COLOR,
            t,
            &HINT_ENTRANCE,
            driver,
        );

        // Info sections below the fold
        let content_width = (width - 80.0).min(720.0);
        let content_x = center_x - content_width / 2.0;
        let mut y = hero_y + 220.0;

        y = draw_section(
            content_x,
            y,
            content_width,
            "What is this?",
            &[
                "A tiny decoration engine: short-lived glowing particles with",
                "inertial motion, drag, and life-based fading, drawn over a",
                "landing screen. Bursts fire on entrance and on every click;",
                "an ambient sparkle keeps the screen alive in between.",
            ],
        );

        draw_section(
            content_x,
            y,
            content_width,
            "Reduced motion",
            &[
                "Set GLIMMER_REDUCED_MOTION=1 (or reduced_motion in",
                "glimmer.ron) and the overlay stays inert while the copy",
                "appears fully settled, with nothing moving at all.",
            ],
        );

        if self.cursor_enabled {
            self.draw_cursor_glow();
        }
    }

    /// Inner dot plus trailing outer ring at the smoothed cursor position
    fn draw_cursor_glow(&self) {
        let outer = Color::new(ACCENT_COLOR.r, ACCENT_COLOR.g, ACCENT_COLOR.b, 0.25);
        let inner = Color::new(ACCENT_COLOR.r, ACCENT_COLOR.g, ACCENT_COLOR.b, 0.8);
        draw_circle(self.cursor_x, self.cursor_y, 16.0, outer);
        draw_circle(self.cursor_x, self.cursor_y, 4.0, inner);
    }
}

/// Move `current` a fixed fraction of the way toward `target`
fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Centered text with entrance opacity and upward slide applied
#[allow(clippy::too_many_arguments)]
fn draw_entering_text(
    text: &str,
    center_x: f32,
    y: f32,
    font_size: f32,
    color: Color,
    t: f32,
    entrance: &Entrance,
    driver: &dyn EntranceDriver,
) {
    let opacity = entrance.opacity(t, driver);
    if opacity <= 0.0 {
        return;
    }
    let offset = entrance.offset_y(t, driver);
    // Approximate width (measure_text is slow; ~0.55 * font_size per char)
    let text_width = text.len() as f32 * font_size * 0.55;
    let faded = Color::new(color.r, color.g, color.b, color.a * opacity);
    draw_text(text, center_x - text_width / 2.0, y + offset, font_size, faded);
}

/// Section card with a title and pre-wrapped body lines; returns the next y
fn draw_section(x: f32, y: f32, width: f32, title: &str, lines: &[&str]) -> f32 {
    let padding = 16.0;
    let line_height = 22.0;
    let title_height = 26.0;
    let section_height = title_height + padding + lines.len() as f32 * line_height + padding;

    draw_rectangle(x.round(), y.round(), width.round(), section_height, SECTION_BG);
    draw_text(title, x + padding, y + padding + 16.0, 16.0, ACCENT_COLOR);

    let mut text_y = y + padding + title_height;
    for line in lines {
        draw_text(line, x + padding, text_y + 16.0, 16.0, TEXT_COLOR);
        text_y += line_height;
    }

    y + section_height + 20.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::{ParticleEngine, ParticleOverlay};

    fn quiet_overlay() -> ParticleOverlay {
        let params = crate::fx::EngineParams {
            ambient_rate: 0.0,
            ..Default::default()
        };
        ParticleOverlay::active(ParticleEngine::with_params(800.0, 600.0, params))
    }

    fn tick(state: &mut HeroState, t: f32, overlay: &mut ParticleOverlay, config: &DecorConfig) {
        state.update(t, (800.0, 600.0), (0.0, 0.0), false, 0.0, overlay, config);
    }

    #[test]
    fn test_approach_converges_without_overshoot() {
        let mut v = 0.0;
        for _ in 0..200 {
            let next = approach(v, 100.0, 0.1);
            assert!(next > v && next <= 100.0);
            v = next;
        }
        assert!((v - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_entrance_burst_fires_once_after_settle_delay() {
        let config = DecorConfig::default();
        let mut overlay = quiet_overlay();
        let mut state = HeroState::new(true);

        tick(&mut state, 0.5, &mut overlay, &config);
        tick(&mut state, 1.0, &mut overlay, &config);
        assert_eq!(overlay.count(), 0);

        tick(&mut state, 1.5, &mut overlay, &config);
        assert_eq!(overlay.count(), config.entrance_burst);

        // Latched: later frames add nothing
        tick(&mut state, 2.0, &mut overlay, &config);
        assert_eq!(overlay.count(), config.entrance_burst);
    }

    #[test]
    fn test_click_bursts_at_pointer() {
        let config = DecorConfig::default();
        let mut overlay = quiet_overlay();
        let mut state = HeroState::new(true);

        state.update(0.1, (800.0, 600.0), (250.0, 140.0), true, 0.0, &mut overlay, &config);
        assert_eq!(overlay.count(), config.click_burst);
    }

    #[test]
    fn test_scroll_eases_toward_clamped_target() {
        let config = DecorConfig::default();
        let mut overlay = ParticleOverlay::inert();
        let mut state = HeroState::new(true);

        // One big wheel push; target clamps to the scroll range
        state.update(0.1, (800.0, 600.0), (0.0, 0.0), false, -10_000.0, &mut overlay, &config);
        let first = state.scroll_y;
        assert!(first < 0.0 && first >= -MAX_SCROLL);

        // Further frames keep easing down toward the target
        for t in 2..60 {
            tick(&mut state, t as f32 * 0.016, &mut overlay, &config);
        }
        assert!(state.scroll_y < first);
        assert!((state.scroll_y - -MAX_SCROLL).abs() < 1.0);

        // Scrolling back up never goes past the top
        for t in 60..240 {
            state.update(t as f32 * 0.016, (800.0, 600.0), (0.0, 0.0), false, 10_000.0, &mut overlay, &config);
        }
        assert!(state.scroll_y <= 0.0);
    }

    #[test]
    fn test_cursor_follows_mouse_with_lerp() {
        let config = DecorConfig::default();
        let mut overlay = ParticleOverlay::inert();
        let mut state = HeroState::new(true);

        state.update(0.1, (800.0, 600.0), (100.0, 50.0), false, 0.0, &mut overlay, &config);
        // One frame moves exactly one ease factor of the distance
        assert!((state.cursor_x - 10.0).abs() < 1e-4);
        assert!((state.cursor_y - 5.0).abs() < 1e-4);

        for t in 2..300 {
            state.update(t as f32 * 0.016, (800.0, 600.0), (100.0, 50.0), false, 0.0, &mut overlay, &config);
        }
        assert!((state.cursor_x - 100.0).abs() < 0.1);
        assert!((state.cursor_y - 50.0).abs() < 0.1);
    }
}
