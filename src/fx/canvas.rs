//! Drawing surface seam for the particle overlay
//!
//! The engine renders through this trait so the draw math (radius and
//! opacity scale with remaining life) is testable without a window.

use macroquad::prelude::{draw_circle, Color};

/// Where particles get drawn. One implementation targets the screen,
/// tests substitute a recorder.
pub trait Canvas {
    /// Wipe the surface before a frame's draws
    fn clear(&mut self);
    /// Filled circle, color given as an HSL hue plus alpha
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, hue: f32, alpha: f32);
}

/// Saturation/lightness for particle fills (fixed, only the hue varies)
const PARTICLE_SATURATION: f32 = 0.7;
const PARTICLE_LIGHTNESS: f32 = 0.6;

/// Production canvas: draws straight to the macroquad frame
pub struct ScreenCanvas;

impl Canvas for ScreenCanvas {
    fn clear(&mut self) {
        // The frame is already cleared by the composition root's
        // clear_background before the page layer draws; nothing to do here.
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, hue: f32, alpha: f32) {
        let color = hsl_color(hue, PARTICLE_SATURATION, PARTICLE_LIGHTNESS, alpha);
        draw_circle(x, y, radius, color);
    }
}

/// HSL to RGBA. Hue in degrees (wraps), saturation/lightness/alpha in 0..=1.
pub fn hsl_color(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Color {
    let hue = hue.rem_euclid(360.0);
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let secondary = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let base = lightness - chroma / 2.0;

    let (r, g, b) = match (hue / 60.0) as u32 {
        0 => (chroma, secondary, 0.0),
        1 => (secondary, chroma, 0.0),
        2 => (0.0, chroma, secondary),
        3 => (0.0, secondary, chroma),
        4 => (secondary, 0.0, chroma),
        _ => (chroma, 0.0, secondary),
    };

    Color::new(r + base, g + base, b + base, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_hsl_primaries() {
        let red = hsl_color(0.0, 1.0, 0.5, 1.0);
        assert!(close(red.r, 1.0) && close(red.g, 0.0) && close(red.b, 0.0));

        let green = hsl_color(120.0, 1.0, 0.5, 1.0);
        assert!(close(green.r, 0.0) && close(green.g, 1.0) && close(green.b, 0.0));

        let blue = hsl_color(240.0, 1.0, 0.5, 1.0);
        assert!(close(blue.r, 0.0) && close(blue.g, 0.0) && close(blue.b, 1.0));
    }

    #[test]
    fn test_hsl_particle_teal() {
        // hue 180 at the particle fill's fixed saturation/lightness
        let c = hsl_color(180.0, 0.7, 0.6, 0.5);
        assert!(close(c.r, 0.32));
        assert!(close(c.g, 0.88));
        assert!(close(c.b, 0.88));
        assert!(close(c.a, 0.5));
    }

    #[test]
    fn test_hsl_hue_wraps() {
        let a = hsl_color(540.0, 0.7, 0.6, 1.0);
        let b = hsl_color(180.0, 0.7, 0.6, 1.0);
        assert!(close(a.r, b.r) && close(a.g, b.g) && close(a.b, b.b));
    }
}
