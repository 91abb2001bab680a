//! Software framebuffer for writing simulation frames to PNG

use anyhow::{Context, Result};
use ember_core::color;
use ember_particles::ParticleSystem;
use image::{Rgba, RgbaImage};
use std::path::Path;

pub struct Framebuffer {
    image: RgbaImage,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let mut fb = Self {
            image: RgbaImage::new(width, height),
        };
        fb.clear();
        fb
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn clear(&mut self) {
        let black = Rgba(color::to_rgba_bytes(color::BLACK));
        for px in self.image.pixels_mut() {
            *px = black;
        }
    }

    /// Plot one pixel at simulation coordinates (origin at the centre, y up).
    /// Points outside the frame are dropped.
    pub fn plot(&mut self, x: f32, y: f32, argb: u32) {
        let sx = (x + self.width() as f32 / 2.0).floor();
        let sy = (self.height() as f32 / 2.0 - y).floor();
        if sx < 0.0 || sy < 0.0 || sx >= self.width() as f32 || sy >= self.height() as f32 {
            return;
        }
        self.image
            .put_pixel(sx as u32, sy as u32, Rgba(color::to_rgba_bytes(argb)));
    }

    /// Clear, then plot every alive particle in the pool.
    pub fn draw(&mut self, system: &ParticleSystem) {
        self.clear();
        system.visit_alive_particles(|p| {
            self.plot(p.position.x, p.position.y, p.color);
            true
        });
    }

    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        let [r, g, b, _] = self.image.get_pixel(x, y).0;
        color::pack_rgb(r as i32, g as i32, b as i32)
    }

    pub fn lit_pixels(&self) -> usize {
        self.image
            .pixels()
            .filter(|px| px.0[0] != 0 || px.0[1] != 0 || px.0[2] != 0)
            .count()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.image
            .save(path)
            .with_context(|| format!("Failed to save frame to '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::Vec2;
    use ember_particles::ParticleInit;

    #[test]
    fn new_buffer_is_black() {
        let fb = Framebuffer::new(8, 6);
        assert_eq!(fb.lit_pixels(), 0);
        assert_eq!(fb.pixel(3, 3), color::BLACK);
    }

    #[test]
    fn origin_maps_to_centre() {
        let mut fb = Framebuffer::new(8, 6);
        fb.plot(0.0, 0.0, color::RED);
        assert_eq!(fb.pixel(4, 3), color::RED);

        // y up on screen means a smaller row
        fb.plot(1.0, 2.0, color::YELLOW);
        assert_eq!(fb.pixel(5, 1), color::YELLOW);
    }

    #[test]
    fn off_screen_points_are_dropped() {
        let mut fb = Framebuffer::new(8, 6);
        fb.plot(-5.0, 0.0, color::WHITE);
        fb.plot(4.0, 0.0, color::WHITE);
        fb.plot(0.0, 3.5, color::WHITE);
        fb.plot(0.0, -3.0, color::WHITE);
        assert_eq!(fb.lit_pixels(), 0);
    }

    #[test]
    fn draw_plots_alive_particles_only() {
        let mut system = ParticleSystem::new(4).unwrap();
        for (x, color) in [(-2.0, color::RED), (2.0, color::WHITE)] {
            let p = system.claim_dead_particle().unwrap();
            p.spawn(ParticleInit {
                position: Vec2::new(x, 0.0),
                velocity: Vec2::ZERO,
                acceleration: Vec2::ZERO,
                color,
                age: 10,
            });
        }

        let mut fb = Framebuffer::new(8, 6);
        // initializing particles are not in the alive view yet
        fb.draw(&system);
        assert_eq!(fb.lit_pixels(), 0);

        system.tick(&mut NoopAnimator, 0.0);
        fb.draw(&system);
        assert_eq!(fb.lit_pixels(), 2);
        assert_eq!(fb.pixel(2, 3), color::RED);
        assert_eq!(fb.pixel(6, 3), color::WHITE);
    }

    #[test]
    fn save_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let mut fb = Framebuffer::new(4, 4);
        fb.plot(0.0, 0.0, color::WHITE);
        fb.save(&path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (4, 4));
        assert_eq!(loaded.get_pixel(2, 2).0, [255, 255, 255, 255]);
    }

    struct NoopAnimator;

    impl ember_particles::Animator for NoopAnimator {
        fn before_tick(&mut self, _delta_seconds: f32) {}
        fn tick(
            &mut self,
            _particle: &mut ember_particles::Particle,
            _source: &mut dyn ember_particles::ParticleSource,
            _delta_seconds: f32,
        ) {
        }
        fn init(&mut self, _source: &mut dyn ember_particles::ParticleSource) {}
    }
}
