//! Image-to-shape scanning
//!
//! Every opaque black pixel of a picture becomes one child velocity, chosen so
//! that a burst from a common origin spreads out into the picture after
//! `time_to_display` seconds.

use ember_core::{EmberError, Result, Vec2};
use image::RgbaImage;
use std::path::Path;

const GRAVITY: f32 = -9.81;

pub fn scan_image(image: &RgbaImage, time_to_display: f32) -> Result<Vec<Vec2>> {
    if time_to_display <= 0.0 {
        return Err(EmberError::ShapeError(format!(
            "time to display must be positive, got {time_to_display}"
        )));
    }
    let cx = (image.width() / 2) as f32;
    let cy = (image.height() / 2) as f32;
    let y_movement = GRAVITY * time_to_display;

    let mut result = Vec::new();
    for x in 0..image.width() {
        for y in 0..image.height() {
            let [r, g, b, a] = image.get_pixel(x, y).0;
            if a < 128 || (r, g, b) != (0, 0, 0) {
                continue;
            }
            let dx = x as f32 - cx;
            let dy = cy - y as f32 - 2.0 * y_movement;
            result.push(Vec2::new(dx / time_to_display, dy / time_to_display));
        }
    }
    Ok(result)
}

pub fn load_shape(path: impl AsRef<Path>, time_to_display: f32) -> Result<Vec<Vec2>> {
    let path = path.as_ref();
    let image = image::open(path)
        .map_err(|e| EmberError::ShapeError(format!("{}: {e}", path.display())))?
        .to_rgba8();
    let shape = scan_image(&image, time_to_display)?;
    log::info!("shape {} has {} point(s)", path.display(), shape.len());
    Ok(shape)
}

pub fn load_shapes<P: AsRef<Path>>(paths: &[P], time_to_display: f32) -> Result<Vec<Vec<Vec2>>> {
    paths
        .iter()
        .map(|p| load_shape(p, time_to_display))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn white(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]))
    }

    #[test]
    fn black_pixels_become_velocities() {
        let mut img = white(4, 4);
        img.put_pixel(2, 2, Rgba([0, 0, 0, 255]));
        img.put_pixel(3, 0, Rgba([0, 0, 0, 255]));

        let shape = scan_image(&img, 1.0).unwrap();
        assert_eq!(shape.len(), 2);
        // centre pixel only carries the gravity compensation
        assert!(shape.iter().any(|v| v.x == 0.0 && (v.y - 19.62).abs() < 1e-4));
        // (3, 0): dx = 1, dy = 2 + 19.62
        assert!(shape.iter().any(|v| v.x == 1.0 && (v.y - 21.62).abs() < 1e-4));
    }

    #[test]
    fn transparent_pixels_are_ignored() {
        let mut img = white(3, 3);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        assert!(scan_image(&img, 1.0).unwrap().is_empty());
    }

    #[test]
    fn display_time_scales_velocity() {
        let mut img = white(2, 2);
        img.put_pixel(0, 1, Rgba([0, 0, 0, 255]));
        let slow = scan_image(&img, 2.0).unwrap();
        // dx = -1, dy = 1 - 1 + 39.24
        assert!((slow[0].x + 0.5).abs() < 1e-6);
        assert!((slow[0].y - 19.62).abs() < 1e-4);
    }

    #[test]
    fn non_positive_time_is_rejected() {
        assert!(scan_image(&white(1, 1), 0.0).is_err());
    }

    #[test]
    fn load_shape_from_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        let mut img = white(5, 5);
        img.put_pixel(1, 1, Rgba([0, 0, 0, 255]));
        img.save(&path).unwrap();

        let shapes = load_shapes(&[&path, &path], 1.5).unwrap();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].len(), 1);
    }

    #[test]
    fn missing_file_is_a_shape_error() {
        let err = load_shape("/definitely/not/here.png", 1.0).unwrap_err();
        assert!(matches!(err, EmberError::ShapeError(_)));
    }
}
