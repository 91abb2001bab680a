//! Packed `0xAARRGGBB` color helpers

pub const WHITE: u32 = 0xFFFF_FFFF;
pub const BLACK: u32 = 0xFF00_0000;
pub const RED: u32 = 0xFFFF_0000;
pub const YELLOW: u32 = 0xFFFF_FF00;

pub fn red(color: u32) -> u8 {
    ((color >> 16) & 0xFF) as u8
}

pub fn green(color: u32) -> u8 {
    ((color >> 8) & 0xFF) as u8
}

pub fn blue(color: u32) -> u8 {
    (color & 0xFF) as u8
}

/// Pack channels into an opaque color, clamping each to `[0, 255]`
pub fn pack_rgb(r: i32, g: i32, b: i32) -> u32 {
    let clamp = |c: i32| c.clamp(0, 255) as u32;
    0xFF00_0000 | clamp(r) << 16 | clamp(g) << 8 | clamp(b)
}

/// Unpack into `[r, g, b, a]` bytes, the layout `image::Rgba` expects
pub fn to_rgba_bytes(color: u32) -> [u8; 4] {
    [red(color), green(color), blue(color), (color >> 24) as u8]
}
