// Frame buffer blitting - copies the PPU's already-resolved picture into
// the RGBA byte buffer the `pixels` crate renders from.

use super::palette::rgb_to_rgba;

pub use crate::ppu::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Total number of pixels in one frame.
pub const SCREEN_SIZE: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

/// Copy a PPU framebuffer (`0xRRGGBB` pixels) into an RGBA byte buffer at
/// least `SCREEN_SIZE * 4` bytes long.
///
/// # Panics
/// Panics if `output` is smaller than `SCREEN_SIZE * 4` bytes.
pub fn blit_to_rgba(framebuffer: &[u32; SCREEN_SIZE], output: &mut [u8]) {
    assert!(
        output.len() >= SCREEN_SIZE * 4,
        "output buffer too small for RGBA conversion"
    );

    for (i, &pixel) in framebuffer.iter().enumerate() {
        let rgba = rgb_to_rgba(pixel);
        let offset = i * 4;
        output[offset..offset + 4].copy_from_slice(&rgba);
    }
}
