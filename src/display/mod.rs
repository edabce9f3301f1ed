// Display module - window creation and frame rendering
//
// This module provides:
// - RGBA conversion of the PPU's resolved framebuffer
// - Window creation with scaling support (1x-8x)
// - Frame rendering using winit + pixels
// - VSync and frame timing

pub mod framebuffer;
pub mod palette;
pub mod window;

pub use framebuffer::{blit_to_rgba, SCREEN_HEIGHT, SCREEN_SIZE, SCREEN_WIDTH};
pub use palette::{rgb_to_rgba, NES_PALETTE};
pub use window::{run_display, DisplayWindow, WindowConfig};
