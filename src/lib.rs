// NES Emulator Library
// Core library for the NES emulator implementation

// Public modules
pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod debug;
pub mod display;
pub mod emulator;
pub mod input;
pub mod ppu;
pub mod ram;

// Re-export main types for convenience
pub use bus::{Bus, MemoryMappedDevice};
pub use cartridge::{Cartridge, INesError, Mirroring};
pub use cpu::Cpu;
pub use debug::{LogLevel, Logger, TraceEntry};
pub use display::WindowConfig;
pub use emulator::{Emulator, EmulatorConfig};
pub use input::{Button, Controller, Joypad, KeyboardHandler, KeyboardMapping};
pub use ppu::Ppu;
pub use ram::Ram;
