// Emulator module - Main emulator coordinator
//
// Coordinates the CPU, PPU, and cartridge through the bus and drives the
// cooperative step loop the host uses to produce frames: each CPU
// instruction is followed by three PPU dots, NMI requests are delivered
// between steps, and `step_frame` returns once a full picture has been
// rendered.

mod config;

pub use config::{EmulatorConfig, VideoConfig};

use crate::bus::Bus;
use crate::cartridge::Cartridge;
use crate::cpu::Cpu;
use crate::input::Controller;
use crate::ppu::PpuEvent;
use std::path::{Path, PathBuf};

/// Main emulator structure
///
/// Coordinates all NES components and provides the high-level interface a
/// host driver uses to load a ROM, step frames, and feed controller input.
pub struct Emulator {
    cpu: Cpu,
    bus: Bus,
    config: EmulatorConfig,
    rom_path: Option<PathBuf>,
    paused: bool,
}

impl Emulator {
    /// Create a new emulator instance, initializing all components to
    /// their power-on state.
    ///
    /// # Example
    ///
    /// ```
    /// use nes_rs::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// ```
    pub fn new() -> Self {
        Emulator {
            cpu: Cpu::new(),
            bus: Bus::new(),
            config: EmulatorConfig::load_or_default(),
            rom_path: None,
            paused: false,
        }
    }

    /// Load a ROM file, wiring its PRG/CHR banks into the bus and
    /// resetting the CPU through the reset vector.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nes_rs::emulator::Emulator;
    ///
    /// let mut emulator = Emulator::new();
    /// emulator.load_rom("game.nes").expect("Failed to load ROM");
    /// ```
    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let cartridge = Cartridge::from_ines_file(path)?;
        self.bus.load_cartridge(cartridge);
        self.rom_path = Some(path.to_path_buf());
        self.reset();
        Ok(())
    }

    /// Load an already-parsed cartridge directly, bypassing the filesystem.
    pub fn load_cartridge(&mut self, cartridge: Cartridge) {
        self.bus.load_cartridge(cartridge);
        self.rom_path = None;
        self.reset();
    }

    /// Reset all components to their power-on state, as if pressing the
    /// reset button.
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
        self.paused = false;
    }

    /// Run CPU and PPU together until one whole frame has been rendered,
    /// delivering any PPU-requested NMI between CPU steps. A no-op while
    /// paused.
    pub fn step_frame(&mut self) {
        if self.paused {
            return;
        }
        loop {
            let cycles = self.cpu.step(&mut self.bus);
            for _ in 0..(cycles as u32 * 3) {
                match self.bus.step_ppu() {
                    PpuEvent::Nmi => self.cpu.nmi(&mut self.bus),
                    PpuEvent::FrameReady => return,
                    PpuEvent::None => {}
                }
            }
        }
    }

    /// Feed the current controller button state for the next reads.
    pub fn set_controller_state(&mut self, state: Controller) {
        self.bus.joypad.set_state(state);
    }

    /// The most recently rendered picture, as 0xRRGGBB packed pixels.
    pub fn framebuffer(&self) -> &[u32; crate::ppu::SCREEN_WIDTH * crate::ppu::SCREEN_HEIGHT] {
        self.bus.ppu.framebuffer()
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EmulatorConfig {
        &mut self.config
    }

    pub fn rom_path(&self) -> Option<&Path> {
        self.rom_path.as_deref()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
