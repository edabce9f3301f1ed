// NES Emulator - Main Entry Point

use nes_rs::display::{run_display, WindowConfig};
use nes_rs::emulator::Emulator;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "nes-rs".to_string());
    let Some(rom_path) = args.next() else {
        eprintln!("usage: {} <rom.nes>", program);
        return ExitCode::FAILURE;
    };

    let mut emulator = Emulator::new();
    if let Err(err) = emulator.load_rom(&rom_path) {
        eprintln!("failed to load '{}': {}", rom_path, err);
        return ExitCode::FAILURE;
    }

    let video = emulator.config().video.clone();
    let config = WindowConfig::new()
        .with_scale(video.scale)
        .with_fps(video.fps)
        .with_vsync(video.vsync);

    if let Err(err) = run_display(config, emulator) {
        eprintln!("display error: {}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
