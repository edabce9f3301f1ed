// Common test utilities for ROM-based integration tests
//
// Shared helpers for running full .nes test ROMs (Blargg-style and other
// cartridge-based test suites) against the real cartridge/bus pipeline.

#![allow(dead_code)]

use nes_rs::bus::Bus;
use nes_rs::cartridge::Cartridge;
use nes_rs::cpu::Cpu;
use std::path::Path;

/// Maximum number of CPU cycles to run before timing out
pub const MAX_TEST_CYCLES: u64 = 100_000_000;

/// Result of running a test ROM
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Passed,
    Failed(u8),
    Timeout,
}

/// Read a null-terminated ASCII string out of bus-addressable memory.
pub fn read_string(bus: &mut Bus, addr: u16, max_len: usize) -> String {
    let mut result = String::new();
    let mut current_addr = addr;

    for _ in 0..max_len {
        let byte = bus.read(current_addr);
        if byte == 0 {
            break;
        }
        if (0x20..=0x7E).contains(&byte) {
            result.push(byte as char);
        }
        current_addr = current_addr.wrapping_add(1);
    }

    result
}

/// Load a cartridge and run it against the CPU/bus using the status
/// protocol shared by Blargg's and Kevin Horton's test ROMs: $6000 holds
/// $80 while the test runs, then a result code once it's done, with a
/// human-readable message at $6004.
///
/// Returns `(passed, message)`, or an `Err` if the ROM file is missing or
/// fails to parse as iNES.
pub fn run_blargg_style_test(rom_path: &str, max_cycles: u64) -> Result<(bool, String), String> {
    let path = Path::new(rom_path);
    if !path.exists() {
        return Err(format!("test ROM not found: {}", rom_path));
    }

    let cartridge =
        Cartridge::from_ines_file(path).map_err(|e| format!("failed to load cartridge: {}", e))?;

    let mut cpu = Cpu::new();
    let mut bus = Bus::new();
    bus.load_cartridge(cartridge);
    cpu.reset(&mut bus);

    let mut cycles = 0u64;
    let mut seen_running = false;

    while cycles < max_cycles {
        cycles += cpu.step(&mut bus) as u64;

        let status = bus.read(0x6000);
        if status == 0x80 {
            seen_running = true;
            continue;
        }

        if seen_running {
            let message = read_string(&mut bus, 0x6004, 400);
            return Ok((status == 0x00, format!("status ${:02X}: {}", status, message)));
        }
    }

    Ok((false, "timed out waiting for test completion".to_string()))
}

/// Format a `TestResult` for display.
pub fn format_result(result: &TestResult) -> String {
    match result {
        TestResult::Passed => "PASSED".to_string(),
        TestResult::Failed(code) => format!("FAILED (error code: ${:02X})", code),
        TestResult::Timeout => "TIMEOUT".to_string(),
    }
}
