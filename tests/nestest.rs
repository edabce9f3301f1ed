// Nestest ROM integration test
// Runs the Nestest automation-mode ROM and compares each step's CPU trace
// line against the golden log, restricted to the byte ranges this trace
// format actually contracts to produce (disassembly and register dump; no
// PPU dot or cycle-count columns).

use nes_rs::bus::Bus;
use nes_rs::cartridge::Cartridge;
use nes_rs::cpu::Cpu;
use std::fs;

#[test]
#[ignore] // Run with: cargo test nestest -- --ignored --nocapture
fn nestest_cpu_test() {
    let rom_path = "tests/nes-test-rom/other/nestest.nes";
    let log_path = "tests/nes-test-rom/other/nestest.log";

    let cartridge = Cartridge::from_ines_file(rom_path).expect("Failed to load Nestest ROM");
    let golden_log = fs::read_to_string(log_path).expect("Failed to load golden log");
    let golden_lines: Vec<&str> = golden_log.lines().collect();

    let mut cpu = Cpu::new();
    let mut bus = Bus::new();
    bus.load_cartridge(cartridge);

    // Automation mode starts execution at $C000 instead of the reset vector.
    cpu.pc = 0xC000;
    cpu.cycles = 7;

    let mut mismatches = Vec::new();
    let max_instructions = 5003;

    for instruction_num in 0..max_instructions {
        let trace_line = cpu.trace_line(&mut bus);

        if instruction_num < golden_lines.len() {
            let golden_line = golden_lines[instruction_num];

            if !compare_trace_lines(&trace_line, golden_line) {
                mismatches.push((
                    instruction_num + 1,
                    trace_line.clone(),
                    golden_line.to_string(),
                ));

                if mismatches.len() <= 10 {
                    println!("\nMismatch at instruction {}:", instruction_num + 1);
                    println!("Expected: {}", golden_line);
                    println!("Got:      {}", trace_line);
                }
            }
        }

        cpu.step(&mut bus);

        // Nestest reports its result code at $02/$03; both zero means success.
        let result_02 = bus.read(0x02);
        let result_03 = bus.read(0x03);
        if result_02 != 0 || result_03 != 0 {
            println!(
                "\nNestest stopped early: $02=${:02X}, $03=${:02X}",
                result_02, result_03
            );
            break;
        }
    }

    println!("\nNestest execution complete");
    println!("Total mismatches: {}", mismatches.len());

    let result_02 = bus.read(0x02);
    let result_03 = bus.read(0x03);
    assert_eq!(result_02, 0, "Test failed: $02 should be $00");
    assert_eq!(result_03, 0, "Test failed: $03 should be $00");
    assert!(
        mismatches.is_empty(),
        "{} trace mismatches against the golden log",
        mismatches.len()
    );
}

/// Compare the disassembly column (bytes 0..14) and the register dump
/// (bytes 48..73) — the two ranges `Cpu::trace_line` contracts to produce.
fn compare_trace_lines(actual: &str, expected: &str) -> bool {
    let actual_disasm = actual.get(0..14);
    let expected_disasm = expected.get(0..14);

    let actual_registers = actual.get(48..73);
    let expected_registers = expected.get(48..73);

    actual_disasm == expected_disasm && actual_registers == expected_registers
}

#[test]
fn nestest_quick_smoke_test() {
    let mut cpu = Cpu::new();
    let mut bus = Bus::new();

    // LDA #$42, STA $00, BRK, placed in RAM so it runs without a cartridge.
    bus.write(0x0000, 0xA9); // LDA #$42
    bus.write(0x0001, 0x42);
    bus.write(0x0002, 0x85); // STA $00
    bus.write(0x0003, 0x00);
    bus.write(0x0004, 0x00); // BRK

    cpu.pc = 0x0000;

    cpu.step(&mut bus);
    assert_eq!(cpu.a, 0x42);
    assert_eq!(cpu.pc, 0x0002);

    cpu.step(&mut bus);
    assert_eq!(bus.read(0x00), 0x42);
    assert_eq!(cpu.pc, 0x0004);
}
