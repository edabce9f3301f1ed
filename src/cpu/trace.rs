// Regression trace log: a single-line decode of the instruction at the
// current PC, in the column layout a reference Nestest-style log uses.
// Only the byte ranges [0..14) (PC + instruction bytes) and [48..73)
// (register snapshot) are contractual; the mnemonic field between them is
// padded to a fixed width but its exact text is not compared byte-for-byte
// against a reference log.

use super::opcodes;
use super::Cpu;
use crate::bus::Bus;

impl Cpu {
    /// Format the instruction about to execute as one trace line, without
    /// mutating CPU state. Intended to be called before `step()`.
    pub fn trace_line(&self, bus: &mut Bus) -> String {
        let pc = self.pc;
        let opcode = bus.read(pc);
        let entry = opcodes::table()[opcode as usize];

        let byte2 = if entry.length >= 2 {
            bus.read(pc.wrapping_add(1))
        } else {
            0
        };
        let byte3 = if entry.length >= 3 {
            bus.read(pc.wrapping_add(2))
        } else {
            0
        };

        let hex_bytes = match entry.length {
            1 => format!("{:02X}      ", opcode),
            2 => format!("{:02X} {:02X}   ", opcode, byte2),
            _ => format!("{:02X} {:02X} {:02X}", opcode, byte2, byte3),
        };

        format!(
            "{:04X}  {}  {:<32}A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
            pc,
            hex_bytes,
            entry.mnemonic.as_str(),
            self.a,
            self.x,
            self.y,
            self.status_byte(),
            self.sp,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_line_matches_contractual_byte_ranges() {
        let mut bus = Bus::new();
        bus.write(0xC000, 0x4C); // JMP absolute
        bus.write(0xC001, 0xF5);
        bus.write(0xC002, 0xC5);
        let mut cpu = Cpu::new();
        cpu.pc = 0xC000;

        let line = cpu.trace_line(&mut bus);
        assert_eq!(&line[0..14], "C000  4C F5 C5");

        let registers = &line[48..73];
        let expected = format!(
            "A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
            cpu.a,
            cpu.x,
            cpu.y,
            cpu.status_byte(),
            cpu.sp
        );
        assert_eq!(registers, expected);
    }

    #[test]
    fn single_byte_instruction_pads_operand_field() {
        let mut bus = Bus::new();
        bus.write(0x8000, 0x18); // CLC, implied
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        let line = cpu.trace_line(&mut bus);
        assert_eq!(&line[0..14], "8000  18      ");
    }

    #[test]
    fn jam_opcode_logs_its_mnemonic() {
        let mut bus = Bus::new();
        bus.write(0x8000, 0x02);
        let mut cpu = Cpu::new();
        cpu.pc = 0x8000;
        let line = cpu.trace_line(&mut bus);
        assert!(line.contains("KIL"));
    }
}
