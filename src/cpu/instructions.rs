// Instruction semantics: one method per official 6502 mnemonic. Addressing
// has already been resolved into an `AddressingResult` by the time these
// run; each method only needs to fetch/store through it and update flags.

use super::addressing::AddressingResult;
use super::opcodes::Mnemonic;
use super::Cpu;
use crate::bus::Bus;
use crate::debug::LogLevel;

impl Cpu {
    /// Read the operand: the resolved value for immediate/accumulator
    /// modes, otherwise a memory read at the resolved address.
    fn fetch(&self, bus: &mut Bus, res: &AddressingResult) -> u8 {
        match res.value {
            Some(value) => value,
            None => bus.read(res.address),
        }
    }

    /// Write a result back to wherever it came from: the accumulator for
    /// accumulator-mode instructions, memory otherwise.
    fn store(&mut self, bus: &mut Bus, res: &AddressingResult, value: u8) {
        if res.value.is_some() {
            self.a = value;
        } else {
            bus.write(res.address, value);
        }
    }

    // ---- Load/store ----

    pub(super) fn lda(&mut self, bus: &mut Bus, res: &AddressingResult) {
        self.a = self.fetch(bus, res);
        self.update_zero_and_negative_flags(self.a);
    }

    pub(super) fn ldx(&mut self, bus: &mut Bus, res: &AddressingResult) {
        self.x = self.fetch(bus, res);
        self.update_zero_and_negative_flags(self.x);
    }

    pub(super) fn ldy(&mut self, bus: &mut Bus, res: &AddressingResult) {
        self.y = self.fetch(bus, res);
        self.update_zero_and_negative_flags(self.y);
    }

    pub(super) fn sta(&mut self, bus: &mut Bus, res: &AddressingResult) {
        bus.write(res.address, self.a);
    }

    pub(super) fn stx(&mut self, bus: &mut Bus, res: &AddressingResult) {
        bus.write(res.address, self.x);
    }

    pub(super) fn sty(&mut self, bus: &mut Bus, res: &AddressingResult) {
        bus.write(res.address, self.y);
    }

    // ---- Arithmetic ----

    pub(super) fn adc(&mut self, bus: &mut Bus, res: &AddressingResult) {
        let operand = self.fetch(bus, res);
        let carry_in = self.carry as u16;
        let sum = self.a as u16 + operand as u16 + carry_in;
        let result = sum as u8;

        self.carry = sum > 0xFF;
        self.overflow = (!(self.a ^ operand) & (self.a ^ result) & 0x80) != 0;
        self.a = result;
        self.update_zero_and_negative_flags(self.a);
    }

    pub(super) fn sbc(&mut self, bus: &mut Bus, res: &AddressingResult) {
        let operand = self.fetch(bus, res);
        // SBC is ADC with the operand inverted.
        let inverted = !operand;
        let carry_in = self.carry as u16;
        let sum = self.a as u16 + inverted as u16 + carry_in;
        let result = sum as u8;

        self.carry = sum > 0xFF;
        self.overflow = (!(self.a ^ inverted) & (self.a ^ result) & 0x80) != 0;
        self.a = result;
        self.update_zero_and_negative_flags(self.a);
    }

    pub(super) fn inc(&mut self, bus: &mut Bus, res: &AddressingResult) {
        let value = bus.read(res.address).wrapping_add(1);
        bus.write(res.address, value);
        self.update_zero_and_negative_flags(value);
    }

    pub(super) fn inx(&mut self) {
        self.x = self.x.wrapping_add(1);
        self.update_zero_and_negative_flags(self.x);
    }

    pub(super) fn iny(&mut self) {
        self.y = self.y.wrapping_add(1);
        self.update_zero_and_negative_flags(self.y);
    }

    pub(super) fn dec(&mut self, bus: &mut Bus, res: &AddressingResult) {
        let value = bus.read(res.address).wrapping_sub(1);
        bus.write(res.address, value);
        self.update_zero_and_negative_flags(value);
    }

    pub(super) fn dex(&mut self) {
        self.x = self.x.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.x);
    }

    pub(super) fn dey(&mut self) {
        self.y = self.y.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.y);
    }

    // ---- Logic ----

    pub(super) fn and(&mut self, bus: &mut Bus, res: &AddressingResult) {
        self.a &= self.fetch(bus, res);
        self.update_zero_and_negative_flags(self.a);
    }

    pub(super) fn ora(&mut self, bus: &mut Bus, res: &AddressingResult) {
        self.a |= self.fetch(bus, res);
        self.update_zero_and_negative_flags(self.a);
    }

    pub(super) fn eor(&mut self, bus: &mut Bus, res: &AddressingResult) {
        self.a ^= self.fetch(bus, res);
        self.update_zero_and_negative_flags(self.a);
    }

    pub(super) fn bit(&mut self, bus: &mut Bus, res: &AddressingResult) {
        let value = self.fetch(bus, res);
        self.zero = (self.a & value) == 0;
        self.overflow = value & 0x40 != 0;
        self.negative = value & 0x80 != 0;
    }

    // ---- Shifts/rotates ----

    pub(super) fn asl(&mut self, bus: &mut Bus, res: &AddressingResult) {
        let value = self.fetch(bus, res);
        self.carry = value & 0x80 != 0;
        let result = value << 1;
        self.store(bus, res, result);
        self.update_zero_and_negative_flags(result);
    }

    pub(super) fn lsr(&mut self, bus: &mut Bus, res: &AddressingResult) {
        let value = self.fetch(bus, res);
        self.carry = value & 0x01 != 0;
        let result = value >> 1;
        self.store(bus, res, result);
        self.update_zero_and_negative_flags(result);
    }

    pub(super) fn rol(&mut self, bus: &mut Bus, res: &AddressingResult) {
        let value = self.fetch(bus, res);
        let carry_in = self.carry as u8;
        self.carry = value & 0x80 != 0;
        let result = (value << 1) | carry_in;
        self.store(bus, res, result);
        self.update_zero_and_negative_flags(result);
    }

    pub(super) fn ror(&mut self, bus: &mut Bus, res: &AddressingResult) {
        let value = self.fetch(bus, res);
        let carry_in = self.carry as u8;
        self.carry = value & 0x01 != 0;
        let result = (value >> 1) | (carry_in << 7);
        self.store(bus, res, result);
        self.update_zero_and_negative_flags(result);
    }

    // ---- Compare ----

    fn compare(&mut self, bus: &mut Bus, res: &AddressingResult, register: u8) {
        let value = self.fetch(bus, res);
        let result = register.wrapping_sub(value);
        self.carry = register >= value;
        self.update_zero_and_negative_flags(result);
    }

    pub(super) fn cmp(&mut self, bus: &mut Bus, res: &AddressingResult) {
        self.compare(bus, res, self.a);
    }

    pub(super) fn cpx(&mut self, bus: &mut Bus, res: &AddressingResult) {
        self.compare(bus, res, self.x);
    }

    pub(super) fn cpy(&mut self, bus: &mut Bus, res: &AddressingResult) {
        self.compare(bus, res, self.y);
    }

    // ---- Branches ----
    //
    // Each returns whether the branch was taken; `execute::step` charges
    // the extra cycle(s) since that depends on whether PC actually moved,
    // not on addressing alone.

    fn branch(&mut self, res: &AddressingResult, condition: bool) -> bool {
        if condition {
            self.pc = res.address;
            self.jumped = true;
        }
        condition
    }

    pub(super) fn bcc(&mut self, res: &AddressingResult) -> bool {
        self.branch(res, !self.carry)
    }
    pub(super) fn bcs(&mut self, res: &AddressingResult) -> bool {
        self.branch(res, self.carry)
    }
    pub(super) fn beq(&mut self, res: &AddressingResult) -> bool {
        self.branch(res, self.zero)
    }
    pub(super) fn bmi(&mut self, res: &AddressingResult) -> bool {
        self.branch(res, self.negative)
    }
    pub(super) fn bne(&mut self, res: &AddressingResult) -> bool {
        self.branch(res, !self.zero)
    }
    pub(super) fn bpl(&mut self, res: &AddressingResult) -> bool {
        self.branch(res, !self.negative)
    }
    pub(super) fn bvc(&mut self, res: &AddressingResult) -> bool {
        self.branch(res, !self.overflow)
    }
    pub(super) fn bvs(&mut self, res: &AddressingResult) -> bool {
        self.branch(res, self.overflow)
    }

    // ---- Jumps/subroutines ----

    pub(super) fn jmp(&mut self, res: &AddressingResult) {
        self.pc = res.address;
        self.jumped = true;
    }

    pub(super) fn jsr(&mut self, bus: &mut Bus, res: &AddressingResult) {
        let return_addr = self.pc.wrapping_sub(1);
        self.stack_push_u16(bus, return_addr);
        self.pc = res.address;
        self.jumped = true;
    }

    pub(super) fn rts(&mut self, bus: &mut Bus) {
        let addr = self.stack_pop_u16(bus);
        self.pc = addr.wrapping_add(1);
        self.jumped = true;
    }

    pub(super) fn rti(&mut self, bus: &mut Bus) {
        let status = self.stack_pop(bus);
        self.set_status_byte(status);
        self.pc = self.stack_pop_u16(bus);
        self.jumped = true;
    }

    // ---- Stack ----

    pub(super) fn pha(&mut self, bus: &mut Bus) {
        self.stack_push(bus, self.a);
    }

    pub(super) fn pla(&mut self, bus: &mut Bus) {
        self.a = self.stack_pop(bus);
        self.update_zero_and_negative_flags(self.a);
    }

    /// PHP always pushes with B set and bit 5 set, per hardware.
    pub(super) fn php(&mut self, bus: &mut Bus) {
        let status = self.status_byte() | super::flags::BREAK;
        self.stack_push(bus, status);
    }

    pub(super) fn plp(&mut self, bus: &mut Bus) {
        let status = self.stack_pop(bus);
        self.set_status_byte(status);
        self.break_flag = false;
    }

    pub(super) fn txs(&mut self) {
        self.sp = self.x;
    }

    pub(super) fn tsx(&mut self) {
        self.x = self.sp;
        self.update_zero_and_negative_flags(self.x);
    }

    // ---- Transfers ----

    pub(super) fn tax(&mut self) {
        self.x = self.a;
        self.update_zero_and_negative_flags(self.x);
    }

    pub(super) fn tay(&mut self) {
        self.y = self.a;
        self.update_zero_and_negative_flags(self.y);
    }

    pub(super) fn txa(&mut self) {
        self.a = self.x;
        self.update_zero_and_negative_flags(self.a);
    }

    pub(super) fn tya(&mut self) {
        self.a = self.y;
        self.update_zero_and_negative_flags(self.a);
    }

    // ---- Flags ----

    pub(super) fn clc(&mut self) {
        self.carry = false;
    }
    pub(super) fn cld(&mut self) {
        self.decimal = false;
    }
    pub(super) fn cli(&mut self) {
        self.interrupt_disable = false;
    }
    pub(super) fn clv(&mut self) {
        self.overflow = false;
    }
    pub(super) fn sec(&mut self) {
        self.carry = true;
    }
    pub(super) fn sed(&mut self) {
        self.decimal = true;
    }
    pub(super) fn sei(&mut self) {
        self.interrupt_disable = true;
    }

    // ---- Miscellaneous ----

    pub(super) fn nop(&mut self) {}

    /// Software interrupt: pushes PC+2 (already advanced past the padding
    /// byte by the time this runs) and status with B set, then jumps
    /// through the IRQ/BRK vector.
    pub(super) fn brk(&mut self, bus: &mut Bus) {
        self.pc = self.pc.wrapping_add(1);
        self.stack_push_u16(bus, self.pc);
        let status = self.status_byte() | super::flags::BREAK;
        self.stack_push(bus, status);
        self.interrupt_disable = true;
        self.pc = bus.read_u16(super::vectors::IRQ);
        self.jumped = true;
    }

    /// Opcode byte is a true jam or an undocumented-but-timed instruction;
    /// no side effect on CPU state beyond advancing past it (already done
    /// by the addressing resolution). Records the mnemonic to the trace
    /// logger so a ROM that hits one of these leaves a trail.
    pub(super) fn illegal(&mut self, mnemonic: Mnemonic) {
        self.logger.log_message(
            LogLevel::Debug,
            format!("unimplemented opcode: {}", mnemonic.as_str()),
        );
    }
}
