// Instruction dispatch: fetch an opcode, resolve its addressing mode,
// execute its mnemonic, and charge cycles.

use super::addressing::AddressingResult;
use super::opcodes::{self, Mnemonic};
use super::Cpu;
use crate::bus::Bus;

impl Cpu {
    /// Run exactly one instruction (or burn one stalled cycle if an OAM
    /// DMA transfer is still in flight) and return the cycle count spent.
    pub fn step(&mut self, bus: &mut Bus) -> u8 {
        self.stall += bus.take_dma_stall();
        if self.stall > 0 {
            self.stall -= 1;
            self.cycles = self.cycles.wrapping_add(1);
            return 1;
        }

        let opcode = bus.read(self.pc);
        let entry = opcodes::table()[opcode as usize];
        self.pc = self.pc.wrapping_add(1);

        self.jumped = false;
        let res = self.resolve(entry.mode, bus);
        self.page_crossed = res.page_crossed;

        let branch_taken = self.execute(entry.mnemonic, &res, bus);

        let mut cycles = entry.base_cycles;
        if entry.page_penalty && res.page_crossed {
            cycles += 1;
        }
        if entry.mnemonic.is_branch() && branch_taken {
            cycles += 1;
            if res.page_crossed {
                cycles += 1;
            }
        }

        self.cycles = self.cycles.wrapping_add(cycles as u64);
        cycles
    }

    fn execute(&mut self, mnemonic: Mnemonic, res: &AddressingResult, bus: &mut Bus) -> bool {
        use Mnemonic::*;
        match mnemonic {
            Lda => self.lda(bus, res),
            Ldx => self.ldx(bus, res),
            Ldy => self.ldy(bus, res),
            Sta => self.sta(bus, res),
            Stx => self.stx(bus, res),
            Sty => self.sty(bus, res),

            Adc => self.adc(bus, res),
            Sbc => self.sbc(bus, res),
            Inc => self.inc(bus, res),
            Inx => self.inx(),
            Iny => self.iny(),
            Dec => self.dec(bus, res),
            Dex => self.dex(),
            Dey => self.dey(),

            And => self.and(bus, res),
            Ora => self.ora(bus, res),
            Eor => self.eor(bus, res),
            Bit => self.bit(bus, res),

            Asl => self.asl(bus, res),
            Lsr => self.lsr(bus, res),
            Rol => self.rol(bus, res),
            Ror => self.ror(bus, res),

            Cmp => self.cmp(bus, res),
            Cpx => self.cpx(bus, res),
            Cpy => self.cpy(bus, res),

            Bcc => return self.bcc(res),
            Bcs => return self.bcs(res),
            Beq => return self.beq(res),
            Bmi => return self.bmi(res),
            Bne => return self.bne(res),
            Bpl => return self.bpl(res),
            Bvc => return self.bvc(res),
            Bvs => return self.bvs(res),

            Jmp => self.jmp(res),
            Jsr => self.jsr(bus, res),
            Rts => self.rts(bus),
            Rti => self.rti(bus),

            Pha => self.pha(bus),
            Pla => self.pla(bus),
            Php => self.php(bus),
            Plp => self.plp(bus),
            Txs => self.txs(),
            Tsx => self.tsx(),

            Tax => self.tax(),
            Tay => self.tay(),
            Txa => self.txa(),
            Tya => self.tya(),

            Clc => self.clc(),
            Cld => self.cld(),
            Cli => self.cli(),
            Clv => self.clv(),
            Sec => self.sec(),
            Sed => self.sed(),
            Sei => self.sei(),

            Brk => self.brk(bus),
            Nop => self.nop(),

            Kil | Slo | Rla | Sre | Rra | Sax | Lax | Dcp | Isc | Anc | Alr | Arr | Axs | Xaa
            | Ahx | Tas | Shx | Shy | Las | Illegal => self.illegal(mnemonic),
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(bytes: &[u8]) -> Bus {
        let mut bus = Bus::new();
        for (i, &byte) in bytes.iter().enumerate() {
            bus.write(0x8000 + i as u16, byte);
        }
        bus.write(0xFFFC, 0x00);
        bus.write(0xFFFD, 0x80);
        bus
    }

    #[test]
    fn lda_immediate_loads_accumulator_and_costs_two_cycles() {
        let mut bus = program(&[0xA9, 0x42]);
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);
        let cycles = cpu.step(&mut bus);
        assert_eq!(cpu.a, 0x42);
        assert_eq!(cycles, 2);
        assert_eq!(cpu.pc, 0x8002);
    }

    #[test]
    fn taken_branch_costs_an_extra_cycle() {
        // LDA #0 then BEQ +2 (zero flag set, branch taken, no page cross)
        let mut bus = program(&[0xA9, 0x00, 0xF0, 0x02]);
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);
        cpu.step(&mut bus);
        let cycles = cpu.step(&mut bus);
        assert_eq!(cycles, 3);
        assert_eq!(cpu.pc, 0x8006);
    }

    #[test]
    fn absolute_x_page_crossing_adds_a_cycle() {
        // LDX #$FF ; LDA $8000,X reads past $80FF into $8100 (page cross)
        let mut bus = program(&[0xA2, 0xFF, 0xBD, 0x00, 0x80]);
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);
        cpu.step(&mut bus);
        let cycles = cpu.step(&mut bus);
        assert_eq!(cycles, 5);
    }

    #[test]
    fn dma_stall_is_drained_before_fetching_next_opcode() {
        let mut bus = program(&[0xEA, 0xEA]);
        bus.write(0x4014, 0x00); // schedules 512 cycles of stall
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);
        let cycles = cpu.step(&mut bus);
        assert_eq!(cycles, 1);
        assert_eq!(cpu.pc, 0x8000); // opcode not fetched yet
    }

    #[test]
    fn illegal_opcode_advances_one_byte_without_panicking() {
        let mut bus = program(&[0x02, 0xEA]);
        let mut cpu = Cpu::new();
        cpu.reset(&mut bus);
        let cycles = cpu.step(&mut bus);
        assert_eq!(cycles, 2);
        assert_eq!(cpu.pc, 0x8001);
    }
}
