// Internal VRAM access: nametable/palette mirroring and the pattern-table
// passthrough to cartridge CHR memory.

use super::constants::NAMETABLE_SIZE;
use super::Ppu;
use crate::cartridge::{Cartridge, Mirroring};

impl Ppu {
    /// Map a nametable address ($2000-$2FFF, base already stripped to
    /// 0-0xFFF) onto one of the two physical 1KB nametables according to
    /// the cartridge's mirroring mode.
    pub(super) fn mirror_nametable_addr(&self, addr: u16) -> usize {
        let addr = (addr & 0x0FFF) as usize;
        let table = addr / NAMETABLE_SIZE;
        let offset = addr % NAMETABLE_SIZE;

        let physical = match self.mirroring {
            Mirroring::Horizontal => match table {
                0 | 1 => 0,
                _ => 1,
            },
            Mirroring::Vertical => match table {
                0 | 2 => 0,
                _ => 1,
            },
        };

        physical * NAMETABLE_SIZE + offset
    }

    /// Map a palette address onto the 32-entry palette RAM, folding the
    /// sprite-palette-0 mirrors ($3F10/$3F14/$3F18/$3F1C) onto their
    /// background-palette counterparts.
    pub(super) fn mirror_palette_addr(&self, addr: u16) -> usize {
        let addr = (addr & 0x001F) as usize;
        if addr >= 16 && addr % 4 == 0 {
            addr - 16
        } else {
            addr
        }
    }

    /// Read a byte from the PPU's 14-bit address space: pattern tables via
    /// the cartridge, nametables (with mirroring), or palette RAM.
    pub(super) fn read_vram(&self, addr: u16, cartridge: Option<&Cartridge>) -> u8 {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => cartridge.map_or(0, |c| c.ppu_read(addr)),
            0x2000..=0x2FFF => self.nametables[self.mirror_nametable_addr(addr)],
            0x3000..=0x3EFF => self.nametables[self.mirror_nametable_addr(addr - 0x1000)],
            0x3F00..=0x3FFF => self.palette[self.mirror_palette_addr(addr)],
            _ => unreachable!(),
        }
    }

    /// Write a byte into the PPU's 14-bit address space.
    pub(super) fn write_vram(&mut self, addr: u16, data: u8, cartridge: Option<&mut Cartridge>) {
        let addr = addr & 0x3FFF;
        match addr {
            0x0000..=0x1FFF => {
                if let Some(c) = cartridge {
                    c.ppu_write(addr, data);
                }
            }
            0x2000..=0x2FFF => {
                let index = self.mirror_nametable_addr(addr);
                self.nametables[index] = data;
            }
            0x3000..=0x3EFF => {
                let index = self.mirror_nametable_addr(addr - 0x1000);
                self.nametables[index] = data;
            }
            0x3F00..=0x3FFF => {
                let index = self.mirror_palette_addr(addr);
                self.palette[index] = data;
            }
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Ppu;
    use crate::cartridge::Mirroring;

    #[test]
    fn vertical_mirroring_maps_2000_and_2800_together() {
        let mut ppu = Ppu::new();
        ppu.mirroring = Mirroring::Vertical;
        ppu.write_vram(0x2000, 0x55, None);
        assert_eq!(ppu.read_vram(0x2800, None), 0x55);
        assert_eq!(ppu.read_vram(0x2400, None), 0x00);
    }

    #[test]
    fn horizontal_mirroring_maps_2000_and_2400_together() {
        let mut ppu = Ppu::new();
        ppu.mirroring = Mirroring::Horizontal;
        ppu.write_vram(0x2000, 0x77, None);
        assert_eq!(ppu.read_vram(0x2400, None), 0x77);
        assert_eq!(ppu.read_vram(0x2800, None), 0x00);
    }

    #[test]
    fn nametable_mirror_region_3000_reads_2000() {
        let mut ppu = Ppu::new();
        ppu.mirroring = Mirroring::Horizontal;
        ppu.write_vram(0x2005, 0x99, None);
        assert_eq!(ppu.read_vram(0x3005, None), 0x99);
    }

    #[test]
    fn palette_mirror_3f10_aliases_3f00() {
        let mut ppu = Ppu::new();
        ppu.write_vram(0x3F00, 0x11, None);
        assert_eq!(ppu.read_vram(0x3F10, None), 0x11);
        ppu.write_vram(0x3F10, 0x22, None);
        assert_eq!(ppu.read_vram(0x3F00, None), 0x22);
    }

    #[test]
    fn palette_entry_one_is_not_mirrored() {
        let mut ppu = Ppu::new();
        ppu.write_vram(0x3F01, 0x33, None);
        ppu.write_vram(0x3F11, 0x44, None);
        assert_eq!(ppu.read_vram(0x3F01, None), 0x33);
        assert_eq!(ppu.read_vram(0x3F11, None), 0x44);
    }
}
