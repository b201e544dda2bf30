use crate::model::{self, Instruction};
use crate::rom::Rom;

/// Read-only program memory for the disassembler to walk. Offsets handed out by the disassembler
/// are indexes into `bytes()`.
pub trait ByteSource {
    fn bytes(&self) -> &[u8];
}

impl ByteSource for [u8] {
    fn bytes(&self) -> &[u8] {
        self
    }
}

impl ByteSource for Vec<u8> {
    fn bytes(&self) -> &[u8] {
        self
    }
}

/// A ROM exposes its PRG ROM. The trainer and CHR ROM are never executed from here.
impl ByteSource for Rom {
    fn bytes(&self) -> &[u8] {
        self.prg_rom()
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &T {
    fn bytes(&self) -> &[u8] {
        (**self).bytes()
    }
}

/// Maps opcode bytes to instruction descriptors.
pub trait InstructionSet {
    /// The descriptor for `opcode`, or `None` if the byte is not a known instruction.
    fn find(&self, opcode: u8) -> Option<&Instruction>;
}

/// The documented instruction set of the MOS 6502, as used by the NES CPU.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mos6502;

impl InstructionSet for Mos6502 {
    fn find(&self, opcode: u8) -> Option<&Instruction> {
        model::find(opcode)
    }
}

/// Any list of descriptors can serve as a table. When an opcode is listed more than once, the
/// first entry wins.
impl InstructionSet for [Instruction] {
    fn find(&self, opcode: u8) -> Option<&Instruction> {
        self.iter().find(|instruction| instruction.opcode == opcode)
    }
}

impl InstructionSet for Vec<Instruction> {
    fn find(&self, opcode: u8) -> Option<&Instruction> {
        self.as_slice().find(opcode)
    }
}

impl<T: InstructionSet + ?Sized> InstructionSet for &T {
    fn find(&self, opcode: u8) -> Option<&Instruction> {
        (**self).find(opcode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AddressingMode, CycleException};
    use expectest::prelude::*;

    fn nop(opcode: u8, name: &'static str) -> Instruction {
        Instruction {
            opcode,
            name,
            addr_mode: AddressingMode::IMP,
            cycles: 2,
            cycle_exception: CycleException::None,
        }
    }

    #[test]
    fn first_listed_entry_wins() {
        let table = vec![nop(0x99, "ONE"), nop(0x99, "TWO")];

        expect!(table.find(0x99).map(|instruction| instruction.name)).to(be_some().value("ONE"));
        expect!(table.find(0x98)).to(be_none());
    }

    #[test]
    fn mos6502_uses_builtin_table() {
        expect!(Mos6502.find(0xEA).map(|instruction| instruction.name)).to(be_some().value("NOP"));
        expect!(Mos6502.find(0x80)).to(be_none());
    }

    #[test]
    fn byte_sources() {
        let program = vec![0xA9, 0x05];

        expect!(program.bytes()).to(be_eq(&[0xA9, 0x05][..]));
        expect!((&program[..]).bytes().len()).to(be_eq(2));
    }
}
