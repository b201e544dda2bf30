use lazy_static::lazy_static;

/// A basic structure of data defining an instruction understood by the 6502. Each instruction is
/// identified in program memory by a single opcode byte, which fixes both the operation and the
/// addressing mode used to encode its operand.
///
/// There are 56 operations and 13 addressing modes, for 151 documented opcodes. The remaining
/// byte values are undocumented and are not listed here.
///
/// For reference: http://www.obelisk.me.uk/6502/reference.html
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Instruction {
    // The opcode byte identifying this instruction
    pub opcode: u8,
    // The name of the instruction (3 alphabetic characters, all upper-case)
    pub name: &'static str,
    // How the operand bytes following the opcode are encoded
    pub addr_mode: AddressingMode,
    // The base number of cycles required for executing this instruction
    pub cycles: u8,
    // Whether the cycle count can grow at runtime, and why
    pub cycle_exception: CycleException,
}

impl Instruction {
    /// Total size of the instruction in bytes, opcode included.
    pub fn size(&self) -> usize {
        self.addr_mode.size()
    }
}

/// The defined and supported addressing modes. Each of these determines how many operand bytes
/// follow the opcode and how they are written out in assembly.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum AddressingMode {
    ACC,
    ABS,
    ABX,
    ABY,
    IMM,
    IMP,
    IND,
    IDX,
    IDY,
    REL,
    ZPG,
    ZPX,
    ZPY,
}

impl AddressingMode {
    /// Number of bytes an instruction in this mode occupies, including the opcode byte.
    pub fn size(&self) -> usize {
        match self {
            AddressingMode::ACC | AddressingMode::IMP => 1,
            AddressingMode::IMM
            | AddressingMode::ZPG
            | AddressingMode::ZPX
            | AddressingMode::ZPY
            | AddressingMode::REL
            | AddressingMode::IDX
            | AddressingMode::IDY => 2,
            AddressingMode::ABS
            | AddressingMode::ABX
            | AddressingMode::ABY
            | AddressingMode::IND => 3,
        }
    }

    /// Render the operand of an instruction in this mode. `bytes` starts at the opcode and must
    /// hold at least `size()` bytes; the size and the operand text are returned together.
    ///
    /// Values are written in lowercase hex at their natural width, so `LDA #$05` reads `#$5`.
    /// Relative branches print the raw offset byte rather than the resolved target.
    ///
    /// e.g.,
    /// ```
    /// use nesdis::model::AddressingMode;
    ///
    /// let (size, operand) = AddressingMode::ABX.render(&[0xBD, 0x00, 0x80]).unwrap();
    /// assert_eq!((size, operand.as_str()), (3, "$8000,X"));
    /// assert_eq!(AddressingMode::IMP.render(&[0xEA]), Some((1, String::new())));
    /// ```
    pub fn render(&self, bytes: &[u8]) -> Option<(usize, String)> {
        let size = self.size();
        if bytes.len() < size {
            return None;
        }

        let operand = match self {
            AddressingMode::ACC => "A".to_string(),
            AddressingMode::IMP => String::new(),
            AddressingMode::IMM => format!("#${:x}", bytes[1]),
            AddressingMode::ZPG | AddressingMode::REL => format!("${:x}", bytes[1]),
            AddressingMode::ZPX => format!("${:x},X", bytes[1]),
            AddressingMode::ZPY => format!("${:x},Y", bytes[1]),
            AddressingMode::IDX => format!("(${:x},X)", bytes[1]),
            AddressingMode::IDY => format!("(${:x},Y)", bytes[1]),
            AddressingMode::ABS => format!("${:x}", little_endian(bytes[1], bytes[2])),
            AddressingMode::ABX => format!("${:x},X", little_endian(bytes[1], bytes[2])),
            AddressingMode::ABY => format!("${:x},Y", little_endian(bytes[1], bytes[2])),
            // Only the low pointer byte is printed, although the high byte is consumed.
            AddressingMode::IND => format!("(${:x})", bytes[1]),
        };

        Some((size, operand))
    }
}

/// Combine two operand bytes, low byte first, into a 16-bit value.
pub fn little_endian(lo: u8, hi: u8) -> u16 {
    (hi as u16) << 8 | lo as u16
}

/// Marks instructions whose cycle cost can exceed `cycles` at runtime.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum CycleException {
    None,
    // One extra cycle when the indexed address crosses a page boundary.
    CrossPage,
    // One extra cycle when the branch is taken, two if it lands on another page.
    Branch,
}

/// Look up the instruction for an opcode byte. Returns the first matching table entry, or
/// `None` for undocumented opcodes.
pub fn find(opcode: u8) -> Option<&'static Instruction> {
    INSTRUCTIONS.iter().find(|instruction| instruction.opcode == opcode)
}

lazy_static! {
    /// Static catalogue of the documented 6502 instructions, ordered by opcode.
    /// Each entry carries:
    /// * Its opcode byte and mnemonic
    /// * Its addressing mode
    /// * The number of cycles that it consumes, and when that number can grow
    pub static ref INSTRUCTIONS: Vec<Instruction> = vec![
        Instruction { opcode: 0x00, name: "BRK", addr_mode: AddressingMode::IMP, cycles: 7, cycle_exception: CycleException::None },
        Instruction { opcode: 0x01, name: "ORA", addr_mode: AddressingMode::IDX, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0x05, name: "ORA", addr_mode: AddressingMode::ZPG, cycles: 3, cycle_exception: CycleException::None },
        Instruction { opcode: 0x06, name: "ASL", addr_mode: AddressingMode::ZPG, cycles: 5, cycle_exception: CycleException::None },
        Instruction { opcode: 0x08, name: "PHP", addr_mode: AddressingMode::IMP, cycles: 3, cycle_exception: CycleException::None },
        Instruction { opcode: 0x09, name: "ORA", addr_mode: AddressingMode::IMM, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0x0A, name: "ASL", addr_mode: AddressingMode::ACC, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0x0D, name: "ORA", addr_mode: AddressingMode::ABS, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0x0E, name: "ASL", addr_mode: AddressingMode::ABS, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0x10, name: "BPL", addr_mode: AddressingMode::REL, cycles: 2, cycle_exception: CycleException::Branch },
        Instruction { opcode: 0x11, name: "ORA", addr_mode: AddressingMode::IDY, cycles: 5, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0x15, name: "ORA", addr_mode: AddressingMode::ZPX, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0x16, name: "ASL", addr_mode: AddressingMode::ZPX, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0x18, name: "CLC", addr_mode: AddressingMode::IMP, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0x19, name: "ORA", addr_mode: AddressingMode::ABY, cycles: 4, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0x1D, name: "ORA", addr_mode: AddressingMode::ABX, cycles: 4, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0x1E, name: "ASL", addr_mode: AddressingMode::ABX, cycles: 7, cycle_exception: CycleException::None },
        Instruction { opcode: 0x20, name: "JSR", addr_mode: AddressingMode::ABS, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0x21, name: "AND", addr_mode: AddressingMode::IDX, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0x24, name: "BIT", addr_mode: AddressingMode::ZPG, cycles: 3, cycle_exception: CycleException::None },
        Instruction { opcode: 0x25, name: "AND", addr_mode: AddressingMode::ZPG, cycles: 3, cycle_exception: CycleException::None },
        Instruction { opcode: 0x26, name: "ROL", addr_mode: AddressingMode::ZPG, cycles: 5, cycle_exception: CycleException::None },
        Instruction { opcode: 0x28, name: "PLP", addr_mode: AddressingMode::IMP, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0x29, name: "AND", addr_mode: AddressingMode::IMM, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0x2A, name: "ROL", addr_mode: AddressingMode::ACC, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0x2C, name: "BIT", addr_mode: AddressingMode::ABS, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0x2D, name: "AND", addr_mode: AddressingMode::ABS, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0x2E, name: "ROL", addr_mode: AddressingMode::ABS, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0x30, name: "BMI", addr_mode: AddressingMode::REL, cycles: 2, cycle_exception: CycleException::Branch },
        Instruction { opcode: 0x31, name: "AND", addr_mode: AddressingMode::IDY, cycles: 5, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0x35, name: "AND", addr_mode: AddressingMode::ZPX, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0x36, name: "ROL", addr_mode: AddressingMode::ZPX, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0x38, name: "SEC", addr_mode: AddressingMode::IMP, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0x39, name: "AND", addr_mode: AddressingMode::ABY, cycles: 4, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0x3D, name: "AND", addr_mode: AddressingMode::ABX, cycles: 4, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0x3E, name: "ROL", addr_mode: AddressingMode::ABX, cycles: 7, cycle_exception: CycleException::None },
        Instruction { opcode: 0x40, name: "RTI", addr_mode: AddressingMode::IMP, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0x41, name: "EOR", addr_mode: AddressingMode::IDX, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0x45, name: "EOR", addr_mode: AddressingMode::ZPG, cycles: 3, cycle_exception: CycleException::None },
        Instruction { opcode: 0x46, name: "LSR", addr_mode: AddressingMode::ZPG, cycles: 5, cycle_exception: CycleException::None },
        Instruction { opcode: 0x48, name: "PHA", addr_mode: AddressingMode::IMP, cycles: 3, cycle_exception: CycleException::None },
        Instruction { opcode: 0x49, name: "EOR", addr_mode: AddressingMode::IMM, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0x4A, name: "LSR", addr_mode: AddressingMode::ACC, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0x4C, name: "JMP", addr_mode: AddressingMode::ABS, cycles: 3, cycle_exception: CycleException::None },
        Instruction { opcode: 0x4D, name: "EOR", addr_mode: AddressingMode::ABS, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0x4E, name: "LSR", addr_mode: AddressingMode::ABS, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0x50, name: "BVC", addr_mode: AddressingMode::REL, cycles: 2, cycle_exception: CycleException::Branch },
        Instruction { opcode: 0x51, name: "EOR", addr_mode: AddressingMode::IDY, cycles: 5, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0x55, name: "EOR", addr_mode: AddressingMode::ZPX, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0x56, name: "LSR", addr_mode: AddressingMode::ZPX, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0x58, name: "CLI", addr_mode: AddressingMode::IMP, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0x59, name: "EOR", addr_mode: AddressingMode::ABY, cycles: 4, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0x5D, name: "EOR", addr_mode: AddressingMode::ABX, cycles: 4, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0x5E, name: "LSR", addr_mode: AddressingMode::ABX, cycles: 7, cycle_exception: CycleException::None },
        Instruction { opcode: 0x60, name: "RTS", addr_mode: AddressingMode::IMP, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0x61, name: "ADC", addr_mode: AddressingMode::IDX, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0x65, name: "ADC", addr_mode: AddressingMode::ZPG, cycles: 3, cycle_exception: CycleException::None },
        Instruction { opcode: 0x66, name: "ROR", addr_mode: AddressingMode::ZPG, cycles: 5, cycle_exception: CycleException::None },
        Instruction { opcode: 0x68, name: "PLA", addr_mode: AddressingMode::IMP, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0x69, name: "ADC", addr_mode: AddressingMode::IMM, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0x6A, name: "ROR", addr_mode: AddressingMode::ACC, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0x6C, name: "JMP", addr_mode: AddressingMode::IND, cycles: 5, cycle_exception: CycleException::None },
        Instruction { opcode: 0x6D, name: "ADC", addr_mode: AddressingMode::ABS, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0x6E, name: "ROR", addr_mode: AddressingMode::ABS, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0x70, name: "BVS", addr_mode: AddressingMode::REL, cycles: 2, cycle_exception: CycleException::Branch },
        Instruction { opcode: 0x71, name: "ADC", addr_mode: AddressingMode::IDY, cycles: 5, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0x75, name: "ADC", addr_mode: AddressingMode::ZPX, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0x76, name: "ROR", addr_mode: AddressingMode::ZPX, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0x78, name: "SEI", addr_mode: AddressingMode::IMP, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0x79, name: "ADC", addr_mode: AddressingMode::ABY, cycles: 4, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0x7D, name: "ADC", addr_mode: AddressingMode::ABX, cycles: 4, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0x7E, name: "ROR", addr_mode: AddressingMode::ABX, cycles: 7, cycle_exception: CycleException::None },
        Instruction { opcode: 0x81, name: "STA", addr_mode: AddressingMode::IDX, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0x84, name: "STY", addr_mode: AddressingMode::ZPG, cycles: 3, cycle_exception: CycleException::None },
        Instruction { opcode: 0x85, name: "STA", addr_mode: AddressingMode::ZPG, cycles: 3, cycle_exception: CycleException::None },
        Instruction { opcode: 0x86, name: "STX", addr_mode: AddressingMode::ZPG, cycles: 3, cycle_exception: CycleException::None },
        Instruction { opcode: 0x88, name: "DEY", addr_mode: AddressingMode::IMP, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0x8A, name: "TXA", addr_mode: AddressingMode::IMP, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0x8C, name: "STY", addr_mode: AddressingMode::ABS, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0x8D, name: "STA", addr_mode: AddressingMode::ABS, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0x8E, name: "STX", addr_mode: AddressingMode::ABS, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0x90, name: "BCC", addr_mode: AddressingMode::REL, cycles: 2, cycle_exception: CycleException::Branch },
        Instruction { opcode: 0x91, name: "STA", addr_mode: AddressingMode::IDY, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0x94, name: "STY", addr_mode: AddressingMode::ZPX, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0x95, name: "STA", addr_mode: AddressingMode::ZPX, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0x96, name: "STX", addr_mode: AddressingMode::ZPY, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0x98, name: "TYA", addr_mode: AddressingMode::IMP, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0x99, name: "STA", addr_mode: AddressingMode::ABY, cycles: 5, cycle_exception: CycleException::None },
        Instruction { opcode: 0x9A, name: "TXS", addr_mode: AddressingMode::IMP, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0x9D, name: "STA", addr_mode: AddressingMode::ABX, cycles: 5, cycle_exception: CycleException::None },
        Instruction { opcode: 0xA0, name: "LDY", addr_mode: AddressingMode::IMM, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0xA1, name: "LDA", addr_mode: AddressingMode::IDX, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0xA2, name: "LDX", addr_mode: AddressingMode::IMM, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0xA4, name: "LDY", addr_mode: AddressingMode::ZPG, cycles: 3, cycle_exception: CycleException::None },
        Instruction { opcode: 0xA5, name: "LDA", addr_mode: AddressingMode::ZPG, cycles: 3, cycle_exception: CycleException::None },
        Instruction { opcode: 0xA6, name: "LDX", addr_mode: AddressingMode::ZPG, cycles: 3, cycle_exception: CycleException::None },
        Instruction { opcode: 0xA8, name: "TAY", addr_mode: AddressingMode::IMP, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0xA9, name: "LDA", addr_mode: AddressingMode::IMM, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0xAA, name: "TAX", addr_mode: AddressingMode::IMP, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0xAC, name: "LDY", addr_mode: AddressingMode::ABS, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0xAD, name: "LDA", addr_mode: AddressingMode::ABS, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0xAE, name: "LDX", addr_mode: AddressingMode::ABS, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0xB0, name: "BCS", addr_mode: AddressingMode::REL, cycles: 2, cycle_exception: CycleException::Branch },
        Instruction { opcode: 0xB1, name: "LDA", addr_mode: AddressingMode::IDY, cycles: 5, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0xB4, name: "LDY", addr_mode: AddressingMode::ZPX, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0xB5, name: "LDA", addr_mode: AddressingMode::ZPX, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0xB6, name: "LDX", addr_mode: AddressingMode::ZPY, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0xB8, name: "CLV", addr_mode: AddressingMode::IMP, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0xB9, name: "LDA", addr_mode: AddressingMode::ABY, cycles: 4, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0xBA, name: "TSX", addr_mode: AddressingMode::IMP, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0xBC, name: "LDY", addr_mode: AddressingMode::ABX, cycles: 4, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0xBD, name: "LDA", addr_mode: AddressingMode::ABX, cycles: 4, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0xBE, name: "LDX", addr_mode: AddressingMode::ABY, cycles: 4, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0xC0, name: "CPY", addr_mode: AddressingMode::IMM, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0xC1, name: "CMP", addr_mode: AddressingMode::IDX, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0xC4, name: "CPY", addr_mode: AddressingMode::ZPG, cycles: 3, cycle_exception: CycleException::None },
        Instruction { opcode: 0xC5, name: "CMP", addr_mode: AddressingMode::ZPG, cycles: 3, cycle_exception: CycleException::None },
        Instruction { opcode: 0xC6, name: "DEC", addr_mode: AddressingMode::ZPG, cycles: 5, cycle_exception: CycleException::None },
        Instruction { opcode: 0xC8, name: "INY", addr_mode: AddressingMode::IMP, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0xC9, name: "CMP", addr_mode: AddressingMode::IMM, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0xCA, name: "DEX", addr_mode: AddressingMode::IMP, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0xCC, name: "CPY", addr_mode: AddressingMode::ABS, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0xCD, name: "CMP", addr_mode: AddressingMode::ABS, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0xCE, name: "DEC", addr_mode: AddressingMode::ABS, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0xD0, name: "BNE", addr_mode: AddressingMode::REL, cycles: 2, cycle_exception: CycleException::Branch },
        Instruction { opcode: 0xD1, name: "CMP", addr_mode: AddressingMode::IDY, cycles: 5, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0xD5, name: "CMP", addr_mode: AddressingMode::ZPX, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0xD6, name: "DEC", addr_mode: AddressingMode::ZPX, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0xD8, name: "CLD", addr_mode: AddressingMode::IMP, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0xD9, name: "CMP", addr_mode: AddressingMode::ABY, cycles: 4, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0xDD, name: "CMP", addr_mode: AddressingMode::ABX, cycles: 4, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0xDE, name: "DEC", addr_mode: AddressingMode::ABX, cycles: 7, cycle_exception: CycleException::None },
        Instruction { opcode: 0xE0, name: "CPX", addr_mode: AddressingMode::IMM, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0xE1, name: "SBC", addr_mode: AddressingMode::IDX, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0xE4, name: "CPX", addr_mode: AddressingMode::ZPG, cycles: 3, cycle_exception: CycleException::None },
        Instruction { opcode: 0xE5, name: "SBC", addr_mode: AddressingMode::ZPG, cycles: 3, cycle_exception: CycleException::None },
        Instruction { opcode: 0xE6, name: "INC", addr_mode: AddressingMode::ZPG, cycles: 5, cycle_exception: CycleException::None },
        Instruction { opcode: 0xE8, name: "INX", addr_mode: AddressingMode::IMP, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0xE9, name: "SBC", addr_mode: AddressingMode::IMM, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0xEA, name: "NOP", addr_mode: AddressingMode::IMP, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0xEC, name: "CPX", addr_mode: AddressingMode::ABS, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0xED, name: "SBC", addr_mode: AddressingMode::ABS, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0xEE, name: "INC", addr_mode: AddressingMode::ABS, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0xF0, name: "BEQ", addr_mode: AddressingMode::REL, cycles: 2, cycle_exception: CycleException::Branch },
        Instruction { opcode: 0xF1, name: "SBC", addr_mode: AddressingMode::IDY, cycles: 5, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0xF5, name: "SBC", addr_mode: AddressingMode::ZPX, cycles: 4, cycle_exception: CycleException::None },
        Instruction { opcode: 0xF6, name: "INC", addr_mode: AddressingMode::ZPX, cycles: 6, cycle_exception: CycleException::None },
        Instruction { opcode: 0xF8, name: "SED", addr_mode: AddressingMode::IMP, cycles: 2, cycle_exception: CycleException::None },
        Instruction { opcode: 0xF9, name: "SBC", addr_mode: AddressingMode::ABY, cycles: 4, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0xFD, name: "SBC", addr_mode: AddressingMode::ABX, cycles: 4, cycle_exception: CycleException::CrossPage },
        Instruction { opcode: 0xFE, name: "INC", addr_mode: AddressingMode::ABX, cycles: 7, cycle_exception: CycleException::None },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use expectest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn table_size() {
        expect!(INSTRUCTIONS.len()).to(be_eq(151));
    }

    #[test]
    fn opcodes_are_unique() {
        let mut seen = HashSet::new();
        for instruction in INSTRUCTIONS.iter() {
            let opcode = instruction.opcode;
            assert!(seen.insert(opcode), "duplicate opcode ${:02X}", opcode);
        }
    }

    #[test]
    fn store_and_compare_indexed_opcodes() {
        // These two pairs are easy to transpose when copying the table by hand.
        let sta_zpx = find(0x95).unwrap();
        let sta_aby = find(0x99).unwrap();
        let cmp_zpx = find(0xD5).unwrap();
        let cmp_aby = find(0xD9).unwrap();

        expect!((sta_zpx.name, sta_zpx.addr_mode)).to(be_eq(("STA", AddressingMode::ZPX)));
        expect!((sta_aby.name, sta_aby.addr_mode)).to(be_eq(("STA", AddressingMode::ABY)));
        expect!((cmp_zpx.name, cmp_zpx.addr_mode)).to(be_eq(("CMP", AddressingMode::ZPX)));
        expect!((cmp_aby.name, cmp_aby.addr_mode)).to(be_eq(("CMP", AddressingMode::ABY)));
    }

    #[test]
    fn find_known_and_unknown() {
        let lda = find(0xA9).unwrap();
        expect!(lda.name).to(be_eq("LDA"));
        expect!(lda.addr_mode).to(be_eq(AddressingMode::IMM));
        expect!(lda.size()).to(be_eq(2));

        expect!(find(0x02)).to(be_none());
        expect!(find(0xFF)).to(be_none());
    }

    #[test]
    fn branches_and_page_crossings() {
        for instruction in INSTRUCTIONS.iter() {
            let is_branch = instruction.addr_mode == AddressingMode::REL;
            expect!(instruction.cycle_exception == CycleException::Branch).to(be_eq(is_branch));
        }
        expect!(find(0xBD).unwrap().cycle_exception).to(be_eq(CycleException::CrossPage));
        expect!(find(0x9D).unwrap().cycle_exception).to(be_eq(CycleException::None));
    }

    #[test]
    fn render_operands() {
        let cases: Vec<(AddressingMode, &[u8], usize, &str)> = vec![
            (AddressingMode::ACC, &[0x0A], 1, "A"),
            (AddressingMode::IMM, &[0xA9, 0x05], 2, "#$5"),
            (AddressingMode::ZPY, &[0xB6, 0x10], 2, "$10,Y"),
            (AddressingMode::REL, &[0xD0, 0xFE], 2, "$fe"),
            (AddressingMode::IDX, &[0xA1, 0x20], 2, "($20,X)"),
            (AddressingMode::IDY, &[0xB1, 0x20], 2, "($20,Y)"),
            (AddressingMode::ABS, &[0x4C, 0x00, 0x80], 3, "$8000"),
            (AddressingMode::ABY, &[0xB9, 0x34, 0x12], 3, "$1234,Y"),
            (AddressingMode::IND, &[0x6C, 0xFC, 0xFF], 3, "($fc)"),
        ];

        for (mode, bytes, size, operand) in cases {
            expect!(mode.render(bytes)).to(be_some().value((size, operand.to_string())));
        }
    }

    #[test]
    fn render_needs_whole_instruction() {
        expect!(AddressingMode::ABS.render(&[0x4C, 0x00])).to(be_none());
        expect!(AddressingMode::IMM.render(&[0xA9])).to(be_none());
    }

    #[test]
    fn little_endian_combine() {
        expect!(little_endian(0x00, 0x80)).to(be_eq(0x8000));
        expect!(little_endian(0xCD, 0xAB)).to(be_eq(0xABCD));
    }
}
