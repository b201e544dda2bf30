use crate::error::{DecodeError, Result};
use crate::model::Instruction;
use crate::rom::Rom;
use crate::source::{ByteSource, InstructionSet, Mos6502};
use log::trace;
use std::fmt;
use std::path::Path;

/// One instruction pulled out of program memory, along with the bytes it was decoded from.
#[derive(PartialEq, Debug, Clone)]
pub struct DecodedInstruction {
    offset: usize,
    instruction: Instruction,
    bytes: Vec<u8>,
    operand: String,
}

impl DecodedInstruction {
    /// Offset of the opcode byte within the program.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn instruction(&self) -> &Instruction {
        &self.instruction
    }

    /// The opcode byte followed by its operand bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Machine code as space separated lowercase hex, e.g. `a9 5`.
    pub fn machine_code(&self) -> String {
        self.bytes
            .iter()
            .map(|byte| format!("{:x}", byte))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The full listing line: offset, machine code, assembly.
    pub fn line(&self) -> String {
        self.to_string()
    }

    /// The instruction in assembly syntax, e.g. `LDA #$5`.
    pub fn assembly(&self) -> String {
        if self.operand.is_empty() {
            self.instruction.name.to_string()
        } else {
            format!("{} {}", self.instruction.name, self.operand)
        }
    }
}

/// Formats as a full listing line: offset, machine code, assembly.
impl fmt::Display for DecodedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04x} {:<9}{}", self.offset, self.machine_code(), self.assembly())
    }
}

/// Decode the single instruction starting at `offset` in `program`.
///
/// This never looks further than the instruction itself, so it can be pointed at any offset,
/// including ones in the middle of data.
pub fn decode<T>(
    program: &[u8],
    offset: usize,
    instruction_set: &T,
) -> std::result::Result<DecodedInstruction, DecodeError>
where
    T: InstructionSet + ?Sized,
{
    let rest = program.get(offset..).unwrap_or(&[]);
    let opcode = match rest.first() {
        Some(&opcode) => opcode,
        None => return Err(DecodeError::EndOfInput { offset }),
    };

    let instruction = instruction_set
        .find(opcode)
        .ok_or(DecodeError::UnknownOpcode { offset, opcode })?;
    let (size, operand) = instruction
        .addr_mode
        .render(rest)
        .ok_or(DecodeError::Truncated {
            offset,
            opcode,
            needed: instruction.size(),
            remaining: rest.len(),
        })?;

    Ok(DecodedInstruction {
        offset,
        instruction: *instruction,
        bytes: rest[..size].to_vec(),
        operand,
    })
}

/// A single line of the listing.
#[derive(PartialEq, Debug, Clone)]
pub enum Line {
    // `* = 0000`, opening the listing.
    Origin,
    Instruction(DecodedInstruction),
    // `.END`, closing the listing at the final offset.
    End(usize),
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Line::Origin => write!(f, "{:>22}", "* = 0000"),
            Line::Instruction(decoded) => write!(f, "{}", decoded),
            Line::End(offset) => write!(f, "{:04x}{:>14}", offset, ".END"),
        }
    }
}

/// The listing produced so far. Lines are only ever appended, in address order.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Disassembly {
    lines: Vec<Line>,
}

impl Disassembly {
    fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Only the decoded instructions, without the origin and end markers.
    pub fn instructions(&self) -> impl Iterator<Item = &DecodedInstruction> {
        self.lines.iter().filter_map(|line| match line {
            Line::Instruction(decoded) => Some(decoded),
            _ => None,
        })
    }

    /// The whole listing, one newline terminated line per entry.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Disassembly {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Walks a program from offset 0, one instruction at a time, building up a listing.
///
/// The walk is over once the bytes left are fewer than the instruction at the cursor needs.
/// Bytes that are not a known opcode are stepped over one at a time, so every program is
/// eventually exhausted.
pub struct Disassembler<S, T = Mos6502> {
    source: S,
    instruction_set: T,
    // Offset of the next byte to decode. Only ever moves forward.
    offset: usize,
    disassembly: Disassembly,
}

impl Disassembler<Rom> {
    /// Load the iNES image at `path` and prepare to disassemble its PRG ROM.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Disassembler::new(Rom::open(path)?))
    }
}

impl<S: ByteSource> Disassembler<S> {
    pub fn new(source: S) -> Self {
        Disassembler::with_instruction_set(source, Mos6502)
    }
}

impl<S: ByteSource, T: InstructionSet> Disassembler<S, T> {
    pub fn with_instruction_set(source: S, instruction_set: T) -> Self {
        Disassembler {
            source,
            instruction_set,
            offset: 0,
            disassembly: Disassembly::default(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether the walk is over. Unknown bytes never end it, since skipping one always fits.
    pub fn is_exhausted(&self) -> bool {
        let program = self.source.bytes();
        let opcode = match program.get(self.offset) {
            Some(&opcode) => opcode,
            None => return true,
        };

        match self.instruction_set.find(opcode) {
            Some(instruction) => program.len() - self.offset < instruction.size(),
            None => false,
        }
    }

    /// Decode the instruction at the cursor and move past it. Returns the number of bytes
    /// consumed: the instruction's size, 1 for a skipped unknown byte, or 0 once exhausted.
    pub fn step(&mut self) -> usize {
        if self.is_exhausted() {
            return 0;
        }

        if self.offset == 0 {
            self.disassembly.push(Line::Origin);
        }

        let consumed = match decode(self.source.bytes(), self.offset, &self.instruction_set) {
            Ok(decoded) => {
                trace!("{}", decoded);
                let size = decoded.size();
                self.disassembly.push(Line::Instruction(decoded));
                size
            }
            Err(err) => {
                trace!("skipping byte: {}", err);
                1
            }
        };
        self.offset += consumed;

        if self.is_exhausted() {
            self.disassembly.push(Line::End(self.offset));
        }

        consumed
    }

    /// Step until exhausted.
    pub fn run(&mut self) -> &Disassembly {
        while self.step() > 0 {}
        &self.disassembly
    }

    pub fn disassembly(&self) -> &Disassembly {
        &self.disassembly
    }

    pub fn into_disassembly(self) -> Disassembly {
        self.disassembly
    }

    /// Consume the disassembler, keeping only the listing text.
    pub fn into_text(self) -> String {
        self.disassembly.text()
    }

    /// The listing accumulated so far.
    pub fn text(&self) -> String {
        self.disassembly.text()
    }
}
