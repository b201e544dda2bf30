/// Basic structure used to define what sort of data we should expect to pull from the ROM.
/// Sizes are already expanded from page counts into bytes.
#[derive(PartialEq, Debug, Clone)]
pub struct INESHeader {
    // Nametable arrangement bit (0: horizontal, 1: vertical).
    pub mirroring: bool,
    // Whether the cartridge carries battery-backed (persistent) PRG RAM.
    pub has_persistent_ram: bool,
    // Whether a 512-byte trainer precedes the PRG ROM.
    pub has_trainer: bool,
    // Whether the cartridge provides its own four-screen VRAM, overriding `mirroring`.
    pub four_screen: bool,
    // Whether the cartridge is a VS Unisystem board.
    pub vs_unisystem: bool,
    // Whether the cartridge is a PlayChoice-10 board.
    pub playchoice10: bool,
    // Whether bits 2..3 of flags 7 announce the NES 2.0 format.
    pub is_ines2: bool,
    // The mapper number, assembled from the two flag nibbles.
    pub mapper: u8,
    // The size of PRG (Program) ROM, in bytes.
    pub prg_rom_size: usize,
    // The size of CHR (Character) ROM, in bytes.
    pub chr_rom_size: usize,
    // The size of PRG (Program) RAM, in bytes.
    pub prg_ram_size: usize,
    // TV system bit (0: NTSC, 1: PAL).
    pub tv_system: bool,
}

impl INESHeader {
    pub fn mapper_lo(&self) -> u8 {
        self.mapper & 0x0F
    }

    pub fn mapper_hi(&self) -> u8 {
        self.mapper >> 4
    }

    pub fn mirroring_mode(&self) -> NametableMirroringMode {
        if self.four_screen {
            NametableMirroringMode::FourScreen
        } else if self.mirroring {
            NametableMirroringMode::Vertical
        } else {
            NametableMirroringMode::Horizontal
        }
    }

    pub fn system_type(&self) -> SystemType {
        if self.vs_unisystem {
            SystemType::VSUnisystem
        } else if self.playchoice10 {
            SystemType::PlayChoice10
        } else if self.is_ines2 {
            SystemType::NES2
        } else {
            SystemType::NES
        }
    }

    pub fn tv_type(&self) -> TVType {
        if self.tv_system {
            TVType::PAL
        } else {
            TVType::NTSC
        }
    }
}

/// Definition of possible nametable mirror modes.
///
/// Reference: https://wiki.nesdev.com/w/index.php/Mirroring#Nametable_Mirroring
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum NametableMirroringMode {
    Horizontal,
    Vertical,
    FourScreen,
}

/// Definition of possible system types.
///
/// Reference: https://wiki.nesdev.com/w/index.php/INES#Flags_7
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum SystemType {
    NES,
    NES2,
    VSUnisystem,
    PlayChoice10,
}

/// Definition of possible TV systems.
///
/// Reference: https://wiki.nesdev.com/w/index.php/INES#Flags_9
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum TVType {
    NTSC,
    PAL,
}

/// A cartridge image split into its regions. Built once, read-only afterwards.
#[derive(PartialEq, Debug, Clone)]
pub struct Rom {
    pub(crate) header: INESHeader,
    // Empty unless the header announces a trainer, 512 bytes otherwise.
    pub(crate) trainer: Vec<u8>,
    pub(crate) prg_rom: Vec<u8>,
    pub(crate) chr_rom: Vec<u8>,
}

impl Rom {
    pub fn header(&self) -> &INESHeader {
        &self.header
    }

    pub fn trainer(&self) -> &[u8] {
        &self.trainer
    }

    /// The executable program region.
    pub fn prg_rom(&self) -> &[u8] {
        &self.prg_rom
    }

    /// The graphics region. Never executed.
    pub fn chr_rom(&self) -> &[u8] {
        &self.chr_rom
    }
}
