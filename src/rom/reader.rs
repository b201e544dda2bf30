use crate::error::{Error, FormatError, Result};
use crate::rom::model::*;
use log::{debug, info, warn};
use nom::{
    IResult,
    bits::{
        bits,
        streaming::take as take_bits,
    },
    bytes::complete::{
        tag,
        take,
    },
    combinator::{
        map,
        map_opt,
    },
    number::complete::be_u8,
    sequence::pair,
};
use std::{fs, path::Path};

pub const KILOBYTE_SIZE: usize = 1024;
pub const HEADER_SIZE: usize = 16;
pub const TRAINER_SIZE: usize = 512;
pub const PRG_ROM_PAGE_SIZE: usize = 16 * KILOBYTE_SIZE;
pub const CHR_ROM_PAGE_SIZE: usize = 8 * KILOBYTE_SIZE;
pub const PRG_RAM_PAGE_SIZE: usize = 8 * KILOBYTE_SIZE;

const INES_MAGIC: &[u8] = b"NES\x1A";

bitflags! {
    struct Flags6: u8 {
        const VERTICAL_MIRRORING = 1 as u8;
        const BATTERY_BACKED_RAM = (1 << 1) as u8;
        const TRAINER_EXISTS = (1 << 2) as u8;
        const FOUR_SCREEN_MIRRORING = (1 << 3) as u8;
    }
}

bitflags! {
    struct Flags7: u8 {
        const VS_UNISYSTEM = 1 as u8;
        const PLAYCHOICE_10 = (1 << 1) as u8;
        // Bits 2..3 identify the header format. 0b10 means NES 2.0.
        const FORMAT_LO = (1 << 2) as u8;
        const FORMAT_HI = (1 << 3) as u8;
    }
}

impl Flags7 {
    fn is_ines2(self) -> bool {
        self & (Flags7::FORMAT_LO | Flags7::FORMAT_HI) == Flags7::FORMAT_HI
    }
}

bitflags! {
    struct Flags9: u8 {
        const PAL = 1 as u8;
    }
}

/// Split a flags byte into its high nibble (a piece of the mapper number) and its low nibble,
/// interpreted as a set of flags.
fn parse_flag_bits<T>(
    input: &[u8],
    from_bits_fn: fn(u8) -> Option<T>,
) -> IResult<&[u8], (u8, T)> {
    bits(pair(
        take_bits::<_, _, _, (_, _)>(4usize),
        map_opt(take_bits::<_, _, _, (_, _)>(4usize), from_bits_fn)
    ))(input)
}

fn parse_ines_header(input: &[u8]) -> IResult<&[u8], INESHeader> {
    let (i, _) = tag(INES_MAGIC)(input)?;
    let (i, prg_page_count) = be_u8(i)?;
    let (i, chr_page_count) = be_u8(i)?;
    let (i, (mapper_lo, flags6)) = parse_flag_bits(i, Flags6::from_bits)?;
    let (i, (mapper_hi, flags7)) = parse_flag_bits(i, Flags7::from_bits)?;
    let (i, prg_ram_page_count) = be_u8(i)?;
    let (i, flags9) = map(be_u8, Flags9::from_bits_truncate)(i)?; // Only bit 0 matters

    // Bytes 10 - 15 carry nothing for iNES v1. Dumping tools of the era often left signature
    // strings there, so they are skipped rather than checked for zeroes.
    let (i, _) = take(6usize)(i)?;

    Ok((i, INESHeader {
        mirroring: flags6.contains(Flags6::VERTICAL_MIRRORING),
        has_persistent_ram: flags6.contains(Flags6::BATTERY_BACKED_RAM),
        has_trainer: flags6.contains(Flags6::TRAINER_EXISTS),
        four_screen: flags6.contains(Flags6::FOUR_SCREEN_MIRRORING),
        vs_unisystem: flags7.contains(Flags7::VS_UNISYSTEM),
        playchoice10: flags7.contains(Flags7::PLAYCHOICE_10),
        is_ines2: flags7.is_ines2(),
        mapper: (mapper_hi << 4) | mapper_lo,
        prg_rom_size: prg_page_count as usize * PRG_ROM_PAGE_SIZE,
        chr_rom_size: chr_page_count as usize * CHR_ROM_PAGE_SIZE,
        prg_ram_size: prg_ram_page_count as usize * PRG_RAM_PAGE_SIZE,
        tv_system: flags9.contains(Flags9::PAL),
    }))
}

/// Slice `size` bytes off the front of `input`, failing with a truncation error naming `region`.
fn take_region<'a>(
    input: &'a [u8],
    size: usize,
    region: &'static str,
) -> std::result::Result<(&'a [u8], &'a [u8]), FormatError> {
    let result: IResult<&'a [u8], &'a [u8]> = take(size)(input);
    result.map_err(|_| FormatError::Truncated {
        region,
        expected: size,
        found: input.len(),
    })
}

impl Rom {
    /// Read and parse the iNES image at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Rom> {
        let path = path.as_ref();
        let data = fs::read(path)
            .map_err(|err| Error::io(err, format!("failed to read rom {:?}", path)))?;
        Rom::from_bytes(&data)
    }

    /// Parse an in-memory iNES image. The header comes first, then the trainer (if any), the
    /// PRG ROM and the CHR ROM, in that order. Anything past the CHR ROM is ignored.
    pub fn from_bytes(data: &[u8]) -> Result<Rom> {
        if data.len() < HEADER_SIZE {
            return Err(FormatError::HeaderTooShort { found: data.len() }.into());
        }

        debug!("header bytes: {:02X?}", &data[..HEADER_SIZE]);
        // With 16 bytes available, the signature tag is the only part of the header that can
        // fail to parse.
        let (_, header) = parse_ines_header(&data[..HEADER_SIZE]).map_err(|_| {
            let mut found = [0u8; 4];
            found.copy_from_slice(&data[..INES_MAGIC.len()]);
            FormatError::InvalidMagic { found }
        })?;
        debug!("{:?}", header);

        if header.is_ines2 {
            warn!("NES 2.0 header found; reading it as iNES");
        }

        let rest = &data[HEADER_SIZE..];
        let (rest, trainer) = if header.has_trainer {
            take_region(rest, TRAINER_SIZE, "trainer")?
        } else {
            (rest, &rest[..0])
        };
        let (rest, prg_rom) = take_region(rest, header.prg_rom_size, "PRG ROM")?;
        let (rest, chr_rom) = take_region(rest, header.chr_rom_size, "CHR ROM")?;

        if !rest.is_empty() {
            debug!("ignoring {} trailing bytes", rest.len());
        }
        info!(
            "loaded rom: {} bytes PRG ROM, {} bytes CHR ROM, mapper {}",
            prg_rom.len(),
            chr_rom.len(),
            header.mapper
        );

        Ok(Rom {
            header,
            trainer: trainer.to_vec(),
            prg_rom: prg_rom.to_vec(),
            chr_rom: chr_rom.to_vec(),
        })
    }
}
