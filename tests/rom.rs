use nesdis::disassembler::Disassembler;
use nesdis::error::{Error, FormatError};
use nesdis::rom::{NametableMirroringMode, Rom, SystemType};

use expectest::prelude::*;
use std::{env, fs, path::PathBuf};

fn header(prg_pages: u8, chr_pages: u8, flags6: u8, flags7: u8) -> Vec<u8> {
    vec![
        0x4E, 0x45, 0x53, 0x1A, // N E S <EOF>
        prg_pages, chr_pages, flags6, flags7,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    ]
}

fn temp_rom(name: &str, data: &[u8]) -> PathBuf {
    let path = env::temp_dir().join(format!("nesdis-{}-{}.nes", name, std::process::id()));
    fs::write(&path, data).unwrap();
    path
}

#[test]
fn regions_are_split_in_order() {
    let mut data = header(2, 1, 0x00, 0x00);
    data.extend(vec![0x11; 32768]);
    data.extend(vec![0x22; 8192]);

    let rom = Rom::from_bytes(&data).unwrap();

    expect!(rom.header().prg_rom_size).to(be_eq(32768));
    expect!(rom.header().chr_rom_size).to(be_eq(8192));
    expect!(rom.trainer().len()).to(be_eq(0));
    expect!(rom.prg_rom().len()).to(be_eq(32768));
    expect!(rom.chr_rom().len()).to(be_eq(8192));
    expect!(rom.prg_rom().iter().all(|&byte| byte == 0x11)).to(be_true());
    expect!(rom.chr_rom().iter().all(|&byte| byte == 0x22)).to(be_true());
}

#[test]
fn trainer_precedes_program() {
    let mut data = header(1, 0, 0b00000100, 0x00);
    data.extend(vec![0x33; 512]);
    data.extend(vec![0x44; 16384]);

    let rom = Rom::from_bytes(&data).unwrap();

    expect!(rom.header().has_trainer).to(be_true());
    expect!(rom.trainer().len()).to(be_eq(512));
    expect!(rom.trainer()[511]).to(be_eq(0x33));
    expect!(rom.prg_rom()[0]).to(be_eq(0x44));
    expect!(rom.chr_rom().len()).to(be_eq(0));
}

#[test]
fn mapper_from_both_nibbles() {
    let mut data = header(1, 0, 0b00010000, 0b00100000);
    data.extend(vec![0x00; 16384]);

    let rom = Rom::from_bytes(&data).unwrap();

    expect!(rom.header().mapper).to(be_eq(0x21));
    expect!(rom.header().mirroring_mode()).to(be_eq(NametableMirroringMode::Horizontal));
    expect!(rom.header().system_type()).to(be_eq(SystemType::NES));
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut data = header(1, 0, 0x00, 0x00);
    data.extend(vec![0x00; 16384 + 128]);

    let rom = Rom::from_bytes(&data).unwrap();
    expect!(rom.prg_rom().len()).to(be_eq(16384));
}

#[test]
fn short_header() {
    let result = Rom::from_bytes(b"NES\x1A\x01");

    match result {
        Err(Error::Format(err)) => expect!(err).to(be_eq(FormatError::HeaderTooShort { found: 5 })),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn bad_signature() {
    let mut data = header(1, 0, 0x00, 0x00);
    data[3] = 0x00;
    data.extend(vec![0x00; 16384]);

    match Rom::from_bytes(&data) {
        Err(Error::Format(err)) => {
            expect!(err).to(be_eq(FormatError::InvalidMagic { found: *b"NES\x00" }))
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn truncated_program() {
    let mut data = header(2, 1, 0x00, 0x00);
    data.extend(vec![0x00; 20000]);

    match Rom::from_bytes(&data) {
        Err(Error::Format(err)) => expect!(err).to(be_eq(FormatError::Truncated {
            region: "PRG ROM",
            expected: 32768,
            found: 20000,
        })),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn truncated_graphics() {
    let mut data = header(1, 1, 0x00, 0x00);
    data.extend(vec![0x00; 16384 + 100]);

    match Rom::from_bytes(&data) {
        Err(Error::Format(err)) => expect!(err).to(be_eq(FormatError::Truncated {
            region: "CHR ROM",
            expected: 8192,
            found: 100,
        })),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn truncated_trainer() {
    let mut data = header(1, 0, 0b00000100, 0x00);
    data.extend(vec![0x00; 300]);

    match Rom::from_bytes(&data) {
        Err(Error::Format(err)) => expect!(err).to(be_eq(FormatError::Truncated {
            region: "trainer",
            expected: 512,
            found: 300,
        })),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn open_from_disk() {
    let mut data = header(1, 0, 0x00, 0x00);
    let mut prg_rom = vec![0xEA; 16384];
    prg_rom[0] = 0x78; // SEI
    data.extend(prg_rom);
    let path = temp_rom("open", &data);

    let mut dis = Disassembler::open(&path).unwrap();
    dis.run();
    fs::remove_file(&path).unwrap();

    expect!(dis.source().prg_rom().len()).to(be_eq(16384));
    expect!(dis.offset()).to(be_eq(16384));
    expect!(dis.text().lines().nth(1).unwrap()).to(be_eq("0000 78       SEI"));
}

#[test]
fn missing_file() {
    let path = env::temp_dir().join("nesdis-does-not-exist.nes");

    match Rom::open(&path) {
        Err(Error::Io { .. }) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}
