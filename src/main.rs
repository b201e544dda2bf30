use std::{env, fs, process};

use anyhow::{Context, Result};
use log::info;

use nesdis::disassembler::Disassembler;

const DEFAULT_OUTPUT: &str = "disassembly.txt";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Syntax: {} <rom> [output]",
            args.first().map(String::as_str).unwrap_or("nesdis")
        );
        process::exit(1);
    }

    let rom_path = &args[1];
    let output_path = args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT);

    let mut dis = Disassembler::open(rom_path)
        .with_context(|| format!("failed to load {}", rom_path))?;
    dis.run();
    info!("disassembled {} bytes of PRG ROM", dis.offset());

    fs::write(output_path, dis.into_text())
        .with_context(|| format!("failed to write {}", output_path))?;

    Ok(())
}
