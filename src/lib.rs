#[macro_use]
extern crate bitflags;

#[macro_use]
extern crate lazy_static;

pub mod disassembler;
pub mod error;
pub mod model;
pub mod rom;
pub mod source;
