pub mod model;
pub mod reader;

pub use model::{INESHeader, NametableMirroringMode, Rom, SystemType, TVType};
