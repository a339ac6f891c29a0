use std::net::Ipv4Addr;

pub mod entry;
pub mod error;
pub mod generator;

pub use entry::{ServerEntries, ServerEntry};
pub use error::GenerateError;
pub use generator::GeneratorOptions;

/// First port handed out.
pub const PORT_START: u16 = 5000;

/// Written relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "config.txt";

pub const LOOPBACK: Ipv4Addr = Ipv4Addr::LOCALHOST;

/// Write `count` loopback entries, ports ascending from `PORT_START`, to
/// `config.txt` in the working directory, replacing whatever was there. A
/// count of zero or less produces an empty file.
pub fn generate(count: i64) -> Result<(), GenerateError> {
    GeneratorOptions::default().write_file(count)?;
    Ok(())
}

