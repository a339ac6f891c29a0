use std::{
    fs::File,
    io::{self, BufWriter, Write},
    net::Ipv4Addr,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{entry::ServerEntries, error::GenerateError, DEFAULT_OUTPUT, LOOPBACK, PORT_START};

#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    address: Ipv4Addr,
    port_start: u16,
    output: PathBuf,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            address: LOOPBACK,
            port_start: PORT_START,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl GeneratorOptions {
    pub fn with_address(mut self, address: Ipv4Addr) -> Self {
        self.address = address;
        self
    }

    pub fn with_port_start(mut self, port_start: u16) -> Self {
        self.port_start = port_start;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn entries(&self, count: i64) -> ServerEntries {
        ServerEntries::new(self.address, self.port_start, count)
    }

    /// Write one `<address> <port>` line per entry into `out`. Returns the
    /// number of entries written.
    pub fn write_to(&self, count: i64, out: impl Write) -> Result<u64, GenerateError> {
        Ok(write_entries(self.entries(count), out)?)
    }

    /// Create (or truncate) the output file and fill it with `count` entries.
    ///
    /// A failure part way through writing can leave a truncated file behind.
    pub fn write_file(&self, count: i64) -> Result<u64, GenerateError> {
        debug!(
            "writing {} entries to {} starting at port {}",
            count.max(0),
            self.output.display(),
            self.port_start
        );

        let file = File::create(&self.output).map_err(|e| GenerateError::io(&self.output, e))?;
        let total = write_entries(self.entries(count), BufWriter::new(file))
            .map_err(|e| GenerateError::io(&self.output, e))?;

        info!("wrote {} entries to {}", total, self.output.display());

        Ok(total)
    }
}

fn write_entries(entries: ServerEntries, mut out: impl Write) -> io::Result<u64> {
    let mut written = 0;

    for entry in entries {
        writeln!(out, "{}", entry)?;
        written += 1;
    }

    out.flush()?;

    Ok(written)
}
