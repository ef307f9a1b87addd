//! Archive container writing.
//!
//! The assembler only needs "add a named blob" and "give me the bytes";
//! [`ArchiveWriter`] is that interface and [`ZipArchiveWriter`] the
//! implementation used in practice.

use std::collections::HashSet;
use std::io::{self, Cursor, Read};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::ArchiveCompression;

/// Accepts named binary entries and produces one compressed byte stream.
pub trait ArchiveWriter {
    /// Writes `data` under `name`. Returns the number of bytes read.
    fn add_file(&mut self, name: &str, data: &mut dyn Read) -> io::Result<u64>;

    /// Finishes the container and returns its bytes.
    fn finish(self) -> io::Result<Vec<u8>>;
}

/// In-memory ZIP writer. Refuses to write the same entry name twice.
pub struct ZipArchiveWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    method: CompressionMethod,
    names: HashSet<String>,
}

impl ZipArchiveWriter {
    pub fn new(compression: ArchiveCompression) -> Self {
        let method = match compression {
            ArchiveCompression::Stored => CompressionMethod::Stored,
            ArchiveCompression::Deflated => CompressionMethod::Deflated,
        };
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            method,
            names: HashSet::new(),
        }
    }
}

impl ArchiveWriter for ZipArchiveWriter {
    fn add_file(&mut self, name: &str, data: &mut dyn Read) -> io::Result<u64> {
        if !self.names.insert(name.to_string()) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("duplicate archive entry {name}"),
            ));
        }
        let options = SimpleFileOptions::default().compression_method(self.method);
        self.zip.start_file(name, options).map_err(io::Error::other)?;
        io::copy(data, &mut self.zip)
    }

    fn finish(self) -> io::Result<Vec<u8>> {
        let cursor = self.zip.finish().map_err(io::Error::other)?;
        Ok(cursor.into_inner())
    }
}
