//! Zip archive writer

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Deflate level used for bundles.
const COMPRESSION_LEVEL: i64 = 9;

/// A zip archive being written to disk.
pub struct ZipArchive {
    path: PathBuf,
    writer: ZipWriter<File>,
    options: SimpleFileOptions,
    entries: usize,
}

impl ZipArchive {
    /// Create (or truncate) the archive at `path`.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(COMPRESSION_LEVEL));

        Ok(Self {
            path: path.to_path_buf(),
            writer: ZipWriter::new(file),
            options,
            entries: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy the file at `source` into the archive under `name`.
    pub fn add_file(&mut self, source: &Path, name: &str) -> Result<(), ZipError> {
        let mut input = File::open(source)?;
        self.writer.start_file(name, self.options)?;
        io::copy(&mut input, &mut self.writer)?;
        self.entries += 1;
        Ok(())
    }

    /// Write the central directory and close the file.
    pub fn finish(self) -> Result<usize, ZipError> {
        let file = self.writer.finish()?;
        file.sync_all()?;
        Ok(self.entries)
    }
}

/// Archive entry name for a relative path (always `/`-separated).
pub fn entry_name(rel_path: &Path) -> String {
    rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
