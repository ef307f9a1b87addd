//! Named, read-only file content selected by the user.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalog::is_accepted_extension;
use crate::naming::extension_of;

/// A selected file: its original name plus where its bytes come from.
/// Cloning is cheap; content is never mutated.
#[derive(Debug, Clone)]
pub struct FileBlob {
    name: String,
    content: BlobContent,
}

#[derive(Debug, Clone)]
enum BlobContent {
    Path(PathBuf),
    Bytes(Arc<[u8]>),
}

impl FileBlob {
    /// Blob backed by a file on disk. The file is only opened at assembly time.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("no file name in path {}", path.display()))?;
        Ok(Self {
            name,
            content: BlobContent::Path(path),
        })
    }

    /// Blob held in memory under `name`.
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            content: BlobContent::Bytes(bytes.into()),
        }
    }

    /// Original filename, including extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Backing path, if the blob lives on disk.
    pub fn path(&self) -> Option<&Path> {
        match &self.content {
            BlobContent::Path(p) => Some(p),
            BlobContent::Bytes(_) => None,
        }
    }

    pub fn extension(&self) -> Option<&str> {
        extension_of(&self.name)
    }

    /// Whether the extension is one the picker offers (doc, docx, pdf).
    pub fn is_accepted_type(&self) -> bool {
        self.extension().is_some_and(is_accepted_extension)
    }

    /// Opens the content for reading.
    pub fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        match &self.content {
            BlobContent::Path(p) => Ok(Box::new(File::open(p)?)),
            BlobContent::Bytes(b) => Ok(Box::new(Cursor::new(Arc::clone(b)))),
        }
    }
}
