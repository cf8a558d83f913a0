use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use byteorder::{ByteOrder, NativeEndian};
use log::warn;

use crate::AlignmentPolicy;

/// Size of a single SPIR-V word in bytes
pub const WORD_SIZE: usize = std::mem::size_of::<u32>();

/// The raw contents of a compiled shader file, together with the path it was read from
#[derive(Debug, Clone)]
pub struct ShaderBinary {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl ShaderBinary {
    /// Reads the whole file at `path` into memory
    ///
    /// # Errors
    ///
    /// If the file does not exist or cannot be read, an error is returned.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("Could not read shader binary {}", path.display()))?;
        Ok(Self::from_bytes(path, bytes))
    }

    /// Wraps bytes that were already loaded. `path` is only used in diagnostics
    pub fn from_bytes<P: Into<PathBuf>>(path: P, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of complete words in this binary
    pub fn word_count(&self) -> usize {
        self.bytes.len() / WORD_SIZE
    }

    /// Is the length of this binary a multiple of the word size?
    pub fn is_word_aligned(&self) -> bool {
        self.bytes.len() % WORD_SIZE == 0
    }

    /// Reinterprets the bytes of this binary as `u32` words in the native byte order of the host.
    ///
    /// # Errors
    ///
    /// With `AlignmentPolicy::Strict`, an error is returned if the length is not a multiple of 4. With
    /// `AlignmentPolicy::Truncate` the trailing bytes are dropped instead.
    pub fn words(&self, alignment: AlignmentPolicy) -> Result<Vec<u32>> {
        if !self.is_word_aligned() {
            let trailing = self.bytes.len() % WORD_SIZE;
            match alignment {
                AlignmentPolicy::Strict => bail!(
                    "Shader binary {} has a length of {} bytes, which is not a multiple of {}",
                    self.path.display(),
                    self.bytes.len(),
                    WORD_SIZE
                ),
                AlignmentPolicy::Truncate => warn!(
                    "Shader binary {} is not word aligned, dropping its last {} byte(s)",
                    self.path.display(),
                    trailing
                ),
            }
        }

        let mut words = vec![0; self.word_count()];
        NativeEndian::read_u32_into(&self.bytes[..words.len() * WORD_SIZE], &mut words);
        Ok(words)
    }
}
