//! Flat physical memory with a bounds-checked guest-to-host mapping.

use sdb_eval::{GuestMemory, OutOfRange};
use sdb_ir::Word;

const WORD_BYTES: usize = std::mem::size_of::<Word>();

/// Where guest physical memory lives and how large it is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MemoryConfig {
    pub base: Word,
    pub size: usize,
}

impl MemoryConfig {
    /// Default guest memory base for riscv64 boards.
    pub const DEFAULT_BASE: Word = 0x8000_0000;
    /// Default size: 128 MiB.
    pub const DEFAULT_SIZE: usize = 128 * 1024 * 1024;
}

impl Default for MemoryConfig {
    fn default() -> Self {
        MemoryConfig {
            base: Self::DEFAULT_BASE,
            size: Self::DEFAULT_SIZE,
        }
    }
}

/// Little-endian guest memory backed by one host buffer.
pub struct PhysicalMemory {
    base: Word,
    bytes: Vec<u8>,
}

impl PhysicalMemory {
    pub fn new(config: MemoryConfig) -> Self {
        PhysicalMemory {
            base: config.base,
            bytes: vec![0; config.size],
        }
    }

    pub fn base(&self) -> Word {
        self.base
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Host offset of `len` bytes at guest `addr`, if they all fit.
    fn translate(&self, addr: Word, len: usize) -> Result<usize, OutOfRange> {
        addr.checked_sub(self.base)
            .and_then(|offset| usize::try_from(offset).ok())
            .filter(|&offset| {
                offset
                    .checked_add(len)
                    .is_some_and(|end| end <= self.bytes.len())
            })
            .ok_or(OutOfRange { addr })
    }

    pub fn write_word(&mut self, addr: Word, value: Word) -> Result<(), OutOfRange> {
        let offset = self.translate(addr, WORD_BYTES)?;
        self.bytes[offset..offset + WORD_BYTES].copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Copy `image` into guest memory starting at `addr`.
    pub fn load(&mut self, addr: Word, image: &[u8]) -> Result<(), OutOfRange> {
        let offset = self.translate(addr, image.len())?;
        self.bytes[offset..offset + image.len()].copy_from_slice(image);
        Ok(())
    }
}

impl GuestMemory for PhysicalMemory {
    fn translate_and_read(&self, addr: Word) -> Result<Word, OutOfRange> {
        let offset = self.translate(addr, WORD_BYTES)?;
        let mut word = [0u8; WORD_BYTES];
        word.copy_from_slice(&self.bytes[offset..offset + WORD_BYTES]);
        Ok(Word::from_le_bytes(word))
    }
}

impl std::fmt::Debug for PhysicalMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhysicalMemory")
            .field("base", &format_args!("{:#x}", self.base))
            .field("size", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests;
