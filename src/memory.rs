use crate::constants::{
    ADDRESS_MASK, FONT_ADDR, FONT_SET, MEMORY_SIZE, PROGRAM_END, PROGRAM_START,
};
use crate::error::LoadError;

/// # Memory
/// 4096 bytes of addressable memory.
///
/// - `0x000..0x050` holds the font sprites for the hexadecimal digits
/// - `0x200..0xE8F` is where programs are loaded
///
/// Every access is masked to 12 bits, so reads and writes past `0xFFF` wrap back to `0x000`
/// instead of leaving the array.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    /// Zeroed memory with the font loaded.
    pub fn new() -> Self {
        let mut memory = Memory {
            bytes: [0; MEMORY_SIZE],
        };
        memory.load_font();
        memory
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[(addr & ADDRESS_MASK) as usize]
    }

    pub fn write(&mut self, addr: u16, byte: u8) {
        self.bytes[(addr & ADDRESS_MASK) as usize] = byte;
    }

    /// Reads the big-endian word made of the bytes at `addr` and `addr + 1`.
    pub fn read_word(&self, addr: u16) -> u16 {
        let left = u16::from(self.read(addr));
        let right = u16::from(self.read(addr.wrapping_add(1)));
        left << 8 | right
    }

    /// Fills `buf` with consecutive bytes starting at `addr`, wrapping at the end of memory.
    pub fn read_into(&self, addr: u16, buf: &mut [u8]) {
        for (offset, byte) in buf.iter_mut().enumerate() {
            *byte = self.read(addr.wrapping_add(offset as u16));
        }
    }

    /// Copies `data` into memory starting at `base`.
    ///
    /// Nothing is written unless all of `data` fits in `PROGRAM_START..PROGRAM_END`.
    /// Use `write` to reach the font or the memory above the program region.
    pub fn load_bytes(&mut self, base: u16, data: &[u8]) -> Result<(), LoadError> {
        let start = base as usize;
        let end = start + data.len();
        if base < PROGRAM_START || end > PROGRAM_END as usize {
            return Err(LoadError::OutOfRange {
                base,
                len: data.len(),
            });
        }
        self.bytes[start..end].copy_from_slice(data);
        Ok(())
    }

    /// Writes the font sprites to `FONT_ADDR`.
    pub fn load_font(&mut self) {
        let start = FONT_ADDR as usize;
        self.bytes[start..start + FONT_SET.len()].copy_from_slice(&FONT_SET);
    }

    /// Zeroes every byte and reloads the font.
    pub fn clear(&mut self) {
        self.bytes = [0; MEMORY_SIZE];
        self.load_font();
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
