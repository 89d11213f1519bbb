/// Total addressable memory in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Mask applied to every memory access so addresses wrap at `MEMORY_SIZE`.
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// Programs are loaded here and the program counter starts here.
pub const PROGRAM_START: u16 = 0x200;

/// First address past the loadable program region.
pub const PROGRAM_END: u16 = 0xE8F;

/// Largest program that fits between `PROGRAM_START` and `PROGRAM_END`.
pub const MAX_PROGRAM_SIZE: usize = (PROGRAM_END - PROGRAM_START) as usize;

/// Size of an opcode in bytes.
pub const OPCODE_SIZE: u16 = 2;

pub const STACK_SIZE: usize = 16;

/// Register used for carry, borrow, shifted-out bits and sprite collisions.
pub const FLAG_REGISTER: usize = 0xF;

/// Reported by a bus when no key is held.
pub const KEY_NOT_PRESSED: u8 = 0x10;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Timers are decremented at 60Hz by whoever drives the Chip-8.
pub const TIMER_HZ: u32 = 60;

/// Where the font sprites live in memory.
pub const FONT_ADDR: u16 = 0x000;

/// Each font glyph is 5 rows of 8 pixels.
pub const FONT_GLYPH_SIZE: u16 = 5;

/// # Font
/// Hexadecimal digits 0..F, each drawn as a 4x5 sprite in the high nibble of 5 bytes.
///
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
pub const FONT_SET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
