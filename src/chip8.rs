use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, trace, warn};

use crate::bus::Bus;
use crate::constants::{MAX_PROGRAM_SIZE, OPCODE_SIZE, PROGRAM_END, PROGRAM_START};
use crate::error::LoadError;
use crate::instruction::Instruction;
use crate::memory::Memory;
use crate::registers::RegisterFile;

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - `memory` holding the font and the loaded program
///  - `registers` including the program counter, call stack and timers
///  - the `bus` through which it clears and draws the display, reads keys and gets random bytes
///
/// Supplies interfaces for:
/// - loading programs
/// - fetching and executing opcodes
/// - advancing its timers
/// - inspecting its memory, registers and bus
///
/// It never sleeps or blocks; whoever drives it decides how many opcodes to execute per frame
/// and calls `tick_timers` at 60Hz.
pub struct Chip8<B: Bus> {
    pub(crate) memory: Memory,
    pub(crate) registers: RegisterFile,
    pub(crate) bus: B,
}

impl<B: Bus> Chip8<B> {
    pub fn new(bus: B) -> Self {
        Chip8 {
            memory: Memory::new(),
            registers: RegisterFile::new(),
            bus,
        }
    }

    /// Zero memory and registers, reload the font and point the program counter at 0x200.
    pub fn reset(&mut self) {
        debug!("resetting");
        self.memory.clear();
        self.registers = RegisterFile::new();
    }

    /// Load a program from a file
    ///
    /// # Arguments
    /// * `path` a raw Chip-8 program without any header
    pub fn load_program<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        let path = path.as_ref();
        debug!("loading program from {}", path.display());
        let mut file = File::open(path)?;
        self.load_rom(&mut file)
    }

    /// Load a program from a reader
    ///
    /// The program is copied to 0x200 and the program counter is moved there.
    /// Nothing changes if reading fails or the program doesn't fit.
    /// At most one byte past the largest program is pulled from the reader, so an oversized or
    /// endless source is refused as soon as it is known not to fit.
    ///
    /// # Arguments
    /// * `reader` a reader that contains a ROM
    pub fn load_rom(&mut self, reader: &mut dyn Read) -> Result<(), LoadError> {
        let mut program = Vec::with_capacity(MAX_PROGRAM_SIZE + 1);
        reader
            .take(MAX_PROGRAM_SIZE as u64 + 1)
            .read_to_end(&mut program)?;
        if program.len() > MAX_PROGRAM_SIZE {
            warn!(
                "refusing program of over {} bytes; at most {} bytes fit",
                MAX_PROGRAM_SIZE, MAX_PROGRAM_SIZE
            );
            return Err(LoadError::TooLarge {
                size: program.len(),
                max: MAX_PROGRAM_SIZE,
            });
        }
        self.memory.load_bytes(PROGRAM_START, &program)?;
        self.registers.pc = PROGRAM_START;
        debug!("loaded {} byte program", program.len());
        Ok(())
    }

    /// Copy bytes into the program region at `base` without touching any registers.
    ///
    /// Fails with `LoadError::OutOfRange` if any byte would land below 0x200 or at or past 0xE8F.
    pub fn load_bytes(&mut self, base: u16, data: &[u8]) -> Result<(), LoadError> {
        self.memory.load_bytes(base, data)
    }

    /// Gets the opcode currently pointed at by the pc.
    /// Memory is stored as bytes, but opcodes are 16 bits so we combine two subsequent bytes.
    ///
    /// A pc at or past the end of the program region wraps back to 0x200 first.
    pub fn fetch(&mut self) -> u16 {
        if self.registers.pc >= PROGRAM_END {
            trace!("pc {:04X} past end of program; wrapping", self.registers.pc);
            self.registers.pc = PROGRAM_START;
        }
        self.memory.read_word(self.registers.pc)
    }

    /// Executes a single opcode.
    ///
    /// The pc is moved past the opcode before it takes effect, so jumps set it outright and skips
    /// add a further 2. Opcodes that don't decode to an instruction do nothing else.
    pub fn execute(&mut self, op: u16) {
        self.registers.pc = self.registers.pc.wrapping_add(OPCODE_SIZE);
        let instruction = Instruction::decode(op);
        trace!(
            "{:04X} {:?} v{:02X?} i{:04X} pc{:04X}",
            op,
            instruction,
            self.registers.v,
            self.registers.i,
            self.registers.pc
        );
        self.apply(instruction);
    }

    /// Fetches and executes the next opcode, returning it.
    pub fn step(&mut self) -> u16 {
        let op = self.fetch();
        self.execute(op);
        op
    }

    /// Counts the delay and sound timers down by one. Call at 60Hz.
    pub fn tick_timers(&mut self) {
        self.registers.tick_timers();
    }

    /// Whether a tone should currently be playing.
    pub fn sound_active(&self) -> bool {
        self.registers.sound_timer > 0
    }

    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    pub fn registers_mut(&mut self) -> &mut RegisterFile {
        &mut self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn into_bus(self) -> B {
        self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_bus::{Request, TestBus};

    fn chip8() -> Chip8<TestBus> {
        Chip8::new(TestBus::new())
    }

    #[test]
    fn test_chip8_fetches_big_endian() {
        let mut chip8 = chip8();
        chip8.memory.load_bytes(0x200, &[0xAA, 0xBB]).unwrap();
        assert_eq!(chip8.fetch(), 0xAABB);
    }

    #[test]
    fn test_fetch_does_not_advance_pc() {
        let mut chip8 = chip8();
        chip8.fetch();
        chip8.fetch();
        assert_eq!(chip8.registers.pc, 0x200);
    }

    #[test]
    fn test_fetch_wraps_pc_at_program_end() {
        let mut chip8 = chip8();
        chip8.memory.load_bytes(0x200, &[0x12, 0x34]).unwrap();
        chip8.registers.pc = PROGRAM_END;
        assert_eq!(chip8.fetch(), 0x1234);
        assert_eq!(chip8.registers.pc, 0x200);
    }

    #[test]
    fn test_fetch_reads_last_word_before_program_end() {
        let mut chip8 = chip8();
        chip8.memory.write(0xE8D, 0x60);
        chip8.memory.write(0xE8E, 0x01);
        chip8.registers.pc = 0xE8D;
        assert_eq!(chip8.fetch(), 0x6001);
        assert_eq!(chip8.registers.pc, 0xE8D);
    }

    #[test]
    fn test_step_advances_pc() {
        let mut chip8 = chip8();
        let starting_pc = chip8.registers.pc;
        // cls so the step has an observable effect
        chip8.memory.load_bytes(0x200, &[0x00, 0xE0]).unwrap();
        assert_eq!(chip8.step(), 0x00E0);
        assert_eq!(chip8.registers.pc, starting_pc + 0x2);
        assert_eq!(chip8.bus.last(), Some(&Request::Clear));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut chip8 = chip8();
        chip8.memory.write(0x300, 0xFF);
        chip8.registers.v[0x3] = 0x9;
        chip8.registers.pc = 0x456;
        chip8.registers.push_call(0x222);
        chip8.registers.delay_timer = 0x20;

        chip8.reset();
        let once = (chip8.memory.clone(), chip8.registers);
        chip8.reset();

        assert!(chip8.memory == once.0);
        assert_eq!(chip8.registers, once.1);
        assert!(chip8.memory == Memory::new());
        assert_eq!(chip8.registers, RegisterFile::new());
    }

    #[test]
    fn test_load_rom_copies_program_and_resets_pc() {
        let mut chip8 = chip8();
        chip8.registers.pc = 0x300;
        chip8.registers.v[0x1] = 0x7;
        let mut rom: &[u8] = &[0x00, 0xE0, 0xA2, 0x2A];
        chip8.load_rom(&mut rom).unwrap();
        assert_eq!(chip8.memory.as_slice()[0x200..0x204], [0x00, 0xE0, 0xA2, 0x2A]);
        assert_eq!(chip8.registers.pc, 0x200);
        // registers other than the pc survive a load
        assert_eq!(chip8.registers.v[0x1], 0x7);
    }

    #[test]
    fn test_load_rom_accepts_largest_program() {
        let mut chip8 = chip8();
        let program = vec![0x11; MAX_PROGRAM_SIZE];
        assert!(chip8.load_rom(&mut program.as_slice()).is_ok());
        assert_eq!(chip8.memory.read(0xE8E), 0x11);
    }

    #[test]
    fn test_load_rom_rejects_oversized_program() {
        let mut chip8 = chip8();
        chip8.registers.pc = 0x300;
        let before = chip8.memory.clone();
        let program = vec![0x11; MAX_PROGRAM_SIZE + 1];
        let result = chip8.load_rom(&mut program.as_slice());
        assert!(matches!(
            result,
            Err(LoadError::TooLarge { size: 3216, max: 3215 })
        ));
        assert!(chip8.memory == before);
        assert_eq!(chip8.registers.pc, 0x300);
    }

    /// Yields 0x11 forever, counting how many bytes were handed out.
    struct Endless {
        pulled: usize,
    }

    impl Read for Endless {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            for byte in buf.iter_mut() {
                *byte = 0x11;
            }
            self.pulled += buf.len();
            Ok(buf.len())
        }
    }

    #[test]
    fn test_load_rom_stops_reading_endless_source() {
        let mut chip8 = chip8();
        let before = chip8.memory.clone();
        let mut source = Endless { pulled: 0 };
        let result = chip8.load_rom(&mut source);
        assert!(matches!(result, Err(LoadError::TooLarge { max: 3215, .. })));
        assert!(source.pulled <= MAX_PROGRAM_SIZE + 1);
        assert!(chip8.memory == before);
    }

    #[test]
    fn test_load_bytes_refuses_font_region() {
        let mut chip8 = chip8();
        let before = chip8.memory.clone();
        let result = chip8.load_bytes(0x000, &[0xFF; 5]);
        assert!(matches!(
            result,
            Err(LoadError::OutOfRange { base: 0x000, len: 5 })
        ));
        assert!(chip8.memory == before);
    }

    #[test]
    fn test_load_program_reports_missing_file() {
        let mut chip8 = chip8();
        chip8.registers.pc = 0x300;
        let result = chip8.load_program("this/file/does/not/exist.ch8");
        assert!(matches!(result, Err(LoadError::Io(_))));
        assert_eq!(chip8.registers.pc, 0x300);
    }

    #[test]
    fn test_load_bytes_leaves_pc_alone() {
        let mut chip8 = chip8();
        chip8.registers.pc = 0x208;
        chip8.load_bytes(0x400, &[0x1, 0x2]).unwrap();
        assert_eq!(chip8.memory.read_word(0x400), 0x0102);
        assert_eq!(chip8.registers.pc, 0x208);
    }

    #[test]
    fn test_tick_timers() {
        let mut chip8 = chip8();
        chip8.registers.delay_timer = 0x2;
        chip8.registers.sound_timer = 0x1;
        assert!(chip8.sound_active());
        chip8.tick_timers();
        assert_eq!(chip8.registers.delay_timer, 0x1);
        assert!(!chip8.sound_active());
    }

    #[test]
    fn test_execute_never_ticks_timers() {
        let mut chip8 = chip8();
        chip8.registers.delay_timer = 0x5;
        chip8.registers.sound_timer = 0x5;
        for _ in 0..10 {
            chip8.execute(0x6000);
        }
        assert_eq!(chip8.registers.delay_timer, 0x5);
        assert_eq!(chip8.registers.sound_timer, 0x5);
    }

    #[test]
    fn test_bus_can_be_borrowed() {
        let mut bus = TestBus::new();
        {
            let mut chip8 = Chip8::new(&mut bus);
            chip8.execute(0x00E0);
        }
        assert_eq!(bus.requests, vec![Request::Clear]);
    }
}
