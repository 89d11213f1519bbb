use crate::constants::{FLAG_REGISTER, PROGRAM_START, STACK_SIZE};

/// # Register file
///
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the flag register; carry, borrow, shifted-out bit and sprite collision
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter
///
/// Stack
/// - 16 return addresses and an index (sp) of the next free slot
/// - the index never leaves `0..=15`; pushing onto a full stack overwrites the top entry and
///   popping an empty stack returns the bottom one
///
/// Timers
/// - 2 8-bit timers (delay & sound)
/// - counted down at 60Hz by `tick_timers`, never by instruction execution
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub sp: u8,
    pub stack: [u16; STACK_SIZE],
    pub delay_timer: u8,
    pub sound_timer: u8,
}

impl RegisterFile {
    pub fn new() -> Self {
        RegisterFile {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            stack: [0; STACK_SIZE],
            delay_timer: 0,
            sound_timer: 0,
        }
    }

    pub fn vf(&self) -> u8 {
        self.v[FLAG_REGISTER]
    }

    /// VF = 0x1 if `status` else 0x0
    pub fn set_flag(&mut self, status: bool) {
        self.v[FLAG_REGISTER] = u8::from(status);
    }

    /// Stores a return address and moves the stack pointer up, stopping at the last slot.
    pub fn push_call(&mut self, addr: u16) {
        self.stack[self.sp as usize] = addr;
        if (self.sp as usize) < STACK_SIZE - 1 {
            self.sp += 1;
        }
    }

    /// Moves the stack pointer down, stopping at the first slot, and returns the address there.
    pub fn pop_call(&mut self) -> u16 {
        self.sp = self.sp.saturating_sub(1);
        self.stack[self.sp as usize]
    }

    /// Counts both timers down by one, stopping at zero.
    pub fn tick_timers(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_program() {
        let registers = RegisterFile::new();
        assert_eq!(registers.pc, 0x200);
        assert_eq!(registers.sp, 0);
    }

    #[test]
    fn test_set_flag() {
        let mut registers = RegisterFile::new();
        registers.set_flag(true);
        assert_eq!(registers.vf(), 0x1);
        registers.set_flag(false);
        assert_eq!(registers.vf(), 0x0);
    }

    #[test]
    fn test_push_then_pop() {
        let mut registers = RegisterFile::new();
        registers.push_call(0x202);
        registers.push_call(0x30A);
        assert_eq!(registers.sp, 2);
        assert_eq!(registers.pop_call(), 0x30A);
        assert_eq!(registers.pop_call(), 0x202);
        assert_eq!(registers.sp, 0);
    }

    #[test]
    fn test_push_clamps_at_top_of_stack() {
        let mut registers = RegisterFile::new();
        for addr in 0..20 {
            registers.push_call(0x200 + addr * 2);
        }
        assert_eq!(registers.sp, 15);
        // the last slot was overwritten by each push past the fifteenth
        assert_eq!(registers.stack[15], 0x200 + 19 * 2);
        assert_eq!(registers.stack[14], 0x200 + 14 * 2);
    }

    #[test]
    fn test_pop_clamps_at_bottom_of_stack() {
        let mut registers = RegisterFile::new();
        registers.stack[0] = 0x0ABC;
        assert_eq!(registers.pop_call(), 0x0ABC);
        assert_eq!(registers.pop_call(), 0x0ABC);
        assert_eq!(registers.sp, 0);
    }

    #[test]
    fn test_tick_timers_stops_at_zero() {
        let mut registers = RegisterFile::new();
        registers.delay_timer = 2;
        registers.sound_timer = 1;
        registers.tick_timers();
        assert_eq!((registers.delay_timer, registers.sound_timer), (1, 0));
        registers.tick_timers();
        registers.tick_timers();
        assert_eq!((registers.delay_timer, registers.sound_timer), (0, 0));
    }
}
