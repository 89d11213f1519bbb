use log::trace;

use crate::bus::Bus;
use crate::chip8::Chip8;
use crate::constants::{FONT_ADDR, FONT_GLYPH_SIZE, KEY_NOT_PRESSED, OPCODE_SIZE};
use crate::instruction::Instruction;

/// Sprites are at most 15 rows tall.
const MAX_SPRITE_ROWS: usize = 15;

impl<B: Bus> Chip8<B> {
    /// Applies an instruction whose opcode has already been stepped over.
    pub(crate) fn apply(&mut self, instruction: Instruction) {
        match instruction {
            Instruction::Clear => self.bus.clear_display(),
            Instruction::Return => self.registers.pc = self.registers.pop_call(),
            Instruction::Jump { addr } => self.registers.pc = addr,
            Instruction::Call { addr } => self.call(addr),
            Instruction::SkipEq { x, byte } => self.skip_if(self.registers.v[x] == byte),
            Instruction::SkipNe { x, byte } => self.skip_if(self.registers.v[x] != byte),
            Instruction::SkipRegEq { x, y } => {
                self.skip_if(self.registers.v[x] == self.registers.v[y])
            }
            Instruction::Load { x, byte } => self.registers.v[x] = byte,
            Instruction::Add { x, byte } => {
                self.registers.v[x] = self.registers.v[x].wrapping_add(byte)
            }
            Instruction::Move { x, y } => self.registers.v[x] = self.registers.v[y],
            Instruction::Or { x, y } => self.registers.v[x] |= self.registers.v[y],
            Instruction::And { x, y } => self.registers.v[x] &= self.registers.v[y],
            Instruction::Xor { x, y } => self.registers.v[x] ^= self.registers.v[y],
            Instruction::AddReg { x, y } => self.add_reg(x, y),
            Instruction::Sub { x, y } => self.sub(x, y),
            Instruction::ShiftRight { x, y } => self.shr(x, y),
            Instruction::SubN { x, y } => self.subn(x, y),
            Instruction::ShiftLeft { x, y } => self.shl(x, y),
            Instruction::SkipRegNe { x, y } => {
                self.skip_if(self.registers.v[x] != self.registers.v[y])
            }
            Instruction::LoadIndex { addr } => self.registers.i = addr,
            Instruction::JumpOffset { addr } => {
                self.registers.pc = addr + u16::from(self.registers.v[0x0])
            }
            Instruction::Random { x, byte } => {
                self.registers.v[x] = byte & self.bus.random_byte()
            }
            Instruction::Draw { x, y, n } => self.draw(x, y, n),
            Instruction::SkipKeyPressed { x } => {
                let key = self.bus.current_key();
                self.skip_if(key == self.registers.v[x] & 0xF)
            }
            Instruction::SkipKeyNotPressed { x } => {
                let key = self.bus.current_key();
                self.skip_if(key != self.registers.v[x] & 0xF)
            }
            Instruction::LoadDelay { x } => self.registers.v[x] = self.registers.delay_timer,
            Instruction::AwaitKey { x } => self.await_key(x),
            Instruction::SetDelay { x } => self.registers.delay_timer = self.registers.v[x],
            Instruction::SetSound { x } => self.registers.sound_timer = self.registers.v[x],
            Instruction::AddIndex { x } => {
                self.registers.i = self.registers.i.wrapping_add(u16::from(self.registers.v[x]))
            }
            Instruction::LoadGlyph { x } => {
                self.registers.i = FONT_ADDR + u16::from(self.registers.v[x]) * FONT_GLYPH_SIZE
            }
            Instruction::StoreBcd { x } => self.bcd(x),
            Instruction::StoreRegisters { x } => self.stor(x),
            Instruction::LoadRegisters { x } => self.read(x),
            Instruction::Unknown(op) => trace!("ignoring unknown opcode {:04X}", op),
        }
    }

    /// if condition then pc += 2
    fn skip_if(&mut self, condition: bool) {
        if condition {
            self.registers.pc = self.registers.pc.wrapping_add(OPCODE_SIZE);
        }
    }

    /// STACK.push(PC); PC = addr
    /// The pc already points past the call, which is where the matching return resumes.
    fn call(&mut self, addr: u16) {
        self.registers.push_call(self.registers.pc);
        self.registers.pc = addr;
    }

    // For the flag setting arithmetic both operands are read before VF is written, and VF is
    // written before Vx, so with x == 0xF the result wins.

    /// Vx += Vy; VF = carry
    fn add_reg(&mut self, x: usize, y: usize) {
        let (res, carry) = self.registers.v[x].overflowing_add(self.registers.v[y]);
        self.registers.set_flag(carry);
        self.registers.v[x] = res;
    }

    /// Vx -= Vy; VF = borrow
    fn sub(&mut self, x: usize, y: usize) {
        let (vx, vy) = (self.registers.v[x], self.registers.v[y]);
        self.registers.set_flag(vx < vy);
        self.registers.v[x] = vx.wrapping_sub(vy);
    }

    /// Vx = Vy >> 1; VF = lsb(Vy)
    fn shr(&mut self, x: usize, y: usize) {
        let vy = self.registers.v[y];
        self.registers.set_flag(vy & 0x1 == 0x1);
        self.registers.v[x] = vy >> 1;
    }

    /// Vx = Vy - Vx; VF = borrow
    fn subn(&mut self, x: usize, y: usize) {
        let (vx, vy) = (self.registers.v[x], self.registers.v[y]);
        self.registers.set_flag(vx > vy);
        self.registers.v[x] = vy.wrapping_sub(vx);
    }

    /// Vx = Vy << 1; VF = msb(Vy)
    fn shl(&mut self, x: usize, y: usize) {
        let vy = self.registers.v[y];
        self.registers.set_flag(vy & 0x80 == 0x80);
        self.registers.v[x] = vy << 1;
    }

    /// draw_sprite(x=Vx y=Vy rows=mem[I..I+n]); VF = collision
    fn draw(&mut self, x: usize, y: usize, n: u8) {
        let mut sprite = [0; MAX_SPRITE_ROWS];
        let rows = &mut sprite[..n as usize];
        self.memory.read_into(self.registers.i, rows);
        let collided = self
            .bus
            .draw_sprite(self.registers.v[x], self.registers.v[y], rows);
        self.registers.set_flag(collided);
    }

    /// Vx = key
    /// Without a key the pc is moved back onto this opcode so it runs again next cycle.
    fn await_key(&mut self, x: usize) {
        let key = self.bus.current_key();
        if key < KEY_NOT_PRESSED {
            self.registers.v[x] = key;
        } else {
            self.registers.pc = self.registers.pc.wrapping_sub(OPCODE_SIZE);
        }
    }

    /// mem[I..I+3] = bcd(Vx)
    /// Store BCD repr of Vx in memory starting at address i
    fn bcd(&mut self, x: usize) {
        let value = self.registers.v[x];
        let i = self.registers.i;
        self.memory.write(i, value / 100);
        self.memory.write(i.wrapping_add(1), value / 10 % 10);
        self.memory.write(i.wrapping_add(2), value % 10);
    }

    /// mem[I..=I+x] = V0..=Vx
    fn stor(&mut self, x: usize) {
        for (offset, &value) in self.registers.v[..=x].iter().enumerate() {
            self.memory
                .write(self.registers.i.wrapping_add(offset as u16), value);
        }
    }

    /// V0..=Vx = mem[I..=I+x]
    fn read(&mut self, x: usize) {
        let i = self.registers.i;
        self.memory.read_into(i, &mut self.registers.v[..=x]);
    }
}
