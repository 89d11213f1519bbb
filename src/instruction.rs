use crate::opcode::Opcode;

/// A decoded opcode.
///
/// Registers are indices `0x0..=0xF`, addresses are 12 bits and `byte` is an immediate value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0` clear the display
    Clear,
    /// `00EE` return from subroutine
    Return,
    /// `1NNN` PC = addr
    Jump { addr: u16 },
    /// `2NNN` STACK.push(PC); PC = addr
    Call { addr: u16 },
    /// `3XNN` if Vx == byte then skip
    SkipEq { x: usize, byte: u8 },
    /// `4XNN` if Vx != byte then skip
    SkipNe { x: usize, byte: u8 },
    /// `5XY0` if Vx == Vy then skip
    SkipRegEq { x: usize, y: usize },
    /// `6XNN` Vx = byte
    Load { x: usize, byte: u8 },
    /// `7XNN` Vx += byte; VF untouched
    Add { x: usize, byte: u8 },
    /// `8XY0` Vx = Vy
    Move { x: usize, y: usize },
    /// `8XY1` Vx |= Vy
    Or { x: usize, y: usize },
    /// `8XY2` Vx &= Vy
    And { x: usize, y: usize },
    /// `8XY3` Vx ^= Vy
    Xor { x: usize, y: usize },
    /// `8XY4` Vx += Vy; VF = carry
    AddReg { x: usize, y: usize },
    /// `8XY5` Vx -= Vy; VF = borrow
    Sub { x: usize, y: usize },
    /// `8XY6` Vx = Vy >> 1; VF = shifted out bit
    ShiftRight { x: usize, y: usize },
    /// `8XY7` Vx = Vy - Vx; VF = borrow
    SubN { x: usize, y: usize },
    /// `8XYE` Vx = Vy << 1; VF = shifted out bit
    ShiftLeft { x: usize, y: usize },
    /// `9XY0` if Vx != Vy then skip
    SkipRegNe { x: usize, y: usize },
    /// `ANNN` I = addr
    LoadIndex { addr: u16 },
    /// `BNNN` PC = V0 + addr
    JumpOffset { addr: u16 },
    /// `CXNN` Vx = random & byte
    Random { x: usize, byte: u8 },
    /// `DXYN` draw the n byte sprite at I to (Vx, Vy); VF = collision
    Draw { x: usize, y: usize, n: u8 },
    /// `EX9E` if key == Vx then skip
    SkipKeyPressed { x: usize },
    /// `EXA1` if key != Vx then skip
    SkipKeyNotPressed { x: usize },
    /// `FX07` Vx = DT
    LoadDelay { x: usize },
    /// `FX0A` Vx = key, waiting until there is one
    AwaitKey { x: usize },
    /// `FX15` DT = Vx
    SetDelay { x: usize },
    /// `FX18` ST = Vx
    SetSound { x: usize },
    /// `FX1E` I += Vx
    AddIndex { x: usize },
    /// `FX29` I = address of the font glyph for Vx
    LoadGlyph { x: usize },
    /// `FX33` mem[I..I+3] = bcd(Vx)
    StoreBcd { x: usize },
    /// `FX55` mem[I..=I+x] = V0..=Vx
    StoreRegisters { x: usize },
    /// `FX65` V0..=Vx = mem[I..=I+x]
    LoadRegisters { x: usize },
    /// Anything else. Executes as a no-op.
    Unknown(u16),
}

impl Instruction {
    /// Selects the Instruction for a given Opcode
    pub fn decode(op: u16) -> Self {
        let x = op.x();
        let y = op.y();
        let byte = op.nn();
        let addr = op.nnn();
        match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Instruction::Clear,
            (0x0, 0x0, 0xE, 0xE) => Instruction::Return,
            (0x1, ..) => Instruction::Jump { addr },
            (0x2, ..) => Instruction::Call { addr },
            (0x3, ..) => Instruction::SkipEq { x, byte },
            (0x4, ..) => Instruction::SkipNe { x, byte },
            (0x5, .., 0x0) => Instruction::SkipRegEq { x, y },
            (0x6, ..) => Instruction::Load { x, byte },
            (0x7, ..) => Instruction::Add { x, byte },
            (0x8, .., 0x0) => Instruction::Move { x, y },
            (0x8, .., 0x1) => Instruction::Or { x, y },
            (0x8, .., 0x2) => Instruction::And { x, y },
            (0x8, .., 0x3) => Instruction::Xor { x, y },
            (0x8, .., 0x4) => Instruction::AddReg { x, y },
            (0x8, .., 0x5) => Instruction::Sub { x, y },
            (0x8, .., 0x6) => Instruction::ShiftRight { x, y },
            (0x8, .., 0x7) => Instruction::SubN { x, y },
            (0x8, .., 0xE) => Instruction::ShiftLeft { x, y },
            (0x9, .., 0x0) => Instruction::SkipRegNe { x, y },
            (0xA, ..) => Instruction::LoadIndex { addr },
            (0xB, ..) => Instruction::JumpOffset { addr },
            (0xC, ..) => Instruction::Random { x, byte },
            (0xD, .., n) => Instruction::Draw { x, y, n },
            (0xE, _, 0x9, 0xE) => Instruction::SkipKeyPressed { x },
            (0xE, _, 0xA, 0x1) => Instruction::SkipKeyNotPressed { x },
            (0xF, _, 0x0, 0x7) => Instruction::LoadDelay { x },
            (0xF, _, 0x0, 0xA) => Instruction::AwaitKey { x },
            (0xF, _, 0x1, 0x5) => Instruction::SetDelay { x },
            (0xF, _, 0x1, 0x8) => Instruction::SetSound { x },
            (0xF, _, 0x1, 0xE) => Instruction::AddIndex { x },
            (0xF, _, 0x2, 0x9) => Instruction::LoadGlyph { x },
            (0xF, _, 0x3, 0x3) => Instruction::StoreBcd { x },
            (0xF, _, 0x5, 0x5) => Instruction::StoreRegisters { x },
            (0xF, _, 0x6, 0x5) => Instruction::LoadRegisters { x },
            _ => Instruction::Unknown(op),
        }
    }
}
