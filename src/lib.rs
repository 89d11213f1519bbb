pub use bus::Bus;
pub use chip8::Chip8;
pub use error::LoadError;
pub use framebuffer::FrameBuffer;
pub use instruction::Instruction;
pub use memory::Memory;
pub use opcode::Opcode;
pub use registers::RegisterFile;

mod bus;
mod chip8;
pub mod constants;
mod error;
mod framebuffer;
mod instruction;
mod memory;
mod opcode;
mod operations;
mod registers;
#[cfg(test)]
mod test_bus;
