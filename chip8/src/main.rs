use std::path::PathBuf;

use log::error;
use structopt::StructOpt;

mod console;
mod keymap;
mod keypad;
mod run;

/// Run a Chip-8 program in a window.
///
/// Set RUST_LOG=trace to see every executed opcode.
#[derive(Debug, StructOpt)]
#[structopt(name = "chip8")]
pub struct Opt {
    /// Raw Chip-8 program to load at 0x200
    #[structopt(parse(from_os_str))]
    rom: PathBuf,

    /// Opcodes executed between 60Hz timer ticks
    #[structopt(short, long, default_value = "10")]
    cycles_per_frame: u32,

    /// Size of each Chip-8 pixel on screen
    #[structopt(short, long, default_value = "10")]
    scale: u32,

    /// Seed for the random number generator, for repeatable runs
    #[structopt(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();

    let opt = Opt::from_args();
    if let Err(e) = run::run(opt) {
        error!("{}", e);
        std::process::exit(1);
    }
}
