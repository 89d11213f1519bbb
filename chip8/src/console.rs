use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use emu8::{Bus, FrameBuffer};

use crate::keypad::Keypad;

/// # Console
/// The hardware around the Chip-8: a screen, a keypad and a random number generator.
///
/// The screen is only redrawn when `take_frame` reports it changed.
pub struct Console {
    frame: FrameBuffer,
    dirty: bool,
    keypad: Keypad,
    rng: StdRng,
}

impl Console {
    /// # Arguments
    /// * `seed` makes `random_byte` repeatable when given
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Console {
            frame: FrameBuffer::new(),
            // draw the blank screen once at startup
            dirty: true,
            keypad: Keypad::new(),
            rng,
        }
    }

    pub fn keypad_mut(&mut self) -> &mut Keypad {
        &mut self.keypad
    }

    /// Returns the FrameBuffer if the display should be redrawn
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.dirty {
            self.dirty = false;
            Some(&self.frame)
        } else {
            None
        }
    }
}

impl Bus for Console {
    fn clear_display(&mut self) {
        self.frame.clear();
        self.dirty = true;
    }

    fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        self.dirty = true;
        self.frame.draw_sprite(x, y, sprite)
    }

    fn current_key(&mut self) -> u8 {
        self.keypad.current_key()
    }

    fn random_byte(&mut self) -> u8 {
        self.rng.gen()
    }
}
