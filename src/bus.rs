/// # Bus
/// Everything the Chip-8 needs but doesn't own goes through a bus supplied by its host.
///
/// - the display (clear and draw)
/// - the keypad (which key is held)
/// - a source of random bytes
///
/// All calls are synchronous; the Chip-8 uses the result before `execute` returns.
pub trait Bus {
    /// Turn every pixel off.
    fn clear_display(&mut self);

    /// XOR `sprite` onto the 64x32 display with its top left corner at `(x, y)`, wrapping around
    /// the edges. Each byte of `sprite` is one row of 8 pixels, most significant bit leftmost.
    ///
    /// Returns whether any pixel was turned off.
    fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool;

    /// The held key `0x0..=0xF`, or `KEY_NOT_PRESSED` when there isn't one.
    fn current_key(&mut self) -> u8;

    /// A uniformly distributed byte.
    fn random_byte(&mut self) -> u8;
}

impl<B: Bus + ?Sized> Bus for &mut B {
    fn clear_display(&mut self) {
        (**self).clear_display()
    }

    fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        (**self).draw_sprite(x, y, sprite)
    }

    fn current_key(&mut self) -> u8 {
        (**self).current_key()
    }

    fn random_byte(&mut self) -> u8 {
        (**self).random_byte()
    }
}

impl<B: Bus + ?Sized> Bus for Box<B> {
    fn clear_display(&mut self) {
        (**self).clear_display()
    }

    fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        (**self).draw_sprite(x, y, sprite)
    }

    fn current_key(&mut self) -> u8 {
        (**self).current_key()
    }

    fn random_byte(&mut self) -> u8 {
        (**self).random_byte()
    }
}
