use emu8::constants::KEY_NOT_PRESSED;

/// # Keypad
/// Tracks which of the 16 keys are held and the order they went down in.
///
/// The Chip-8 asks for a single key, so the most recently pressed key that is still held wins.
#[derive(Debug, Default)]
pub struct Keypad {
    held: Vec<u8>,
}

impl Keypad {
    pub fn new() -> Self {
        Keypad { held: Vec::new() }
    }

    /// Set the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was pressed
    pub fn key_press(&mut self, key: u8) {
        self.held.retain(|&k| k != key);
        self.held.push(key);
    }

    /// Unset the pressed status of key
    ///
    /// # Arguments
    /// * `key` the 8-bit representation of the key that was released
    pub fn key_release(&mut self, key: u8) {
        self.held.retain(|&k| k != key);
    }

    pub fn current_key(&self) -> u8 {
        self.held.last().copied().unwrap_or(KEY_NOT_PRESSED)
    }
}
