use crate::bus::Bus;
use crate::constants::KEY_NOT_PRESSED;

/// A request the Chip-8 made of its bus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    Clear,
    Draw { x: u8, y: u8, sprite: Vec<u8> },
    Key,
    Random,
}

/// Records every request and answers with canned values.
pub struct TestBus {
    pub requests: Vec<Request>,
    pub key: u8,
    pub random: u8,
    pub collision: bool,
}

impl TestBus {
    pub fn new() -> Self {
        TestBus {
            requests: Vec::new(),
            key: KEY_NOT_PRESSED,
            random: 0,
            collision: false,
        }
    }

    pub fn last(&self) -> Option<&Request> {
        self.requests.last()
    }
}

impl Bus for TestBus {
    fn clear_display(&mut self) {
        self.requests.push(Request::Clear);
    }

    fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        self.requests.push(Request::Draw {
            x,
            y,
            sprite: sprite.to_vec(),
        });
        self.collision
    }

    fn current_key(&mut self) -> u8 {
        self.requests.push(Request::Key);
        self.key
    }

    fn random_byte(&mut self) -> u8 {
        self.requests.push(Request::Random);
        self.random
    }
}
