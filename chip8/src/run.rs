use std::error::Error;
use std::time::{Duration, Instant};

use log::{debug, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use display::Display;
use emu8::constants::TIMER_HZ;
use emu8::Chip8;

use crate::console::Console;
use crate::keymap::keymap;
use crate::Opt;

pub fn run(opt: Opt) -> Result<(), Box<dyn Error>> {
    let mut chip8 = Chip8::new(Console::new(opt.seed));

    // Load ROM
    chip8.load_program(&opt.rom)?;
    info!("loaded {}", opt.rom.display());

    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init()?;
    let mut display: Display = Display::new(&sdl, opt.scale)?;
    let mut events = sdl.event_pump()?;

    // Set initial timing
    let frame_time = Duration::from_secs(1) / TIMER_HZ;
    let mut last_frame: Instant = Instant::now();

    // Whether or not the default clock speed should be respected
    let mut fast_forward: bool = false;
    let mut sounding: bool = false;

    'event: loop {
        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.bus_mut().keypad_mut().key_press(kc),
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Escape, _) => break 'event,
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => chip8.bus_mut().keypad_mut().key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        // Update state
        for _ in 0..opt.cycles_per_frame {
            chip8.step();
        }

        // If the frame changed, render it
        if let Some(frame) = chip8.bus_mut().take_frame() {
            display.render(frame)?;
        }

        chip8.tick_timers();
        if chip8.sound_active() != sounding {
            sounding = chip8.sound_active();
            debug!("sound {}", if sounding { "on" } else { "off" });
        }

        // Handle timing
        let elapsed_frame_time = last_frame.elapsed();
        if !fast_forward && frame_time > elapsed_frame_time {
            std::thread::sleep(frame_time - elapsed_frame_time);
        }
        last_frame = Instant::now();
    }

    info!("quitting");
    Ok(())
}
