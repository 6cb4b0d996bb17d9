use crate::prelude::*;

pub struct Handler;

impl Handler {
    pub fn new(
        mut input: textmode::blocking::Input,
        event_w: crate::event::Writer,
    ) -> Self {
        std::thread::spawn(move || {
            loop {
                match input.read_key() {
                    Ok(Some(key)) => {
                        if !event_w.send(Event::Key(key)) {
                            return;
                        }
                    }
                    Ok(None) => break,
                    Err(e) => {
                        log::error!("failed to read from the terminal: {}", e);
                        break;
                    }
                }
            }
            event_w.send(Event::InputClosed);
        });
        Self
    }
}
