use crate::prelude::*;

mod signals;
mod stdin;

pub struct Handler {
    _signals: signals::Handler,
    _stdin: stdin::Handler,
}

impl Handler {
    pub fn new(
        input: textmode::blocking::Input,
        event_w: crate::event::Writer,
    ) -> Result<Self> {
        Ok(Self {
            _signals: signals::Handler::new(event_w.clone())?,
            _stdin: stdin::Handler::new(input, event_w),
        })
    }
}
