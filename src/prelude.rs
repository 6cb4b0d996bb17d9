pub use crate::event::Event;

pub use anyhow::{Context as _, Result};
pub use textmode::Textmode as _;
