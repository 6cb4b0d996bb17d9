use crate::prelude::*;

pub struct Handler;

impl Handler {
    pub fn new(event_w: crate::event::Writer) -> Result<Self> {
        let signals = tokio::signal::unix::signal(
            tokio::signal::unix::SignalKind::window_change(),
        )
        .context("couldn't listen for window size changes")?;
        tokio::spawn(Self::task(signals, event_w));
        Ok(Self)
    }

    async fn task(
        mut signals: tokio::signal::unix::Signal,
        event_w: crate::event::Writer,
    ) {
        while signals.recv().await.is_some() {
            let size = crate::info::screen_size();
            log::debug!("terminal resized to {}x{}", size.1, size.0);
            if !event_w.send(Event::Resize(size)) {
                break;
            }
        }
    }
}
