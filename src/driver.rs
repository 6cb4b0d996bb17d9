use crate::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Stopped,
    Running,
}

/// Periodically asks for the clock to be redrawn.
///
/// The repaint loop only ever sends `Event::Redraw`; the drawing itself
/// happens wherever the event reader lives. Stopping is cooperative: the
/// loop notices the state change when it next wakes up, so a stop takes
/// effect within one interval.
pub struct RepaintDriver {
    interval: std::time::Duration,
    event_w: crate::event::Writer,
    state: tokio::sync::watch::Sender<State>,
    tasks: Vec<tokio::task::JoinHandle<()>>,
}

impl RepaintDriver {
    pub fn new(
        interval: std::time::Duration,
        event_w: crate::event::Writer,
    ) -> Self {
        let (state, _) = tokio::sync::watch::channel(State::Stopped);
        Self {
            interval,
            event_w,
            state,
            tasks: vec![],
        }
    }

    pub fn state(&self) -> State {
        *self.state.borrow()
    }

    pub fn interval(&self) -> std::time::Duration {
        self.interval
    }

    pub fn start(&mut self) {
        if self.state() == State::Running {
            return;
        }
        self.state.send_replace(State::Running);
        // loops from an earlier start may still be sleeping through their
        // last interval, keep them around so join can wait for them
        self.tasks.retain(|task| !task.is_finished());
        self.tasks.push(tokio::spawn(Self::task(
            self.interval,
            self.state.subscribe(),
            self.event_w.clone(),
        )));
        log::debug!(
            "repaint driver started ({})",
            crate::format::interval(self.interval)
        );
    }

    pub fn stop(&mut self) {
        if self.state() == State::Stopped {
            return;
        }
        self.state.send_replace(State::Stopped);
        log::debug!("repaint driver stopped");
    }

    pub fn toggle(&mut self) -> State {
        match self.state() {
            State::Running => self.stop(),
            State::Stopped => self.start(),
        }
        self.state()
    }

    pub async fn join(&mut self) {
        for task in self.tasks.drain(..) {
            if let Err(e) = task.await {
                log::warn!("repaint task failed: {}", e);
            }
        }
    }

    async fn task(
        interval: std::time::Duration,
        state_r: tokio::sync::watch::Receiver<State>,
        event_w: crate::event::Writer,
    ) {
        let mut interval = tokio::time::interval_at(
            tokio::time::Instant::now() + interval,
            interval,
        );
        interval
            .set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            // any change at all means this loop has been stopped, even if
            // a later start already flipped the state back to running
            if state_r.has_changed().unwrap_or(true) {
                break;
            }
            if !event_w.send(Event::Redraw) {
                log::trace!("redraw request dropped, nobody is listening");
            }
        }
    }
}
