#[derive(Debug)]
pub enum Event {
    Key(textmode::Key),
    Resize((u16, u16)),
    Redraw,
    InputClosed,
}

pub fn channel() -> (Writer, Reader) {
    let (event_w, event_r) = tokio::sync::mpsc::unbounded_channel();
    (Writer::new(event_w), Reader::new(event_r))
}

#[derive(Clone)]
pub struct Writer(tokio::sync::mpsc::UnboundedSender<Event>);

impl Writer {
    pub fn new(event_w: tokio::sync::mpsc::UnboundedSender<Event>) -> Self {
        Self(event_w)
    }

    // fire and forget: once the reader is gone there is nobody left to
    // redraw for, so a failed send isn't an error
    pub fn send(&self, event: Event) -> bool {
        self.0.send(event).is_ok()
    }
}

pub struct Reader {
    pending: std::sync::Arc<tokio::sync::Mutex<Pending>>,
    cvar: std::sync::Arc<tokio::sync::Notify>,
}

impl Reader {
    pub fn new(
        mut input: tokio::sync::mpsc::UnboundedReceiver<Event>,
    ) -> Self {
        let pending = std::sync::Arc::new(tokio::sync::Mutex::new(
            Pending::new(),
        ));
        let cvar = std::sync::Arc::new(tokio::sync::Notify::new());
        {
            let pending = std::sync::Arc::clone(&pending);
            let cvar = std::sync::Arc::clone(&cvar);
            tokio::spawn(async move {
                while let Some(event) = input.recv().await {
                    pending.lock().await.new_event(Some(event));
                    cvar.notify_one();
                }
                pending.lock().await.new_event(None);
                cvar.notify_one();
            });
        }
        Self { pending, cvar }
    }

    pub async fn recv(&self) -> Option<Event> {
        loop {
            {
                let mut pending = self.pending.lock().await;
                if pending.has_event() {
                    return pending.get_event();
                }
            }
            self.cvar.notified().await;
        }
    }
}

#[derive(Default)]
struct Pending {
    key: std::collections::VecDeque<textmode::Key>,
    size: Option<(u16, u16)>,
    redraw: bool,
    input_closed: bool,
    done: bool,
}

impl Pending {
    fn new() -> Self {
        Self::default()
    }

    fn has_event(&self) -> bool {
        self.done
            || !self.key.is_empty()
            || self.size.is_some()
            || self.redraw
            || self.input_closed
    }

    fn get_event(&mut self) -> Option<Event> {
        if let Some(key) = self.key.pop_front() {
            return Some(Event::Key(key));
        }
        if let Some(size) = self.size.take() {
            return Some(Event::Resize(size));
        }
        if self.input_closed {
            self.input_closed = false;
            return Some(Event::InputClosed);
        }
        // any number of queued redraws collapse into one, since every frame
        // is rebuilt from scratch anyway
        if self.redraw {
            self.redraw = false;
            return Some(Event::Redraw);
        }
        if self.done {
            return None;
        }
        unreachable!()
    }

    fn new_event(&mut self, event: Option<Event>) {
        match event {
            Some(Event::Key(key)) => self.key.push_back(key),
            Some(Event::Resize(size)) => self.size = Some(size),
            Some(Event::Redraw) => self.redraw = true,
            Some(Event::InputClosed) => self.input_closed = true,
            None => self.done = true,
        }
    }
}

#[test]
fn test_coalesce() {
    let mut pending = Pending::new();
    assert!(!pending.has_event());

    pending.new_event(Some(Event::Redraw));
    pending.new_event(Some(Event::Resize((24, 80))));
    pending.new_event(Some(Event::Redraw));
    pending.new_event(Some(Event::Key(textmode::Key::Char('q'))));
    pending.new_event(Some(Event::Resize((30, 100))));
    pending.new_event(Some(Event::Redraw));
    pending.new_event(None);

    assert!(matches!(
        pending.get_event(),
        Some(Event::Key(textmode::Key::Char('q')))
    ));
    assert!(matches!(pending.get_event(), Some(Event::Resize((30, 100)))));
    assert!(matches!(pending.get_event(), Some(Event::Redraw)));
    assert!(pending.has_event());
    assert!(pending.get_event().is_none());
    assert!(pending.get_event().is_none());
}

#[tokio::test]
async fn test_channel_closes() {
    let (event_w, event_r) = channel();
    assert!(event_w.send(Event::Redraw));
    assert!(event_w.send(Event::Redraw));
    assert!(event_w.send(Event::Redraw));
    drop(event_w);

    let mut redraws = 0;
    while let Some(event) = event_r.recv().await {
        assert!(matches!(event, Event::Redraw));
        redraws += 1;
    }
    assert!((1..=3).contains(&redraws));
}
