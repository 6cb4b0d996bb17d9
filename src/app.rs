use crate::prelude::*;

pub async fn main(
    config: crate::config::Config,
    offset: time::UtcOffset,
) -> Result<i32> {
    let mut input = textmode::blocking::Input::new()?;
    let mut output = textmode::Output::new().await?;

    // avoid the guards getting stuck in a task that doesn't run to
    // completion
    let _input_guard = input.take_raw_guard();
    let _output_guard = output.take_screen_guard();

    let (event_w, event_r) = crate::event::channel();

    let _inputs = crate::inputs::Handler::new(input, event_w.clone())?;

    let size = crate::info::screen_size();
    output.set_size(size.0, size.1);
    let mut app = App::new(&config, offset, size, event_w);
    app.start();
    app.render(&mut output)?;
    output.hard_refresh().await?;

    while let Some(event) = event_r.recv().await {
        match app.handle_event(event) {
            Some(Action::Refresh) => {
                app.render(&mut output)?;
                output.refresh().await?;
            }
            Some(Action::HardRefresh) => {
                app.render(&mut output)?;
                output.hard_refresh().await?;
            }
            Some(Action::Resize(rows, cols)) => {
                output.set_size(rows, cols);
                app.render(&mut output)?;
                output.hard_refresh().await?;
            }
            Some(Action::Quit) => break,
            None => {}
        }
    }

    app.shutdown().await;
    Ok(0)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Refresh,
    HardRefresh,
    Resize(u16, u16),
    Quit,
}

pub struct App {
    size: (u16, u16),
    canvas: crate::terminal::Canvas,
    view: Option<crate::clock::ClockView>,
    mode: crate::clock::HourHandMode,
    offset: time::UtcOffset,
    driver: crate::driver::RepaintDriver,
}

impl App {
    pub fn new(
        config: &crate::config::Config,
        offset: time::UtcOffset,
        size: (u16, u16),
        event_w: crate::event::Writer,
    ) -> Self {
        let mut app = Self {
            size,
            canvas: crate::terminal::Canvas::for_screen(size.0, size.1),
            view: None,
            mode: config.hour_hand(),
            offset,
            driver: crate::driver::RepaintDriver::new(
                config.interval(),
                event_w,
            ),
        };
        app.resize(size);
        app
    }

    pub fn start(&mut self) {
        self.driver.start();
    }

    pub async fn shutdown(&mut self) {
        self.driver.stop();
        self.driver.join().await;
    }

    pub fn handle_event(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::Key(key) => self.handle_key(&key),
            Event::Resize(size) => {
                self.resize(size);
                Some(Action::Resize(size.0, size.1))
            }
            Event::Redraw => Some(Action::Refresh),
            Event::InputClosed => Some(Action::Quit),
        }
    }

    // the offset is fixed at startup, so a dst change shows up on restart
    pub fn render(&mut self, out: &mut impl textmode::Textmode) -> Result<()> {
        self.render_sample(out, crate::clock::TimeSample::now(self.offset))
    }

    fn render_sample(
        &mut self,
        out: &mut impl textmode::Textmode,
        sample: crate::clock::TimeSample,
    ) -> Result<()> {
        out.clear();
        out.write(&vt100::Parser::default().screen().input_mode_formatted());
        out.hide_cursor(true);

        self.canvas.clear();
        if let Some(view) = self.view {
            {
                let mut surface =
                    crate::terminal::CanvasSurface::new(&mut self.canvas)?;
                view.render(&mut surface, sample)?;
            }
            self.canvas.blit(out);
        } else {
            out.move_to(0, 0);
            out.set_fgcolor(textmode::color::RED);
            out.write_str("terminal too small");
            out.reset_attributes();
        }

        if self.paused() {
            out.move_to(self.size.0.saturating_sub(1), 0);
            out.set_fgcolor(textmode::color::YELLOW);
            out.write_str(&format!(
                "paused (redraws every {}), space resumes",
                crate::format::interval(self.driver.interval())
            ));
            out.reset_attributes();
        }
        Ok(())
    }

    fn handle_key(&mut self, key: &textmode::Key) -> Option<Action> {
        match key {
            textmode::Key::Char('q')
            | textmode::Key::Ctrl(b'c')
            | textmode::Key::Ctrl(b'd') => Some(Action::Quit),
            textmode::Key::Ctrl(b'l') => Some(Action::HardRefresh),
            textmode::Key::Char(' ') => {
                let state = self.driver.toggle();
                log::info!("repaint driver is now {:?}", state);
                Some(Action::Refresh)
            }
            _ => None,
        }
    }

    fn resize(&mut self, size: (u16, u16)) {
        self.size = size;
        self.canvas = crate::terminal::Canvas::for_screen(size.0, size.1);
        self.view = match crate::clock::ClockFace::fit(
            self.canvas.width(),
            self.canvas.height(),
        ) {
            Ok(face) => Some(crate::clock::ClockView::new(face, self.mode)),
            Err(e) => {
                log::warn!("not drawing the clock: {}", e);
                None
            }
        };
    }

    fn paused(&self) -> bool {
        self.driver.state() == crate::driver::State::Stopped
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn app(size: (u16, u16)) -> (App, crate::event::Reader) {
        let (event_w, event_r) = crate::event::channel();
        let app = App::new(
            &crate::config::Config::default(),
            time::UtcOffset::UTC,
            size,
            event_w,
        );
        (app, event_r)
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let (mut app, _event_r) = app((24, 80));
        for key in [
            textmode::Key::Char('q'),
            textmode::Key::Ctrl(b'c'),
            textmode::Key::Ctrl(b'd'),
        ] {
            assert_eq!(app.handle_event(Event::Key(key)), Some(Action::Quit));
        }
        assert_eq!(app.handle_event(Event::InputClosed), Some(Action::Quit));
        assert_eq!(
            app.handle_event(Event::Key(textmode::Key::Ctrl(b'l'))),
            Some(Action::HardRefresh)
        );
        assert_eq!(
            app.handle_event(Event::Key(textmode::Key::Char('x'))),
            None
        );
        assert_eq!(app.handle_event(Event::Redraw), Some(Action::Refresh));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause() {
        let (mut app, _event_r) = app((24, 80));
        assert!(app.paused());
        app.start();
        assert!(!app.paused());

        let space = || Event::Key(textmode::Key::Char(' '));
        assert_eq!(app.handle_event(space()), Some(Action::Refresh));
        assert!(app.paused());
        assert_eq!(app.handle_event(space()), Some(Action::Refresh));
        assert!(!app.paused());

        app.shutdown().await;
        assert!(app.paused());
    }

    #[tokio::test]
    async fn test_resize() {
        let (mut app, _event_r) = app((24, 80));
        let face = *app.view.unwrap().face();
        assert_eq!(face.center(), crate::clock::Point::new(40, 24));

        assert_eq!(
            app.handle_event(Event::Resize((50, 200))),
            Some(Action::Resize(50, 200))
        );
        let face = *app.view.unwrap().face();
        assert_eq!(face.center(), crate::clock::Point::new(100, 50));
        assert_eq!(app.canvas.width(), 200);
        assert_eq!(app.canvas.height(), 100);

        app.handle_event(Event::Resize((3, 200)));
        assert!(app.view.is_none());

        app.handle_event(Event::Resize((24, 80)));
        assert!(app.view.is_some());
    }

    #[tokio::test]
    async fn test_hour_hand_mode() {
        let (event_w, _event_r) = crate::event::channel();
        let mut config = crate::config::Config::default();
        config.apply_overrides(None, true).unwrap();
        let app = App::new(&config, time::UtcOffset::UTC, (24, 80), event_w);
        assert_eq!(
            app.view.unwrap().mode(),
            crate::clock::HourHandMode::Unmodded
        );
    }
}
