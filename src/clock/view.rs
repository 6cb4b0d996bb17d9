use super::{
    ClockFace, Color, Font, Hand, HandAngle, HourHandMode, Point, Rect,
    RenderError, Surface, TimeSample,
};

const HOUR_MARKS: std::ops::RangeInclusive<u8> = 1..=12;

/// Draws one full frame of the clock.
///
/// Nothing is carried over between frames: the output depends only on the
/// face, the hour hand mode and the sample passed to `render`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClockView {
    face: ClockFace,
    mode: HourHandMode,
}

impl ClockView {
    pub fn new(face: ClockFace, mode: HourHandMode) -> Self {
        Self { face, mode }
    }

    #[cfg(test)]
    pub fn face(&self) -> &ClockFace {
        &self.face
    }

    #[cfg(test)]
    pub fn mode(&self) -> HourHandMode {
        self.mode
    }

    pub fn render(
        &self,
        surface: &mut impl Surface,
        sample: TimeSample,
    ) -> Result<(), RenderError> {
        self.render_structure(surface)?;
        self.render_digital(surface, sample)?;
        self.render_hands(surface, sample)
    }

    fn render_structure(
        &self,
        surface: &mut impl Surface,
    ) -> Result<(), RenderError> {
        let face_bounds =
            Rect::circle(self.face.center(), self.face.diameter());

        surface.set_color(Color::Background);
        surface.fill_ellipse(face_bounds)?;

        surface.set_color(Color::Accent);
        for mark in HOUR_MARKS {
            let pos = HandAngle::hour_mark(mark)
                .endpoint(self.face.center(), self.face.mark_radius());
            surface.fill_ellipse(Rect::circle(pos, self.face.mark_diameter()))?;
        }

        surface.set_stroke_width(self.face.border_width())?;
        surface.draw_ellipse(face_bounds)
    }

    fn render_digital(
        &self,
        surface: &mut impl Surface,
        sample: TimeSample,
    ) -> Result<(), RenderError> {
        surface.set_font(Font {
            name: "serif",
            bold: true,
            size: self.face.font_size(),
        });
        surface.set_color(Color::Text);
        surface.draw_text(&sample.digital(), self.face.text_anchor())
    }

    fn render_hands(
        &self,
        surface: &mut impl Surface,
        sample: TimeSample,
    ) -> Result<(), RenderError> {
        let center = self.face.center();
        let second = HandAngle::second(sample)
            .endpoint(center, self.face.hand_length(Hand::Second));
        let minute = HandAngle::minute(sample)
            .endpoint(center, self.face.hand_length(Hand::Minute));
        let hour = HandAngle::hour(sample, self.mode)
            .endpoint(center, self.face.hand_length(Hand::Hour));

        // the border stroke would otherwise carry over to the hands
        surface.set_stroke_width(1)?;

        surface.set_color(Color::SecondHand);
        surface.draw_line(center, second)?;

        surface.set_color(Color::MinuteHand);
        thick_line(surface, center, minute)?;

        surface.set_color(Color::HourHand);
        thick_line(surface, center, hour)
    }
}

// two 1px lines offset from the center, which reads as a bolder hand
// without needing a wider stroke
fn thick_line(
    surface: &mut impl Surface,
    center: Point,
    end: Point,
) -> Result<(), RenderError> {
    surface.draw_line(Point::new(center.x, center.y - 1), end)?;
    surface.draw_line(Point::new(center.x - 1, center.y), end)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::clock::record::{Call, Recorder};

    fn sample(hour: u8, minute: u8, second: u8) -> TimeSample {
        TimeSample::new(hour, minute, second).unwrap()
    }

    fn render(view: &ClockView, sample: TimeSample) -> Recorder {
        let mut recorder = Recorder::new();
        view.render(&mut recorder, sample).unwrap();
        recorder
    }

    fn reference() -> ClockView {
        ClockView::new(ClockFace::reference(), HourHandMode::TwelveHour)
    }

    #[test]
    fn test_frame_order() {
        let recorder = render(&reference(), sample(3, 7, 9));
        let calls = &recorder.calls;
        let face = Rect::circle(Point::new(175, 175), 300);

        assert_eq!(calls[0], Call::Color(Color::Background));
        assert_eq!(calls[1], Call::FillEllipse(face));
        assert_eq!(calls[2], Call::Color(Color::Accent));
        for call in &calls[3..15] {
            assert!(matches!(call, Call::FillEllipse(_)));
        }
        assert_eq!(calls[15], Call::Stroke(3));
        assert_eq!(calls[16], Call::DrawEllipse(face));
        assert!(matches!(
            calls[17],
            Call::Font(Font {
                name: "serif",
                bold: true,
                ..
            })
        ));
        assert_eq!(calls[18], Call::Color(Color::Text));
        assert_eq!(
            calls[19],
            Call::Text("03:07:09".to_string(), Point::new(75, 170))
        );
        assert_eq!(calls[20], Call::Stroke(1));
        assert_eq!(calls.len(), 29);
    }

    #[test]
    fn test_hour_marks() {
        let recorder = render(&reference(), sample(0, 0, 0));
        let center = Point::new(175, 175);
        let marks: Vec<_> = recorder.calls[3..15]
            .iter()
            .map(|call| match call {
                Call::FillEllipse(rect) => *rect,
                _ => unreachable!(),
            })
            .collect();

        for rect in &marks {
            assert_eq!((rect.width, rect.height), (5, 5));
            let dist = rect.center().distance(center);
            assert!((dist - 135.0).abs() < 1.5, "{:?} at {}", rect, dist);
        }
        // 3, 6, 9 and 12 o'clock sit exactly on the axes
        assert_eq!(marks[2].center(), Point::new(310, 175));
        assert_eq!(marks[5].center(), Point::new(175, 310));
        assert_eq!(marks[8].center(), Point::new(40, 175));
        assert_eq!(marks[11].center(), Point::new(175, 40));
    }

    #[test]
    fn test_hands() {
        let recorder = render(&reference(), sample(3, 0, 15));
        let center = Point::new(175, 175);
        assert_eq!(
            recorder.lines(),
            vec![
                (Color::SecondHand, center, Point::new(300, 175)),
                (Color::MinuteHand, Point::new(175, 174), Point::new(175, 65)),
                (Color::MinuteHand, Point::new(174, 175), Point::new(175, 65)),
                (Color::HourHand, Point::new(175, 174), Point::new(265, 175)),
                (Color::HourHand, Point::new(174, 175), Point::new(265, 175)),
            ]
        );
    }

    #[test]
    fn test_hand_lengths_ordered() {
        let recorder = render(&reference(), sample(7, 41, 23));
        let center = Point::new(175, 175);
        let lens: Vec<_> = recorder
            .lines()
            .iter()
            .map(|(_, _, to)| to.distance(center))
            .collect();
        assert!(lens[0] > lens[1]);
        assert!(lens[2] > lens[3]);
        assert!(lens[0] < 150.0);
    }

    #[test]
    fn test_idempotent() {
        let view = reference();
        let first = render(&view, sample(18, 45, 2));
        let second = render(&view, sample(18, 45, 2));
        assert_eq!(first.calls, second.calls);
    }

    #[test]
    fn test_second_rollover() {
        let view = reference();
        let center = Point::new(175, 175);
        let before = render(&view, sample(9, 15, 59)).lines()[0];
        let after = render(&view, sample(9, 16, 0)).lines()[0];

        assert_eq!(before.0, Color::SecondHand);
        assert_eq!(after.0, Color::SecondHand);
        assert_eq!(before.1, after.1);
        assert!((before.2.distance(center) - 125.0).abs() < 1.0);
        assert!((after.2.distance(center) - 125.0).abs() < 1.0);
        assert_eq!(after.2, Point::new(175, 50));
        assert_ne!(before.2, after.2);
    }

    #[test]
    fn test_unmodded_hour() {
        let legacy =
            ClockView::new(ClockFace::reference(), HourHandMode::Unmodded);
        for hour in 0..24 {
            let fixed = render(&reference(), sample(hour, 20, 0)).lines();
            let unmodded = render(&legacy, sample(hour, 20, 0)).lines();
            // an afternoon hour only overshoots by a full turn
            assert_eq!(fixed, unmodded);
        }
        let lines = render(&legacy, sample(15, 0, 0)).lines();
        assert_eq!(lines[3].2, Point::new(265, 175));
    }

    #[test]
    fn test_surface_failure() {
        let mut recorder = Recorder::failing_at(5);
        assert_eq!(
            reference().render(&mut recorder, sample(1, 2, 3)),
            Err(RenderError::SurfaceUnavailable)
        );
        assert!(!recorder
            .calls
            .iter()
            .any(|call| matches!(call, Call::Text(..))));
    }
}
