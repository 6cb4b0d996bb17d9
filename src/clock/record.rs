use super::{Color, Font, Point, Rect, RenderError, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Color(Color),
    Font(Font),
    Stroke(u32),
    FillEllipse(Rect),
    DrawEllipse(Rect),
    Line(Point, Point),
    Text(String, Point),
}

// captures draw calls instead of rasterizing them
#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    fail_at: Option<usize>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    // the draw call at this index (and every one after it) reports the
    // surface as gone
    pub fn failing_at(idx: usize) -> Self {
        Self {
            calls: vec![],
            fail_at: Some(idx),
        }
    }

    pub fn lines(&self) -> Vec<(Color, Point, Point)> {
        let mut color = None;
        let mut lines = vec![];
        for call in &self.calls {
            match call {
                Call::Color(c) => color = Some(*c),
                Call::Line(from, to) => {
                    lines.push((color.unwrap(), *from, *to));
                }
                _ => {}
            }
        }
        lines
    }

    fn draw(&mut self, call: Call) -> Result<(), RenderError> {
        if self.fail_at.map_or(false, |idx| self.calls.len() >= idx) {
            return Err(RenderError::SurfaceUnavailable);
        }
        self.calls.push(call);
        Ok(())
    }
}

impl Surface for Recorder {
    fn set_color(&mut self, color: Color) {
        self.calls.push(Call::Color(color));
    }

    fn set_font(&mut self, font: Font) {
        self.calls.push(Call::Font(font));
    }

    fn set_stroke_width(&mut self, width: u32) -> Result<(), RenderError> {
        if width == 0 {
            return Err(RenderError::InvalidStroke(width));
        }
        self.calls.push(Call::Stroke(width));
        Ok(())
    }

    fn fill_ellipse(&mut self, bounds: Rect) -> Result<(), RenderError> {
        self.draw(Call::FillEllipse(bounds))
    }

    fn draw_ellipse(&mut self, bounds: Rect) -> Result<(), RenderError> {
        self.draw(Call::DrawEllipse(bounds))
    }

    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
    ) -> Result<(), RenderError> {
        self.draw(Call::Line(from, to))
    }

    fn draw_text(&mut self, text: &str, at: Point) -> Result<(), RenderError> {
        self.draw(Call::Text(text.to_string(), at))
    }
}
