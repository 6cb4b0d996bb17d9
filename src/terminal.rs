use crate::clock::{Color, Font, Point, Rect, RenderError, Surface};

use embedded_graphics::primitives::Primitive as _;
use embedded_graphics::Drawable as _;
use unicode_width::{UnicodeWidthChar as _, UnicodeWidthStr as _};

// upper half block: foreground paints the top pixel, background the bottom
const HALF_BLOCK: &str = "\u{2580}";

// average advance of a bold serif digit as a fraction of the point size
const GLYPH_ADVANCE: f64 = 0.45;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub row: u16,
    pub col: u16,
    pub text: String,
    pub color: Color,
    pub bold: bool,
}

/// A pixel grid backed by terminal cells, two pixels to a cell stacked
/// vertically.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Option<embedded_graphics::pixelcolor::Rgb888>>,
    text: Vec<TextRun>,
    // cells whose text was painted over by pixels drawn after it
    overdrawn: Vec<bool>,
}

impl Canvas {
    pub fn for_screen(rows: u16, cols: u16) -> Self {
        let width = u32::from(cols);
        let height = u32::from(rows) * 2;
        Self {
            width,
            height,
            pixels: vec![None; usize::from(rows) * 2 * usize::from(cols)],
            text: vec![],
            overdrawn: vec![false; usize::from(rows) * usize::from(cols)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self) {
        self.pixels.iter_mut().for_each(|pixel| *pixel = None);
        self.text.clear();
        self.overdrawn.iter_mut().for_each(|cell| *cell = false);
    }

    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> Option<embedded_graphics::pixelcolor::Rgb888> {
        self.index(x, y).and_then(|idx| self.pixels[idx])
    }

    #[cfg(test)]
    pub fn text(&self) -> &[TextRun] {
        &self.text
    }

    pub fn blit(&self, out: &mut impl textmode::Textmode) {
        let rows = self.height / 2;
        for row in 0..rows {
            for col in 0..self.width {
                let (x, y) = (to_i32(col), to_i32(row * 2));
                let top = self.pixel(x, y);
                let bottom = self.pixel(x, y + 1);
                if top.is_none() && bottom.is_none() {
                    continue;
                }
                out.move_to(to_u16(row), to_u16(col));
                if let Some(top) = top {
                    out.set_fgcolor(term_color(top));
                }
                if let Some(bottom) = bottom {
                    out.set_bgcolor(term_color(bottom));
                }
                if top.is_some() {
                    out.write_str(HALF_BLOCK);
                } else {
                    out.write_str(" ");
                }
                out.reset_attributes();
            }
        }

        for run in &self.text {
            let (r, g, b) = run.color.rgb();
            let mut col = run.col;
            for c in run.text.chars() {
                let width = c.width().unwrap_or(0);
                if width == 0 {
                    continue;
                }
                if u32::from(col) + to_u32(width) > self.width {
                    break;
                }
                if self.text_hidden(run.row, col, width) {
                    col += to_u16(to_u32(width));
                    continue;
                }
                out.move_to(run.row, col);
                out.set_fgcolor(textmode::Color::Rgb(r, g, b));
                if let Some(bg) =
                    self.pixel(i32::from(col), i32::from(run.row) * 2 + 1)
                {
                    out.set_bgcolor(term_color(bg));
                }
                if run.bold {
                    out.write(b"\x1b[1m");
                }
                out.write_str(&c.to_string());
                out.reset_attributes();
                col += to_u16(to_u32(width));
            }
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        usize::try_from(y * self.width + x).ok()
    }

    fn text_hidden(&self, row: u16, col: u16, width: usize) -> bool {
        (0..width).any(|i| {
            let col = u32::from(col) + to_u32(i);
            col < self.width
                && usize::try_from(u32::from(row) * self.width + col)
                    .ok()
                    .and_then(|idx| self.overdrawn.get(idx).copied())
                    .unwrap_or(false)
        })
    }

    fn cover_text(&mut self, x: u32, y: u32) {
        let row = y / 2;
        let covered = self.text.iter().any(|run| {
            let start = u32::from(run.col);
            u32::from(run.row) == row
                && x >= start
                && x < start + to_u32(run.text.width())
        });
        if covered {
            if let Some(cell) = usize::try_from(row * self.width + x)
                .ok()
                .and_then(|idx| self.overdrawn.get_mut(idx))
            {
                *cell = true;
            }
        }
    }

    fn add_text(
        &mut self,
        text: &str,
        col: i32,
        y: i32,
        color: Color,
        bold: bool,
    ) {
        // text sits on its baseline, so the glyphs occupy the cell just
        // above the anchor pixel
        let row = (y - 1).div_euclid(2);
        let (row, col) = match (u16::try_from(row), u16::try_from(col)) {
            (Ok(row), Ok(col)) => (row, col),
            _ => return,
        };
        if u32::from(row) >= self.height / 2 {
            return;
        }
        self.text.push(TextRun {
            row,
            col,
            text: text.to_string(),
            color,
            bold,
        });
    }
}

impl embedded_graphics::geometry::OriginDimensions for Canvas {
    fn size(&self) -> embedded_graphics::geometry::Size {
        embedded_graphics::geometry::Size::new(self.width, self.height)
    }
}

impl embedded_graphics::draw_target::DrawTarget for Canvas {
    type Color = embedded_graphics::pixelcolor::Rgb888;
    type Error = std::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = embedded_graphics::Pixel<Self::Color>>,
    {
        for embedded_graphics::Pixel(point, color) in pixels {
            if let Some(idx) = self.index(point.x, point.y) {
                self.pixels[idx] = Some(color);
                if !self.text.is_empty() {
                    // index succeeded, so both coordinates are in range
                    self.cover_text(
                        point.x.unsigned_abs(),
                        point.y.unsigned_abs(),
                    );
                }
            }
        }
        Ok(())
    }
}

/// Paints clock frames onto a `Canvas`.
pub struct CanvasSurface<'a> {
    canvas: &'a mut Canvas,
    color: Color,
    font: Font,
    stroke: u32,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(canvas: &'a mut Canvas) -> Result<Self, RenderError> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(RenderError::SurfaceUnavailable);
        }
        Ok(Self {
            canvas,
            color: Color::Text,
            font: Font::default(),
            stroke: 1,
        })
    }

    fn rgb(&self) -> embedded_graphics::pixelcolor::Rgb888 {
        let (r, g, b) = self.color.rgb();
        embedded_graphics::pixelcolor::Rgb888::new(r, g, b)
    }
}

impl Surface for CanvasSurface<'_> {
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    // glyphs are whatever the terminal draws, the size only places the text
    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn set_stroke_width(&mut self, width: u32) -> Result<(), RenderError> {
        if width == 0 {
            return Err(RenderError::InvalidStroke(width));
        }
        self.stroke = width;
        Ok(())
    }

    fn fill_ellipse(&mut self, bounds: Rect) -> Result<(), RenderError> {
        ellipse(bounds)
            .into_styled(
                embedded_graphics::primitives::PrimitiveStyle::with_fill(
                    self.rgb(),
                ),
            )
            .draw(&mut *self.canvas)
            .map_err(|never| match never {})
    }

    fn draw_ellipse(&mut self, bounds: Rect) -> Result<(), RenderError> {
        ellipse(bounds)
            .into_styled(
                embedded_graphics::primitives::PrimitiveStyle::with_stroke(
                    self.rgb(),
                    self.stroke,
                ),
            )
            .draw(&mut *self.canvas)
            .map_err(|never| match never {})
    }

    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
    ) -> Result<(), RenderError> {
        embedded_graphics::primitives::Line::new(
            embedded_graphics::geometry::Point::new(from.x, from.y),
            embedded_graphics::geometry::Point::new(to.x, to.y),
        )
        .into_styled(embedded_graphics::primitives::PrimitiveStyle::with_stroke(
            self.rgb(),
            self.stroke,
        ))
        .draw(&mut *self.canvas)
        .map_err(|never| match never {})
    }

    // the anchor is the left end of the baseline for the requested font,
    // which the terminal can't honor, so center the run on where that
    // font's text would have been centered
    fn draw_text(&mut self, text: &str, at: Point) -> Result<(), RenderError> {
        let extent = f64::from(to_u32(text.chars().count()))
            * GLYPH_ADVANCE
            * self.font.size;
        let middle = to_offset(f64::from(at.x) + extent / 2.0);
        let col = middle - to_i32(to_u32(text.width() / 2));
        log::trace!(
            "drawing {:?} ({} {}pt) at column {}",
            text,
            self.font.name,
            self.font.size,
            col
        );
        let (color, bold) = (self.color, self.font.bold);
        self.canvas.add_text(text, col, at.y, color, bold);
        Ok(())
    }
}

fn ellipse(bounds: Rect) -> embedded_graphics::primitives::Ellipse {
    embedded_graphics::primitives::Ellipse::new(
        embedded_graphics::geometry::Point::new(bounds.x, bounds.y),
        embedded_graphics::geometry::Size::new(bounds.width, bounds.height),
    )
}

fn term_color(color: embedded_graphics::pixelcolor::Rgb888) -> textmode::Color {
    use embedded_graphics::pixelcolor::RgbColor as _;
    textmode::Color::Rgb(color.r(), color.g(), color.b())
}

#[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
fn to_offset(f: f64) -> i32 {
    f.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

fn to_i32(n: u32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

fn to_u16(n: u32) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
