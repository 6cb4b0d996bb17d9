#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[cfg(test)]
    pub fn distance(self, other: Self) -> f64 {
        f64::from(self.x - other.x).hypot(f64::from(self.y - other.y))
    }
}

// bounding box of an ellipse, the same way ovals are specified by most
// paint apis
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn circle(center: Point, diameter: u32) -> Self {
        let half = i32::try_from(diameter / 2).unwrap_or(i32::MAX);
        Self {
            x: center.x.saturating_sub(half),
            y: center.y.saturating_sub(half),
            width: diameter,
            height: diameter,
        }
    }

    #[cfg(test)]
    pub fn center(&self) -> Point {
        let half_w = i32::try_from(self.width / 2).unwrap_or(i32::MAX);
        let half_h = i32::try_from(self.height / 2).unwrap_or(i32::MAX);
        Point::new(
            self.x.saturating_add(half_w),
            self.y.saturating_add(half_h),
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Background,
    Accent,
    Text,
    SecondHand,
    MinuteHand,
    HourHand,
}

impl Color {
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Background => (0x00, 0x00, 0x00),
            Self::Accent => (0x00, 0xff, 0xff),
            Self::Text => (0xff, 0xff, 0xff),
            Self::SecondHand => (0x80, 0x80, 0x80),
            Self::MinuteHand => (0xff, 0x00, 0x00),
            Self::HourHand => (0x00, 0x00, 0xff),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Font {
    pub name: &'static str,
    pub bold: bool,
    pub size: f64,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            name: "serif",
            bold: false,
            size: 12.0,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("drawing surface is unavailable")]
    SurfaceUnavailable,

    #[error("a {width}x{height} surface is too small for a clock face")]
    SurfaceTooSmall { width: u32, height: u32 },

    #[error("invalid stroke width {0}")]
    InvalidStroke(u32),
}

/// The set of drawing operations a clock frame needs.
///
/// Color, font and stroke width are sticky: they apply to every following
/// call until changed again.
pub trait Surface {
    fn set_color(&mut self, color: Color);
    fn set_font(&mut self, font: Font);
    fn set_stroke_width(&mut self, width: u32) -> Result<(), RenderError>;

    fn fill_ellipse(&mut self, bounds: Rect) -> Result<(), RenderError>;
    fn draw_ellipse(&mut self, bounds: Rect) -> Result<(), RenderError>;
    fn draw_line(&mut self, from: Point, to: Point)
        -> Result<(), RenderError>;
    // baseline-left anchored
    fn draw_text(&mut self, text: &str, at: Point)
        -> Result<(), RenderError>;
}

#[test]
fn test_circle_bounds() {
    let rect = Rect::circle(Point::new(310, 175), 5);
    assert_eq!(
        rect,
        Rect {
            x: 308,
            y: 173,
            width: 5,
            height: 5
        }
    );
    assert_eq!(rect.center(), Point::new(310, 175));

    let rect = Rect::circle(Point::new(175, 175), 300);
    assert_eq!((rect.x, rect.y), (25, 25));
    assert_eq!(rect.center(), Point::new(175, 175));
}

#[test]
fn test_distance() {
    assert!((Point::new(0, 0).distance(Point::new(3, 4)) - 5.0).abs() < 1e-9);
    assert!(Point::new(7, 7).distance(Point::new(7, 7)).abs() < 1e-9);
}
