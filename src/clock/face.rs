use super::{Point, RenderError};

// everything below is laid out for a 150px face centered at (175, 175) in a
// 400x400 window, and scaled from there
const REFERENCE_RADIUS: f64 = 150.0;
const REFERENCE_MARGIN: f64 = 25.0;
const MARK_RADIUS: f64 = 135.0;
const MARK_DIAMETER: f64 = 5.0;
const BORDER_WIDTH: f64 = 3.0;
const SECOND_HAND: f64 = 125.0;
const MINUTE_HAND: f64 = 110.0;
const HOUR_HAND: f64 = 90.0;
const TEXT_OFFSET: (f64, f64) = (-100.0, -5.0);
const FONT_SIZE: f64 = 55.0;

const MIN_RADIUS: f64 = 4.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClockFace {
    center: Point,
    radius: f64,
}

impl ClockFace {
    #[cfg(test)]
    pub fn new(center: Point, radius: f64) -> Result<Self, RenderError> {
        if !radius.is_finite() || radius < MIN_RADIUS {
            let side = to_pixels(radius * 2.0);
            return Err(RenderError::SurfaceTooSmall {
                width: side,
                height: side,
            });
        }
        Ok(Self { center, radius })
    }

    #[cfg(test)]
    pub fn reference() -> Self {
        Self {
            center: Point::new(175, 175),
            radius: REFERENCE_RADIUS,
        }
    }

    // largest face that fits, keeping the reference window's proportion
    // of margin around the border
    pub fn fit(width: u32, height: u32) -> Result<Self, RenderError> {
        let side = f64::from(width.min(height));
        let radius = side / 2.0 * REFERENCE_RADIUS
            / (REFERENCE_RADIUS + REFERENCE_MARGIN);
        if radius < MIN_RADIUS {
            return Err(RenderError::SurfaceTooSmall { width, height });
        }
        let center = Point::new(
            i32::try_from(width / 2).unwrap_or(i32::MAX),
            i32::try_from(height / 2).unwrap_or(i32::MAX),
        );
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    #[cfg(test)]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn diameter(&self) -> u32 {
        to_pixels(self.radius * 2.0)
    }

    pub fn hand_length(&self, hand: Hand) -> f64 {
        self.scale(match hand {
            Hand::Hour => HOUR_HAND,
            Hand::Minute => MINUTE_HAND,
            Hand::Second => SECOND_HAND,
        })
    }

    pub fn mark_radius(&self) -> f64 {
        self.scale(MARK_RADIUS)
    }

    pub fn mark_diameter(&self) -> u32 {
        to_pixels(self.scale(MARK_DIAMETER)).max(1)
    }

    pub fn border_width(&self) -> u32 {
        to_pixels(self.scale(BORDER_WIDTH)).max(1)
    }

    pub fn text_anchor(&self) -> Point {
        Point::new(
            self.center.x + to_offset(self.scale(TEXT_OFFSET.0)),
            self.center.y + to_offset(self.scale(TEXT_OFFSET.1)),
        )
    }

    pub fn font_size(&self) -> f64 {
        self.scale(FONT_SIZE)
    }

    fn scale(&self, reference: f64) -> f64 {
        reference * self.radius / REFERENCE_RADIUS
    }
}

#[allow(
    clippy::as_conversions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn to_pixels(f: f64) -> u32 {
    f.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

#[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
fn to_offset(f: f64) -> i32 {
    f.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

#[test]
fn test_reference_geometry() {
    let face = ClockFace::reference();
    assert_eq!(face.center(), Point::new(175, 175));
    assert_eq!(face.diameter(), 300);
    assert!((face.mark_radius() - 135.0).abs() < 1e-9);
    assert_eq!(face.mark_diameter(), 5);
    assert_eq!(face.border_width(), 3);
    assert_eq!(face.text_anchor(), Point::new(75, 170));
    assert!((face.font_size() - 55.0).abs() < 1e-9);
    assert!((face.hand_length(Hand::Second) - 125.0).abs() < 1e-9);
    assert!((face.hand_length(Hand::Minute) - 110.0).abs() < 1e-9);
    assert!((face.hand_length(Hand::Hour) - 90.0).abs() < 1e-9);
}

#[test]
fn test_fit() {
    let face = ClockFace::fit(400, 400).unwrap();
    assert_eq!(face.center(), Point::new(200, 200));
    assert!((face.radius() - 1200.0 / 7.0).abs() < 1e-9);

    let face = ClockFace::fit(80, 48).unwrap();
    assert_eq!(face.center(), Point::new(40, 24));
    assert!(face.radius() * 2.0 <= 48.0);
    assert_eq!(face.border_width(), 1);
    assert_eq!(face.mark_diameter(), 1);

    assert_eq!(
        ClockFace::fit(200, 6),
        Err(RenderError::SurfaceTooSmall {
            width: 200,
            height: 6
        })
    );
}

#[test]
fn test_hands_shorter_than_radius() {
    for side in (10..600).step_by(7) {
        let face = ClockFace::fit(side, side + 3).unwrap();
        let second = face.hand_length(Hand::Second);
        let minute = face.hand_length(Hand::Minute);
        let hour = face.hand_length(Hand::Hour);
        assert!(second < face.radius());
        assert!(minute < second);
        assert!(hour < minute);
        assert!(hour > 0.0);
    }
}

#[test]
fn test_new() {
    let face = ClockFace::new(Point::new(50, 50), 40.0).unwrap();
    let expected = 125.0 * 40.0 / 150.0;
    assert!((face.hand_length(Hand::Second) - expected).abs() < 1e-9);
    assert!(ClockFace::new(Point::new(50, 50), 1.0).is_err());
    assert!(ClockFace::new(Point::new(50, 50), f64::NAN).is_err());
}
