mod face;
pub use face::{ClockFace, Hand};
mod sample;
pub use sample::{HandAngle, HourHandMode, TimeSample};
mod surface;
pub use surface::{Color, Font, Point, Rect, RenderError, Surface};
mod view;
pub use view::ClockView;

#[cfg(test)]
mod record;
