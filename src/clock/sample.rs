#[derive(
    Copy, Clone, Debug, PartialEq, Eq, serde::Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum HourHandMode {
    // hour % 12, so the hand goes around the dial twice a day
    #[default]
    TwelveHour,
    // feeds the raw 0-23 hour into the angle, so afternoon angles are a
    // full turn past the dial
    Unmodded,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimeSample {
    time: time::Time,
}

impl TimeSample {
    #[cfg(test)]
    pub fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        time::Time::from_hms(hour, minute, second)
            .ok()
            .map(Self::from)
    }

    pub fn now(offset: time::UtcOffset) -> Self {
        time::OffsetDateTime::now_utc().to_offset(offset).into()
    }

    pub fn hour(&self) -> u8 {
        self.time.hour()
    }

    pub fn minute(&self) -> u8 {
        self.time.minute()
    }

    pub fn second(&self) -> u8 {
        self.time.second()
    }

    pub fn digital(&self) -> String {
        crate::format::time(self.time)
    }
}

impl From<time::Time> for TimeSample {
    fn from(time: time::Time) -> Self {
        // only whole seconds are shown, so drop the fraction to keep equal
        // samples equal
        let (hour, minute, second) = time.as_hms();
        Self {
            time: time::Time::from_hms(hour, minute, second).unwrap_or(time),
        }
    }
}

impl From<time::OffsetDateTime> for TimeSample {
    fn from(datetime: time::OffsetDateTime) -> Self {
        datetime.time().into()
    }
}

/// Clockwise rotation in degrees, measured from 3 o'clock in screen
/// coordinates (y grows downward), so 12 o'clock is -90.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct HandAngle(f64);

impl HandAngle {
    const DEGREES_PER_TICK: f64 = 6.0;
    const DEGREES_PER_HOUR: f64 = 30.0;
    const HOUR_DEGREES_PER_MINUTE: f64 = 0.5;
    const TOP: f64 = -90.0;

    pub fn second(sample: TimeSample) -> Self {
        Self(f64::from(sample.second()) * Self::DEGREES_PER_TICK + Self::TOP)
    }

    pub fn minute(sample: TimeSample) -> Self {
        Self(f64::from(sample.minute()) * Self::DEGREES_PER_TICK + Self::TOP)
    }

    pub fn hour(sample: TimeSample, mode: HourHandMode) -> Self {
        let hour = match mode {
            HourHandMode::TwelveHour => sample.hour() % 12,
            HourHandMode::Unmodded => sample.hour(),
        };
        Self(
            f64::from(hour) * Self::DEGREES_PER_HOUR
                + f64::from(sample.minute()) * Self::HOUR_DEGREES_PER_MINUTE
                + Self::TOP,
        )
    }

    // mark 12 lands on the top of the dial, same as mark 0 would
    pub fn hour_mark(mark: u8) -> Self {
        Self(f64::from(mark) * Self::DEGREES_PER_HOUR + Self::TOP)
    }

    #[cfg(test)]
    pub fn degrees(self) -> f64 {
        self.0
    }

    #[cfg(test)]
    pub fn normalized(self) -> f64 {
        self.0.rem_euclid(360.0)
    }

    pub fn endpoint(
        self,
        center: super::Point,
        length: f64,
    ) -> super::Point {
        let (sin, cos) = self.0.to_radians().sin_cos();
        super::Point::new(
            round(f64::from(center.x) + length * cos),
            round(f64::from(center.y) + length * sin),
        )
    }
}

#[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
fn round(f: f64) -> i32 {
    f.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}
