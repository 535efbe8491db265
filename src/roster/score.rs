use std::fmt;

/// A roster score: always within [0.0, 10.0] and a multiple of 0.1.
///
/// The only way to build an arbitrary `Score` is [`clamp`], so every value
/// held by the store has already been rounded and range-checked.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    pub const MIN: Score = Score(0.0);
    pub const MID: Score = Score(5.0);
    pub const MAX: Score = Score(10.0);

    /// Score given to names the first time they are loaded
    pub const DEFAULT: Score = Score::MAX;

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn tier(self) -> Tier {
        Tier::of(self)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Round to one decimal (half away from zero), then clamp to [0, 10].
///
/// Total: NaN maps to 0.0 and infinities clamp to the nearest bound.
/// Callers that have a previous score should substitute it for NaN first.
pub fn clamp(value: f64) -> Score {
    if value.is_nan() {
        return Score::MIN;
    }
    // f64::round rounds half away from zero
    let rounded = (value * 10.0).round() / 10.0;
    // `+ 0.0` folds -0.0 into 0.0 so it never displays as "-0.0"
    Score(rounded.clamp(Score::MIN.0, Score::MAX.0) + 0.0)
}

/// Display classification of a score, drives color coding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Low,
    Mid,
    High,
}

impl Tier {
    pub fn of(score: Score) -> Self {
        let v = score.value();
        if v <= 5.0 {
            Tier::Low
        } else if v <= 7.0 {
            Tier::Mid
        } else {
            Tier::High
        }
    }
}
