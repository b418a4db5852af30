//! Per-tick inputs that drive theming.

use cwf_platform::{BatteryLevel, ClockTime, DataAge, FeedSnapshot, LoopStatus, TrendLevel};

/// Everything the applier reads from the outside world for one render.
///
/// Built fresh every tick and never retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeInputs {
    pub trend: TrendLevel,
    pub battery: BatteryLevel,
    pub loop_status: LoopStatus,
    pub data_age: DataAge,
    pub time: ClockTime,
    /// Host preference gating the seconds display.
    pub show_seconds: bool,
}

impl Default for ThemeInputs {
    fn default() -> Self {
        Self {
            trend: TrendLevel::Unknown,
            battery: BatteryLevel::Ok,
            loop_status: LoopStatus::Warning,
            data_age: DataAge::Fresh,
            time: ClockTime::default(),
            show_seconds: true,
        }
    }
}

impl ThemeInputs {
    pub fn from_feed(feed: FeedSnapshot, time: ClockTime, show_seconds: bool) -> Self {
        Self {
            trend: feed.trend,
            battery: feed.battery,
            loop_status: feed.loop_status,
            data_age: feed.data_age,
            time,
            show_seconds,
        }
    }

    /// Copy with a different trend level.
    pub fn with_trend(self, trend: TrendLevel) -> Self {
        Self { trend, ..self }
    }
}
