//! Platform service traits and desktop implementation.

use std::path::PathBuf;

use cwf_types::error::{CwfError, Result};

// ---------------------------------------------------------------------------
// Display service
// ---------------------------------------------------------------------------

/// Abstraction over the watch display metrics.
pub trait DisplayService {
    /// Display width in pixels. Queried once per session.
    fn display_width(&self) -> Result<u32>;
}

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

/// A simple wall-clock timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl SystemTime {
    /// Calendar date as `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Time-of-day components used to rotate the clock hands.
    pub fn clock(&self) -> ClockTime {
        ClockTime {
            hour: self.hour,
            minute: self.minute,
            second: self.second,
        }
    }
}

impl std::fmt::Display for SystemTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}

/// Time of day, 24-hour clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Abstraction over platform time services.
pub trait TimeService {
    /// Current wall-clock time.
    fn now(&self) -> Result<SystemTime>;
}

// ---------------------------------------------------------------------------
// Data feed
// ---------------------------------------------------------------------------

/// Classification of the current glucose reading against the target range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrendLevel {
    AboveRange,
    InRange,
    BelowRange,
    /// No reading or an unrecognized level code.
    #[default]
    Unknown,
}

impl TrendLevel {
    /// Map the feed's numeric level (`1` high, `0` in range, `-1` low).
    pub fn from_level(level: i64) -> Self {
        match level {
            1 => Self::AboveRange,
            0 => Self::InRange,
            -1 => Self::BelowRange,
            _ => Self::Unknown,
        }
    }
}

/// Phone/uploader battery indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatteryLevel {
    #[default]
    Ok,
    Low,
}

/// Closed-loop status indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoopStatus {
    Active,
    #[default]
    Warning,
    Error,
}

/// Freshness of the last reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataAge {
    #[default]
    Fresh,
    Stale,
}

/// One read-only snapshot of the upstream data feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedSnapshot {
    pub trend: TrendLevel,
    pub battery: BatteryLevel,
    pub loop_status: LoopStatus,
    pub data_age: DataAge,
}

/// Abstraction over the upstream glucose/loop data feed.
pub trait FeedService {
    /// Latest snapshot. Polled once per render tick.
    fn snapshot(&self) -> Result<FeedSnapshot>;
}

// ---------------------------------------------------------------------------
// Preferences
// ---------------------------------------------------------------------------

/// User preferences owned by the host.
pub trait PreferenceService {
    /// Whether the user wants seconds displayed at all.
    fn show_seconds(&self) -> bool;
}

// ---------------------------------------------------------------------------
// Raw resources
// ---------------------------------------------------------------------------

/// Access to raw resources bundled with the host application.
pub trait ResourceService {
    /// Read the full contents of a named resource (e.g. `watchface_custom`).
    fn read_resource(&self, name: &str) -> Result<Vec<u8>>;
}

// ---------------------------------------------------------------------------
// Unified platform trait
// ---------------------------------------------------------------------------

/// Aggregate trait providing access to all platform services.
pub trait Platform:
    DisplayService + TimeService + FeedService + PreferenceService + ResourceService
{
}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Platform implementation for desktop previews using `std` facilities.
///
/// The display width and seconds preference come from configuration, the
/// feed is a fixed snapshot the caller can replace, and resources are PNG
/// files under a directory.
pub struct HostPlatform {
    display_width: u32,
    show_seconds: bool,
    resources_dir: PathBuf,
    feed: FeedSnapshot,
}

impl HostPlatform {
    pub fn new(display_width: u32, show_seconds: bool, resources_dir: impl Into<PathBuf>) -> Self {
        Self {
            display_width,
            show_seconds,
            resources_dir: resources_dir.into(),
            feed: FeedSnapshot::default(),
        }
    }

    /// Replace the snapshot returned by the feed.
    pub fn set_feed(&mut self, feed: FeedSnapshot) {
        self.feed = feed;
    }
}

impl DisplayService for HostPlatform {
    fn display_width(&self) -> Result<u32> {
        Ok(self.display_width)
    }
}

impl TimeService for HostPlatform {
    fn now(&self) -> Result<SystemTime> {
        use std::time::SystemTime as StdTime;
        let dur = StdTime::now()
            .duration_since(StdTime::UNIX_EPOCH)
            .unwrap_or_default();
        let secs = dur.as_secs();

        // UTC breakdown, no TZ handling.
        let days = secs / 86400;
        let time_of_day = secs % 86400;
        let hour = (time_of_day / 3600) as u8;
        let minute = ((time_of_day % 3600) / 60) as u8;
        let second = (time_of_day % 60) as u8;
        let (year, month, day) = days_to_ymd(days);

        Ok(SystemTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }
}

impl FeedService for HostPlatform {
    fn snapshot(&self) -> Result<FeedSnapshot> {
        Ok(self.feed)
    }
}

impl PreferenceService for HostPlatform {
    fn show_seconds(&self) -> bool {
        self.show_seconds
    }
}

impl ResourceService for HostPlatform {
    fn read_resource(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.resources_dir.join(format!("{name}.png"));
        std::fs::read(&path)
            .map_err(|e| CwfError::ResourceRead(format!("{}: {e}", path.display())))
    }
}

impl Platform for HostPlatform {}

// ---------------------------------------------------------------------------
// Date helper
// ---------------------------------------------------------------------------

/// Convert days since Unix epoch to (year, month, day).
pub(crate) fn days_to_ymd(mut days: u64) -> (u16, u8, u8) {
    let mut year = 1970u16;
    loop {
        let year_days = if is_leap(year) { 366 } else { 365 };
        if days < year_days {
            break;
        }
        days -= year_days;
        year += 1;
    }
    let leap = is_leap(year);
    let month_days: [u64; 12] = [
        31,
        if leap { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    let mut month = 0u8;
    for (i, &md) in month_days.iter().enumerate() {
        if days < md {
            month = (i + 1) as u8;
            break;
        }
        days -= md;
    }
    if month == 0 {
        month = 12;
    }
    (year, month, (days + 1) as u8)
}

pub(crate) fn is_leap(y: u16) -> bool {
    (y.is_multiple_of(4) && !y.is_multiple_of(100)) || y.is_multiple_of(400)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_level_mapping() {
        assert_eq!(TrendLevel::from_level(1), TrendLevel::AboveRange);
        assert_eq!(TrendLevel::from_level(0), TrendLevel::InRange);
        assert_eq!(TrendLevel::from_level(-1), TrendLevel::BelowRange);
        assert_eq!(TrendLevel::from_level(7), TrendLevel::Unknown);
        assert_eq!(TrendLevel::from_level(-2), TrendLevel::Unknown);
    }

    #[test]
    fn date_string_is_zero_padded() {
        let t = SystemTime {
            year: 2026,
            month: 2,
            day: 3,
            hour: 4,
            minute: 5,
            second: 6,
        };
        assert_eq!(t.date_string(), "2026-02-03");
        assert_eq!(format!("{t}"), "2026-02-03 04:05:06");
        assert_eq!(
            t.clock(),
            ClockTime {
                hour: 4,
                minute: 5,
                second: 6
            }
        );
    }

    #[test]
    fn days_to_ymd_epoch() {
        assert_eq!(days_to_ymd(0), (1970, 1, 1));
    }

    #[test]
    fn days_to_ymd_leap_day() {
        // 2024-02-29 is day 19782 since the epoch.
        assert_eq!(days_to_ymd(19782), (2024, 2, 29));
    }

    #[test]
    fn leap_years() {
        assert!(is_leap(2000));
        assert!(is_leap(2024));
        assert!(!is_leap(1900));
        assert!(!is_leap(2023));
    }

    #[test]
    fn host_platform_reports_config() {
        let p = HostPlatform::new(454, false, "resources");
        assert_eq!(p.display_width().unwrap(), 454);
        assert!(!p.show_seconds());
        assert_eq!(p.snapshot().unwrap(), FeedSnapshot::default());
    }

    #[test]
    fn host_platform_feed_override() {
        let mut p = HostPlatform::new(400, true, "resources");
        let feed = FeedSnapshot {
            trend: TrendLevel::BelowRange,
            battery: BatteryLevel::Low,
            loop_status: LoopStatus::Error,
            data_age: DataAge::Stale,
        };
        p.set_feed(feed);
        assert_eq!(p.snapshot().unwrap(), feed);
    }

    #[test]
    fn host_platform_now_is_plausible() {
        let p = HostPlatform::new(400, true, "resources");
        let t = p.now().unwrap();
        assert!(t.year >= 2024);
        assert!((1..=12).contains(&t.month));
        assert!(t.hour < 24 && t.minute < 60 && t.second < 60);
    }

    #[test]
    fn read_resource_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("watchface_custom.png"), b"\x89PNG").unwrap();
        let p = HostPlatform::new(400, true, dir.path());
        assert_eq!(p.read_resource("watchface_custom").unwrap(), b"\x89PNG");
    }

    #[test]
    fn missing_resource_is_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let p = HostPlatform::new(400, true, dir.path());
        let err = p.read_resource("nope").unwrap_err();
        assert!(matches!(err, CwfError::ResourceRead(_)));
    }
}
