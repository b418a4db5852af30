//! Host service abstractions for the custom watchface engine.
//!
//! The skin engine never talks to the watch directly. Display metrics, the
//! wall clock, the glucose data feed, user preferences, and raw bundled
//! resources all arrive through the traits defined here.

pub mod services;

pub use services::{
    BatteryLevel, ClockTime, DataAge, DisplayService, FeedService, FeedSnapshot, HostPlatform,
    LoopStatus, Platform, PreferenceService, ResourceService, SystemTime, TimeService, TrendLevel,
};
