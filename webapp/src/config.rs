//! Static page copy and build-time settings.

pub const PAGE_TITLE: &str = "Anime Recommendation Engine";
pub const PAGE_SUBTITLE: &str = "Your personalized anime discovery platform";
pub const COUNTER_LABEL: &str = "Count is";

#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::Level = log::Level::Info;
