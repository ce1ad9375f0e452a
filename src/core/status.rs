// SyriaBiz - core/status.rs
//
// Open/closed evaluation for a business at a given local time.
// Pure functions: the caller supplies the clock reading.

use crate::core::i18n;
use crate::core::model::{Business, Language, OpeningHours};
use chrono::Timelike;

/// Is the window open during `hour` (0-23)?
///
/// Half-open interval `[open, close)`, except the 0-24 sentinel which is
/// open at every hour. A window with `close <= open` is never open.
pub fn is_open_at_hour(hours: &OpeningHours, hour: u32) -> bool {
    if hours.is_always_open() {
        return true;
    }
    hour >= u32::from(hours.open) && hour < u32::from(hours.close)
}

/// Is `business` open at the local time `now`?
pub fn is_open_now<T: Timelike>(business: &Business, now: &T) -> bool {
    is_open_at_hour(&business.hours, now.hour())
}

/// Localized "Open" / "Closed" badge text.
pub fn status_label<T: Timelike>(business: &Business, now: &T, language: Language) -> &'static str {
    if is_open_now(business, now) {
        i18n::text("open", language)
    } else {
        i18n::text("closed", language)
    }
}
