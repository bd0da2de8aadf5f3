//! Time, date and weekday rows

use chrono::{Datelike, Timelike};

use super::config::{DateOrder, Language};
use crate::ui::RowText;

const WEEKDAYS_EN: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
const WEEKDAYS_IT: [&str; 7] = ["DOM", "LUN", "MAR", "MER", "GIO", "VEN", "SAB"];

/// Three-letter name of `day`, counted from Sunday = 0. Wraps past 6.
pub fn weekday_name(day: u32, language: Language) -> &'static str {
    let names = match language {
        Language::English => &WEEKDAYS_EN,
        Language::Italian => &WEEKDAYS_IT,
    };
    names[(day % 7) as usize]
}

/// `HH:MM`, on a 24 or zero-padded 12 hour clock
pub fn format_time<T: Timelike>(time: &T, is_24h: bool) -> RowText {
    let hour = if is_24h { time.hour() } else { time.hour12().1 };
    let mut buf = [0u8; 8];
    match format_no_std::show(&mut buf, format_args!("{:02}:{:02}", hour, time.minute())) {
        Ok(text) => RowText::new(text),
        Err(_) => RowText::BLANK,
    }
}

/// `DD/MM` or `MM/DD`
pub fn format_date<D: Datelike>(date: &D, order: DateOrder) -> RowText {
    let (first, second) = match order {
        DateOrder::DayMonth => (date.day(), date.month()),
        DateOrder::MonthDay => (date.month(), date.day()),
    };
    let mut buf = [0u8; 8];
    match format_no_std::show(&mut buf, format_args!("{:02}/{:02}", first, second)) {
        Ok(text) => RowText::new(text),
        Err(_) => RowText::BLANK,
    }
}

/// Weekday name, right-aligned in the row
pub fn format_weekday<D: Datelike>(date: &D, language: Language) -> RowText {
    let name = weekday_name(date.weekday().num_days_from_sunday(), language);
    let mut buf = [0u8; 8];
    match format_no_std::show(&mut buf, format_args!("  {}", name)) {
        Ok(text) => RowText::new(text),
        Err(_) => RowText::BLANK,
    }
}
