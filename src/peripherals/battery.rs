//! Battery status row

use crate::ui::RowText;

/// Charge state as reported by the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryInfo {
    /// Battery percentage (0–100)
    pub percent: u8,
    /// Charging state
    pub charging: bool,
    /// Connected to a charger
    pub plugged: bool,
}

impl BatteryInfo {
    pub fn new(percent: u8, charging: bool, plugged: bool) -> Self {
        Self {
            percent,
            charging,
            plugged,
        }
    }
}

/// Glyph shown in the leading cell while charging
pub const CHARGING_CHAR: u8 = b'$';

/// Format a charge percentage right-justified in four cells plus `%`.
pub fn format_percent(percent: u8) -> RowText {
    let mut buf = [0u8; 8];
    match format_no_std::show(&mut buf, format_args!("{:>4}%", percent)) {
        Ok(text) => RowText::new(text),
        Err(_) => RowText::BLANK,
    }
}

/// Format the battery row, optionally flagging an active charge.
///
/// The leading cell is always free for percentages below 1000, so the bolt
/// never hides a digit.
pub fn format_battery(info: BatteryInfo, show_charging: bool) -> RowText {
    let mut text = format_percent(info.percent);
    if show_charging && info.charging {
        text.set(0, CHARGING_CHAR);
    }
    text
}
