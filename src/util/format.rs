//! Chat display formatting: security tiers, starbase state labels, market
//! location rendering and ISK figures.

use crate::model::db::SolarSystemModel;

/// Location IDs below this value denote regions; at or above, solar
/// systems.
pub const REGION_ID_CEILING: i64 = 30_000_000;

/// Five-tier security banding used to decorate system names.
///
/// Lower bounds are closed: exactly 0.8 is still the top tier, exactly 0.6
/// and 0.5 belong to the tier they open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecurityTier {
    HighHigh,
    High,
    MidHigh,
    MidLow,
    Lowest,
}

impl SecurityTier {
    pub fn from_security(security: f64) -> Self {
        if security >= 0.8 {
            SecurityTier::HighHigh
        } else if security >= 0.6 {
            SecurityTier::High
        } else if security >= 0.5 {
            SecurityTier::MidHigh
        } else if security >= 0.1 {
            SecurityTier::MidLow
        } else {
            SecurityTier::Lowest
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SecurityTier::HighHigh => "high-high",
            SecurityTier::High => "high",
            SecurityTier::MidHigh => "mid-high",
            SecurityTier::MidLow => "mid/low",
            SecurityTier::Lowest => "lowest",
        }
    }

    /// mIRC color code used when decorating a system name.
    fn mirc_color(self) -> u8 {
        match self {
            SecurityTier::HighHigh => 9,
            SecurityTier::High => 3,
            SecurityTier::MidHigh => 8,
            SecurityTier::MidLow => 7,
            SecurityTier::Lowest => 4,
        }
    }
}

/// System name wrapped in the mIRC color for its security tier.
pub fn colored_system(system: &SolarSystemModel) -> String {
    let color = SecurityTier::from_security(system.security).mirc_color();
    format!("\x03{:02}{}\x03", color, system.solar_system_name)
}

/// Human label for a starbase state code.
pub fn starbase_state_label(state: i32) -> &'static str {
    match state {
        0 => "Unanchored",
        1 => "Anchored/Offline",
        2 => "Onlining",
        3 => "Reinforced",
        4 => "Online",
        _ => "Unknown",
    }
}

/// ISK amount with thousands separators and two decimals.
pub fn format_isk(amount: f64) -> String {
    let formatted = format!("{amount:.2}");
    let (whole, fraction) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    format!("{}.{}", group_thousands(whole), fraction)
}

/// Volume rendered as a thousands-separated integer.
pub fn format_volume(volume: f64) -> String {
    group_thousands(&format!("{}", volume.trunc() as i64))
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}")
}
