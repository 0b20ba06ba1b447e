//! Closed option sets accepted by the founder scout.

use crate::error::{Result, ScoutError};
use std::fmt;
use std::str::FromStr;

macro_rules! option_set {
    ($(#[$meta:meta])* $name:ident, $param:literal { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every member, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Argument name this option set is supplied under.
            pub const PARAM: &'static str = $param;

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Valid values formatted as a JSON-style list.
            pub fn choices() -> String {
                let quoted: Vec<String> =
                    Self::ALL.iter().map(|v| format!("\"{}\"", v.as_str())).collect();
                format!("[{}]", quoted.join(", "))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ScoutError;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        ScoutError::InvalidInput(format!(
                            "{} must be one of {}, got \"{}\"",
                            $param,
                            Self::choices(),
                            wanted
                        ))
                    })
            }
        }
    };
}

option_set!(
    /// Revenue bracket the scouted founders report.
    MonthlyRevenue, "monthlyRevenue" {
        TenK => "$10k/month",
        ThirtyK => "$30k/month",
        FiftyK => "$50k/month",
        HundredK => "$100k/month",
    }
);

option_set!(
    /// Topic that scopes insight selection.
    KeyTopic, "keyTopic" {
        FounderJourney => "Founder Journey",
        BusinessModel => "Business Model and Strategy",
        RevenueAndScale => "Revenue Streams and Scale",
    }
);

option_set!(
    /// Region appended to the scouting search query.
    Geography, "targetGeography" {
        Usa => "USA",
        Europe => "Europe",
        Asia => "Asia",
        Global => "Global",
    }
);

impl KeyTopic {
    /// Fixed keyword set used by the insight selector.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            KeyTopic::FounderJourney => &[
                "started",
                "first customer",
                "mistake",
                "learned",
                "quit",
                "challenge",
                "pivot",
            ],
            KeyTopic::BusinessModel => &[
                "pricing",
                "subscription",
                "margins",
                "strategy",
                "positioning",
                "distribution",
                "acquisition",
            ],
            KeyTopic::RevenueAndScale => &[
                "revenue", "arpu", "mrr", "churn", "scale", "growth", "profit",
            ],
        }
    }
}
