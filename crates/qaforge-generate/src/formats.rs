use serde::{Deserialize, Serialize};

/// Three-letter month abbreviations, index 0 = January.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Supported date layouts for random date generation.
///
/// Each variant names a token pattern combining `yyyy`, `MM` or `MMM`, and
/// `dd` with `-` or `/` separators. `MM` is a zero-padded numeric month,
/// `MMM` an abbreviation from [`MONTH_ABBREVIATIONS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// `2024-08-18`
    #[default]
    YyyyMmDd,
    /// `2024/08/18`
    YyyyMmDdSlash,
    /// `2024-Aug-18`
    YyyyMmmDd,
    /// `2024/Aug/18`
    YyyyMmmDdSlash,
    /// `18-08-2024`
    DdMmYyyy,
    /// `18-Aug-2024`
    DdMmmYyyy,
    /// `18/Aug/2024`
    DdMmmYyyySlash,
}

impl DateFormat {
    /// The token pattern this layout expands.
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::YyyyMmDd => "yyyy-MM-dd",
            DateFormat::YyyyMmDdSlash => "yyyy/MM/dd",
            DateFormat::YyyyMmmDd => "yyyy-MMM-dd",
            DateFormat::YyyyMmmDdSlash => "yyyy/MMM/dd",
            DateFormat::DdMmYyyy => "dd-MM-yyyy",
            DateFormat::DdMmmYyyy => "dd-MMM-yyyy",
            DateFormat::DdMmmYyyySlash => "dd/MMM/yyyy",
        }
    }

    /// All supported layouts.
    pub fn all() -> [DateFormat; 7] {
        [
            DateFormat::YyyyMmDd,
            DateFormat::YyyyMmDdSlash,
            DateFormat::YyyyMmmDd,
            DateFormat::YyyyMmmDdSlash,
            DateFormat::DdMmYyyy,
            DateFormat::DdMmmYyyy,
            DateFormat::DdMmmYyyySlash,
        ]
    }

    /// Whether the layout carries an abbreviated month name instead of a
    /// numeric month.
    pub fn has_named_month(self) -> bool {
        self.pattern().contains("MMM")
    }
}
