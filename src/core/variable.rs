use std::fmt;

use serde::{Deserialize, Serialize};

/// Drop-down label meaning "no variable selected".
pub const NO_VARIABLE_LABEL: &str = "선택 안 함";

/// Numeric field a chart plots.
///
/// "No field selected" is represented as `Option::<VariableKey>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableKey {
    Birth,
    Death,
    Divorce,
    Marriage,
}

impl VariableKey {
    pub const ALL: [VariableKey; 4] = [
        VariableKey::Birth,
        VariableKey::Death,
        VariableKey::Divorce,
        VariableKey::Marriage,
    ];

    /// Maps a drop-down label to a field.
    ///
    /// Exact match only. The explicit "none" label, the empty string and any
    /// unknown label all map to `None`; callers render a placeholder prompt
    /// for that case rather than treating it as an error.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "출생수" => Some(Self::Birth),
            "죽음수" => Some(Self::Death),
            "이혼수" => Some(Self::Divorce),
            "결혼수" => Some(Self::Marriage),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Birth => "출생수",
            Self::Death => "죽음수",
            Self::Divorce => "이혼수",
            Self::Marriage => "결혼수",
        }
    }

    /// Dataset column name.
    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Birth => "Birth",
            Self::Death => "Death",
            Self::Divorce => "Divorce",
            Self::Marriage => "Marriage",
        }
    }
}

impl fmt::Display for VariableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// The five drop-down labels, "none" first.
#[must_use]
pub fn variable_options() -> [&'static str; 5] {
    [
        NO_VARIABLE_LABEL,
        VariableKey::Birth.label(),
        VariableKey::Death.label(),
        VariableKey::Divorce.label(),
        VariableKey::Marriage.label(),
    ]
}
