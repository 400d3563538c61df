use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Record;

/// Presentation hint attached to boolean and status cells.
///
/// Hosting layers map tones onto styling; the CLI maps them to terminal
/// colors. Cells without a tone render unstyled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Info => "info",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One formatted cell: display text plus an optional tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayCell {
    pub text: String,
    pub tone: Option<Tone>,
}

impl DisplayCell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: None,
        }
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone: Some(tone),
        }
    }
}

/// A record paired with its formatted cells for one render pass.
///
/// Display rows are ephemeral: recomputed on every state change and never
/// persisted. Cells appear in column-schema order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow<'a> {
    pub record: &'a Record,
    pub cells: Vec<DisplayCell>,
}

impl<'a> DisplayRow<'a> {
    pub fn new(record: &'a Record, cells: Vec<DisplayCell>) -> Self {
        Self { record, cells }
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|cell| cell.text.as_str())
    }
}
