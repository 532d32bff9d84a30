//! Open modes for text files.

/// File open mode.
///
/// Only read modes exist at this level; the primitives perform no writes.
/// Both modes have binary-safe byte semantics: `Text` performs no newline or
/// encoding translation on any platform, so the two differ in name only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    /// `"r"` - read with text semantics.
    #[default]
    Text,
    /// `"rb"` - read with binary semantics.
    Binary,
}

impl OpenMode {
    /// Parse an fopen-style mode string.
    ///
    /// Strict: anything other than `"r"` or `"rb"` is `None`, which openers
    /// surface as an open failure rather than guessing.
    pub fn parse(mode: &str) -> Option<OpenMode> {
        match mode {
            "r" => Some(OpenMode::Text),
            "rb" => Some(OpenMode::Binary),
            _ => None,
        }
    }

    /// The mode string this mode parses from.
    pub fn as_str(&self) -> &'static str {
        match self {
            OpenMode::Text => "r",
            OpenMode::Binary => "rb",
        }
    }
}
