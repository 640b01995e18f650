use std::fmt;

/// Visual theme of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse the stored slot value. Anything but the two exact names is rejected.
    pub fn from_slot(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Value written to the `theme` slot
    pub fn as_slot(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Name of the styling class representing this theme
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Light => "light-theme",
            Self::Dark => "dark-theme",
        }
    }

    /// The other theme
    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph for the theme switch: shows what pressing it leads to
    pub fn switch_symbol(&self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_slot())
    }
}
