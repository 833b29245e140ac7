//! Text/graphical view toggle.
//!
//! Exactly one panel is visible at a time. The toggle button flips between
//! them; the app starts on the text view.

/// Visible panel.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum View {
    /// Readings and notes as text.
    #[default]
    Text,

    /// Live drawing surface.
    Graphical,
}

impl View {
    /// The other panel.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Text => Self::Graphical,
            Self::Graphical => Self::Text,
        }
    }

    #[inline]
    pub const fn is_graphical(self) -> bool { matches!(self, Self::Graphical) }

    /// Short name for the event log.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Graphical => "graphical",
        }
    }
}
