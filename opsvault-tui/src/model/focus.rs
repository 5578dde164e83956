//! Panel focus.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Navigation,
    Content,
}

impl FocusPanel {
    #[must_use]
    pub fn is_navigation(self) -> bool {
        matches!(self, Self::Navigation)
    }

    #[must_use]
    pub fn is_content(self) -> bool {
        matches!(self, Self::Content)
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Navigation => Self::Content,
            Self::Content => Self::Navigation,
        }
    }
}
