use crate::core::logic::VoteTier;

/// DaisyUI color tokens used by the catalog badges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DaisyColor {
    Primary,
    Neutral,
    Info,
    Success,
    Warning,
    Error,
}

impl DaisyColor {
    /// Returns the class suffix (e.g. `"primary"`) for the color.
    #[must_use]
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Neutral => "neutral",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl From<VoteTier> for DaisyColor {
    fn from(tier: VoteTier) -> Self {
        match tier {
            VoteTier::Top => Self::Success,
            VoteTier::Mid => Self::Warning,
            VoteTier::Low => Self::Error,
            VoteTier::NoVotes => Self::Neutral,
        }
    }
}

/// Sizing tokens used by DaisyUI controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum DaisySize {
    Sm,
    #[default]
    Md,
}

impl DaisySize {
    /// Adds a prefix (e.g. `badge`) to the size suffix for class composition.
    #[must_use]
    pub(crate) fn with_prefix(self, prefix: &str) -> String {
        let suffix = match self {
            Self::Sm => "sm",
            Self::Md => "md",
        };
        format!("{prefix}-{suffix}")
    }
}

/// Class for a tone under a prefix, e.g. `badge-success`.
#[must_use]
pub(crate) fn tone_class(prefix: &str, tone: DaisyColor) -> String {
    format!("{prefix}-{}", tone.as_str())
}
