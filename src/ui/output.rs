//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show the banner, every installation and the stats.
    #[default]
    Normal,
    /// Show only failing installations and the stats.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows the latest-version banner and OK lines.
    pub fn shows_passing(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
