//! Calculator settings.
use calcpad_expr::AngleMode;

/// Settings that shape how a [`Calculator`](crate::Calculator) evaluates.
///
/// # Example
/// ```rust
/// # use calcpad::CalcConfig;
/// # use calcpad_expr::AngleMode;
/// let config = CalcConfig::default()
///     .angle_mode(AngleMode::Radians)
///     .auto_evaluate_percent(false);
/// assert_eq!(config.angle_mode, AngleMode::Radians);
/// assert!(!config.auto_evaluate_percent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalcConfig {
    /// Unit used by the trigonometric builtins.
    pub angle_mode: AngleMode,
    /// Evaluate immediately whenever `%` is entered.
    pub auto_evaluate_percent: bool,
}

impl CalcConfig {
    /// Sets the angle unit.
    pub fn angle_mode(mut self, angle_mode: AngleMode) -> Self {
        self.angle_mode = angle_mode;
        self
    }

    /// Enables or disables evaluation on `%`.
    pub fn auto_evaluate_percent(mut self, enabled: bool) -> Self {
        self.auto_evaluate_percent = enabled;
        self
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::Degrees,
            auto_evaluate_percent: true,
        }
    }
}
