//! Rendering surface the controller drives. Implementations map these calls
//! onto whatever they render to (DOM, terminal, a test recorder).

use crate::authform::field::FieldId;
use crate::authform::session::Panel;
use crate::authform::validator::ValidationResult;

/// Inline verdict shown next to a field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Neutral,
    Success,
    Error(String),
}

impl FieldStatus {
    /// Valid non-blank values render as success; valid blank values stay neutral.
    #[must_use]
    pub fn from_result(result: &ValidationResult, value: &str) -> Self {
        if !result.valid {
            return FieldStatus::Error(result.message.clone().unwrap_or_default());
        }
        if value.trim().is_empty() {
            FieldStatus::Neutral
        } else {
            FieldStatus::Success
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, FieldStatus::Error(_))
    }
}

pub trait FormView {
    fn show_panel(&self, panel: Panel);

    /// Clears values and every inline status on `panel`.
    fn reset_panel(&self, panel: Panel);

    fn set_field_status(&self, field: FieldId, status: &FieldStatus);

    /// Toggles the loading state of `panel` and its submit control.
    fn set_loading(&self, panel: Panel, loading: bool);

    fn set_panel_switch_enabled(&self, enabled: bool);

    fn set_password_visible(&self, field: FieldId, visible: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_result() {
        assert_eq!(
            FieldStatus::from_result(&ValidationResult::invalid("nope"), "x"),
            FieldStatus::Error("nope".to_string())
        );
        assert_eq!(
            FieldStatus::from_result(&ValidationResult::valid(), "ok"),
            FieldStatus::Success
        );
        assert_eq!(
            FieldStatus::from_result(&ValidationResult::valid(), "  "),
            FieldStatus::Neutral
        );
        assert!(FieldStatus::Error(String::new()).is_error());
        assert!(!FieldStatus::Success.is_error());
    }
}
