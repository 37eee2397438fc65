//! Discrete input events, as produced by a page or read from a replay script.

use crate::authform::error::FormError;
use crate::authform::field::FieldId;
use crate::authform::session::Panel;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    SwitchPanel { panel: Panel },
    Input { field: FieldId, value: String },
    Blur { field: FieldId },
    Terms { agreed: bool },
    TogglePassword { field: FieldId },
    Submit,
}

impl FormEvent {
    /// Event name without its payload, safe to log.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            FormEvent::SwitchPanel { .. } => "switch_panel",
            FormEvent::Input { .. } => "input",
            FormEvent::Blur { .. } => "blur",
            FormEvent::Terms { .. } => "terms",
            FormEvent::TogglePassword { .. } => "toggle_password",
            FormEvent::Submit => "submit",
        }
    }

    /// Parses a JSON array of events.
    ///
    /// # Errors
    /// Returns `FormError::Script` if the document is not a valid event list.
    pub fn parse_script(script: &str) -> Result<Vec<FormEvent>, FormError> {
        serde_json::from_str(script).map_err(|err| FormError::Script(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_script_reads_tagged_events() -> Result<(), FormError> {
        let events = FormEvent::parse_script(
            r#"[
                {"event": "switch_panel", "panel": "signup"},
                {"event": "input", "field": "signup-email", "value": "a@b.com"},
                {"event": "blur", "field": "signup-email"},
                {"event": "terms", "agreed": true},
                {"event": "toggle_password", "field": "signup-password"},
                {"event": "submit"}
            ]"#,
        )?;

        assert_eq!(
            events,
            vec![
                FormEvent::SwitchPanel {
                    panel: Panel::Signup
                },
                FormEvent::Input {
                    field: FieldId::SignupEmail,
                    value: "a@b.com".to_string()
                },
                FormEvent::Blur {
                    field: FieldId::SignupEmail
                },
                FormEvent::Terms { agreed: true },
                FormEvent::TogglePassword {
                    field: FieldId::SignupPassword
                },
                FormEvent::Submit,
            ]
        );
        Ok(())
    }

    #[test]
    fn parse_script_rejects_unknown_fields() {
        let result = FormEvent::parse_script(r#"[{"event": "blur", "field": "nickname"}]"#);
        assert!(matches!(result, Err(FormError::Script(_))));
    }

    #[test]
    fn name_hides_payload() {
        let event = FormEvent::Input {
            field: FieldId::LoginPassword,
            value: "hunter22".to_string(),
        };
        assert_eq!(event.name(), "input");
    }

    #[test]
    fn parse_script_rejects_non_arrays() {
        assert!(FormEvent::parse_script(r#"{"event": "submit"}"#).is_err());
    }
}
