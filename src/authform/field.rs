//! Field identities and the semantic kinds that select validation rules.

use crate::authform::session::Panel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic kind of an input. The kind alone decides which rules apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    /// Password typed to sign in. No length rule.
    CurrentPassword,
    /// Password chosen at signup. Must be at least 8 characters.
    NewPassword,
    Name,
    Required,
    Select,
}

impl FieldKind {
    #[must_use]
    pub fn is_password(self) -> bool {
        matches!(self, FieldKind::CurrentPassword | FieldKind::NewPassword)
    }
}

/// Every input on the page, across both panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldId {
    LoginEmail,
    LoginPassword,
    SignupFirstName,
    SignupLastName,
    SignupEmail,
    SignupPassword,
    SignupRole,
}

impl FieldId {
    pub const LOGIN: [FieldId; 2] = [FieldId::LoginEmail, FieldId::LoginPassword];

    pub const SIGNUP: [FieldId; 5] = [
        FieldId::SignupFirstName,
        FieldId::SignupLastName,
        FieldId::SignupEmail,
        FieldId::SignupPassword,
        FieldId::SignupRole,
    ];

    /// Fields rendered on `panel`, in page order.
    #[must_use]
    pub fn for_panel(panel: Panel) -> &'static [FieldId] {
        match panel {
            Panel::Login => &Self::LOGIN,
            Panel::Signup => &Self::SIGNUP,
        }
    }

    #[must_use]
    pub fn panel(self) -> Panel {
        match self {
            FieldId::LoginEmail | FieldId::LoginPassword => Panel::Login,
            _ => Panel::Signup,
        }
    }

    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::LoginEmail | FieldId::SignupEmail => FieldKind::Email,
            FieldId::LoginPassword => FieldKind::CurrentPassword,
            FieldId::SignupPassword => FieldKind::NewPassword,
            FieldId::SignupFirstName | FieldId::SignupLastName => FieldKind::Name,
            FieldId::SignupRole => FieldKind::Select,
        }
    }

    #[must_use]
    pub fn required(self) -> bool {
        true
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::LoginEmail => "login-email",
            FieldId::LoginPassword => "login-password",
            FieldId::SignupFirstName => "signup-first-name",
            FieldId::SignupLastName => "signup-last-name",
            FieldId::SignupEmail => "signup-email",
            FieldId::SignupPassword => "signup-password",
            FieldId::SignupRole => "signup-role",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// A single input and its current value, as handed to the validator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub kind: FieldKind,
    pub value: String,
    pub required: bool,
}

impl Field {
    pub fn new(kind: FieldKind, value: impl Into<String>, required: bool) -> Self {
        Self {
            kind,
            value: value.into(),
            required,
        }
    }

    /// Builds the field for `id` with its page-defined kind and requiredness.
    pub fn for_id(id: FieldId, value: impl Into<String>) -> Self {
        Self::new(id.kind(), value, id.required())
    }
}
