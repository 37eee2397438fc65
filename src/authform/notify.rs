//! Banner notifications and the post-success follow-up.
//! Messages are fixed copy and never echo user input.

use crate::authform::session::Panel;
use std::time::Duration;

pub const TERMS_MESSAGE: &str = "Please agree to the Terms of Service and Privacy Policy";
pub const SHORT_PASSWORD_MESSAGE: &str = "Password must be at least 6 characters long";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient banner. Presenters dismiss it once `ttl` has elapsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub ttl: Duration,
}

impl Notification {
    pub fn success(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            ttl,
        }
    }

    pub fn error(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            ttl,
        }
    }

    /// Banner reporting a simulated round-trip for `panel`.
    #[must_use]
    pub fn outcome(panel: Panel, success: bool, ttl: Duration) -> Self {
        match (panel, success) {
            (Panel::Login, true) => {
                Self::success("Welcome back! Redirecting to your dashboard...", ttl)
            }
            (Panel::Login, false) => {
                Self::error("Invalid email or password. Please try again.", ttl)
            }
            (Panel::Signup, true) => Self::success(
                "Account created successfully! Please check your email to verify your account.",
                ttl,
            ),
            (Panel::Signup, false) => Self::error(
                "An error occurred while creating your account. Please try again.",
                ttl,
            ),
        }
    }
}

/// Placeholder for the navigation that would follow a successful submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowUp {
    Dashboard,
    VerifyEmail,
}

impl FollowUp {
    #[must_use]
    pub fn for_panel(panel: Panel) -> Self {
        match panel {
            Panel::Login => FollowUp::Dashboard,
            Panel::Signup => FollowUp::VerifyEmail,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            FollowUp::Dashboard => "Login successful! This would redirect to the dashboard.",
            FollowUp::VerifyEmail => {
                "Account created! This would show an email verification screen."
            }
        }
    }
}

/// Renders banners on behalf of the controller.
pub trait NotificationPresenter {
    fn notify(&self, notification: &Notification);

    /// Schedules `follow_up` to be shown once `after` has elapsed. Called at
    /// most once per successful submission.
    fn follow_up(&self, follow_up: FollowUp, after: Duration);
}
