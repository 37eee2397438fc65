//! Per-controller session: which panel is active and whether a submission is
//! in flight.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    #[default]
    Login,
    Signup,
}

impl fmt::Display for Panel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Panel::Login => formatter.write_str("login"),
            Panel::Signup => formatter.write_str("signup"),
        }
    }
}

/// Session state shared by reference across the controller's await points.
///
/// `begin_submission` and `end_submission` are the only writers of the
/// submitting flag, so at most one submission is active at a time.
#[derive(Debug, Default)]
pub struct FormSession {
    active_panel: Cell<Panel>,
    submitting: Cell<bool>,
}

impl FormSession {
    #[must_use]
    pub fn new(panel: Panel) -> Self {
        Self {
            active_panel: Cell::new(panel),
            submitting: Cell::new(false),
        }
    }

    #[must_use]
    pub fn active_panel(&self) -> Panel {
        self.active_panel.get()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    #[must_use]
    pub fn can_switch_panel(&self) -> bool {
        !self.submitting.get()
    }

    /// Returns `false` without touching state if a submission is already active.
    pub fn begin_submission(&self) -> bool {
        if self.submitting.get() {
            return false;
        }
        self.submitting.set(true);
        true
    }

    pub fn end_submission(&self) {
        self.submitting.set(false);
    }

    /// Moves to `panel`. Returns `false` if it is already active or switching is
    /// locked by a pending submission.
    pub(crate) fn switch_to(&self, panel: Panel) -> bool {
        if self.active_panel.get() == panel || !self.can_switch_panel() {
            return false;
        }
        self.active_panel.set(panel);
        true
    }
}
