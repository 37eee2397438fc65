//! Form controller core: field rules, session gate, simulated submissions and
//! the state machine that ties them together.
//!
//! ## Submit Flow
//!
//! 1. **Validate:** every required field of the active panel is checked and its
//!    status rendered. Signup then enforces the terms checkbox and a loose
//!    6-character password gate, both reported as banners.
//! 2. **Gate:** [`FormSession::begin_submission`] runs before the first await,
//!    so a second submit while one is pending is ignored.
//! 3. **Simulate:** the [`SubmissionSimulator`] sleeps for the panel's delay and
//!    returns an outcome.
//! 4. **Report:** the session is released, a banner is shown and, on success
//!    only, a follow-up placeholder is presented after a further delay.
//!
//! Everything here is single-threaded. Shared state lives in `Cell`/`RefCell`
//! owned by the controller, and no borrow is held across an await.

pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod field;
pub mod notify;
pub mod session;
pub mod simulator;
pub mod validator;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::FormConfig;
pub use controller::{FormController, PolicyViolation, SubmissionPhase, SubmitReport};
pub use error::FormError;
pub use event::FormEvent;
pub use field::{Field, FieldId, FieldKind};
pub use notify::{FollowUp, Notification, NotificationKind, NotificationPresenter};
pub use session::{FormSession, Panel};
pub use simulator::{RandomSimulator, ScriptedSimulator, SubmissionOutcome, SubmissionSimulator};
pub use validator::{validate, ValidationResult};
pub use view::{FieldStatus, FormView};
