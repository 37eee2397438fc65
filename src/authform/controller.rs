//! Login/signup form controller.
//!
//! Submissions move through `Idle → Validating → Submitting → {Success,
//! Failure} → Idle`. The session gate is taken before the first await, so a
//! second submit arriving while one is pending is dropped as `Ignored`.
//! Releasing the gate happens in a drop guard: it runs whether the simulated
//! call succeeds, fails, errors, or the submit future itself is dropped.
//! The post-success follow-up is handed to the presenter together with the
//! banner, so it does not depend on the submit future being polled further.

use crate::authform::config::FormConfig;
use crate::authform::error::FormError;
use crate::authform::event::FormEvent;
use crate::authform::field::{Field, FieldId};
use crate::authform::notify::{
    FollowUp, Notification, NotificationPresenter, SHORT_PASSWORD_MESSAGE, TERMS_MESSAGE,
};
use crate::authform::session::{FormSession, Panel};
use crate::authform::simulator::{SubmissionOutcome, SubmissionSimulator};
use crate::authform::validator::validate;
use crate::authform::view::{FieldStatus, FormView};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use ulid::Ulid;

/// Loose signup gate checked before the simulated call. Reported as a banner,
/// separately from the 8-character field rule.
pub const POLICY_MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failure,
}

/// Panel-level checks that abort a submission with a banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyViolation {
    TermsNotAgreed,
    PasswordTooShort,
}

impl PolicyViolation {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            PolicyViolation::TermsNotAgreed => TERMS_MESSAGE,
            PolicyViolation::PasswordTooShort => SHORT_PASSWORD_MESSAGE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitReport {
    /// A submission was already in flight. Nothing was rendered.
    Ignored,
    /// Inline errors only, no banner.
    Invalid { fields: Vec<FieldId> },
    /// Banner shown, no simulated call started.
    Rejected(PolicyViolation),
    Completed(SubmissionOutcome),
}

pub struct FormController<S, V, N> {
    config: FormConfig,
    session: FormSession,
    phase: Cell<SubmissionPhase>,
    values: RefCell<BTreeMap<FieldId, String>>,
    statuses: RefCell<BTreeMap<FieldId, FieldStatus>>,
    terms_agreed: Cell<bool>,
    visible_passwords: RefCell<BTreeSet<FieldId>>,
    simulator: S,
    view: V,
    notifier: N,
}

impl<S, V, N> FormController<S, V, N>
where
    S: SubmissionSimulator,
    V: FormView,
    N: NotificationPresenter,
{
    /// Builds an idle controller showing the login panel.
    pub fn new(config: FormConfig, simulator: S, view: V, notifier: N) -> Self {
        Self {
            config,
            session: FormSession::new(Panel::Login),
            phase: Cell::new(SubmissionPhase::Idle),
            values: RefCell::new(BTreeMap::new()),
            statuses: RefCell::new(BTreeMap::new()),
            terms_agreed: Cell::new(false),
            visible_passwords: RefCell::new(BTreeSet::new()),
            simulator,
            view,
            notifier,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn simulator(&self) -> &S {
        &self.simulator
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase.get()
    }

    pub fn active_panel(&self) -> Panel {
        self.session.active_panel()
    }

    pub fn value(&self, field: FieldId) -> String {
        self.values.borrow().get(&field).cloned().unwrap_or_default()
    }

    pub fn status(&self, field: FieldId) -> FieldStatus {
        self.statuses.borrow().get(&field).cloned().unwrap_or_default()
    }

    pub fn terms_agreed(&self) -> bool {
        self.terms_agreed.get()
    }

    pub fn password_visible(&self, field: FieldId) -> bool {
        self.visible_passwords.borrow().contains(&field)
    }

    /// Applies one input event. Only `Submit` yields a report.
    ///
    /// # Errors
    /// Propagates simulator errors from `Submit`.
    pub async fn dispatch(&self, event: FormEvent) -> Result<Option<SubmitReport>, FormError> {
        match event {
            FormEvent::SwitchPanel { panel } => {
                self.switch_panel(panel);
            }
            FormEvent::Input { field, value } => self.input(field, value),
            FormEvent::Blur { field } => {
                self.blur(field);
            }
            FormEvent::Terms { agreed } => self.set_terms_agreed(agreed),
            FormEvent::TogglePassword { field } => {
                self.toggle_password_visibility(field);
            }
            FormEvent::Submit => return self.submit().await.map(Some),
        }
        Ok(None)
    }

    /// Shows `panel` with fresh inputs. Refused while a submission is in flight
    /// or when `panel` is already active.
    pub fn switch_panel(&self, panel: Panel) -> bool {
        if !self.session.switch_to(panel) {
            debug!(%panel, submitting = self.session.is_submitting(), "panel switch refused");
            return false;
        }

        self.clear_panel(panel);
        self.view.show_panel(panel);
        self.view.reset_panel(panel);
        debug!(%panel, "panel switched");
        true
    }

    /// Stores a typed value. A field showing an error is cleared and, if it is
    /// no longer blank, re-validated. The signup password re-validates on
    /// every keystroke and goes back to neutral once emptied.
    pub fn input(&self, field: FieldId, value: impl Into<String>) {
        self.values.borrow_mut().insert(field, value.into());

        if field == FieldId::SignupPassword {
            self.validate_field(field);
            if self.value(field).trim().is_empty() {
                self.render_status(field, FieldStatus::Neutral);
            }
            return;
        }

        if self.status(field).is_error() {
            self.render_status(field, FieldStatus::Neutral);
            if !self.value(field).trim().is_empty() {
                self.validate_field(field);
            }
        }
    }

    /// Validates a field as it loses focus.
    pub fn blur(&self, field: FieldId) -> bool {
        self.validate_field(field)
    }

    pub fn set_terms_agreed(&self, agreed: bool) {
        self.terms_agreed.set(agreed);
    }

    /// Flips a password field between hidden and shown. Returns the new
    /// visibility, or `None` for fields that are not passwords.
    pub fn toggle_password_visibility(&self, field: FieldId) -> Option<bool> {
        if !field.kind().is_password() {
            return None;
        }

        let visible = {
            let mut visible_passwords = self.visible_passwords.borrow_mut();
            if visible_passwords.remove(&field) {
                false
            } else {
                visible_passwords.insert(field);
                true
            }
        };
        self.view.set_password_visible(field, visible);
        Some(visible)
    }

    /// Runs the field rules and renders the verdict.
    pub fn validate_field(&self, field: FieldId) -> bool {
        let value = self.value(field);
        let result = validate(&Field::for_id(field, value.as_str()));
        debug!(%field, valid = result.valid, "field validated");
        self.render_status(field, FieldStatus::from_result(&result, &value));
        result.valid
    }

    /// Validates and submits the active panel.
    ///
    /// Returns as soon as the outcome banner is shown. A success also schedules
    /// the follow-up on the presenter, due `follow_up_delay` later.
    ///
    /// # Errors
    /// Returns `FormError::Simulator` if the request could not be simulated.
    /// The session is released and the controller is idle again either way.
    #[instrument(
        skip(self),
        fields(submission = %Ulid::new(), panel = %self.session.active_panel())
    )]
    pub async fn submit(&self) -> Result<SubmitReport, FormError> {
        if self.session.is_submitting() {
            debug!("submission already in flight");
            return Ok(SubmitReport::Ignored);
        }

        let panel = self.session.active_panel();
        self.set_phase(SubmissionPhase::Validating);

        let invalid = self.validate_panel(panel);

        if panel == Panel::Signup {
            if let Some(violation) = self.check_signup_policy() {
                warn!(?violation, "signup rejected by policy");
                self.notifier.notify(&Notification::error(
                    violation.message(),
                    self.config.notification_ttl,
                ));
                self.set_phase(SubmissionPhase::Idle);
                return Ok(SubmitReport::Rejected(violation));
            }
        }

        if !invalid.is_empty() {
            debug!(fields = ?invalid, "validation failed");
            self.set_phase(SubmissionPhase::Idle);
            return Ok(SubmitReport::Invalid { fields: invalid });
        }

        if !self.acquire_session() {
            return Ok(SubmitReport::Ignored);
        }

        let outcome = {
            let _guard = SubmissionGuard::engage(&self.session, &self.view, &self.phase, panel);

            let outcome = match self.simulator.submit(self.delay_for(panel)).await {
                Ok(outcome) => outcome,
                Err(err) => {
                    warn!(error = %err, "simulated submission aborted");
                    return Err(err);
                }
            };

            if outcome.success {
                info!("submission succeeded");
                self.set_phase(SubmissionPhase::Success);
            } else {
                info!(reason = ?outcome.error_reason, "submission failed");
                self.set_phase(SubmissionPhase::Failure);
            }
            self.notifier.notify(&Notification::outcome(
                panel,
                outcome.success,
                self.config.notification_ttl,
            ));
            if outcome.success {
                self.notifier
                    .follow_up(FollowUp::for_panel(panel), self.config.follow_up_delay);
            }

            outcome
        };

        Ok(SubmitReport::Completed(outcome))
    }

    // Takes the session gate. On refusal the phase goes back to Idle.
    fn acquire_session(&self) -> bool {
        if self.session.begin_submission() {
            return true;
        }
        debug!("submission already in flight");
        self.set_phase(SubmissionPhase::Idle);
        false
    }

    fn delay_for(&self, panel: Panel) -> Duration {
        match panel {
            Panel::Login => self.config.login_delay,
            Panel::Signup => self.config.signup_delay,
        }
    }

    // Every required field is checked so each one gets its inline status.
    fn validate_panel(&self, panel: Panel) -> Vec<FieldId> {
        FieldId::for_panel(panel)
            .iter()
            .copied()
            .filter(|field| field.required())
            .filter(|field| !self.validate_field(*field))
            .collect()
    }

    fn check_signup_policy(&self) -> Option<PolicyViolation> {
        if !self.terms_agreed.get() {
            return Some(PolicyViolation::TermsNotAgreed);
        }
        if self.value(FieldId::SignupPassword).chars().count() < POLICY_MIN_PASSWORD_LENGTH {
            return Some(PolicyViolation::PasswordTooShort);
        }
        None
    }

    fn clear_panel(&self, panel: Panel) {
        let fields = FieldId::for_panel(panel);
        self.values.borrow_mut().retain(|field, _| !fields.contains(field));
        self.statuses.borrow_mut().retain(|field, _| !fields.contains(field));
        if panel == Panel::Signup {
            self.terms_agreed.set(false);
        }
    }

    fn render_status(&self, field: FieldId, status: FieldStatus) {
        self.view.set_field_status(field, &status);
        self.statuses.borrow_mut().insert(field, status);
    }

    fn set_phase(&self, phase: SubmissionPhase) {
        debug!(from = ?self.phase.get(), to = ?phase, "phase transition");
        self.phase.set(phase);
    }
}

/// Holds the session gate for one submission and puts the form back to idle
/// when dropped.
struct SubmissionGuard<'a> {
    session: &'a FormSession,
    view: &'a dyn FormView,
    phase: &'a Cell<SubmissionPhase>,
    panel: Panel,
}

impl<'a> SubmissionGuard<'a> {
    fn engage(
        session: &'a FormSession,
        view: &'a dyn FormView,
        phase: &'a Cell<SubmissionPhase>,
        panel: Panel,
    ) -> Self {
        phase.set(SubmissionPhase::Submitting);
        view.set_loading(panel, true);
        view.set_panel_switch_enabled(false);
        Self {
            session,
            view,
            phase,
            panel,
        }
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.session.end_submission();
        self.view.set_loading(self.panel, false);
        self.view.set_panel_switch_enabled(true);
        self.phase.set(SubmissionPhase::Idle);
        debug!(panel = %self.panel, "submission released");
    }
}
