//! Recording collaborators for controller tests.

use crate::authform::config::FormConfig;
use crate::authform::controller::FormController;
use crate::authform::field::FieldId;
use crate::authform::notify::{FollowUp, Notification, NotificationPresenter};
use crate::authform::session::Panel;
use crate::authform::simulator::SubmissionSimulator;
use crate::authform::view::{FieldStatus, FormView};
use std::cell::RefCell;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ViewCall {
    ShowPanel(Panel),
    ResetPanel(Panel),
    FieldStatus(FieldId, FieldStatus),
    Loading(Panel, bool),
    SwitchEnabled(bool),
    PasswordVisible(FieldId, bool),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingView {
    calls: RefCell<Vec<ViewCall>>,
}

impl RecordingView {
    pub(crate) fn calls(&self) -> Vec<ViewCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ViewCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl FormView for RecordingView {
    fn show_panel(&self, panel: Panel) {
        self.record(ViewCall::ShowPanel(panel));
    }

    fn reset_panel(&self, panel: Panel) {
        self.record(ViewCall::ResetPanel(panel));
    }

    fn set_field_status(&self, field: FieldId, status: &FieldStatus) {
        self.record(ViewCall::FieldStatus(field, status.clone()));
    }

    fn set_loading(&self, panel: Panel, loading: bool) {
        self.record(ViewCall::Loading(panel, loading));
    }

    fn set_panel_switch_enabled(&self, enabled: bool) {
        self.record(ViewCall::SwitchEnabled(enabled));
    }

    fn set_password_visible(&self, field: FieldId, visible: bool) {
        self.record(ViewCall::PasswordVisible(field, visible));
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingPresenter {
    notifications: RefCell<Vec<Notification>>,
    follow_ups: RefCell<Vec<(FollowUp, Duration)>>,
}

impl RecordingPresenter {
    pub(crate) fn notifications(&self) -> Vec<Notification> {
        self.notifications.borrow().clone()
    }

    pub(crate) fn follow_ups(&self) -> Vec<FollowUp> {
        self.follow_ups.borrow().iter().map(|(follow_up, _)| *follow_up).collect()
    }

    pub(crate) fn follow_up_delays(&self) -> Vec<Duration> {
        self.follow_ups.borrow().iter().map(|(_, after)| *after).collect()
    }
}

impl NotificationPresenter for RecordingPresenter {
    fn notify(&self, notification: &Notification) {
        self.notifications.borrow_mut().push(notification.clone());
    }

    fn follow_up(&self, follow_up: FollowUp, after: Duration) {
        self.follow_ups.borrow_mut().push((follow_up, after));
    }
}

pub(crate) type TestController<S> = FormController<S, RecordingView, RecordingPresenter>;

pub(crate) fn controller<S: SubmissionSimulator>(simulator: S) -> TestController<S> {
    controller_with(FormConfig::default(), simulator)
}

pub(crate) fn controller_with<S: SubmissionSimulator>(
    config: FormConfig,
    simulator: S,
) -> TestController<S> {
    FormController::new(
        config,
        simulator,
        RecordingView::default(),
        RecordingPresenter::default(),
    )
}
