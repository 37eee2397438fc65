//! Terminal host for the form controller. Banners and inline errors are
//! printed to stdout; every other view mutation is a debug log line.

use crate::authform::{
    FieldId, FieldStatus, FollowUp, FormConfig, FormController, FormView, Notification,
    NotificationKind, NotificationPresenter, Panel, RandomSimulator, SubmitReport,
};
use anyhow::Result;
use std::cell::RefCell;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

pub type ConsoleController = FormController<RandomSimulator, ConsoleView, ConsolePresenter>;

/// Builds a controller backed by the random simulator and the terminal.
/// # Errors
/// Returns an error if the configured success rate is out of range.
pub fn controller(config: FormConfig) -> Result<ConsoleController> {
    let simulator = RandomSimulator::new(config.success_rate)?;
    Ok(FormController::new(
        config,
        simulator,
        ConsoleView,
        ConsolePresenter::default(),
    ))
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleView;

impl FormView for ConsoleView {
    fn show_panel(&self, panel: Panel) {
        debug!(%panel, "show panel");
    }

    fn reset_panel(&self, panel: Panel) {
        debug!(%panel, "reset panel");
    }

    fn set_field_status(&self, field: FieldId, status: &FieldStatus) {
        match status {
            FieldStatus::Error(message) => println!("  {field}: {message}"),
            FieldStatus::Success => debug!(%field, "field ok"),
            FieldStatus::Neutral => debug!(%field, "field cleared"),
        }
    }

    fn set_loading(&self, panel: Panel, loading: bool) {
        if loading {
            println!("Submitting {panel}...");
        }
        debug!(%panel, loading, "loading state");
    }

    fn set_panel_switch_enabled(&self, enabled: bool) {
        debug!(enabled, "panel switch");
    }

    fn set_password_visible(&self, field: FieldId, visible: bool) {
        debug!(%field, visible, "password visibility");
    }
}

/// Prints banners immediately. Follow-ups are queued with their due time
/// and printed by [`ConsolePresenter::flush`].
#[derive(Debug, Default)]
pub struct ConsolePresenter {
    pending: RefCell<Vec<(Instant, FollowUp)>>,
}

impl ConsolePresenter {
    /// Waits for every queued follow-up to fall due and prints it.
    pub async fn flush(&self) {
        let mut pending = self.pending.take();
        pending.sort_by_key(|(due, _)| *due);
        for (due, follow_up) in pending {
            sleep_until(due).await;
            println!("[next] {}", follow_up.message());
        }
    }
}

impl NotificationPresenter for ConsolePresenter {
    fn notify(&self, notification: &Notification) {
        let label = match notification.kind {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        };
        info!(kind = label, ttl = ?notification.ttl, "notification");
        println!(
            "[{label}] {} (dismissed after {}ms)",
            notification.message,
            notification.ttl.as_millis()
        );
    }

    fn follow_up(&self, follow_up: FollowUp, after: Duration) {
        debug!(?follow_up, ?after, "follow-up scheduled");
        self.pending
            .borrow_mut()
            .push((Instant::now() + after, follow_up));
    }
}

/// One-line summary of a submit attempt.
#[must_use]
pub fn describe_report(report: &SubmitReport) -> String {
    match report {
        SubmitReport::Ignored => "submission ignored: another one is in flight".to_string(),
        SubmitReport::Invalid { fields } => {
            let names: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
            format!("fix the highlighted fields: {}", names.join(", "))
        }
        SubmitReport::Rejected(violation) => format!("rejected: {}", violation.message()),
        SubmitReport::Completed(outcome) if outcome.success => "submission succeeded".to_string(),
        SubmitReport::Completed(outcome) => format!(
            "submission failed: {}",
            outcome.error_reason.as_deref().unwrap_or("unknown error")
        ),
    }
}

pub fn print_report(report: &SubmitReport) {
    println!("{}", describe_report(report));
}
