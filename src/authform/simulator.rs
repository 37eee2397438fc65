//! Simulated outbound requests.
//!
//! A submission is a timer: it sleeps for the nominal delay of the panel and
//! then resolves. Ordinary failure is an `Ok` outcome with `success == false`;
//! `Err` is reserved for requests that cannot be simulated at all, such as a
//! delay above the configured maximum.

use crate::authform::error::FormError;
use rand::Rng;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tokio::time::sleep;

pub const SIMULATED_FAILURE: &str = "simulated failure";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub success: bool,
    pub error_reason: Option<String>,
}

impl SubmissionOutcome {
    #[must_use]
    pub fn success() -> Self {
        Self {
            success: true,
            error_reason: None,
        }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            error_reason: Some(reason.into()),
        }
    }
}

pub type SubmitFuture<'a> =
    Pin<Box<dyn Future<Output = Result<SubmissionOutcome, FormError>> + 'a>>;

/// Injectable stand-in for the network.
pub trait SubmissionSimulator {
    /// Suspends for `delay`, then resolves with the outcome of the request.
    fn submit(&self, delay: Duration) -> SubmitFuture<'_>;
}

/// Default simulator: succeeds with a fixed probability, re-drawn per call.
#[derive(Clone, Debug)]
pub struct RandomSimulator {
    success_rate: f64,
    max_delay: Duration,
}

impl RandomSimulator {
    pub const DEFAULT_SUCCESS_RATE: f64 = 0.9;
    pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(60);

    /// # Errors
    /// Returns an error if `success_rate` is not within `0.0..=1.0`.
    pub fn new(success_rate: f64) -> Result<Self, FormError> {
        if !(0.0..=1.0).contains(&success_rate) {
            return Err(FormError::Config(format!(
                "success rate must be between 0 and 1, got {success_rate}"
            )));
        }
        Ok(Self {
            success_rate,
            max_delay: Self::DEFAULT_MAX_DELAY,
        })
    }

    #[must_use]
    pub fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    #[must_use]
    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }
}

impl Default for RandomSimulator {
    fn default() -> Self {
        Self {
            success_rate: Self::DEFAULT_SUCCESS_RATE,
            max_delay: Self::DEFAULT_MAX_DELAY,
        }
    }
}

impl SubmissionSimulator for RandomSimulator {
    fn submit(&self, delay: Duration) -> SubmitFuture<'_> {
        Box::pin(async move {
            if delay > self.max_delay {
                return Err(FormError::Simulator(format!(
                    "delay of {}ms exceeds the {}ms maximum",
                    delay.as_millis(),
                    self.max_delay.as_millis()
                )));
            }

            sleep(delay).await;

            if rand::thread_rng().gen_bool(self.success_rate) {
                Ok(SubmissionOutcome::success())
            } else {
                Ok(SubmissionOutcome::failure(SIMULATED_FAILURE))
            }
        })
    }
}

/// Deterministic simulator that replays a fixed list of verdicts.
///
/// Once the list is exhausted every further call succeeds. Calls and their
/// requested delays are recorded for inspection.
#[derive(Debug, Default)]
pub struct ScriptedSimulator {
    verdicts: RefCell<VecDeque<bool>>,
    calls: Cell<usize>,
    delays: RefCell<Vec<Duration>>,
}

impl ScriptedSimulator {
    pub fn new(verdicts: impl IntoIterator<Item = bool>) -> Self {
        Self {
            verdicts: RefCell::new(verdicts.into_iter().collect()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failing() -> Self {
        Self::new([false])
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    #[must_use]
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.borrow().clone()
    }
}

impl SubmissionSimulator for ScriptedSimulator {
    fn submit(&self, delay: Duration) -> SubmitFuture<'_> {
        self.calls.set(self.calls.get() + 1);
        self.delays.borrow_mut().push(delay);
        let success = self.verdicts.borrow_mut().pop_front().unwrap_or(true);

        Box::pin(async move {
            sleep(delay).await;
            if success {
                Ok(SubmissionOutcome::success())
            } else {
                Ok(SubmissionOutcome::failure(SIMULATED_FAILURE))
            }
        })
    }
}
