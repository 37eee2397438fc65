//! # authform
//!
//! A login/signup form controller. It switches between the two panels,
//! validates fields as the user types and on submit, gates submissions so only
//! one is ever in flight, and reports outcomes through banner notifications.
//!
//! There is no backend. Every "request" is a [`SubmissionSimulator`] that
//! sleeps for a nominal delay and then succeeds or fails at random
//! (90% success by default). Hosts and tests inject a deterministic simulator
//! instead.
//!
//! Rendering is not part of the crate. The controller talks to the page (or
//! terminal) through two traits:
//!
//! - [`FormView`]: field styling, panel visibility, loading state.
//! - [`NotificationPresenter`]: transient success/error banners.
//!
//! The `authform` binary wires both to the terminal so the flows can be
//! driven from the command line or replayed from a JSON event script.
//!
//! [`SubmissionSimulator`]: authform::SubmissionSimulator
//! [`FormView`]: authform::FormView
//! [`NotificationPresenter`]: authform::NotificationPresenter

pub mod authform;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub(crate) mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
