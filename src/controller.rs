//! Prompt submission controller
//!
//! Owns the page state (prompt text, generated image, busy flag) and is its
//! only writer. Renderers read cloned snapshots through
//! [`PromptController::state`].

use crate::generator::GenerationService;
use crate::notify::{Notifier, Severity};
use crate::{Error, Result};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

pub const ERROR_TITLE: &str = "Error";
pub const EMPTY_PROMPT_MESSAGE: &str = "Please enter a prompt";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub prompt: String,
    pub image: Option<String>,
    pub busy: bool,
}

/// What the output area shows. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    Loading,
    Image(&'a str),
    Idle,
}

impl PageState {
    pub fn view(&self) -> View<'_> {
        match (self.busy, self.image.as_deref()) {
            (true, _) => View::Loading,
            (false, Some(url)) => View::Image(url),
            (false, None) => View::Idle,
        }
    }

    pub fn submit_enabled(&self) -> bool {
        !self.busy
    }
}

/// Result of one call to [`PromptController::submit`].
///
/// Failures have already been reported through the notifier by the time
/// this is returned.
#[derive(Debug)]
pub enum SubmitOutcome {
    Generated(String),
    Failed(Error),
}

impl SubmitOutcome {
    pub fn is_generated(&self) -> bool {
        matches!(self, SubmitOutcome::Generated(_))
    }

    pub fn into_result(self) -> Result<String> {
        match self {
            SubmitOutcome::Generated(url) => Ok(url),
            SubmitOutcome::Failed(e) => Err(e),
        }
    }
}

pub struct PromptController {
    generator: Box<dyn GenerationService>,
    notifier: Box<dyn Notifier>,
    state: Mutex<PageState>,
}

impl PromptController {
    pub fn new(generator: Box<dyn GenerationService>, notifier: Box<dyn Notifier>) -> Self {
        Self {
            generator,
            notifier,
            state: Mutex::new(PageState::default()),
        }
    }

    /// Snapshot of the current page state.
    pub fn state(&self) -> PageState {
        lock(&self.state).clone()
    }

    pub fn set_prompt(&self, prompt: impl Into<String>) {
        lock(&self.state).prompt = prompt.into();
    }

    /// Submit whatever is currently in the prompt field.
    pub async fn submit_current(&self) -> SubmitOutcome {
        let prompt = lock(&self.state).prompt.clone();
        self.submit(&prompt).await
    }

    /// Validate `prompt`, request an image for it and update the page state.
    ///
    /// The prompt is sent exactly as given; trimming only decides whether it
    /// is empty. Nothing guards against a second call while one is in flight
    /// beyond the disabled submit control.
    pub async fn submit(&self, prompt: &str) -> SubmitOutcome {
        lock(&self.state).prompt = prompt.to_string();

        if prompt.trim().is_empty() {
            warn!("Rejected empty prompt");
            self.notifier
                .notify(ERROR_TITLE, EMPTY_PROMPT_MESSAGE, Severity::Destructive);
            return SubmitOutcome::Failed(Error::Validation(EMPTY_PROMPT_MESSAGE.to_string()));
        }

        let request_id = Uuid::new_v4();
        self.generate(prompt)
            .instrument(info_span!("generate", %request_id))
            .await
    }

    async fn generate(&self, prompt: &str) -> SubmitOutcome {
        let _busy = BusyGuard::engage(&self.state);
        info!("Requesting image for prompt ({} chars)", prompt.chars().count());

        match self.generator.generate_image(prompt).await {
            Ok(url) => {
                info!("Image generated: {}", url);
                lock(&self.state).image = Some(url.clone());
                SubmitOutcome::Generated(url)
            }
            Err(e) => {
                error!("Image generation failed: {}", e);
                self.notifier
                    .notify(ERROR_TITLE, e.user_message(), Severity::Destructive);
                SubmitOutcome::Failed(Error::Generation(e))
            }
        }
    }
}

/// Marks the page busy for as long as it lives.
///
/// Clearing happens in `Drop`, so the flag resets on every exit path,
/// including a panic in a collaborator or the submission future being
/// dropped mid-request.
struct BusyGuard<'a> {
    state: &'a Mutex<PageState>,
}

impl<'a> BusyGuard<'a> {
    fn engage(state: &'a Mutex<PageState>) -> Self {
        {
            let mut state = lock(state);
            state.busy = true;
            state.image = None;
        }
        Self { state }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        lock(self.state).busy = false;
    }
}

fn lock(state: &Mutex<PageState>) -> MutexGuard<'_, PageState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
