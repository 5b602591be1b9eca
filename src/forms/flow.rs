//! Submit state machine shared by the story and petition forms

use async_trait::async_trait;
use tracing::{info, warn};

use super::draft::{Draft, FieldChange, FormError};
use crate::client::{Backend, ClientResult};

/// Where a form is in its submit lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    /// Confirmation shown after a successful submission, until `reopen`
    Submitted,
}

/// A draft that knows which backend operation creates its entity
#[async_trait(?Send)]
pub trait Submit: Draft {
    type Created;

    /// Short name used in log fields
    const KIND: &'static str;

    async fn send(&self, backend: &dyn Backend) -> ClientResult<Self::Created>;
}

/// Result of [`FormFlow::submit`]
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    /// The backend created the record; the page should refetch
    Created(T),
    /// Blocked before any network call
    Rejected(FormError),
    /// The backend call failed; the message is meant for a blocking notification
    Failed(String),
}

impl<T> SubmitOutcome<T> {
    pub fn is_created(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_))
    }
}

/// A draft plus its submit phase and last error
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFlow<D> {
    draft: D,
    phase: FormPhase,
    error: Option<String>,
}

impl<D: Draft> FormFlow<D> {
    pub fn new() -> Self {
        Self {
            draft: D::default(),
            phase: FormPhase::Editing,
            error: None,
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    /// Message from the last failed submission
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Apply one input event to the draft
    pub fn change(&mut self, change: &FieldChange) -> Result<(), FormError> {
        self.draft.apply(change)
    }

    /// Direct access for callers that set fields programmatically
    pub fn draft_mut(&mut self) -> &mut D {
        &mut self.draft
    }

    /// Validate and enter `Submitting`, returning the snapshot to send.
    ///
    /// An invalid draft stays in `Editing` and nothing is sent.
    pub fn begin(&mut self) -> Result<D, FormError> {
        if self.phase == FormPhase::Submitting {
            return Err(FormError::Busy);
        }
        self.draft.validate()?;
        self.phase = FormPhase::Submitting;
        self.error = None;
        Ok(self.draft.clone())
    }

    /// Reconcile the backend's answer with the draft.
    ///
    /// Success resets the draft and shows the confirmation; failure keeps the
    /// draft, records the user-facing message and returns to `Editing`.
    pub fn finish<T>(&mut self, result: ClientResult<T>) -> Result<T, String> {
        match result {
            Ok(created) => {
                self.draft.reset();
                self.phase = FormPhase::Submitted;
                self.error = None;
                Ok(created)
            }
            Err(e) => {
                let message = e.user_message();
                self.phase = FormPhase::Editing;
                self.error = Some(message.clone());
                Err(message)
            }
        }
    }

    /// Leave the confirmation and start a fresh draft
    pub fn reopen(&mut self) {
        self.draft.reset();
        self.phase = FormPhase::Editing;
        self.error = None;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

impl<D: Submit> FormFlow<D> {
    /// Validate, send a snapshot of the draft, and reconcile
    pub async fn submit(&mut self, backend: &dyn Backend) -> SubmitOutcome<D::Created> {
        let snapshot = match self.begin() {
            Ok(snapshot) => snapshot,
            Err(e) => return SubmitOutcome::Rejected(e),
        };

        let result = snapshot.send(backend).await;
        let failure = result.as_ref().err().cloned();

        match self.finish(result) {
            Ok(created) => {
                info!(kind = D::KIND, "Submission accepted");
                SubmitOutcome::Created(created)
            }
            Err(message) => {
                if let Some(e) = failure {
                    warn!(kind = D::KIND, error = %e, "Submission failed");
                }
                SubmitOutcome::Failed(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;
    use crate::forms::{SignatureDraft, StoryDraft};
    use crate::models::StoryCategory;
    use crate::testing::StubBackend;

    fn jane() -> FormFlow<SignatureDraft> {
        let mut flow = FormFlow::<SignatureDraft>::new();
        for (name, value) in [
            ("name", "Jane"),
            ("email", "jane@x.com"),
            ("location", "Nairobi"),
            ("county", "Nairobi"),
            ("comment", ""),
        ] {
            flow.change(&FieldChange::text(name, value)).unwrap();
        }
        flow.change(&FieldChange::checkbox("isAnonymous", false))
            .unwrap();
        flow
    }

    fn story() -> FormFlow<StoryDraft> {
        let mut flow = FormFlow::<StoryDraft>::new();
        let draft = flow.draft_mut();
        draft.title = "Dry wells".to_string();
        draft.content = "The borehole failed in March.".to_string();
        draft.author = "Ekai".to_string();
        draft.email = "ekai@example.org".to_string();
        draft.location = "Kakuma".to_string();
        draft.county = "Turkana".to_string();
        draft.category = StoryCategory::Drought;
        draft.consent = true;
        flow
    }

    #[tokio::test]
    async fn test_successful_signature_resets_and_confirms() {
        let backend = StubBackend::seeded();
        let before = backend.fetch_petition_stats().await.unwrap();

        let mut flow = jane();
        let outcome = flow.submit(&backend).await;

        let created = match outcome {
            SubmitOutcome::Created(sig) => sig,
            other => panic!("expected Created, got {:?}", other),
        };
        assert_eq!(created.name.as_deref(), Some("Jane"));
        assert_eq!(flow.phase(), FormPhase::Submitted);
        assert!(!flow.is_submitting());
        assert!(flow.draft().is_pristine());
        assert_eq!(flow.error(), None);

        let after = backend.fetch_petition_stats().await.unwrap();
        assert_eq!(after.total_signatures, before.total_signatures + 1);
    }

    #[tokio::test]
    async fn test_successful_story_uses_same_confirmation() {
        let backend = StubBackend::seeded();
        let mut flow = story();

        assert!(flow.submit(&backend).await.is_created());
        assert!(flow.is_submitted());
        assert_eq!(flow.draft(), &StoryDraft::default());

        flow.reopen();
        assert_eq!(flow.phase(), FormPhase::Editing);
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_draft() {
        let backend = StubBackend::seeded();
        backend.fail_with(ClientError::Status {
            status: 400,
            message: Some("You have already signed this petition".to_string()),
        });

        let mut flow = jane();
        let before = flow.draft().clone();
        let outcome = flow.submit(&backend).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed("You have already signed this petition".to_string())
        );
        assert_eq!(flow.draft(), &before);
        assert_eq!(flow.phase(), FormPhase::Editing);
        assert_eq!(flow.error(), Some("You have already signed this petition"));
    }

    #[tokio::test]
    async fn test_transport_failure_reports_generic_message() {
        let backend = StubBackend::seeded();
        backend.fail_with(ClientError::Transport("connection refused".to_string()));

        let mut flow = story();
        match flow.submit(&backend).await {
            SubmitOutcome::Failed(message) => {
                assert_eq!(message, crate::client::GENERIC_TRANSPORT_MESSAGE)
            }
            other => panic!("expected Failed, got {:?}", other),
        }
        assert!(!flow.draft().is_pristine());
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_backend() {
        let backend = StubBackend::seeded();
        let mut flow = FormFlow::<StoryDraft>::new();
        flow.change(&FieldChange::text("title", "Only a title"))
            .unwrap();

        let outcome = flow.submit(&backend).await;
        assert!(matches!(outcome, SubmitOutcome::Rejected(FormError::Invalid(_))));
        assert_eq!(flow.phase(), FormPhase::Editing);
        assert_eq!(backend.calls(), 0);
    }

    #[test]
    fn test_begin_twice_is_busy() {
        let mut flow = jane();
        flow.begin().unwrap();
        assert!(flow.is_submitting());
        assert_eq!(flow.begin(), Err(FormError::Busy));
    }

    #[test]
    fn test_finish_error_clears_submitting() {
        let mut flow = jane();
        flow.begin().unwrap();
        let result: Result<(), String> = flow.finish(Err(ClientError::Timeout));
        assert!(result.is_err());
        assert!(!flow.is_submitting());

        flow.dismiss_error();
        assert_eq!(flow.error(), None);
    }
}
