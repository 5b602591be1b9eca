//! Form Submission Flow
//!
//! Drafts are flat records mirroring the writable fields of a story or a
//! signature. Field changes arrive by name, the way DOM input events do, and
//! checkbox-backed fields are coerced to booleans. [`FormFlow`] wraps a draft
//! with the submit state machine shared by both forms:
//!
//! ```text
//! Editing --submit--> Submitting --ok--> Submitted --reopen--> Editing
//!                          \--err--> Editing (draft kept, error recorded)
//! ```
//!
//! Validation runs before any network call; an invalid draft never leaves
//! `Editing`.

mod draft;
mod flow;
mod signature;
mod story;

pub use draft::{
    Draft, FieldChange, FieldValue, FormError, InputKind, IssueKind, ValidationIssue,
};
pub use flow::{FormFlow, FormPhase, Submit, SubmitOutcome};
pub use signature::{SignatureDraft, SignatureRequest};
pub use story::StoryDraft;
