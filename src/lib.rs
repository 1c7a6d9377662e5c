pub mod config;
pub mod document;
pub mod error;
pub mod event_bus;
pub mod form;
pub mod study_spec;
pub mod submission;
pub mod util;

pub use config::EditorConfig;
pub use error::EditorError;
pub use submission::{SubmissionHandler, SubmissionOutcome};
