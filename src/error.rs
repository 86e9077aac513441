use miette::Diagnostic;
use thiserror::Error;

/// Failures the engine itself reports. Collaborator errors are not wrapped here; they travel as [color_eyre::Report].
#[derive(Debug, Diagnostic, Error)]
pub enum EngineError {
	#[error("Malformed question {question:?}: {reason}")]
	#[diagnostic(code(rice_headless::malformed_question), help("the question is skipped rather than guessed"))]
	MalformedQuestion { question: String, reason: String },

	#[error("Expected 4 options, page had {0}")]
	#[diagnostic(code(rice_headless::wrong_option_count))]
	WrongOptionCount(usize),
}

impl EngineError {
	pub fn malformed(question: &str, reason: impl Into<String>) -> Self {
		Self::MalformedQuestion {
			question: question.to_string(),
			reason: reason.into(),
		}
	}
}
