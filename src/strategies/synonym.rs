use crate::{EngineError, OPTION_COUNT, OptionSet, SelectionResult, SynonymSet, collaborators::RandomSource};

/// The word being defined: first whitespace-delimited token of the question
pub fn lookup_term(question: &str) -> Result<&str, EngineError> {
	question.split_whitespace().next().ok_or_else(|| EngineError::malformed(question, "no word to look up"))
}

/// First option that appears verbatim in `synonyms`, otherwise a random guess.
///
/// Membership is exact and case-sensitive; the site prints options the same way the thesaurus lists them.
pub fn choose(synonyms: &SynonymSet, options: &OptionSet, rng: &impl RandomSource) -> SelectionResult {
	match options.position(|o| synonyms.contains(o)) {
		Some(index) => SelectionResult::matched(index),
		None => SelectionResult::guessed(rng.index_below(OPTION_COUNT)),
	}
}
