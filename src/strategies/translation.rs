use crate::{OPTION_COUNT, OptionSet, SelectionResult, collaborators::RandomSource};

/// The foreign phrase of a `"<phrase> means"` question
pub fn phrase(question: &str) -> &str {
	question.split(" means").next().unwrap_or(question)
}

/// Either string, upper-cased, contains the other.
///
/// Loose on purpose: translations come back with articles, punctuation or plurals the options don't have.
pub fn semi_equals(a: &str, b: &str) -> bool {
	let (a, b) = (a.to_uppercase(), b.to_uppercase());
	a.contains(&b) || b.contains(&a)
}

pub fn choose(reference: &str, options: &OptionSet, rng: &impl RandomSource) -> SelectionResult {
	match options.position(|o| semi_equals(o, reference)) {
		Some(index) => SelectionResult::matched(index),
		None => SelectionResult::guessed(rng.index_below(OPTION_COUNT)),
	}
}
