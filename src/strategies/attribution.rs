use crate::{FrequencyMap, OptionSet, SelectionResult};

/// Non-overlapping, case-sensitive occurrences of each option in `text`. Empty options count zero.
pub fn frequencies(text: &str, options: &OptionSet) -> FrequencyMap {
	let mut counts = [0; crate::OPTION_COUNT];
	for (count, option) in counts.iter_mut().zip(options.iter()) {
		if !option.is_empty() {
			*count = text.matches(option).count();
		}
	}
	counts
}

/// Index of the highest count; ties go to the earliest option.
pub fn pick(counts: &FrequencyMap) -> usize {
	// `max_by_key` keeps the last maximum, so scan by hand
	let mut best = 0;
	for (i, &count) in counts.iter().enumerate().skip(1) {
		if count > counts[best] {
			best = i;
		}
	}
	best
}

/// Always reports `matched = true`: even all-zero counts resolve deterministically.
pub fn choose(search_text: &str, options: &OptionSet) -> SelectionResult {
	SelectionResult::matched(pick(&frequencies(search_text, options)))
}
