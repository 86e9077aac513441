use crate::{EngineError, OptionSet, SelectionResult};

const DELIMITER: &str = " x ";

/// Parses `"<a> x <b>"` and returns `a * b`
pub fn product(question: &str) -> Result<i64, EngineError> {
	let (lhs, rhs) = question.split_once(DELIMITER).ok_or_else(|| EngineError::malformed(question, "missing \" x \""))?;
	if rhs.contains(DELIMITER) {
		return Err(EngineError::malformed(question, "more than two operands"));
	}

	let operand = |s: &str| s.trim().parse::<i64>().map_err(|e| EngineError::malformed(question, format!("operand {:?}: {e}", s.trim())));
	let (a, b) = (operand(lhs)?, operand(rhs)?);

	a.checked_mul(b).ok_or_else(|| EngineError::malformed(question, "product overflows"))
}

/// Option whose integer value is the exact product.
///
/// When nothing matches the result is `index 0, matched = false`; that index is not a guess and should not be clicked.
pub fn choose(question: &str, options: &OptionSet) -> Result<SelectionResult, EngineError> {
	let product = product(question)?;
	let hit = options.position(|o| o.trim().parse::<i64>().is_ok_and(|v| v == product));
	Ok(hit.map_or(SelectionResult::guessed(0), SelectionResult::matched))
}
