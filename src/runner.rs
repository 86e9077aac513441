//! Question loop: read, dispatch, click, wait

use std::time::Duration;

use color_eyre::{Result, eyre::bail};
use v_utils::{elog, log};

use crate::{
	Category, Engine, EngineError, SelectionResult,
	collaborators::{ActionSink, PageReader, RandomSource, SearchTextProvider, SynonymLookup, Translator},
	config::AppConfig,
};

/// Tally of one run
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunSummary {
	/// Questions an option was clicked for
	pub answered: u32,
	/// Of those, how many came from a heuristic match
	pub matched: u32,
	/// Of those, how many were random fallbacks
	pub guessed: u32,
	/// Questions left unanswered (malformed, or no exact product)
	pub skipped: u32,
}

enum Outcome {
	Clicked(SelectionResult),
	Skipped,
}

/// Run the stop hook with a message if configured
fn run_stop_hook(config: &AppConfig, message: &str) {
	if let Some(ref hook) = config.stop_hook {
		log!("Running stop hook: {} {:?}", hook, message);
		// Escape single quotes for shell: replace ' with '\''
		let escaped = message.replace('\'', "'\\''");
		let _ = tokio::process::Command::new("sh").arg("-c").arg(format!("{} '{}'", hook, escaped)).spawn();
	}
}

/// Pause as if reading the question
async fn reading_pause(config: &AppConfig) {
	let ms = rand::random_range(config.read_delay_min_ms..config.read_delay_max_ms);
	tokio::time::sleep(Duration::from_millis(ms)).await;
}

async fn answer_one<P, L, T, S, R>(quiz: &P, engine: &Engine<'_, L, T, S, R>, category: &Category) -> Result<Outcome>
where
	P: PageReader + ActionSink,
	L: SynonymLookup,
	T: Translator,
	S: SearchTextProvider,
	R: RandomSource,
{
	let question = quiz.read_question().await?;
	let options = quiz.read_options().await?;
	tracing::info!("{question}\n{options}");

	let Some(result) = engine.select(category, &question, &options).await? else {
		return Ok(Outcome::Skipped);
	};

	// A non-match on arithmetic is not a guess, just the absence of an answer
	if !result.matched && matches!(category, Category::Arithmetic) {
		elog!("No option equals the product of {question:?}");
		return Ok(Outcome::Skipped);
	}

	quiz.select_option(result.index).await?;
	log!("Selected {}: {}", result, options.get(result.index).unwrap_or_default());
	Ok(Outcome::Clicked(result))
}

/// Answer `num_questions` questions in `category`.
///
/// Malformed questions are skipped. Collaborator failures skip the question too, until `max_consecutive_failures` in a row abort the run.
pub async fn run<P, L, T, S, R>(quiz: &P, engine: &Engine<'_, L, T, S, R>, category: &Category, num_questions: u32, config: &AppConfig) -> Result<RunSummary>
where
	P: PageReader + ActionSink,
	L: SynonymLookup,
	T: Translator,
	S: SearchTextProvider,
	R: RandomSource,
{
	let mut summary = RunSummary::default();

	if num_questions == 0 {
		return Ok(summary);
	}
	if !category.is_supported() {
		log!("Category '{category}' is not supported, nothing to do");
		return Ok(summary);
	}

	let mut consecutive_failures = 0;
	for i in 1..=num_questions {
		reading_pause(config).await;

		match answer_one(quiz, engine, category).await {
			Ok(Outcome::Clicked(result)) => {
				consecutive_failures = 0;
				summary.answered += 1;
				if result.matched {
					summary.matched += 1;
				} else {
					summary.guessed += 1;
				}
				log!("Finished with question {i}");
			}
			Ok(Outcome::Skipped) => {
				consecutive_failures = 0;
				summary.skipped += 1;
				log!("Skipped question {i}");
			}
			// A wrong option count means the page reader is broken, so it falls through to the failure budget
			Err(e) if matches!(e.downcast_ref::<EngineError>(), Some(EngineError::MalformedQuestion { .. })) => {
				summary.skipped += 1;
				elog!("Skipping question {i}: {e}");
			}
			Err(e) => {
				consecutive_failures += 1;
				summary.skipped += 1;
				elog!("Failed on question {i}: {e} ({consecutive_failures}/{})", config.max_consecutive_failures);
				if consecutive_failures >= config.max_consecutive_failures {
					run_stop_hook(config, &format!("Exceeded {} consecutive failures", config.max_consecutive_failures));
					bail!("Exceeded {} consecutive failures", config.max_consecutive_failures);
				}
			}
		}

		// Next question needs time to pop up
		tokio::time::sleep(Duration::from_millis(config.answer_delay_ms)).await;
	}

	log!("Done!");
	tracing::info!(?summary, "run complete");
	run_stop_hook(
		config,
		&format!("Answered {} ({} matched, {} guessed), skipped {}", summary.answered, summary.matched, summary.guessed, summary.skipped),
	);
	Ok(summary)
}
