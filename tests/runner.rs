mod common;

use common::{FakeLexicon, FakeQuiz, FakeSearch, FakeTranslator, Fixed};
use rice_headless::{
	Category, Engine,
	config::AppConfig,
	runner::{RunSummary, run},
};

fn fast_config() -> AppConfig {
	AppConfig {
		read_delay_min_ms: 0,
		read_delay_max_ms: 1,
		answer_delay_ms: 0,
		max_consecutive_failures: 2,
		..AppConfig::with_defaults()
	}
}

#[tokio::test]
async fn arithmetic_run_clicks_products_and_skips_the_rest() {
	let quiz = FakeQuiz::new(vec![
		("7 x 8", ["54", "56", "63", "48"]),
		("seven x 3", ["21", "20", "10", "7"]),
		("2 x 2", ["1", "2", "3", "5"]),
		("12 x 12", ["144", "124", "142", "122"]),
	]);
	let (lexicon, translator, search) = (FakeLexicon::default(), FakeTranslator::default(), FakeSearch::default());
	let rng = Fixed(3);
	let engine = Engine::new(&lexicon, &translator, &search, &rng);

	let summary = run(&quiz, &engine, &Category::Arithmetic, 4, &fast_config()).await.unwrap();

	assert_eq!(*quiz.clicks.borrow(), vec![1, 0]);
	assert_eq!(
		summary,
		RunSummary {
			answered: 2,
			matched: 2,
			guessed: 0,
			skipped: 2
		}
	);
}

#[tokio::test]
async fn vocabulary_run_clicks_guesses() {
	let quiz = FakeQuiz::new(vec![("elated", ["sad", "joyful", "angry", "tired"]), ("morose", ["bright", "loud", "quick", "odd"])]);
	let lexicon = FakeLexicon {
		words: vec!["joyful"],
		..Default::default()
	};
	let (translator, search) = (FakeTranslator::default(), FakeSearch::default());
	let rng = Fixed(2);
	let engine = Engine::new(&lexicon, &translator, &search, &rng);

	let summary = run(&quiz, &engine, &Category::Vocabulary, 2, &fast_config()).await.unwrap();

	assert_eq!(*quiz.clicks.borrow(), vec![1, 2]);
	assert_eq!((summary.matched, summary.guessed), (1, 1));
}

#[tokio::test]
async fn consecutive_collaborator_failures_abort() {
	let quiz = FakeQuiz::new(vec![("a", ["w", "x", "y", "z"]), ("b", ["w", "x", "y", "z"]), ("c", ["w", "x", "y", "z"])]);
	let lexicon = FakeLexicon {
		fail: true,
		..Default::default()
	};
	let (translator, search) = (FakeTranslator::default(), FakeSearch::default());
	let rng = Fixed(0);
	let engine = Engine::new(&lexicon, &translator, &search, &rng);

	let result = run(&quiz, &engine, &Category::Vocabulary, 3, &fast_config()).await;

	assert!(result.is_err());
	assert_eq!(lexicon.calls.borrow().len(), 2);
	assert!(quiz.clicks.borrow().is_empty());
}

#[tokio::test]
async fn nothing_happens_for_zero_questions_or_unsupported_category() {
	let quiz = FakeQuiz::new(vec![("canis", ["cat", "dog", "horse", "bird"])]);
	let (lexicon, translator, search) = (FakeLexicon::default(), FakeTranslator::default(), FakeSearch::default());
	let rng = Fixed(0);
	let engine = Engine::new(&lexicon, &translator, &search, &rng);

	assert_eq!(run(&quiz, &engine, &Category::Vocabulary, 0, &fast_config()).await.unwrap(), RunSummary::default());
	assert_eq!(run(&quiz, &engine, &Category::from_slug("latin"), 5, &fast_config()).await.unwrap(), RunSummary::default());
	assert_eq!(quiz.reads.get(), 0);
}

#[tokio::test]
async fn missing_option_buttons_count_toward_failure_budget() {
	let quiz = FakeQuiz {
		no_options: true,
		..FakeQuiz::new(vec![("7 x 8", ["54", "56", "63", "48"]); 10])
	};
	let (lexicon, translator, search) = (FakeLexicon::default(), FakeTranslator::default(), FakeSearch::default());
	let rng = Fixed(0);
	let engine = Engine::new(&lexicon, &translator, &search, &rng);

	let result = run(&quiz, &engine, &Category::Arithmetic, 10, &fast_config()).await;

	assert!(result.is_err());
	assert_eq!(quiz.reads.get(), 2);
	assert!(quiz.clicks.borrow().is_empty());
}

#[tokio::test]
async fn malformed_questions_do_not_exhaust_failure_budget() {
	let quiz = FakeQuiz::new(vec![
		("seven x 3", ["21", "20", "10", "7"]),
		("eight x 2", ["16", "20", "10", "7"]),
		("nine x 1", ["9", "20", "10", "7"]),
		("3 x 3", ["1", "9", "10", "7"]),
	]);
	let (lexicon, translator, search) = (FakeLexicon::default(), FakeTranslator::default(), FakeSearch::default());
	let rng = Fixed(0);
	let engine = Engine::new(&lexicon, &translator, &search, &rng);

	let summary = run(&quiz, &engine, &Category::Arithmetic, 4, &fast_config()).await.unwrap();

	assert_eq!((summary.answered, summary.skipped), (1, 3));
	assert_eq!(*quiz.clicks.borrow(), vec![1]);
}
