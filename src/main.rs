use chromiumoxide::browser::{Browser, BrowserConfig};
use clap::Parser;
use color_eyre::{
	Result,
	eyre::{WrapErr, eyre},
};
use futures::StreamExt;
use rice_headless::{
	Category, Engine,
	browser::{QuizPage, SearchPage, ThesaurusLookup},
	collaborators::ThreadRandom,
	config::{AppConfig, SettingsFlags},
	llm::LlmTranslator,
	runner,
};
use v_utils::{elog, log};

#[derive(Debug, Parser)]
#[command(name = "rice_headless")]
#[command(about = "Answers freerice.com questions with per-category heuristics", long_about = None)]
struct Args {
	/// Category slug, e.g. english-vocabulary, multiplication-table, spanish, famous-quotations
	category: String,

	/// Number of questions to answer
	#[arg(short, long)]
	num_questions: u32,

	#[command(flatten)]
	settings: SettingsFlags,
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;
	let args = Args::parse();

	// Config problems and run failures get told apart for the operator
	let config = match AppConfig::try_build(args.settings).map_err(|e| eyre!("{e}")).and_then(|c| c.validate().map(|()| c)) {
		Ok(config) => config,
		Err(e) => {
			elog!("Invalid configuration: {e}");
			return Err(e.wrap_err("Invalid configuration"));
		}
	};

	let category = Category::from_slug(&args.category);
	if !category.is_supported() || args.num_questions == 0 {
		log!("Nothing to do for '{}' x{}", category, args.num_questions);
		return Ok(());
	}

	if let Err(e) = run(&config, &category, args.num_questions).await {
		elog!("Run failed: {e}");
		return Err(e.wrap_err("Run failed"));
	}
	Ok(())
}

async fn run(config: &AppConfig, category: &Category, num_questions: u32) -> Result<()> {
	let builder = if config.visible { BrowserConfig::builder().with_head() } else { BrowserConfig::builder() };
	let browser_config = builder.build().map_err(|e| eyre!("Failed to build browser config: {}", e))?;

	let (mut browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| eyre!("Failed to launch browser: {}", e))?;

	// Events must be drained or the browser hangs
	let handle = tokio::spawn(async move { while let Some(_event) = handler.next().await {} });

	let quiz_tab = browser.new_page("about:blank").await.map_err(|e| eyre!("Failed to create quiz page: {}", e))?;
	let scratch_tab = browser.new_page("about:blank").await.map_err(|e| eyre!("Failed to create scratch page: {}", e))?;

	let url = config.category_url(category.slug());
	log!("Opening {url}");
	quiz_tab.goto(&url).await.map_err(|e| eyre!("Failed to navigate: {}", e))?;
	tokio::time::sleep(tokio::time::Duration::from_millis(config.page_load_delay_ms)).await;

	let quiz = QuizPage::new(quiz_tab.clone(), config.question_selector().to_string(), config.option_selector().to_string());
	let thesaurus = ThesaurusLookup::new(scratch_tab.clone(), config.thesaurus_url().to_string());
	let search = SearchPage::new(scratch_tab.clone(), config.search_url().to_string());
	let translator = LlmTranslator;
	let rng = ThreadRandom;
	let engine = Engine::new(&thesaurus, &translator, &search, &rng);

	let outcome = runner::run(&quiz, &engine, category, num_questions, config).await.wrap_err_with(|| format!("while answering '{category}'"));

	match &outcome {
		Ok(summary) => {
			log!("Answered {} ({} matched, {} guessed), skipped {}", summary.answered, summary.matched, summary.guessed, summary.skipped);
		}
		Err(_) => tracing::warn!("aborting run, closing browser"),
	}

	drop(quiz);
	drop(quiz_tab);
	drop(scratch_tab);
	browser.close().await.map_err(|e| eyre!("Failed to close browser: {}", e))?;
	drop(browser);
	handle.abort();

	outcome.map(|_| ())
}
