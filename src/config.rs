use color_eyre::{Result, eyre::bail};
use v_utils::macros::{MyConfigPrimitives, Settings};

#[derive(Clone, Debug, Default, MyConfigPrimitives, Settings)]
pub struct AppConfig {
	/// Run with visible browser window (non-headless mode)
	#[serde(default)]
	pub visible: bool,
	/// Category pages live at `<base_url><slug>` (default: https://freerice.com/categories/)
	#[serde(default)]
	pub base_url: Option<String>,
	/// CSS selector of the question text (default: .card-title)
	#[serde(default)]
	pub question_selector: Option<String>,
	/// CSS selector matching the four answer buttons, in on-screen order (default: .card-button)
	#[serde(default)]
	pub option_selector: Option<String>,
	/// Thesaurus entry for a word is `<thesaurus_url><word>` (default: https://www.thesaurus.com/browse/)
	#[serde(default)]
	pub thesaurus_url: Option<String>,
	/// Search results for a quote are `<search_url><url-encoded quote>` (default: https://www.google.com/search?q=)
	#[serde(default)]
	pub search_url: Option<String>,
	/// Wait after opening the category page (default: 5000)
	#[serde(default = "default_page_load_delay_ms")]
	pub page_load_delay_ms: u64,
	/// Lower bound of the random "reading" pause before each answer (default: 2000)
	#[serde(default = "default_read_delay_min_ms")]
	pub read_delay_min_ms: u64,
	/// Upper bound, exclusive (default: 6000)
	#[serde(default = "default_read_delay_max_ms")]
	pub read_delay_max_ms: u64,
	/// Wait for the next question to appear after answering (default: 5000)
	#[serde(default = "default_answer_delay_ms")]
	pub answer_delay_ms: u64,
	/// Max consecutive collaborator failures (lookup, translation, search, page) before stopping (default: 5)
	#[serde(default = "default_max_consecutive_failures")]
	pub max_consecutive_failures: u32,
	/// Command to run on completion/error (receives message as argument)
	#[serde(default)]
	pub stop_hook: Option<String>,
}

const BASE_URL: &str = "https://freerice.com/categories/";
const QUESTION_SELECTOR: &str = ".card-title";
const OPTION_SELECTOR: &str = ".card-button";
const THESAURUS_URL: &str = "https://www.thesaurus.com/browse/";
const SEARCH_URL: &str = "https://www.google.com/search?q=";

fn default_page_load_delay_ms() -> u64 {
	5000
}

fn default_read_delay_min_ms() -> u64 {
	2000
}

fn default_read_delay_max_ms() -> u64 {
	6000
}

fn default_answer_delay_ms() -> u64 {
	5000
}

fn default_max_consecutive_failures() -> u32 {
	5
}

impl AppConfig {
	/// Config with every field at its serde default
	pub fn with_defaults() -> Self {
		Self {
			visible: false,
			base_url: None,
			question_selector: None,
			option_selector: None,
			thesaurus_url: None,
			search_url: None,
			page_load_delay_ms: default_page_load_delay_ms(),
			read_delay_min_ms: default_read_delay_min_ms(),
			read_delay_max_ms: default_read_delay_max_ms(),
			answer_delay_ms: default_answer_delay_ms(),
			max_consecutive_failures: default_max_consecutive_failures(),
			stop_hook: None,
		}
	}

	pub fn base_url(&self) -> &str {
		self.base_url.as_deref().unwrap_or(BASE_URL)
	}

	pub fn question_selector(&self) -> &str {
		self.question_selector.as_deref().unwrap_or(QUESTION_SELECTOR)
	}

	pub fn option_selector(&self) -> &str {
		self.option_selector.as_deref().unwrap_or(OPTION_SELECTOR)
	}

	pub fn thesaurus_url(&self) -> &str {
		self.thesaurus_url.as_deref().unwrap_or(THESAURUS_URL)
	}

	pub fn search_url(&self) -> &str {
		self.search_url.as_deref().unwrap_or(SEARCH_URL)
	}

	/// Checks relationships between fields that their types can't express
	pub fn validate(&self) -> Result<()> {
		if self.read_delay_min_ms >= self.read_delay_max_ms {
			bail!("read_delay_min_ms ({}) must be below read_delay_max_ms ({})", self.read_delay_min_ms, self.read_delay_max_ms);
		}
		if self.max_consecutive_failures == 0 {
			bail!("max_consecutive_failures must be at least 1");
		}
		for (name, selector) in [("question_selector", self.question_selector()), ("option_selector", self.option_selector())] {
			if selector.trim().is_empty() {
				bail!("{name} must not be empty");
			}
		}
		Ok(())
	}

	pub fn category_url(&self, slug: &str) -> String {
		format!("{}{}", self.base_url(), slug)
	}
}
