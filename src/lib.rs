use std::{collections::HashSet, fmt};

pub mod browser;
pub mod collaborators;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod llm;
pub mod runner;
pub mod strategies;

pub use dispatch::Engine;
pub use error::EngineError;

/// Every question on the site offers exactly this many answers
pub const OPTION_COUNT: usize = 4;

/// Words considered equivalent to a lookup term
pub type SynonymSet = HashSet<String>;

/// Occurrence count per option, indexed like the [OptionSet] it was built from
pub type FrequencyMap = [usize; OPTION_COUNT];

/// Source language of a translation question
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Language {
	Spanish,
	French,
	Italian,
	German,
	Czech,
}

impl Language {
	/// ISO-639-1 code
	pub fn code(&self) -> &'static str {
		match self {
			Language::Spanish => "es",
			Language::French => "fr",
			Language::Italian => "it",
			Language::German => "de",
			Language::Czech => "cs",
		}
	}
}

/// Quiz category, as found in the site's `/categories/<slug>` path
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Category {
	/// Pick the synonym of the question's first word
	Vocabulary,
	/// `"<a> x <b>"`, pick the product
	Arithmetic,
	/// `"<word> means"`, pick the English translation
	Language(Language),
	/// A famous quote, pick who said it
	Attribution,
	/// Listed on the site but not handled; dispatching it is a no-op
	Unsupported(String),
}

impl Category {
	pub fn from_slug(slug: &str) -> Self {
		match slug {
			"english-vocabulary" => Category::Vocabulary,
			"multiplication-table" => Category::Arithmetic,
			"spanish" => Category::Language(Language::Spanish),
			"french" => Category::Language(Language::French),
			"italian" => Category::Language(Language::Italian),
			"german" => Category::Language(Language::German),
			"czech" => Category::Language(Language::Czech),
			"famous-quotations" => Category::Attribution,
			other => Category::Unsupported(other.to_string()),
		}
	}

	pub fn slug(&self) -> &str {
		match self {
			Category::Vocabulary => "english-vocabulary",
			Category::Arithmetic => "multiplication-table",
			Category::Language(Language::Spanish) => "spanish",
			Category::Language(Language::French) => "french",
			Category::Language(Language::Italian) => "italian",
			Category::Language(Language::German) => "german",
			Category::Language(Language::Czech) => "czech",
			Category::Attribution => "famous-quotations",
			Category::Unsupported(slug) => slug,
		}
	}

	pub fn is_supported(&self) -> bool {
		!matches!(self, Category::Unsupported(_))
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.slug())
	}
}

/// The four candidate answers of one question, in on-screen order
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionSet([String; OPTION_COUNT]);

impl OptionSet {
	pub fn new(options: [String; OPTION_COUNT]) -> Self {
		Self(options)
	}

	pub fn get(&self, index: usize) -> Option<&str> {
		self.0.get(index).map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	/// Index of the first option satisfying `pred`, scanning 0→3
	pub fn position(&self, mut pred: impl FnMut(&str) -> bool) -> Option<usize> {
		self.iter().position(|o| pred(o))
	}
}

impl TryFrom<Vec<String>> for OptionSet {
	type Error = EngineError;

	fn try_from(options: Vec<String>) -> Result<Self, Self::Error> {
		let len = options.len();
		let options: [String; OPTION_COUNT] = options.try_into().map_err(|_| EngineError::WrongOptionCount(len))?;
		Ok(Self(options))
	}
}

impl fmt::Display for OptionSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, option) in self.iter().enumerate() {
			writeln!(f, "( ) {}. {}", i + 1, option)?;
		}
		Ok(())
	}
}

/// Chosen option plus whether a heuristic produced it
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SelectionResult {
	/// Position in the [OptionSet], always `< OPTION_COUNT`
	pub index: usize,
	/// `false` when the index is a fallback rather than a match
	pub matched: bool,
}

impl SelectionResult {
	pub fn matched(index: usize) -> Self {
		Self { index, matched: true }
	}

	pub fn guessed(index: usize) -> Self {
		Self { index, matched: false }
	}
}

impl fmt::Display for SelectionResult {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let how = if self.matched { "matched" } else { "guessed" };
		write!(f, "option {} ({how})", self.index + 1)
	}
}
