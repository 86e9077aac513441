#![allow(dead_code)]

use std::{
	cell::{Cell, RefCell},
	collections::VecDeque,
};

use color_eyre::{Result, eyre::eyre};
use rice_headless::{
	EngineError, OptionSet, SynonymSet,
	collaborators::{ActionSink, PageReader, RandomSource, SearchTextProvider, SynonymLookup, Translator},
};

pub fn options(xs: [&str; 4]) -> OptionSet {
	OptionSet::new(xs.map(String::from))
}

/// Always returns the same index
pub struct Fixed(pub usize);

impl RandomSource for Fixed {
	fn index_below(&self, n: usize) -> usize {
		assert!(self.0 < n);
		self.0
	}
}

#[derive(Default)]
pub struct FakeLexicon {
	pub words: Vec<&'static str>,
	pub fail: bool,
	pub calls: RefCell<Vec<String>>,
}

impl SynonymLookup for FakeLexicon {
	async fn lookup_synonyms(&self, term: &str) -> Result<SynonymSet> {
		self.calls.borrow_mut().push(term.to_string());
		if self.fail {
			return Err(eyre!("thesaurus unreachable"));
		}
		Ok(self.words.iter().map(|w| w.to_string()).collect())
	}
}

#[derive(Default)]
pub struct FakeTranslator {
	pub output: &'static str,
	pub fail: bool,
	pub calls: RefCell<Vec<(String, String)>>,
}

impl Translator for FakeTranslator {
	async fn translate(&self, text: &str, source_lang: &str) -> Result<String> {
		self.calls.borrow_mut().push((text.to_string(), source_lang.to_string()));
		if self.fail {
			return Err(eyre!("translation quota exceeded"));
		}
		Ok(self.output.to_string())
	}
}

#[derive(Default)]
pub struct FakeSearch {
	pub text: &'static str,
	pub calls: RefCell<Vec<String>>,
}

impl SearchTextProvider for FakeSearch {
	async fn fetch_search_text(&self, query: &str) -> Result<String> {
		self.calls.borrow_mut().push(query.to_string());
		Ok(self.text.to_string())
	}
}

/// Serves scripted questions in order and records clicks
#[derive(Default)]
pub struct FakeQuiz {
	pub questions: RefCell<VecDeque<(&'static str, [&'static str; 4])>>,
	pub current: RefCell<Option<[&'static str; 4]>>,
	pub clicks: RefCell<Vec<usize>>,
	pub reads: Cell<usize>,
	/// Simulate an option selector matching nothing
	pub no_options: bool,
}

impl FakeQuiz {
	pub fn new(questions: Vec<(&'static str, [&'static str; 4])>) -> Self {
		Self {
			questions: RefCell::new(questions.into()),
			..Default::default()
		}
	}
}

impl PageReader for FakeQuiz {
	async fn read_question(&self) -> Result<String> {
		self.reads.set(self.reads.get() + 1);
		let (question, opts) = self.questions.borrow_mut().pop_front().ok_or_else(|| eyre!("no question on screen"))?;
		*self.current.borrow_mut() = Some(opts);
		Ok(question.to_string())
	}

	async fn read_options(&self) -> Result<OptionSet> {
		if self.no_options {
			return Err(EngineError::WrongOptionCount(0).into());
		}
		let opts = self.current.borrow().ok_or_else(|| eyre!("no options on screen"))?;
		Ok(options(opts))
	}
}

impl ActionSink for FakeQuiz {
	async fn select_option(&self, index: usize) -> Result<()> {
		self.clicks.borrow_mut().push(index);
		Ok(())
	}
}
