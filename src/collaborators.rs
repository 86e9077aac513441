//! Boundaries between the answer selection engine and the outside world.
//!
//! Everything here may block on the network or the browser. Implementations are expected to make exactly one attempt per call:
//! retrying is the runner's business, and an empty result is a valid answer rather than an error.
#![allow(async_fn_in_trait)]

use color_eyre::Result;

use crate::{OptionSet, SynonymSet};

/// Reads the question currently on screen
pub trait PageReader {
	async fn read_question(&self) -> Result<String>;
	async fn read_options(&self) -> Result<OptionSet>;
}

/// Commits an answer
pub trait ActionSink {
	async fn select_option(&self, index: usize) -> Result<()>;
}

/// Best-effort synonyms and related words for a term
pub trait SynonymLookup {
	async fn lookup_synonyms(&self, term: &str) -> Result<SynonymSet>;
}

pub trait Translator {
	/// Single best-guess English rendering of `text`, given the ISO-639-1 code of its language
	async fn translate(&self, text: &str, source_lang: &str) -> Result<String>;
}

/// Raw text of a search results page; may be empty
pub trait SearchTextProvider {
	async fn fetch_search_text(&self, query: &str) -> Result<String>;
}

/// Source of fallback guesses
pub trait RandomSource {
	/// Uniform index in `0..n`. `n` is never zero.
	fn index_below(&self, n: usize) -> usize;
}

/// Thread-local RNG from [rand]
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
	fn index_below(&self, n: usize) -> usize {
		rand::random_range(0..n)
	}
}

impl<R: RandomSource + ?Sized> RandomSource for &R {
	fn index_below(&self, n: usize) -> usize {
		(**self).index_below(n)
	}
}
