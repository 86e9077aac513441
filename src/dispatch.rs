use color_eyre::Result;

use crate::{
	Category, EngineError, OptionSet, SelectionResult,
	collaborators::{RandomSource, SearchTextProvider, SynonymLookup, Translator},
	strategies::{arithmetic, attribution, synonym, translation},
};

/// Routes a question to its category's strategy.
///
/// Holds only borrowed collaborators; nothing carries over from one question to the next.
#[derive(Debug, derive_new::new)]
pub struct Engine<'a, L, T, S, R> {
	lexicon: &'a L,
	translator: &'a T,
	search: &'a S,
	rng: &'a R,
}

impl<L, T, S, R> Engine<'_, L, T, S, R>
where
	L: SynonymLookup,
	T: Translator,
	S: SearchTextProvider,
	R: RandomSource,
{
	/// `Ok(None)` for unsupported categories, in which case no collaborator is touched.
	///
	/// A blank or otherwise malformed question comes back as an [crate::EngineError] inside the report; collaborator failures propagate as they are.
	pub async fn select(&self, category: &Category, question: &str, options: &OptionSet) -> Result<Option<SelectionResult>> {
		if category.is_supported() && question.trim().is_empty() {
			return Err(EngineError::malformed(question, "empty question").into());
		}

		let result = match category {
			Category::Unsupported(slug) => {
				tracing::debug!(slug, "unsupported category, skipping");
				return Ok(None);
			}
			Category::Vocabulary => {
				let term = synonym::lookup_term(question)?;
				let synonyms = self.lexicon.lookup_synonyms(term).await?;
				tracing::debug!(term, synonyms = synonyms.len(), "looked up synonyms");
				synonym::choose(&synonyms, options, self.rng)
			}
			Category::Arithmetic => arithmetic::choose(question, options)?,
			Category::Language(lang) => {
				let phrase = translation::phrase(question);
				let reference = self.translator.translate(phrase, lang.code()).await?;
				tracing::debug!(phrase, reference, lang = lang.code(), "translated");
				translation::choose(&reference, options, self.rng)
			}
			Category::Attribution => {
				let text = self.search.fetch_search_text(question).await?;
				tracing::debug!(bytes = text.len(), "fetched search text");
				attribution::choose(&text, options)
			}
		};

		tracing::info!(%category, index = result.index, matched = result.matched, "selected");
		Ok(Some(result))
	}
}
