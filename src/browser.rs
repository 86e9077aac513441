//! Collaborators backed by a live chromium tab

use chromiumoxide::Page;
use color_eyre::{
	Result,
	eyre::{bail, eyre},
};

use crate::{
	OptionSet, SynonymSet,
	collaborators::{ActionSink, PageReader, SearchTextProvider, SynonymLookup},
};

/// Quote a Rust string as a JS string literal
fn js_str(s: &str) -> String {
	serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Percent-encode via the browser's own `encodeURIComponent`
async fn encode_uri_component(page: &Page, s: &str) -> Result<String> {
	let result = page
		.evaluate(format!("encodeURIComponent({})", js_str(s)))
		.await
		.map_err(|e| eyre!("Failed to encode {:?}: {}", s, e))?;
	result.value().and_then(|v| v.as_str()).map(|s| s.to_string()).ok_or_else(|| eyre!("encodeURIComponent returned nothing"))
}

async fn open(page: &Page, base: &str, query: &str) -> Result<()> {
	let url = format!("{base}{}", encode_uri_component(page, query).await?);
	tracing::debug!("Opening {url}");
	page.goto(&url).await.map_err(|e| eyre!("Failed to navigate to {}: {}", url, e))?;
	Ok(())
}

/// The quiz tab: reads the current question and clicks answers
#[derive(Clone, Debug, derive_new::new)]
pub struct QuizPage {
	page: Page,
	question_selector: String,
	option_selector: String,
}

impl PageReader for QuizPage {
	async fn read_question(&self) -> Result<String> {
		let script = format!(
			r#"
			(function() {{
				const el = document.querySelector({});
				return el ? el.innerText.trim() : null;
			}})()
			"#,
			js_str(&self.question_selector)
		);

		let result = self.page.evaluate(script).await.map_err(|e| eyre!("Failed to read question: {}", e))?;
		let question = result.value().and_then(|v| v.as_str()).ok_or_else(|| eyre!("No element matches question selector {:?}", self.question_selector))?;

		if question.is_empty() {
			bail!("Question element is empty");
		}
		Ok(question.to_string())
	}

	async fn read_options(&self) -> Result<OptionSet> {
		let script = format!(
			r#"
			(function() {{
				const els = document.querySelectorAll({});
				return JSON.stringify(Array.from(els).map(el => el.innerText.trim()));
			}})()
			"#,
			js_str(&self.option_selector)
		);

		let result = self.page.evaluate(script).await.map_err(|e| eyre!("Failed to read options: {}", e))?;
		let json_str = result.value().and_then(|v| v.as_str()).unwrap_or("[]");
		let options: Vec<String> = serde_json::from_str(json_str).map_err(|e| eyre!("Failed to parse options JSON: {}", e))?;

		Ok(OptionSet::try_from(options)?)
	}
}

impl ActionSink for QuizPage {
	async fn select_option(&self, index: usize) -> Result<()> {
		let script = format!(
			r#"
			(function() {{
				const els = document.querySelectorAll({});
				const el = els[{index}];
				if (el) {{
					el.click();
					return true;
				}}
				return false;
			}})()
			"#,
			js_str(&self.option_selector)
		);

		let result = self.page.evaluate(script).await.map_err(|e| eyre!("Failed to click option {}: {}", index + 1, e))?;
		if result.value().and_then(|v| v.as_bool()) != Some(true) {
			bail!("Option {} not found on page", index + 1);
		}
		Ok(())
	}
}

/// Scrapes a thesaurus entry in a scratch tab
#[derive(Clone, Debug, derive_new::new)]
pub struct ThesaurusLookup {
	page: Page,
	base_url: String,
}

impl SynonymLookup for ThesaurusLookup {
	async fn lookup_synonyms(&self, term: &str) -> Result<SynonymSet> {
		open(&self.page, &self.base_url, term).await?;

		// Links to other entries are the synonym lists. The bold definition often holds synonyms the lists miss.
		let script = r#"
			(function() {
				const words = [];
				for (const a of document.querySelectorAll('a[href*="/browse/"]')) {
					const text = a.textContent.trim();
					if (text) words.push(text);
				}
				const definition = document.querySelector('strong');
				if (definition) {
					for (const part of definition.textContent.split(', ')) {
						if (part) words.push(part);
					}
				}
				return JSON.stringify(words);
			})()
		"#;

		let result = self.page.evaluate(script).await.map_err(|e| eyre!("Failed to scrape synonyms: {}", e))?;
		let json_str = result.value().and_then(|v| v.as_str()).unwrap_or("[]");
		let words: Vec<String> = serde_json::from_str(json_str).map_err(|e| eyre!("Failed to parse synonyms JSON: {}", e))?;

		Ok(words.into_iter().collect())
	}
}

/// Plain text of a search results page, opened in a scratch tab
#[derive(Clone, Debug, derive_new::new)]
pub struct SearchPage {
	page: Page,
	base_url: String,
}

impl SearchTextProvider for SearchPage {
	async fn fetch_search_text(&self, query: &str) -> Result<String> {
		open(&self.page, &self.base_url, query).await?;

		let result = self
			.page
			.evaluate("document.body ? document.body.innerText : ''")
			.await
			.map_err(|e| eyre!("Failed to read search results: {}", e))?;

		Ok(result.value().and_then(|v| v.as_str()).unwrap_or_default().to_string())
	}
}
