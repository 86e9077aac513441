use ask_llm::{Client as LlmClient, Conversation, Model, Role};
use color_eyre::{Result, eyre::eyre};

use crate::collaborators::Translator;

#[derive(Debug, serde::Deserialize)]
struct LlmTranslation {
	translation: String,
}

/// Translates quiz phrases into English through the LLM
#[derive(Clone, Copy, Debug, Default)]
pub struct LlmTranslator;

impl Translator for LlmTranslator {
	async fn translate(&self, text: &str, source_lang: &str) -> Result<String> {
		let prompt = format!(
			r#"Translate the following text from the language with ISO-639-1 code "{source_lang}" into English. Give the single most common translation, as short as possible.

Text:
{text}

Respond with JSON only, no markdown, in this exact format:
{{"translation": "<english translation>"}}"#
		);

		let client = LlmClient::new().model(Model::Medium).max_tokens(64).force_json();

		let mut conv = Conversation::new();
		conv.add(Role::User, prompt);

		let response = client.conversation(&conv).await?;

		tracing::debug!("LLM translation response: {}", response.text);

		let json_str = response.text.trim();
		let answer: LlmTranslation = serde_json::from_str(json_str).map_err(|e| eyre!("Failed to parse LLM translation: {e} - raw: '{json_str}'"))?;

		Ok(answer.translation)
	}
}
