//! Two-stage orchestration: generate an illustration, then analyze it for
//! vocabulary. The analysis call only runs after a successful image result
//! because it consumes the image bytes.

use crate::ai::{
    GeminiImageClient, GeminiVocabularyClient, ImageGenerationService, VocabularyAnalysisService,
};
use crate::characters::Character;
use crate::models::{Config, GeneratedContent};
use crate::{prompts, Result};
use tracing::info;

pub struct ContentGenerator {
    image_gen: Box<dyn ImageGenerationService>,
    vocabulary: Box<dyn VocabularyAnalysisService>,
}

fn image_prompt(character: Character, scene: &str) -> String {
    prompts::render(
        prompts::IMAGE_GENERATION,
        &[("description", character.description()), ("scene", scene)],
    )
}

fn analysis_prompt(character: Character, scene: &str) -> String {
    prompts::render(
        prompts::VOCABULARY_ANALYSIS,
        &[("character", character.name()), ("scene", scene)],
    )
}

impl ContentGenerator {
    /// Build a generator from concrete service dependencies.
    ///
    /// This is primarily useful for integration tests and local harnesses that
    /// need to inject mocks.
    pub fn with_services(
        image_gen: Box<dyn ImageGenerationService>,
        vocabulary: Box<dyn VocabularyAnalysisService>,
    ) -> Self {
        Self {
            image_gen,
            vocabulary,
        }
    }

    /// Construct a generator from environment configuration (`Config::from_env`).
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env()?;

        // Reuse one HTTP connection pool across both Gemini clients.
        let http_client = reqwest::Client::new();

        info!(
            "Using image model {} and analysis model {}",
            config.image_model, config.analysis_model
        );

        Ok(Self::with_services(
            Box::new(GeminiImageClient::new_with_client(
                config.gemini_api_key.clone(),
                config.image_model,
                http_client.clone(),
            )),
            Box::new(GeminiVocabularyClient::new_with_client(
                config.gemini_api_key,
                config.analysis_model,
                http_client,
            )),
        ))
    }

    /// Generate a flashcard image for the character in the scene, then extract
    /// its vocabulary list.
    pub async fn generate(&self, character: Character, scene: &str) -> Result<GeneratedContent> {
        let prompt = image_prompt(character, scene);
        tracing::debug!("Image prompt: {}", prompt);
        info!("Generating image of {} in a {} setting", character, scene);

        let image = self.image_gen.generate_image(&prompt).await?;
        info!(
            "Generated {} image ({} base64 chars)",
            image.mime_type,
            image.data.len()
        );

        let prompt = analysis_prompt(character, scene);
        let vocabulary = self.vocabulary.extract_vocabulary(&prompt, &image).await?;
        info!("Extracted {} vocabulary items", vocabulary.len());

        Ok(GeneratedContent {
            vocabulary,
            image: Some(image),
        })
    }
}
