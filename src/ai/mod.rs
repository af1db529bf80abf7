//! AI service integration for image generation and vocabulary analysis
//!
//! Provides trait seams over the Gemini `generateContent` API so the
//! orchestration layer can be exercised against mocks.

pub mod gemini;
pub mod mock;

pub use gemini::{GeminiImageClient, GeminiVocabularyClient};
pub use mock::{MockImageGenerationClient, MockVocabularyClient};

use crate::models::{ImageResult, VocabularyItem};
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Generate a single square illustration for the given prompt.
    async fn generate_image(&self, prompt: &str) -> Result<ImageResult>;
}

#[async_trait]
pub trait VocabularyAnalysisService: Send + Sync {
    /// Analyze a previously generated image and extract labeled vocabulary.
    async fn extract_vocabulary(
        &self,
        prompt: &str,
        image: &ImageResult,
    ) -> Result<Vec<VocabularyItem>>;
}
