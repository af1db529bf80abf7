use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse, InlineData, Part};
use crate::ai::VocabularyAnalysisService;
use crate::models::{ImageResult, VocabularyItem};
use crate::{Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct AnalysisRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: AnalysisGenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisGenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

/// Response schema constraining the analysis output to a vocabulary array.
///
/// Mirrors the wire shape of [`VocabularyItem`]; typed deserialization on our
/// side re-validates the same shape locally.
fn vocabulary_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "english": { "type": "STRING" },
                "korean": { "type": "STRING" },
                "chinese": { "type": "STRING" },
                "box2d": {
                    "type": "OBJECT",
                    "properties": {
                        "ymin": { "type": "INTEGER" },
                        "xmin": { "type": "INTEGER" },
                        "ymax": { "type": "INTEGER" },
                        "xmax": { "type": "INTEGER" }
                    },
                    "required": ["ymin", "xmin", "ymax", "xmax"]
                }
            },
            "required": ["english", "korean", "chinese", "box2d"]
        }
    })
}

pub struct GeminiVocabularyClient {
    http: GeminiHttpClient,
}

impl GeminiVocabularyClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(30),
                client,
            ),
        }
    }
}

#[cfg(test)]
super::impl_with_gemini_base_url!(GeminiVocabularyClient);

#[async_trait]
impl VocabularyAnalysisService for GeminiVocabularyClient {
    async fn extract_vocabulary(
        &self,
        prompt: &str,
        image: &ImageResult,
    ) -> Result<Vec<VocabularyItem>> {
        let request = AnalysisRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type.clone(),
                            data: image.data.clone(),
                        },
                    },
                    Part::Text {
                        text: prompt.to_string(),
                    },
                ],
            }],
            generation_config: AnalysisGenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: vocabulary_schema(),
            },
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        // An absent or empty text payload means "nothing found", not a failure.
        let Some(text) = response.joined_text().filter(|t| !t.trim().is_empty()) else {
            tracing::warn!("Gemini analysis response carried no text; returning empty vocabulary");
            return Ok(Vec::new());
        };

        let vocabulary: Vec<VocabularyItem> = serde_json::from_str(&text).map_err(|e| {
            Error::AnalysisParse(format!(
                "Vocabulary response did not match the declared schema: {}",
                e
            ))
        })?;

        tracing::debug!("Gemini analysis returned {} vocabulary items", vocabulary.len());

        Ok(vocabulary)
    }
}
