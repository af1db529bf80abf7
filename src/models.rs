//! Data models and structures
//!
//! Defines the core data structures for vocabulary items, generated images,
//! and configuration loaded from the environment.

use serde::{Deserialize, Serialize, Serializer};

/// Object location within the generated image, normalized to a 0-1000 scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoundingBox {
    pub ymin: u32,
    pub xmin: u32,
    pub ymax: u32,
    pub xmax: u32,
}

/// One flashcard entry extracted from the generated image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VocabularyItem {
    pub english: String,
    pub korean: String,
    pub chinese: String,
    pub box2d: BoundingBox,
}

/// Encoded image returned by the generation model.
///
/// The payload stays base64-encoded; callers embed it as a data URL or decode
/// it once for local storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResult {
    /// Base64-encoded image bytes, exactly as returned by the provider.
    pub data: String,
    pub mime_type: String,
}

impl ImageResult {
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decode the base64 payload into raw image bytes.
    pub fn decode(&self) -> crate::Result<Vec<u8>> {
        use base64::Engine as _;
        base64::engine::general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|e| {
                crate::Error::ImageExtraction(format!("Invalid base64 image payload: {}", e))
            })
    }

    pub fn file_extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            _ => "img",
        }
    }
}

/// Result of one generate run: the vocabulary list plus the generated image.
///
/// Serializes the image as a `data:<mime>;base64,<payload>` URL under
/// `imageUrl` so consumers can embed it directly.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedContent {
    pub vocabulary: Vec<VocabularyItem>,
    #[serde(rename = "imageUrl", serialize_with = "image_as_data_url")]
    pub image: Option<ImageResult>,
}

impl GeneratedContent {
    pub fn image_url(&self) -> Option<String> {
        self.image.as_ref().map(ImageResult::to_data_url)
    }
}

fn image_as_data_url<S: Serializer>(
    image: &Option<ImageResult>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match image {
        Some(image) => serializer.serialize_some(&image.to_data_url()),
        None => serializer.serialize_none(),
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub image_model: String,
    pub analysis_model: String,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| crate::Error::Generic("GEMINI_API_KEY not set".to_string()))?,
            image_model: std::env::var("IMAGE_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash-image".to_string()),
            analysis_model: std::env::var("ANALYSIS_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
        })
    }
}
