//! Shared Gemini payload types used by the image and vocabulary modules.

use serde::{Deserialize, Serialize};

/// Gemini content container used in both requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// Untagged union of text and inline media content parts.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Base64 inline payload carrying image bytes in requests and responses.
///
/// `mime_type` may be omitted by the provider; callers substitute a generic
/// image type when it is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default)]
    pub mime_type: String,
    pub data: String,
}

/// Top-level `generateContent` response envelope.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Vec<Candidate>,
}

/// Candidate completion item returned by Gemini.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

impl GenerateContentResponse {
    /// First inline-data part across the first candidate's parts, if any.
    ///
    /// Responses may interleave text and media parts; when several inline
    /// parts are present the first one wins.
    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.candidates.first().and_then(|c| {
            c.content.parts.iter().find_map(|p| match p {
                Part::InlineData { inline_data } => Some(inline_data),
                Part::Text { .. } => None,
            })
        })
    }

    /// Concatenation of the first candidate's text parts, if it has any.
    ///
    /// Long text payloads may arrive split across several parts; joining them
    /// matches how provider SDKs expose the response text.
    pub fn joined_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let mut joined = String::new();
        let mut found = false;
        for part in &candidate.content.parts {
            if let Part::Text { text } = part {
                joined.push_str(text);
                found = true;
            }
        }
        found.then_some(joined)
    }
}
