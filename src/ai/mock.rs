use super::{ImageGenerationService, VocabularyAnalysisService};
use crate::models::{ImageResult, VocabularyItem};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

// Base64 of the 8-byte PNG signature; enough for data-URL assertions.
const DEFAULT_IMAGE_DATA: &str = "iVBORw0KGgo=";

#[derive(Clone)]
pub struct MockImageGenerationClient {
    responses: Arc<Mutex<Vec<ImageResult>>>,
    fail_extraction: Arc<Mutex<bool>>,
    call_count: Arc<Mutex<usize>>,
    last_prompt: Arc<Mutex<Option<String>>>,
}

impl MockImageGenerationClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            fail_extraction: Arc::new(Mutex::new(false)),
            call_count: Arc::new(Mutex::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_image_response(self, response: ImageResult) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Make every call fail as if the response carried no inline image data.
    pub fn with_extraction_failure(self) -> Self {
        *self.fail_extraction.lock().unwrap() = true;
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

impl Default for MockImageGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageGenerationClient {
    async fn generate_image(&self, prompt: &str) -> Result<ImageResult> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        if *self.fail_extraction.lock().unwrap() {
            return Err(Error::ImageExtraction(
                "No inline image data in stubbed response".to_string(),
            ));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(ImageResult {
                data: DEFAULT_IMAGE_DATA.to_string(),
                mime_type: "image/png".to_string(),
            })
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

#[derive(Clone)]
pub struct MockVocabularyClient {
    responses: Arc<Mutex<Vec<Vec<VocabularyItem>>>>,
    call_count: Arc<Mutex<usize>>,
    last_prompt: Arc<Mutex<Option<String>>>,
    last_image: Arc<Mutex<Option<ImageResult>>>,
}

impl MockVocabularyClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
            last_image: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_vocabulary_response(self, response: Vec<VocabularyItem>) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }

    pub fn last_image(&self) -> Option<ImageResult> {
        self.last_image.lock().unwrap().clone()
    }
}

impl Default for MockVocabularyClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VocabularyAnalysisService for MockVocabularyClient {
    async fn extract_vocabulary(
        &self,
        prompt: &str,
        image: &ImageResult,
    ) -> Result<Vec<VocabularyItem>> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        *self.last_image.lock().unwrap() = Some(image.clone());

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(Vec::new())
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
