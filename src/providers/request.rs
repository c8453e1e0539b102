use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Harm categories a provider can be asked to filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarmCategory {
    Harassment,
    HateSpeech,
}

impl HarmCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            HarmCategory::Harassment => "HARM_CATEGORY_HARASSMENT",
            HarmCategory::HateSpeech => "HARM_CATEGORY_HATE_SPEECH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockThreshold {
    BlockLowAndAbove,
    BlockMediumAndAbove,
    BlockOnlyHigh,
}

impl BlockThreshold {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockThreshold::BlockLowAndAbove => "BLOCK_LOW_AND_ABOVE",
            BlockThreshold::BlockMediumAndAbove => "BLOCK_MEDIUM_AND_ABOVE",
            BlockThreshold::BlockOnlyHigh => "BLOCK_ONLY_HIGH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: BlockThreshold,
}

/// Image bytes sent alongside the prompt
#[derive(Debug, Clone, PartialEq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl InlineImage {
    pub fn base64(&self) -> String {
        STANDARD.encode(&self.data)
    }

    /// `data:` URI form used by OpenAI-style APIs
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64())
    }
}

/// A prompt plus the sampling parameters it should run with.
///
/// Providers translate this into their own wire format and ignore the
/// parameters they have no equivalent for.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub image: Option<InlineImage>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub top_k: Option<u32>,
    pub safety: Vec<SafetySetting>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        GenerationRequest {
            prompt: prompt.into(),
            image: None,
            temperature: None,
            top_p: None,
            top_k: None,
            safety: Vec::new(),
        }
    }

    pub fn with_image(mut self, image: InlineImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_sampling(mut self, temperature: f32, top_p: f32, top_k: u32) -> Self {
        self.temperature = Some(temperature);
        self.top_p = Some(top_p);
        self.top_k = Some(top_k);
        self
    }

    pub fn with_safety(mut self, category: HarmCategory, threshold: BlockThreshold) -> Self {
        self.safety.push(SafetySetting {
            category,
            threshold,
        });
        self
    }
}
