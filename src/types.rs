use serde::{Deserialize, Serialize};

/// The author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single content part within a message: a text segment or an inline
/// base64-encoded image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentPart {
    Text { text: String },
    Image { source: ImageSource },
}

/// The source of an inline image part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ImageSource {
    Base64 { media_type: String, data: String },
}

impl ContentPart {
    /// Constructs a text part from any string-like value.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Constructs an inline image part from an encoded image.
    pub fn image(image: &EncodedImage) -> Self {
        Self::Image {
            source: ImageSource::Base64 {
                media_type: image.media_type.clone(),
                data: image.data.clone(),
            },
        }
    }

    /// Returns the text if this is a [`ContentPart::Text`] part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            _ => None,
        }
    }
}

/// One turn in the conversation sent to the agent.
///
/// Messages are constructed fresh per invocation and never mutated after
/// assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: Vec<ContentPart>,
}

impl Message {
    /// A user-authored message with the given content parts.
    pub fn user(content: Vec<ContentPart>) -> Self {
        Self {
            role: Role::User,
            content,
        }
    }

    /// An assistant-authored message with the given content parts.
    pub fn assistant(content: Vec<ContentPart>) -> Self {
        Self {
            role: Role::Assistant,
            content,
        }
    }

    /// The concatenated text of every text part, in order. Image parts are
    /// skipped.
    pub fn text(&self) -> String {
        self.content.iter().filter_map(ContentPart::as_text).collect()
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

/// An image fetched (or read from disk) and base64-encoded for inline
/// attachment to a message.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedImage {
    /// Base64-encoded image bytes, standard alphabet, no data-URL prefix.
    pub data: String,
    /// MIME type, e.g. `image/jpeg`.
    pub media_type: String,
}

/// Model parameters submitted with every generation request.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// The model identifier the agent should run.
    pub model: String,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: "claude-3-5-sonnet-20241022".to_string(),
            max_tokens: 8192,
            temperature: 1.0,
        }
    }
}

/// (Internal) The request body for the agent streaming endpoint.
#[derive(Serialize, Debug)]
pub(crate) struct AgentRequest<'a> {
    pub(crate) model: &'a str,
    pub(crate) max_tokens: u32,
    pub(crate) temperature: f32,
    pub(crate) messages: &'a [Message],
    pub(crate) tools: &'a [serde_json::Value],
}

/// One incremental state snapshot produced by the agent stream.
///
/// Only the `messages` field is read; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentSnapshot {
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// The final artifact of a generation cycle.
#[derive(Debug, Clone)]
pub struct SceneScript {
    /// The extracted Three.js script.
    pub code: String,
    /// The full accumulated assistant reply the script was extracted from.
    pub raw: String,
    /// Whether both output tags were present in the reply. Informational;
    /// `code` is populated either way via the extraction fallbacks.
    pub tagged: bool,
}
