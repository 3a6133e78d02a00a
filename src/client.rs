use crate::error::ImagineError;
use crate::extract::{extract_scene_code, has_scene_output};
use crate::prompt::build_messages;
use crate::stream::{append_assistant_text, LineBuffer};
use crate::types::{
    AgentRequest, AgentSnapshot, EncodedImage, Message, ModelConfig, SceneScript,
};
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use futures_util::StreamExt;
use reqwest::header::{HeaderMap, AUTHORIZATION, CONTENT_TYPE};
use std::env;
use std::path::Path;
use url::Url;

const DEFAULT_API_URL: &str = "https://api.imagine3d.dev/";

/// Media type assumed for images whose transport declares none.
const DEFAULT_IMAGE_MEDIA_TYPE: &str = "image/jpeg";

/// The main client for generating Three.js scene scripts.
///
/// It holds the shared `reqwest::Client`, the base URL of the agent
/// endpoint, and the model parameters submitted with every request.
/// It is designed to be cloneable and safe to share across threads.
#[derive(Clone, Debug)]
pub struct ImagineClient {
    client: reqwest::Client,
    base_url: Url,
    config: ModelConfig,
}

impl ImagineClient {
    /// Creates a new `ImagineClient`.
    ///
    /// This method initializes the client with an API key. It first checks
    /// for the `api_key` parameter. If it's `None`, it falls back to the
    /// `ANTHROPIC_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// - `ImagineError::MissingApiKey` if the API key is not provided in either way.
    /// - `ImagineError::RequestFailed` if the internal HTTP client fails to build.
    /// - `ImagineError::UrlParseFailed` if the default API URL is invalid.
    pub fn new(api_key: Option<String>) -> Result<Self, ImagineError> {
        let api_key = api_key.or_else(|| env::var("ANTHROPIC_API_KEY").ok());
        let Some(key) = api_key else {
            return Err(ImagineError::MissingApiKey);
        };
        Self::build(key, DEFAULT_API_URL)
    }

    /// Creates a new `ImagineClient` with a custom base URL.
    ///
    /// This is useful for testing or for connecting to a different agent
    /// endpoint.
    ///
    /// # Arguments
    ///
    /// * `api_key` - The API key for authentication.
    /// * `base_url` - The base URL for the agent (e.g., for a mock server).
    ///
    /// # Errors
    ///
    /// - `ImagineError::RequestFailed` if the internal HTTP client fails to build.
    /// - `ImagineError::UrlParseFailed` if the provided `base_url` is invalid.
    pub fn new_with_url(api_key: String, base_url: &str) -> Result<Self, ImagineError> {
        Self::build(api_key, base_url)
    }

    fn build(api_key: String, base_url: &str) -> Result<Self, ImagineError> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, format!("Bearer {}", api_key).parse().unwrap());

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self {
            client,
            base_url,
            config: ModelConfig::default(),
        })
    }

    /// Replaces the model parameters submitted with generation requests.
    pub fn with_config(mut self, config: ModelConfig) -> Self {
        self.config = config;
        self
    }

    /// Generates a Three.js scene script from a text description.
    ///
    /// Runs one full request/response cycle: assembles the prompt messages,
    /// streams the agent's reply, and extracts the delimited script from the
    /// accumulated text.
    ///
    /// # Arguments
    ///
    /// * `description` - A free-text description of the 3D object to model.
    ///
    /// # Returns
    ///
    /// A [`SceneScript`] carrying the extracted code and the raw reply.
    pub async fn generate_scene(&self, description: &str) -> Result<SceneScript, ImagineError> {
        self.run_generation(description, None).await
    }

    /// Generates a Three.js scene script from a description plus an image.
    ///
    /// The `image` parameter can be one of two things:
    /// 1. A URL string starting with `http://` or `https://`, which is
    ///    fetched over the network.
    /// 2. A path to a local file, which is read from disk.
    ///
    /// Either way the bytes are base64-encoded and attached inline to the
    /// prompt message.
    ///
    /// # Arguments
    ///
    /// * `description` - A free-text description of the 3D object to model.
    /// * `image` - The image input, as a URL or local file path.
    pub async fn generate_scene_with_image(
        &self,
        description: &str,
        image: &str,
    ) -> Result<SceneScript, ImagineError> {
        let encoded = self.encode_image_from_str(image).await?;
        self.run_generation(description, Some(encoded)).await
    }

    /// Fetches an image over HTTP and base64-encodes it for inline use.
    ///
    /// The media type is taken from the response's `Content-Type` header,
    /// falling back to `image/jpeg` when undeclared. Fetch failures
    /// propagate as transport errors; there is no retry.
    pub async fn encode_image(&self, image_url: &str) -> Result<EncodedImage, ImagineError> {
        let response = self.client.get(image_url).send().await?;
        let media_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(DEFAULT_IMAGE_MEDIA_TYPE)
            .to_string();
        let bytes = response.bytes().await?;

        Ok(EncodedImage {
            data: BASE64_STANDARD.encode(&bytes),
            media_type,
        })
    }

    /// Reads a local image file and base64-encodes it for inline use.
    ///
    /// The media type is guessed from the file extension, falling back to
    /// `image/jpeg` for unknown extensions.
    pub async fn encode_image_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<EncodedImage, ImagineError> {
        let bytes = tokio::fs::read(path.as_ref()).await?;
        let media_type = mime_guess::from_path(path.as_ref())
            .first()
            .map(|mime| mime.to_string())
            .unwrap_or_else(|| DEFAULT_IMAGE_MEDIA_TYPE.to_string());

        Ok(EncodedImage {
            data: BASE64_STANDARD.encode(&bytes),
            media_type,
        })
    }

    async fn encode_image_from_str(&self, image: &str) -> Result<EncodedImage, ImagineError> {
        if image.starts_with("http://") || image.starts_with("https://") {
            self.encode_image(image).await
        } else {
            let path = Path::new(image);
            if !path.exists() {
                return Err(ImagineError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Image file not found: {}", image),
                )));
            }
            self.encode_image_file(path).await
        }
    }

    async fn run_generation(
        &self,
        description: &str,
        image: Option<EncodedImage>,
    ) -> Result<SceneScript, ImagineError> {
        let messages = build_messages(description, image.as_ref());
        let raw = self.stream_agent(&messages).await?;

        let code = extract_scene_code(&raw).to_string();
        let tagged = has_scene_output(&raw);
        tracing::debug!(tagged, code_len = code.len(), "extracted scene script");

        Ok(SceneScript { code, raw, tagged })
    }

    /// Submits the message list to the agent streaming endpoint and
    /// accumulates the assistant-authored text in arrival order.
    async fn stream_agent(&self, messages: &[Message]) -> Result<String, ImagineError> {
        let url = self.base_url.join("v1/agent/stream")?;
        let request_body = AgentRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            messages,
            tools: &[],
        };

        tracing::debug!(model = %self.config.model, "submitting generation request");
        let response = self.client.post(url).json(&request_body).send().await?;

        if !response.status().is_success() {
            let error_response: serde_json::Value = response.json().await.unwrap_or_default();
            return Err(ImagineError::ApiError {
                message: error_response.to_string(),
            });
        }

        let mut accumulator = String::new();
        let mut lines = LineBuffer::new();
        let mut byte_stream = response.bytes_stream();

        while let Some(chunk) = byte_stream.next().await {
            let chunk = chunk?;
            for line in lines.push(&chunk) {
                consume_line(&line, &mut accumulator)?;
            }
        }
        // A stream may end without a final newline.
        if let Some(line) = lines.finish() {
            consume_line(&line, &mut accumulator)?;
        }

        tracing::debug!(reply_len = accumulator.len(), "agent stream complete");
        Ok(accumulator)
    }
}

fn consume_line(line: &str, accumulator: &mut String) -> Result<(), ImagineError> {
    if line.trim().is_empty() {
        return Ok(());
    }
    let snapshot: AgentSnapshot = serde_json::from_str(line)?;
    append_assistant_text(accumulator, &snapshot);
    Ok(())
}
