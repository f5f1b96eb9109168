//! Gemini Client - 调用 Gemini REST API
//!
//! 实现 StoryModelPort trait
//!
//! 外部 API:
//! POST {base_url}/v1beta/models/{model}:generateContent
//! Header: x-goog-api-key
//! Request: {"contents": [...], "systemInstruction": {...}, "generationConfig": {...}}
//! Response: {"candidates": [{"content": {"parts": [{"text": ...} | {"inlineData": {...}}]}}]}

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{
    GeneratedImage, ImageRequest, ModelError, StoryModelPort, TextRequest,
};

const API_KEY_HEADER: &str = "x-goog-api-key";

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<TextPart>,
}

impl Content {
    fn user(text: String) -> Self {
        Self {
            role: Some("user"),
            parts: vec![TextPart { text }],
        }
    }

    fn system(text: String) -> Self {
        Self {
            role: None,
            parts: vec![TextPart { text }],
        }
    }
}

#[derive(Debug, Serialize)]
struct TextPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<&'static str>>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

impl GenerateContentResponse {
    fn first_parts(&self) -> &[ResponsePart] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or(&[])
    }
}

// ============================================================================
// Client
// ============================================================================

/// Gemini 客户端配置
#[derive(Clone)]
pub struct GeminiClientConfig {
    /// API 基础 URL
    pub base_url: String,
    pub api_key: String,
    /// 文本模型
    pub text_model: String,
    /// 图片模型
    pub image_model: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for GeminiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: String::new(),
            text_model: "gemini-2.5-flash".to_string(),
            image_model: "gemini-2.0-flash-preview-image-generation".to_string(),
            timeout_secs: 120,
        }
    }
}

impl GeminiClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

// API Key 不进日志
impl std::fmt::Debug for GeminiClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Gemini 客户端
pub struct GeminiClient {
    client: Client,
    config: GeminiClientConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiClientConfig) -> Result<Self, ModelError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ModelError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn generate_content(
        &self,
        model: &str,
        body: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ModelError> {
        let url = self.generate_url(model);
        tracing::debug!(url = %url, model = %model, "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ModelError::Timeout
                } else if e.is_connect() {
                    ModelError::NetworkError(format!("Cannot connect to model service: {}", e))
                } else {
                    ModelError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            if status == StatusCode::TOO_MANY_REQUESTS || error_text.contains("RESOURCE_EXHAUSTED")
            {
                return Err(ModelError::QuotaExhausted(format!("HTTP {}", status)));
            }
            return Err(ModelError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl StoryModelPort for GeminiClient {
    async fn generate_text(&self, request: TextRequest) -> Result<String, ModelError> {
        let body = GenerateContentRequest {
            contents: vec![Content::user(request.prompt)],
            system_instruction: request.system_instruction.map(Content::system),
            generation_config: GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
                response_modalities: None,
            },
        };

        let response = self.generate_content(&self.config.text_model, &body).await?;

        let text: String = response
            .first_parts()
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.trim().is_empty() {
            return Err(ModelError::InvalidResponse(
                "No text in model response".to_string(),
            ));
        }

        tracing::info!(chars = text.len(), "Story text received");
        Ok(text)
    }

    async fn generate_image(
        &self,
        request: ImageRequest,
    ) -> Result<Option<GeneratedImage>, ModelError> {
        let body = GenerateContentRequest {
            contents: vec![Content::user(request.prompt)],
            system_instruction: None,
            generation_config: GenerationConfig {
                temperature: request.temperature,
                max_output_tokens: None,
                response_modalities: Some(vec!["TEXT", "IMAGE"]),
            },
        };

        let response = self.generate_content(&self.config.image_model, &body).await?;

        for part in response.first_parts() {
            if let Some(inline) = &part.inline_data {
                let data = STANDARD
                    .decode(inline.data.as_bytes())
                    .map_err(|e| ModelError::InvalidResponse(format!("Bad image data: {}", e)))?;
                return Ok(Some(GeneratedImage {
                    mime_type: inline.mime_type.clone(),
                    data,
                }));
            }
            if let Some(text) = &part.text {
                let preview: String = text.chars().take(100).collect();
                tracing::debug!(description = %preview, "Image description");
            }
        }

        Ok(None)
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/v1beta/models", self.config.base_url.trim_end_matches('/'));
        match self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, http::HeaderMap, routing::post, Json, Router};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    async fn spawn(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client(base_url: String) -> GeminiClient {
        GeminiClient::new(GeminiClientConfig::new("test-key").with_base_url(base_url)).unwrap()
    }

    fn text_request() -> TextRequest {
        TextRequest {
            system_instruction: Some("be nice".into()),
            prompt: "tell a story".into(),
            temperature: 0.8,
            max_output_tokens: Some(2000),
        }
    }

    fn image_request() -> ImageRequest {
        ImageRequest {
            prompt: "draw a mouse".into(),
            temperature: 0.7,
        }
    }

    #[test]
    fn test_config_default() {
        let config = GeminiClientConfig::default();
        assert_eq!(config.text_model, "gemini-2.5-flash");
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GeminiClientConfig::new("secret-key").with_timeout(5);
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("timeout_secs: 5"));
    }

    #[test]
    fn test_request_serialization() {
        let body = GenerateContentRequest {
            contents: vec![Content::user("hi".into())],
            system_instruction: Some(Content::system("sys".into())),
            generation_config: GenerationConfig {
                temperature: 0.5,
                max_output_tokens: Some(10),
                response_modalities: None,
            },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "sys");
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 10);
        assert!(value["generationConfig"].get("responseModalities").is_none());
    }

    #[tokio::test]
    async fn test_generate_text() {
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(|Path(call): Path<String>, headers: HeaderMap, Json(body): Json<Value>| async move {
                assert_eq!(call, "gemini-2.5-flash:generateContent");
                assert_eq!(headers[API_KEY_HEADER], "test-key");
                assert_eq!(body["systemInstruction"]["parts"][0]["text"], "be nice");
                Json(json!({
                    "candidates": [{"content": {"parts": [{"text": "{\"title\":"}, {"text": " \"T\"}"}]}}]
                }))
            }),
        );
        let base = spawn(router).await;

        let text = client(base).generate_text(text_request()).await.unwrap();
        assert_eq!(text, "{\"title\": \"T\"}");
    }

    #[tokio::test]
    async fn test_generate_image_decodes_inline_data() {
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["generationConfig"]["responseModalities"], json!(["TEXT", "IMAGE"]));
                Json(json!({
                    "candidates": [{"content": {"parts": [
                        {"text": "A mouse in a meadow"},
                        {"inlineData": {"mimeType": "image/png", "data": "AAAA"}}
                    ]}}]
                }))
            }),
        );
        let base = spawn(router).await;

        let image = client(base).generate_image(image_request()).await.unwrap();
        assert_eq!(
            image,
            Some(GeneratedImage {
                mime_type: "image/png".into(),
                data: vec![0, 0, 0],
            })
        );
    }

    #[tokio::test]
    async fn test_generate_image_without_data() {
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(|| async { Json(json!({ "candidates": [] })) }),
        );
        let base = spawn(router).await;

        let image = client(base).generate_image(image_request()).await.unwrap();
        assert!(image.is_none());
    }

    #[tokio::test]
    async fn test_quota_error() {
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(|| async {
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(json!({"error": {"status": "RESOURCE_EXHAUSTED"}})),
                )
            }),
        );
        let base = spawn(router).await;

        let err = client(base).generate_image(image_request()).await.unwrap_err();
        assert!(err.is_quota_exhausted());
    }

    #[tokio::test]
    async fn test_server_error() {
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = spawn(router).await;

        let err = client(base).generate_text(text_request()).await.unwrap_err();
        assert!(matches!(err, ModelError::ServiceError(msg) if msg.contains("boom")));
    }

    #[tokio::test]
    async fn test_empty_text_is_invalid() {
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(|| async { Json(json!({ "candidates": [{"content": {"parts": []}}] })) }),
        );
        let base = spawn(router).await;

        let err = client(base).generate_text(text_request()).await.unwrap_err();
        assert!(matches!(err, ModelError::InvalidResponse(_)));
    }
}
