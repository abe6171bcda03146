//! AI description enhancer (OpenAI-compatible chat completions).

use std::time::Duration;

use readmegen_core::{
    application::{EnhancerError, ports::Enhancer},
    domain::{Enhancement, ProjectMetadata},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{DEFAULT_TIMEOUT, check_status, http_client, map_reqwest_error};

/// Environment variables checked for an API key, in order.
pub const API_KEY_ENV: [&str; 2] = ["READMEGEN_AI_API_KEY", "OPENAI_API_KEY"];

const SYSTEM_PROMPT: &str = "You improve README metadata for software projects. \
Reply with a single JSON object and nothing else: \
{\"description\": string, \"features\": [string]}. \
The description is one clear paragraph. Suggest at most five short features \
that are not already listed.";

#[derive(Debug, Clone)]
pub struct AiSettings {
    /// Base URL, e.g. `https://api.openai.com/v1`.
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl AiSettings {
    /// First non-empty key among [`API_KEY_ENV`].
    pub fn api_key_from_env() -> Option<String> {
        API_KEY_ENV
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|key| !key.trim().is_empty())
    }
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1".into(),
            model: "gpt-4o-mini".into(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Rewrites the description and suggests extra features.
#[derive(Debug, Clone)]
pub struct AiEnhancer {
    settings: AiSettings,
}

impl AiEnhancer {
    pub fn new(settings: AiSettings) -> Self {
        Self { settings }
    }

    fn url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.endpoint.trim_end_matches('/')
        )
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// The JSON object the model is asked to reply with.
#[derive(Debug, Deserialize)]
struct Suggestion {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    features: Vec<String>,
}

impl Enhancer for AiEnhancer {
    fn name(&self) -> &'static str {
        "ai"
    }

    #[instrument(skip_all, fields(model = %self.settings.model))]
    fn enhance(&self, metadata: &ProjectMetadata) -> Result<Enhancement, EnhancerError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(EnhancerError::MissingCredentials {
                provider: "AI",
                env_var: API_KEY_ENV[0],
            })?;

        let prompt = user_prompt(metadata);
        let request = ChatRequest {
            model: &self.settings.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: 0.3,
        };

        let client = http_client(self.settings.timeout)?;
        debug!(url = %self.url(), "Requesting AI suggestion");
        let response = client
            .post(self.url())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .map_err(map_reqwest_error)?;

        let chat: ChatResponse = check_status(response)?
            .json()
            .map_err(|e| EnhancerError::MalformedResponse(e.to_string()))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| EnhancerError::MalformedResponse("response has no choices".into()))?;

        parse_suggestion(&content)
    }
}

fn user_prompt(metadata: &ProjectMetadata) -> String {
    let mut prompt = format!(
        "Project name: {}\nProject type: {}\nCurrent description: {}\n",
        metadata.name, metadata.project_type, metadata.description
    );
    if metadata.features.is_empty() {
        prompt.push_str("Known features: none\n");
    } else {
        prompt.push_str("Known features:\n");
        for feature in &metadata.features {
            prompt.push_str("- ");
            prompt.push_str(feature);
            prompt.push('\n');
        }
    }
    prompt
}

/// Parse the model's reply, tolerating a surrounding ```json fence.
fn parse_suggestion(content: &str) -> Result<Enhancement, EnhancerError> {
    let trimmed = content.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed);

    let suggestion: Suggestion = serde_json::from_str(body.trim())
        .map_err(|e| EnhancerError::MalformedResponse(e.to_string()))?;

    Ok(Enhancement {
        description: suggestion.description,
        features: suggestion.features,
        ..Enhancement::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> ProjectMetadata {
        ProjectMetadata::builder()
            .name("Demo")
            .description("A demo")
            .feature("Fast")
            .build()
            .unwrap()
    }

    #[test]
    fn missing_key_fails_without_network() {
        let enhancer = AiEnhancer::new(AiSettings {
            endpoint: "http://invalid.invalid".into(),
            ..AiSettings::default()
        });

        let err = enhancer.enhance(&metadata()).unwrap_err();

        assert!(matches!(err, EnhancerError::MissingCredentials { .. }));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let enhancer = AiEnhancer::new(AiSettings {
            api_key: Some("  ".into()),
            ..AiSettings::default()
        });

        assert!(matches!(
            enhancer.enhance(&metadata()),
            Err(EnhancerError::MissingCredentials { .. })
        ));
    }

    #[test]
    fn unreachable_endpoint_is_reported() {
        let enhancer = AiEnhancer::new(AiSettings {
            endpoint: "http://127.0.0.1:9".into(),
            api_key: Some("test-key".into()),
            timeout: Duration::from_secs(2),
            ..AiSettings::default()
        });

        let err = enhancer.enhance(&metadata()).unwrap_err();

        assert!(matches!(
            err,
            EnhancerError::Network(_) | EnhancerError::Timeout
        ));
    }

    #[test]
    fn parses_plain_json_reply() {
        let e = parse_suggestion(r#"{"description": "Better", "features": ["Safe"]}"#).unwrap();
        assert_eq!(e.description.as_deref(), Some("Better"));
        assert_eq!(e.features, vec!["Safe"]);
    }

    #[test]
    fn parses_fenced_reply() {
        let e = parse_suggestion("```json\n{\"description\": \"Fenced\"}\n```").unwrap();
        assert_eq!(e.description.as_deref(), Some("Fenced"));
        assert!(e.features.is_empty());
    }

    #[test]
    fn prose_reply_is_malformed() {
        assert!(matches!(
            parse_suggestion("Sure! Here is a better description."),
            Err(EnhancerError::MalformedResponse(_))
        ));
    }

    #[test]
    fn prompt_lists_known_features() {
        let prompt = user_prompt(&metadata());
        assert!(prompt.contains("Project name: Demo"));
        assert!(prompt.contains("- Fast"));
    }

    #[test]
    fn url_joins_without_double_slash() {
        let enhancer = AiEnhancer::new(AiSettings {
            endpoint: "https://example.com/v1/".into(),
            ..AiSettings::default()
        });
        assert_eq!(enhancer.url(), "https://example.com/v1/chat/completions");
    }
}
