//! # Theme Client
//!
//! Talks to the generative model that turns a mood prompt into a theme.
//!
//! ## Responsibilities
//! - **Configuration**: Provider, model, endpoint and credential, read from the environment.
//! - **Gemini**: One `generateContent` call with a JSON response schema.
//! - **Command**: Pipes the prompt to an external command and reads the theme from stdout.
//! - **Validation**: Every returned theme is checked before it leaves the client.

use crate::error::ThemeError;
use crate::generator::ThemeGenerator;
use crate::prompt::{build_prompt, normalize_prompt, response_schema};
use async_trait::async_trait;
use prism_core::AiThemeResponse;
use serde::Deserialize;
use serde_json::json;
use std::fmt;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Theme provider selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemeProvider {
    #[default]
    Gemini,
    /// External command; reads the prompt on stdin, prints the theme JSON.
    Command,
}

/// Configuration for the theme client
#[derive(Clone)]
pub struct ThemeClientConfig {
    pub provider: ThemeProvider,
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub command: Option<String>,
    pub timeout: Duration,
}

impl Default for ThemeClientConfig {
    fn default() -> Self {
        Self {
            provider: ThemeProvider::Gemini,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            command: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl fmt::Debug for ThemeClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeClientConfig")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("command", &self.command)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ThemeClientConfig {
    /// Reads `GEMINI_API_KEY` (or `API_KEY`), `PRISM_THEME_MODEL`,
    /// `PRISM_THEME_BASE_URL` and `PRISM_THEME_COMMAND`.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let command = var("PRISM_THEME_COMMAND");
        Self {
            provider: if command.is_some() {
                ThemeProvider::Command
            } else {
                ThemeProvider::Gemini
            },
            api_key: var("GEMINI_API_KEY").or_else(|| var("API_KEY")),
            model: var("PRISM_THEME_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: var("PRISM_THEME_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            command,
            ..Self::default()
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

pub struct ThemeClient {
    config: ThemeClientConfig,
    http: reqwest::Client,
}

impl ThemeClient {
    pub fn new(config: ThemeClientConfig) -> Result<Self, ThemeError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ThemeClientConfig {
        &self.config
    }

    async fn run_gemini(&self, mood: &str) -> Result<AiThemeResponse, ThemeError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ThemeError::MissingCredential)?;

        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": build_prompt(mood) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            }
        });

        debug!(model = %self.config.model, "requesting theme");
        let response = self
            .http
            .post(self.config.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ThemeError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_generate_content(&text)
    }

    async fn run_command(&self, mood: &str) -> Result<AiThemeResponse, ThemeError> {
        let cmd = self
            .config
            .command
            .as_deref()
            .ok_or_else(|| ThemeError::Command("command provider requires a command".into()))?;

        let mut child = tokio::process::Command::new(if cfg!(windows) { "powershell" } else { "sh" })
            .args(if cfg!(windows) {
                ["-Command", cmd]
            } else {
                ["-c", cmd]
            })
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ThemeError::Command(format!("failed to spawn `{}`: {}", cmd, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(build_prompt(mood).as_bytes())
                .await
                .map_err(|e| ThemeError::Command(e.to_string()))?;
        }

        let output = tokio::time::timeout(self.config.timeout, child.wait_with_output())
            .await
            .map_err(|_| ThemeError::Command(format!("`{}` timed out", cmd)))?
            .map_err(|e| ThemeError::Command(e.to_string()))?;

        if !output.status.success() {
            return Err(ThemeError::Command(format!(
                "`{}` exited with {}: {}",
                cmd,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        parse_theme_text(&String::from_utf8_lossy(&output.stdout))
    }
}

#[async_trait]
impl ThemeGenerator for ThemeClient {
    async fn generate(&self, prompt: &str) -> Result<AiThemeResponse, ThemeError> {
        let mood = normalize_prompt(prompt)?;
        let theme = match self.config.provider {
            ThemeProvider::Gemini => self.run_gemini(mood).await?,
            ThemeProvider::Command => self.run_command(mood).await?,
        };
        info!(theme = %theme.theme_name, "theme generated");
        Ok(theme)
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

/// Extracts the theme from a `generateContent` response body.
pub fn parse_generate_content(body: &str) -> Result<AiThemeResponse, ThemeError> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ThemeError::Schema("response contained no text".into()));
    }
    parse_theme_text(&text)
}

/// Parses and validates theme JSON.
pub fn parse_theme_text(text: &str) -> Result<AiThemeResponse, ThemeError> {
    let theme: AiThemeResponse = serde_json::from_str(text.trim())?;
    theme.config.validate()?;
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    const THEME: &str = r##"{
        "themeName": "Golden Hour",
        "description": "Warm light",
        "config": {
            "color": "#FFAA00",
            "bgColor": "#1a0f00",
            "metalness": 0.9,
            "roughness": 0.2,
            "shape": "Torus"
        }
    }"##;

    #[test]
    fn extracts_theme_from_candidate_text() {
        let body = json!({
            "candidates": [{ "content": { "parts": [{ "text": THEME }] } }]
        })
        .to_string();

        let theme = parse_generate_content(&body).unwrap();
        assert_eq!(theme.theme_name, "Golden Hour");
        assert_eq!(theme.config.color, "#FFAA00");
    }

    #[test]
    fn missing_text_is_a_schema_error() {
        let err = parse_generate_content(r#"{"candidates": []}"#).unwrap_err();
        assert!(matches!(err, ThemeError::Schema(_)));

        let err = parse_generate_content(r#"{"candidates": [{"content": {"parts": []}}]}"#)
            .unwrap_err();
        assert!(matches!(err, ThemeError::Schema(_)));
    }

    #[test]
    fn invalid_color_is_rejected_before_merge() {
        let text = THEME.replace("#FFAA00", "orange");
        let err = parse_theme_text(&text).unwrap_err();
        assert!(matches!(err, ThemeError::Invalid(_)));
    }

    #[test]
    fn missing_mandatory_field_is_rejected() {
        let text = r##"{"themeName": "x", "config": {"color": "#ffffff"}}"##;
        assert!(matches!(parse_theme_text(text), Err(ThemeError::Json(_))));
    }

    #[test]
    fn debug_output_hides_the_key() {
        let config = ThemeClientConfig {
            api_key: Some("secret-key".into()),
            ..ThemeClientConfig::default()
        };
        assert!(!format!("{:?}", config).contains("secret-key"));
    }

    #[test]
    fn endpoint_includes_model() {
        let config = ThemeClientConfig {
            base_url: "http://localhost:9/".into(),
            ..ThemeClientConfig::default()
        };
        assert_eq!(
            config.endpoint(),
            "http://localhost:9/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
