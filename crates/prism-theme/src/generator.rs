use crate::error::{ThemeError, ThemeErrorKind};
use async_trait::async_trait;
use prism_core::AiThemeResponse;
use tracing::{error, warn};

/// Anything that can turn a prompt into a validated theme.
#[async_trait]
pub trait ThemeGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<AiThemeResponse, ThemeError>;
}

/// Runs `generator`, collapsing every failure into `None`.
///
/// Failures are logged here; callers only see that no theme arrived.
pub async fn generate_theme_or_none(
    generator: &dyn ThemeGenerator,
    prompt: &str,
) -> Option<AiThemeResponse> {
    match generator.generate(prompt).await {
        Ok(theme) => Some(theme),
        Err(e) => {
            log_failure(&e);
            None
        }
    }
}

/// Logs a failed theme request with its full cause chain.
pub fn log_failure(e: &ThemeError) {
    match e.kind() {
        ThemeErrorKind::Configuration => warn!("theme request not sent: {}", e),
        kind => error!(?kind, "theme generation failed: {}", failure_report(e)),
    }
}

/// `e` followed by each of its sources, joined with `": "`.
pub fn failure_report(e: &ThemeError) -> String {
    DisplayChain(e).to_string()
}

/// Formats an error together with its source chain.
struct DisplayChain<'a>(&'a ThemeError);

impl std::fmt::Display for DisplayChain<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = std::error::Error::source(self.0);
        while let Some(cause) = source {
            write!(f, ": {}", cause)?;
            source = cause.source();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::ConfigError;

    #[test]
    fn report_includes_the_underlying_cause() {
        let err = ThemeError::Invalid(ConfigError::InvalidColor {
            field: "color".into(),
            value: "orange".into(),
        });

        let report = failure_report(&err);
        assert!(report.starts_with("theme rejected: "));
        assert!(report.contains("orange"));
    }

    #[test]
    fn report_of_a_sourceless_error_is_its_message() {
        let err = ThemeError::Command("`gen` timed out".into());
        assert_eq!(failure_report(&err), "theme command failed: `gen` timed out");
    }
}
