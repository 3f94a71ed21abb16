use crate::error::ThemeError;
use crate::generator::{log_failure, ThemeGenerator};
use crate::prompt::normalize_prompt;
use prism_core::AiThemeResponse;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Allows at most one theme request in flight.
#[derive(Clone, Debug, Default)]
pub struct ThemeRequestGate {
    pending: Arc<AtomicBool>,
}

/// Held while a request runs; releases the gate on drop.
#[derive(Debug)]
pub struct GateGuard {
    pending: Arc<AtomicBool>,
}

impl Drop for GateGuard {
    fn drop(&mut self) {
        self.pending.store(false, Ordering::Release);
    }
}

impl ThemeRequestGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    pub fn try_begin(&self) -> Result<GateGuard, ThemeError> {
        self.pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ThemeError::Busy)?;
        Ok(GateGuard {
            pending: self.pending.clone(),
        })
    }
}

/// A generator behind a request gate.
#[derive(Clone)]
pub struct ThemeService {
    generator: Arc<dyn ThemeGenerator>,
    gate: ThemeRequestGate,
}

impl ThemeService {
    pub fn new(generator: Arc<dyn ThemeGenerator>) -> Self {
        Self {
            generator,
            gate: ThemeRequestGate::new(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.gate.is_pending()
    }

    /// Empty prompts and re-submissions while pending are rejected without
    /// reaching the generator.
    pub async fn try_generate(&self, prompt: &str) -> Result<AiThemeResponse, ThemeError> {
        let prompt = normalize_prompt(prompt)?;
        let _guard = self.gate.try_begin()?;
        self.generator.generate(prompt).await
    }

    pub async fn generate_or_none(&self, prompt: &str) -> Option<AiThemeResponse> {
        match self.try_generate(prompt).await {
            Ok(theme) => Some(theme),
            Err(e) => {
                log_failure(&e);
                None
            }
        }
    }
}
