//! The shell thread.
//!
//! A single thread owns the `PresentationShell`; handlers talk to it through
//! messages and receive replies on a oneshot channel.

use crate::routes::ApiError;
use prism_core::{
    AiThemeResponse, FrameOutput, PresentationShell, SceneConfig, SceneDescription, ScrollMetrics,
    ThemeOutcome,
};
use serde::Serialize;
use std::thread;
use std::time::Instant;
use tokio::sync::{mpsc, oneshot};
use tracing::info;

pub type Reply<T> = oneshot::Sender<T>;

pub enum ShellMessage {
    GetState {
        resp: Reply<ShellState>,
    },
    GetConfig {
        resp: Reply<SceneConfig>,
    },
    /// Replace the whole config
    SetConfig {
        config: SceneConfig,
        resp: Reply<SceneConfig>,
    },
    /// Single panel edit
    Edit {
        field: String,
        value: String,
        resp: Reply<Result<SceneConfig, ApiError>>,
    },
    ApplyPreset {
        name: String,
        resp: Reply<Result<SceneConfig, ApiError>>,
    },
    SetScroll {
        input: ScrollInput,
        resp: Reply<f32>,
    },
    /// Advance one frame. Without a timestamp or step the server clock is used.
    Frame {
        time: Option<f64>,
        dt: Option<f32>,
        resp: Reply<FrameOutput>,
    },
    GetScene {
        resp: Reply<SceneDescription>,
    },
    ApplyTheme {
        theme: Option<AiThemeResponse>,
        resp: Reply<ThemeApplied>,
    },
}

pub enum ScrollInput {
    Fraction(f32),
    Metrics(ScrollMetrics),
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellState {
    pub config: SceneConfig,
    pub scroll: f32,
    pub progress: f32,
    pub velocity: f32,
    pub last_message: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeApplied {
    #[serde(flatten)]
    pub outcome: ThemeOutcome,
    pub message: String,
    pub config: SceneConfig,
}

/// Spawns the shell thread and returns its mailbox.
pub fn spawn(mut shell: PresentationShell) -> mpsc::Sender<ShellMessage> {
    let (tx, mut rx) = mpsc::channel::<ShellMessage>(100);

    thread::spawn(move || {
        let started = Instant::now();
        let signal = shell.scroll_signal();
        info!("Shell thread started.");

        while let Some(msg) = rx.blocking_recv() {
            match msg {
                ShellMessage::GetState { resp } => {
                    let engine = shell.engine();
                    let _ = resp.send(ShellState {
                        config: shell.config().clone(),
                        scroll: signal.get(),
                        progress: engine.progress(),
                        velocity: engine.velocity(),
                        last_message: shell.last_message().map(str::to_string),
                    });
                }
                ShellMessage::GetConfig { resp } => {
                    let _ = resp.send(shell.config().clone());
                }
                ShellMessage::SetConfig { config, resp } => {
                    shell.set_config(config);
                    let _ = resp.send(shell.config().clone());
                }
                ShellMessage::Edit { field, value, resp } => {
                    let result = shell
                        .edit(&field, &value)
                        .map(|_| shell.config().clone())
                        .map_err(|e| ApiError::new(e.to_string()));
                    let _ = resp.send(result);
                }
                ShellMessage::ApplyPreset { name, resp } => {
                    let result = shell
                        .apply_preset(&name)
                        .map(|_| shell.config().clone())
                        .map_err(|e| ApiError::new(e.to_string()));
                    let _ = resp.send(result);
                }
                ShellMessage::SetScroll { input, resp } => {
                    let fraction = match input {
                        ScrollInput::Fraction(fraction) => {
                            shell.set_scroll(fraction);
                            signal.get()
                        }
                        ScrollInput::Metrics(metrics) => shell.on_scroll(metrics),
                    };
                    let _ = resp.send(fraction);
                }
                ShellMessage::Frame { time, dt, resp } => {
                    let frame = match (time, dt) {
                        (Some(time), _) => shell.frame_at(time),
                        (None, Some(dt)) => shell.step(dt),
                        (None, None) => shell.frame_at(started.elapsed().as_secs_f64()),
                    };
                    let _ = resp.send(frame);
                }
                ShellMessage::GetScene { resp } => {
                    let _ = resp.send(shell.scene());
                }
                ShellMessage::ApplyTheme { theme, resp } => {
                    let outcome = shell.apply_theme_result(theme);
                    let _ = resp.send(ThemeApplied {
                        message: outcome.message(),
                        outcome,
                        config: shell.config().clone(),
                    });
                }
            }
        }
        info!("Shell thread stopped.");
    });

    tx
}
