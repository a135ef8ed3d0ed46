//! Feedback engine backed by JS callbacks (wasm build)

use js_sys::Function;
use wasm_bindgen::JsValue;

use crate::core::error::FeedbackError;

use super::feedback::{FeedbackEngine, FeedbackPattern};

/// Forwards engine calls to host-provided JS functions. Missing handlers
/// report `FeedbackError::Unavailable`.
#[derive(Default)]
pub struct JsFeedbackEngine {
    play: Option<Function>,
    start: Option<Function>,
    stop: Option<Function>,
    pulse: Option<Function>,
}

impl JsFeedbackEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_handlers(&mut self, play: Function, start: Function, stop: Function, pulse: Function) {
        self.play = Some(play);
        self.start = Some(start);
        self.stop = Some(stop);
        self.pulse = Some(pulse);
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn call0(f: &Option<Function>) -> Result<(), String> {
    let f = f.as_ref().ok_or_else(String::new)?;
    f.call0(&JsValue::NULL).map(|_| ()).map_err(describe)
}

impl FeedbackEngine for JsFeedbackEngine {
    fn start(&mut self) -> Result<(), FeedbackError> {
        if self.start.is_none() {
            return Err(FeedbackError::Unavailable);
        }
        call0(&self.start).map_err(FeedbackError::EngineStart)
    }

    fn stop(&mut self) -> Result<(), FeedbackError> {
        if self.stop.is_none() {
            return Err(FeedbackError::Unavailable);
        }
        call0(&self.stop).map_err(FeedbackError::EngineStop)
    }

    fn play(&mut self, pattern: &FeedbackPattern) -> Result<(), FeedbackError> {
        let Some(play) = self.play.as_ref() else {
            return Err(FeedbackError::Unavailable);
        };
        let json = serde_json::to_string(pattern).map_err(|e| FeedbackError::Pattern(e.to_string()))?;
        play.call1(&JsValue::NULL, &JsValue::from_str(&json))
            .map(|_| ())
            .map_err(|e| FeedbackError::Playback(describe(e)))
    }

    fn pulse(&mut self) -> Result<(), FeedbackError> {
        if self.pulse.is_none() {
            return Err(FeedbackError::Unavailable);
        }
        call0(&self.pulse).map_err(FeedbackError::Playback)
    }
}
