// Playback modal state machine and share payload.
use dioxus::prelude::*;

use crate::api::Recording;

#[derive(Clone, PartialEq, Default)]
pub struct PlaybackModalState {
    pub is_open: bool,
    pub recording: Option<Recording>,
}

#[derive(Clone, PartialEq)]
pub struct PlaybackController {
    state: Signal<PlaybackModalState>,
}

impl PlaybackController {
    pub fn new(state: Signal<PlaybackModalState>) -> Self {
        Self { state }
    }

    pub fn open(&mut self, recording: Recording) {
        self.state.with_mut(|state| {
            state.is_open = true;
            state.recording = Some(recording);
        });
    }

    pub fn close(&mut self) {
        self.state.with_mut(|state| {
            state.is_open = false;
        });
    }

    pub fn current(&self) -> PlaybackModalState {
        (self.state)()
    }
}

const SHARE_TITLE: &str = "Vigi recording";
const SHARE_TEXT: &str = "Motion capture recording from a Vigi camera agent";

/// What gets handed to the platform share capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: &'static str,
    pub text: &'static str,
    pub url: String,
}

pub fn share_payload(url: &str) -> SharePayload {
    SharePayload {
        title: SHARE_TITLE,
        text: SHARE_TEXT,
        url: url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_payload_carries_fixed_strings_and_exact_url() {
        let payload =
            share_payload("http://10.0.0.5:5000/recordings/0/2024-06-01/14-03-22/video?share=true");
        assert_eq!(payload.title, "Vigi recording");
        assert_eq!(payload.text, "Motion capture recording from a Vigi camera agent");
        assert_eq!(
            payload.url,
            "http://10.0.0.5:5000/recordings/0/2024-06-01/14-03-22/video?share=true"
        );
    }

    #[test]
    fn modal_state_starts_closed_and_empty() {
        let state = PlaybackModalState::default();
        assert!(!state.is_open);
        assert!(state.recording.is_none());
    }
}
