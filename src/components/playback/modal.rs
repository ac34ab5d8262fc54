// Playback modal split into state setup and RSX layout chunks.
use crate::api::{AgentConfig, VigiAgentClient};
use crate::components::playback::{
    restart_playback, share_or_copy_link, PlaybackController, ShareOutcome, PLAYBACK_VIDEO_ID,
};
use crate::components::{Icon, ToastController};
use crate::db::ViewerSettings;
use crate::utils;
use dioxus::prelude::*;

#[component]
pub fn PlaybackModal(controller: PlaybackController) -> Element {
    let agents = use_context::<Signal<Vec<AgentConfig>>>();
    let viewer_settings = use_context::<Signal<ViewerSettings>>();
    let toast = use_context::<ToastController>();
    let last_media_key = use_signal(|| None::<String>);

    // Re-point the video element and restart playback whenever the modal
    // opens on a different recording.
    {
        let controller = controller.clone();
        let agents = agents.clone();
        let viewer_settings = viewer_settings.clone();
        let mut last_media_key = last_media_key.clone();
        use_effect(move || {
            let state = controller.current();
            if !state.is_open {
                if last_media_key().is_some() {
                    last_media_key.set(None);
                }
                return;
            }
            let Some(recording) = state.recording else {
                return;
            };
            let Some(agent) = agents().into_iter().find(|a| a.id == recording.agent_id) else {
                return;
            };
            let src = VigiAgentClient::new(agent).recording_video_url(&recording);
            if last_media_key() == Some(src.clone()) {
                return;
            }
            last_media_key.set(Some(src.clone()));
            restart_playback(&src, viewer_settings().autoplay);
        });
    }

    let state = controller.current();
    if !state.is_open {
        return rsx! {};
    }
    let Some(recording) = state.recording else {
        return rsx! {};
    };
    let Some(agent) = agents().into_iter().find(|a| a.id == recording.agent_id) else {
        // The agent was removed while the modal was open.
        return rsx! {};
    };

    let client = VigiAgentClient::new(agent);
    let title = recording.title();
    let media_url = client.recording_video_url(&recording);
    let download_url = client.recording_download_url(&recording);
    let share_url = client.recording_share_url(&recording);
    let tags = recording.tag_list();
    let show_save_actions = viewer_settings().show_save_actions;

    let duration_label = recording.duration.map(utils::format_duration);
    let size_label = recording.size_bytes.map(utils::format_bytes);
    let resolution_label = match (recording.frame_width, recording.frame_height) {
        (Some(w), Some(h)) => Some(format!("{w}x{h}")),
        _ => None,
    };
    let agent_label = format!("{} / camera {}", recording.agent_name, recording.camera_id);

    let on_share = {
        let share_url = share_url.clone();
        let toast = toast.clone();
        move |evt: Event<MouseData>| {
            evt.prevent_default();
            let url = share_url.clone();
            let mut toast = toast.clone();
            spawn(async move {
                match share_or_copy_link(url).await {
                    ShareOutcome::Shared => {}
                    ShareOutcome::Copied => toast.info("Recording link copied to clipboard"),
                    ShareOutcome::Failed(reason) => toast.error(reason),
                    ShareOutcome::Unavailable => {
                        toast.error("Sharing is only available in the browser")
                    }
                }
            });
        }
    };

    include!("modal_view.rs")
}
