use crate::api::{AgentConfig, Recording, VigiAgentClient};
use crate::components::{Icon, PlaybackController};
use crate::utils;
use dioxus::prelude::*;

/// Merge per-agent listings into date groups, newest date first.
/// Entries inside a group keep the newest-first order the client returned.
fn group_by_date(recordings: Vec<Recording>) -> Vec<(String, Vec<Recording>)> {
    let mut groups: Vec<(String, Vec<Recording>)> = Vec::new();
    for recording in recordings {
        if let Some(index) = groups.iter().position(|(date, _)| *date == recording.date) {
            groups[index].1.push(recording);
        } else {
            groups.push((recording.date.clone(), vec![recording]));
        }
    }
    groups
}

fn matches_query(recording: &Recording, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let camera = format!("camera {}", recording.camera_id);
    recording.date.contains(query)
        || recording.time.contains(query)
        || camera.contains(query)
        || recording.agent_name.to_lowercase().contains(query)
        || recording
            .tag_list()
            .iter()
            .any(|tag| tag.to_lowercase().contains(query))
}

#[component]
pub fn RecordingsView() -> Element {
    let agents = use_context::<Signal<Vec<AgentConfig>>>();
    let playback = use_context::<PlaybackController>();

    let mut search_query = use_signal(String::new);

    let recordings = use_resource(move || {
        let agents = agents();
        async move {
            #[cfg(not(target_arch = "wasm32"))]
            let started_at = std::time::Instant::now();

            let mut merged: Vec<Recording> = Vec::new();
            let mut failures: Vec<String> = Vec::new();
            for agent in agents.into_iter().filter(|a| a.active) {
                let name = agent.name.clone();
                let client = VigiAgentClient::new(agent);
                match client.get_recordings().await {
                    Ok(agent_recordings) => merged.extend(agent_recordings),
                    Err(err) => failures.push(format!("{name}: {err}")),
                }
            }
            merged.sort_by(Recording::newest_first);

            #[cfg(not(target_arch = "wasm32"))]
            crate::diagnostics::log_fetch("recordings", started_at, merged.len());

            (merged, failures)
        }
    });

    let loaded = recordings();
    let query = search_query().trim().to_lowercase();

    let content = match loaded {
        None => rsx! {
            div { class: "flex items-center gap-2 text-sm text-zinc-400",
                Icon { name: "loader".to_string(), class: "w-4 h-4 animate-spin".to_string() }
                "Loading recordings..."
            }
        },
        Some((merged, failures)) => {
            let filtered: Vec<Recording> = merged
                .into_iter()
                .filter(|recording| matches_query(recording, &query))
                .collect();
            let groups = group_by_date(filtered);
            rsx! {
                for failure in failures {
                    div { class: "p-3 rounded-lg bg-amber-500/10 border border-amber-500/40 text-amber-200 text-sm",
                        "Agent unreachable: {failure}"
                    }
                }
                if groups.is_empty() {
                    p { class: "text-sm text-zinc-400",
                        "No recordings matched. Motion captures appear here once an agent records one."
                    }
                }
                for (date , group) in groups {
                    section { class: "space-y-3",
                        h2 { class: "text-xs font-semibold text-zinc-500 uppercase tracking-wider", "{date}" }
                        div { class: "grid gap-3 sm:grid-cols-2 xl:grid-cols-3",
                            for recording in group {
                                RecordingCard {
                                    recording: recording.clone(),
                                    onopen: {
                                        let playback = playback.clone();
                                        move |recording: Recording| {
                                            let mut playback = playback.clone();
                                            playback.open(recording);
                                        }
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "space-y-8",
            header { class: "page-header flex flex-wrap items-center justify-between gap-4",
                h1 { class: "page-title text-2xl font-bold text-white", "Recordings" }
                div { class: "flex items-center gap-3",
                    input {
                        class: "px-3 py-2 rounded-lg bg-zinc-900/50 border border-zinc-800 text-white placeholder:text-zinc-600 focus:outline-none focus:border-sky-500/50 focus:ring-2 focus:ring-sky-500/20",
                        placeholder: "Filter by camera, date or tag",
                        value: search_query,
                        oninput: move |e| search_query.set(e.value()),
                    }
                    button {
                        class: "p-2 rounded-lg text-zinc-300 hover:text-white hover:bg-zinc-800/60 transition-colors",
                        aria_label: "Refresh recordings",
                        onclick: move |_| {
                            let mut recordings = recordings.clone();
                            recordings.restart();
                        },
                        Icon { name: "refresh".to_string(), class: "w-5 h-5".to_string() }
                    }
                }
            }

            {content}
        }
    }
}

#[component]
fn RecordingCard(recording: Recording, onopen: EventHandler<Recording>) -> Element {
    let time_label = utils::pretty_time(&recording.time);
    let duration_label = recording.duration.map(utils::format_duration);
    let tags = recording.tag_list();
    let open_recording = recording.clone();

    rsx! {
        button {
            class: "recording-card group w-full text-left p-4 rounded-xl bg-zinc-900/50 border border-zinc-800 hover:border-sky-500/60 transition-colors space-y-2",
            onclick: move |_| onopen.call(open_recording.clone()),
            div { class: "flex items-center justify-between gap-2",
                div { class: "flex items-center gap-2 min-w-0",
                    div { class: "w-9 h-9 rounded-lg bg-zinc-800/70 flex items-center justify-center text-sky-400 group-hover:text-sky-300",
                        Icon { name: "play".to_string(), class: "w-4 h-4".to_string() }
                    }
                    div { class: "min-w-0",
                        div { class: "font-medium text-white truncate", "{time_label}" }
                        p { class: "text-xs text-zinc-500 truncate",
                            "{recording.agent_name} / camera {recording.camera_id}"
                        }
                    }
                }
                if let Some(duration) = duration_label {
                    span { class: "text-xs text-zinc-500 shrink-0", "{duration}" }
                }
            }
            if !tags.is_empty() {
                div { class: "flex flex-wrap gap-1.5",
                    for tag in tags {
                        span { class: "badge px-2 py-0.5 rounded-full bg-sky-500/15 border border-sky-500/40 text-sky-300 text-xs",
                            "{tag}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording(date: &str, time: &str, tags: &str) -> Recording {
        Recording {
            camera_id: 0,
            date: date.to_string(),
            time: time.to_string(),
            tags: tags.to_string(),
            agent_name: "Garage".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn groups_preserve_newest_first_order() {
        let groups = group_by_date(vec![
            recording("2024-06-02", "10-00-00", ""),
            recording("2024-06-02", "08-00-00", ""),
            recording("2024-06-01", "23-59-59", ""),
        ]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "2024-06-02");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[0].1[0].time, "10-00-00");
        assert_eq!(groups[1].0, "2024-06-01");
    }

    #[test]
    fn query_matches_tags_and_camera() {
        let rec = recording("2024-06-01", "08-00-00", "person,car");
        assert!(matches_query(&rec, ""));
        assert!(matches_query(&rec, "person"));
        assert!(matches_query(&rec, "camera 0"));
        assert!(matches_query(&rec, "garage"));
        assert!(matches_query(&rec, "2024-06"));
        assert!(!matches_query(&rec, "dog"));
    }
}
