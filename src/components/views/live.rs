use crate::api::{AgentConfig, AgentStatus, VigiAgentClient};
use crate::components::Icon;
use crate::db::ViewerSettings;
use dioxus::prelude::*;

fn select_agent(agents: &[AgentConfig], last_agent_id: Option<&String>) -> Option<AgentConfig> {
    let active: Vec<&AgentConfig> = agents.iter().filter(|a| a.active).collect();
    last_agent_id
        .and_then(|id| active.iter().find(|a| &a.id == id).copied())
        .or_else(|| active.first().copied())
        .cloned()
}

/// Live MJPEG feed from the selected agent. The browser keeps the stream
/// open for as long as the `img` element stays mounted.
#[component]
pub fn LiveView() -> Element {
    let agents = use_context::<Signal<Vec<AgentConfig>>>();
    let mut viewer_settings = use_context::<Signal<ViewerSettings>>();

    let status = use_resource(move || {
        let agents_snapshot = agents();
        let settings = viewer_settings();
        async move {
            let selected = select_agent(&agents_snapshot, settings.last_agent_id.as_ref());
            match selected {
                Some(agent) => Some(VigiAgentClient::new(agent).get_status().await),
                None => None,
            }
        }
    });

    let agents_snapshot = agents();
    let settings = viewer_settings();
    let active_agents: Vec<AgentConfig> =
        agents_snapshot.iter().filter(|a| a.active).cloned().collect();
    let selected = select_agent(&agents_snapshot, settings.last_agent_id.as_ref());

    let status_label = match status() {
        Some(Some(Ok(agent_status))) => {
            let camera_specs = format!(
                "{}x{} @ {:.0} fps",
                agent_status.frame_width, agent_status.frame_height, agent_status.fps
            );
            rsx! {
                span { "{camera_specs}" }
            }
        }
        Some(Some(Err(_))) => rsx! {
            span { class: "text-amber-400", "status unavailable" }
        },
        _ => rsx! {
            Icon { name: "loader".to_string(), class: "w-3 h-3 animate-spin".to_string() }
        },
    };

    let feed = selected.map(|agent| {
        let client = VigiAgentClient::new(agent.clone());
        let camera_id = match status() {
            Some(Some(Ok(AgentStatus { camera_id, .. }))) => camera_id,
            _ => 0,
        };
        (
            agent,
            client.video_feed_url(camera_id),
            client.snapshot_url(camera_id),
        )
    });
    let selected_id = feed.as_ref().map(|(agent, _, _)| agent.id.clone());

    rsx! {
        div { class: "space-y-6",
            header { class: "page-header flex flex-wrap items-center justify-between gap-4",
                h1 { class: "page-title text-2xl font-bold text-white", "Live" }
                if active_agents.len() > 1 {
                    div { class: "flex flex-wrap gap-2",
                        for agent in active_agents.clone() {
                            button {
                                class: if selected_id.clone() == Some(agent.id.clone()) { "px-3 py-1.5 rounded-lg bg-sky-500/20 border border-sky-500/50 text-sky-300 text-sm" } else { "px-3 py-1.5 rounded-lg bg-zinc-900/50 border border-zinc-800 text-zinc-400 hover:text-white text-sm transition-colors" },
                                onclick: {
                                    let id = agent.id.clone();
                                    move |_| {
                                        let mut settings = viewer_settings();
                                        settings.last_agent_id = Some(id.clone());
                                        viewer_settings.set(settings);
                                    }
                                },
                                "{agent.name}"
                            }
                        }
                    }
                }
            }

            if let Some((agent, feed_url, snapshot_url)) = feed {
                div { class: "space-y-3",
                    div { class: "rounded-2xl overflow-hidden border border-zinc-800 bg-black",
                        img {
                            class: "w-full aspect-video object-contain",
                            src: "{feed_url}",
                            alt: "Live feed from {agent.name}",
                        }
                    }
                    div { class: "flex flex-wrap items-center justify-between gap-3",
                        div { class: "flex items-center gap-3 text-xs text-zinc-500",
                            span { class: "flex items-center gap-1.5",
                                span { class: "w-2 h-2 rounded-full bg-red-500 animate-pulse" }
                                "{agent.name}"
                            }
                            {status_label}
                        }
                        a {
                            class: "flex items-center gap-2 px-3 py-2 rounded-lg bg-zinc-900/70 border border-zinc-800 text-sm text-zinc-300 hover:text-white hover:border-sky-500/60 transition-colors",
                            href: "{snapshot_url}",
                            target: "_blank",
                            Icon { name: "camera".to_string(), class: "w-4 h-4".to_string() }
                            "Snapshot"
                        }
                    }
                }
            } else {
                p { class: "text-sm text-zinc-400",
                    "No active agents. Add a Vigi agent under Settings to see its live feed."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(id: &str, active: bool) -> AgentConfig {
        AgentConfig {
            id: id.to_string(),
            name: id.to_string(),
            url: format!("http://{id}:5000"),
            active,
        }
    }

    #[test]
    fn prefers_remembered_agent_when_still_active() {
        let agents = vec![agent("a", true), agent("b", true)];
        let picked = select_agent(&agents, Some(&"b".to_string())).unwrap();
        assert_eq!(picked.id, "b");
    }

    #[test]
    fn falls_back_to_first_active_agent() {
        let agents = vec![agent("a", false), agent("b", true)];
        let picked = select_agent(&agents, Some(&"a".to_string())).unwrap();
        assert_eq!(picked.id, "b");
        assert!(select_agent(&[agent("a", false)], None).is_none());
    }
}
