use crate::api::{AgentConfig, AgentStatus, VigiAgentClient};
use crate::components::{AppView, Icon, Navigation};
use dioxus::prelude::*;

#[component]
pub fn CamerasView() -> Element {
    let agents = use_context::<Signal<Vec<AgentConfig>>>();
    let navigation = use_context::<Navigation>();

    let statuses = use_resource(move || {
        let agents = agents();
        async move {
            #[cfg(not(target_arch = "wasm32"))]
            let started_at = std::time::Instant::now();

            let mut reports: Vec<(AgentConfig, Result<AgentStatus, String>)> = Vec::new();
            for agent in agents.into_iter().filter(|a| a.active) {
                let status = VigiAgentClient::new(agent.clone()).get_status().await;
                reports.push((agent, status));
            }

            #[cfg(not(target_arch = "wasm32"))]
            crate::diagnostics::log_fetch("camera status", started_at, reports.len());

            reports
        }
    });

    let content = match statuses() {
        None => rsx! {
            div { class: "flex items-center gap-2 text-sm text-zinc-400",
                Icon { name: "loader".to_string(), class: "w-4 h-4 animate-spin".to_string() }
                "Checking agents..."
            }
        },
        Some(reports) => {
            if reports.is_empty() {
                rsx! {
                    p { class: "text-sm text-zinc-400",
                        "No active agents. Add a Vigi agent under Settings."
                    }
                }
            } else {
                rsx! {
                    div { class: "grid gap-4 sm:grid-cols-2",
                        for (agent , status) in reports {
                            CameraCard { agent: agent.clone(), status: status.clone() }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "space-y-6",
            header { class: "page-header flex flex-wrap items-center justify-between gap-4",
                h1 { class: "page-title text-2xl font-bold text-white", "Cameras" }
                button {
                    class: "px-3 py-2 rounded-lg bg-zinc-900/50 border border-zinc-800 text-sm text-zinc-300 hover:text-white hover:border-sky-500/60 transition-colors",
                    onclick: {
                        let navigation = navigation.clone();
                        move |_| navigation.navigate_to(AppView::Settings)
                    },
                    "Manage agents"
                }
            }

            {content}
        }
    }
}

fn format_uptime(uptime_secs: u64) -> String {
    let days = uptime_secs / 86_400;
    let hours = (uptime_secs % 86_400) / 3600;
    let minutes = (uptime_secs % 3600) / 60;
    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

#[component]
fn CameraCard(agent: AgentConfig, status: Result<AgentStatus, String>) -> Element {
    let body = match status {
        Ok(status) => {
            let uptime = format_uptime(status.uptime_secs);
            let camera_specs = format!(
                "{}x{} @ {:.0} fps",
                status.frame_width, status.frame_height, status.fps
            );
            let monitoring_label = if status.monitoring {
                "monitoring"
            } else {
                "idle"
            };
            rsx! {
                div { class: "grid grid-cols-2 gap-x-4 gap-y-1 text-xs text-zinc-400",
                    span { "camera {status.camera_id}" }
                    span { "{camera_specs}" }
                    span { "up {uptime}" }
                    span { "{status.recording_count} recordings" }
                }
                span {
                    class: if status.monitoring { "inline-flex items-center gap-1.5 text-xs text-emerald-400" } else { "inline-flex items-center gap-1.5 text-xs text-zinc-500" },
                    span {
                        class: if status.monitoring { "w-2 h-2 rounded-full bg-emerald-500" } else { "w-2 h-2 rounded-full bg-zinc-600" },
                    }
                    "{monitoring_label}"
                }
            }
        }
        Err(err) => rsx! {
            p { class: "text-xs text-amber-400", "unreachable: {err}" }
        },
    };

    rsx! {
        div { class: "p-4 rounded-xl bg-zinc-900/50 border border-zinc-800 space-y-3",
            div { class: "flex items-center gap-3",
                div { class: "w-10 h-10 rounded-xl bg-zinc-800/70 flex items-center justify-center text-sky-400",
                    Icon { name: "camera".to_string(), class: "w-5 h-5".to_string() }
                }
                div { class: "min-w-0",
                    h3 { class: "font-medium text-white truncate", "{agent.name}" }
                    p { class: "text-xs text-zinc-500 truncate", "{agent.url}" }
                }
            }
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_uptime_at_each_scale() {
        assert_eq!(format_uptime(59), "0m");
        assert_eq!(format_uptime(45 * 60), "45m");
        assert_eq!(format_uptime(3 * 3600 + 20 * 60), "3h 20m");
        assert_eq!(format_uptime(2 * 86_400 + 5 * 3600), "2d 5h");
    }
}
