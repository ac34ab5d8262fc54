use crate::api::{AgentConfig, VigiAgentClient};
use crate::components::{Icon, ToastController};
use crate::db::ViewerSettings;
use dioxus::prelude::*;

#[component]
pub fn SettingsView() -> Element {
    let mut agents = use_context::<Signal<Vec<AgentConfig>>>();
    let mut viewer_settings = use_context::<Signal<ViewerSettings>>();
    let toast = use_context::<ToastController>();

    let mut new_agent_name = use_signal(String::new);
    let mut new_agent_url = use_signal(String::new);
    let mut form_error = use_signal(|| None::<String>);

    let mut add_agent = move |_| {
        let name = new_agent_name().trim().to_string();
        let url = new_agent_url().trim().to_string();

        if name.is_empty() {
            form_error.set(Some("Give the agent a name.".to_string()));
            return;
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            form_error.set(Some(
                "The agent URL must start with http:// or https://.".to_string(),
            ));
            return;
        }

        let mut current = agents();
        current.push(AgentConfig::new(name, url));
        agents.set(current);

        new_agent_name.set(String::new());
        new_agent_url.set(String::new());
        form_error.set(None);
    };

    let settings = viewer_settings();
    let agent_list = agents();

    rsx! {
        div { class: "space-y-8 max-w-2xl",
            header { class: "page-header",
                h1 { class: "page-title text-2xl font-bold text-white", "Settings" }
            }

            // Agent endpoints
            section { class: "space-y-4",
                h2 { class: "text-sm font-semibold text-zinc-400 uppercase tracking-wider", "Agents" }

                if agent_list.is_empty() {
                    p { class: "text-sm text-zinc-400", "No agents configured yet." }
                }
                for agent in agent_list {
                    div { class: "flex items-center gap-3 p-3 rounded-xl bg-zinc-900/50 border border-zinc-800",
                        button {
                            class: if agent.active { "w-10 h-6 rounded-full bg-sky-500/80 relative transition-colors" } else { "w-10 h-6 rounded-full bg-zinc-700 relative transition-colors" },
                            aria_label: "Toggle agent",
                            onclick: {
                                let id = agent.id.clone();
                                move |_| {
                                    let mut current = agents();
                                    if let Some(entry) = current.iter_mut().find(|a| a.id == id) {
                                        entry.active = !entry.active;
                                    }
                                    agents.set(current);
                                }
                            },
                            span {
                                class: if agent.active { "absolute top-1 left-5 w-4 h-4 rounded-full bg-white transition-all" } else { "absolute top-1 left-1 w-4 h-4 rounded-full bg-zinc-400 transition-all" },
                            }
                        }
                        div { class: "min-w-0 flex-1",
                            div { class: "font-medium text-white truncate", "{agent.name}" }
                            p { class: "text-xs text-zinc-500 truncate", "{agent.url}" }
                        }
                        button {
                            class: "p-2 rounded-lg text-zinc-500 hover:text-sky-400 hover:bg-zinc-800/60 transition-colors",
                            aria_label: "Test connection",
                            onclick: {
                                let agent = agent.clone();
                                let toast = toast.clone();
                                move |_| {
                                    let agent = agent.clone();
                                    let mut toast = toast.clone();
                                    spawn(async move {
                                        match VigiAgentClient::new(agent.clone()).ping().await {
                                            Ok(true) => toast.info(format!("{} is reachable", agent.name)),
                                            Ok(false) => toast.error(format!("{} responded with an error", agent.name)),
                                            Err(err) => toast.error(format!("{}: {err}", agent.name)),
                                        }
                                    });
                                }
                            },
                            Icon { name: "refresh".to_string(), class: "w-4 h-4".to_string() }
                        }
                        button {
                            class: "p-2 rounded-lg text-zinc-500 hover:text-red-400 hover:bg-zinc-800/60 transition-colors",
                            aria_label: "Remove agent",
                            onclick: {
                                let id = agent.id.clone();
                                move |_| {
                                    let mut current = agents();
                                    current.retain(|a| a.id != id);
                                    agents.set(current);
                                }
                            },
                            Icon { name: "trash".to_string(), class: "w-4 h-4".to_string() }
                        }
                    }
                }

                div { class: "space-y-2 pt-2 border-t border-zinc-800",
                    label { class: "text-xs uppercase tracking-wide text-zinc-500", "Add agent" }
                    div { class: "flex flex-col sm:flex-row gap-2",
                        input {
                            class: "flex-1 px-3 py-2 rounded-lg bg-zinc-900/50 border border-zinc-800 text-white placeholder:text-zinc-600 focus:outline-none focus:border-sky-500/50 focus:ring-2 focus:ring-sky-500/20",
                            placeholder: "Name (e.g. Garage)",
                            value: new_agent_name,
                            oninput: move |e| new_agent_name.set(e.value()),
                        }
                        input {
                            class: "flex-1 px-3 py-2 rounded-lg bg-zinc-900/50 border border-zinc-800 text-white placeholder:text-zinc-600 focus:outline-none focus:border-sky-500/50 focus:ring-2 focus:ring-sky-500/20",
                            placeholder: "http://host:5000",
                            value: new_agent_url,
                            oninput: move |e| new_agent_url.set(e.value()),
                        }
                        button {
                            class: "px-4 py-2 rounded-lg bg-sky-500 text-white hover:bg-sky-400 transition-colors flex items-center gap-2",
                            onclick: move |e| add_agent(e),
                            Icon { name: "plus".to_string(), class: "w-4 h-4".to_string() }
                            "Add"
                        }
                    }
                    if let Some(reason) = form_error() {
                        div { class: "p-3 rounded-lg bg-amber-500/10 border border-amber-500/40 text-amber-200 text-sm",
                            "{reason}"
                        }
                    }
                }
            }

            // Playback options
            section { class: "space-y-4",
                h2 { class: "text-sm font-semibold text-zinc-400 uppercase tracking-wider", "Playback" }

                SettingToggle {
                    label: "Download and share actions",
                    description: "Show the download/share row in the playback dialog.",
                    value: settings.show_save_actions,
                    onchange: move |value| {
                        let mut settings = viewer_settings();
                        settings.show_save_actions = value;
                        viewer_settings.set(settings);
                    },
                }
                SettingToggle {
                    label: "Autoplay",
                    description: "Start playback as soon as a recording opens.",
                    value: settings.autoplay,
                    onchange: move |value| {
                        let mut settings = viewer_settings();
                        settings.autoplay = value;
                        viewer_settings.set(settings);
                    },
                }
            }
        }
    }
}

#[component]
fn SettingToggle(
    label: String,
    description: String,
    value: bool,
    onchange: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "flex items-center justify-between gap-4 p-3 rounded-xl bg-zinc-900/50 border border-zinc-800",
            div { class: "min-w-0",
                div { class: "font-medium text-white", "{label}" }
                p { class: "text-xs text-zinc-500", "{description}" }
            }
            button {
                class: if value { "w-10 h-6 rounded-full bg-sky-500/80 relative transition-colors shrink-0" } else { "w-10 h-6 rounded-full bg-zinc-700 relative transition-colors shrink-0" },
                aria_label: "{label}",
                onclick: move |_| onchange.call(!value),
                span {
                    class: if value { "absolute top-1 left-5 w-4 h-4 rounded-full bg-white transition-all" } else { "absolute top-1 left-1 w-4 h-4 rounded-full bg-zinc-400 transition-all" },
                }
            }
        }
    }
}
