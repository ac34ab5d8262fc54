use crate::api::AgentConfig;
use crate::components::{AppView, Icon, Navigation, SidebarOpenSignal};
use dioxus::prelude::*;

#[component]
pub fn Sidebar() -> Element {
    let agents = use_context::<Signal<Vec<AgentConfig>>>();
    let navigation = use_context::<Navigation>();
    let sidebar_open = use_context::<SidebarOpenSignal>().0;
    let view = navigation.current();

    let agent_count = agents().len();
    let active_agents = agents().iter().filter(|a| a.active).count();

    let go_to = {
        let navigation = navigation.clone();
        let sidebar_open = sidebar_open.clone();
        move |target: AppView| {
            let navigation = navigation.clone();
            let mut sidebar_open = sidebar_open.clone();
            move |_| {
                navigation.navigate_to(target);
                sidebar_open.set(false);
            }
        }
    };

    rsx! {
        aside {
            class: if sidebar_open() { "sidebar sidebar-open w-64 bg-zinc-950/50 border-r border-zinc-800/50 flex flex-col h-full backdrop-blur-xl" } else { "sidebar w-64 bg-zinc-950/50 border-r border-zinc-800/50 flex flex-col h-full backdrop-blur-xl" },
            // Logo
            div { class: "p-6 border-b border-zinc-800/50",
                div { class: "flex items-center gap-3",
                    div { class: "w-10 h-10 rounded-xl bg-gradient-to-br from-sky-500 to-indigo-600 flex items-center justify-center text-white font-bold text-lg shadow-lg shadow-sky-500/20",
                        "V"
                    }
                    div {
                        h1 { class: "text-lg font-bold text-white", "VigiView" }
                        p { class: "text-xs text-zinc-500", "{active_agents}/{agent_count} agents" }
                    }
                }
            }

            // Navigation
            nav { class: "flex-1 overflow-y-auto p-4 space-y-1",
                div { class: "mb-6",
                    p { class: "text-xs font-semibold text-zinc-500 uppercase tracking-wider mb-3 px-3",
                        "Surveillance"
                    }
                    NavItem {
                        icon: "video",
                        label: "Live",
                        active: matches!(view, AppView::Live),
                        onclick: go_to(AppView::Live),
                    }
                    NavItem {
                        icon: "film",
                        label: "Recordings",
                        active: matches!(view, AppView::Recordings),
                        onclick: go_to(AppView::Recordings),
                    }
                    NavItem {
                        icon: "camera",
                        label: "Cameras",
                        active: matches!(view, AppView::Cameras),
                        onclick: go_to(AppView::Cameras),
                    }
                }
            }

            // Settings at bottom
            div { class: "p-4 border-t border-zinc-800/50",
                NavItem {
                    icon: "settings",
                    label: "Settings",
                    active: matches!(view, AppView::Settings),
                    onclick: go_to(AppView::Settings),
                }
            }
        }
    }
}

#[component]
fn NavItem(icon: String, label: String, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let base_class = "flex items-center gap-3 px-3 py-2.5 rounded-xl text-sm font-medium transition-all duration-200 cursor-pointer";
    let active_class = if active {
        "bg-gradient-to-r from-sky-500/20 to-indigo-500/10 text-sky-400 shadow-sm"
    } else {
        "text-zinc-400 hover:text-white hover:bg-zinc-800/50"
    };

    rsx! {
        button {
            class: "{base_class} {active_class} w-full",
            onclick: move |e| onclick.call(e),
            Icon { name: icon.clone(), class: "w-5 h-5".to_string() }
            span { "{label}" }
        }
    }
}
