use crate::api::AgentConfig;
use crate::components::views::{CamerasView, LiveView, RecordingsView, SettingsView};
use crate::components::{
    view_label, AppView, Icon, Navigation, PlaybackController, PlaybackModal, PlaybackModalState,
    Sidebar, StatusToast, ToastController,
};
use crate::db::{initialize_database, load_agents, load_settings, save_agents, save_settings,
    ViewerSettings};
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct SidebarOpenSignal(pub Signal<bool>);

#[component]
pub fn AppShell() -> Element {
    let mut agents = use_signal(Vec::<AgentConfig>::new);
    let mut viewer_settings = use_signal(ViewerSettings::default);
    let mut db_initialized = use_signal(|| false);
    let current_view = use_signal(|| AppView::Live);
    let nav_history = use_signal(std::collections::VecDeque::<AppView>::new);
    let navigation = Navigation::new(current_view.clone(), nav_history.clone());
    let sidebar_open = use_signal(|| false);
    let playback_state = use_signal(PlaybackModalState::default);
    let playback = PlaybackController::new(playback_state.clone());
    let toast_state = use_signal(|| None::<crate::components::Toast>);
    let toast_nonce = use_signal(|| 0u64);
    let toast = ToastController::new(toast_state.clone(), toast_nonce.clone());

    // Provide state via context
    use_context_provider(|| agents);
    use_context_provider(|| viewer_settings);
    use_context_provider(|| navigation.clone());
    use_context_provider(|| playback.clone());
    use_context_provider(|| toast.clone());
    use_context_provider(|| SidebarOpenSignal(sidebar_open));

    // Initialize the database and load saved state on mount
    use_effect(move || {
        spawn(async move {
            if let Err(_e) = initialize_database().await {
                #[cfg(not(target_arch = "wasm32"))]
                eprintln!("Failed to initialize database: {}", _e);
                return;
            }

            if let Ok(saved_agents) = load_agents().await {
                agents.set(saved_agents);
            }

            if let Ok(settings) = load_settings().await {
                viewer_settings.set(settings);
            }

            db_initialized.set(true);
        });
    });

    // Auto-save agents when they change
    use_effect(move || {
        let current_agents = agents();
        if db_initialized() {
            spawn(async move {
                let _ = save_agents(current_agents).await;
            });
        }
    });

    // Auto-save settings when they change
    use_effect(move || {
        let settings = viewer_settings();
        if db_initialized() {
            spawn(async move {
                let _ = save_settings(settings).await;
            });
        }
    });

    let view = navigation.current();
    let can_go_back = navigation.can_go_back();

    let page = match view {
        AppView::Live => rsx! {
            LiveView {}
        },
        AppView::Recordings => rsx! {
            RecordingsView {}
        },
        AppView::Cameras => rsx! {
            CamerasView {}
        },
        AppView::Settings => rsx! {
            SettingsView {}
        },
    };

    rsx! {
        div { class: "app-container flex min-h-screen text-white overflow-hidden",
            if sidebar_open() {
                div {
                    class: "fixed inset-0 bg-black/60 backdrop-blur-sm z-30 2xl:hidden",
                    onclick: {
                        let mut sidebar_open = sidebar_open.clone();
                        move |_| sidebar_open.set(false)
                    },
                }
            }

            // Sidebar
            Sidebar {}

            // Main content area
            div { class: "flex-1 flex flex-col overflow-hidden",
                header { class: "mobile-safe-top 2xl:hidden border-b border-zinc-800/60 bg-zinc-950/80 backdrop-blur-xl",
                    div { class: "flex items-center justify-between px-4 py-3",
                        if can_go_back {
                            button {
                                class: "p-2 rounded-lg text-zinc-300 hover:text-white hover:bg-zinc-800/60 transition-colors",
                                aria_label: "Go back",
                                onclick: {
                                    let navigation = navigation.clone();
                                    move |_| {
                                        let _ = navigation.go_back();
                                    }
                                },
                                Icon {
                                    name: "arrow-left".to_string(),
                                    class: "w-5 h-5".to_string(),
                                }
                            }
                        } else {
                            button {
                                class: "p-2 rounded-lg text-zinc-300 hover:text-white hover:bg-zinc-800/60 transition-colors",
                                aria_label: "Open menu",
                                onclick: {
                                    let mut sidebar_open = sidebar_open.clone();
                                    move |_| sidebar_open.set(true)
                                },
                                Icon { name: "menu".to_string(), class: "w-5 h-5".to_string() }
                            }
                        }
                        div { class: "flex flex-col items-center text-center",
                            span { class: "text-xs uppercase tracking-widest text-zinc-500", "VigiView" }
                            span { class: "text-sm font-semibold text-white", "{view_label(&view)}" }
                        }
                        button {
                            class: "p-2 rounded-lg text-zinc-300 hover:text-white hover:bg-zinc-800/60 transition-colors",
                            aria_label: "Open recordings",
                            onclick: {
                                let navigation = navigation.clone();
                                move |_| navigation.navigate_to(AppView::Recordings)
                            },
                            Icon { name: "film".to_string(), class: "w-5 h-5".to_string() }
                        }
                    }
                }

                // Main scrollable content
                main { class: "flex-1 overflow-y-auto main-scroll",
                    div { class: "page-shell p-6", {page} }
                }
            }
        }

        PlaybackModal { controller: playback.clone() }

        StatusToast { controller: toast.clone() }
    }
}
