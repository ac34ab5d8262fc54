// Render the playback dialog: header, video surface, metadata, actions.
{
    rsx! {
        div {
            class: "fixed inset-0 z-40 bg-black/70 backdrop-blur-sm",
            onclick: {
                let mut controller = controller.clone();
                move |_| controller.close()
            },
        }
        div { class: "fixed inset-0 z-50 flex items-center justify-center p-4 pointer-events-none",
            div {
                class: "playback-modal pointer-events-auto w-full max-w-3xl rounded-2xl bg-zinc-950/95 border border-zinc-800 shadow-2xl overflow-hidden",
                role: "dialog",
                aria_label: "{title}",
                header { class: "flex items-center justify-between gap-4 px-5 py-4 border-b border-zinc-800/60",
                    h2 { class: "text-base font-semibold text-white truncate", "{title}" }
                    button {
                        class: "p-2 rounded-lg text-zinc-400 hover:text-white hover:bg-zinc-800/60 transition-colors",
                        aria_label: "Close playback",
                        onclick: {
                            let mut controller = controller.clone();
                            move |_| controller.close()
                        },
                        Icon { name: "x".to_string(), class: "w-5 h-5".to_string() }
                    }
                }

                video {
                    id: PLAYBACK_VIDEO_ID,
                    class: "w-full aspect-video bg-black",
                    src: "{media_url}",
                    controls: true,
                }

                div { class: "px-5 py-4 space-y-3",
                    div { class: "flex flex-wrap items-center gap-x-4 gap-y-1 text-xs text-zinc-500",
                        span { "{agent_label}" }
                        if let Some(duration) = duration_label {
                            span { "{duration}" }
                        }
                        if let Some(resolution) = resolution_label {
                            span { "{resolution}" }
                        }
                        if let Some(size) = size_label {
                            span { "{size}" }
                        }
                    }

                    if !tags.is_empty() {
                        div { class: "flex flex-wrap items-center gap-2",
                            Icon { name: "tag".to_string(), class: "w-4 h-4 text-zinc-500".to_string() }
                            for tag in tags {
                                span { class: "badge px-2 py-0.5 rounded-full bg-sky-500/15 border border-sky-500/40 text-sky-300 text-xs",
                                    "{tag}"
                                }
                            }
                        }
                    }

                    if show_save_actions {
                        div { class: "flex items-center gap-3 pt-2 border-t border-zinc-800/60",
                            a {
                                class: "flex items-center gap-2 px-3 py-2 rounded-lg bg-zinc-900/70 border border-zinc-800 text-sm text-zinc-300 hover:text-white hover:border-sky-500/60 transition-colors",
                                href: "{download_url}",
                                Icon { name: "download".to_string(), class: "w-4 h-4".to_string() }
                                "Download"
                            }
                            a {
                                class: "flex items-center gap-2 px-3 py-2 rounded-lg bg-zinc-900/70 border border-zinc-800 text-sm text-zinc-300 hover:text-white hover:border-sky-500/60 transition-colors",
                                href: "{share_url}",
                                onclick: on_share,
                                Icon { name: "share".to_string(), class: "w-4 h-4".to_string() }
                                "Share"
                            }
                        }
                    }
                }
            }
        }
    }
}
