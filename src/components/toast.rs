// Transient status messages (share/copy confirmations and failures).
use dioxus::prelude::*;

use crate::components::Icon;

const TOAST_DISMISS_MS: u32 = 3500;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    nonce: u64,
}

#[derive(Clone, PartialEq)]
pub struct ToastController {
    state: Signal<Option<Toast>>,
    next_nonce: Signal<u64>,
}

impl ToastController {
    pub fn new(state: Signal<Option<Toast>>, next_nonce: Signal<u64>) -> Self {
        Self { state, next_nonce }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Info);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message.into(), ToastKind::Error);
    }

    fn show(&mut self, message: String, kind: ToastKind) {
        let nonce = (self.next_nonce)() + 1;
        self.next_nonce.set(nonce);
        self.state.set(Some(Toast {
            message,
            kind,
            nonce,
        }));
    }

    pub fn current(&self) -> Option<Toast> {
        (self.state)()
    }

    fn dismiss_if_current(&mut self, nonce: u64) {
        if (self.state)().map(|toast| toast.nonce) == Some(nonce) {
            self.state.set(None);
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn dismiss_delay() {
    gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn dismiss_delay() {
    tokio::time::sleep(std::time::Duration::from_millis(TOAST_DISMISS_MS as u64)).await;
}

#[component]
pub fn StatusToast(controller: ToastController) -> Element {
    // Newer toasts bump the nonce, so a stale timer never hides them.
    {
        let controller = controller.clone();
        use_effect(move || {
            let Some(toast) = controller.current() else {
                return;
            };
            let nonce = toast.nonce;
            let mut controller = controller.clone();
            spawn(async move {
                dismiss_delay().await;
                controller.dismiss_if_current(nonce);
            });
        });
    }

    let Some(toast) = controller.current() else {
        return rsx! {};
    };

    let (container_class, icon_name) = match toast.kind {
        ToastKind::Info => (
            "fixed bottom-6 left-1/2 -translate-x-1/2 z-50 flex items-center gap-2 px-4 py-2 rounded-xl bg-zinc-900/95 border border-emerald-500/40 text-emerald-200 text-sm shadow-lg",
            "check",
        ),
        ToastKind::Error => (
            "fixed bottom-6 left-1/2 -translate-x-1/2 z-50 flex items-center gap-2 px-4 py-2 rounded-xl bg-zinc-900/95 border border-red-500/40 text-red-200 text-sm shadow-lg",
            "alert",
        ),
    };

    rsx! {
        div { class: "{container_class}", role: "status",
            Icon { name: icon_name.to_string(), class: "w-4 h-4".to_string() }
            span { "{toast.message}" }
        }
    }
}
