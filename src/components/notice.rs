//! Notices
//!
//! Dismissable success/error banners and the browser's native dialogs.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A banner's text and tone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// Banner bound to a notice signal. Success notices clear themselves.
#[component]
pub fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    Effect::new(move |_| {
        let Some(current) = notice.get() else { return };
        if current.kind != NoticeKind::Success {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            // A newer notice may have replaced this one meanwhile
            if notice.get_untracked().as_ref() == Some(&current) {
                notice.set(None);
            }
        });
    });

    move || {
        notice.get().map(|n| {
            let class = match n.kind {
                NoticeKind::Success => "notice success",
                NoticeKind::Error => "notice error",
            };
            view! {
                <div class=class role="alert">
                    <span>{n.text}</span>
                    <button class="notice-close" on:click=move |_| notice.set(None)>"×"</button>
                </div>
            }
        })
    }
}

/// Native `alert()`
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Native `confirm()`; false when the dialog cannot be shown
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
