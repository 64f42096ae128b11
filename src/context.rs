//! Application Context
//!
//! Shared state provided via Leptos Context API: the session, the REST
//! configuration, and the notice banner.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::config::{AppConfig, NOTICE_TIMEOUT_MS};
use crate::session::{BrowserTokenStore, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Banner message; `id` lets a timer dismiss only the notice it was started for
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    session: RwSignal<Session<BrowserTokenStore>>,
    config: StoredValue<AppConfig>,
    /// Current banner - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Current banner - write
    set_notice: WriteSignal<Option<Notice>>,
    notice_seq: StoredValue<u64>,
}

impl AppContext {
    pub fn new(config: AppConfig, session: Session<BrowserTokenStore>) -> Self {
        let (notice, set_notice) = signal(None);
        Self {
            session: RwSignal::new(session),
            config: StoredValue::new(config),
            notice,
            set_notice,
            notice_seq: StoredValue::new(0),
        }
    }

    /// Reactive: re-runs dependents on sign-in/sign-out
    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    pub fn sign_in(&self, token: String) {
        let persisted = self.session.try_update(|s| s.sign_in(token).is_ok());
        if persisted == Some(false) {
            self.notify_error("Signed in, but the session will end when this page is closed.");
        }
    }

    pub fn sign_out(&self) {
        self.session.update(|s| {
            if let Err(e) = s.sign_out() {
                log::warn!("session: token not removed: {}", e);
            }
        });
    }

    /// REST wrapper carrying the current token
    pub fn api(&self) -> ApiClient {
        let token = self
            .session
            .with_untracked(|s| s.token().map(str::to_string));
        let base_url = self.config.with_value(|c| c.api_base_url.clone());
        ApiClient::new(base_url, token)
    }

    pub fn notify_success(&self, text: impl Into<String>) {
        let id = self.show(NoticeKind::Success, text.into());
        let set_notice = self.set_notice;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            set_notice.update(|current| {
                if current.as_ref().is_some_and(|n| n.id == id) {
                    *current = None;
                }
            });
        });
    }

    /// Errors stay until dismissed or replaced
    pub fn notify_error(&self, text: impl Into<String>) {
        self.show(NoticeKind::Error, text.into());
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }

    fn show(&self, kind: NoticeKind, text: String) -> u64 {
        self.notice_seq.update_value(|seq| *seq += 1);
        let id = self.notice_seq.get_value();
        self.set_notice.set(Some(Notice { id, kind, text }));
        id
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
