//! Application Context
//!
//! Shared signals provided via Leptos Context API: reload trigger,
//! transient notices and the service configuration.

use bed_lifecycle::{ApiConfig, BedGateway, HttpBedService};
use leptos::prelude::*;

/// How long a notice stays on screen
#[cfg(target_arch = "wasm32")]
const NOTICE_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "toast success",
            NoticeKind::Error => "toast error",
        }
    }
}

/// A transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped to re-fetch all beds - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped to re-fetch all beds - write
    set_reload_trigger: WriteSignal<u32>,
    /// Visible notices, oldest first
    pub notices: ReadSignal<Vec<Notice>>,
    set_notices: WriteSignal<Vec<Notice>>,
    next_notice_id: StoredValue<u32>,
    api: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), api: ApiConfig) -> Self {
        let (notices, set_notices) = signal(Vec::<Notice>::new());
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            notices,
            set_notices,
            next_notice_id: StoredValue::new(0),
            api: StoredValue::new(api),
        }
    }

    /// Trigger a reload of the bed list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Gateway bound to the configured bed service
    pub fn gateway(&self) -> BedGateway<HttpBedService> {
        BedGateway::new(HttpBedService::new(self.api.get_value()))
    }

    /// Show a notice and drop it again after a few seconds
    pub fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        let id = self.next_notice_id.get_value();
        self.next_notice_id.set_value(id.wrapping_add(1));
        let message = message.into();
        if kind == NoticeKind::Error {
            log::warn!("notice: {}", message);
        }
        self.set_notices.update(|notices| notices.push(Notice { id, kind, message }));
        self.schedule_dismiss(id);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u32) {
        use gloo_timers::future::TimeoutFuture;

        let ctx = *self;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            ctx.dismiss(id);
        });
    }

    // Browser timers only; off wasm32 notices stay until dismissed.
    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u32) {}

    pub fn dismiss(&self, id: u32) {
        self.set_notices.update(|notices| notices.retain(|notice| notice.id != id));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
