use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use shared::ApiError;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::logging::Logger;
use crate::services::session::{expire_session, BrowserSession};

/// How long a notice stays on screen
pub const NOTICE_TIMEOUT_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Default)]
struct NoticeQueue {
    next_id: u32,
    notices: Vec<Notice>,
}

impl NoticeQueue {
    fn push(&mut self, kind: NoticeKind, text: String) -> u32 {
        self.next_id += 1;
        self.notices.push(Notice { id: self.next_id, kind, text });
        self.next_id
    }

    fn dismiss(&mut self, id: u32) {
        self.notices.retain(|notice| notice.id != id);
    }
}

pub struct UseNoticesResult {
    pub notices: Vec<Notice>,
    pub actions: NoticeActions,
}

#[derive(Clone, PartialEq)]
pub struct NoticeActions {
    pub success: Callback<String>,
    pub error: Callback<String>,
    pub dismiss: Callback<u32>,
    /// Surface a failed request: 401 ends the session, anything else becomes
    /// an error notice (the `String` is the fallback text).
    pub report: Callback<(ApiError, String)>,
}

#[hook]
pub fn use_notices(session: &BrowserSession) -> UseNoticesResult {
    let queue = use_mut_ref(NoticeQueue::default);
    let update = use_force_update();

    let show = {
        let queue = queue.clone();
        let update = update.clone();
        use_callback((), move |(kind, text): (NoticeKind, String), _| {
            let id = queue.borrow_mut().push(kind, text);
            update.force_update();

            let queue: Rc<RefCell<NoticeQueue>> = queue.clone();
            let update = update.clone();
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                queue.borrow_mut().dismiss(id);
                update.force_update();
            });
        })
    };

    let success = {
        let show = show.clone();
        use_callback((), move |text: String, _| show.emit((NoticeKind::Success, text)))
    };

    let error = {
        let show = show.clone();
        use_callback((), move |text: String, _| show.emit((NoticeKind::Error, text)))
    };

    let dismiss = {
        let queue = queue.clone();
        let update = update.clone();
        use_callback((), move |id: u32, _| {
            queue.borrow_mut().dismiss(id);
            update.force_update();
        })
    };

    let report = {
        let session = session.clone();
        let error = error.clone();
        use_callback((), move |(err, fallback): (ApiError, String), _| {
            if err.is_unauthorized() {
                expire_session(&session);
                return;
            }
            Logger::warn_with_component("notices", &format!("Request failed: {}", err));
            error.emit(err.user_message(&fallback));
        })
    };

    let notices = queue.borrow().notices.clone();

    UseNoticesResult {
        notices,
        actions: NoticeActions {
            success,
            error,
            dismiss,
            report,
        },
    }
}
