use yew::prelude::*;
use crate::hooks::use_notices::{Notice, NoticeKind};

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notices: Vec<Notice>,
    pub on_dismiss: Callback<u32>,
}

/// Transient success/error messages, newest last.
#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    if props.notices.is_empty() {
        return html! {};
    }

    html! {
        <div class="notice-stack">
            {for props.notices.iter().map(|notice| {
                let class = match notice.kind {
                    NoticeKind::Success => "form-message success",
                    NoticeKind::Error => "form-message error",
                };
                let on_dismiss = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = notice.id;
                    Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
                };
                html! {
                    <div key={notice.id} class={class} role="status">
                        <span>{&notice.text}</span>
                        <button type="button" class="notice-close" onclick={on_dismiss}>{"×"}</button>
                    </div>
                }
            })}
        </div>
    }
}
