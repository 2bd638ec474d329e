use yew::prelude::*;
use shared::{ExpenseKind, NotificationRow};

#[derive(Properties, PartialEq)]
pub struct NotificationsPanelProps {
    pub notifications: Vec<NotificationRow>,
    pub loading: bool,
}

#[function_component(NotificationsPanel)]
pub fn notifications_panel(props: &NotificationsPanelProps) -> Html {
    html! {
        <section class="notifications-section">
            <h2>{"Nadchodzące płatności"}</h2>

            {if props.loading && props.notifications.is_empty() {
                html! { <div class="loading">{"Ładowanie powiadomień..."}</div> }
            } else if props.notifications.is_empty() {
                html! { <p class="empty">{"Brak nadchodzących płatności."}</p> }
            } else {
                html! {
                    <ul class="notification-list">
                        {for props.notifications.iter().map(|notification| {
                            let class = match notification.kind {
                                ExpenseKind::Recurring => "notification recurring",
                                ExpenseKind::Planned => "notification planned",
                            };
                            html! {
                                <li key={notification.id.clone()} class={class}>
                                    {notification.message()}
                                </li>
                            }
                        })}
                    </ul>
                }
            }}
        </section>
    }
}
