use shared::{GuardedList, NotificationRow};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_notices::NoticeActions;
use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct NotificationsState {
    pub notifications: Vec<NotificationRow>,
    pub loading: bool,
}

/// Upcoming-payment reminders for the selected budget. Runs alongside the row
/// fetch; each has its own guard so neither can overwrite newer data.
#[hook]
pub fn use_notifications(
    api_client: &ApiClient,
    budget_id: Option<i64>,
    notices: &NoticeActions,
) -> NotificationsState {
    let notifications = use_mut_ref(GuardedList::<NotificationRow>::new);
    let update = use_force_update();

    {
        let api_client = api_client.clone();
        let notices = notices.clone();
        let notifications = notifications.clone();

        use_effect_with(budget_id, move |budget_id| {
            match *budget_id {
                Some(budget_id) => {
                    let ticket = notifications.borrow_mut().begin(budget_id);
                    update.force_update();

                    spawn_local(async move {
                        let result = api_client.get_notifications(budget_id).await;
                        let Some(outcome) = notifications.borrow_mut().finish(&ticket, result) else {
                            return;
                        };
                        update.force_update();
                        if let Err(e) = outcome {
                            notices
                                .report
                                .emit((e, "Nie udało się pobrać powiadomień.".to_string()));
                        }
                    });
                }
                None => {
                    // Also ends the loading state of a fetch that is now stale
                    notifications.borrow_mut().clear();
                    update.force_update();
                }
            }
            || ()
        });
    }

    let notifications = notifications.borrow();
    NotificationsState {
        notifications: notifications.items().to_vec(),
        loading: notifications.is_loading(),
    }
}
