use shared::{GuardedList, TeamMemberRow};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_notices::NoticeActions;
use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct TeamMembersState {
    pub members: Vec<TeamMemberRow>,
    pub loading: bool,
}

#[hook]
pub fn use_team_members(
    api_client: &ApiClient,
    budget_id: Option<i64>,
    notices: &NoticeActions,
) -> TeamMembersState {
    let members = use_mut_ref(GuardedList::<TeamMemberRow>::new);
    let update = use_force_update();

    {
        let api_client = api_client.clone();
        let notices = notices.clone();
        let members = members.clone();

        use_effect_with(budget_id, move |budget_id| {
            match *budget_id {
                Some(budget_id) => {
                    let ticket = members.borrow_mut().begin(budget_id);
                    update.force_update();

                    spawn_local(async move {
                        let result = api_client.get_team_members(budget_id).await;
                        let Some(outcome) = members.borrow_mut().finish(&ticket, result) else {
                            return;
                        };
                        update.force_update();
                        if let Err(e) = outcome {
                            notices
                                .report
                                .emit((e, "Nie udało się pobrać członków zespołu.".to_string()));
                        }
                    });
                }
                None => {
                    members.borrow_mut().clear();
                    update.force_update();
                }
            }
            || ()
        });
    }

    let members = members.borrow();
    TeamMembersState {
        members: members.items().to_vec(),
        loading: members.is_loading(),
    }
}
