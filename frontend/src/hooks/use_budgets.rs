use shared::{resolve_selected_budget, BudgetOption};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_notices::NoticeActions;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct BudgetsState {
    pub budgets: Vec<BudgetOption>,
    pub selected_budget_id: Option<i64>,
    pub loading: bool,
}

pub struct UseBudgetsResult {
    pub state: BudgetsState,
    pub actions: UseBudgetsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseBudgetsActions {
    pub refresh_budgets: Callback<()>,
    pub select_budget: Callback<i64>,
}

#[hook]
pub fn use_budgets(api_client: &ApiClient, notices: &NoticeActions) -> UseBudgetsResult {
    let budgets = use_state(Vec::<BudgetOption>::new);
    let selected_budget_id = use_state(|| api_client.session().selected_budget_id());
    let loading = use_state(|| false);

    let refresh_budgets = {
        let api_client = api_client.clone();
        let notices = notices.clone();
        let budgets = budgets.clone();
        let selected_budget_id = selected_budget_id.clone();
        let loading = loading.clone();

        use_callback((), move |_: (), _| {
            let api_client = api_client.clone();
            let notices = notices.clone();
            let budgets = budgets.clone();
            let selected_budget_id = selected_budget_id.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.list_budgets().await {
                    Ok(list) => {
                        let session = api_client.session();
                        let selected = resolve_selected_budget(session.selected_budget_id(), &list);
                        if let Some(id) = selected {
                            session.select_budget(id);
                        }
                        Logger::info_with_component(
                            "use-budgets",
                            &format!("Loaded {} budget(s), selected {:?}", list.len(), selected),
                        );
                        budgets.set(list);
                        selected_budget_id.set(selected);
                    }
                    Err(e) => {
                        notices.report.emit((e, "Nie udało się pobrać listy budżetów.".to_string()));
                    }
                }

                loading.set(false);
            });
        })
    };

    // Persist first so a reload keeps the choice, then let dependent hooks refetch
    let select_budget = {
        let api_client = api_client.clone();
        let selected_budget_id = selected_budget_id.clone();

        use_callback((), move |budget_id: i64, _| {
            api_client.session().select_budget(budget_id);
            selected_budget_id.set(Some(budget_id));
        })
    };

    use_effect_with((), {
        let refresh_budgets = refresh_budgets.clone();
        move |_| {
            refresh_budgets.emit(());
            || ()
        }
    });

    let state = BudgetsState {
        budgets: (*budgets).clone(),
        selected_budget_id: *selected_budget_id,
        loading: *loading,
    };

    let actions = UseBudgetsActions {
        refresh_budgets,
        select_budget,
    };

    UseBudgetsResult { state, actions }
}
