use shared::{ExpensePage, PlannedExpenseRow, SortKey, StatusToggleFlow, TableView, ToggleNotice};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::use_notices::NoticeActions;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::session::redirect_to_login;

const FETCH_FAILED_MESSAGE: &str = "Nie udało się pobrać planowanych wydatków.";

/// Render snapshot of the planned-expenses page.
#[derive(Clone, PartialEq)]
pub struct PlannedExpensesState {
    /// Current page of the sorted rows, with `lp` numbers
    pub visible_rows: Vec<(usize, PlannedExpenseRow)>,
    pub row_count: usize,
    pub total_pages: usize,
    pub view: TableView,
    pub toggle: StatusToggleFlow,
    pub loading: bool,
}

pub struct UsePlannedExpensesResult {
    pub state: PlannedExpensesState,
    pub actions: UsePlannedExpensesActions,
}

#[derive(Clone, PartialEq)]
pub struct UsePlannedExpensesActions {
    pub refresh: Callback<()>,
    pub toggle_sort: Callback<SortKey>,
    pub set_page: Callback<usize>,
    pub request_toggle: Callback<i64>,
    pub confirm_toggle: Callback<()>,
    pub cancel_toggle: Callback<()>,
}

#[hook]
pub fn use_planned_expenses(
    api_client: &ApiClient,
    budget_id: Option<i64>,
    notices: &NoticeActions,
) -> UsePlannedExpensesResult {
    let page = use_mut_ref(ExpensePage::new);
    let update = use_force_update();

    let refresh = {
        let api_client = api_client.clone();
        let notices = notices.clone();
        let page = page.clone();
        let update = update.clone();

        use_callback(budget_id, move |_: (), budget_id: &Option<i64>| {
            let Some(budget_id) = *budget_id else {
                return;
            };
            let ticket = page.borrow_mut().begin_fetch(budget_id);
            update.force_update();

            let api_client = api_client.clone();
            let notices = notices.clone();
            let page = page.clone();
            let update = update.clone();

            spawn_local(async move {
                let result = api_client.search_planned_expenses(budget_id).await;
                let outcome = page.borrow_mut().finish_fetch(&ticket, result);
                match outcome {
                    Some(Ok(())) => update.force_update(),
                    Some(Err(e)) => {
                        update.force_update();
                        notices.report.emit((e, FETCH_FAILED_MESSAGE.to_string()));
                    }
                    None => Logger::debug_with_component(
                        "use-planned-expenses",
                        &format!("Ignored stale rows for budget {}", budget_id),
                    ),
                }
            });
        })
    };

    let toggle_sort = {
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |key: SortKey, _| {
            page.borrow_mut().toggle_sort(key);
            update.force_update();
        })
    };

    let set_page = {
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |number: usize, _| {
            page.borrow_mut().set_page(number);
            update.force_update();
        })
    };

    let request_toggle = {
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |id: i64, _| {
            if let Err(e) = page.borrow_mut().request_toggle(id) {
                Logger::debug_with_component("use-planned-expenses", &format!("Toggle not opened: {}", e));
                return;
            }
            update.force_update();
        })
    };

    let confirm_toggle = {
        let api_client = api_client.clone();
        let notices = notices.clone();
        let page = page.clone();
        let update = update.clone();

        use_callback((), move |_: (), _| {
            // Rejected while a commit is in flight, so at most one request per dialog
            let target = match page.borrow_mut().confirm_toggle() {
                Ok(target) => target,
                Err(e) => {
                    Logger::debug_with_component("use-planned-expenses", &format!("Confirm ignored: {}", e));
                    return;
                }
            };
            update.force_update();

            let api_client = api_client.clone();
            let notices = notices.clone();
            let page = page.clone();
            let update = update.clone();

            spawn_local(async move {
                let result = api_client.toggle_expense_status(target.id).await;
                let notice = page.borrow_mut().settle_toggle(result, api_client.session());
                update.force_update();

                match notice {
                    Ok(ToggleNotice::Success(message)) => notices.success.emit(message),
                    Ok(ToggleNotice::Error(message)) => notices.error.emit(message),
                    Ok(ToggleNotice::SessionExpired) => redirect_to_login(),
                    Err(e) => Logger::error_with_component(
                        "use-planned-expenses",
                        &format!("Toggle for expense {} settled out of order: {}", target.id, e),
                    ),
                }
            });
        })
    };

    let cancel_toggle = {
        let page = page.clone();
        let update = update.clone();
        use_callback((), move |_: (), _| {
            if page.borrow_mut().cancel_toggle() {
                update.force_update();
            }
        })
    };

    use_effect_with(budget_id, {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = {
        let page = page.borrow();
        PlannedExpensesState {
            visible_rows: page.visible(),
            row_count: page.rows().len(),
            total_pages: page.total_pages(),
            view: page.view(),
            toggle: page.flow().clone(),
            loading: page.is_loading(),
        }
    };

    let actions = UsePlannedExpensesActions {
        refresh,
        toggle_sort,
        set_page,
        request_toggle,
        confirm_toggle,
        cancel_toggle,
    };

    UsePlannedExpensesResult { state, actions }
}
