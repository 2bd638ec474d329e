use yew::prelude::*;
use super::{ExpenseTable, Pagination, StatusToggleModal};
use crate::hooks::use_planned_expenses::{PlannedExpensesState, UsePlannedExpensesActions};

#[derive(Properties, PartialEq)]
pub struct PlannedExpensesSectionProps {
    pub state: PlannedExpensesState,
    pub actions: UsePlannedExpensesActions,
}

#[function_component(PlannedExpensesSection)]
pub fn planned_expenses_section(props: &PlannedExpensesSectionProps) -> Html {
    let state = &props.state;
    let actions = &props.actions;

    let on_refresh = {
        let refresh = actions.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    html! {
        <section class="expenses-section">
            <div class="section-header">
                <h2>{format!("Planowane i cykliczne wydatki ({})", state.row_count)}</h2>
                <button type="button" class="btn btn-secondary" onclick={on_refresh} disabled={state.loading}>
                    {"Odśwież"}
                </button>
            </div>

            <ExpenseTable
                rows={state.visible_rows.clone()}
                view={state.view}
                loading={state.loading}
                on_sort={actions.toggle_sort.clone()}
                on_toggle_status={actions.request_toggle.clone()}
            />

            <Pagination
                page={state.view.page}
                total_pages={state.total_pages}
                on_page={actions.set_page.clone()}
            />

            <StatusToggleModal
                flow={state.toggle.clone()}
                on_confirm={actions.confirm_toggle.clone()}
                on_cancel={actions.cancel_toggle.clone()}
            />
        </section>
    }
}
