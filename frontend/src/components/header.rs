use yew::prelude::*;
use shared::BudgetOption;
use super::budget_selector::BudgetSelector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub budgets: Vec<BudgetOption>,
    pub selected_budget_id: Option<i64>,
    pub budgets_loading: bool,
    pub on_select_budget: Callback<i64>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let selected_name = props
        .selected_budget_id
        .and_then(|id| props.budgets.iter().find(|budget| budget.id == id))
        .map(|budget| budget.name.clone());

    html! {
        <header class="header">
            <div class="container">
                <h1>
                    {match selected_name {
                        Some(name) => format!("Planowane wydatki: {}", name),
                        None => "Planowane wydatki".to_string(),
                    }}
                </h1>
                <div class="header-right">
                    <BudgetSelector
                        budgets={props.budgets.clone()}
                        selected_budget_id={props.selected_budget_id}
                        loading={props.budgets_loading}
                        on_select={props.on_select_budget.clone()}
                    />
                </div>
            </div>
        </header>
    }
}
