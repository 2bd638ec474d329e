use yew::prelude::*;
use web_sys::HtmlSelectElement;
use shared::BudgetOption;

#[derive(Properties, PartialEq)]
pub struct BudgetSelectorProps {
    pub budgets: Vec<BudgetOption>,
    pub selected_budget_id: Option<i64>,
    pub loading: bool,
    pub on_select: Callback<i64>,
}

#[function_component(BudgetSelector)]
pub fn budget_selector(props: &BudgetSelectorProps) -> Html {
    let on_change = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(id) = select.value().parse::<i64>() {
                on_select.emit(id);
            }
        })
    };

    if props.loading && props.budgets.is_empty() {
        return html! { <div class="budget-selector loading">{"Ładowanie budżetów..."}</div> };
    }

    if props.budgets.is_empty() {
        return html! { <div class="budget-selector empty">{"Brak budżetów"}</div> };
    }

    html! {
        <div class="budget-selector">
            <label for="budget-select">{"Budżet"}</label>
            <select id="budget-select" onchange={on_change}>
                {for props.budgets.iter().map(|budget| {
                    html! {
                        <option
                            value={budget.id.to_string()}
                            selected={props.selected_budget_id == Some(budget.id)}
                        >
                            {&budget.name}
                        </option>
                    }
                })}
            </select>
        </div>
    }
}
