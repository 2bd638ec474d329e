use yew::prelude::*;
use shared::{ExpenseKind, ExpenseStatus, PlannedExpenseRow, SortKey, TableView};
use shared::format::format_date;

#[derive(Properties, PartialEq)]
pub struct ExpenseTableProps {
    pub rows: Vec<(usize, PlannedExpenseRow)>,
    pub view: TableView,
    pub loading: bool,
    pub on_sort: Callback<SortKey>,
    pub on_toggle_status: Callback<i64>,
}

#[function_component(ExpenseTable)]
pub fn expense_table(props: &ExpenseTableProps) -> Html {
    let header_cell = |key: SortKey| {
        if !key.is_sortable() {
            return html! { <th>{key.header()}</th> };
        }
        let on_click = {
            let on_sort = props.on_sort.clone();
            Callback::from(move |_: MouseEvent| on_sort.emit(key))
        };
        html! {
            <th class="sortable" onclick={on_click}>
                {key.header()}
                {if let Some(indicator) = props.view.indicator_for(key) {
                    html! { <span class="sort-indicator">{indicator}</span> }
                } else {
                    html! {}
                }}
            </th>
        }
    };

    if props.loading && props.rows.is_empty() {
        return html! { <div class="loading">{"Ładowanie wydatków..."}</div> };
    }

    html! {
        <div class="table-container">
            <table class="expenses-table">
                <thead>
                    <tr>
                        {for SortKey::ALL.into_iter().map(header_cell)}
                        <th>{"Status"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {if props.rows.is_empty() {
                        html! {
                            <tr>
                                <td class="empty" colspan="10">{"Brak planowanych wydatków."}</td>
                            </tr>
                        }
                    } else {
                        html! {
                            {for props.rows.iter().map(|(number, row)| {
                                let kind_class = match row.kind {
                                    ExpenseKind::Recurring => "kind recurring",
                                    ExpenseKind::Planned => "kind planned",
                                };
                                let status_class = match row.status {
                                    ExpenseStatus::Active => "status active",
                                    ExpenseStatus::Paused => "status paused",
                                };
                                let on_toggle = {
                                    let on_toggle_status = props.on_toggle_status.clone();
                                    let id = row.id;
                                    Callback::from(move |_: MouseEvent| on_toggle_status.emit(id))
                                };

                                html! {
                                    <tr key={row.id}>
                                        <td class="lp">{number}</td>
                                        <td class={kind_class}>{row.kind.label()}</td>
                                        <td>{&row.category_name}</td>
                                        <td class="description">{&row.description}</td>
                                        <td class="amount negative">{row.display_amount()}</td>
                                        <td class="date">{format_date(&row.created_at)}</td>
                                        <td class="date">{format_date(&row.execution_date)}</td>
                                        <td>{row.display_frequency()}</td>
                                        <td class={status_class}>{row.status.label()}</td>
                                        <td>
                                            <button type="button" class="btn btn-secondary btn-small" onclick={on_toggle}>
                                                {row.status.toggle_action_label()}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
