use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// 1-based
    pub page: usize,
    pub total_pages: usize,
    pub on_page: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return html! {};
    }

    let go_to = |page: usize| {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(page))
    };

    html! {
        <nav class="pagination">
            <button
                type="button"
                class="page-btn"
                disabled={props.page <= 1}
                onclick={go_to(props.page.saturating_sub(1))}
            >
                {"‹"}
            </button>
            {for (1..=props.total_pages).map(|number| {
                html! {
                    <button
                        type="button"
                        class={classes!("page-btn", (number == props.page).then_some("active"))}
                        onclick={go_to(number)}
                    >
                        {number}
                    </button>
                }
            })}
            <button
                type="button"
                class="page-btn"
                disabled={props.page >= props.total_pages}
                onclick={go_to(props.page + 1)}
            >
                {"›"}
            </button>
        </nav>
    }
}
