use yew::prelude::*;
use shared::StatusToggleFlow;

#[derive(Properties, PartialEq)]
pub struct StatusToggleModalProps {
    pub flow: StatusToggleFlow,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Confirmation dialog of the status toggle. Stays open after a failed commit
/// so the user can retry; cancelling is ignored while the request is in flight.
#[function_component(StatusToggleModal)]
pub fn status_toggle_modal(props: &StatusToggleModalProps) -> Html {
    let Some(target) = props.flow.target() else {
        return html! {};
    };
    let committing = props.flow.is_committing();

    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <div class="modal-content">
                    <h3 class="modal-title">{"Zmiana statusu wydatku"}</h3>
                    <p>{target.prompt()}</p>

                    {if let Some(error) = props.flow.error() {
                        html! { <div class="form-message error">{error}</div> }
                    } else {
                        html! {}
                    }}

                    <div class="modal-buttons">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            onclick={on_cancel_click}
                            disabled={committing}
                        >
                            {"Anuluj"}
                        </button>
                        <button
                            type="button"
                            class="btn btn-primary"
                            onclick={on_confirm_click}
                            disabled={committing}
                        >
                            {if committing {
                                "Zapisywanie...".to_string()
                            } else {
                                format!("{} wydatek", target.current_status.toggle_action_label())
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
