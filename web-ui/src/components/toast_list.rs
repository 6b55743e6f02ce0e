// Toast notifications

use crate::messages::toast_class;
use crate::model::Toast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastListProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<uuid::Uuid>,
}

#[function_component(ToastList)]
pub fn toast_list(props: &ToastListProps) -> Html {
    let render_toast = |toast: &Toast| {
        let on_click = {
            let id = toast.id;
            let on_dismiss = props.on_dismiss.clone();
            Callback::from(move |_| on_dismiss.emit(id))
        };

        html! {
            <div class={toast_class(toast.level)} key={toast.id.to_string()} role="status">
                <div class="toast-body">
                    <div class="toast-title">{ &toast.title }</div>
                    if !toast.description.is_empty() {
                        <div class="toast-description">{ &toast.description }</div>
                    }
                </div>
                <button class="toast-close" onclick={on_click} title="Dismiss">{"×"}</button>
            </div>
        }
    };

    html! {
        <div class="toast-list">
            { for props.toasts.iter().map(render_toast) }
        </div>
    }
}
