// Copy-to-clipboard button

use crate::errors::UiError;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::prelude::*;

/// How long the button reads "Copied!"
const COPIED_FEEDBACK_MS: u32 = 2_000;

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub text: String,
    pub on_copied: Callback<()>,
    pub on_error: Callback<UiError>,
}

#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let copied = use_state(|| false);

    let on_click = {
        let text = props.text.clone();
        let copied = copied.clone();
        let on_copied = props.on_copied.clone();
        let on_error = props.on_error.clone();

        Callback::from(move |_| {
            let text = text.clone();
            let copied = copied.clone();
            let on_copied = on_copied.clone();
            let on_error = on_error.clone();

            spawn_local(async move {
                match write_clipboard(&text).await {
                    Ok(()) => {
                        copied.set(true);
                        on_copied.emit(());
                        TimeoutFuture::new(COPIED_FEEDBACK_MS).await;
                        copied.set(false);
                    }
                    Err(e) => on_error.emit(e),
                }
            });
        })
    };

    html! {
        <button class={classes!("copy-btn", copied.then(|| "copied"))} onclick={on_click}>
            { if *copied { "Copied!" } else { "Copy JSON" } }
        </button>
    }
}

/// `navigator.clipboard.writeText(text)`
async fn write_clipboard(text: &str) -> Result<(), UiError> {
    let window = web_sys::window().ok_or_else(|| UiError::Clipboard("no window".to_string()))?;
    let navigator = window.navigator();

    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(js_error)?;
    if clipboard.is_undefined() {
        return Err(UiError::Clipboard("clipboard API unavailable".to_string()));
    }
    let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    let promise: Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    JsFuture::from(promise).await.map_err(js_error)?;
    Ok(())
}

fn js_error(value: JsValue) -> UiError {
    UiError::Clipboard(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}
