// Web UI library for the Writing Style Profiler
//
// This crate provides the Yew components and UI models
// for the browser frontend.

use yew::prelude::*;

pub mod components;
pub mod errors;
pub mod messages;
pub mod model;

// Re-export components
pub use components::*;

/// Main application component (state management and event handling)
#[function_component(App)]
pub fn app() -> Html {
    use crate::messages::*;
    use crate::model::toasts::TOAST_DURATION_MS;
    use crate::model::{read_payloads, AnalysisState, SelectedFile, Toast, ToastAction, ToastQueue};
    use gloo_timers::future::TimeoutFuture;
    use style_profiler_api_client::analyze_files;
    use style_profiler_core::Diagnostic;
    use wasm_bindgen_futures::spawn_local;

    let files = use_state(Vec::<SelectedFile>::new);
    let analysis = use_state(AnalysisState::default);
    let toasts = use_reducer(ToastQueue::default);

    // Show a toast and schedule its removal
    let notify = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |toast: Toast| {
            let id = toast.id;
            dispatcher.dispatch(ToastAction::Push(toast));

            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                TimeoutFuture::new(TOAST_DURATION_MS).await;
                dispatcher.dispatch(ToastAction::Dismiss(id));
            });
        })
    };

    let on_dismiss = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: uuid::Uuid| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let on_files_change = {
        let files = files.clone();
        Callback::from(move |next: Vec<SelectedFile>| files.set(next))
    };

    let on_diagnostics = {
        let notify = notify.clone();
        Callback::from(move |diagnostics: Vec<Diagnostic>| {
            for diagnostic in &diagnostics {
                notify.emit(Toast::from(diagnostic));
            }
        })
    };

    let on_analyze = {
        let files = files.clone();
        let analysis = analysis.clone();
        let notify = notify.clone();

        Callback::from(move |_: MouseEvent| {
            if files.is_empty() {
                notify.emit(Toast::new(ToastLevel::Error, NO_FILES_TITLE, NO_FILES_DESCRIPTION));
                return;
            }
            let Some(loading) = analysis.start() else {
                return;
            };
            analysis.set(loading);

            let selected = (*files).clone();
            let analysis = analysis.clone();
            let notify = notify.clone();

            spawn_local(async move {
                let result = match read_payloads(&selected).await {
                    Ok(payloads) => analyze_files(payloads).await.map_err(|e| e.to_string()),
                    Err(e) => Err(e.to_string()),
                };

                match &result {
                    Ok(outcome) if outcome.is_fallback() => notify.emit(Toast::new(
                        ToastLevel::Warning,
                        ANALYSIS_COMPLETE_TITLE,
                        ANALYSIS_PARTIAL_DESCRIPTION,
                    )),
                    Ok(_) => notify.emit(Toast::new(
                        ToastLevel::Success,
                        ANALYSIS_COMPLETE_TITLE,
                        ANALYSIS_COMPLETE_DESCRIPTION,
                    )),
                    Err(message) => notify.emit(Toast::new(
                        ToastLevel::Error,
                        ANALYSIS_FAILED_TITLE,
                        message.clone(),
                    )),
                }

                analysis.set(AnalysisState::finish(result));
            });
        })
    };

    let on_copied = {
        let notify = notify.clone();
        Callback::from(move |_: ()| {
            notify.emit(Toast::new(
                ToastLevel::Success,
                COPY_SUCCESS_TITLE,
                COPY_SUCCESS_DESCRIPTION,
            ))
        })
    };

    let on_copy_error = {
        let notify = notify.clone();
        Callback::from(move |_: crate::errors::UiError| {
            notify.emit(Toast::new(
                ToastLevel::Error,
                COPY_FAILED_TITLE,
                COPY_FAILED_DESCRIPTION,
            ))
        })
    };

    let busy = analysis.is_busy();

    html! {
        <div class="app-container">
            <ToastList toasts={toasts.toasts.clone()} on_dismiss={on_dismiss} />

            <header class="app-header">
                <h1>{ "Writing Style Profiler" }</h1>
                <p class="tagline">
                    { "Literary and rhetorical analysis of your writing: diction, syntax, tone and patterns." }
                </p>
            </header>

            <InfoPanel />

            <main class="main-content">
                <FileUpload
                    files={(*files).clone()}
                    on_files_change={on_files_change}
                    on_diagnostics={on_diagnostics}
                />

                <div class="analyze-actions">
                    <button
                        class={classes!("analyze-btn", busy.then(|| "loading"))}
                        disabled={!analysis.can_start(files.len())}
                        onclick={on_analyze}
                    >
                        { if busy { "Processing" } else { "Analyze" } }
                    </button>
                </div>

                if let Some(error) = analysis.error() {
                    <div class="alert error">{ format!("Error: {}", error) }</div>
                }

                if let Some(outcome) = analysis.result() {
                    <AnalysisViewer
                        outcome={outcome.clone()}
                        on_copied={on_copied}
                        on_copy_error={on_copy_error}
                    />
                }
            </main>
        </div>
    }
}
