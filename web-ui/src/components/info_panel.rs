// About / how-to panel

use style_profiler_core::MAX_FILES;
use yew::prelude::*;

#[function_component(InfoPanel)]
pub fn info_panel() -> Html {
    let open = use_state(|| false);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };

    html! {
        <div class={classes!("info-panel", open.then(|| "open"))}>
            <button class="info-toggle" onclick={toggle}>
                { "How it works" }
                <span>{ if *open { "▲" } else { "▼" } }</span>
            </button>
            if *open {
                <div class="info-content">
                    <p>
                        { "Analyze your writing style with AI-powered literary and rhetorical insights. \
                           Get detailed analysis of diction, syntax, tone, and rhetorical patterns." }
                    </p>
                    <ol>
                        <li>{ format!("Select up to {} .txt, .docx or .pdf files, 10MB each.", MAX_FILES) }</li>
                        <li>{ "Run the analysis. The files are sent to the model together with a fixed prompt." }</li>
                        <li>{ "Read the structured result or copy it as JSON." }</li>
                    </ol>
                    <p class="hint">
                        { "Files are not stored. If the model reply cannot be structured, the raw reply is shown instead." }
                    </p>
                </div>
            }
        </div>
    }
}
