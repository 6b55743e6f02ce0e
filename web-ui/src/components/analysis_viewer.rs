// Analysis result viewer

use super::CopyButton;
use crate::errors::UiError;
use crate::model::{highlight_json, Span};
use style_profiler_core::AnalysisOutcome;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnalysisViewerProps {
    pub outcome: AnalysisOutcome,
    pub on_copied: Callback<()>,
    pub on_copy_error: Callback<UiError>,
}

#[function_component(AnalysisViewer)]
pub fn analysis_viewer(props: &AnalysisViewerProps) -> Html {
    let value = serde_json::to_value(&props.outcome).unwrap_or_default();
    let lines = highlight_json(&value);
    // Shown as-is in the JSON view below; the typed view only adds a headline
    let summary = props
        .outcome
        .typed()
        .map(|result| result.overall_style_summary)
        .filter(|s| !s.is_empty());

    let render_span = |span: &Span| {
        html! { <span class={span.kind.css_class()}>{ &span.text }</span> }
    };

    let render_line = |line: &Vec<Span>| {
        html! { <div class="json-line">{ for line.iter().map(render_span) }</div> }
    };

    html! {
        <div class="analysis-viewer">
            <div class="analysis-header">
                <h2>{ "Writing Style Analysis" }</h2>
                <CopyButton
                    text={props.outcome.to_pretty_json()}
                    on_copied={props.on_copied.clone()}
                    on_error={props.on_copy_error.clone()}
                />
            </div>

            if let Some(summary) = summary {
                <p class="style-summary">{ summary }</p>
            }

            if let AnalysisOutcome::Fallback(fallback) = &props.outcome {
                <div class="alert warning">{ &fallback.analysis_summary }</div>
                <pre class="raw-response">{ &fallback.raw_response }</pre>
            }

            <pre class="json-view">
                { for lines.iter().map(render_line) }
            </pre>
        </div>
    }
}
