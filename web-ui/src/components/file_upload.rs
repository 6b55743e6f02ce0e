// File picker with intake validation

use crate::messages::format_size_kb;
use crate::model::SelectedFile;
use style_profiler_core::{
    accept_files, exceeded_limit_notice, has_exceeded_limit, is_at_capacity, remove_file,
    Diagnostic, MAX_FILES,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FileUploadProps {
    pub files: Vec<SelectedFile>,
    pub on_files_change: Callback<Vec<SelectedFile>>,
    pub on_diagnostics: Callback<Vec<Diagnostic>>,
}

#[function_component(FileUpload)]
pub fn file_upload(props: &FileUploadProps) -> Html {
    let on_change = {
        let files = props.files.clone();
        let on_files_change = props.on_files_change.clone();
        let on_diagnostics = props.on_diagnostics.clone();

        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let offered = input
                .files()
                .map(|list| SelectedFile::from_file_list(&list))
                .unwrap_or_default();
            // Allow the same file to be picked again after removal
            input.set_value("");

            let outcome = accept_files(&files, &offered);
            if !outcome.diagnostics.is_empty() {
                on_diagnostics.emit(outcome.diagnostics);
            }
            if outcome.accepted != files {
                on_files_change.emit(outcome.accepted);
            }
        })
    };

    let render_file = |(index, file): (usize, &SelectedFile)| {
        let on_remove = {
            let files = props.files.clone();
            let on_files_change = props.on_files_change.clone();
            Callback::from(move |_| {
                on_files_change.emit(remove_file(&files, index));
            })
        };

        html! {
            <li class="selected-file" key={index}>
                <span class="file-name">{ &file.meta.name }</span>
                <span class="file-size">{ format_size_kb(file.meta.size) }</span>
                <button class="remove-file" onclick={on_remove} title="Remove">
                    {"×"}
                </button>
            </li>
        }
    };

    let count = props.files.len();
    let at_capacity = is_at_capacity(count);

    html! {
        <div class="file-upload">
            <div class="file-upload-header">
                <label for="file-upload">{ "Upload Files" }</label>
                if count > 0 {
                    <span class="file-count">{ format!("{} of {} files", count.min(MAX_FILES), MAX_FILES) }</span>
                }
            </div>

            <label class={classes!("drop-zone", at_capacity.then(|| "disabled"))} for="file-upload">
                <input
                    id="file-upload"
                    type="file"
                    multiple=true
                    accept=".txt,.docx,.pdf"
                    disabled={at_capacity}
                    onchange={on_change}
                />
                <p>{ "Click to select files" }</p>
                <p class="hint">{ "Supported formats: .txt, .docx, .pdf" }</p>
            </label>

            if has_exceeded_limit(count) {
                <div class="alert warning">{ exceeded_limit_notice() }</div>
            }

            if count > 0 {
                <div class="selected-files">
                    <h4>{ "Selected Files:" }</h4>
                    <ul>
                        { for props.files.iter().take(MAX_FILES).enumerate().map(render_file) }
                    </ul>
                </div>
            } else {
                <div class="empty-selection">{ "No files selected" }</div>
            }
        </div>
    }
}
