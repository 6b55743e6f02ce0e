// Browser file handles staged for analysis

use crate::errors::UiError;
use style_profiler_core::{FileMeta, FilePayload, UploadedFile};
use wasm_bindgen_futures::JsFuture;

/// A file picked in the browser, with its metadata captured at selection time
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub meta: UploadedFile,
    handle: web_sys::File,
}

impl SelectedFile {
    pub fn from_file(handle: web_sys::File) -> Self {
        let meta = UploadedFile {
            name: handle.name(),
            size: handle.size() as u64,
            mime_type: handle.type_(),
        };
        Self { meta, handle }
    }

    /// All files of an `<input type="file">` selection, in order
    pub fn from_file_list(list: &web_sys::FileList) -> Vec<Self> {
        (0..list.length())
            .filter_map(|i| list.get(i))
            .map(Self::from_file)
            .collect()
    }

    /// Read the file contents into an upload payload
    pub async fn read(&self) -> Result<FilePayload, UiError> {
        let buffer = JsFuture::from(self.handle.array_buffer())
            .await
            .map_err(|_| UiError::FileRead(self.meta.name.clone()))?;
        let data = js_sys::Uint8Array::new(&buffer).to_vec();

        Ok(FilePayload::new(
            self.meta.name.clone(),
            Some(self.meta.mime_type.clone()),
            data,
        ))
    }
}

impl FileMeta for SelectedFile {
    fn name(&self) -> &str {
        &self.meta.name
    }

    fn size(&self) -> u64 {
        self.meta.size
    }
}

/// Read every staged file; the first unreadable file aborts the batch
pub async fn read_payloads(files: &[SelectedFile]) -> Result<Vec<FilePayload>, UiError> {
    let mut payloads = Vec::with_capacity(files.len());
    for file in files {
        payloads.push(file.read().await?);
    }
    Ok(payloads)
}
