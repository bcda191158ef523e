use async_trait::async_trait;
use fltk::dialog::{FileDialogType, NativeFileChooser};

use crate::app::capabilities::{DialogOptions, FileDialog};
use crate::app::file_filters::get_platform_filter;
use crate::app::infrastructure::error::{AppError, Result};

/// Native chooser. `show` runs a nested FLTK loop, so the awaiting task
/// resumes only after the dialog closes.
pub struct FltkFileDialog;

fn dialog_type(options: &DialogOptions) -> FileDialogType {
    match (options.directory, options.multiple) {
        (true, true) => FileDialogType::BrowseMultiDir,
        (true, false) => FileDialogType::BrowseDir,
        (false, true) => FileDialogType::BrowseMultiFile,
        (false, false) => FileDialogType::BrowseFile,
    }
}

#[async_trait(?Send)]
impl FileDialog for FltkFileDialog {
    async fn open(&self, options: &DialogOptions) -> Result<Option<String>> {
        let mut nfc = NativeFileChooser::new(dialog_type(options));
        nfc.set_title("Open File");
        nfc.set_filter(&get_platform_filter(&options.filters));
        nfc.show();

        if let Some(message) = nfc.error_message() {
            if !message.is_empty() && message != "No error" {
                return Err(AppError::Dialog(message));
            }
        }

        let filename = nfc.filename();
        let s = filename.to_string_lossy();
        if s.is_empty() { Ok(None) } else { Ok(Some(s.to_string())) }
    }
}
