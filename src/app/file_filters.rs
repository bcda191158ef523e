use crate::app::capabilities::{DialogFilter, DialogOptions};

/// Extensions offered by the open dialog.
pub const DIALOG_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

/// Options for the "open file" dialog: one Markdown filter, single file, no directories.
pub fn markdown_dialog_options() -> DialogOptions {
    DialogOptions {
        filters: vec![DialogFilter {
            name: "Markdown".to_string(),
            extensions: DIALOG_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }],
        multiple: false,
        directory: false,
    }
}

/// Generate the filter string for FLTK's native chooser
///
/// FLTK accepts these filter formats:
/// - Simple wildcard: "*.txt"
/// - Multiple wildcards: "*.{txt,md,rst}"
/// - With description: "Text Files\t*.txt"
/// - Multiple filters: "Text Files\t*.txt\nMarkdown\t*.md"
pub fn get_platform_filter(filters: &[DialogFilter]) -> String {
    filters
        .iter()
        .filter(|filter| !filter.extensions.is_empty())
        .map(|filter| {
            let pattern = match filter.extensions.as_slice() {
                [single] => format!("*.{}", single),
                many => format!("*.{{{}}}", many.join(",")),
            };
            format!("{}\t{}", filter.name, pattern)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
