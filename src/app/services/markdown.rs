use async_trait::async_trait;
use pulldown_cmark::{Options, Parser, html};

use crate::app::capabilities::MarkdownRenderer;
use crate::app::infrastructure::error::Result;

/// CommonMark plus the GitHub-flavoured extensions people expect from a viewer.
/// Raw HTML in the source passes through untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct PulldownRenderer;

impl PulldownRenderer {
    /// Render markdown text to an HTML fragment.
    pub fn render_markdown(text: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_FOOTNOTES);

        let parser = Parser::new_ext(text, options);
        let mut html_output = String::with_capacity(text.len() * 3 / 2);
        html::push_html(&mut html_output, parser);

        html_output
    }
}

#[async_trait(?Send)]
impl MarkdownRenderer for PulldownRenderer {
    async fn render(&self, text: &str) -> Result<String> {
        Ok(Self::render_markdown(text))
    }
}
