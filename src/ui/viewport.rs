use std::cell::{Cell, RefCell};

use fltk::{enums::FrameType, prelude::*};

use crate::app::capabilities::Viewport;
use crate::app::domain::ThemeMode;
use crate::app::domain::zoom::ZOOM_DEFAULT;
use crate::ui::main_window::{MainWidgets, WINDOW_TITLE};
use crate::ui::theme::{apply_theme, chrome_color, drop_highlight, page_colors};

/// Help view text size at 100% zoom.
pub const BASE_TEXT_SIZE: i32 = 14;

pub fn initial_placeholder() -> String {
    wrap_html_for_helpview(
        "<p class=\"placeholder\">Open a Markdown file or drop one here.</p>",
        ThemeMode::Light,
    )
}

/// HelpView has no stylesheet support; page colors go on `<body>`.
pub fn wrap_html_for_helpview(html: &str, mode: ThemeMode) -> String {
    let (bg, text, link) = page_colors(mode);
    format!("<html><body bgcolor=\"{bg}\" text=\"{text}\" link=\"{link}\">{html}</body></html>")
}

pub fn scaled_text_size(percent: u32) -> i32 {
    let percent = i32::try_from(percent).unwrap_or(i32::MAX / BASE_TEXT_SIZE);
    ((BASE_TEXT_SIZE * percent + 50) / 100).max(1)
}

pub fn window_title(filename: &str) -> String {
    if filename.is_empty() {
        WINDOW_TITLE.to_string()
    } else {
        format!("{} - {}", filename, WINDOW_TITLE)
    }
}

/// Viewport backed by the main window's widgets.
///
/// The last rendered fragment is kept so a theme change can repaint it with
/// the new page colors.
pub struct FltkViewport {
    widgets: RefCell<MainWidgets>,
    html: RefCell<String>,
    mode: Cell<ThemeMode>,
    drag_over: Cell<bool>,
}

impl FltkViewport {
    pub fn new(widgets: MainWidgets) -> Self {
        Self {
            widgets: RefCell::new(widgets),
            html: RefCell::new(String::new()),
            mode: Cell::new(ThemeMode::Light),
            drag_over: Cell::new(false),
        }
    }

    fn repaint_content(&self) {
        let html = self.html.borrow();
        if html.is_empty() {
            return;
        }
        let mut widgets = self.widgets.borrow_mut();
        let top = widgets.view.top_line();
        widgets.view.set_value(&wrap_html_for_helpview(&html, self.mode.get()));
        widgets.view.set_top_line(top);
    }

    fn paint_drop_border(&self) {
        let mode = self.mode.get();
        let mut widgets = self.widgets.borrow_mut();
        let color = if self.drag_over.get() {
            drop_highlight(mode)
        } else {
            chrome_color(mode)
        };
        widgets.content.set_frame(FrameType::FlatBox);
        widgets.content.set_color(color);
        widgets.content.redraw();
    }
}

impl Viewport for FltkViewport {
    fn set_content(&self, html: &str) {
        *self.html.borrow_mut() = html.to_string();
        let mut widgets = self.widgets.borrow_mut();
        widgets.view.set_value(&wrap_html_for_helpview(html, self.mode.get()));
        widgets.view.set_top_line(0);
    }

    fn set_filename(&self, name: &str) {
        let mut widgets = self.widgets.borrow_mut();
        widgets.filename.set_label(&format!(" {}", name));
        widgets.wind.set_label(&window_title(name));
        widgets.filename.redraw();
    }

    fn set_theme(&self, mode: ThemeMode) {
        self.mode.set(mode);
        apply_theme(&mut self.widgets.borrow_mut(), mode);
        self.repaint_content();
        self.paint_drop_border();
    }

    fn set_theme_indicator(&self, glyph: &str) {
        let mut widgets = self.widgets.borrow_mut();
        widgets.theme_button.set_label(glyph);
        widgets.theme_button.redraw();
    }

    fn set_font_scale(&self, percent: u32) {
        let mut widgets = self.widgets.borrow_mut();
        widgets.view.set_text_size(scaled_text_size(percent));
        widgets.view.redraw();
    }

    fn set_zoom_label(&self, label: &str) {
        let mut widgets = self.widgets.borrow_mut();
        widgets.zoom_label.set_label(label);
        widgets.zoom_label.redraw();
    }

    fn set_drag_over(&self, active: bool) {
        self.drag_over.set(active);
        self.paint_drop_border();
    }
}
