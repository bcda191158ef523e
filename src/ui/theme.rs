use fltk::{enums::Color, prelude::*};

use crate::app::domain::ThemeMode;
use crate::ui::main_window::MainWidgets;

/// Page colors handed to the HTML wrapper: (background, text, link).
pub fn page_colors(mode: ThemeMode) -> (&'static str, &'static str, &'static str) {
    match mode {
        ThemeMode::Dark => ("#1e1e1e", "#dcdcdc", "#6cb6ff"),
        ThemeMode::Light => ("#ffffff", "#1f2328", "#0969da"),
    }
}

/// Accent drawn around the content while a drag hovers the window.
pub fn drop_highlight(mode: ThemeMode) -> Color {
    match mode {
        ThemeMode::Dark => Color::from_rgb(90, 140, 220),
        ThemeMode::Light => Color::from_rgb(9, 105, 218),
    }
}

pub fn chrome_color(mode: ThemeMode) -> Color {
    match mode {
        ThemeMode::Dark => Color::from_rgb(25, 25, 25),
        ThemeMode::Light => Color::from_rgb(240, 240, 240),
    }
}

pub fn apply_theme(widgets: &mut MainWidgets, mode: ThemeMode) {
    let chrome = chrome_color(mode);
    let (label, panel, hover) = if mode.is_dark() {
        (Color::from_rgb(220, 220, 220), Color::from_rgb(35, 35, 35), Color::from_rgb(60, 60, 60))
    } else {
        (Color::Black, Color::from_rgb(240, 240, 240), Color::from_rgb(200, 200, 200))
    };

    widgets.wind.set_color(chrome);
    widgets.wind.set_label_color(label);
    widgets.menu.set_color(panel);
    widgets.menu.set_text_color(label);
    widgets.menu.set_selection_color(hover); // Hover color
    widgets.toolbar.set_color(panel);
    for button in [
        &mut widgets.open_button,
        &mut widgets.theme_button,
        &mut widgets.zoom_out_button,
        &mut widgets.zoom_in_button,
    ] {
        button.set_color(panel);
        button.set_label_color(label);
        button.set_selection_color(hover);
    }
    widgets.zoom_label.set_label_color(label);
    widgets.filename.set_color(chrome);
    widgets.filename.set_label_color(label);
    widgets.content.set_color(chrome);

    widgets.wind.redraw();
}
