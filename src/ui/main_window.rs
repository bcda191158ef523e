use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Align, Event, EventState, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    window::Window,
};

use crate::app::coordinator::shortcut_zoom;
use crate::app::domain::document::paths_from_uri_list;
use crate::app::domain::{Message, ZoomCommand};

pub const WINDOW_TITLE: &str = "Markdown Viewer";
const MENU_HEIGHT: i32 = 30;
const TOOLBAR_HEIGHT: i32 = 32;
const FILENAME_HEIGHT: i32 = 24;

#[derive(Clone)]
pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub toolbar: Flex,
    pub open_button: Button,
    pub theme_button: Button,
    pub zoom_out_button: Button,
    pub zoom_label: Frame,
    pub zoom_in_button: Button,
    pub filename: Frame,
    pub content: Flex,
    pub view: HelpView,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 800, 640, WINDOW_TITLE);
    wind.set_xclass("md-viewer");

    let mut flex = Flex::new(0, 0, 800, 640, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    // Toolbar: open, theme toggle, spacer, zoom controls
    let mut toolbar = Flex::default().row();
    toolbar.set_margin(3);
    toolbar.set_pad(4);
    toolbar.set_frame(FrameType::FlatBox);

    let mut open_button = Button::default().with_label("Open");
    toolbar.fixed(&open_button, 70);
    open_button.emit(*sender, Message::OpenDialog);

    let mut theme_button = Button::default().with_label("\u{1f319}");
    toolbar.fixed(&theme_button, 36);
    theme_button.emit(*sender, Message::ToggleTheme);

    Frame::default();

    let mut zoom_out_button = Button::default().with_label("\u{2212}");
    toolbar.fixed(&zoom_out_button, 30);
    zoom_out_button.emit(*sender, Message::Zoom(ZoomCommand::Out));

    let mut zoom_label = Frame::default().with_label("100%");
    zoom_label.set_label_size(13);
    toolbar.fixed(&zoom_label, 50);

    let mut zoom_in_button = Button::default().with_label("+");
    toolbar.fixed(&zoom_in_button, 30);
    zoom_in_button.emit(*sender, Message::Zoom(ZoomCommand::In));

    toolbar.end();
    flex.fixed(&toolbar, TOOLBAR_HEIGHT);

    let mut filename = Frame::default();
    filename.set_align(Align::Left | Align::Inside);
    filename.set_label_size(13);
    flex.fixed(&filename, FILENAME_HEIGHT);

    // The content group's border doubles as the drop highlight.
    let mut content = Flex::default().column();
    content.set_margin(2);
    content.set_frame(FrameType::FlatBox);
    let mut view = HelpView::default();
    view.set_frame(FrameType::FlatBox);
    view.set_value(&crate::ui::viewport::initial_placeholder());
    content.end();

    flex.end();
    wind.resizable(&flex);
    wind.end();

    install_drop_handler(&mut view, *sender);
    install_key_handler(&mut wind, *sender);

    MainWidgets {
        wind,
        menu,
        toolbar,
        open_button,
        theme_button,
        zoom_out_button,
        zoom_label,
        zoom_in_button,
        filename,
        content,
        view,
    }
}

/// Drag-and-drop arrives at the widget under the pointer; the dropped payload
/// is delivered as a paste right after `DndRelease`.
fn install_drop_handler(view: &mut HelpView, sender: Sender<Message>) {
    view.handle(move |_, event| match event {
        Event::DndEnter => {
            sender.send(Message::DragEnter);
            true
        }
        Event::DndDrag | Event::DndRelease => true,
        Event::DndLeave => {
            sender.send(Message::DragLeave);
            true
        }
        Event::Paste => {
            sender.send(Message::DragDrop(paths_from_uri_list(&app::event_text())));
            true
        }
        _ => false,
    });
}

fn install_key_handler(wind: &mut Window, sender: Sender<Message>) {
    wind.handle(move |_, event| match event {
        Event::KeyDown | Event::Shortcut => {
            let Some(key) = app::event_key().to_char() else {
                return false;
            };
            let command = app::event_state().contains(EventState::Command);
            // Leave everything else to the menu bar's shortcuts.
            if shortcut_zoom(key, command).is_none() {
                return false;
            }
            sender.send(Message::KeyPressed { key, command });
            true
        }
        _ => false,
    });
}
