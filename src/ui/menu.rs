use fltk::{
    app::{self, Sender},
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::{Message, ZoomCommand};

/// Zoom entries carry no shortcut of their own; Cmd/Ctrl `=`, `-` and `0`
/// reach the coordinator as key presses.
pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/Open...", Shortcut::Command | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenDialog) });
    menu.add("File/Quit", Shortcut::Command | 'q', MenuFlag::Normal, |_| {
        while let Some(mut wind) = app::first_window() {
            wind.hide();
        }
    });

    // View
    menu.add("View/Zoom In", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Zoom(ZoomCommand::In)) });
    menu.add("View/Zoom Out", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Zoom(ZoomCommand::Out)) });
    menu.add("View/Actual Size", Shortcut::None, MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::Zoom(ZoomCommand::Reset)) });
    menu.add("View/Toggle Dark Mode", Shortcut::Command | Shortcut::Shift | 't', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ToggleTheme) });
}
