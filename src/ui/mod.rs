/// UI building blocks
///
/// Pure view functions: they project the current state into widgets and
/// never touch the cache or the network. Rendering the same state twice
/// produces the same widget tree.

use iced::widget::{button, container, row, text, text_input};
use iced::Element;

use crate::state::data::{Notification, NotificationKind};
use crate::Message;

pub mod form;
pub mod pairs;

/// Search input plus trigger button.
///
/// Typing only updates the input; the filter is applied on Enter or on
/// the button, matching how the list view treats the active filter.
pub fn search_bar(term: &str) -> Element<'_, Message> {
    row![
        text_input("Search by name", term)
            .on_input(Message::SearchChanged)
            .on_submit(Message::SearchSubmitted)
            .padding(10),
        button("Search").padding(10).on_press(Message::SearchSubmitted),
    ]
    .spacing(10)
    .into()
}

/// Transient feedback banner below the form
pub fn notification(note: &Notification) -> Element<'_, Message> {
    let style: fn(&iced::Theme) -> text::Style = match note.kind {
        NotificationKind::Success => text::success,
        NotificationKind::Error => text::danger,
    };

    container(text(&note.message).style(style).size(15))
        .padding(10)
        .style(container::rounded_box)
        .into()
}
