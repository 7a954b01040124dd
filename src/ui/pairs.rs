/// The pair collection view
///
/// Renders the (possibly filtered) cache as a scrolling list, one entry
/// per pair with its thumbnail and actions, or a single placeholder when
/// nothing matches.

use std::collections::HashMap;

use iced::widget::{button, column, container, image, row, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::state::data::Pair;
use crate::Message;

/// Height of the scrolling list area
const LIST_HEIGHT: f32 = 360.0;
/// Width of list thumbnails
const THUMB_WIDTH: f32 = 96.0;

pub fn view<'a>(
    pairs: Vec<&'a Pair>,
    thumbnails: &HashMap<String, image::Handle>,
) -> Element<'a, Message> {
    if pairs.is_empty() {
        return container(text("No pairs yet").size(16))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(LIST_HEIGHT))
            .into();
    }

    let mut list = column![].spacing(10);
    for pair in pairs {
        list = list.push(pair_row(pair, thumbnails.get(&pair.id)));
    }

    scrollable(list).height(Length::Fixed(LIST_HEIGHT)).into()
}

/// A single pair entry with its edit/delete actions
fn pair_row<'a>(pair: &'a Pair, thumbnail: Option<&image::Handle>) -> Element<'a, Message> {
    let thumb: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(THUMB_WIDTH))
            .into(),
        // Pairs whose image failed to decode still get listed
        None => text("(no preview)")
            .size(13)
            .width(Length::Fixed(THUMB_WIDTH))
            .into(),
    };

    let actions = row![
        button(text("Edit").size(14))
            .style(button::secondary)
            .on_press(Message::EditPressed(pair.id.clone())),
        button(text("Delete").size(14))
            .style(button::danger)
            .on_press(Message::DeletePressed(pair.id.clone())),
    ]
    .spacing(8);

    container(
        row![
            thumb,
            column![text(&pair.name).size(18), actions].spacing(8),
        ]
        .spacing(16)
        .align_y(Alignment::Center),
    )
    .style(container::rounded_box)
    .padding(12)
    .width(Length::Fill)
    .into()
}
