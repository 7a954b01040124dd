/// Upload/edit form with live previews
///
/// The same form serves both flows: in edit mode the slots arrive
/// pre-filled with the stored assets and submission becomes an update.

use iced::widget::{button, column, image, row, text, text_input};
use iced::{Element, Length};

use crate::media::encoder::MediaKind;
use crate::media::preview::Preview;
use crate::state::form::{FormDraft, MediaSlot};
use crate::Message;

/// Width of the in-form preview widget
const PREVIEW_WIDTH: f32 = 160.0;

pub fn view<'a>(draft: &'a FormDraft, submitting: bool) -> Element<'a, Message> {
    let heading = if draft.is_editing() {
        "Edit pair"
    } else {
        "Add a new pair"
    };

    let submit_label = if draft.is_editing() {
        "Update pair"
    } else {
        "Save pair"
    };

    // Ignore presses while a request is in flight
    let submit = button(submit_label)
        .padding(10)
        .on_press_maybe((!submitting).then_some(Message::SubmitForm));

    let mut actions = row![submit].spacing(10);
    if draft.is_editing() {
        actions = actions.push(
            button("Cancel")
                .style(button::secondary)
                .padding(10)
                .on_press(Message::CancelEdit),
        );
    }

    column![
        text(heading).size(24),
        text_input("Pair name", &draft.name)
            .on_input(Message::NameChanged)
            .padding(10),
        row![
            media_slot("Image", MediaKind::Image, &draft.image),
            media_slot("Video", MediaKind::Video, &draft.video),
        ]
        .spacing(20),
        actions,
    ]
    .spacing(15)
    .into()
}

/// One file picker with its state and preview
fn media_slot<'a>(label: &'a str, kind: MediaKind, slot: &'a MediaSlot) -> Element<'a, Message> {
    let pick_label = match kind {
        MediaKind::Image => "Choose image…",
        MediaKind::Video => "Choose video…",
    };

    let mut content = column![
        text(label).size(14),
        button(pick_label)
            .style(button::secondary)
            .on_press(Message::PickFile(kind)),
    ]
    .spacing(8);

    match slot {
        MediaSlot::Empty => {
            content = content.push(text("No file selected").size(13));
        }
        MediaSlot::Ready { asset, preview } => {
            content = content.push(text(&asset.file_name).size(13));
            content = content.push(preview_widget(preview));
        }
    }

    content.into()
}

fn preview_widget(preview: &Preview) -> Element<'_, Message> {
    match preview {
        Preview::Image(handle) => image(handle.clone())
            .width(Length::Fixed(PREVIEW_WIDTH))
            .into(),
        Preview::Placeholder(label) => text(label).size(13).into(),
    }
}
