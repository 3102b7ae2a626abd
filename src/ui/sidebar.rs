/// Sidebar: image list, load/delete buttons and the adjustment controls
use iced::widget::{button, checkbox, column, container, row, scrollable, slider, text, Column};
use iced::{Element, Length, Theme};

use crate::state::session::Session;
use crate::Message;

pub fn view<'a>(session: &'a Session, status: &'a str, width: f32) -> Element<'a, Message> {
    let adjustments = &session.adjustments;
    let has_selection = session.selection.path().is_some();

    let list: Element<'a, Message> = if session.library.is_empty() {
        text("No images loaded").size(14).into()
    } else {
        entry_list(session)
    };

    let file_buttons = row![
        button("Load Images")
            .on_press(Message::LoadImages)
            .padding(10),
        button("Delete")
            .on_press_maybe(has_selection.then_some(Message::DeleteSelected))
            .style(button::danger)
            .padding(10),
    ]
    .spacing(8);

    let controls = column![
        text(format!("Brightness threshold: {}", adjustments.threshold)).size(14),
        slider(0..=255u8, adjustments.threshold, Message::ThresholdChanged),
        checkbox("Brightness effect", adjustments.brightness_enabled)
            .on_toggle(Message::BrightnessToggled),
        checkbox("Invert", adjustments.invert).on_toggle(Message::InvertToggled),
        checkbox("Watercolor effect", adjustments.watercolor_enabled)
            .on_toggle(Message::WatercolorToggled),
        button("Reset")
            .on_press(Message::ResetAdjustments)
            .style(button::secondary),
    ]
    .spacing(10);

    let content = column![
        file_buttons,
        scrollable(list).height(Length::Fill),
        controls,
        text(status).size(12),
    ]
    .spacing(16)
    .padding(10);

    container(content)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .into()
}

/// One button per loaded image; the selected one is highlighted
fn entry_list(session: &Session) -> Element<'_, Message> {
    Column::with_children(session.library.entries().iter().map(|entry| {
        let style: fn(&Theme, button::Status) -> button::Style =
            if session.selection.is_selected(&entry.path) {
                button::primary
            } else {
                button::secondary
            };

        button(text(&entry.filename).size(14))
            .on_press(Message::ImageSelected(entry.path.clone()))
            .style(style)
            .width(Length::Fill)
            .into()
    }))
    .spacing(4)
    .into()
}
