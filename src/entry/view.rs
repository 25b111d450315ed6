use iced::widget::{button, container, row, text};
use iced::{Center, Element, Fill, Theme};
use uuid::Uuid;

use crate::ui::icons::{cancel_icon, confirm_icon, delete_icon};
use crate::ui::styles::subtle;

use super::Entry;

#[derive(Debug, Clone)]
pub enum EntryMessage {
    Delete,
    ConfirmDelete(Uuid),
    CancelDelete,
}

/// One row: the text plus either a delete button or, while a delete is
/// pending for this entry, the confirm/cancel pair.
pub fn entry_view(entry: &Entry, pending: Option<Uuid>) -> Element<'_, EntryMessage> {
    let content = match pending {
        None => idle_view(entry),
        Some(token) => confirming_view(entry, token),
    };

    container(content)
        .padding(20)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: iced::Border {
                color: theme.extended_palette().background.weak.color,
                width: 1.0,
                radius: 15.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn idle_view(entry: &Entry) -> Element<'_, EntryMessage> {
    row![
        text(entry.text()).size(16).width(Fill),
        button(delete_icon())
            .on_press(EntryMessage::Delete)
            .padding(4)
            .style(button::text),
    ]
    .spacing(20)
    .align_y(Center)
    .into()
}

fn confirming_view(entry: &Entry, token: Uuid) -> Element<'_, EntryMessage> {
    row![
        text(entry.text()).size(16).width(Fill).style(subtle),
        text("Delete this To Do?").size(14),
        button(confirm_icon())
            .on_press(EntryMessage::ConfirmDelete(token))
            .padding(6)
            .style(button::danger),
        button(cancel_icon())
            .on_press(EntryMessage::CancelDelete)
            .padding(6)
            .style(button::secondary),
    ]
    .spacing(12)
    .align_y(Center)
    .into()
}
