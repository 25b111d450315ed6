use iced::widget::{text, Text};
use iced::Center;

pub fn icon(glyph: &'static str) -> Text<'static> {
    text(glyph)
        .size(18)
        .width(20)
        .align_x(Center)
        .shaping(text::Shaping::Advanced)
}

pub fn delete_icon() -> Text<'static> {
    icon("🗑")
}

pub fn confirm_icon() -> Text<'static> {
    icon("✓")
}

pub fn cancel_icon() -> Text<'static> {
    icon("✗")
}
