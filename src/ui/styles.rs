use iced::widget::text;
use iced::{Color, Theme};

pub fn subtle(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.color),
    }
}

pub fn category_label(active: bool) -> impl Fn(&Theme) -> text::Style {
    move |theme| text::Style {
        color: Some(if active {
            Color::WHITE
        } else {
            theme.extended_palette().background.strong.color
        }),
    }
}
