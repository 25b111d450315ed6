use iced::widget::{button, row, text};
use iced::Element;

use crate::app::Message;
use crate::state::Category;
use crate::ui::styles::category_label;

pub fn view_controls<'a>(current: Category) -> Element<'a, Message> {
    let category_button = |category: Category| {
        let label = text(category.label())
            .size(44)
            .style(category_label(category == current));

        button(label)
            .on_press(Message::CategorySelected(category))
            .padding(0)
            .style(button::text)
    };

    row![
        category_button(Category::Work),
        iced::widget::horizontal_space(),
        category_button(Category::Travel),
    ]
    .into()
}
