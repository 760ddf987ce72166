use iced::widget::{container, mouse_area, text, Column};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::controller::Options;
use crate::ui::hit::Region;
use crate::ui::theme;

/// Build the open dropdown panel
pub fn view<'a>(options: &'a Options, hovered: Option<usize>, radius: f32) -> Element<'a, Message> {
    let rows: Vec<Element<'a, Message>> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let style = if hovered == Some(i) {
                theme::option_row_hovered as fn(&iced::Theme) -> container::Style
            } else {
                theme::option_row
            };

            let row = container(text(option).size(16).style(theme::option_text))
                .padding(Padding::from([8, 12]))
                .width(Fill)
                .style(style);

            mouse_area(row)
                .on_enter(Message::Hover(Region::Option(i), true))
                .on_exit(Message::Hover(Region::Option(i), false))
                .into()
        })
        .collect();

    let panel = container(Column::from_vec(rows).spacing(2))
        .padding(Padding::from([6, 6]))
        .width(Fill)
        .style(theme::dropdown_panel(radius));

    mouse_area(panel)
        .on_enter(Message::Hover(Region::Panel, true))
        .on_exit(Message::Hover(Region::Panel, false))
        .into()
}
