use iced::widget::{mouse_area, text_input};
use iced::{Element, Fill};

use crate::app::Message;
use crate::controller::Corners;
use crate::ui::hit::Region;
use crate::ui::theme;

/// The search input ID for focus management
pub const SEARCH_INPUT_ID: &str = "searchdrop-input";

/// Build the search input widget
pub fn view<'a>(
    value: &'a str,
    placeholder: &'a str,
    corners: Corners,
    radius: f32,
) -> Element<'a, Message> {
    let input = text_input(placeholder, value)
        .on_input(Message::InputChanged)
        .on_submit(Message::Submit)
        .id(SEARCH_INPUT_ID)
        .padding(12)
        .size(18)
        .width(Fill)
        .style(theme::search_input(corners, radius));

    mouse_area(input)
        .on_enter(Message::Hover(Region::Input, true))
        .on_exit(Message::Hover(Region::Input, false))
        .into()
}
