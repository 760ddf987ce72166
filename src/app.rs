use iced::widget::{column, container, mouse_area, text, Column};
use iced::{event, mouse, touch, window, Element, Event, Fill, Padding, Subscription, Task, Theme};

use crate::config::Config;
use crate::controller::{Controller, Options};
use crate::submit;
use crate::ui::hit::{Hover, Region};
use crate::ui::{dropdown, search_input, theme};

/// Widest the search container grows
const SEARCH_WIDTH: f32 = 480.0;

pub struct State {
    controller: Controller,
    hover: Hover,
    placeholder: String,
    corner_radius: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    /// Enter in the focused input
    Submit,
    /// Pointer entered (true) or left (false) a region
    Hover(Region, bool),
    /// A primary press anywhere in the window
    Pressed,
}

impl State {
    pub fn new(options: Options, config: &Config) -> (Self, Task<Message>) {
        let state = Self {
            controller: Controller::new(options, submit::from_config(&config.submit)),
            hover: Hover::default(),
            placeholder: config.placeholder.clone(),
            corner_radius: config.window.corner_radius,
        };

        let focus = iced::widget::operation::focus(search_input::SEARCH_INPUT_ID);
        (state, focus)
    }

    pub fn title(&self) -> String {
        match self.controller.location() {
            Some(location) => format!("Searchdrop: {location}"),
            None => String::from("Searchdrop"),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputChanged(value) => {
                self.controller.set_value(value);
            }
            Message::Submit => {
                self.controller.submit();
                tracing::debug!("Submitted {:?}", self.controller.last_captured());
                if let Some(location) = self.controller.location() {
                    tracing::info!("Location is now {}", location);
                }
            }
            Message::Hover(region, inside) => {
                self.hover.set(region, inside);
            }
            Message::Pressed => {
                let target = self.hover.target();
                tracing::debug!("Pressed: target={:?}", target);
                self.controller.activate(target);
                if !self.controller.is_open() {
                    self.hover.panel_closed();
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let input = search_input::view(
            self.controller.value(),
            &self.placeholder,
            self.controller.corners(),
            self.corner_radius,
        );

        let mut search = Column::new().push(input);
        if self.controller.is_open() {
            search = search.push(dropdown::view(
                self.controller.options(),
                self.hover.hovered_option(),
                self.corner_radius,
            ));
        }

        let search_container = mouse_area(container(search).max_width(SEARCH_WIDTH))
            .on_enter(Message::Hover(Region::Container, true))
            .on_exit(Message::Hover(Region::Container, false));

        let mut content = column![search_container].spacing(16);
        if let Some(location) = self.controller.location() {
            content = content.push(text(location).size(12).style(theme::location_text));
        }

        container(content.padding(Padding::new(24.0)))
            .center_x(Fill)
            .height(Fill)
            .style(theme::main_container)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(pressed)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Presses are observed whether or not a widget captured them, so the
/// dropdown sees activations on the input too.
fn pressed(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
        | Event::Touch(touch::Event::FingerPressed { .. }) => Some(Message::Pressed),
        _ => None,
    }
}
