use iced::border::Radius;
use iced::widget::{container, text, text_input};
use iced::{Border, Color, Shadow, Theme};

use crate::controller::Corners;

/// Window background
pub const BACKGROUND: Color = Color {
    r: 0.12,
    g: 0.12,
    b: 0.15,
    a: 1.0,
};

/// Slightly lighter surface for the input and the panel
const SURFACE: Color = Color {
    r: 0.18,
    g: 0.18,
    b: 0.22,
    a: 1.0,
};

/// Accent color for focus and hovered options
const ACCENT: Color = Color {
    r: 0.35,
    g: 0.55,
    b: 0.85,
    a: 1.0,
};

const TEXT_PRIMARY: Color = Color {
    r: 0.9,
    g: 0.9,
    b: 0.92,
    a: 1.0,
};

const TEXT_SECONDARY: Color = Color {
    r: 0.55,
    g: 0.55,
    b: 0.6,
    a: 1.0,
};

/// Corner radii for the input in the given shape
pub fn input_radius(corners: Corners, radius: f32) -> Radius {
    match corners {
        Corners::Rounded => radius.into(),
        Corners::FlatTop => Radius {
            top_left: radius,
            top_right: radius,
            bottom_right: 0.0,
            bottom_left: 0.0,
        },
    }
}

/// Radii for the panel hanging under a flat-bottomed input
pub fn panel_radius(radius: f32) -> Radius {
    Radius {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: radius,
        bottom_left: radius,
    }
}

/// Style for the window-filling background
pub fn main_container(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(BACKGROUND.into()),
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for the search text input
pub fn search_input(
    corners: Corners,
    radius: f32,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |_theme, status| {
        let focused = matches!(status, text_input::Status::Focused { .. });
        text_input::Style {
            background: SURFACE.into(),
            border: Border {
                color: if focused { ACCENT } else { Color::TRANSPARENT },
                width: if focused { 2.0 } else { 0.0 },
                radius: input_radius(corners, radius),
            },
            icon: TEXT_SECONDARY,
            placeholder: TEXT_SECONDARY,
            value: TEXT_PRIMARY,
            selection: Color {
                r: ACCENT.r,
                g: ACCENT.g,
                b: ACCENT.b,
                a: 0.3,
            },
        }
    }
}

/// Style for the open dropdown panel
pub fn dropdown_panel(radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(SURFACE.into()),
        border: Border {
            color: Color {
                r: 0.3,
                g: 0.3,
                b: 0.35,
                a: 0.5,
            },
            width: 1.0,
            radius: panel_radius(radius),
        },
        shadow: Shadow {
            color: Color::BLACK,
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 20.0,
        },
        text_color: Some(TEXT_PRIMARY),
        snap: false,
    }
}

/// Style for an option row under no pointer
pub fn option_row(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: None,
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for the option row under the pointer
pub fn option_row_hovered(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(
            Color {
                r: ACCENT.r,
                g: ACCENT.g,
                b: ACCENT.b,
                a: 0.2,
            }
            .into(),
        ),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 6.0.into(),
        },
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for option text
pub fn option_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_PRIMARY),
    }
}

/// Style for the current-location line
pub fn location_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_SECONDARY),
    }
}
