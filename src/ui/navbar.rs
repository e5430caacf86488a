//! Persistent top navigation. Exactly one link is highlighted: the current
//! screen. The bar drops a stronger shadow once the page below is scrolled.

use crate::{Message, Screen};
use iced::widget::{button, container, horizontal_space, row, text};
use iced::{Alignment, Color, Element, Length, Shadow, Theme, Vector};

pub fn view(studio: &str, current: Screen, elevated: bool) -> Element<'_, Message> {
    let mut links = row![].spacing(8).align_y(Alignment::Center);
    for screen in Screen::ALL {
        let style: fn(&Theme, button::Status) -> button::Style = if screen == current {
            button::primary
        } else {
            button::text
        };
        links = links.push(
            button(text(screen.label()).size(16))
                .style(style)
                .padding([8.0, 14.0])
                .on_press(Message::ScreenSelected(screen)),
        );
    }

    container(
        row![text(studio).size(22), horizontal_space(), links]
            .spacing(24)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([12.0, 24.0])
    .style(move |theme: &Theme| bar_style(theme, elevated))
    .into()
}

fn bar_style(theme: &Theme, elevated: bool) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        shadow: Shadow {
            color: Color {
                a: if elevated { 0.45 } else { 0.15 },
                ..Color::BLACK
            },
            offset: Vector::new(0.0, if elevated { 4.0 } else { 2.0 }),
            blur_radius: if elevated { 10.0 } else { 4.0 },
        },
        ..container::Style::default()
    }
}
