//! The lightbox overlay: a dimmed backdrop over the whole page with the
//! current image, caption, and controls centered on top.
//!
//! Clicking the backdrop closes; clicks on the panel and its controls stay
//! on the panel. Keyboard and touch input are wired in the shell, not here.

use crate::state::lightbox::LightboxFrame;
use crate::ui;
use crate::Message;
use iced::widget::{
    button, center, column, container, horizontal_space, image, mouse_area, opaque, row, stack,
    text,
};
use iced::{Alignment, Color, ContentFit, Element, Length};

/// Stacks the lightbox on top of `base`.
pub fn wrap<'a>(base: Element<'a, Message>, frame: &LightboxFrame) -> Element<'a, Message> {
    let backdrop = mouse_area(
        center(opaque(panel(frame))).style(|_theme| container::Style {
            background: Some(
                Color {
                    a: 0.85,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..container::Style::default()
        }),
    )
    .on_press(Message::LightboxClosed);

    stack![base, opaque(backdrop)].into()
}

fn panel<'a>(frame: &LightboxFrame) -> Element<'a, Message> {
    let header = row![
        text(format!("{} / {}", frame.position, frame.total))
            .size(14)
            .style(ui::muted),
        horizontal_space(),
        button(text("✕").size(18))
            .style(button::text)
            .on_press(Message::LightboxClosed),
    ]
    .align_y(Alignment::Center);

    let picture = image(image::Handle::from_path(&frame.source))
        .width(Length::Fixed(920.0))
        .height(Length::Fixed(560.0))
        .content_fit(ContentFit::Contain);

    let viewer: Element<'a, Message> = if frame.show_nav {
        row![
            button(text("‹").size(28))
                .style(button::text)
                .on_press(Message::LightboxPrev),
            picture,
            button(text("›").size(28))
                .style(button::text)
                .on_press(Message::LightboxNext),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
    } else {
        picture.into()
    };

    container(
        column![header, viewer, text(frame.caption.clone()).size(16)]
            .spacing(12)
            .align_x(Alignment::Center),
    )
    .padding(16)
    .style(container::rounded_box)
    .into()
}
