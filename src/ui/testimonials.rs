//! Testimonials screen: one slide at a time, dot indicators, and manual
//! controls. Hovering the card pauses the auto-play.

use crate::content::manifest::Testimonial;
use crate::state::carousel::TestimonialReel;
use crate::ui;
use crate::Message;
use iced::widget::{button, center, column, container, mouse_area, row, text};
use iced::{Alignment, Element, Length};

pub fn view<'a>(testimonials: &'a [Testimonial], reel: &TestimonialReel) -> Element<'a, Message> {
    let Some(slide) = testimonials.get(reel.current()) else {
        return center(text("No testimonials yet.").size(18).style(ui::muted)).into();
    };

    let card = container(
        column![
            text(format!("\u{201c}{}\u{201d}", slide.quote)).size(24),
            text(&slide.author).size(16),
            text(&slide.role).size(14).style(ui::muted),
        ]
        .spacing(12)
        .align_x(Alignment::Center)
        .max_width(720),
    )
    .padding(32)
    .style(container::rounded_box);

    let mut dots = row![].spacing(8).align_y(Alignment::Center);
    for index in 0..reel.total() {
        let glyph = if index == reel.current() { "●" } else { "○" };
        dots = dots.push(
            button(text(glyph).size(14))
                .style(button::text)
                .padding(2)
                .on_press(Message::ReelDotPressed(index)),
        );
    }

    let controls = row![
        button(text("‹").size(22))
            .style(button::text)
            .on_press(Message::ReelPrev),
        dots,
        button(text("›").size(22))
            .style(button::text)
            .on_press(Message::ReelNext),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let body = column![
        mouse_area(card)
            .on_enter(Message::ReelHovered(true))
            .on_exit(Message::ReelHovered(false)),
        controls,
    ]
    .spacing(24)
    .align_x(Alignment::Center);

    center(body).width(Length::Fill).height(Length::Fill).into()
}
