//! Contact screen: the enquiry form and its success banner.

use crate::state::form::{EnquiryForm, Field};
use crate::ui;
use crate::Message;
use iced::widget::{button, center, column, container, scrollable, text, text_input};
use iced::{Alignment, Element, Length, Theme};

pub fn view(form: &EnquiryForm) -> Element<'_, Message> {
    let mut body = column![text("Get in touch").size(32)]
        .spacing(20)
        .max_width(560)
        .align_x(Alignment::Start);

    if form.success_visible() {
        body = body.push(
            container(
                column![
                    text("✓ Success!").size(18).style(ui::success),
                    text("Thank you for your enquiry. We'll get back to you soon!").size(14),
                ]
                .spacing(4),
            )
            .padding(16)
            .width(Length::Fill)
            .style(banner_style),
        );
    }

    for field in Field::ALL {
        body = body.push(field_row(form, field));
    }

    body = body.push(
        button(text("Send Enquiry").size(16))
            .style(button::primary)
            .padding([10.0, 18.0])
            .on_press(Message::FormSubmitted),
    );

    center(scrollable(container(body).padding(32)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn field_row(form: &EnquiryForm, field: Field) -> Element<'_, Message> {
    let mut group = column![
        text(field.label()).size(14),
        text_input(placeholder(field), form.value(field))
            .on_input(move |value| Message::FormInputChanged(field, value))
            .on_submit(Message::FormSubmitted)
            .padding(10)
            .size(16),
    ]
    .spacing(6);

    if let Some(error) = form.error(field) {
        group = group.push(text(error.to_string()).size(13).style(ui::danger));
    }
    group.into()
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Your name",
        Field::Email => "you@example.com",
        Field::Phone => "10-digit phone number",
        Field::Message => "Tell us about your project",
    }
}

fn banner_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.success.weak.color.into()),
        text_color: Some(palette.success.weak.text),
        ..container::Style::default()
    }
}
