//! Home screen: hero, animated stat counters, and the results marquee.

use crate::state::chrome::PageChrome;
use crate::ui;
use crate::Message;
use iced::widget::{center, column, container, row, text};
use iced::{Alignment, Element, Length};

pub fn view<'a>(studio: &'a str, tagline: &'a str, chrome: &'a PageChrome) -> Element<'a, Message> {
    let hero = column![
        text(studio).size(48),
        text(tagline).size(20).style(ui::muted),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    let mut stats = row![].spacing(24).align_y(Alignment::Center);
    for counter in chrome.counters() {
        stats = stats.push(
            container(
                column![
                    text(counter.display().to_string()).size(40),
                    text(&counter.label).size(14).style(ui::muted),
                ]
                .spacing(4)
                .align_x(Alignment::Center),
            )
            .padding(20)
            .style(container::rounded_box),
        );
    }

    let mut page = column![hero].spacing(40).align_x(Alignment::Center);
    if !chrome.counters().is_empty() {
        page = page.push(stats);
    }
    if !chrome.marquee_is_empty() {
        // Entries are rendered twice so the ticker reads as an endless loop;
        // rotation happens on a timer in the state layer.
        let line: Vec<&str> = chrome
            .marquee_entries()
            .chain(chrome.marquee_entries())
            .collect();
        page = page.push(text(line.join("   •   ")).size(16).style(ui::muted));
    }

    center(page).width(Length::Fill).height(Length::Fill).into()
}
