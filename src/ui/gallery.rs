//! Gallery screen: filter bar, wrapping tile grid, status line, and the
//! scroll-to-top control.

use crate::state::chrome::PageChrome;
use crate::state::gallery::{Gallery, ALL_CATEGORIES};
use crate::ui;
use crate::Message;
use iced::widget::image::Handle;
use iced::widget::{
    button, column, container, image, mouse_area, row, scrollable, stack, text,
};
use iced::{Alignment, ContentFit, Element, Length, Theme};
use iced_aw::Wrap;
use std::collections::{HashMap, HashSet};

/// Tile geometry. The lazy loader's viewport math is derived from these, so
/// the grid and the loader always agree on what is in view.
pub const TILE_WIDTH: f32 = 280.0;
pub const TILE_IMAGE_HEIGHT: f32 = 200.0;
pub const TILE_CAPTION_HEIGHT: f32 = 36.0;
pub const GRID_SPACING: f32 = 16.0;
pub const GRID_PADDING: f32 = 24.0;
pub const ROW_HEIGHT: f32 = TILE_IMAGE_HEIGHT + TILE_CAPTION_HEIGHT + GRID_SPACING;

/// How many tiles fit on one grid row at the given viewport width.
pub fn columns_for(viewport_width: f32) -> usize {
    let usable = (viewport_width - 2.0 * GRID_PADDING).max(TILE_WIDTH);
    (((usable + GRID_SPACING) / (TILE_WIDTH + GRID_SPACING)).floor() as usize).max(1)
}

pub fn scroll_id() -> scrollable::Id {
    scrollable::Id::new("gallery")
}

pub fn view<'a>(
    gallery: &'a Gallery,
    thumbnails: &'a HashMap<usize, Handle>,
    failed: &'a HashSet<usize>,
    chrome: &'a PageChrome,
    status: &'a str,
) -> Element<'a, Message> {
    let grid = scrollable(
        container(
            column![filter_bar(gallery), tile_grid(gallery, thumbnails, failed)]
                .spacing(24)
                .width(Length::Fill)
                .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(GRID_PADDING),
    )
    .id(scroll_id())
    .on_scroll(|viewport| Message::GalleryScrolled {
        offset_y: viewport.absolute_offset().y,
        viewport_width: viewport.bounds().width,
        viewport_height: viewport.bounds().height,
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let body = column![
        grid,
        container(text(status).size(14).style(ui::muted)).padding([6.0, 24.0]),
    ];

    if chrome.show_scroll_top() {
        stack![body, scroll_top_button()].into()
    } else {
        body.into()
    }
}

fn filter_bar(gallery: &Gallery) -> Element<'_, Message> {
    let mut bar = row![].spacing(8).align_y(Alignment::Center);
    let mut filters = vec![ALL_CATEGORIES.to_string()];
    filters.extend(gallery.categories());

    for filter in filters {
        let active = gallery.active_filter() == filter;
        let style: fn(&Theme, button::Status) -> button::Style = if active {
            button::primary
        } else {
            button::secondary
        };
        bar = bar.push(
            button(text(title_case(&filter)).size(14))
                .style(style)
                .padding([6.0, 12.0])
                .on_press(Message::FilterSelected(filter)),
        );
    }
    bar.into()
}

fn tile_grid<'a>(
    gallery: &'a Gallery,
    thumbnails: &'a HashMap<usize, Handle>,
    failed: &'a HashSet<usize>,
) -> Element<'a, Message> {
    let mut tiles: Vec<Element<'a, Message>> = Vec::new();

    for (index, item) in gallery.items().iter().enumerate() {
        if !item.phase.in_layout() {
            continue;
        }

        let picture: Element<'a, Message> = match thumbnails.get(&index) {
            Some(handle) => image(handle.clone())
                .width(Length::Fixed(TILE_WIDTH))
                .height(Length::Fixed(TILE_IMAGE_HEIGHT))
                .content_fit(ContentFit::Cover)
                .into(),
            None => {
                let placeholder = if failed.contains(&index) {
                    "unavailable"
                } else {
                    "loading…"
                };
                container(text(placeholder).size(14).style(ui::muted))
                    .width(Length::Fixed(TILE_WIDTH))
                    .height(Length::Fixed(TILE_IMAGE_HEIGHT))
                    .align_x(Alignment::Center)
                    .align_y(Alignment::Center)
                    .style(container::bordered_box)
                    .into()
            }
        };

        let tile = column![
            picture,
            container(text(&item.caption).size(14))
                .height(Length::Fixed(TILE_CAPTION_HEIGHT))
                .align_y(Alignment::Center),
        ]
        .width(Length::Fixed(TILE_WIDTH));

        tiles.push(
            mouse_area(tile)
                .on_press(Message::TileClicked(item.source.clone()))
                .into(),
        );
    }

    Wrap::with_elements(tiles)
        .spacing(GRID_SPACING)
        .line_spacing(GRID_SPACING)
        .into()
}

fn scroll_top_button<'a>() -> Element<'a, Message> {
    container(
        button(text("↑ Top").size(14))
            .style(button::primary)
            .padding([8.0, 14.0])
            .on_press(Message::ScrollToTop),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Alignment::End)
    .align_y(Alignment::End)
    .padding(24)
    .into()
}

fn title_case(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_never_zero() {
        assert_eq!(columns_for(0.0), 1);
        assert_eq!(columns_for(200.0), 1);
    }

    #[test]
    fn test_columns_grow_with_width() {
        let narrow = columns_for(700.0);
        let wide = columns_for(1_400.0);
        assert!(wide > narrow);
        // 1400 usable minus padding fits four 280px tiles with spacing.
        assert_eq!(wide, 4);
    }
}
