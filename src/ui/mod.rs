//! Screen views. These are pure functions from state to widget trees; all
//! behavior lives in the state layer and `update`.

pub mod form;
pub mod gallery;
pub mod home;
pub mod lightbox;
pub mod navbar;
pub mod testimonials;

use iced::widget::text;
use iced::Theme;

/// Dimmed secondary text (captions, status lines, marquee).
pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.color),
    }
}

/// Validation errors.
pub fn danger(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().danger.base.color),
    }
}

/// Success banner text.
pub fn success(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().success.base.color),
    }
}
