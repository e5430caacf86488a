//! State management module
//!
//! This module holds all owned application state, kept free of platform
//! event types so every operation is exercisable without a renderer:
//! - Gallery items, filtering, and lazy-load bookkeeping (gallery.rs)
//! - The lightbox viewer and swipe tracking (lightbox.rs)
//! - Enquiry form validation (form.rs)
//! - The testimonial reel (carousel.rs)
//! - Scroll observers, counters, and the marquee (chrome.rs)

pub mod carousel;
pub mod chrome;
pub mod form;
pub mod gallery;
pub mod lightbox;
