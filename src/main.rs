use iced::keyboard::{self, key::Named};
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::widget::{button, center, column, text};
use iced::{event, touch, window, Alignment, Element, Event, Subscription, Task, Theme};
use rfd::FileDialog;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::time::Duration;

mod content;
mod state;
mod ui;

use content::loader;
use content::manifest::Testimonial;
use content::scan::scan_portfolio_async;
use content::SiteContent;
use state::carousel::{TestimonialReel, AUTOPLAY_INTERVAL_SECS};
use state::chrome::{PageChrome, StatCounter, COUNTER_TICK_MS, MARQUEE_ROTATE_MS};
use state::form::{EnquiryForm, Field, SubmitOutcome, SUCCESS_BANNER_MS};
use state::gallery::{self, Gallery, LazyLoader, FADE_OUT_MS, REVEAL_DELAY_MS};
use state::lightbox::Lightbox;

/// The screens reachable from the top navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Gallery,
    Testimonials,
    Contact,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Home,
        Screen::Gallery,
        Screen::Testimonials,
        Screen::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Gallery => "Gallery",
            Screen::Testimonials => "Testimonials",
            Screen::Contact => "Contact",
        }
    }
}

/// Everything derived from one loaded portfolio folder.
struct Site {
    studio: String,
    tagline: String,
    testimonials: Vec<Testimonial>,
    gallery: Gallery,
    lazy: LazyLoader,
    /// Decoded tile thumbnails by item index.
    thumbnails: HashMap<usize, iced::widget::image::Handle>,
    /// Tiles whose thumbnail decode failed; they stay as inert placeholders.
    thumbs_failed: HashSet<usize>,
    lightbox: Lightbox,
    form: EnquiryForm,
    reel: TestimonialReel,
    chrome: PageChrome,
}

impl Site {
    fn from_content(content: SiteContent) -> Self {
        let counters = content
            .stats
            .iter()
            .map(|stat| StatCounter::new(&stat.label, stat.value))
            .collect();

        Site {
            studio: content.studio,
            tagline: content.tagline,
            reel: TestimonialReel::new(content.testimonials.len()),
            testimonials: content.testimonials,
            gallery: Gallery::new(content.items),
            lazy: LazyLoader::new(),
            thumbnails: HashMap::new(),
            thumbs_failed: HashSet::new(),
            lightbox: Lightbox::new(),
            form: EnquiryForm::new(),
            chrome: PageChrome::new(counters, content.marquee),
        }
    }
}

/// Main application state
struct Showroom {
    screen: Screen,
    site: Option<Site>,
    loading: bool,
    /// Status message shown on the landing view and the gallery footer
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Open Portfolio Folder" button
    PickFolder,
    /// Background scan completed
    ContentLoaded(Result<SiteContent, String>),
    /// A navigation link was clicked
    ScreenSelected(Screen),
    /// The gallery scrollable moved or resized
    GalleryScrolled {
        offset_y: f32,
        viewport_width: f32,
        viewport_height: f32,
    },
    /// The scroll-to-top control was clicked
    ScrollToTop,
    /// A filter button was clicked
    FilterSelected(String),
    /// The fade-out window of a filter change elapsed
    FilterFadeOutElapsed(u64),
    /// The reveal tick of a filter change elapsed
    FilterRevealElapsed(u64),
    /// A tile thumbnail finished decoding
    ThumbnailLoaded(usize, Result<iced::widget::image::Handle, String>),
    /// A gallery tile was clicked
    TileClicked(String),
    LightboxClosed,
    LightboxNext,
    LightboxPrev,
    /// Escape / arrow keys, meaningful only while the lightbox is open
    KeyPressed(Named),
    /// A finger went down somewhere on the window
    TouchStarted(f32),
    /// A finger lifted; may complete a swipe
    TouchEnded(f32),
    /// Keystrokes in one of the enquiry fields
    FormInputChanged(Field, String),
    FormSubmitted,
    /// The success banner's auto-dismiss timer fired
    SuccessBannerElapsed(u64),
    ReelNext,
    ReelPrev,
    ReelDotPressed(usize),
    ReelHovered(bool),
    /// Auto-play beat for the testimonial reel
    ReelTick,
    /// Counter animation beat on the home screen
    HomeTick,
    /// Marquee rotation beat
    MarqueeTick,
}

impl Showroom {
    /// Create a new instance, kicking off the scan when a folder was passed
    /// on the command line.
    fn new() -> (Self, Task<Message>) {
        let mut app = Showroom {
            screen: Screen::Home,
            site: None,
            loading: false,
            status: String::from("Open a portfolio folder to begin."),
        };

        let task = match std::env::args().nth(1) {
            Some(path) => {
                app.loading = true;
                app.status = format!("Loading {path}…");
                Task::perform(
                    scan_portfolio_async(PathBuf::from(path)),
                    Message::ContentLoaded,
                )
            }
            None => Task::none(),
        };

        (app, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickFolder => {
                let folder = FileDialog::new()
                    .set_title("Select Portfolio Folder")
                    .pick_folder();

                if let Some(folder_path) = folder {
                    self.loading = true;
                    self.status = format!("Loading {}…", folder_path.display());
                    return Task::perform(
                        scan_portfolio_async(folder_path),
                        Message::ContentLoaded,
                    );
                }
                Task::none()
            }
            Message::ContentLoaded(Ok(content)) => {
                self.loading = false;

                let mut site = Site::from_content(content);
                self.status = format!(
                    "Ready. {} images across {} categories.",
                    site.gallery.len(),
                    site.gallery.categories().len()
                );

                // The home screen is already on display, so the counters
                // start their one-shot run right away.
                site.chrome.start_counters();
                let task = request_thumbnails(&mut site);
                self.site = Some(site);
                task
            }
            Message::ContentLoaded(Err(error)) => {
                log::error!("portfolio load failed: {error}");
                self.loading = false;
                self.status = format!("Could not load portfolio: {error}");
                Task::none()
            }
            Message::ScreenSelected(screen) => {
                self.screen = screen;
                if let Some(site) = self.site.as_mut() {
                    match screen {
                        Screen::Home => site.chrome.start_counters(),
                        Screen::Gallery => return request_thumbnails(site),
                        _ => {}
                    }
                }
                Task::none()
            }
            message => {
                let Some(site) = self.site.as_mut() else {
                    return Task::none();
                };
                update_site(site, message)
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let Some(site) = &self.site else {
            return self.landing();
        };

        let body: Element<'_, Message> = match self.screen {
            Screen::Home => ui::home::view(&site.studio, &site.tagline, &site.chrome),
            Screen::Gallery => ui::gallery::view(
                &site.gallery,
                &site.thumbnails,
                &site.thumbs_failed,
                &site.chrome,
                &self.status,
            ),
            Screen::Testimonials => ui::testimonials::view(&site.testimonials, &site.reel),
            Screen::Contact => ui::form::view(&site.form),
        };

        let page: Element<'_, Message> = column![
            ui::navbar::view(&site.studio, self.screen, site.chrome.navbar_elevated()),
            body,
        ]
        .into();

        // The overlay covers everything, nav bar included, and blocks
        // interaction with the page behind it.
        match site.lightbox.frame() {
            Some(frame) => ui::lightbox::wrap(page, &frame),
            None => page,
        }
    }

    fn landing(&self) -> Element<'_, Message> {
        let mut open = button(text("Open Portfolio Folder").size(16)).padding(10);
        if !self.loading {
            open = open.on_press(Message::PickFolder);
        }

        let content = column![
            text("Showroom").size(48),
            open,
            text(&self.status).size(16),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        center(content).into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subs = vec![keyboard::on_key_press(handle_key_press)];

        if let Some(site) = &self.site {
            if site.lightbox.is_open() {
                subs.push(event::listen_with(handle_touch));
            }
            match self.screen {
                Screen::Home => {
                    if site.chrome.counters_running() {
                        subs.push(
                            iced::time::every(Duration::from_millis(COUNTER_TICK_MS))
                                .map(|_| Message::HomeTick),
                        );
                    }
                    if !site.chrome.marquee_is_empty() {
                        subs.push(
                            iced::time::every(Duration::from_millis(MARQUEE_ROTATE_MS))
                                .map(|_| Message::MarqueeTick),
                        );
                    }
                }
                Screen::Testimonials => {
                    if site.reel.autoplay_active() {
                        subs.push(
                            iced::time::every(Duration::from_secs(AUTOPLAY_INTERVAL_SECS))
                                .map(|_| Message::ReelTick),
                        );
                    }
                }
                _ => {}
            }
        }

        Subscription::batch(subs)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Message handling once a portfolio is loaded.
fn update_site(site: &mut Site, message: Message) -> Task<Message> {
    match message {
        Message::GalleryScrolled {
            offset_y,
            viewport_width,
            viewport_height,
        } => {
            // Background scroll is disabled while the lightbox is up.
            if !site.lightbox.scroll_enabled() {
                return Task::none();
            }
            site.chrome
                .on_scroll(offset_y, viewport_width, viewport_height);
            request_thumbnails(site)
        }
        Message::ScrollToTop => {
            scrollable::scroll_to(ui::gallery::scroll_id(), AbsoluteOffset { x: 0.0, y: 0.0 })
        }
        Message::FilterSelected(category) => {
            let transition = site.gallery.apply_filter(&category);
            let mut tasks = Vec::new();
            if transition.fade_out_pending {
                tasks.push(Task::perform(delay(FADE_OUT_MS), move |_| {
                    Message::FilterFadeOutElapsed(transition.generation)
                }));
            }
            if transition.reveal_pending {
                tasks.push(Task::perform(delay(REVEAL_DELAY_MS), move |_| {
                    Message::FilterRevealElapsed(transition.generation)
                }));
            }
            Task::batch(tasks)
        }
        Message::FilterFadeOutElapsed(generation) => {
            site.gallery.settle_fade_out(generation);
            request_thumbnails(site)
        }
        Message::FilterRevealElapsed(generation) => {
            site.gallery.settle_reveal(generation);
            request_thumbnails(site)
        }
        Message::ThumbnailLoaded(index, Ok(handle)) => {
            site.thumbnails.insert(index, handle);
            Task::none()
        }
        Message::ThumbnailLoaded(index, Err(error)) => {
            log::warn!("thumbnail {index} failed: {error}");
            site.thumbs_failed.insert(index);
            Task::none()
        }
        Message::TileClicked(source) => {
            let view = site.gallery.visible_images();
            if !site.lightbox.open(view, &source) {
                log::debug!("lightbox ignored unknown source {source}");
            }
            Task::none()
        }
        Message::LightboxClosed => {
            site.lightbox.close();
            Task::none()
        }
        Message::LightboxNext => {
            site.lightbox.next();
            Task::none()
        }
        Message::LightboxPrev => {
            site.lightbox.prev();
            Task::none()
        }
        Message::KeyPressed(key) => {
            if site.lightbox.is_open() {
                match key {
                    Named::Escape => site.lightbox.close(),
                    Named::ArrowLeft => site.lightbox.prev(),
                    Named::ArrowRight => site.lightbox.next(),
                    _ => {}
                }
            }
            Task::none()
        }
        Message::TouchStarted(x) => {
            if site.lightbox.is_open() {
                site.lightbox.touch_started(x);
            }
            Task::none()
        }
        Message::TouchEnded(x) => {
            if site.lightbox.is_open() {
                site.lightbox.touch_ended(x);
            }
            Task::none()
        }
        Message::FormInputChanged(field, value) => {
            site.form.input(field, value);
            Task::none()
        }
        Message::FormSubmitted => match site.form.submit() {
            SubmitOutcome::Accepted {
                record,
                banner_token,
            } => {
                log::info!(
                    "enquiry from {} <{}> received at {}",
                    record.name,
                    record.email,
                    record.received_at.format("%Y-%m-%d %H:%M:%S")
                );
                Task::perform(delay(SUCCESS_BANNER_MS), move |_| {
                    Message::SuccessBannerElapsed(banner_token)
                })
            }
            SubmitOutcome::Rejected { first_invalid } => {
                log::debug!("enquiry blocked: {} is invalid", first_invalid.label());
                Task::none()
            }
        },
        Message::SuccessBannerElapsed(token) => {
            site.form.dismiss_success(token);
            Task::none()
        }
        Message::ReelNext => {
            site.reel.next();
            Task::none()
        }
        Message::ReelPrev => {
            site.reel.prev();
            Task::none()
        }
        Message::ReelDotPressed(index) => {
            site.reel.go_to(index);
            Task::none()
        }
        Message::ReelHovered(hovered) => {
            site.reel.set_hovered(hovered);
            Task::none()
        }
        Message::ReelTick => {
            site.reel.tick();
            Task::none()
        }
        Message::HomeTick => {
            site.chrome.tick_counters();
            Task::none()
        }
        Message::MarqueeTick => {
            site.chrome.rotate_marquee();
            Task::none()
        }
        // Handled before delegation.
        Message::PickFolder | Message::ContentLoaded(_) | Message::ScreenSelected(_) => {
            Task::none()
        }
    }
}

/// Requests thumbnails for every laid-out tile near the viewport that has
/// not been requested before. Each request is one background decode task.
fn request_thumbnails(site: &mut Site) -> Task<Message> {
    let (viewport_width, viewport_height) = site.chrome.viewport_or_default();
    let laid_out = site.gallery.laid_out_indices();
    let columns = ui::gallery::columns_for(viewport_width);
    let range = gallery::visible_slot_range(
        site.chrome.scroll_y(),
        viewport_height,
        columns,
        ui::gallery::ROW_HEIGHT,
        laid_out.len(),
    );

    let due = site.lazy.mark_due(laid_out[range].iter().copied());
    let tasks: Vec<Task<Message>> = due
        .into_iter()
        .map(|index| {
            let path = PathBuf::from(&site.gallery.items()[index].source);
            Task::perform(loader::load_thumbnail(path), move |result| {
                Message::ThumbnailLoaded(index, result)
            })
        })
        .collect();

    Task::batch(tasks)
}

async fn delay(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

fn handle_key_press(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        keyboard::Key::Named(named @ (Named::Escape | Named::ArrowLeft | Named::ArrowRight)) => {
            Some(Message::KeyPressed(named))
        }
        _ => None,
    }
}

fn handle_touch(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::TouchStarted(position.x))
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::TouchEnded(position.x))
        }
        _ => None,
    }
}

fn main() -> iced::Result {
    env_logger::init();

    iced::application("Showroom", Showroom::update, Showroom::view)
        .subscription(Showroom::subscription)
        .theme(Showroom::theme)
        .centered()
        .run_with(Showroom::new)
}
