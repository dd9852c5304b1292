use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use env_logger::{Builder, Target};
use iced::keyboard::{self, key::Named, Key};
use iced::widget::{canvas, container, scrollable, stack};
use iced::{window, Element, Length, Size, Subscription, Task, Theme};
use log::LevelFilter;

mod api;
mod carousel;
mod config;
mod imaging;
mod state;
mod ui;

use api::{FetchError, SearchClient};
use carousel::{CarouselLayout, ScrollFocus, SnapController};
use config::Config;
use imaging::PhotoImages;
use state::cache::QueryCache;
use state::data::{PhotoId, SearchResult};
use state::fetcher::{FetchState, Screen, WallpaperFetcher};

/// Portrait phone-sized window
const WINDOW_SIZE: Size = Size::new(412.0, 915.0);

/// Side of the loading indicator
const SPINNER_SIZE: f32 = 48.0;

/// Main application state
struct PixelWallpapers {
    fetcher: WallpaperFetcher,
    /// Search progress and, once ready, the shared photo snapshot
    fetch: FetchState,
    /// Decoded card/backdrop images by photo
    images: HashMap<PhotoId, PhotoImages>,
    layout: CarouselLayout,
    /// Written by the scroll handler, read by every card and backdrop layer
    focus: ScrollFocus,
    /// Last reported horizontal offset in pixels
    scroll_offset: f32,
    snap: SnapController,
    scrollable_id: scrollable::Id,
    loading_since: Instant,
    spinner_elapsed: f32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The search finished (or failed)
    Fetched(Result<Arc<SearchResult>, FetchError>),
    /// A photo's images were downloaded and prepared
    ImageLoaded(PhotoId, Result<PhotoImages, FetchError>),
    /// The carousel reported a new viewport
    Scrolled(scrollable::Viewport),
    /// Display refresh tick
    Frame(Instant),
    Resized(Size),
    /// Keyboard navigation by one item
    Step(isize),
}

impl PixelWallpapers {
    /// Create the screen and issue the search
    fn new(fetcher: WallpaperFetcher) -> (Self, Task<Message>) {
        let screen = PixelWallpapers {
            fetcher: fetcher.clone(),
            fetch: FetchState::Loading,
            images: HashMap::new(),
            layout: CarouselLayout::new(WINDOW_SIZE.width),
            focus: ScrollFocus::default(),
            scroll_offset: 0.0,
            snap: SnapController::default(),
            scrollable_id: scrollable::Id::unique(),
            loading_since: Instant::now(),
            spinner_elapsed: 0.0,
        };

        log::info!("🖼️ Fetching wallpapers");

        (screen, Task::perform(fetcher.fetch(), Message::Fetched))
    }

    fn photo_count(&self) -> usize {
        self.fetch.photos().len()
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Fetched(result) => {
                self.fetch = FetchState::resolve(result);

                if let Some(err) = self.fetch.error() {
                    // Still observably loading; the spinner keeps going
                    log::error!("Wallpaper search failed ({}): {}", err.kind(), err);
                    return Task::none();
                }

                log::info!("✅ Loaded {} wallpapers", self.photo_count());

                self.scroll_offset = 0.0;
                self.focus.publish(0.0);
                self.load_images()
            }
            Message::ImageLoaded(id, result) => {
                match result {
                    Ok(images) => {
                        self.images.insert(id, images);
                    }
                    Err(err) => {
                        log::warn!("Photo {} stays a placeholder ({}): {}", id, err.kind(), err);
                    }
                }
                Task::none()
            }
            Message::Scrolled(viewport) => {
                self.scroll_moved(viewport.absolute_offset().x, Instant::now());
                Task::none()
            }
            Message::Frame(now) => {
                if self.fetch.is_loading() {
                    self.spinner_elapsed = now.saturating_duration_since(self.loading_since).as_secs_f32();
                    return Task::none();
                }

                match self
                    .snap
                    .on_frame(now, self.scroll_offset, &self.layout, self.photo_count())
                {
                    Some(offset) => self.scroll_to(offset),
                    None => Task::none(),
                }
            }
            Message::Resized(size) => {
                // Keep the same item in focus under the new geometry
                let focus = self.focus.get();
                self.layout = CarouselLayout::new(size.width);
                let offset = focus * self.layout.stride();

                self.scroll_offset = offset;
                self.snap.jump_to(offset);
                self.scroll_to(offset)
            }
            Message::Step(delta) => {
                self.snap.step(
                    delta,
                    self.scroll_offset,
                    &self.layout,
                    self.photo_count(),
                    Instant::now(),
                );
                Task::none()
            }
        }
    }

    /// Record a new horizontal offset and republish the focus
    fn scroll_moved(&mut self, offset: f32, now: Instant) {
        self.scroll_offset = offset;
        self.focus.publish(self.layout.focus_for_offset(offset));
        self.snap.on_scrolled(offset, now);
    }

    /// Start downloading the images of every photo in the snapshot
    fn load_images(&self) -> Task<Message> {
        let client = self.fetcher.client();

        Task::batch(self.fetch.photos().iter().map(|photo| {
            Task::perform(
                imaging::load_photo_images(client.clone(), photo.id, photo.display_uri().to_string()),
                |(id, result)| Message::ImageLoaded(id, result),
            )
        }))
    }

    fn scroll_to(&self, offset: f32) -> Task<Message> {
        scrollable::scroll_to(
            self.scrollable_id.clone(),
            scrollable::AbsoluteOffset { x: offset, y: 0.0 },
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let photos = match self.fetch.screen() {
            Screen::Spinner => {
                let spinner = canvas(ui::spinner::Spinner::at(self.spinner_elapsed))
                    .width(Length::Fixed(SPINNER_SIZE))
                    .height(Length::Fixed(SPINNER_SIZE));

                return container(spinner).center(Length::Fill).into();
            }
            Screen::Carousel { photos } => photos,
        };

        let backdrop = ui::backdrop::view(photos, &self.images, self.focus.get());
        let carousel = ui::carousel::view(
            photos,
            &self.images,
            &self.layout,
            &self.focus,
            self.scrollable_id.clone(),
        );

        stack![backdrop, container(carousel).center_y(Length::Fill)].into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let resized = window::resize_events().map(|(_id, size)| Message::Resized(size));

        let keys = keyboard::on_key_press(|key, _modifiers| match key.as_ref() {
            Key::Named(Named::ArrowLeft) => Some(Message::Step(-1)),
            Key::Named(Named::ArrowRight) => Some(Message::Step(1)),
            _ => None,
        });

        let frames = if self.fetch.is_loading() || self.snap.needs_frames() {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        };

        Subscription::batch([resized, keys, frames])
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn init_logger() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
        return;
    }

    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("pixel_wallpapers", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    init_logger();

    let config = Config::from_env();
    // The app cannot do anything without its HTTP client
    let client = SearchClient::new(&config)
        .expect("Failed to create HTTP client. Check TLS support on this system.");

    let fetcher = WallpaperFetcher::new(client, QueryCache::default());

    iced::application("Pixel Wallpapers", PixelWallpapers::update, PixelWallpapers::view)
        .subscription(PixelWallpapers::subscription)
        .theme(PixelWallpapers::theme)
        .window_size(WINDOW_SIZE)
        .centered()
        .run_with(move || PixelWallpapers::new(fetcher))
}
