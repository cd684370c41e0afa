//! Main application module for Basic Discoverer.
//!
//! Holds the application state, the [`Message`] type and the iced
//! `update` / `view` / `subscription` functions. Handler bodies live in
//! [`crate::handlers`].

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use iced::widget::{button, column, container, row, text, text_input};
use iced::{event, window, Background, Element, Event, Length, Subscription, Task, Theme};

use bd_bridge::GstDiscoveryService;
use bd_core::config::ConfigManager;
use bd_core::discovery::{DiscoveryClient, DiscoveryEvent, EventSender};
use bd_core::logging::LogBuffer;

use crate::components::{log_view, panel};
use crate::theme::{colors, font, spacing};
use crate::workers;

/// Initialization data for the application.
pub struct AppInit {
    pub config: Arc<Mutex<ConfigManager>>,
}

/// All messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    // File chooser
    BrowseFile,
    FileSelected(Option<PathBuf>),
    FileDropped(PathBuf),

    // URI entry
    UriChanged(String),
    SubmitUri,

    // Log view
    ClearLog,
    SaveFilenameChanged(String),
    SaveLog,

    // Discovery events
    EventsReady(EventSender),
    Discovery(DiscoveryEvent),
}

/// Main application state.
pub struct App {
    pub config: Arc<Mutex<ConfigManager>>,

    /// Created once the event channel is up.
    pub client: Option<DiscoveryClient<GstDiscoveryService>>,
    /// URIs submitted before the event channel was ready.
    pub pending_uris: Vec<String>,

    pub log: LogBuffer,
    pub autoscroll: bool,
    pub uri_input: String,
    pub save_filename: String,
}

impl App {
    pub fn new(init: &AppInit) -> (Self, Task<Message>) {
        (Self::from_config(Arc::clone(&init.config)), Task::none())
    }

    pub fn from_config(config: Arc<Mutex<ConfigManager>>) -> Self {
        let (uri_input, autoscroll) = {
            let cfg = config.lock().unwrap_or_else(PoisonError::into_inner);
            let settings = cfg.settings();
            (settings.paths.last_uri.clone(), settings.logging.autoscroll)
        };

        Self {
            config,
            client: None,
            pending_uris: Vec::new(),
            log: LogBuffer::new(),
            autoscroll,
            uri_input,
            save_filename: String::new(),
        }
    }

    /// Lock the shared config.
    pub fn config(&self) -> MutexGuard<'_, ConfigManager> {
        self.config.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowseFile => return self.browse_file(),
            Message::FileSelected(path) => self.handle_file_selected(path),
            Message::FileDropped(path) => self.handle_file_dropped(path),

            Message::UriChanged(text) => self.uri_input = text,
            Message::SubmitUri => self.submit_uri_input(),

            Message::ClearLog => self.clear_log(),
            Message::SaveFilenameChanged(name) => self.save_filename = name,
            Message::SaveLog => self.save_log_to_file(),

            Message::EventsReady(events) => self.handle_events_ready(events),
            Message::Discovery(event) => self.handle_discovery_event(event),
        }
        Task::none()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            Subscription::run(workers::discovery_events),
            event::listen_with(|event, _status, _window| match event {
                Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
                _ => None,
            }),
        ])
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = text("BASIC DISCOVERER")
            .size(font::HEADER)
            .color(colors::TEXT_PRIMARY);

        let file_section = panel(
            "DISCOVER FILES ON THIS SYSTEM",
            column![
                text("Choose the file to be discovered, or drop it on the window")
                    .color(colors::TEXT_PRIMARY),
                button(text("Select File")).on_press(Message::BrowseFile),
            ]
            .spacing(spacing::SM),
        );

        let uri_section = panel(
            "DISCOVER A URI",
            column![
                text("Discoverer for the URI").color(colors::TEXT_PRIMARY),
                row![
                    text_input("Enter the URI here...", &self.uri_input)
                        .on_input(Message::UriChanged)
                        .on_submit(Message::SubmitUri)
                        .width(Length::Fill),
                    button(text("Submit to Discoverer")).on_press(Message::SubmitUri),
                ]
                .spacing(spacing::SM),
            ]
            .spacing(spacing::SM),
        );

        let output_section = column![
            text("METADATA OF THE SEARCHED FILES")
                .size(font::MD)
                .color(colors::TEXT_SECONDARY),
            log_view(self.log.text(), self.autoscroll),
            button(text("Clear the discovered log")).on_press(Message::ClearLog),
        ]
        .spacing(spacing::SM)
        .height(Length::Fill);

        let save_section = panel(
            "SAVE THE DISCOVERED LOG",
            column![
                text(self.save_hint()).color(colors::TEXT_PRIMARY),
                row![
                    text_input(
                        "Enter the filename and add .txt at the end...",
                        &self.save_filename,
                    )
                    .on_input(Message::SaveFilenameChanged)
                    .on_submit(Message::SaveLog)
                    .width(Length::Fill),
                    button(text("Download the file")).on_press(Message::SaveLog),
                ]
                .spacing(spacing::SM),
            ]
            .spacing(spacing::SM),
        );

        let content = column![
            header,
            row![file_section, uri_section].spacing(spacing::MD),
            output_section,
            save_section,
        ]
        .spacing(spacing::MD)
        .padding(spacing::LG);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(colors::BACKGROUND)),
                ..Default::default()
            })
            .into()
    }

    fn save_hint(&self) -> String {
        let folder = self.config().settings().paths.save_folder.clone();
        if folder.is_empty() {
            "Save the log currently shown. It is stored in your Downloads folder.".to_string()
        } else {
            format!("Save the log currently shown. It is stored in {}.", folder)
        }
    }
}
