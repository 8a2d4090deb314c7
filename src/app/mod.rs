// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the site sections.
//!
//! The `App` struct owns the two pieces of navigation state (displayed
//! language and section), the contact form, and the injected submission
//! endpoint. Section components never change this state themselves: they
//! emit events that `update` turns into calls to [`App::set_language`] and
//! [`App::set_section`].

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::ContactSubmitter;
use crate::content::Catalog;
use crate::domain::contact::ContactFormDraft;
use crate::domain::site::{LanguageTag, SectionId};
use crate::error::Result;
use crate::infrastructure::LogSubmitter;
use crate::ui::acknowledgement::Outcome;
use crate::ui::contact;
use crate::ui::layout::Layout;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Widget id of the scrollable page body.
pub(crate) const PAGE_SCROLLABLE_ID: &str = "page";

/// Root Iced application state.
pub struct App {
    catalog: Catalog,
    language: LanguageTag,
    section: SectionId,
    /// Whether the compact navigation menu is open. Owned by the header.
    menu_open: bool,
    layout: Layout,
    contact: contact::State,
    /// Outcome of the last submission while its dialog is displayed.
    acknowledgement: Option<Outcome>,
    submitter: Arc<dyn ContactSubmitter>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("language", &self.language)
            .field("section", &self.section)
            .field("menu_open", &self.menu_open)
            .field("layout", &self.layout)
            .field("acknowledgement", &self.acknowledgement)
            .finish_non_exhaustive()
    }
}

/// Startup choices resolved from the CLI, the config file and the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Startup {
    pub language: LanguageTag,
    pub section: SectionId,
    pub layout: Layout,
}

impl Default for Startup {
    fn default() -> Self {
        Self {
            language: config::DEFAULT_LANGUAGE,
            section: config::DEFAULT_SECTION,
            layout: Layout::default(),
        }
    }
}

impl Startup {
    /// Resolves startup choices. CLI flags win over the config file, which
    /// wins over the defaults.
    ///
    /// An unsupported language is ignored with a warning. An unknown section
    /// identifier selects the home section.
    #[must_use]
    pub fn resolve(flags: &Flags, config: &config::Config) -> Self {
        let cli_language = flags.lang.as_deref().and_then(|code| {
            let language = LanguageTag::from_code(code);
            if language.is_none() {
                tracing::warn!(code, "unsupported language requested, ignoring");
            }
            language
        });
        let language = cli_language
            .or_else(|| config.language())
            .unwrap_or(config::DEFAULT_LANGUAGE);

        let cli_section = flags.section.as_deref().map(|id| {
            if SectionId::from_id(id).is_none() {
                tracing::warn!(id, "unknown section requested, showing home");
            }
            SectionId::resolve(id)
        });
        let section = cli_section
            .or_else(|| config.start_section())
            .unwrap_or(config::DEFAULT_SECTION);

        let (width, _) = config.window_size();

        Self {
            language,
            section,
            layout: Layout::from_width(width as f32),
        }
    }
}

/// Builds the window settings
#[must_use]
pub fn window_settings(config: &config::Config) -> window::Settings {
    let (width, height) = config.window_size();

    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Fails if the embedded translations are incomplete or the windowing
/// runtime cannot start.
pub fn run(flags: Flags) -> Result<()> {
    use std::cell::RefCell;

    let (config, config_warning) = config::load(flags.config_dir.as_ref().map(PathBuf::from));
    if let Some(warning) = config_warning {
        tracing::warn!("{warning}");
    }

    let startup = Startup::resolve(&flags, &config);
    tracing::info!(
        language = %startup.language,
        section = %startup.section,
        "starting"
    );

    let catalog = Catalog::embedded()?;
    let app = App::new(catalog, startup, Arc::new(LogSubmitter));

    // Wrap state in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming it once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(app));
    let boot = move || {
        let app = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        (app, Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings(&config))
        .subscription(App::subscription)
        .run()?;

    Ok(())
}

impl App {
    /// Creates the application state.
    #[must_use]
    pub fn new(catalog: Catalog, startup: Startup, submitter: Arc<dyn ContactSubmitter>) -> Self {
        Self {
            catalog,
            language: startup.language,
            section: startup.section,
            menu_open: false,
            layout: startup.layout,
            contact: contact::State::default(),
            acknowledgement: None,
            submitter,
        }
    }

    #[must_use]
    pub fn language(&self) -> LanguageTag {
        self.language
    }

    #[must_use]
    pub fn section(&self) -> SectionId {
        self.section
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn draft(&self) -> &ContactFormDraft {
        self.contact.draft()
    }

    /// Outcome shown by the acknowledgement dialog, if it is open.
    #[must_use]
    pub fn acknowledgement(&self) -> Option<Outcome> {
        self.acknowledgement
    }

    /// Localized content currently on display.
    #[must_use]
    pub fn content(&self) -> &crate::content::SiteContent {
        self.catalog.get(self.language)
    }

    /// Switches the displayed language.
    pub fn set_language(&mut self, language: LanguageTag) {
        update::set_language(&mut self.context(), language);
    }

    /// Switches the displayed section.
    pub fn set_section(&mut self, section: SectionId) -> Task<Message> {
        update::set_section(&mut self.context(), section)
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            language: &mut self.language,
            section: &mut self.section,
            menu_open: &mut self.menu_open,
            layout: &mut self.layout,
            contact: &mut self.contact,
            acknowledgement: &mut self.acknowledgement,
            submitter: self.submitter.as_ref(),
        }
    }

    fn title(&self) -> String {
        self.content().header.company.clone()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_resize_subscription()
    }

    /// Processes one message. The only entry point for state changes.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.context();

        match message {
            Message::Header(header_message) => update::handle_header_message(&mut ctx, header_message),
            Message::Hero(hero_message) => update::handle_hero_message(&mut ctx, hero_message),
            Message::Services(services_message) => {
                update::handle_services_message(&mut ctx, services_message)
            }
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, contact_message)
            }
            Message::Acknowledgement(dialog_message) => {
                update::handle_acknowledgement_message(&mut ctx, dialog_message)
            }
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
        }
    }

    /// Renders the page.
    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            content: self.content(),
            section: self.section,
            menu_open: self.menu_open,
            layout: self.layout,
            contact: &self.contact,
            acknowledgement: self.acknowledgement,
        })
    }
}
