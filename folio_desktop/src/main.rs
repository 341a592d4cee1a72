//! Folio Desktop - entry point for the Iced portfolio page.

use folio_core::constants::{LOADING_SCREEN_MS, TICK_INTERVAL_MS};
use folio_core::contact::form::{MSG_FAILED, MSG_SENT};
use folio_core::contact::feedback_for;
use folio_core::content::{
    nav_sections, ABOUT_PARAGRAPHS, EXPERIENCE, HERO_TAGLINE, NAV_LINKS, OWNER_NAME, PROJECTS, SKILLS,
};
use folio_core::utils::logging::init_logging;
use folio_core::{
    Config, ContactForm, ElementBounds, EmailJsRelay, EmailRelay, FileStore,
    FolioError, IpApiLocator, MemoryStore, NotifyOutcome, PreferenceStore, RelayError,
    ScrollSectionTracker, ThemePreference, ToastKind, ToastSlot, ViewportMetrics, VisitorNotifier,
};
use folio_desktop::canvas::{card_canvas_size, ConfettiOverlay, ParticleBackdrop, TiltCardCanvas};
use folio_desktop::styles::{
    card_style, icon_button_style, input_style, nav_bar_style, nav_link_style, primary_button_style,
    section_style, toast_style,
};
use folio_desktop::{
    app_theme, client_details, palette_from_mode, ConfettiState, HeroState, PaletteColors, ParticleBackdropState, SectionLayout,
    TiltCardState, CARDS_PER_ROW, CARD_CANVAS_MARGIN, CARD_HEIGHT, CARD_ROW_SPACING, CARD_WIDTH,
    CONTENT_MAX_WIDTH, HERO_HEIGHT, HERO_SECTION, NAV_HEIGHT, TOAST_WIDTH, WINDOW_HEIGHT, WINDOW_WIDTH,
};

use chrono::Datelike;
use iced::alignment::{Horizontal, Vertical};
use iced::time::{self, Duration, Instant};
use iced::widget::canvas::Canvas;
use iced::widget::scrollable::{AbsoluteOffset, Viewport};
use iced::widget::{
    button, column, container, mouse_area, progress_bar, row, scrollable, stack, text, text_input,
    Space, TextInput,
};
use iced::{Element, Length, Padding, Point, Size, Subscription, Task, Theme};
use std::sync::Arc;

fn page_id() -> iced::widget::Id {
    iced::widget::Id::new("page")
}

/// Application state.
struct App {
    config: Config,
    started: Instant,
    /// Time since launch, as of the last tick
    now: Duration,
    last_tick: Option<Instant>,
    loading: bool,
    window: Size,
    scroll_y: f32,
    layout: SectionLayout,
    tracker: ScrollSectionTracker,
    backdrop: ParticleBackdropState,
    hero: HeroState,
    cards: Vec<TiltCardState>,
    confetti: ConfettiState,
    form: ContactForm,
    toast: ToastSlot,
    theme: ThemePreference,
    relay: Arc<dyn EmailRelay>,
    /// Taken once the screen size is known
    notifier: Option<VisitorNotifier>,
}

#[derive(Debug, Clone)]
enum Message {
    Tick(Instant),
    Resized(Size),
    Scrolled(Viewport),
    NavClicked(&'static str),
    ScrollTop,
    ToggleTheme,
    CardMoved(usize, Point),
    CardLeft(usize),
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    Submit,
    Submitted(Result<(), Arc<RelayError>>),
    ScreenMeasured(Option<Size>),
    VisitorNotified(NotifyOutcome),
    DismissToast,
}

impl App {
    fn init() -> (Self, Task<Message>) {
        if let Err(err) = init_logging() {
            eprintln!("{err}");
        }

        let config = Config::load_or_default().unwrap_or_else(|err| {
            tracing::warn!("falling back to default config: {err:#}");
            Config::default()
        });
        if !config.relay.is_configured() {
            tracing::warn!("email relay is not configured; contact messages will fail");
        }

        let preferences: Arc<dyn PreferenceStore> = match FileStore::open(config.preferences_file()) {
            Ok(store) => Arc::new(store),
            Err(err) => {
                tracing::warn!("preferences unavailable, theme will not persist: {err}");
                Arc::new(MemoryStore::new())
            }
        };

        let relay: Arc<dyn EmailRelay> = Arc::new(EmailJsRelay::from_config(&config.relay));
        let notifier = VisitorNotifier::new(
            Arc::new(IpApiLocator::from_config(&config.geolocation)),
            Arc::clone(&relay),
            Arc::new(MemoryStore::new()),
            config.relay.visitor_template_id.clone(),
        )
        .enabled(config.visitor_alerts);

        let measure = iced::window::oldest()
            .then(|id| match id {
                Some(id) => iced::window::monitor_size(id),
                None => Task::done(None),
            })
            .map(Message::ScreenMeasured);

        let app = Self {
            config,
            started: Instant::now(),
            now: Duration::ZERO,
            last_tick: None,
            loading: true,
            window: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            scroll_y: 0.0,
            layout: SectionLayout::default(),
            tracker: ScrollSectionTracker::new(nav_sections()),
            backdrop: ParticleBackdropState::default(),
            hero: HeroState::default(),
            cards: PROJECTS.iter().map(|_| TiltCardState::default()).collect(),
            confetti: ConfettiState::default(),
            form: ContactForm::new(),
            toast: ToastSlot::default(),
            theme: ThemePreference::load(preferences),
            relay,
            notifier: Some(notifier),
        };
        (app, measure)
    }

    fn hero_viewport(&self) -> ViewportMetrics {
        ViewportMetrics::new(self.window.width.max(0.0) as u32, HERO_HEIGHT as u32)
    }

    /// Splash is over: start the page effects.
    fn finish_loading(&mut self) {
        self.loading = false;
        self.backdrop.mount(self.hero_viewport());
        self.tracker.mount(self.scroll_y, &self.layout.at(self.scroll_y));
        self.hero.start(self.now);
        tracing::debug!("page mounted");
    }

    fn scroll_to(&self, y: f32) -> Task<Message> {
        iced::widget::operation::scroll_to(page_id(), AbsoluteOffset { x: 0.0, y })
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(instant) => {
                let dt = self
                    .last_tick
                    .map_or(Duration::ZERO, |last| instant.saturating_duration_since(last));
                self.last_tick = Some(instant);
                self.now = instant.saturating_duration_since(self.started);

                if self.loading {
                    if self.now >= Duration::from_millis(LOADING_SCREEN_MS) {
                        self.finish_loading();
                    }
                    return Task::none();
                }

                if self.backdrop.is_mounted() {
                    self.backdrop.update();
                }
                self.hero.update(self.now);
                for card in &mut self.cards {
                    card.update(dt);
                }
                self.confetti.update();
                self.toast.tick(self.now);
            }
            Message::Resized(size) => {
                self.window = size;
                if self.backdrop.is_mounted() {
                    self.backdrop.resize(self.hero_viewport());
                }
            }
            Message::Scrolled(viewport) => {
                self.scroll_y = viewport.absolute_offset().y;
                self.tracker.on_scroll(self.scroll_y, &self.layout.at(self.scroll_y));

                if !self.loading {
                    let visible = self.layout.hero_visible(self.scroll_y);
                    if visible && !self.backdrop.is_mounted() {
                        self.backdrop.mount(self.hero_viewport());
                    } else if !visible && self.backdrop.is_mounted() {
                        self.backdrop.unmount();
                    }
                }
            }
            Message::NavClicked(id) => {
                if let Some(target) =
                    self.tracker
                        .nav_scroll_target(id, self.scroll_y, &self.layout.at(self.scroll_y))
                {
                    return self.scroll_to(target);
                }
            }
            Message::ScrollTop => return self.scroll_to(0.0),
            Message::ToggleTheme => match self.theme.toggle() {
                Ok(mode) => tracing::debug!(%mode, "theme toggled"),
                Err(err) => tracing::warn!("theme preference not saved: {err}"),
            },
            Message::CardMoved(index, position) => {
                let bounds =
                    ElementBounds::new(CARD_CANVAS_MARGIN, CARD_CANVAS_MARGIN, CARD_WIDTH, CARD_HEIGHT);
                if let Some(card) = self.cards.get_mut(index) {
                    card.pointer_moved(position, bounds);
                }
            }
            Message::CardLeft(index) => {
                if let Some(card) = self.cards.get_mut(index) {
                    card.pointer_left();
                }
            }
            Message::NameChanged(value) => self.form.name = value,
            Message::EmailChanged(value) => self.form.email = value,
            Message::MessageChanged(value) => self.form.message = value,
            Message::Submit => match self.form.begin_submit() {
                Ok(params) => {
                    let relay = Arc::clone(&self.relay);
                    let template_id = self.config.relay.contact_template_id.clone();
                    return Task::future(async move {
                        Message::Submitted(relay.send(&template_id, params).await.map_err(Arc::new))
                    });
                }
                Err(err) => {
                    if let Some((kind, text)) = feedback_for(&Err(FolioError::from(err))) {
                        self.toast.show(kind, text, self.now);
                    }
                }
            },
            Message::Submitted(result) => {
                self.form.finish_submit(&result);
                match result {
                    Ok(()) => {
                        self.toast.show(ToastKind::Success, MSG_SENT, self.now);
                        self.confetti.fire(ViewportMetrics::new(
                            self.window.width.max(0.0) as u32,
                            self.window.height.max(0.0) as u32,
                        ));
                    }
                    Err(err) => {
                        tracing::warn!("contact message failed: {err}");
                        self.toast.show(ToastKind::Error, MSG_FAILED, self.now);
                    }
                }
            }
            Message::ScreenMeasured(monitor) => {
                if let Some(notifier) = self.notifier.take() {
                    let client = client_details(monitor, self.window);
                    return Task::future(async move {
                        Message::VisitorNotified(notifier.notify_once(&client).await)
                    });
                }
            }
            Message::VisitorNotified(outcome) => tracing::debug!(?outcome, "visitor notification finished"),
            Message::DismissToast => self.toast.dismiss(),
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        let ticks = time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick);
        let resizes = iced::window::resize_events().map(|(_, size)| Message::Resized(size));
        Subscription::batch(vec![ticks, resizes])
    }

    fn theme(&self) -> Theme {
        app_theme(self.theme.mode())
    }

    fn palette(&self) -> PaletteColors {
        palette_from_mode(self.theme.mode())
    }

    fn view(&self) -> Element<'_, Message> {
        let pal = self.palette();
        if self.loading {
            return self.loading_view(pal);
        }

        let page = column![
            self.hero_section(pal),
            self.about_section(pal),
            self.skills_section(pal),
            self.experience_section(pal),
            self.projects_section(pal),
            self.contact_section(pal),
            self.footer(pal),
        ]
        .width(Length::Fill);

        let page = scrollable(page)
            .id(page_id())
            .on_scroll(Message::Scrolled)
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layers: Vec<Element<'_, Message>> = vec![page.into(), self.nav_bar(pal)];
        if self.tracker.state().show_scroll_top {
            layers.push(
                container(
                    button(text("↑").size(18))
                        .on_press(Message::ScrollTop)
                        .padding([10, 14])
                        .style(icon_button_style(pal)),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Bottom)
                .padding(24)
                .into(),
            );
        }
        if self.confetti.is_visible() {
            layers.push(
                Canvas::new(ConfettiOverlay::<Message>::new(&self.confetti))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into(),
            );
        }
        if let Some(toast) = self.toast_layer(pal) {
            layers.push(toast);
        }

        stack(layers).into()
    }

    fn loading_view(&self, pal: PaletteColors) -> Element<'_, Message> {
        let progress = (self.now.as_secs_f32() * 1000.0 / LOADING_SCREEN_MS as f32).min(1.0);
        container(
            column![
                text(OWNER_NAME).size(36).color(pal.text),
                text("Loading portfolio...").size(14).color(pal.muted),
                container(progress_bar(0.0..=1.0, progress)).width(Length::Fixed(220.0)),
            ]
            .spacing(16)
            .align_x(Horizontal::Center),
        )
        .center(Length::Fill)
        .style(section_style(pal, false))
        .into()
    }

    fn nav_bar(&self, pal: PaletteColors) -> Element<'_, Message> {
        let state = self.tracker.state();
        let links = NAV_LINKS.iter().fold(row![].spacing(4), |links, link| {
            let active = state.active.as_deref() == Some(link.section);
            links.push(
                button(text(link.label).size(14))
                    .on_press(Message::NavClicked(link.section))
                    .padding([6, 12])
                    .style(nav_link_style(pal, active)),
            )
        });

        let brand = button(text(OWNER_NAME).size(18).color(pal.text))
            .on_press(Message::ScrollTop)
            .padding([6, 8])
            .style(nav_link_style(pal, false));
        let theme_label = match self.theme.mode() {
            folio_core::ThemeMode::Dark => "☀",
            folio_core::ThemeMode::Light => "☾",
        };
        let toggle = button(text(theme_label).size(16))
            .on_press(Message::ToggleTheme)
            .padding([6, 12])
            .style(icon_button_style(pal));

        let bar = container(
            row![brand, Space::new().width(Length::Fill), links, toggle]
                .spacing(12)
                .align_y(Vertical::Center),
        )
        .padding([0, 20])
        .height(Length::Fixed(NAV_HEIGHT))
        .align_y(Vertical::Center)
        .max_width(CONTENT_MAX_WIDTH)
        .style(nav_bar_style(pal, state.nav_condensed));

        container(bar)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(Padding::new(12.0).bottom(0.0))
            .into()
    }

    fn toast_layer(&self, pal: PaletteColors) -> Option<Element<'_, Message>> {
        let toast = self.toast.current()?;
        let icon = match toast.kind {
            ToastKind::Success => "✓",
            ToastKind::Error => "!",
        };
        let body = container(
            row![
                text(icon).size(16),
                text(toast.message.as_str()).size(14).width(Length::Fill),
                button(text("×").size(14))
                    .on_press(Message::DismissToast)
                    .padding([2, 8])
                    .style(icon_button_style(pal)),
            ]
            .spacing(12)
            .align_y(Vertical::Center),
        )
        .padding(14)
        .width(Length::Fixed(TOAST_WIDTH))
        .style(toast_style(pal, toast.kind));

        Some(
            container(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Top)
                .padding(Padding::new(24.0).top(NAV_HEIGHT + 24.0))
                .into(),
        )
    }

    /// Full-width band at the fixed height the scroll layout expects.
    fn section<'a>(
        &self,
        id: &'static str,
        pal: PaletteColors,
        alternate: bool,
        content: impl Into<Element<'a, Message>>,
    ) -> Element<'a, Message> {
        container(container(content).max_width(CONTENT_MAX_WIDTH).padding([0, 24]))
            .width(Length::Fill)
            .height(Length::Fixed(self.layout.height_of(id)))
            .align_x(Horizontal::Center)
            .padding(Padding::ZERO.top(NAV_HEIGHT + 24.0))
            .style(section_style(pal, alternate))
            .into()
    }

    fn heading(title: &str, pal: PaletteColors) -> Element<'_, Message> {
        column![
            text(title).size(32).color(pal.text),
            container(Space::new().width(Length::Fixed(64.0)).height(Length::Fixed(3.0)))
                .style(move |_: &Theme| container::Style {
                    background: Some(pal.accent.into()),
                    ..Default::default()
                }),
        ]
        .spacing(10)
        .into()
    }

    fn hero_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let backdrop = Canvas::new(ParticleBackdrop::<Message>::new(&self.backdrop, pal))
            .width(Length::Fill)
            .height(Length::Fixed(HERO_HEIGHT));

        let mut intro = column![
            text(self.hero.display_text(self.now)).size(52).color(pal.text),
            text(HERO_TAGLINE).size(20).color(pal.muted),
            row![
                button(text("View Projects").size(15))
                    .on_press(Message::NavClicked("projects"))
                    .padding([12, 22])
                    .style(primary_button_style(pal)),
                button(text("Contact Me").size(15))
                    .on_press(Message::NavClicked("contact"))
                    .padding([12, 22])
                    .style(icon_button_style(pal)),
            ]
            .spacing(16),
        ]
        .spacing(20)
        .align_x(Horizontal::Center);

        if self.hero.show_scroll_hint {
            intro = intro.push(Space::new().height(Length::Fixed(40.0)));
            intro = intro.push(text("Scroll down ↓").size(13).color(pal.muted));
        }

        let foreground = container(intro).center(Length::Fill);
        container(stack![backdrop, foreground])
            .width(Length::Fill)
            .height(Length::Fixed(self.layout.height_of(HERO_SECTION)))
            .into()
    }

    fn about_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let paragraphs = ABOUT_PARAGRAPHS.iter().fold(column![].spacing(16), |col, paragraph| {
            col.push(text(*paragraph).size(17).color(pal.muted))
        });
        self.section(
            "about",
            pal,
            true,
            column![Self::heading("About Me", pal), paragraphs].spacing(32),
        )
    }

    fn skills_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let groups = SKILLS.iter().fold(row![].spacing(20), |groups, group| {
            let items = group.items.iter().fold(column![].spacing(8), |items, item| {
                items.push(text(format!("• {item}")).size(15).color(pal.muted))
            });
            groups.push(
                container(column![text(group.category).size(18).color(pal.text), items].spacing(14))
                    .padding(20)
                    .width(Length::FillPortion(1))
                    .style(card_style(pal)),
            )
        });
        self.section(
            "skills",
            pal,
            false,
            column![Self::heading("Skills", pal), groups].spacing(32),
        )
    }

    fn experience_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let entries = EXPERIENCE.iter().fold(column![].spacing(20), |entries, entry| {
            let highlights = entry.highlights.iter().fold(column![].spacing(6), |list, line| {
                list.push(text(format!("• {line}")).size(15).color(pal.muted))
            });
            entries.push(
                container(
                    column![
                        text(entry.role).size(20).color(pal.text),
                        text(entry.organisation).size(15).color(pal.accent),
                        highlights,
                    ]
                    .spacing(8),
                )
                .padding(20)
                .width(Length::Fill)
                .style(card_style(pal)),
            )
        });
        self.section(
            "experience",
            pal,
            true,
            column![Self::heading("Experience", pal), entries].spacing(32),
        )
    }

    fn projects_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let (canvas_w, canvas_h) = card_canvas_size();
        let grid = PROJECTS
            .chunks(CARDS_PER_ROW)
            .enumerate()
            .fold(column![].spacing(CARD_ROW_SPACING), |grid, (row_index, projects)| {
                let cards = projects.iter().enumerate().fold(
                    row![].spacing(CARD_ROW_SPACING),
                    |cards, (offset, project)| {
                        let index = row_index * CARDS_PER_ROW + offset;
                        let Some(state) = self.cards.get(index) else {
                            return cards;
                        };
                        let canvas = Canvas::new(TiltCardCanvas::<Message>::new(state, project, pal))
                            .width(Length::Fixed(canvas_w))
                            .height(Length::Fixed(canvas_h));
                        cards.push(
                            mouse_area(canvas)
                                .on_move(move |position| Message::CardMoved(index, position))
                                .on_exit(Message::CardLeft(index)),
                        )
                    },
                );
                grid.push(cards)
            });

        self.section(
            "projects",
            pal,
            false,
            column![Self::heading("Projects", pal), grid]
                .spacing(32)
                .align_x(Horizontal::Center),
        )
    }

    fn contact_section(&self, pal: PaletteColors) -> Element<'_, Message> {
        let submitting = self.form.is_submitting();

        let form = container(
            column![
                text("Have a project in mind or just want to say hello?")
                    .size(16)
                    .color(pal.muted),
                form_input("Your name", &self.form.name, Message::NameChanged, pal),
                form_input("Your email", &self.form.email, Message::EmailChanged, pal),
                form_input("Your message", &self.form.message, Message::MessageChanged, pal)
                    .on_submit(Message::Submit),
                button(text(if submitting { "Sending..." } else { "Send Message" }).size(15))
                    .on_press_maybe((!submitting).then_some(Message::Submit))
                    .padding([12, 22])
                    .style(primary_button_style(pal)),
            ]
            .spacing(16),
        )
        .padding(28)
        .max_width(640.0)
        .style(card_style(pal));

        self.section(
            "contact",
            pal,
            true,
            column![Self::heading("Get In Touch", pal), form].spacing(32),
        )
    }

    fn footer(&self, pal: PaletteColors) -> Element<'_, Message> {
        container(
            text(format!("© {} {OWNER_NAME}. All rights reserved.", chrono::Local::now().year()))
                .size(13)
                .color(pal.muted),
        )
        .center_x(Length::Fill)
        .height(Length::Fixed(folio_desktop::FOOTER_HEIGHT))
        .align_y(Vertical::Center)
        .style(section_style(pal, false))
        .into()
    }
}

fn form_input<'a>(
    placeholder: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
    pal: PaletteColors,
) -> TextInput<'a, Message> {
    text_input(placeholder, value)
        .on_input(on_input)
        .padding(12)
        .size(15)
        .style(input_style(pal))
}

fn main() -> iced::Result {
    iced::application(App::init, App::update, App::view)
        .title("Folio")
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .run()
}
