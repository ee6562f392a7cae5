use std::collections::HashMap;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::prelude::*;

use crate::action::Action;
use crate::infrastructure::config::Config;
use crate::infrastructure::tui::Frame;
use crate::model::{Command, Debouncer, Deck, Stepper};
use crate::presentation::components::Component;
use crate::presentation::markdown::{Highlighter, MarkdownRenderer, MarkdownTheme};
use crate::presentation::widgets::{SlideWidget, WelcomeStyles, WelcomeWidget};

const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// The main canvas: welcome screen at step 0, otherwise the selected slide.
///
/// Key presses go through a debouncer before they move the deck; a burst of
/// keys only acts on the last one.
#[derive(Debug)]
pub struct Keynote {
    config: Config,
    deck: Deck,
    stepper: Stepper,
    debouncer: Debouncer<KeyEvent>,
    renderer: MarkdownRenderer,
    /// Rendered slides by index, valid for `rendered_width`
    rendered: HashMap<usize, Text<'static>>,
    rendered_width: u16,
    load_error: Option<String>,
}

impl Default for Keynote {
    fn default() -> Self {
        Self {
            config: Config::default(),
            deck: Deck::default(),
            stepper: Stepper::default(),
            debouncer: Debouncer::new(DEFAULT_DEBOUNCE),
            renderer: MarkdownRenderer::default(),
            rendered: HashMap::new(),
            rendered_width: 0,
            load_error: None,
        }
    }
}

impl Keynote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> usize {
        self.stepper.step()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    fn replace_deck(&mut self, deck: Deck) {
        self.stepper = Stepper::new(deck.len());
        self.deck = deck;
        self.debouncer.clear();
        self.rendered.clear();
        self.load_error = None;
    }

    fn welcome(&self) -> WelcomeWidget {
        let styles = &self.config.styles;
        let welcome = &self.config.welcome;
        WelcomeWidget::new(
            welcome.title.clone(),
            welcome.subtitle.clone(),
            welcome.link.clone(),
            WelcomeStyles {
                logo: styles.style("welcome_logo"),
                title: styles.style("welcome_title"),
                link: styles.style("welcome_link"),
                notice: styles.style("notice"),
            },
        )
        .notice(self.load_error.clone())
    }
}

impl Component for Keynote {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        let theme = MarkdownTheme::from_styles(&config.styles);
        let highlighter = Highlighter::new(&config.keynote.code_theme);
        self.renderer = MarkdownRenderer::new(theme, highlighter);
        self.debouncer = Debouncer::new(config.keynote.debounce());
        self.rendered.clear();
        self.config = config;
        Ok(())
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        self.debouncer.push(key, None);
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick | Action::Render => {
                if let Some(key) = self.debouncer.poll(None) {
                    return Ok(Command::from_key(key).map(Action::Navigate));
                }
            }
            Action::Navigate(command) => {
                let step = self.stepper.navigate(Some(command));
                log::debug!("{command} -> step {step}/{}", self.stepper.max());
            }
            Action::SlidesLoaded(slides) => self.replace_deck(Deck::new(slides)),
            Action::LoadFailed(message) => self.load_error = Some(message),
            Action::Resize(_, _) => self.rendered.clear(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let step = self.stepper.step();
        let Some(slide) = self.deck.slide_for_step(step) else {
            f.render_widget(self.welcome(), area);
            return Ok(());
        };

        let max_width = self.config.keynote.max_width;
        let width = SlideWidget::article_width(area, max_width);
        if width != self.rendered_width {
            self.rendered.clear();
            self.rendered_width = width;
        }
        let text = self
            .rendered
            .entry(step - 1)
            .or_insert_with(|| self.renderer.render(slide, width))
            .clone();

        let widget = SlideWidget::new(text, max_width).progress(
            step,
            self.deck.len(),
            self.config.styles.style("progress"),
        );
        f.render_widget(widget, area);
        Ok(())
    }
}
