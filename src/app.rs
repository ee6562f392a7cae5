use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::prelude::Rect;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::Level;

use crate::{
    action::Action,
    infrastructure::{
        config::Config,
        deck_loader::DeckLoader,
        tui::{Event, TuiLike},
    },
    presentation::components::{Component, Keynote, Timer},
};

const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// Reads the deck and turns the outcome into an action.
async fn load_deck(loader: &DeckLoader) -> Action {
    match loader.load().await {
        Ok(deck) => Action::SlidesLoaded(deck.into_slides()),
        Err(e) => {
            log::error!("Failed to load slides: {e:?}");
            Action::LoadFailed(format!("{e:#}"))
        }
    }
}

/// The application loop: terminal events in, actions through the
/// components, frames out.
pub struct App<T: TuiLike> {
    config: Config,
    tui: T,
    loader: DeckLoader,
    /// The latest reload; earlier ones are aborted and never applied
    reload: Option<JoinHandle<Action>>,
    components: Vec<Box<dyn Component>>,
    should_quit: bool,
    should_suspend: bool,
    last_tick_key_events: Vec<KeyEvent>,
    action_tx: UnboundedSender<Action>,
    action_rx: UnboundedReceiver<Action>,
    cancellation_token: CancellationToken,
}

impl<T: TuiLike> App<T> {
    pub fn new(config: Config, tui: T) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let loader = DeckLoader::new(config.keynote.slides_dir.clone());
        Self {
            config,
            tui,
            loader,
            reload: None,
            components: vec![Box::new(Keynote::new()), Box::new(Timer::new())],
            should_quit: false,
            should_suspend: false,
            last_tick_key_events: Vec::new(),
            action_tx,
            action_rx,
            cancellation_token: CancellationToken::new(),
        }
    }

    pub fn tui(&self) -> &T {
        &self.tui
    }

    /// Sender for injecting actions from outside the loop.
    pub fn action_sender(&self) -> UnboundedSender<Action> {
        self.action_tx.clone()
    }

    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;

        for component in self.components.iter_mut() {
            component.register_action_handler(self.action_tx.clone())?;
        }

        for component in self.components.iter_mut() {
            component.register_config_handler(self.config.clone())?;
        }

        let size = self.tui.size()?;
        for component in self.components.iter_mut() {
            component.init(size)?;
        }

        self.action_tx.send(load_deck(&self.loader).await)?;
        self.spawn_clock();

        loop {
            match self.tui.next().await {
                Some(e) => self.handle_event(e)?,
                None => self.action_tx.send(Action::Quit)?,
            }

            self.collect_reload().await?;
            self.handle_actions()?;

            if self.should_suspend {
                self.tui.suspend()?;
                self.action_tx.send(Action::Resume)?;
                self.tui.resume()?;
            } else if self.should_quit {
                break;
            }
        }

        self.cancellation_token.cancel();
        if let Some(reload) = self.reload.take() {
            reload.abort();
        }
        self.tui.exit()?;
        Ok(())
    }

    fn handle_event(&mut self, e: Event) -> Result<()> {
        let action_tx = self.action_tx.clone();
        match &e {
            Event::Closed => action_tx.send(Action::Quit)?,
            Event::Error(message) => log::warn!("Failed to read terminal input: {message}"),
            Event::Tick => action_tx.send(Action::Tick)?,
            Event::Render | Event::FocusGained => action_tx.send(Action::Render)?,
            Event::Resize(x, y) => action_tx.send(Action::Resize(*x, *y))?,
            Event::Key(key) => {
                if let Some(action) = self.config.keybindings.get(&vec![*key]) {
                    log::info!("Got action: {action:?}");
                    action_tx.send(action.clone())?;
                } else {
                    // If the key was not handled as a single key action,
                    // then consider it for multi-key combinations.
                    self.last_tick_key_events.push(*key);

                    if let Some(action) = self.config.keybindings.get(&self.last_tick_key_events)
                    {
                        log::info!("Got action: {action:?}");
                        action_tx.send(action.clone())?;
                    }
                }
            }
        }

        for component in self.components.iter_mut() {
            if let Some(action) = component.handle_events(Some(e.clone()))? {
                action_tx.send(action)?;
            }
        }
        Ok(())
    }

    fn handle_actions(&mut self) -> Result<()> {
        while let Ok(action) = self.action_rx.try_recv() {
            if !matches!(action, Action::Tick | Action::Render | Action::ClockTick) {
                log::debug!("{action:?}");
            }
            match action {
                Action::Tick => {
                    self.last_tick_key_events.drain(..);
                }
                Action::Quit => self.should_quit = true,
                Action::Suspend => self.should_suspend = true,
                Action::Resume => self.should_suspend = false,
                Action::Resize(w, h) => {
                    self.tui.resize(Rect::new(0, 0, w, h))?;
                    self.render()?;
                }
                Action::Render => self.render()?,
                Action::Reload => self.spawn_reload(),
                Action::SlidesLoaded(ref slides) => {
                    crate::trace_dbg!(level: Level::INFO, slides.len());
                }
                Action::LoadFailed(ref message) | Action::Error(ref message) => {
                    log::error!("{message}");
                }
                _ => {}
            }
            for component in self.components.iter_mut() {
                if let Some(action) = component.update(action.clone())? {
                    self.action_tx.send(action)?
                };
            }
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let action_tx = self.action_tx.clone();
        let components = &mut self.components;
        self.tui.draw(&mut |f| {
            for component in components.iter_mut() {
                let area = f.area();
                if let Err(e) = component.draw(f, area) {
                    let _ = action_tx.send(Action::Error(format!("Failed to draw: {e:?}")));
                }
            }
        })
    }

    /// Sends `ClockTick` once per second until the app stops.
    fn spawn_clock(&self) {
        let action_tx = self.action_tx.clone();
        let cancellation_token = self.cancellation_token.clone();
        tokio::spawn(async move {
            let mut interval = time::interval(CLOCK_PERIOD);
            // the first tick completes immediately
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = cancellation_token.cancelled() => break,
                    _ = interval.tick() => {
                        if action_tx.send(Action::ClockTick).is_err() {
                            break;
                        }
                    }
                }
            }
        });
    }

    fn spawn_reload(&mut self) {
        if let Some(previous) = self.reload.take() {
            log::info!("Aborting the previous reload");
            previous.abort();
        }
        let loader = self.loader.clone();
        log::info!("Reloading slides from {}", loader.dir().display());
        self.reload = Some(tokio::spawn(async move { load_deck(&loader).await }));
    }

    /// Applies the result of the latest reload once it has finished.
    async fn collect_reload(&mut self) -> Result<()> {
        if !self.reload.as_ref().is_some_and(JoinHandle::is_finished) {
            return Ok(());
        }
        if let Some(reload) = self.reload.take() {
            match reload.await {
                Ok(action) => self.action_tx.send(action)?,
                Err(e) => log::error!("Reload task failed: {e}"),
            }
        }
        Ok(())
    }
}
