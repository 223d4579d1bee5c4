use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::KeyEventKind;
use ratatui::prelude::Rect;

use crate::{
    core::{
        msg::{ListMsg, Msg},
        state::AppState,
        translator::translate_key_event,
    },
    domain::{Listable, TableRow},
    infrastructure::{
        source::ListSource,
        tui::{Event, TuiLike},
    },
    integration::runtime::ListRuntime,
    presentation::components::Components,
};

/// Drives one list view: terminal events in, rendered frames out.
///
/// The terminal is injected so the same loop runs against crossterm or
/// against an in-memory backend in tests.
pub struct AppRunner<T, U> {
    runtime: ListRuntime<T>,
    tui: U,
    components: Components,
}

impl<T, U> AppRunner<T, U>
where
    T: Listable + TableRow,
    U: TuiLike,
{
    pub fn new(state: AppState<T>, source: Arc<dyn ListSource<T>>, tui: U) -> Self {
        Self {
            runtime: ListRuntime::new(state, source),
            tui,
            components: Components::new(),
        }
    }

    pub fn runtime(&self) -> &ListRuntime<T> {
        &self.runtime
    }

    pub fn tui(&self) -> &U {
        &self.tui
    }

    /// Run until the user quits or the terminal stops producing events
    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        self.runtime.send_msg(ListMsg::RefreshRequested);
        self.cycle();
        self.render()?;

        loop {
            tokio::select! {
                event = self.tui.next() => match event {
                    Some(event) => self.handle_event(event)?,
                    None => {
                        log::info!("event stream ended");
                        break;
                    }
                },
                received = self.runtime.recv() => {
                    if !received {
                        break;
                    }
                }
            }

            self.cycle();
            self.render()?;

            if self.runtime.state().should_quit {
                break;
            }
        }

        self.runtime.shutdown();
        self.tui.exit()?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Quit | Event::Closed => self.runtime.send_msg(Msg::Quit),
            Event::Tick => self.runtime.send_msg(ListMsg::Tick { now: None }),
            Event::Resize(w, h) => self.tui.resize(Rect::new(0, 0, w, h))?,
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                for msg in translate_key_event(key, self.runtime.state()) {
                    self.runtime.send_msg(msg);
                }
            }
            Event::Paste(text) if self.runtime.state().search_focused => {
                let value = format!("{}{}", self.runtime.state().list.search().raw(), text.trim());
                self.runtime
                    .send_msg(ListMsg::SearchInput { value, now: None });
            }
            Event::Error => self
                .runtime
                .send_msg(Msg::StatusMessageUpdated("[Error] terminal input failed".to_string())),
            // Rendering happens after every event anyway
            Event::Init
            | Event::Render
            | Event::Key(_)
            | Event::Paste(_)
            | Event::Mouse(_)
            | Event::FocusGained
            | Event::FocusLost => {}
        }
        Ok(())
    }

    fn cycle(&mut self) {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("update cycle failed: {e}");
            self.runtime
                .send_msg(Msg::StatusMessageUpdated(format!("[Error] {e}")));
        }
    }

    fn render(&mut self) -> Result<()> {
        let state = self.runtime.state();
        let components = &mut self.components;
        self.tui
            .draw(&mut |frame| components.render(frame, state))
    }
}
