//! Terminal seam of the list browser
//!
//! The app runner never talks to crossterm directly. It pulls [`Event`]s from
//! a [`TuiLike`] and draws frames through it, so the same loop runs on a real
//! terminal ([`real::RealTui`]) and on an in-memory backend in tests
//! ([`test::TestTui`]).
//!
//! `Tick` is what moves time forward for a list view: each tick becomes a
//! `ListMsg::Tick`, which settles a pending search once its quiet period has
//! passed. The tick rate therefore bounds how late a debounced search can
//! land. `Render` only asks for a redraw, which the runner does after every
//! event anyway.

pub mod real;

use std::future::Future;
use std::pin::Pin;

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::prelude::Rect;
use serde::{Deserialize, Serialize};

pub type Frame<'a> = ratatui::Frame<'a>;

/// Input from the terminal, as the app runner consumes it
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Event {
    /// The event source started
    Init,
    /// The terminal asked the app to stop
    Quit,
    /// Reading terminal input failed; shown on the status line
    Error,
    /// The event source ended
    Closed,
    /// Debounce clock
    Tick,
    Render,
    FocusGained,
    FocusLost,
    /// Bracketed paste, appended to the search box while it has focus
    Paste(String),
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// The terminal as the app runner sees it
pub trait TuiLike: Send {
    /// Take over the terminal and start producing events
    fn enter(&mut self) -> Result<()>;
    /// Stop producing events and give the terminal back
    fn exit(&mut self) -> Result<()>;
    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;
    fn resize(&mut self, area: Rect) -> Result<()>;
    /// The next event, or `None` once the source is exhausted.
    ///
    /// The returned future may be dropped before it resolves (the runner
    /// selects on it against background messages) and must not lose an
    /// event when that happens.
    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>>;
}
