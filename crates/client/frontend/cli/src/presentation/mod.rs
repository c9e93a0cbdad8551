//! Terminal presentation: event loop, terminal lifecycle, and widgets.

pub mod event_loop;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use event_loop::EventLoop;
