//! Interactive terminal UI: a sidebar of pages mirroring the CLI
//! commands, with a form editor for add/update and a confirm modal for
//! delete.

pub mod app;
pub mod editor;
pub mod view;

pub use app::run;
