pub mod app;
pub mod input;
pub mod messages;
pub mod screen;
pub mod terminal;
