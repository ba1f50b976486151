// ui/mod.rs - Terminal front end: renderer, widgets and key translation

pub mod input;
pub mod renderer;
pub mod theme;
pub mod widgets;

pub use theme::Theme;
