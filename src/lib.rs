// lib.rs - Library root for the vedit editing core and its terminal front end

pub mod buffer;
pub mod cli;
pub mod command;
pub mod config;
pub mod cursor;
pub mod editor;
pub mod key;
pub mod keymap;
pub mod mode;
pub mod motion;
pub mod search;
pub mod selection;
pub mod ui;
pub mod viewport;
