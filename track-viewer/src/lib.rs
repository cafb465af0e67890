#![deny(rust_2018_idioms)]

//! The view layer: turns a form submission into a rendered vessel track map.

pub mod cli;
pub mod error;
pub mod render;
pub mod settings;
pub mod startup;
pub mod view;
