#![warn(warnings)]

mod config;
mod error;
mod filters;
mod image;

pub use config::{Config, STYLE_VAR};
pub use error::Error;
pub use filters::{register, ImageFilter, ImageFunction};
pub use image::{render, render_markdown, ImageHelper, ImageReference, Style};

pub type Result<T = ()> = std::result::Result<T, Error>;
