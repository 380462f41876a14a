use crate::image::Style;

pub static STYLE_VAR: &str = "APP_IMAGE_STYLE";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub style: Style,
}

impl Config {
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    /// Reads `APP_IMAGE_STYLE`, html when unset.
    pub fn from_env() -> crate::Result<Self> {
        #[cfg(debug_assertions)]
        dotenv::dotenv().ok();

        Self::from_var(std::env::var(STYLE_VAR).ok().as_deref())
    }

    fn from_var(value: Option<&str>) -> crate::Result<Self> {
        let style = match value {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => Style::default(),
        };

        log::debug!("image style: {style:?}");

        Ok(Self::new(style))
    }
}
