/// An image to embed in generated markup.
///
/// `alt` and `title` default to empty strings. Nothing is validated, the
/// `path` is copied as is into the output.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde_derive::Deserialize)]
pub struct ImageReference {
    pub path: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub title: String,
}

impl ImageReference {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            ..Self::default()
        }
    }

    pub fn with_alt(mut self, alt: &str) -> Self {
        self.alt = alt.to_string();
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn render(&self, style: Style) -> String {
        style.render(self)
    }
}

impl std::fmt::Display for ImageReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(Style::Html))
    }
}

/// Output form of an image directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// `<img src="PATH" />`, `alt` and `title` are dropped.
    Html,
    /// `![ALT](PATH "TITLE")`.
    Markdown,
}

impl Default for Style {
    fn default() -> Self {
        Style::Html
    }
}

impl Style {
    pub fn render(self, image: &ImageReference) -> String {
        log::trace!("render {:?} as {self:?}", image.path);

        match self {
            Style::Html => render(&image.path, &image.alt, &image.title),
            Style::Markdown => render_markdown(&image.path, &image.alt, &image.title),
        }
    }
}

impl std::str::FromStr for Style {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Style::Html),
            "markdown" | "md" => Ok(Style::Markdown),
            _ => Err(crate::Error::UnknownStyle(s.to_string())),
        }
    }
}

/// Renders an html image tag.
///
/// `alt` and `title` are accepted but not part of the output. Use
/// [`render_markdown`] (or [`Style::Markdown`]) to keep them.
///
/// With `alt` and `title` left out, this is `ImageReference::new(path).to_string()`.
pub fn render(path: &str, _alt: &str, _title: &str) -> String {
    format!("<img src=\"{path}\" />")
}

pub fn render_markdown(path: &str, alt: &str, title: &str) -> String {
    format!("![{alt}]({path} \"{title}\")")
}

/// Gives the host type an `image` helper.
///
/// ```
/// use img_directive::ImageHelper;
///
/// struct Slideshow;
///
/// impl ImageHelper for Slideshow {}
///
/// assert_eq!(Slideshow.image("logo.png", "", ""), "<img src=\"logo.png\" />");
/// ```
pub trait ImageHelper {
    fn image_style(&self) -> Style {
        Style::default()
    }

    fn image(&self, path: &str, alt: &str, title: &str) -> String {
        ImageReference::new(path)
            .with_alt(alt)
            .with_title(title)
            .render(self.image_style())
    }
}
