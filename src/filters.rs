use crate::image::{ImageHelper, ImageReference, Style};
use std::collections::HashMap;
use tera::Value;

/// `{{ image(path="logo.png", alt="Logo", title="Our logo") }}`
pub struct ImageFunction {
    pub style: Style,
}

impl tera::Function for ImageFunction {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let args = args
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let image: ImageReference = tera::from_value(Value::Object(args))
            .map_err(|err| tera::Error::chain("Function `image` received invalid arguments", err))?;

        Ok(Value::String(image.render(self.style)))
    }

    fn is_safe(&self) -> bool {
        true
    }
}

/// `{{ "logo.png" | image(alt="Logo") }}`
pub struct ImageFilter {
    pub style: Style,
}

impl tera::Filter for ImageFilter {
    fn filter(&self, value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let path = tera::try_get_value!("image", "value", String, value);
        let mut image = ImageReference::new(&path);

        if let Some(alt) = args.get("alt") {
            image.alt = tera::try_get_value!("image", "alt", String, alt);
        }

        if let Some(title) = args.get("title") {
            image.title = tera::try_get_value!("image", "title", String, title);
        }

        Ok(Value::String(image.render(self.style)))
    }

    fn is_safe(&self) -> bool {
        true
    }
}

/// Makes `image` available to every template of `tera`, both as a function
/// and as a filter.
pub fn register(tera: &mut tera::Tera, config: &crate::Config) {
    log::debug!("register image helpers ({:?})", config.style);

    tera.register_function("image", ImageFunction { style: config.style });
    tera.register_filter("image", ImageFilter { style: config.style });
}

/// Always the html form, whatever style was given to [`register`].
impl ImageHelper for tera::Tera {}
