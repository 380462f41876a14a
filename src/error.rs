#[derive(Debug)]
pub enum Error {
    UnknownStyle(String),
    Template(tera::Error),
}

impl From<tera::Error> for Error
{
    fn from(err: tera::Error) -> Self
    {
        Error::Template(err)
    }
}

impl std::fmt::Display for Error
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self {
            Error::UnknownStyle(style) => write!(f, "Unknown image style '{}'", style),
            Error::Template(err) => write!(f, "Template error: {}", err),
        }
    }
}

impl std::error::Error for Error
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)>
    {
        match self {
            Error::UnknownStyle(_) => None,
            Error::Template(err) => Some(err),
        }
    }
}
