use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("scale entry key `{0}` contains no step digits")]
    MalformedKey(String),
    #[error("unrecognized value `{value}` for theme option `{field}`")]
    UnrecognizedOption { field: &'static str, value: String },
}
