use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Cannot read \"{0}\" as a weight. Use digits with at most one decimal place.")]
    InvalidWeight(String),
}
