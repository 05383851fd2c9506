use crate::error::StegendError;

pub type Result<T> = std::result::Result<T, StegendError>;
