use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UiError {
    #[error("Button text must not be empty {location}")]
    EmptyButtonText { location: ErrorLocation },

    #[error("Unknown provider: {value} {location}")]
    UnknownProvider {
        value: String,
        location: ErrorLocation,
    },
}

impl UiError {
    #[track_caller]
    pub fn empty_button_text() -> Self {
        Self::EmptyButtonText {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_provider(value: impl Into<String>) -> Self {
        Self::UnknownProvider {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, UiError>;
