//! Movie entity and the write-side request record.
//!
//! Writes arrive as a [`MovieInput`] (every field optional, so an absent
//! field surfaces as a validation failure instead of a decode failure) and
//! are turned into a [`NewMovie`] by [`MovieInput::into_new_movie`]. Storage
//! backends only ever see `NewMovie`.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::MovieId;

/// Entity name used in `NotFound` errors.
pub const MOVIE_ENTITY: &str = "Movie";

/// Required fields, in the order they are reported.
const REQUIRED_FIELDS: [&str; 3] = ["moviename", "description", "image"];

/// A persisted movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub moviename: String,
    pub description: String,
    pub image: String,
}

impl Movie {
    /// Build a movie from a validated record and an identifier.
    pub fn from_new(id: MovieId, new: NewMovie) -> Self {
        Self {
            id,
            moviename: new.moviename,
            description: new.description,
            image: new.image,
        }
    }

    /// Replace the three mutable fields, keeping the identifier.
    pub fn apply(&mut self, new: NewMovie) {
        self.moviename = new.moviename;
        self.description = new.description;
        self.image = new.image;
    }
}

/// A validated movie record: all three fields are present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub moviename: String,
    pub description: String,
    pub image: String,
}

/// Raw body of a create or update request.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MovieInput {
    #[validate(length(min = 1))]
    pub moviename: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub image: Option<String>,
}

impl MovieInput {
    /// Check that every field is present and non-empty.
    ///
    /// Absence is seen by the match; emptiness by `validate()`. The error
    /// message names each offending field.
    pub fn into_new_movie(self) -> Result<NewMovie, CoreError> {
        let empty: Vec<String> = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .field_errors()
                .keys()
                .map(|field| field.to_string())
                .collect(),
        };

        match (self.moviename, self.description, self.image) {
            (Some(moviename), Some(description), Some(image)) if empty.is_empty() => Ok(NewMovie {
                moviename,
                description,
                image,
            }),
            (moviename, description, image) => {
                let absent = [moviename.is_none(), description.is_none(), image.is_none()];
                let offending: Vec<&str> = REQUIRED_FIELDS
                    .into_iter()
                    .zip(absent)
                    .filter(|(field, absent)| *absent || empty.iter().any(|f| f.as_str() == *field))
                    .map(|(field, _)| field)
                    .collect();
                Err(missing_fields(&offending))
            }
        }
    }
}

fn missing_fields(fields: &[&str]) -> CoreError {
    CoreError::Validation(format!(
        "All fields are required (missing or empty: {})",
        fields.join(", ")
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
