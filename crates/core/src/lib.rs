//! Domain layer for the Marquee movie catalogue.
//!
//! Holds the movie types, request validation, the error taxonomy shared by
//! the other crates, and the [`store::MovieStore`] seam that storage
//! backends implement.

pub mod error;
pub mod movie;
pub mod store;
pub mod types;
