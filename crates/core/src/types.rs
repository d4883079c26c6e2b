/// Movie identifiers are UUID v7, so they sort in creation order.
pub type MovieId = uuid::Uuid;

/// Generate a fresh identifier for a new movie.
pub fn new_movie_id() -> MovieId {
    uuid::Uuid::now_v7()
}
