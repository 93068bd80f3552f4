pub mod sqlite_movie_repository;

pub use sqlite_movie_repository::SqliteMovieRepository;
