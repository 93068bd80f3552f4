use chrono::NaiveDate;
use domain::{DomainError, Movie};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Transport representation of a movie, validated at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MovieDto {
    #[serde(default)]
    pub id: i32,

    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    pub title: String,

    pub release_date: NaiveDate,

    #[validate(length(min = 1, message = "Genre is required"))]
    pub genre: String,

    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

impl MovieDto {
    /// Builds a fresh (unpersisted) entity from this DTO. The id is ignored.
    pub fn to_entity(&self) -> Result<Movie, DomainError> {
        Movie::new(
            self.title.clone(),
            self.release_date,
            self.genre.clone(),
            self.price,
        )
    }
}

impl From<&Movie> for MovieDto {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id().unwrap_or_default(),
            title: movie.title().to_string(),
            release_date: movie.release_date(),
            genre: movie.genre().to_string(),
            price: movie.price(),
        }
    }
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        MovieDto::from(&movie)
    }
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    let min = Decimal::new(1, 2);
    let max = Decimal::new(1_000_000, 0);

    if *price < min || *price > max {
        let mut error = ValidationError::new("range");
        error.message = Some("Price must be between 0.01 and 1,000,000.00".into());
        return Err(error);
    }

    if price.normalize().scale() > 2 {
        let mut error = ValidationError::new("scale");
        error.message = Some("Price cannot have more than two decimal places".into());
        return Err(error);
    }
    Ok(())
}
