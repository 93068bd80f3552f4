use crate::errors::DomainError;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

/// Movie aggregate root.
///
/// Fields are private so the invariants checked in [`Movie::new`] and
/// [`Movie::update_details`] hold for the whole lifetime of the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    id: Option<i32>, // None until the repository persists it
    title: String,
    release_date: NaiveDate,
    genre: String,
    price: Decimal,
    row_version: i32,
}

impl Movie {
    pub fn new(
        title: String,
        release_date: NaiveDate,
        genre: String,
        price: Decimal,
    ) -> Result<Self, DomainError> {
        Self::validate(&title, release_date, &genre, price)?;

        Ok(Self {
            id: None,
            title,
            release_date,
            genre,
            price,
            row_version: 0,
        })
    }

    /// Rebuilds a persisted movie. Used by repositories when loading rows.
    pub fn with_id(
        id: i32,
        title: String,
        release_date: NaiveDate,
        genre: String,
        price: Decimal,
        row_version: i32,
    ) -> Result<Self, DomainError> {
        Self::validate(&title, release_date, &genre, price)?;

        Ok(Self {
            id: Some(id),
            title,
            release_date,
            genre,
            price,
            row_version,
        })
    }

    /// Replaces all four details at once. On error nothing changes.
    pub fn update_details(
        &mut self,
        new_title: String,
        new_release_date: NaiveDate,
        new_genre: String,
        new_price: Decimal,
    ) -> Result<(), DomainError> {
        Self::validate(&new_title, new_release_date, &new_genre, new_price)?;

        self.title = new_title;
        self.release_date = new_release_date;
        self.genre = new_genre;
        self.price = new_price;
        Ok(())
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Optimistic concurrency token, bumped by storage on every update.
    pub fn row_version(&self) -> i32 {
        self.row_version
    }

    /// 0001-01-01 is the unset sentinel for release dates. Anything on or
    /// before it is rejected; 1970-01-01 is a real release date.
    fn validate(
        title: &str,
        release_date: NaiveDate,
        genre: &str,
        price: Decimal,
    ) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                "title",
                "Title cannot be empty",
            ));
        }

        if genre.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                "genre",
                "Genre cannot be empty",
            ));
        }

        if price <= Decimal::ZERO {
            return Err(DomainError::out_of_range(
                "price",
                "Price must be greater than zero",
            ));
        }

        if is_unset_date(release_date) {
            return Err(DomainError::invalid_argument(
                "release_date",
                "Release date is required",
            ));
        }

        Ok(())
    }
}

fn is_unset_date(date: NaiveDate) -> bool {
    date.year() < 1 || (date.year() == 1 && date.ordinal() == 1)
}
