// Database schema for the movie catalog
diesel::table! {
    movies (id) {
        id -> Integer,
        title -> Text,
        release_date -> Date,
        genre -> Text,
        price -> Text,             // Decimal string, e.g. "19.99"
        row_version -> Integer,    // Optimistic concurrency token
    }
}
