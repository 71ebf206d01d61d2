//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the embedded migrations under
//! `backend/migrations`. Regenerate with `diesel print-schema` after changing
//! a migration.

diesel::table! {
    /// Registered accounts.
    ///
    /// `email` is unique and stored lower-cased. Passwords are kept as an
    /// Argon2id PHC string, never in plain text.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Normalised sign-in email address.
        email -> Text,
        /// Argon2id PHC string; embeds algorithm parameters and salt.
        password_hash -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Restaurants listed by users.
    restaurants (id) {
        /// Primary key assigned by a `BIGSERIAL` sequence.
        id -> Int8,
        /// Restaurant name, at least three characters.
        name -> Text,
        /// Creating user; the only account allowed to delete the row.
        owner_id -> Uuid,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(restaurants -> users (owner_id));

diesel::allow_tables_to_appear_in_same_query!(restaurants, users);
