//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Store-assigned identity.
        id -> Int8,
        /// Non-blank task title.
        title -> Text,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Canonical status string.
        #[max_length = 20]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
