diesel::table! {
    notes (id) {
        id -> Int8,
        header -> Varchar,
        description -> Varchar,
        created_at -> Timestamp,
    }
}
