//! SQLite schema definitions.

/// Current schema version, stored in `collection_meta`.
pub const SCHEMA_VERSION: i32 = 1;

pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS collection_meta (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    schema_version INTEGER NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS decks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL
);

-- One row per card; front and back are HTML
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    guid TEXT NOT NULL UNIQUE,
    deck_id INTEGER NOT NULL REFERENCES decks(id),
    front TEXT NOT NULL,
    back TEXT NOT NULL,
    tags TEXT NOT NULL DEFAULT '',
    checksum TEXT,
    modified_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_notes_deck ON notes(deck_id);
CREATE INDEX IF NOT EXISTS idx_notes_checksum ON notes(checksum);
"#;

/// Record the schema version on first open. Binds `?1` version, `?2` timestamp.
pub const INIT_META: &str =
    "INSERT OR IGNORE INTO collection_meta (id, schema_version, created_at) VALUES (1, ?1, ?2)";
