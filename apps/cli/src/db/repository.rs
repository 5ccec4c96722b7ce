//! Collection file access.

use crate::db::error::DbError;
use crate::db::schema::{INIT_META, SCHEMA, SCHEMA_VERSION};
use chrono::Utc;
use puzzle_core::{CardKey, CardStore, StoreError, StoredCard};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::collections::HashSet;
use std::path::Path;
use uuid::Uuid;

type Result<T> = std::result::Result<T, DbError>;

/// A collection stored in one SQLite file.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new, empty collection. Fails if the file already exists.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Err(DbError::AlreadyExists(path.to_path_buf()));
        }
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Open an existing collection. A missing file is an error, never
    /// silently created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(DbError::NotFound(path.to_path_buf()));
        }
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Open in-memory collection (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        self.conn
            .execute(INIT_META, params![SCHEMA_VERSION, Utc::now().to_rfc3339()])?;

        let found: i32 = self.conn.query_row(
            "SELECT schema_version FROM collection_meta WHERE id = 1",
            [],
            |row| row.get(0),
        )?;
        if found != SCHEMA_VERSION {
            return Err(DbError::SchemaVersion {
                found,
                expected: SCHEMA_VERSION,
            });
        }
        Ok(())
    }

    fn deck_id(&self, name: &str) -> Result<Option<i64>> {
        self.conn
            .query_row(
                "SELECT id FROM decks WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    pub fn deck_names(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT name FROM decks ORDER BY name")?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(names)
    }

    /// Every card in a deck, oldest first.
    pub fn cards_in_deck(&self, deck: &str) -> Result<Vec<StoredCard>> {
        let deck_id = self
            .deck_id(deck)?
            .ok_or_else(|| DbError::DeckNotFound(deck.to_string()))?;

        let mut stmt = self.conn.prepare(
            "SELECT id, front, back, tags FROM notes WHERE deck_id = ?1 ORDER BY id",
        )?;
        let cards = stmt
            .query_map(params![deck_id], |row| {
                let tags: String = row.get(3)?;
                Ok(StoredCard {
                    id: row.get(0)?,
                    deck: deck.to_string(),
                    front: row.get(1)?,
                    back: row.get(2)?,
                    tags: tags.split_whitespace().map(str::to_string).collect(),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(cards)
    }

    pub fn card_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn fields_in_deck(&self, deck: &str) -> Result<Vec<(String, String)>> {
        let mut stmt = self.conn.prepare(
            "SELECT n.front, n.back FROM notes n
             JOIN decks d ON d.id = n.deck_id
             WHERE d.name = ?1",
        )?;
        let fields = stmt
            .query_map(params![deck], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(fields)
    }
}

fn write_error(deck: &str, err: impl std::fmt::Display) -> StoreError {
    StoreError::Write {
        deck: deck.to_string(),
        reason: err.to_string(),
    }
}

impl CardStore for SqliteStore {
    fn query_existing_keys(
        &self,
        decks: &[String],
    ) -> std::result::Result<HashSet<CardKey>, StoreError> {
        let mut keys = HashSet::new();
        for deck in decks {
            let fields = self.fields_in_deck(deck)?;
            tracing::debug!(deck = %deck, cards = fields.len(), "indexed existing cards");
            keys.extend(
                fields
                    .iter()
                    .filter_map(|(front, back)| CardKey::from_fields(front, back)),
            );
        }
        Ok(keys)
    }

    fn ensure_collection(&mut self, name: &str) -> std::result::Result<(), StoreError> {
        let inserted = self
            .conn
            .execute(
                "INSERT OR IGNORE INTO decks (name, created_at) VALUES (?1, ?2)",
                params![name, Utc::now().to_rfc3339()],
            )
            .map_err(|e| write_error(name, e))?;
        if inserted > 0 {
            tracing::info!(deck = %name, "created deck");
        }
        Ok(())
    }

    fn insert_card(
        &mut self,
        deck: &str,
        front: &str,
        back: &str,
        tags: &[String],
    ) -> std::result::Result<i64, StoreError> {
        let deck_id = self
            .deck_id(deck)
            .map_err(|e| write_error(deck, e))?
            .ok_or_else(|| write_error(deck, "deck does not exist"))?;

        let checksum = CardKey::from_fields(front, back).map(|key| key.digest());
        self.conn
            .execute(
                "INSERT INTO notes (guid, deck_id, front, back, tags, checksum, modified_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    Uuid::new_v4().to_string(),
                    deck_id,
                    front,
                    back,
                    tags.join(" "),
                    checksum,
                    Utc::now().to_rfc3339(),
                ],
            )
            .map_err(|e| write_error(deck, e))?;

        Ok(self.conn.last_insert_rowid())
    }
}
