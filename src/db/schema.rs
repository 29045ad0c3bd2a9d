//! Database schema migrations.
//!
//! Each entry is applied once, in order, inside a transaction; the
//! `schema_version` table records progress.

/// Ordered list of schema migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: users and reservations
    r#"
    CREATE TABLE users (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        email       TEXT NOT NULL,
        password    TEXT NOT NULL,
        created_at  TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE UNIQUE INDEX idx_users_email ON users(email);

    CREATE TABLE reservations (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id     INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        date        TEXT NOT NULL,
        time        TEXT NOT NULL,
        service     TEXT NOT NULL,
        created_at  TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX idx_reservations_user ON reservations(user_id);
    "#,
];
