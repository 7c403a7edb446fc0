//! SQL schema for the Coinage SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS ksbs (
    ksb_id      TEXT PRIMARY KEY,
    ksb_name    TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS duties (
    duty_id     TEXT PRIMARY KEY,
    duty_name   TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS coins (
    coin_id     TEXT PRIMARY KEY,
    coin_name   TEXT NOT NULL UNIQUE
);

-- Join rows vanish with either endpoint.
CREATE TABLE IF NOT EXISTS duty_ksb (
    duty_id TEXT NOT NULL REFERENCES duties(duty_id) ON DELETE CASCADE,
    ksb_id  TEXT NOT NULL REFERENCES ksbs(ksb_id)    ON DELETE CASCADE,
    PRIMARY KEY (duty_id, ksb_id)
);

CREATE TABLE IF NOT EXISTS coin_duties (
    coin_id TEXT NOT NULL REFERENCES coins(coin_id)   ON DELETE CASCADE,
    duty_id TEXT NOT NULL REFERENCES duties(duty_id) ON DELETE CASCADE,
    PRIMARY KEY (coin_id, duty_id)
);

CREATE INDEX IF NOT EXISTS duty_ksb_ksb_idx     ON duty_ksb(ksb_id);
CREATE INDEX IF NOT EXISTS coin_duties_duty_idx ON coin_duties(duty_id);

PRAGMA user_version = 1;
";
