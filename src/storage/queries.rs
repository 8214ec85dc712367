//! SQL query catalog
//!
//! Every statement the store runs, in one place. Placeholders are
//! positional (`?1`, `?2`, …) and bound through `rusqlite::params!`.

pub const WORD_EXISTS: &str = "
    SELECT COUNT(*)
    FROM words AS w
    WHERE w.word = ?1;
";

/// Words never used as any game's target, most frequent first.
pub const UNUSED_WORDS: &str = "
    SELECT w.word
    FROM words AS w
    LEFT OUTER JOIN games AS g ON w.word = g.word
    WHERE g.id IS NULL
    ORDER BY w.frequency DESC
    LIMIT ?1;
";

pub const GET_GAME_BY_DATE: &str = "
    SELECT g.id, g.word, g.date
    FROM games AS g
    WHERE g.date = ?1;
";

pub const CREATE_GAME: &str = "
    INSERT INTO games (word, date)
    VALUES (?1, ?2);
";

pub const GET_ATTEMPTS_BY_GAME: &str = "
    SELECT a.id, a.word, a.match
    FROM attempts AS a
    WHERE a.game_id = ?1
    ORDER BY a.id;
";

pub const CREATE_ATTEMPT: &str = "
    INSERT INTO attempts (game_id, word, match)
    VALUES (?1, ?2, ?3);
";

pub const TABLE_EXISTS: &str = "
    SELECT COUNT(*)
    FROM sqlite_master
    WHERE type = 'table' AND name = ?1;
";

pub const GET_VERSION: &str = "
    SELECT version
    FROM versions
    LIMIT 1;
";

pub const CREATE_VERSIONS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS versions (
        version TEXT PRIMARY KEY
    );
";

pub const CREATE_WORDS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS words (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        word TEXT NOT NULL UNIQUE,
        frequency REAL NOT NULL
    );
";

pub const CREATE_GAMES_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS games (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        word TEXT NOT NULL,
        date TEXT NOT NULL,
        FOREIGN KEY (word) REFERENCES words (word)
    );
";

pub const CREATE_ATTEMPTS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS attempts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        game_id INTEGER NOT NULL,
        word TEXT NOT NULL,
        match INTEGER NOT NULL,
        FOREIGN KEY (game_id) REFERENCES games (id)
    );
";

/// One game per calendar day, enforced by the storage engine.
pub const CREATE_GAMES_DATE_INDEX: &str = "
    CREATE UNIQUE INDEX IF NOT EXISTS idx_games_date ON games (date);
";

pub const INSERT_WORD: &str = "
    INSERT OR IGNORE INTO words (word, frequency)
    VALUES (?1, ?2);
";

pub const CREATE_VERSION: &str = "
    INSERT INTO versions (version)
    VALUES (?1);
";
