//! Sample databases for tests.
//!
//! `sample_table` has one column for every column type dbdo knows, declared
//! with the spelling a schema author would use (`CHARACTER VARYING(100)`,
//! `TIMESTAMP WITH TIME ZONE`, ...), so classification is exercised on
//! realistic input.

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub const USERS_DDL: &str = r#"
CREATE TABLE users (
    id INTEGER NOT NULL,
    name VARCHAR(40) NOT NULL,
    email TEXT,
    active BOOLEAN DEFAULT 1,
    created_at TIMESTAMP
);

INSERT INTO users (id, name, email, active, created_at) VALUES
    (1, 'alice', 'alice@example.com', 1, '2024-01-05 10:00:00'),
    (2, 'bob', NULL, 0, '2024-02-11 08:30:00'),
    (3, 'carol', 'carol@example.com', 1, NULL);
"#;

pub const SAMPLE_TABLE_DDL: &str = r#"
CREATE TABLE sample_table (
    bigint_col BIGINT,
    bigserial_col BIGSERIAL,
    bit_col BIT(10),
    bit_varying_col BIT VARYING(20),
    boolean_col BOOLEAN,
    box_col BOX,
    bytea_col BYTEA,
    character_col CHARACTER(50),
    character_varying_col CHARACTER VARYING(100),
    cidr_col CIDR,
    circle_col CIRCLE,
    date_col DATE,
    double_precision_col DOUBLE PRECISION,
    inet_col INET,
    integer_col INTEGER,
    interval_col INTERVAL,
    json_col JSON,
    jsonb_col JSONB,
    line_col LINE,
    lseg_col LSEG,
    macaddr_col MACADDR,
    macaddr8_col MACADDR8,
    money_col MONEY,
    numeric_col NUMERIC(10, 2),
    path_col PATH,
    pg_lsn_col PG_LSN,
    point_col POINT,
    polygon_col POLYGON,
    real_col REAL,
    smallint_col SMALLINT,
    smallserial_col SMALLSERIAL,
    serial_col SERIAL,
    text_col TEXT,
    time_col TIME,
    time_with_zone_col TIME WITH TIME ZONE,
    timestamp_col TIMESTAMP,
    timestamp_with_zone_col TIMESTAMP WITH TIME ZONE,
    tsquery_col TSQUERY,
    tsvector_col TSVECTOR,
    txid_snapshot_col TXID_SNAPSHOT,
    uuid_col UUID,
    xml_col XML
);

INSERT INTO sample_table VALUES (
    9000000000, 1, '1010101010', '101', 1, '(1,1),(0,0)', x'deadbeef',
    'fixed', 'varying', '192.168.0.0/24', '<(0,0),1>', '2024-03-01', 3.25,
    '10.0.0.1', 42, '1 day', '{"a":1}', '{"b":2}', '{1,-1,0}', '[(0,0),(1,1)]',
    '08:00:2b:01:02:03', '08:00:2b:01:02:03:04:05', '$12.50', 10.5,
    '[(0,0),(1,1)]', '16/B374D848', '(1,2)', '((0,0),(1,1),(1,0))', 1.5, 7, 1,
    1, 'hello', '04:05:06', '04:05:06+02', '2024-03-01 04:05:06',
    '2024-03-01 04:05:06+00', 'fat & rat', 'a fat cat', '10:20:10,14,15',
    'a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11', '<note>hi</note>'
);

INSERT INTO sample_table DEFAULT VALUES;
"#;

/// Number of columns in `sample_table`
pub const SAMPLE_TABLE_COLUMNS: usize = 42;

/// A SQLite database file populated with the sample tables.
pub struct SampleDatabase {
    path: PathBuf,
}

impl SampleDatabase {
    /// Create `users` and `sample_table` at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let db = Self::empty(path)?;
        db.execute(USERS_DDL)?;
        db.execute(SAMPLE_TABLE_DDL)?;
        Ok(db)
    }

    /// Create a database file with no tables.
    pub fn empty(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        Connection::open(&path)
            .with_context(|| format!("Failed to create database: {}", path.display()))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Connection string to pass to `dbdo -d`
    pub fn url(&self) -> String {
        self.path.display().to_string()
    }

    pub fn execute(&self, sql: &str) -> Result<()> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch(sql)
            .with_context(|| format!("Failed to run fixture SQL on {}", self.path.display()))?;
        Ok(())
    }
}
