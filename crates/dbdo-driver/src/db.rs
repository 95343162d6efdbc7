use crate::result::{Cell, ResultSet};
use crate::{Error, Result, Target};
use dbdo_types::RawValue;
use rusqlite::fallible_iterator::FallibleIterator;
use rusqlite::types::ValueRef;
use rusqlite::{Batch, Connection, OpenFlags, Statement, params};
use tracing::debug;

/// Connection parameters as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    pub url: String,
    pub user: Option<String>,
    pub password: Option<String>,
}

/// One column of a table definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    /// Type as written in the table definition, e.g. `VARCHAR(100)`
    pub declared_type: String,
    pub nullable: bool,
    pub default: Option<String>,
}

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open an existing database. Unlike plain SQLite, a missing file is an
    /// error rather than a new empty database.
    pub fn open(url: &str) -> Result<Self> {
        let target = Target::parse(url)?;
        debug!(%target, "opening database");

        let conn = match &target {
            Target::Memory => Connection::open_in_memory(),
            Target::File(path) => Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_WRITE
                    | OpenFlags::SQLITE_OPEN_URI
                    | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            ),
        }
        .map_err(|source| Error::Open {
            target: target.to_string(),
            source,
        })?;

        Ok(Self { conn })
    }

    pub fn connect(options: &ConnectOptions) -> Result<Self> {
        if options.user.is_some() || options.password.is_some() {
            debug!("sqlite has no authentication; ignoring user/password");
        }
        Self::open(&options.url)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::open(":memory:")
    }

    /// Run every statement of `sql` in order.
    ///
    /// Returns the rows of the last statement that produces columns, or
    /// `None` when no statement does (pure DDL/DML scripts).
    pub fn run_script(&self, sql: &str) -> Result<Option<ResultSet>> {
        let mut batch = Batch::new(&self.conn, sql);
        let mut result = None;
        let mut index = 0usize;

        while let Some(mut stmt) = batch.next()? {
            index += 1;
            if stmt.column_count() == 0 {
                let changed = stmt.execute([])?;
                debug!(statement = index, changed, "statement executed");
            } else {
                let rows = collect_rows(&mut stmt)?;
                debug!(statement = index, rows = rows.len(), "statement returned rows");
                result = Some(rows);
            }
        }

        Ok(result)
    }

    /// Attached schemas in attach order; the connection-private `temp`
    /// schema is left out.
    pub fn list_schemas(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT name FROM pragma_database_list")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(names.into_iter().filter(|name| name != "temp").collect())
    }

    /// Tables and views of `schema` in declaration order.
    pub fn list_tables(&self, schema: &str) -> Result<Vec<String>> {
        let sql = format!(
            "SELECT name FROM {}.sqlite_master \
             WHERE type IN ('table', 'view') AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\' \
             ORDER BY rowid",
            quote_identifier(schema)
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(names)
    }

    pub fn list_columns(&self, schema: &str, table: &str) -> Result<Vec<ColumnInfo>> {
        let mut stmt = self.conn.prepare(
            r#"SELECT name, type, "notnull", dflt_value
               FROM pragma_table_info(?1, ?2)
               ORDER BY cid"#,
        )?;

        let columns = stmt
            .query_map(params![table, schema], |row| {
                let declared_type: String = row.get(1)?;
                Ok(ColumnInfo {
                    name: row.get(0)?,
                    declared_type: if declared_type.trim().is_empty() {
                        // Typeless columns store whatever they are given
                        "bytea".to_string()
                    } else {
                        declared_type
                    },
                    nullable: row.get::<_, i64>(2)? == 0,
                    default: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(columns)
    }
}

fn collect_rows(stmt: &mut Statement<'_>) -> Result<ResultSet> {
    let (names, declared): (Vec<String>, Vec<Option<String>>) = stmt
        .columns()
        .iter()
        .map(|column| {
            (
                column.name().to_string(),
                column
                    .decl_type()
                    .filter(|t| !t.trim().is_empty())
                    .map(str::to_string),
            )
        })
        .unzip();

    let mut rows = stmt.query([])?;
    let mut result = ResultSet {
        columns: names,
        rows: Vec::new(),
    };

    while let Some(row) = rows.next()? {
        let mut cells = Vec::with_capacity(declared.len());
        for (i, declared_type) in declared.iter().enumerate() {
            let value = raw_value(row.get_ref(i)?);
            let type_name = match declared_type {
                Some(name) => name.clone(),
                None => storage_class_type(&value).to_string(),
            };
            cells.push(Cell { type_name, value });
        }
        result.rows.push(cells);
    }

    Ok(result)
}

fn raw_value(value: ValueRef<'_>) -> RawValue {
    match value {
        ValueRef::Null => RawValue::Null,
        ValueRef::Integer(n) => RawValue::Integer(n),
        ValueRef::Real(r) => RawValue::Real(r),
        ValueRef::Text(bytes) => RawValue::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => RawValue::Blob(bytes.to_vec()),
    }
}

/// Type name for expression columns, which carry no declared type.
fn storage_class_type(value: &RawValue) -> &'static str {
    match value {
        RawValue::Integer(_) => "int8",
        RawValue::Real(_) => "float8",
        RawValue::Blob(_) => "bytea",
        RawValue::Text(_) | RawValue::Null => "text",
    }
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_without_rows_returns_none() {
        let db = Database::open_in_memory().unwrap();
        let result = db
            .run_script("CREATE TABLE t (id INTEGER); INSERT INTO t VALUES (1);")
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_last_row_producing_statement_wins() {
        let db = Database::open_in_memory().unwrap();
        let result = db
            .run_script(
                "CREATE TABLE t (id INTEGER, name TEXT);
                 INSERT INTO t VALUES (1, 'a'), (2, 'b');
                 SELECT 'first';
                 SELECT id, name FROM t ORDER BY id;
                 UPDATE t SET name = 'c' WHERE id = 2;",
            )
            .unwrap()
            .unwrap();

        assert_eq!(result.columns, vec!["id", "name"]);
        assert_eq!(result.len(), 2);
        assert_eq!(result.rows[0][0].type_name, "INTEGER");
        assert_eq!(result.rows[0][0].value, RawValue::Integer(1));
        assert_eq!(result.rows[1][1].value, RawValue::Text("b".into()));
    }

    #[test]
    fn test_expression_columns_use_storage_class() {
        let db = Database::open_in_memory().unwrap();
        let result = db
            .run_script("SELECT 1 AS a, 2.5 AS b, 'x' AS c, x'00ff' AS d, NULL AS e")
            .unwrap()
            .unwrap();

        let types: Vec<&str> = result.rows[0].iter().map(|c| c.type_name.as_str()).collect();
        assert_eq!(types, vec!["int8", "float8", "text", "bytea", "text"]);
        assert_eq!(result.rows[0][3].value, RawValue::Blob(vec![0x00, 0xff]));
        assert_eq!(result.rows[0][4].value, RawValue::Null);
    }

    #[test]
    fn test_select_with_no_rows_is_an_empty_result() {
        let db = Database::open_in_memory().unwrap();
        let result = db
            .run_script("CREATE TABLE t (id INTEGER); SELECT * FROM t;")
            .unwrap()
            .unwrap();
        assert!(result.is_empty());
        assert_eq!(result.columns, vec!["id"]);
    }

    #[test]
    fn test_sql_errors_propagate() {
        let db = Database::open_in_memory().unwrap();
        let err = db.run_script("SELEC 1").unwrap_err();
        assert!(matches!(err, Error::Database(_)));
        assert!(err.to_string().starts_with("Database error:"));
    }

    #[test]
    fn test_schema_catalog() {
        let db = Database::open_in_memory().unwrap();
        db.run_script(
            "CREATE TABLE users (id INTEGER NOT NULL, name VARCHAR(40), note);
             CREATE TABLE posts (body TEXT DEFAULT 'empty');
             CREATE VIEW named AS SELECT name FROM users;",
        )
        .unwrap();

        assert_eq!(db.list_schemas().unwrap(), vec!["main"]);
        assert_eq!(db.list_tables("main").unwrap(), vec!["users", "posts", "named"]);

        let columns = db.list_columns("main", "users").unwrap();
        assert_eq!(
            columns[0],
            ColumnInfo {
                name: "id".into(),
                declared_type: "INTEGER".into(),
                nullable: false,
                default: None,
            }
        );
        assert_eq!(columns[1].declared_type, "VARCHAR(40)");
        assert!(columns[1].nullable);
        assert_eq!(columns[2].declared_type, "bytea");

        let columns = db.list_columns("main", "posts").unwrap();
        assert_eq!(columns[0].default.as_deref(), Some("'empty'"));
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("main"), "\"main\"");
        assert_eq!(quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }
}
