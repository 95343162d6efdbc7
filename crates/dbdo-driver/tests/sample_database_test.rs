use dbdo_driver::{ConnectOptions, Database, Error};
use dbdo_testing::SampleDatabase;
use dbdo_testing::fixtures::SAMPLE_TABLE_COLUMNS;
use dbdo_types::RawValue;
use tempfile::TempDir;

fn sample() -> (TempDir, SampleDatabase) {
    let dir = TempDir::new().unwrap();
    let db = SampleDatabase::create(dir.path().join("sample.db")).unwrap();
    (dir, db)
}

#[test]
fn test_every_url_form_opens_the_same_file() {
    let (_dir, sample) = sample();
    let path = sample.url();

    for url in [
        path.clone(),
        format!("sqlite://{}", path),
        format!("sqlite:{}", path),
        format!("file:{}", path),
        format!("jdbc:sqlite:{}", path),
    ] {
        let db = Database::open(&url).unwrap_or_else(|e| panic!("{}: {}", url, e));
        assert_eq!(db.list_tables("main").unwrap(), vec!["users", "sample_table"]);
    }
}

#[test]
fn test_missing_file_is_not_created() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.db");

    let err = Database::open(&path.display().to_string())
        .err()
        .expect("opening a missing file must fail");
    assert!(matches!(err, Error::Open { .. }));
    assert!(!path.exists());
}

#[test]
fn test_credentials_are_ignored() {
    let (_dir, sample) = sample();
    let options = ConnectOptions {
        url: sample.url(),
        user: Some("admin".into()),
        password: Some("secret".into()),
    };
    let db = Database::connect(&options).unwrap();
    assert_eq!(db.list_schemas().unwrap(), vec!["main"]);
}

#[test]
fn test_sample_table_columns_keep_declared_types() {
    let (_dir, sample) = sample();
    let db = Database::open(&sample.url()).unwrap();

    let columns = db.list_columns("main", "sample_table").unwrap();
    assert_eq!(columns.len(), SAMPLE_TABLE_COLUMNS);
    assert_eq!(columns[0].name, "bigint_col");
    assert_eq!(columns[0].declared_type, "BIGINT");

    let varying = columns
        .iter()
        .find(|c| c.name == "character_varying_col")
        .unwrap();
    assert_eq!(varying.declared_type, "CHARACTER VARYING(100)");
    assert!(varying.nullable);
    assert_eq!(varying.default, None);
}

#[test]
fn test_query_reports_declared_types_and_values() {
    let (_dir, sample) = sample();
    let db = Database::open(&sample.url()).unwrap();

    let result = db
        .run_script("SELECT id, name, email FROM users ORDER BY id;")
        .unwrap()
        .unwrap();

    assert_eq!(result.columns, vec!["id", "name", "email"]);
    assert_eq!(result.len(), 3);

    let bob = &result.rows[1];
    assert_eq!(bob[0].type_name, "INTEGER");
    assert_eq!(bob[1].type_name, "VARCHAR(40)");
    assert_eq!(bob[1].value, RawValue::Text("bob".into()));
    assert_eq!(bob[2].value, RawValue::Null);
}

#[test]
fn test_script_changes_are_visible_to_later_statements() {
    let (_dir, sample) = sample();
    let db = Database::open(&sample.url()).unwrap();

    let result = db
        .run_script(
            "UPDATE users SET email = 'bob@example.com' WHERE id = 2;
             SELECT email FROM users WHERE id = 2;",
        )
        .unwrap()
        .unwrap();

    assert_eq!(result.rows[0][0].value, RawValue::Text("bob@example.com".into()));
}
