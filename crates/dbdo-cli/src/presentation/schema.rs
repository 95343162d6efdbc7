use dbdo_driver::ColumnInfo;
use dbdo_engine::Palette;
use dbdo_types::{Color, Record, Result, RowGroup, TypeName, ValueType};

/// A table and its columns, as read from the catalog.
#[derive(Debug, Clone)]
pub struct TableDefinition {
    pub schema: String,
    pub name: String,
    pub columns: Vec<ColumnInfo>,
}

/// One row-group per table: a highlighted `TABLE schema.name` title record
/// followed by one record per column definition.
pub fn build_schema_row_groups(tables: &[TableDefinition]) -> Result<Vec<RowGroup>> {
    tables
        .iter()
        .map(|table| -> Result<RowGroup> {
            let mut group = RowGroup::with_capacity(table.columns.len() + 1);
            group.push(
                Record::new(
                    ValueType::Text,
                    format!("TABLE {}.{}", table.schema, table.name),
                    "",
                )
                .with_label_color(Color::Title),
            );

            for column in &table.columns {
                let type_name = TypeName::parse(&column.declared_type)?;
                group.push(Record::new(
                    type_name.value_type,
                    column.name.as_str(),
                    describe_column(&type_name, column),
                ));
            }
            Ok(group)
        })
        .collect()
}

/// `varchar(40) NOT NULL DEFAULT 'x',`
pub fn describe_column(type_name: &TypeName, column: &ColumnInfo) -> String {
    let mut text = type_name.value_type.name().to_string();

    if type_name.value_type.has_length()
        && let Some(length) = type_name.length.filter(|n| *n > 0)
    {
        text.push_str(&format!("({})", length));
    }

    text.push_str(if column.nullable { " NULL" } else { " NOT NULL" });

    if let Some(default) = &column.default {
        text.push_str(" DEFAULT ");
        text.push_str(default);
    }

    text.push(',');
    text
}

pub fn schema_header(palette: &Palette, schema: &str) -> String {
    palette.paint(Color::Schema, &format!("SCHEMA {}", schema))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbdo_types::Error;

    fn column(
        name: &str,
        declared_type: &str,
        nullable: bool,
        default: Option<&str>,
    ) -> ColumnInfo {
        ColumnInfo {
            name: name.to_string(),
            declared_type: declared_type.to_string(),
            nullable,
            default: default.map(str::to_string),
        }
    }

    fn describe(declared_type: &str, nullable: bool, default: Option<&str>) -> String {
        let info = column("c", declared_type, nullable, default);
        describe_column(&TypeName::parse(declared_type).unwrap(), &info)
    }

    #[test]
    fn test_describe_column() {
        assert_eq!(describe("INTEGER", false, None), "int4 NOT NULL,");
        assert_eq!(describe("VARCHAR(40)", true, None), "varchar(40) NULL,");
        assert_eq!(describe("char(2)", true, Some("'xx'")), "bpchar(2) NULL DEFAULT 'xx',");
        assert_eq!(describe("BOOLEAN", true, Some("1")), "bool NULL DEFAULT 1,");
    }

    #[test]
    fn test_length_only_for_length_carrying_types() {
        assert_eq!(describe("timestamp(3)", true, None), "timestamp NULL,");
        assert_eq!(describe("NUMERIC(10,2)", true, None), "numeric NULL,");
        assert_eq!(describe("bit varying(8)", false, None), "varbit(8) NOT NULL,");
    }

    #[test]
    fn test_title_then_columns() {
        let tables = vec![TableDefinition {
            schema: "main".into(),
            name: "users".into(),
            columns: vec![
                column("id", "INTEGER", false, None),
                column("email", "TEXT", true, None),
            ],
        }];

        let groups = build_schema_row_groups(&tables).unwrap();
        assert_eq!(groups.len(), 1);

        let group = &groups[0];
        assert_eq!(group.len(), 3);
        assert_eq!(group[0].label(), "TABLE main.users");
        assert_eq!(group[0].display_text(), "");
        assert_eq!(group[0].label_color(), Color::Title);
        assert_eq!(group[0].value_color_override(), None);

        assert_eq!(group[1].label(), "id");
        assert_eq!(group[1].value_type(), ValueType::Int4);
        assert_eq!(group[1].value_color(), Color::Numeric);
        assert_eq!(group[2].display_text(), "text NULL,");
        assert_eq!(group[2].label_color_override(), None);
    }

    #[test]
    fn test_table_without_columns_is_just_a_title() {
        let tables = vec![TableDefinition {
            schema: "main".into(),
            name: "empty".into(),
            columns: Vec::new(),
        }];
        let groups = build_schema_row_groups(&tables).unwrap();
        assert_eq!(groups[0].len(), 1);
    }

    #[test]
    fn test_unknown_declared_type_fails() {
        let tables = vec![TableDefinition {
            schema: "main".into(),
            name: "odd".into(),
            columns: vec![column("v", "STRANGE THING", true, None)],
        }];
        let err = build_schema_row_groups(&tables).unwrap_err();
        assert_eq!(err, Error::UnknownType("STRANGE THING".into()));
    }

    #[test]
    fn test_schema_header() {
        assert_eq!(schema_header(&Palette::plain(), "main"), "SCHEMA main");
        let colored = schema_header(&Palette::ansi(), "main");
        assert!(colored.contains("SCHEMA main"));
        assert!(colored.ends_with("\x1b[0m"));
    }
}
