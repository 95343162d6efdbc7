use crate::{Color, Error, RawValue, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static TYPE_ARGS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*([^)]*?)\s*\)").unwrap());

/// Closed catalog of column types dbdo knows how to present.
///
/// Names follow PostgreSQL's internal (udt) spelling. Anything outside this
/// list is rejected by [`ValueType::classify`] instead of being guessed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Int8,
    BigSerial,
    Bit,
    VarBit,
    Bool,
    Box,
    Bytea,
    Bpchar,
    Varchar,
    Cidr,
    Circle,
    Date,
    Float8,
    Inet,
    Int4,
    Interval,
    Json,
    Jsonb,
    Line,
    Lseg,
    MacAddr,
    MacAddr8,
    Money,
    Numeric,
    Path,
    PgLsn,
    Point,
    Polygon,
    Float4,
    Int2,
    SmallSerial,
    Serial,
    Text,
    Time,
    TimeTz,
    Timestamp,
    TimestampTz,
    TsQuery,
    TsVector,
    TxidSnapshot,
    Uuid,
    Xml,
    Geography,
    Name,
    TextArray,
}

/// Semantic family of a type. The family, not the individual type, picks the
/// value color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Numeric,
    Textual,
    Temporal,
    Boolean,
    Other,
}

impl Family {
    pub fn color(self) -> Color {
        match self {
            Family::Numeric => Color::Numeric,
            Family::Textual => Color::Textual,
            Family::Temporal => Color::Temporal,
            Family::Boolean => Color::Boolean,
            Family::Other => Color::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeRule {
    Number,
    Boolean,
    Text,
    Binary,
    Generic,
}

/// A resolved declared type, e.g. `VARCHAR(100)` → (`varchar`, 100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeName {
    pub value_type: ValueType,
    /// Single integer argument of the declaration, if there was one
    pub length: Option<u32>,
}

impl ValueType {
    pub const ALL: [ValueType; 45] = [
        ValueType::Int8,
        ValueType::BigSerial,
        ValueType::Bit,
        ValueType::VarBit,
        ValueType::Bool,
        ValueType::Box,
        ValueType::Bytea,
        ValueType::Bpchar,
        ValueType::Varchar,
        ValueType::Cidr,
        ValueType::Circle,
        ValueType::Date,
        ValueType::Float8,
        ValueType::Inet,
        ValueType::Int4,
        ValueType::Interval,
        ValueType::Json,
        ValueType::Jsonb,
        ValueType::Line,
        ValueType::Lseg,
        ValueType::MacAddr,
        ValueType::MacAddr8,
        ValueType::Money,
        ValueType::Numeric,
        ValueType::Path,
        ValueType::PgLsn,
        ValueType::Point,
        ValueType::Polygon,
        ValueType::Float4,
        ValueType::Int2,
        ValueType::SmallSerial,
        ValueType::Serial,
        ValueType::Text,
        ValueType::Time,
        ValueType::TimeTz,
        ValueType::Timestamp,
        ValueType::TimestampTz,
        ValueType::TsQuery,
        ValueType::TsVector,
        ValueType::TxidSnapshot,
        ValueType::Uuid,
        ValueType::Xml,
        ValueType::Geography,
        ValueType::Name,
        ValueType::TextArray,
    ];

    /// Canonical catalog name
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Int8 => "int8",
            ValueType::BigSerial => "bigserial",
            ValueType::Bit => "bit",
            ValueType::VarBit => "varbit",
            ValueType::Bool => "bool",
            ValueType::Box => "box",
            ValueType::Bytea => "bytea",
            ValueType::Bpchar => "bpchar",
            ValueType::Varchar => "varchar",
            ValueType::Cidr => "cidr",
            ValueType::Circle => "circle",
            ValueType::Date => "date",
            ValueType::Float8 => "float8",
            ValueType::Inet => "inet",
            ValueType::Int4 => "int4",
            ValueType::Interval => "interval",
            ValueType::Json => "json",
            ValueType::Jsonb => "jsonb",
            ValueType::Line => "line",
            ValueType::Lseg => "lseg",
            ValueType::MacAddr => "macaddr",
            ValueType::MacAddr8 => "macaddr8",
            ValueType::Money => "money",
            ValueType::Numeric => "numeric",
            ValueType::Path => "path",
            ValueType::PgLsn => "pg_lsn",
            ValueType::Point => "point",
            ValueType::Polygon => "polygon",
            ValueType::Float4 => "float4",
            ValueType::Int2 => "int2",
            ValueType::SmallSerial => "smallserial",
            ValueType::Serial => "serial",
            ValueType::Text => "text",
            ValueType::Time => "time",
            ValueType::TimeTz => "timetz",
            ValueType::Timestamp => "timestamp",
            ValueType::TimestampTz => "timestamptz",
            ValueType::TsQuery => "tsquery",
            ValueType::TsVector => "tsvector",
            ValueType::TxidSnapshot => "txid_snapshot",
            ValueType::Uuid => "uuid",
            ValueType::Xml => "xml",
            ValueType::Geography => "geography",
            ValueType::Name => "name",
            ValueType::TextArray => "_text",
        }
    }

    /// Resolve a type name reported by the database to a catalog entry.
    pub fn classify(type_name: &str) -> Result<ValueType> {
        TypeName::parse(type_name).map(|t| t.value_type)
    }

    pub fn family(self) -> Family {
        match self {
            ValueType::Int8
            | ValueType::BigSerial
            | ValueType::Float8
            | ValueType::Money
            | ValueType::Numeric
            | ValueType::Int4
            | ValueType::Int2
            | ValueType::SmallSerial
            | ValueType::Serial
            | ValueType::Float4 => Family::Numeric,

            ValueType::Varchar
            | ValueType::Bpchar
            | ValueType::Cidr
            | ValueType::Inet
            | ValueType::Json
            | ValueType::Jsonb
            | ValueType::MacAddr
            | ValueType::MacAddr8
            | ValueType::Text
            | ValueType::TsQuery
            | ValueType::TsVector
            | ValueType::Uuid
            | ValueType::Xml
            | ValueType::Name
            | ValueType::TextArray => Family::Textual,

            ValueType::Date
            | ValueType::Time
            | ValueType::TimeTz
            | ValueType::Timestamp
            | ValueType::TimestampTz => Family::Temporal,

            ValueType::Bool => Family::Boolean,

            ValueType::Bit
            | ValueType::VarBit
            | ValueType::Box
            | ValueType::Bytea
            | ValueType::Circle
            | ValueType::Interval
            | ValueType::Line
            | ValueType::Lseg
            | ValueType::Path
            | ValueType::PgLsn
            | ValueType::Point
            | ValueType::Polygon
            | ValueType::TxidSnapshot
            | ValueType::Geography => Family::Other,
        }
    }

    fn decode_rule(self) -> DecodeRule {
        match self {
            ValueType::Int8
            | ValueType::BigSerial
            | ValueType::Int4
            | ValueType::Int2
            | ValueType::SmallSerial
            | ValueType::Serial
            | ValueType::Float8
            | ValueType::Float4
            | ValueType::Money
            | ValueType::Numeric => DecodeRule::Number,

            ValueType::Bool => DecodeRule::Boolean,

            ValueType::Varchar
            | ValueType::Bpchar
            | ValueType::Cidr
            | ValueType::Inet
            | ValueType::Json
            | ValueType::Jsonb
            | ValueType::MacAddr
            | ValueType::MacAddr8
            | ValueType::Text
            | ValueType::TsQuery
            | ValueType::TsVector
            | ValueType::Uuid
            | ValueType::Xml
            | ValueType::Name
            | ValueType::TextArray
            | ValueType::Date
            | ValueType::Time
            | ValueType::TimeTz
            | ValueType::Timestamp
            | ValueType::TimestampTz => DecodeRule::Text,

            ValueType::Bytea | ValueType::Bit | ValueType::VarBit => DecodeRule::Binary,

            ValueType::Box
            | ValueType::Circle
            | ValueType::Interval
            | ValueType::Line
            | ValueType::Lseg
            | ValueType::Path
            | ValueType::PgLsn
            | ValueType::Point
            | ValueType::Polygon
            | ValueType::TxidSnapshot
            | ValueType::Geography => DecodeRule::Generic,
        }
    }

    /// Turn a raw value into the text shown in the grid.
    pub fn decode(self, raw: &RawValue) -> String {
        if raw.is_null() {
            return "null".to_string();
        }

        match (self.decode_rule(), raw) {
            (DecodeRule::Boolean, RawValue::Integer(n)) => (*n != 0).to_string(),
            (DecodeRule::Boolean, RawValue::Real(r)) => (*r != 0.0).to_string(),
            (DecodeRule::Boolean, RawValue::Text(s)) => match parse_bool(s) {
                Some(b) => b.to_string(),
                None => s.clone(),
            },
            (DecodeRule::Text, RawValue::Text(s)) => s.clone(),
            (DecodeRule::Number | DecodeRule::Binary | DecodeRule::Generic, _)
            | (DecodeRule::Boolean | DecodeRule::Text, _) => raw.generic_text(),
        }
    }

    /// Color for a decoded value of this type.
    pub fn color_for(self, display_text: &str) -> Color {
        if display_text == "null" {
            return Color::Null;
        }
        self.family().color()
    }

    /// Whether the schema listing shows a declared maximum length for this type
    pub fn has_length(self) -> bool {
        matches!(
            self,
            ValueType::Bpchar | ValueType::Varchar | ValueType::Bit | ValueType::VarBit
        )
    }
}

impl TypeName {
    /// Parse a declared type such as `CHARACTER VARYING(100)` or
    /// `timestamp(3) with time zone`.
    pub fn parse(declared: &str) -> Result<TypeName> {
        let lowered = declared.trim().to_lowercase();

        let mut length = None;
        if let Some(caps) = TYPE_ARGS_REGEX.captures(&lowered) {
            let args: Vec<&str> = caps[1].split(',').map(str::trim).collect();
            if let [single] = args.as_slice() {
                length = single.parse::<u32>().ok();
            }
        }

        let stripped = TYPE_ARGS_REGEX.replace_all(&lowered, " ");
        let normalized = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

        lookup(&normalized)
            .map(|value_type| TypeName { value_type, length })
            .ok_or_else(|| Error::UnknownType(declared.trim().to_string()))
    }
}

fn lookup(name: &str) -> Option<ValueType> {
    if let Some(found) = ValueType::ALL.iter().find(|t| t.name() == name) {
        return Some(*found);
    }

    let value_type = match name {
        "integer" | "int" | "mediumint" => ValueType::Int4,
        "bigint" | "unsigned big int" => ValueType::Int8,
        "smallint" | "tinyint" => ValueType::Int2,
        "serial2" => ValueType::SmallSerial,
        "serial4" => ValueType::Serial,
        "serial8" => ValueType::BigSerial,
        "boolean" => ValueType::Bool,
        "real" => ValueType::Float4,
        "double precision" | "double" | "float" => ValueType::Float8,
        "decimal" => ValueType::Numeric,
        "character varying" | "varying character" | "nvarchar" => ValueType::Varchar,
        "character" | "char" | "nchar" | "native character" => ValueType::Bpchar,
        "bit varying" => ValueType::VarBit,
        "time without time zone" => ValueType::Time,
        "time with time zone" => ValueType::TimeTz,
        "timestamp without time zone" | "datetime" => ValueType::Timestamp,
        "timestamp with time zone" => ValueType::TimestampTz,
        "blob" => ValueType::Bytea,
        "clob" => ValueType::Text,
        "text[]" => ValueType::TextArray,
        _ => return None,
    };
    Some(value_type)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "t" | "true" | "1" | "y" | "yes" | "on" => Some(true),
        "f" | "false" | "0" | "n" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ValueType::classify(s)
    }
}
