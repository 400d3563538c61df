use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Record, Value};

/// Declared rendering type for a column.
///
/// The type is optional on a column; when absent, cells fall back to per-cell
/// runtime classification (the "auto" case) and render their raw string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Numeric,
    Date,
    Currency,
    Boolean,
    Status,
    Text,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Date => "date",
            ColumnType::Currency => "currency",
            ColumnType::Boolean => "boolean",
            ColumnType::Status => "status",
            ColumnType::Text => "text",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" | "number" => Ok(ColumnType::Numeric),
            "date" => Ok(ColumnType::Date),
            "currency" => Ok(ColumnType::Currency),
            "boolean" | "bool" => Ok(ColumnType::Boolean),
            "status" => Ok(ColumnType::Status),
            "text" => Ok(ColumnType::Text),
            _ => Err(format!("Unknown column type: {}", s)),
        }
    }
}

/// Injected formatting strategy carried on a column.
///
/// When present it takes precedence over every built-in formatting rule and
/// is invoked once per row per display pass. Renderers are configuration, not
/// data: they are never serialized and never consulted while filtering or
/// sorting.
pub trait CellRender: Send + Sync {
    fn render(&self, value: &Value, record: &Record) -> String;
}

impl<F> CellRender for F
where
    F: Fn(&Value, &Record) -> String + Send + Sync,
{
    fn render(&self, value: &Value, record: &Record) -> String {
        self(value, record)
    }
}

/// One field descriptor in a column schema.
///
/// `key` names the record field the column displays and must be unique within
/// a schema. The serde aliases accept the `prop`/`label` spelling used by
/// host-side column definitions.
#[derive(Clone, Serialize, Deserialize)]
pub struct Column {
    #[serde(alias = "prop")]
    pub key: String,
    #[serde(alias = "label")]
    pub title: String,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub column_type: Option<ColumnType>,
    #[serde(default = "default_sortable")]
    pub sortable: bool,
    #[serde(skip)]
    pub render: Option<Arc<dyn CellRender>>,
}

fn default_sortable() -> bool {
    true
}

impl Column {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            column_type: None,
            sortable: true,
            render: None,
        }
    }

    pub fn with_type(mut self, column_type: ColumnType) -> Self {
        self.column_type = Some(column_type);
        self
    }

    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn with_render<R>(mut self, render: R) -> Self
    where
        R: CellRender + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn has_render(&self) -> bool {
        self.render.is_some()
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("column_type", &self.column_type)
            .field("sortable", &self.sortable)
            .field("render", &self.render.as_ref().map(|_| "<custom>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_type_parses_known_names() {
        assert_eq!("currency".parse::<ColumnType>(), Ok(ColumnType::Currency));
        assert_eq!("Number".parse::<ColumnType>(), Ok(ColumnType::Numeric));
        assert!("percentage".parse::<ColumnType>().is_err());
    }

    #[test]
    fn deserializes_prop_label_aliases() {
        let column: Column =
            serde_json::from_str(r#"{"prop": "name", "label": "Name"}"#).expect("column");
        assert_eq!(column.key, "name");
        assert_eq!(column.title, "Name");
        assert_eq!(column.column_type, None);
        assert!(column.sortable);
        assert!(!column.has_render());
    }

    #[test]
    fn deserializes_declared_type() {
        let column: Column =
            serde_json::from_str(r#"{"key": "salary", "title": "Salary", "type": "currency", "sortable": false}"#)
                .expect("column");
        assert_eq!(column.column_type, Some(ColumnType::Currency));
        assert!(!column.sortable);
    }

    #[test]
    fn custom_render_applies_over_value() {
        let column = Column::new("name", "Name")
            .with_render(|value: &Value, _: &Record| format!("<{}>", value.to_text()));
        let record = Record::new().with("name", "John");
        let render = column.render.as_ref().expect("render");
        assert_eq!(render.render(&Value::from("John"), &record), "<John>");
    }
}
