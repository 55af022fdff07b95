//! Wire format of the Smartsheet `GET /reports/{id}` response.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::{ReportColumn, SheetReport, SheetRow};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ReportPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub total_row_count: Option<u64>,
    #[serde(default)]
    pub columns: Vec<ColumnPayload>,
    #[serde(default)]
    pub rows: Vec<RowPayload>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ColumnPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct RowPayload {
    pub id: i64,
    #[serde(default)]
    pub cells: Vec<CellPayload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CellPayload {
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub display_value: Option<String>,
}

impl CellPayload {
    /// Display value when non-empty, otherwise a truthy raw value, otherwise `""`.
    pub fn text(&self) -> String {
        if let Some(display) = self.display_value.as_deref().filter(|d| !d.is_empty()) {
            return display.to_string();
        }

        match &self.value {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) if n.as_f64().is_some_and(|f| f != 0.0) => n.to_string(),
            Some(Value::Bool(true)) => "true".to_string(),
            _ => String::new(),
        }
    }
}

impl From<ReportPayload> for SheetReport {
    fn from(payload: ReportPayload) -> Self {
        Self {
            name: payload.name.unwrap_or_default(),
            total_row_count: payload.total_row_count.unwrap_or_default(),
            columns: payload
                .columns
                .into_iter()
                .map(|c| ReportColumn {
                    id: c.id,
                    title: c.title,
                    kind: c.kind,
                })
                .collect(),
            rows: payload
                .rows
                .into_iter()
                .map(|r| SheetRow {
                    id: r.id,
                    cells: r.cells.iter().map(CellPayload::text).collect(),
                })
                .collect(),
        }
    }
}
