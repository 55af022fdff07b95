//! Project report entities.

use serde::Serialize;

use super::geo::GeoResult;

/// Marker the report source writes into cells whose lookup failed.
pub const NO_MATCH: &str = "#NO MATCH";

/// Column metadata of a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportColumn {
    pub id: Option<i64>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A report row as plain cell text, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    pub id: i64,
    pub cells: Vec<String>,
}

impl SheetRow {
    /// Text of the cell at `index`, or `""` when the row is shorter.
    pub fn cell(&self, index: usize) -> String {
        self.cells.get(index).cloned().unwrap_or_default()
    }
}

/// A tabular report as delivered by the report source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetReport {
    pub name: String,
    pub total_row_count: u64,
    pub columns: Vec<ReportColumn>,
    pub rows: Vec<SheetRow>,
}

/// One tracked project with its geocoded position.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProjectRow {
    pub id: i64,
    pub project_name: String,
    pub project_status: String,
    pub status_comments: String,
    pub city: String,
    pub address: String,
    pub st: String,
    pub survey_requested: String,
    pub survey_received: String,
    pub brandbook_design_requested: String,
    pub brandbook_design_received: String,
    pub design_approval_requested: String,
    pub design_approval_received: String,
    pub landlord_approval_requested: String,
    pub landlord_approval_received: String,
    pub permit_submitted: String,
    pub permit_approved: String,
    pub production_released: String,
    pub ship_date_schedule: String,
    pub install_start: String,
    pub install_complete: String,
    pub order: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl ProjectRow {
    /// Maps the fixed report layout onto named fields. Coordinates start empty.
    pub fn from_sheet_row(row: &SheetRow) -> Self {
        Self {
            id: row.id,
            project_name: row.cell(0),
            project_status: row.cell(1),
            status_comments: row.cell(2),
            city: row.cell(3),
            address: row.cell(4),
            st: row.cell(5),
            survey_requested: row.cell(6),
            survey_received: row.cell(7),
            brandbook_design_requested: row.cell(8),
            brandbook_design_received: row.cell(9),
            design_approval_requested: row.cell(10),
            design_approval_received: row.cell(11),
            landlord_approval_requested: row.cell(12),
            landlord_approval_received: row.cell(13),
            permit_submitted: row.cell(14),
            permit_approved: row.cell(15),
            production_released: row.cell(16),
            ship_date_schedule: row.cell(17),
            install_start: row.cell(18),
            install_complete: row.cell(19),
            order: row.cell(20),
            lat: None,
            lon: None,
        }
    }

    /// Address string sent to the geocoder.
    pub fn full_address(&self) -> String {
        format!("{}, {}, {}, USA", self.address, self.city, self.st)
    }

    pub fn with_coordinates(mut self, coords: GeoResult) -> Self {
        self.lat = coords.lat;
        self.lon = coords.lon;
        self
    }

    /// Returns false for rows carrying lookup failures or missing key fields.
    pub fn is_usable(&self) -> bool {
        let no_match = [
            &self.project_name,
            &self.project_status,
            &self.city,
            &self.address,
            &self.st,
        ]
        .iter()
        .any(|field| field.as_str() == NO_MATCH);

        let blank = [&self.project_name, &self.city, &self.address]
            .iter()
            .any(|field| field.trim().is_empty());

        !no_match && !blank
    }
}

/// The transformed report served to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    pub name: String,
    pub total_row_count: u64,
    pub columns: Vec<ReportColumn>,
    pub rows: Vec<ProjectRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_row(cells: &[&str]) -> SheetRow {
        SheetRow {
            id: 7,
            cells: cells.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_from_sheet_row_maps_positions() {
        let mut cells = vec!["Store 12", "Permitting", "waiting", "Denver", "1600 Broadway", "CO"];
        cells.resize(21, "");
        cells[15] = "2024-05-01";
        cells[20] = "PO-991";

        let row = ProjectRow::from_sheet_row(&sheet_row(&cells));

        assert_eq!(row.id, 7);
        assert_eq!(row.project_name, "Store 12");
        assert_eq!(row.city, "Denver");
        assert_eq!(row.address, "1600 Broadway");
        assert_eq!(row.st, "CO");
        assert_eq!(row.permit_approved, "2024-05-01");
        assert_eq!(row.order, "PO-991");
        assert_eq!(row.full_address(), "1600 Broadway, Denver, CO, USA");
    }

    #[test]
    fn test_short_row_fills_blanks() {
        let row = ProjectRow::from_sheet_row(&sheet_row(&["Only name"]));
        assert_eq!(row.project_name, "Only name");
        assert_eq!(row.order, "");
        assert_eq!(row.full_address(), ", , , USA");
    }

    #[test]
    fn test_is_usable() {
        let base = ProjectRow {
            project_name: "Store".into(),
            project_status: "Open".into(),
            city: "Denver".into(),
            address: "1 Main".into(),
            st: "CO".into(),
            ..Default::default()
        };
        assert!(base.is_usable());

        let no_match = ProjectRow {
            st: NO_MATCH.into(),
            ..base.clone()
        };
        assert!(!no_match.is_usable());

        let blank_city = ProjectRow {
            city: "  ".into(),
            ..base.clone()
        };
        assert!(!blank_city.is_usable());

        let blank_state = ProjectRow {
            st: String::new(),
            ..base
        };
        assert!(blank_state.is_usable());
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = ProjectReport {
            name: "Rollout".into(),
            total_row_count: 3,
            columns: vec![ReportColumn {
                id: Some(1),
                title: "Project".into(),
                kind: "TEXT_NUMBER".into(),
            }],
            rows: vec![],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["totalRowCount"], 3);
        assert_eq!(json["columns"][0]["type"], "TEXT_NUMBER");
    }
}
