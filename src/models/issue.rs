use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AppError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Loading condition of the ship when the issue was logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Laden,
    Ballast,
}

impl Condition {
    pub const ALL: [Condition; 2] = [Condition::Laden, Condition::Ballast];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Laden => "Laden",
            Condition::Ballast => "Ballast",
        }
    }
}

/// Size class of the ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShipClass {
    Capes,
    #[serde(rename = "Baby Capes")]
    BabyCapes,
    Panamax,
    #[serde(rename = "Handy-Supra")]
    HandySupra,
}

impl ShipClass {
    pub const ALL: [ShipClass; 4] = [
        ShipClass::Capes,
        ShipClass::BabyCapes,
        ShipClass::Panamax,
        ShipClass::HandySupra,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShipClass::Capes => "Capes",
            ShipClass::BabyCapes => "Baby Capes",
            ShipClass::Panamax => "Panamax",
            ShipClass::HandySupra => "Handy-Supra",
        }
    }
}

/// What the voyage was optimised for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoyagePriority {
    #[serde(rename = "Min Voyage Cost")]
    MinVoyageCost,
    #[serde(rename = "Min Bunker Cons")]
    MinBunkerCons,
    Warranty,
    Reporting,
}

impl VoyagePriority {
    pub const ALL: [VoyagePriority; 4] = [
        VoyagePriority::MinVoyageCost,
        VoyagePriority::MinBunkerCons,
        VoyagePriority::Warranty,
        VoyagePriority::Reporting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VoyagePriority::MinVoyageCost => "Min Voyage Cost",
            VoyagePriority::MinBunkerCons => "Min Bunker Cons",
            VoyagePriority::Warranty => "Warranty",
            VoyagePriority::Reporting => "Reporting",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for VoyagePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the issue log, held as text exactly as it sits in the workbook.
///
/// Serialized field names are the workbook column headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    #[serde(rename = "Issue Logged Date")]
    pub issue_logged_date: String,
    #[serde(rename = "Ship Name")]
    pub ship_name: String,
    #[serde(rename = "Condition")]
    pub condition: String,
    #[serde(rename = "Ship Class")]
    pub ship_class: String,
    #[serde(rename = "Voyage Priority")]
    pub voyage_priority: String,
    #[serde(rename = "Apprx Variance against Veson Desc(%)")]
    pub variance_pct: String,
    #[serde(rename = "Dry Dock Date")]
    pub dry_dock_date: String,
    #[serde(rename = "Propeller Polishing Date")]
    pub propeller_polishing_date: String,
    #[serde(rename = "Under Water Cleaning Date")]
    pub under_water_cleaning_date: String,
    #[serde(rename = "EOPD Updates")]
    pub eopd_updates: String,
    #[serde(rename = "Remarks")]
    pub remarks: String,
    #[serde(rename = "Attachments")]
    pub attachments: String,
}

impl IssueRecord {
    /// Cell values in workbook column order.
    pub fn to_fields(&self) -> [&str; 12] {
        [
            self.issue_logged_date.as_str(),
            self.ship_name.as_str(),
            self.condition.as_str(),
            self.ship_class.as_str(),
            self.voyage_priority.as_str(),
            self.variance_pct.as_str(),
            self.dry_dock_date.as_str(),
            self.propeller_polishing_date.as_str(),
            self.under_water_cleaning_date.as_str(),
            self.eopd_updates.as_str(),
            self.remarks.as_str(),
            self.attachments.as_str(),
        ]
    }

    pub fn from_fields(fields: [String; 12]) -> Self {
        let [
            issue_logged_date,
            ship_name,
            condition,
            ship_class,
            voyage_priority,
            variance_pct,
            dry_dock_date,
            propeller_polishing_date,
            under_water_cleaning_date,
            eopd_updates,
            remarks,
            attachments,
        ] = fields;

        IssueRecord {
            issue_logged_date,
            ship_name,
            condition,
            ship_class,
            voyage_priority,
            variance_pct,
            dry_dock_date,
            propeller_polishing_date,
            under_water_cleaning_date,
            eopd_updates,
            remarks,
            attachments,
        }
    }

    pub fn attachment_paths(&self) -> Vec<&str> {
        if self.attachments.is_empty() {
            return Vec::new();
        }
        self.attachments.split(", ").collect()
    }
}

/// A submitted form, before it is flattened to text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewIssue {
    pub issue_logged_date: NaiveDate,
    pub ship_name: String,
    pub condition: Condition,
    pub ship_class: ShipClass,
    pub voyage_priority: VoyagePriority,
    pub variance_pct: f64,
    #[serde(default)]
    pub dry_dock_date: Option<NaiveDate>,
    #[serde(default)]
    pub propeller_polishing_date: Option<NaiveDate>,
    #[serde(default)]
    pub under_water_cleaning_date: Option<NaiveDate>,
    #[serde(default)]
    pub eopd_updates: String,
    #[serde(default)]
    pub remarks: String,
}

impl NewIssue {
    pub fn validate(&self) -> Result<()> {
        if self.ship_name.trim().is_empty() {
            return Err(AppError::BadRequest("Ship Name is required".into()));
        }
        if !self.variance_pct.is_finite() || !(0.0..=100.0).contains(&self.variance_pct) {
            return Err(AppError::BadRequest(format!(
                "Variance must be between 0 and 100, got {}",
                self.variance_pct
            )));
        }
        Ok(())
    }

    /// Folder-key form of the issue date (`YYYY-MM-DD`).
    pub fn issue_date_str(&self) -> String {
        self.issue_logged_date.format(DATE_FORMAT).to_string()
    }

    pub fn into_record(self, attachments: &[String]) -> IssueRecord {
        IssueRecord {
            issue_logged_date: self.issue_date_str(),
            ship_name: self.ship_name,
            condition: self.condition.to_string(),
            ship_class: self.ship_class.to_string(),
            voyage_priority: self.voyage_priority.to_string(),
            variance_pct: self.variance_pct.to_string(),
            dry_dock_date: format_optional_date(self.dry_dock_date),
            propeller_polishing_date: format_optional_date(self.propeller_polishing_date),
            under_water_cleaning_date: format_optional_date(self.under_water_cleaning_date),
            eopd_updates: self.eopd_updates,
            remarks: self.remarks,
            attachments: attachments.join(", "),
        }
    }
}

fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Display row for the grid; `Sl No.` is derived from position and never stored.
#[derive(Debug, Clone, Serialize)]
pub struct GridRow {
    #[serde(rename = "Sl No.")]
    pub sl_no: usize,
    #[serde(flatten)]
    pub record: IssueRecord,
}

impl GridRow {
    pub fn number(records: Vec<IssueRecord>) -> Vec<GridRow> {
        records
            .into_iter()
            .enumerate()
            .map(|(i, record)| GridRow { sl_no: i + 1, record })
            .collect()
    }
}
