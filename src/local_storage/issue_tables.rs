/// Provides constants and utilities for working with
/// the issue log worksheet.
pub struct IssueTable;

impl IssueTable {
    /// The name of the worksheet holding the log
    pub const SHEET_NAME: &'static str = "Issues";

    /// The column for the date the issue was logged.
    pub const COLUMN_ISSUE_LOGGED_DATE: &'static str = "Issue Logged Date";

    /// The column for the free-text ship name.
    pub const COLUMN_SHIP_NAME: &'static str = "Ship Name";

    /// The column for the loading condition (Laden / Ballast).
    pub const COLUMN_CONDITION: &'static str = "Condition";

    /// The column for the ship size class.
    pub const COLUMN_SHIP_CLASS: &'static str = "Ship Class";

    /// The column for the voyage priority.
    pub const COLUMN_VOYAGE_PRIORITY: &'static str = "Voyage Priority";

    /// The column for the approximate variance in percent.
    pub const COLUMN_VARIANCE: &'static str = "Apprx Variance against Veson Desc(%)";

    pub const COLUMN_DRY_DOCK_DATE: &'static str = "Dry Dock Date";

    pub const COLUMN_PROPELLER_POLISHING_DATE: &'static str = "Propeller Polishing Date";

    pub const COLUMN_UNDER_WATER_CLEANING_DATE: &'static str = "Under Water Cleaning Date";

    pub const COLUMN_EOPD_UPDATES: &'static str = "EOPD Updates";

    pub const COLUMN_REMARKS: &'static str = "Remarks";

    /// The column for attachment paths, joined with ", ".
    pub const COLUMN_ATTACHMENTS: &'static str = "Attachments";

    /// Header row of the worksheet, in storage order.
    pub const COLUMNS: [&'static str; 12] = [
        Self::COLUMN_ISSUE_LOGGED_DATE,
        Self::COLUMN_SHIP_NAME,
        Self::COLUMN_CONDITION,
        Self::COLUMN_SHIP_CLASS,
        Self::COLUMN_VOYAGE_PRIORITY,
        Self::COLUMN_VARIANCE,
        Self::COLUMN_DRY_DOCK_DATE,
        Self::COLUMN_PROPELLER_POLISHING_DATE,
        Self::COLUMN_UNDER_WATER_CLEANING_DATE,
        Self::COLUMN_EOPD_UPDATES,
        Self::COLUMN_REMARKS,
        Self::COLUMN_ATTACHMENTS,
    ];

    /// Checks a header row read back from a workbook against the fixed schema.
    pub fn matches_header<S: AsRef<str>>(header: &[S]) -> bool {
        header.len() == Self::COLUMNS.len()
            && header
                .iter()
                .zip(Self::COLUMNS.iter())
                .all(|(found, expected)| found.as_ref().trim() == *expected)
    }
}
