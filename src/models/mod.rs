pub mod issue;

pub use issue::{Condition, GridRow, IssueRecord, NewIssue, ShipClass, VoyagePriority};
