use serde::Serialize;

pub const AVAILABLE_STATUS: &str = "available";

/// One row of the inventory report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceRecord {
    pub account_id: String,
    pub region: String,
    pub instance_name: String,
    pub instance_type: String,
    pub engine_type: String,
}

/// Provider-neutral view of one `DescribeDBInstances` item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DbInstanceSummary {
    pub status: String,
    pub identifier: String,
    pub instance_class: String,
    pub engine: String,
}

impl DbInstanceSummary {
    pub fn is_available(&self) -> bool {
        self.status == AVAILABLE_STATUS
    }
}

#[derive(Debug, Clone, Default)]
pub struct InstancePage {
    pub instances: Vec<DbInstanceSummary>,
    pub next_marker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanFailure {
    pub profile: String,
    pub region: Option<String>,
    pub message: String,
}
