//! Department selection from the route and the matching fixture sets.
//!
//! Unknown identifiers are not an error: they resolve to an empty dashboard
//! flagged `known: false` so the UI can show its "unknown department" state.

use serde::Serialize;

use crate::clients::ClientRecord;
use crate::fixtures;
use crate::metrics::{CompetencyHistory, CompetencySummary, Kpi, KpiCard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Medical,
    Education,
    Enterprise,
}

impl Department {
    pub const ALL: [Department; 3] = [
        Department::Medical,
        Department::Education,
        Department::Enterprise,
    ];

    /// Route segment, e.g. `/dept/medical`.
    pub fn id(&self) -> &'static str {
        match self {
            Department::Medical => "medical",
            Department::Education => "education",
            Department::Enterprise => "enterprise",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Department::Medical => "医疗事业部",
            Department::Education => "教育事业部",
            Department::Enterprise => "企业客户部",
        }
    }

    pub fn clients(&self) -> Vec<ClientRecord> {
        match self {
            Department::Medical => fixtures::medical_clients(),
            Department::Education => fixtures::education_clients(),
            Department::Enterprise => fixtures::enterprise_clients(),
        }
    }

    pub fn kpis(&self) -> Vec<Kpi> {
        match self {
            Department::Medical => fixtures::medical_kpis(),
            Department::Education => fixtures::education_kpis(),
            Department::Enterprise => fixtures::enterprise_kpis(),
        }
    }

    pub fn competency(&self) -> CompetencyHistory {
        match self {
            Department::Medical => fixtures::medical_competency(),
            Department::Education => fixtures::education_competency(),
            Department::Enterprise => fixtures::enterprise_competency(),
        }
    }
}

/// Result of resolving a route segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentSelection {
    Known(Department),
    Unknown(String),
}

impl DepartmentSelection {
    /// Resolve a route segment. Matching ignores case and surrounding space.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        Department::ALL
            .into_iter()
            .find(|d| d.id() == normalized)
            .map(DepartmentSelection::Known)
            .unwrap_or_else(|| DepartmentSelection::Unknown(raw.to_string()))
    }

    pub fn department(&self) -> Option<Department> {
        match self {
            DepartmentSelection::Known(d) => Some(*d),
            DepartmentSelection::Unknown(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentInfo {
    pub id: String,
    pub name: String,
}

impl From<Department> for DepartmentInfo {
    fn from(d: Department) -> Self {
        Self {
            id: d.id().to_string(),
            name: d.display_name().to_string(),
        }
    }
}

/// Everything the dashboard pages render for one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentDashboard {
    /// The identifier as requested
    pub requested: String,
    pub known: bool,
    pub department: Option<DepartmentInfo>,
    pub kpis: Vec<KpiCard>,
    pub competency: CompetencyHistory,
    pub competency_summary: Option<CompetencySummary>,
    pub client_count: usize,
}

impl DepartmentDashboard {
    pub fn for_selection(selection: &DepartmentSelection) -> Self {
        match selection {
            DepartmentSelection::Known(d) => {
                let competency = d.competency();
                Self {
                    requested: d.id().to_string(),
                    known: true,
                    department: Some((*d).into()),
                    kpis: d.kpis().into_iter().map(KpiCard::from).collect(),
                    competency_summary: competency.summary(),
                    competency,
                    client_count: d.clients().len(),
                }
            }
            DepartmentSelection::Unknown(raw) => Self {
                requested: raw.clone(),
                known: false,
                department: None,
                kpis: Vec::new(),
                competency: CompetencyHistory::default(),
                competency_summary: None,
                client_count: 0,
            },
        }
    }
}

/// Department list for the sidebar.
pub fn list_departments() -> Vec<DepartmentInfo> {
    Department::ALL.into_iter().map(DepartmentInfo::from).collect()
}
