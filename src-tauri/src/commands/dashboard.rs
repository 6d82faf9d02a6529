//! Tauri commands for department dashboards.

use tracing::{info, warn};

use crate::department::{list_departments, DepartmentDashboard, DepartmentInfo, DepartmentSelection};

/// Departments shown in the sidebar.
#[tauri::command]
pub fn get_departments() -> Vec<DepartmentInfo> {
    list_departments()
}

/// KPI, competency and client-count data for one department.
///
/// An unknown department yields an empty dashboard with `known: false`.
#[tauri::command]
pub fn get_department_dashboard(department: String) -> DepartmentDashboard {
    let selection = DepartmentSelection::parse(&department);
    if selection.department().is_none() {
        warn!("Unknown department requested: {}", department);
    }
    let dashboard = DepartmentDashboard::for_selection(&selection);
    info!(
        "Dashboard for {}: {} KPIs, {} clients",
        dashboard.requested,
        dashboard.kpis.len(),
        dashboard.client_count
    );
    dashboard
}
