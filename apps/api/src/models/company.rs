use serde::{Deserialize, Serialize};

/// Static company configuration (`config/company-info.json`).
/// Loaded once at startup, read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub company: CompanyIdentity,
    pub working_hours: WorkingHours,
    pub overtime_policy: OvertimePolicy,
    pub leave_entitlements: LeaveEntitlements,
    pub benefits: Vec<String>,
    pub core_values: Vec<String>,
    pub termination: TerminationTerms,
    #[serde(default)]
    pub contract_terms: ContractTerms,
    pub hr_contact: HrContact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyIdentity {
    pub name: String,
    pub registration_number: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHours {
    pub days: String,
    pub start: String,
    pub end: String,
    pub hours_per_week: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimePolicy {
    pub description: String,
    pub compensation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveEntitlements {
    pub annual_leave_days: u32,
    pub medical_leave_days: u32,
    pub hospitalization_leave_days: u32,
    pub maternity_leave_days: u32,
    #[serde(default)]
    pub unpaid_leave: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminationTerms {
    pub notice_period: String,
    pub probation_terms: String,
    #[serde(default)]
    pub conditions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractTerms {
    pub default_duration: String,
}

impl Default for ContractTerms {
    fn default() -> Self {
        Self {
            default_duration: "1-year full time contract".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HrContact {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
}
