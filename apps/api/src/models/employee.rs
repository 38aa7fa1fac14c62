use serde::{Deserialize, Serialize};

/// Incoming employee record for document generation.
///
/// Every field is defaulted so deserialization never rejects a request body;
/// `first_missing_field` produces the per-field validation message instead,
/// in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeRequest {
    pub employee_name: String,
    pub job_title: String,
    pub team: String,
    pub career_level: String,
    pub salary: String,
    pub start_date: String,
    pub reporting_to: String,
    pub work_location: String,
    pub employee_id: String,
    pub job_description: String,
    /// Optional comma-separated override for the team's focus areas.
    pub focus_areas: Option<String>,
    /// Requested document-type identifiers (`contract`, `confirmation`, `roles`).
    pub documents: Vec<String>,
}

impl EmployeeRequest {
    /// Wire name of the first required field that is absent or empty.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        let required: [(&'static str, &str); 10] = [
            ("employeeName", &self.employee_name),
            ("jobTitle", &self.job_title),
            ("team", &self.team),
            ("careerLevel", &self.career_level),
            ("salary", &self.salary),
            ("startDate", &self.start_date),
            ("reportingTo", &self.reporting_to),
            ("workLocation", &self.work_location),
            ("employeeId", &self.employee_id),
            ("jobDescription", &self.job_description),
        ];
        required
            .iter()
            .find(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
    }
}
