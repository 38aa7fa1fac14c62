use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::kpi::{self, KpiBreakdown, KpiCategory};
use crate::models::company::{
    CompanyIdentity, CompanyInfo, HrContact, LeaveEntitlements, OvertimePolicy, TerminationTerms,
    WorkingHours,
};
use crate::models::employee::EmployeeRequest;
use crate::models::roles::JobRoleCatalog;

/// Wire format for start dates.
const WIRE_DATE: &str = "%Y-%m-%d";
/// Display format used in every rendered document.
const DISPLAY_DATE: &str = "%d/%m/%Y";

const CONTRACT_DURATION_DAYS: i64 = 365;
const REVIEW_PERIOD_DAYS: i64 = 90;

/// Everything a document template can reference, computed fresh per request.
/// Fully populated: the canonical rendering path never sees an absent field.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    pub employee_name: String,
    pub employee_id: String,
    pub job_title: String,
    pub team: String,
    pub career_level: String,
    pub salary: String,
    pub start_date: String,
    pub end_date: String,
    pub contract_date: String,
    pub reporting_to: String,
    pub work_location: String,
    pub contract_term: String,

    pub company: CompanyIdentity,
    pub working_hours: WorkingHours,
    pub overtime_policy: OvertimePolicy,
    pub leave_entitlements: LeaveEntitlements,
    pub benefits: Vec<String>,
    pub core_values: Vec<String>,
    pub termination: TerminationTerms,

    pub role_responsibilities: Vec<String>,
    pub team_focus_areas: Vec<String>,
    pub job_description: String,
    pub kpi_breakdown: KpiBreakdown,
    pub vision_activities: String,
    pub delivery_activities: String,
    pub financial_activities: String,
    pub quality_activities: String,
    pub lnd_activities: String,
    pub ico_activities: String,

    pub confirmation_date: String,
    pub effective_date: String,
    pub next_review_date: String,
    pub key_responsibilities: Vec<String>,
    pub hr_contact: HrContact,
}

impl RenderContext {
    /// Builds a context against the process clock.
    pub fn build(
        employee: &EmployeeRequest,
        company: &CompanyInfo,
        catalog: &JobRoleCatalog,
    ) -> Self {
        Self::build_at(employee, company, catalog, Local::now().naive_local())
    }

    /// Clock-injected variant. `now` stamps the confirmation date and anchors
    /// arithmetic on the degraded path; everything else derives from the
    /// supplied start date.
    pub fn build_at(
        employee: &EmployeeRequest,
        company: &CompanyInfo,
        catalog: &JobRoleCatalog,
        now: NaiveDateTime,
    ) -> Self {
        let today = now.date();

        // An unparseable start date is shown verbatim; arithmetic runs from today.
        let (start_display, anchor) =
            match NaiveDate::parse_from_str(&employee.start_date, WIRE_DATE) {
                Ok(date) => (date.format(DISPLAY_DATE).to_string(), date),
                Err(_) => (employee.start_date.clone(), today),
            };
        let end_date = (anchor + Duration::days(CONTRACT_DURATION_DAYS))
            .format(DISPLAY_DATE)
            .to_string();
        let next_review_date = (anchor + Duration::days(REVIEW_PERIOD_DAYS))
            .format(DISPLAY_DATE)
            .to_string();

        let role = catalog.role_for(&employee.career_level);
        let team = catalog.team_profile(&employee.team);
        let kpi_breakdown = kpi::normalize_kpis(&role.kpi_breakdown);

        // Client-supplied focus areas win; otherwise the team's configured list.
        let team_focus_areas = match employee
            .focus_areas
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
        {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|area| !area.is_empty())
                .map(String::from)
                .collect(),
            None => team.focus_areas,
        };

        let key_responsibilities: Vec<String> =
            role.responsibilities.iter().take(5).cloned().collect();

        Self {
            employee_name: employee.employee_name.clone(),
            employee_id: employee.employee_id.clone(),
            job_title: employee.job_title.clone(),
            team: employee.team.clone(),
            career_level: employee.career_level.clone(),
            salary: employee.salary.clone(),
            start_date: start_display.clone(),
            end_date,
            contract_date: start_display.clone(),
            reporting_to: employee.reporting_to.clone(),
            work_location: employee.work_location.clone(),
            contract_term: company.contract_terms.default_duration.clone(),

            company: company.company.clone(),
            working_hours: company.working_hours.clone(),
            overtime_policy: company.overtime_policy.clone(),
            leave_entitlements: company.leave_entitlements.clone(),
            benefits: company.benefits.clone(),
            core_values: company.core_values.clone(),
            termination: company.termination.clone(),

            role_responsibilities: role.responsibilities,
            team_focus_areas,
            job_description: employee.job_description.clone(),
            kpi_breakdown,
            vision_activities: KpiCategory::Vision.activity_bullets(),
            delivery_activities: KpiCategory::Delivery.activity_bullets(),
            financial_activities: KpiCategory::Financial.activity_bullets(),
            quality_activities: KpiCategory::Quality.activity_bullets(),
            lnd_activities: KpiCategory::LearningDevelopment.activity_bullets(),
            ico_activities: KpiCategory::InternalComms.activity_bullets(),

            confirmation_date: today.format(DISPLAY_DATE).to_string(),
            effective_date: start_display,
            next_review_date,
            key_responsibilities,
            hr_contact: company.hr_contact.clone(),
        }
    }
}
