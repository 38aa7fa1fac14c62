// Prompt assembly for the generation backend. The document-type lead comes
// from configuration (`config/ai-prompts.json`); the wrapper embeds the
// template structure and every employee field.

use crate::models::employee::EmployeeRequest;
use crate::settings::GenerationPrompts;

/// Builds the single instruction sent to the backend for one document.
pub fn build_prompt(
    prompts: &GenerationPrompts,
    doc_type: &str,
    employee: &EmployeeRequest,
    company_name: &str,
    template_text: &str,
) -> String {
    let focus_areas = employee
        .focus_areas
        .clone()
        .unwrap_or_else(|| "Various areas".to_string());

    let lead = match doc_type {
        "confirmation" => prompts
            .confirmation_letter
            .personalized
            .replace("{employee_name}", &employee.employee_name)
            .replace("{role}", &employee.job_title)
            .replace("{company_name}", company_name),
        "roles" | "roles-responsibilities" => prompts
            .roles_responsibilities
            .main_description
            .replace("{career_level}", &employee.career_level)
            .replace("{team}", &employee.team)
            .replace("{focus_areas}", &focus_areas),
        _ => prompts
            .contract_generation
            .job_description
            .replace("{role}", &employee.job_title)
            .replace("{company_name}", company_name)
            .replace("{team}", &employee.team)
            .replace("{responsibilities}", &employee.job_description),
    };

    format!(
        "{lead}\n\n\
         Please use the following template structure and fill in the placeholders \
         with the provided employee data:\n\n\
         {template_text}\n\n\
         Employee Data:\n\
         - Name: {}\n\
         - Job Title: {}\n\
         - Team: {}\n\
         - Career Level: {}\n\
         - Salary: {}\n\
         - Start Date: {}\n\
         - Reporting To: {}\n\
         - Work Location: {}\n\
         - Employee ID: {}\n\
         - Job Description: {}\n\
         - Focus Areas: {}\n\n\
         Generate a complete, professional document that fills in all the template \
         placeholders with the provided data.",
        employee.employee_name,
        employee.job_title,
        employee.team,
        employee.career_level,
        employee.salary,
        employee.start_date,
        employee.reporting_to,
        employee.work_location,
        employee.employee_id,
        employee.job_description,
        focus_areas,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompts() -> GenerationPrompts {
        serde_json::from_value(serde_json::json!({
            "contract_generation": {
                "job_description": "Write a job description for a {role} in the {team} team at {company_name}: {responsibilities}"
            },
            "confirmation_letter": {
                "personalized": "Write a confirmation letter for {employee_name}, {role} at {company_name}."
            },
            "roles_responsibilities": {
                "main_description": "Describe expectations for a {career_level} in {team}, focusing on {focus_areas}."
            }
        }))
        .unwrap()
    }

    fn employee() -> EmployeeRequest {
        EmployeeRequest {
            employee_name: "Sarah Lim".to_string(),
            job_title: "Marketing Associate".to_string(),
            team: "Marketing".to_string(),
            career_level: "Associate".to_string(),
            salary: "RM 5000".to_string(),
            start_date: "2025-03-15".to_string(),
            reporting_to: "Head of Marketing".to_string(),
            work_location: "Mereka, PUBLIKA & Remotely".to_string(),
            employee_id: "MRK-0042".to_string(),
            job_description: "Plans and runs marketing campaigns.".to_string(),
            focus_areas: None,
            documents: vec![],
        }
    }

    #[test]
    fn contract_prompt_substitutes_role_tokens_and_embeds_the_template() {
        let prompt = build_prompt(
            &prompts(),
            "contract",
            &employee(),
            "Mereka",
            "TEMPLATE {{ employee_name }}",
        );
        assert!(prompt.starts_with(
            "Write a job description for a Marketing Associate in the Marketing team at Mereka"
        ));
        assert!(prompt.contains("TEMPLATE {{ employee_name }}"));
        assert!(prompt.contains("- Name: Sarah Lim"));
        assert!(prompt.contains("- Employee ID: MRK-0042"));
    }

    #[test]
    fn confirmation_prompt_uses_the_personalized_lead() {
        let prompt = build_prompt(&prompts(), "confirmation", &employee(), "Mereka", "T");
        assert!(prompt.starts_with(
            "Write a confirmation letter for Sarah Lim, Marketing Associate at Mereka."
        ));
    }

    #[test]
    fn roles_prompt_defaults_missing_focus_areas() {
        let prompt = build_prompt(&prompts(), "roles", &employee(), "Mereka", "T");
        assert!(prompt.contains("focusing on Various areas"));
        assert!(prompt.contains("- Focus Areas: Various areas"));
    }

    #[test]
    fn roles_prompt_uses_supplied_focus_areas() {
        let mut request = employee();
        request.focus_areas = Some("Brand strategy".to_string());
        let prompt = build_prompt(&prompts(), "roles-responsibilities", &request, "Mereka", "T");
        assert!(prompt.contains("focusing on Brand strategy"));
    }
}
