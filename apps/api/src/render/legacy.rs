//! Literal token substitution, kept for documents written against the fixed
//! placeholder vocabulary rather than the template language. No loops or
//! conditionals; unknown tokens survive verbatim.

use crate::models::company::CompanyIdentity;
use crate::models::employee::EmployeeRequest;

/// Replaces the enumerated placeholder tokens with employee and company
/// values. Start date is substituted exactly as supplied.
pub fn fill_placeholders(
    template: &str,
    employee: &EmployeeRequest,
    company: &CompanyIdentity,
    contract_date: &str,
) -> String {
    let replacements: [(&str, &str); 13] = [
        ("{{ employee_name }}", &employee.employee_name),
        ("{{ job_title }}", &employee.job_title),
        ("{{ team }}", &employee.team),
        ("{{ career_level }}", &employee.career_level),
        ("{{ salary }}", &employee.salary),
        ("{{ start_date }}", &employee.start_date),
        ("{{ reporting_to }}", &employee.reporting_to),
        ("{{ work_location }}", &employee.work_location),
        ("{{ employee_id }}", &employee.employee_id),
        ("{{ job_description }}", &employee.job_description),
        ("{{ contract_date }}", contract_date),
        ("{{ company.name }}", &company.name),
        ("{{ company.registration_number }}", &company.registration_number),
    ];

    let mut content = template.to_string();
    for (token, value) in replacements {
        content = content.replace(token, value);
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn company() -> CompanyIdentity {
        CompanyIdentity {
            name: "Mereka".to_string(),
            registration_number: "202001012345".to_string(),
            address: String::new(),
        }
    }

    #[test]
    fn substitutes_the_full_token_vocabulary() {
        let template = "{{ employee_name }} | {{ job_title }} | {{ team }} | \
                        {{ career_level }} | {{ salary }} | {{ start_date }} | \
                        {{ reporting_to }} | {{ work_location }} | {{ employee_id }} | \
                        {{ job_description }} | {{ contract_date }} | {{ company.name }} | \
                        {{ company.registration_number }}";
        let output = fill_placeholders(template, &employee(), &company(), "15/03/2025");
        assert_eq!(
            output,
            "Sarah Lim | Marketing Associate | Marketing | Associate | RM 5000 | \
             2025-03-15 | Head of Marketing | Mereka, PUBLIKA & Remotely | MRK-0042 | \
             Plans and runs marketing campaigns. | 15/03/2025 | Mereka | 202001012345"
        );
        assert!(crate::render::unresolved_placeholders(&output).is_empty());
    }

    #[test]
    fn unknown_tokens_survive_verbatim() {
        let output = fill_placeholders(
            "{{ employee_name }} / {{ probation_period }}",
            &employee(),
            &company(),
            "15/03/2025",
        );
        assert_eq!(output, "Sarah Lim / {{ probation_period }}");
        assert_eq!(
            crate::render::unresolved_placeholders(&output),
            vec!["{{ probation_period }}"]
        );
    }

    #[test]
    fn repeated_tokens_are_all_replaced() {
        let output = fill_placeholders(
            "{{ employee_name }} and again {{ employee_name }}",
            &employee(),
            &company(),
            "15/03/2025",
        );
        assert_eq!(output, "Sarah Lim and again Sarah Lim");
    }
}
