use chrono::NaiveDateTime;
use serde::Serialize;

/// A finished document as returned to the caller. Nothing is persisted;
/// the content travels inline and the download URL is informational.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedDocument {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub filename: String,
    pub content: String,
    pub download_url: String,
}

/// Human-facing label for a template key: `roles-responsibilities` becomes
/// `Roles Responsibilities`.
pub fn document_label(template_key: &str) -> String {
    template_key
        .replace('-', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `{Employee_Name}_{template-key}_{YYYYmmdd_HHMMSS}.md`
pub fn document_filename(employee_name: &str, template_key: &str, now: NaiveDateTime) -> String {
    format!(
        "{}_{}_{}.md",
        employee_name.replace(' ', "_"),
        template_key,
        now.format("%Y%m%d_%H%M%S")
    )
}
