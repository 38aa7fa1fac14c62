pub mod legacy;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use tera::Tera;
use thiserror::Error;

use crate::context::RenderContext;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no template backs document type '{0}'")]
    TemplateMissing(String),

    #[error("template engine error: {0}")]
    Engine(#[from] tera::Error),

    #[error("template directory error: {0}")]
    Io(#[from] std::io::Error),
}

/// Backing template file for a requested document-type identifier.
pub fn template_file_for(doc_type: &str) -> String {
    match doc_type {
        "contract" => "contract.md".to_string(),
        "confirmation" => "confirmation.md".to_string(),
        "roles" | "roles-responsibilities" => "roles-responsibilities.md".to_string(),
        other => format!("{other}.md"),
    }
}

/// Canonical template key: `roles` folds into `roles-responsibilities`.
pub fn canonical_key(doc_type: &str) -> &str {
    if doc_type == "roles" {
        "roles-responsibilities"
    } else {
        doc_type
    }
}

/// Read-only template repository: raw sources (embedded into generation
/// prompts) plus a compiled tera environment for deterministic rendering.
pub struct TemplateStore {
    sources: HashMap<String, String>,
    tera: Tera,
}

impl TemplateStore {
    /// Loads every `*.md` file under `dir`. Autoescaping is off; the output
    /// is markdown, not HTML.
    pub fn load(dir: &Path) -> Result<Self, RenderError> {
        let mut sources = HashMap::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("md") {
                let name = entry.file_name().to_string_lossy().into_owned();
                sources.insert(name, fs::read_to_string(&path)?);
            }
        }
        let mut tera = Tera::default();
        tera.add_raw_templates(
            sources
                .iter()
                .map(|(name, source)| (name.as_str(), source.as_str())),
        )?;
        tera.autoescape_on(vec![]);
        Ok(Self { sources, tera })
    }

    /// Raw template text for a document type.
    pub fn source(&self, doc_type: &str) -> Result<&str, RenderError> {
        let file = template_file_for(doc_type);
        self.sources
            .get(&file)
            .map(String::as_str)
            .ok_or_else(|| RenderError::TemplateMissing(doc_type.to_string()))
    }

    /// Canonical rendering path: full template-language evaluation
    /// (interpolation, conditionals, iteration, nested field access).
    pub fn render(&self, doc_type: &str, context: &RenderContext) -> Result<String, RenderError> {
        let file = template_file_for(doc_type);
        if !self.sources.contains_key(&file) {
            return Err(RenderError::TemplateMissing(doc_type.to_string()));
        }
        let ctx = tera::Context::from_serialize(context)?;
        Ok(self.tera.render(&file, &ctx)?)
    }
}

lazy_static! {
    static ref PLACEHOLDER: Regex =
        Regex::new(r"\{\{\s*[A-Za-z0-9_.]+\s*\}\}").expect("placeholder pattern is valid");
}

/// Placeholder tokens still present in finished output. A token must resolve
/// or survive verbatim, never vanish silently; anything this returns on a
/// finished document is worth surfacing.
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    PLACEHOLDER
        .find_iter(text)
        .map(|token| token.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::models::employee::EmployeeRequest;
    use crate::settings::Settings;

    fn settings() -> Settings {
        Settings::load(&std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config"))
            .unwrap()
    }

    fn context() -> RenderContext {
        let settings = settings();
        let employee = EmployeeRequest {
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
        };
        RenderContext::build(&employee, &settings.company, &settings.roles)
    }

    fn store_with(templates: &[(&str, &str)]) -> TemplateStore {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in templates {
            let mut file = std::fs::File::create(dir.path().join(name)).unwrap();
            file.write_all(body.as_bytes()).unwrap();
        }
        TemplateStore::load(dir.path()).unwrap()
    }

    #[test]
    fn alias_table_maps_document_types_to_files() {
        assert_eq!(template_file_for("contract"), "contract.md");
        assert_eq!(template_file_for("confirmation"), "confirmation.md");
        assert_eq!(template_file_for("roles"), "roles-responsibilities.md");
        assert_eq!(
            template_file_for("roles-responsibilities"),
            "roles-responsibilities.md"
        );
        assert_eq!(template_file_for("payslip"), "payslip.md");
    }

    #[test]
    fn canonical_key_folds_roles() {
        assert_eq!(canonical_key("roles"), "roles-responsibilities");
        assert_eq!(canonical_key("contract"), "contract");
    }

    #[test]
    fn renders_interpolation_and_nested_access() {
        let store = store_with(&[(
            "contract.md",
            "{{ employee_name }} joins {{ company.name }} ({{ company.registration_number }})",
        )]);
        let output = store.render("contract", &context()).unwrap();
        assert!(output.contains("Sarah Lim"));
        assert!(output.contains(&context().company.name));
        assert!(unresolved_placeholders(&output).is_empty());
    }

    #[test]
    fn renders_iteration_and_conditionals() {
        let store = store_with(&[(
            "roles-responsibilities.md",
            "{% if role_responsibilities %}{% for r in role_responsibilities %}- {{ r }}\n{% endfor %}{% else %}none{% endif %}",
        )]);
        let context = context();
        let output = store.render("roles", &context).unwrap();
        for responsibility in &context.role_responsibilities {
            assert!(output.contains(responsibility.as_str()));
        }
    }

    #[test]
    fn missing_template_is_a_typed_error() {
        let store = store_with(&[("contract.md", "x")]);
        match store.render("payslip", &context()) {
            Err(RenderError::TemplateMissing(doc_type)) => assert_eq!(doc_type, "payslip"),
            other => panic!("expected TemplateMissing, got {other:?}"),
        }
        assert!(store.source("payslip").is_err());
    }

    #[test]
    fn source_returns_the_raw_template_text() {
        let store = store_with(&[("confirmation.md", "Dear {{ employee_name }},")]);
        assert_eq!(
            store.source("confirmation").unwrap(),
            "Dear {{ employee_name }},"
        );
    }

    #[test]
    fn shipped_templates_render_with_every_placeholder_resolved() {
        let store =
            TemplateStore::load(&std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates"))
                .unwrap();
        let context = context();
        for doc_type in ["contract", "confirmation", "roles"] {
            let output = store.render(doc_type, &context).unwrap();
            assert!(
                unresolved_placeholders(&output).is_empty(),
                "{doc_type} left placeholders: {:?}",
                unresolved_placeholders(&output)
            );
        }
    }

    #[test]
    fn placeholder_scan_finds_leftover_tokens() {
        let text = "Dear {{ employee_name }}, welcome to {{ company.name }}. Done.";
        assert_eq!(
            unresolved_placeholders(text),
            vec!["{{ employee_name }}", "{{ company.name }}"]
        );
        assert!(unresolved_placeholders("all resolved").is_empty());
    }
}
