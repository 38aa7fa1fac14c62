//! Document assembly — orchestrates the per-request pipeline.
//!
//! Flow: validate → for each requested type: load template → try generation →
//! build context → generated text or deterministic render → collect.
//!
//! The batch is all-or-nothing: the first failing document type aborts it and
//! is named in the error; nothing already assembled is returned.

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::context::RenderContext;
use crate::errors::AppError;
use crate::llm_client::{Generation, TextGenerator};
use crate::models::document::{document_filename, document_label, GeneratedDocument};
use crate::models::employee::EmployeeRequest;
use crate::render::{self, RenderError, TemplateStore};
use crate::settings::Settings;

/// Runs the whole batch for one employee against the process clock.
pub async fn generate_documents(
    settings: &Settings,
    store: &TemplateStore,
    generator: &dyn TextGenerator,
    request: &EmployeeRequest,
) -> Result<Vec<GeneratedDocument>, AppError> {
    generate_documents_at(settings, store, generator, request, Local::now().naive_local()).await
}

/// Clock-injected variant. `now` stamps confirmation dates and filenames;
/// with a fixed clock and generation disabled, output is byte-identical
/// across calls.
pub async fn generate_documents_at(
    settings: &Settings,
    store: &TemplateStore,
    generator: &dyn TextGenerator,
    request: &EmployeeRequest,
    now: NaiveDateTime,
) -> Result<Vec<GeneratedDocument>, AppError> {
    if let Some(field) = request.first_missing_field() {
        return Err(AppError::Validation(format!(
            "Missing required field: {field}"
        )));
    }
    if request.documents.is_empty() {
        return Err(AppError::Validation(
            "No document types selected".to_string(),
        ));
    }

    let mut documents = Vec::with_capacity(request.documents.len());

    // Strictly sequential: the identity of the first failing type must be
    // deterministic.
    for doc_type in &request.documents {
        let document = assemble_one(settings, store, generator, request, doc_type, now)
            .await
            .map_err(|source| AppError::DocumentGeneration {
                doc_type: doc_type.clone(),
                detail: source.to_string(),
            })?;
        documents.push(document);
    }

    info!(
        "generated {} document(s) for {}",
        documents.len(),
        request.employee_name
    );
    Ok(documents)
}

async fn assemble_one(
    settings: &Settings,
    store: &TemplateStore,
    generator: &dyn TextGenerator,
    request: &EmployeeRequest,
    doc_type: &str,
    now: NaiveDateTime,
) -> Result<GeneratedDocument, RenderError> {
    let key = render::canonical_key(doc_type);
    let template_text = store.source(doc_type)?;

    let generation = generator.generate(key, request, template_text).await;
    let context = RenderContext::build_at(request, &settings.company, &settings.roles, now);

    let content = match generation {
        Generation::Text(text) => {
            let leftover = render::unresolved_placeholders(&text);
            if !leftover.is_empty() {
                warn!(
                    "generated {key} output retains {} unresolved placeholder(s): {}",
                    leftover.len(),
                    leftover.join(", ")
                );
            }
            text
        }
        Generation::Unavailable => {
            debug!("generation backend disabled; rendering {key} from template");
            store.render(doc_type, &context)?
        }
        Generation::Failed(reason) => {
            warn!("generation backend failed for {key} ({reason}); rendering from template");
            store.render(doc_type, &context)?
        }
    };

    let filename = document_filename(&request.employee_name, key, now);
    Ok(GeneratedDocument {
        doc_type: document_label(key),
        filename: filename.clone(),
        content,
        download_url: format!("/download/{filename}"),
    })
}
