//! Offline CLI over the same assembly pipeline: an employee record JSON file
//! in, finished documents out under a per-employee directory.
//!
//! Generation is enabled when OPENAI_API_KEY is set, exactly like the
//! service; otherwise every document renders deterministically.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use hr_docs_api::convert;
use hr_docs_api::generation::generator::generate_documents;
use hr_docs_api::llm_client::{self, NoopGenerator, OpenAiGenerator, TextGenerator};
use hr_docs_api::models::employee::EmployeeRequest;
use hr_docs_api::render::TemplateStore;
use hr_docs_api::settings::Settings;

#[derive(Parser)]
#[command(
    name = "hrgen",
    about = "Generate HR documents for an employee from the command line",
    version
)]
struct Args {
    /// Employee record JSON file (same shape as the generate-documents request body)
    #[arg(long)]
    input: PathBuf,

    /// Directory documents are written into (a per-employee subdirectory is created)
    #[arg(long, default_value = "output")]
    output: PathBuf,

    /// Directory holding company-info.json, job-roles.json and ai-prompts.json
    #[arg(long, default_value = "config", env = "HR_CONFIG_DIR")]
    config_dir: PathBuf,

    /// Directory holding the document templates
    #[arg(long, default_value = "templates", env = "HR_TEMPLATES_DIR")]
    templates_dir: PathBuf,

    /// Also write a print-ready .html next to each .md
    #[arg(long)]
    html: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("reading employee record {}", args.input.display()))?;
    let request: EmployeeRequest = serde_json::from_str(&raw)
        .with_context(|| format!("parsing employee record {}", args.input.display()))?;

    let settings = Settings::load(&args.config_dir)?;
    let store = TemplateStore::load(&args.templates_dir)?;

    let generator: Arc<dyn TextGenerator> = match std::env::var("OPENAI_API_KEY")
        .ok()
        .filter(|key| !key.is_empty())
    {
        Some(key) => Arc::new(OpenAiGenerator::new(
            key,
            std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| llm_client::DEFAULT_BASE_URL.to_string()),
            settings.prompts.clone(),
            settings.company.company.name.clone(),
        )),
        None => Arc::new(NoopGenerator),
    };

    let documents = generate_documents(&settings, &store, generator.as_ref(), &request)
        .await
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let employee_dir = args.output.join(request.employee_name.replace(' ', "_"));
    fs::create_dir_all(&employee_dir)
        .with_context(|| format!("creating output directory {}", employee_dir.display()))?;

    for document in &documents {
        let path = employee_dir.join(&document.filename);
        fs::write(&path, &document.content)?;
        println!("wrote {}", path.display());

        if args.html {
            let html_path = path.with_extension("html");
            fs::write(
                &html_path,
                convert::markdown_to_document(&document.content, &document.doc_type),
            )?;
            println!("wrote {}", html_path.display());
        }
    }

    Ok(())
}
