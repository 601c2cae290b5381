//! Stencil's main application entry point and orchestration logic.
//! Handles command-line argument parsing, the end-to-end materialization
//! flow, and coordinates interactions between different modules.

use stencil::{
    archive::{archive_name, encode_zip},
    cli::{get_args, Args},
    error::{default_error_handler, Error, Result},
    github::GithubClient,
    materialize::materialize_template,
    prompt::{
        collect_values, format_values, parse_overrides, project_name, select_template,
    },
    registry::{fetch_registry, RepoRef},
    substitute::ValueMap,
};

/// Main application entry point.
#[tokio::main]
async fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Err(err) = run(args).await {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Fetches the template registry (fatal on failure)
/// 2. Selects a template entry by id or interactively
/// 3. Resolves the effective repository reference and branch
/// 4. Fetches the template manifest (fatal on failure)
/// 5. Builds the value map from defaults, overrides and user input
/// 6. Materializes the template's files
/// 7. Encodes and writes the archive
async fn run(args: Args) -> Result<()> {
    let client = GithubClient::new()?;
    let registry = fetch_registry(client.http(), &args.registry).await?;

    if args.list {
        for entry in &registry.templates {
            println!("{:<24} {}", entry.id, entry.description);
        }
        return Ok(());
    }

    let interactive = !args.defaults;
    let entry = match &args.template {
        Some(id) => registry.find(id)?,
        None if interactive => select_template(&registry)?,
        None => {
            return Err(Error::Argument(
                "a template id is required with --defaults".to_string(),
            ))
        }
    };

    let repo_ref = RepoRef::resolve(
        entry,
        &registry,
        args.repo.as_deref(),
        args.branch.as_deref(),
    );
    println!("Using template '{}' from {}", entry.id, repo_ref);

    let overrides = parse_overrides(&args.set)?;
    let mut raw_values = ValueMap::new();
    let outcome = materialize_template(&client, &repo_ref, &entry.path, |manifest| {
        raw_values = collect_values(&manifest.prompts, &overrides, interactive)?;
        Ok(format_values(&manifest.prompts, &raw_values))
    })
    .await?;

    let bytes = encode_zip(&outcome.files)?;
    let file_name = archive_name(project_name(&raw_values, &entry.id));

    std::fs::create_dir_all(&args.output_dir)?;
    let destination = args.output_dir.join(&file_name);
    std::fs::write(&destination, bytes)?;

    println!(
        "Materialized {} file(s) into '{}'.",
        outcome.files.len(),
        destination.display()
    );
    if !outcome.warnings.is_empty() {
        println!("{} file(s) could not be fetched and were skipped.", outcome.warnings.len());
    }
    Ok(())
}
