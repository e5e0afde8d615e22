//! `generate`, `show` and `export` commands.

use std::path::PathBuf;

use clap::Args;

use crate::app::api::{GenerateOutcome, GenerateRequest, RepositorySources, SearchOutcome};
use crate::domain::{
    AppError, IntegrationDomain, IntegrationDraft, Locale, RepositoryCoordinates, ScanInterval,
};

/// Integration fields and sources shared by every generating command.
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Integration display name
    #[arg(short, long)]
    name: Option<String>,
    /// Integration domain (derived from the name when omitted)
    #[arg(short, long)]
    domain: Option<String>,
    /// RSS feed URL
    #[arg(short, long)]
    feed_url: Option<String>,
    /// Scan interval in minutes (invalid values fall back to 15)
    #[arg(short, long, allow_hyphen_values = true)]
    scan_interval: Option<String>,
    /// Description language (en, el)
    #[arg(short, long)]
    locale: Option<Locale>,
    /// GitHub repository as owner/repo or URL
    #[arg(short, long)]
    repo: Option<String>,
    /// Read the repository from the git origin remote
    #[arg(long)]
    repo_from_git: bool,
    /// Look up the feed with the discovery assistant before generating
    #[arg(long)]
    search: Option<String>,
    /// Project file (defaults to ./hacsgen.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Hand-typed domains are normalized; a blank one counts as absent.
    fn overrides(&self) -> IntegrationDraft {
        IntegrationDraft {
            name: self.name.clone(),
            domain: self
                .domain
                .as_deref()
                .filter(|domain| !domain.trim().is_empty())
                .map(IntegrationDomain::from_name),
            feed_url: self.feed_url.clone(),
            scan_interval: self.scan_interval.as_deref().map(ScanInterval::parse),
        }
    }
}

/// Run the generate pipeline. `None` when the user cancelled a prompt.
fn resolve(args: GenerateArgs) -> Result<Option<GenerateOutcome>, AppError> {
    let project = super::load_config(args.config.as_deref())?;
    let overrides = args.overrides();
    let locale = args.locale.unwrap_or(project.locale);
    let repository = crate::app::api::resolve_repository(
        &std::env::current_dir()?,
        RepositorySources {
            explicit: args.repo,
            from_git: args.repo_from_git,
            configured: project.repository(),
        },
    )?;

    let request = GenerateRequest {
        base: project.integration,
        overrides,
        search: args.search,
        locale,
        repository,
    };
    let outcome =
        crate::app::api::generate_from_request(request, &project.discovery, super::prompt_field)?;

    if let Some(outcome) = &outcome {
        report_search(&outcome.search, outcome.locale);
    }
    Ok(outcome)
}

fn report_search(search: &SearchOutcome, locale: Locale) {
    match search {
        SearchOutcome::NotRequested => {}
        SearchOutcome::Found(suggestion) => {
            eprintln!("✅ Found feed {} ({})", suggestion.url, suggestion.name);
        }
        SearchOutcome::NotFound => eprintln!("⚠️  {}", locale.feed_not_found_notice()),
    }
}

pub fn run_generate(args: GenerateArgs, json: bool) -> Result<(), AppError> {
    let Some(outcome) = resolve(args)? else {
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(outcome.bundle.artifacts())?);
        return Ok(());
    }

    for (index, artifact) in outcome.bundle.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("==> {} ({}) <==", artifact.filename, artifact.kind);
        print!("{}", artifact.content);
        if !artifact.content.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

pub fn run_show(args: GenerateArgs, filename: &str) -> Result<(), AppError> {
    let Some(outcome) = resolve(args)? else {
        return Ok(());
    };

    let artifact = outcome.bundle.require(filename)?;
    print!("{}", artifact.content);
    if !artifact.content.ends_with('\n') {
        println!();
    }
    Ok(())
}

pub fn run_export(args: GenerateArgs, dir: PathBuf, force: bool) -> Result<(), AppError> {
    let Some(outcome) = resolve(args)? else {
        return Ok(());
    };

    let result =
        crate::app::api::export_at(dir, &outcome.bundle, &outcome.config.domain, force)?;
    println!("✅ Exported {} file(s) to {}", result.written.len(), result.root.display());
    for path in &result.written {
        println!("  • {}", path.display());
    }
    if let Some(link) = outcome.repository.as_ref().map(RepositoryCoordinates::hacs_install_url) {
        println!("  Add to HACS: {}", link);
    }
    Ok(())
}
