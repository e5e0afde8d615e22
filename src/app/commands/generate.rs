use crate::app::AppContext;
use crate::domain::{
    AppError, Bundle, FeedSuggestion, IntegrationConfig, IntegrationDraft, Locale,
    RepositoryCoordinates, TemplateRenderer, generate_with,
};
use crate::ports::FeedDiscovery;

use super::discover;

/// Inputs of one `generate` invocation before missing fields are filled in.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Fields from the project file.
    pub base: IntegrationDraft,
    /// Fields given as flags. These win over the file and over a search result.
    pub overrides: IntegrationDraft,
    /// Free-text feed query to seed the draft with.
    pub search: Option<String>,
    pub locale: Locale,
    pub repository: Option<RepositoryCoordinates>,
}

/// What happened to the optional feed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    NotRequested,
    Found(FeedSuggestion),
    NotFound,
}

#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub config: IntegrationConfig,
    pub locale: Locale,
    pub repository: Option<RepositoryCoordinates>,
    pub search: SearchOutcome,
    pub bundle: Bundle,
}

/// Fields the draft must carry before generation, in prompt order.
const REQUIRED_FIELDS: [&str; 2] = ["name", "feed_url"];

/// Combine file values, an optional search result, and flag overrides into a draft.
pub fn resolve_draft<D: FeedDiscovery + ?Sized>(
    discovery: &D,
    base: IntegrationDraft,
    search: Option<&str>,
    overrides: IntegrationDraft,
) -> (IntegrationDraft, SearchOutcome) {
    let mut draft = base;
    let outcome = match search {
        None => SearchOutcome::NotRequested,
        Some(query) => match discover::execute(discovery, query) {
            Some(suggestion) => {
                draft.apply_suggestion(Some(&suggestion));
                SearchOutcome::Found(suggestion)
            }
            None => SearchOutcome::NotFound,
        },
    };
    (draft.merge(overrides), outcome)
}

/// Resolve the draft, ask for missing fields, and generate the bundle.
///
/// `prompt` is asked once per missing field; `Ok(None)` cancels the command.
pub fn execute<R, D, P>(
    ctx: &AppContext<R, D>,
    request: GenerateRequest,
    mut prompt: P,
) -> Result<Option<GenerateOutcome>, AppError>
where
    R: TemplateRenderer,
    D: FeedDiscovery,
    P: FnMut(&'static str) -> Result<Option<String>, AppError>,
{
    let GenerateRequest { base, overrides, search, locale, repository } = request;
    let (mut draft, search) =
        resolve_draft(ctx.discovery(), base, search.as_deref(), overrides);

    for field in REQUIRED_FIELDS {
        if draft.missing_field() != Some(field) {
            continue;
        }
        let Some(value) = prompt(field)? else {
            return Ok(None);
        };
        match field {
            "name" => draft.name = Some(value),
            _ => draft.feed_url = Some(value),
        }
    }

    let config = draft.into_config()?;
    let bundle = generate_with(ctx.templates(), &config, locale, repository.as_ref())?;
    Ok(Some(GenerateOutcome { config, locale, repository, search, bundle }))
}
