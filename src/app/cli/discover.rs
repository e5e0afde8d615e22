use std::path::PathBuf;

use crate::domain::{AppError, Locale};

pub fn run_discover(
    query: &str,
    locale: Option<Locale>,
    config: Option<PathBuf>,
) -> Result<(), AppError> {
    let project = super::load_config(config.as_deref())?;
    let locale = locale.unwrap_or(project.locale);

    match crate::app::api::discover(query, &project.discovery) {
        Some(suggestion) => {
            println!("✅ Found feed for \"{}\"", query.trim());
            println!("  name: {}", suggestion.name);
            println!("  url:  {}", suggestion.url);
        }
        None => println!("⚠️  {}", locale.feed_not_found_notice()),
    }
    Ok(())
}
