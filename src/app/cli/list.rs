use std::path::PathBuf;

use crate::domain::{AppError, ArtifactSlot, Locale};

pub fn run_list(locale: Option<Locale>, config: Option<PathBuf>) -> Result<(), AppError> {
    let locale = match locale {
        Some(locale) => locale,
        None => super::load_config(config.as_deref())?.locale,
    };

    for slot in ArtifactSlot::ALL {
        println!("{:<20} {:<18} {}", slot.filename(), slot.kind().label(), locale.describe(slot));
    }
    Ok(())
}
