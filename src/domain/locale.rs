use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, ArtifactSlot};

/// Language of the human-readable artifact descriptions.
///
/// Only descriptions change with the locale; file names and contents never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    El,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::El];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::El => "el",
        }
    }

    /// Description shown alongside a generated file.
    pub fn describe(&self, slot: ArtifactSlot) -> &'static str {
        match (self, slot) {
            (Locale::En, ArtifactSlot::Manifest) => {
                "Integration metadata: domain, name, code owners, documentation links and the feedparser requirement."
            }
            (Locale::En, ArtifactSlot::Init) => {
                "Entry point that sets up and unloads the integration and forwards it to the sensor platform."
            }
            (Locale::En, ArtifactSlot::Constants) => {
                "Shared constants: the integration domain, configuration keys and the default scan interval."
            }
            (Locale::En, ArtifactSlot::ConfigFlow) => {
                "UI configuration flow: a single form asking for the feed URL and scan interval."
            }
            (Locale::En, ArtifactSlot::Sensor) => {
                "Sensor that polls the feed and exposes the latest article title, summary, link, publish date and image."
            }
            (Locale::En, ArtifactSlot::HacsManifest) => {
                "HACS metadata. Place it at the repository root, with the integration under custom_components/<domain>/."
            }
            (Locale::En, ArtifactSlot::LovelaceCard) => {
                "Example Markdown card for your dashboard showing the latest article."
            }
            (Locale::El, ArtifactSlot::Manifest) => {
                "Μεταδεδομένα ενσωμάτωσης: domain, όνομα, κάτοχοι κώδικα, σύνδεσμοι τεκμηρίωσης και η εξάρτηση feedparser."
            }
            (Locale::El, ArtifactSlot::Init) => {
                "Σημείο εισόδου που φορτώνει και αποφορτώνει την ενσωμάτωση και την προωθεί στην πλατφόρμα αισθητήρα."
            }
            (Locale::El, ArtifactSlot::Constants) => {
                "Κοινές σταθερές: το domain της ενσωμάτωσης, τα κλειδιά ρυθμίσεων και το προεπιλεγμένο διάστημα ανανέωσης."
            }
            (Locale::El, ArtifactSlot::ConfigFlow) => {
                "Ροή ρύθμισης από το UI: μία φόρμα που ζητά το URL της ροής και το διάστημα ανανέωσης."
            }
            (Locale::El, ArtifactSlot::Sensor) => {
                "Αισθητήρας που ελέγχει τη ροή και εμφανίζει τίτλο, περίληψη, σύνδεσμο, ημερομηνία και εικόνα του τελευταίου άρθρου."
            }
            (Locale::El, ArtifactSlot::HacsManifest) => {
                "Μεταδεδομένα HACS. Τοποθετήστε το στη ρίζα του αποθετηρίου, με την ενσωμάτωση στο custom_components/<domain>/."
            }
            (Locale::El, ArtifactSlot::LovelaceCard) => {
                "Παράδειγμα κάρτας Markdown για το dashboard σας που δείχνει το τελευταίο άρθρο."
            }
        }
    }

    /// Notice shown when a feed lookup yields nothing.
    pub fn feed_not_found_notice(&self) -> &'static str {
        match self {
            Locale::En => "Could not find an RSS feed. Please enter URL manually.",
            Locale::El => "Δεν βρέθηκε RSS feed. Παρακαλώ εισάγετε το URL χειροκίνητα.",
        }
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "el" | "greek" | "ελληνικά" => Ok(Locale::El),
            other => Err(AppError::InvalidConfig(format!(
                "unsupported locale '{}': expected 'en' or 'el'",
                other
            ))),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
