pub mod bundle_filesystem;
pub mod embedded_templates;
pub mod gemini_feed_discovery;
pub mod git_remote;

pub use bundle_filesystem::FilesystemBundleStore;
pub use embedded_templates::EmbeddedTemplates;
pub use gemini_feed_discovery::{GeminiFeedDiscovery, LazyFeedDiscovery};
pub use git_remote::GitRemoteDetector;
