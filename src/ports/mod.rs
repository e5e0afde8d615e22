mod bundle_store;
mod feed_discovery;
mod repository_detector;

pub use bundle_store::BundleStore;
pub use feed_discovery::FeedDiscovery;
pub use repository_detector::RepositoryDetector;
