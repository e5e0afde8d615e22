mod feed_discovery_stub;
mod repository_detector_stub;

pub use self::feed_discovery_stub::FakeFeedDiscovery;
pub use self::memory_bundle_store::MemoryBundleStore;
pub use self::repository_detector_stub::FakeRepositoryDetector;
