pub mod ports;

#[allow(unused_imports)]
pub use ports::FakeFeedDiscovery;
#[allow(unused_imports)]
pub use ports::FakeRepositoryDetector;
#[allow(unused_imports)]
pub use ports::MemoryBundleStore;
