#[path = "../harness/mod.rs"]
mod harness;

mod bundle_properties_contract;
