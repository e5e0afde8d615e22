#[path = "../harness/mod.rs"]
mod harness;

mod discover_contract;
mod export_contract;
