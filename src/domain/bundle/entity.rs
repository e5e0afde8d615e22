use crate::domain::IntegrationDomain;

/// Entity id of the feed sensor.
///
/// The sensor module pins its `entity_id` to this value and the dashboard card reads it,
/// so both templates receive it from here.
pub fn sensor_entity_id(domain: &IntegrationDomain) -> String {
    format!("sensor.{}_sensor", domain)
}
