use visual_campaigns_sdk::Campaign;

use super::entity;

/// Split the stored comma-separated allow-list, dropping blank entries.
#[must_use]
pub fn parse_domains(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

impl From<entity::Model> for Campaign {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            output_key: entity.output_key,
            markup: entity.markup,
            domains: parse_domains(&entity.domains),
            // Authoring tools save an empty field instead of NULL.
            cookie_key: entity.cookie_key.filter(|k| !k.trim().is_empty()),
            cookie_ttl_hours: entity.cookie_ttl_hours,
            starts_at: entity.starts_at,
            ends_at: entity.ends_at,
        }
    }
}
