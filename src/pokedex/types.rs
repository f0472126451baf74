//! Typed upstream record shape and the flattened summary served to clients.
//!
//! PokeAPI's record is deserialized into an explicit shape rather than walked
//! dynamically; a missing required field surfaces as a deserialization error
//! instead of a null-access fault. Only `front_default` is nullable upstream.

use serde::{Deserialize, Serialize};

/// The subset of the upstream `pokemon` record this service reads.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
    /// Decimeters.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub sprites: Sprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sprites {
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: OfficialArtwork,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OfficialArtwork {
    pub front_default: Option<String>,
}

/// Flat response object, built fresh per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonSummary {
    pub name: String,
    pub image: Option<String>,
    pub id: String,
    pub types: String,
    pub height: String,
    pub weight: String,
    pub abilities: String,
}

impl From<PokemonRecord> for PokemonSummary {
    fn from(record: PokemonRecord) -> Self {
        Self {
            name: record.name,
            image: record.sprites.other.official_artwork.front_default,
            id: format!("#{:03}", record.id),
            types: join_names(record.types.iter().map(|t| t.kind.name.as_str())),
            height: format_tenths(record.height, "m"),
            weight: format_tenths(record.weight, "kg"),
            abilities: join_names(record.abilities.iter().map(|a| a.ability.name.as_str())),
        }
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

/// Upstream reports height in decimeters and weight in hectograms; both are
/// divided by ten and rendered with one decimal plus the unit suffix.
fn format_tenths(value: u32, unit: &str) -> String {
    format!("{:.1} {}", f64::from(value) / 10.0, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: &str = r#"{
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "types": [
            {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}},
            {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}}
        ],
        "abilities": [
            {"ability": {"name": "overgrow", "url": "https://pokeapi.co/api/v2/ability/65/"}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "chlorophyll", "url": "https://pokeapi.co/api/v2/ability/34/"}, "is_hidden": true, "slot": 3}
        ],
        "sprites": {
            "front_default": "https://raw.githubusercontent.com/sprites/1.png",
            "other": {
                "official-artwork": {
                    "front_default": "https://raw.githubusercontent.com/official-artwork/1.png",
                    "front_shiny": "https://raw.githubusercontent.com/official-artwork/shiny/1.png"
                }
            }
        },
        "base_experience": 64
    }"#;

    #[test]
    fn summary_from_record() {
        let record: PokemonRecord = serde_json::from_str(BULBASAUR).unwrap();
        let summary = PokemonSummary::from(record);

        assert_eq!(summary.name, "bulbasaur");
        assert_eq!(
            summary.image.as_deref(),
            Some("https://raw.githubusercontent.com/official-artwork/1.png")
        );
        assert_eq!(summary.id, "#001");
        assert_eq!(summary.types, "grass, poison");
        assert_eq!(summary.height, "0.7 m");
        assert_eq!(summary.weight, "6.9 kg");
        assert_eq!(summary.abilities, "overgrow, chlorophyll");
    }

    #[test]
    fn id_is_zero_padded_to_three() {
        for (id, expected) in [(6, "#006"), (25, "#025"), (150, "#150"), (1025, "#1025")] {
            assert_eq!(format!("#{:03}", id), expected);
        }
    }

    #[test]
    fn tenths_formatting_keeps_one_decimal() {
        assert_eq!(format_tenths(7, "m"), "0.7 m");
        assert_eq!(format_tenths(10, "m"), "1.0 m");
        assert_eq!(format_tenths(690, "kg"), "69.0 kg");
        assert_eq!(format_tenths(0, "kg"), "0.0 kg");
    }

    #[test]
    fn missing_sprites_is_a_parse_error() {
        let body = r#"{"id": 1, "name": "bulbasaur", "height": 7, "weight": 69, "types": [], "abilities": []}"#;
        assert!(serde_json::from_str::<PokemonRecord>(body).is_err());
    }

    #[test]
    fn null_artwork_becomes_absent_image() {
        let body = r#"{
            "id": 999,
            "name": "mystery",
            "height": 10,
            "weight": 100,
            "types": [{"type": {"name": "ghost"}}],
            "abilities": [{"ability": {"name": "levitate"}}],
            "sprites": {"other": {"official-artwork": {"front_default": null}}}
        }"#;
        let record: PokemonRecord = serde_json::from_str(body).unwrap();
        let summary = PokemonSummary::from(record);
        assert_eq!(summary.image, None);
        assert_eq!(summary.height, "1.0 m");
        assert_eq!(summary.weight, "10.0 kg");
    }

    #[test]
    fn empty_slots_join_to_empty_string() {
        let body = r#"{
            "id": 2,
            "name": "ivysaur",
            "height": 10,
            "weight": 130,
            "types": [],
            "abilities": [],
            "sprites": {"other": {"official-artwork": {"front_default": null}}}
        }"#;
        let record: PokemonRecord = serde_json::from_str(body).unwrap();
        let summary = PokemonSummary::from(record);
        assert_eq!(summary.types, "");
        assert_eq!(summary.abilities, "");
    }
}
