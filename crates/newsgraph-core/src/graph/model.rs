//! Graph data models: raw store records and their shaped output.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Open property bag passed through from the store untouched.
pub type PropertyMap = serde_json::Map<String, Value>;

/// A node as read from the graph store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreNode {
    pub id: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub properties: PropertyMap,
}

impl StoreNode {
    /// The first label attached to the node, if any.
    pub fn first_label(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }

    /// Display text of a property. Null and missing properties yield `None`.
    pub fn text(&self, key: &str) -> Option<String> {
        self.properties.get(key).and_then(value_text)
    }

    /// Raw property value, `None` when missing or null.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.properties.get(key).filter(|v| !v.is_null())
    }
}

/// A relationship as read from the graph store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreRelationship {
    #[serde(rename = "type")]
    pub rel_type: String,
    #[serde(default)]
    pub properties: PropertyMap,
}

/// One result row of the two-hop article traversal.
///
/// `relationship`/`connected` come from the first hop out of the anchor
/// article, `second_relationship`/`other_connected` from the optional
/// same-article second hop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphRow {
    pub relationship: Option<StoreRelationship>,
    pub connected: Option<StoreNode>,
    pub second_relationship: Option<StoreRelationship>,
    pub other_connected: Option<StoreNode>,
}

/// A node ready for the front-end graph view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapedNode {
    pub id: String,
    pub label: String,
    pub group: String,
    pub properties: PropertyMap,
}

/// An edge ready for the front-end graph view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapedEdge {
    pub from: String,
    pub to: String,
    pub label: String,
    pub properties: PropertyMap,
}

/// Entities and relationships around a single article.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArticleGraph {
    pub nodes: Vec<ShapedNode>,
    pub edges: Vec<ShapedEdge>,
}

/// Entity categories extracted from articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Person,
    Organization,
    Location,
    Time,
    Activity,
    ActivityEvent,
    Event,
    Group,
    Vehicle,
    Product,
    Artwork,
    Document,
    Plant,
    Number,
    Food,
    Drink,
    Institution,
    Symbol,
    FoodDrink,
    Animal,
    Technology,
    Entity,
}

impl EntityKind {
    pub const ALL: [EntityKind; 22] = [
        EntityKind::Person,
        EntityKind::Organization,
        EntityKind::Location,
        EntityKind::Time,
        EntityKind::Activity,
        EntityKind::ActivityEvent,
        EntityKind::Event,
        EntityKind::Group,
        EntityKind::Vehicle,
        EntityKind::Product,
        EntityKind::Artwork,
        EntityKind::Document,
        EntityKind::Plant,
        EntityKind::Number,
        EntityKind::Food,
        EntityKind::Drink,
        EntityKind::Institution,
        EntityKind::Symbol,
        EntityKind::FoodDrink,
        EntityKind::Animal,
        EntityKind::Technology,
        EntityKind::Entity,
    ];

    /// The Neo4j node label for this entity kind.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Person => "Osoba",
            EntityKind::Organization => "Organizacija",
            EntityKind::Location => "Lokacija",
            EntityKind::Time => "Vreme",
            EntityKind::Activity => "Aktivnost",
            EntityKind::ActivityEvent => "AktivnostDogađaj",
            EntityKind::Event => "Događaj",
            EntityKind::Group => "Grupa",
            EntityKind::Vehicle => "Vozilo",
            EntityKind::Product => "Proizvod",
            EntityKind::Artwork => "Umetničko delo",
            EntityKind::Document => "Dokument",
            EntityKind::Plant => "Biljka",
            EntityKind::Number => "Broj",
            EntityKind::Food => "Hrana",
            EntityKind::Drink => "Piće",
            EntityKind::Institution => "Institucija",
            EntityKind::Symbol => "Simbol",
            EntityKind::FoodDrink => "HranaPiće",
            EntityKind::Animal => "Životinja",
            EntityKind::Technology => "Tehnologija",
            EntityKind::Entity => "Entity",
        }
    }

    /// Parse from a node label. Unknown labels fall back to `Entity`.
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.label() == label)
            .unwrap_or(EntityKind::Entity)
    }

    /// Parse from a shaped node group (a lower-cased label).
    pub fn from_group(group: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.label().to_lowercase() == group)
            .unwrap_or(EntityKind::Entity)
    }
}

/// Text form of a property value: strings as-is, other scalars via JSON.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
