//! Article graph shaping.
//!
//! Turns the rows of the two-hop article traversal into the node/edge
//! lists consumed by the front-end network view. The anchor article never
//! appears in the output: only entities reachable from it do.

pub mod model;

use std::collections::HashSet;

use model::{ArticleGraph, GraphRow, ShapedEdge, ShapedNode, StoreNode, StoreRelationship};

/// Label assumed for nodes that carry none; their group is its lower-cased form.
pub const FALLBACK_LABEL: &str = "Entity";

/// Build the article graph from traversal rows.
///
/// Nodes are deduplicated by store id across both hops, in first-seen order.
/// Edges are emitted once per row and are never deduplicated. First-hop edges
/// start and end at the connected node because the anchor article is not
/// part of the node set.
pub fn shape_graph<I>(rows: I) -> ArticleGraph
where
    I: IntoIterator<Item = GraphRow>,
{
    let mut graph = ArticleGraph::default();
    let mut seen: HashSet<String> = HashSet::new();

    for row in rows {
        let Some(connected) = row.connected else {
            continue;
        };

        if seen.insert(connected.id.clone()) {
            graph.nodes.push(shape_node(&connected));
        }

        if let Some(rel) = row.relationship.filter(|r| !r.rel_type.is_empty()) {
            graph.edges.push(shape_edge(&connected, &connected, rel));
        }

        if let Some(other) = row.other_connected {
            if seen.insert(other.id.clone()) {
                graph.nodes.push(shape_node(&other));
            }

            if let Some(rel) = row.second_relationship {
                graph.edges.push(shape_edge(&connected, &other, rel));
            }
        }
    }

    graph
}

/// Shape a single store node.
///
/// The display label is `name`, then `title`, then `"<group> <id>"`.
pub fn shape_node(node: &StoreNode) -> ShapedNode {
    let group = node.first_label().unwrap_or(FALLBACK_LABEL).to_lowercase();
    let label = node
        .text("name")
        .or_else(|| node.text("title"))
        .unwrap_or_else(|| format!("{} {}", group, node.id));

    ShapedNode {
        id: node.id.clone(),
        label,
        group,
        properties: node.properties.clone(),
    }
}

fn shape_edge(from: &StoreNode, to: &StoreNode, rel: StoreRelationship) -> ShapedEdge {
    ShapedEdge {
        from: from.id.clone(),
        to: to.id.clone(),
        label: rel.rel_type,
        properties: rel.properties,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::EntityKind;
    use serde_json::json;

    fn node(id: &str, labels: &[&str], props: serde_json::Value) -> StoreNode {
        StoreNode {
            id: id.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
            properties: props.as_object().cloned().unwrap_or_default(),
        }
    }

    fn rel(rel_type: &str, props: serde_json::Value) -> StoreRelationship {
        StoreRelationship {
            rel_type: rel_type.to_string(),
            properties: props.as_object().cloned().unwrap_or_default(),
        }
    }

    fn first_hop(r: StoreRelationship, connected: StoreNode) -> GraphRow {
        GraphRow {
            relationship: Some(r),
            connected: Some(connected),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_connection() {
        let rows = vec![first_hop(
            rel("POMINJE", json!({"article": "Naslov"})),
            node("4:abc:1", &["Osoba"], json!({"name": "Ana"})),
        )];

        let graph = shape_graph(rows);
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.nodes[0].label, "Ana");
        assert_eq!(graph.nodes[0].group, "osoba");
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].label, "POMINJE");
        assert_eq!(graph.edges[0].properties["article"], "Naslov");
    }

    #[test]
    fn test_first_hop_edge_is_self_loop() {
        let rows = vec![first_hop(
            rel("POMINJE", json!({})),
            node("n1", &["Osoba"], json!({"name": "Ana"})),
        )];

        let graph = shape_graph(rows);
        assert_eq!(graph.edges[0].from, "n1");
        assert_eq!(graph.edges[0].to, "n1");
    }

    #[test]
    fn test_nodes_deduplicated_across_rows_and_hops() {
        let ana = node("n1", &["Osoba"], json!({"name": "Ana"}));
        let beograd = node("n2", &["Lokacija"], json!({"name": "Beograd"}));

        let rows = vec![
            GraphRow {
                relationship: Some(rel("POMINJE", json!({}))),
                connected: Some(ana.clone()),
                second_relationship: Some(rel("ZIVI_U", json!({"article": "X"}))),
                other_connected: Some(beograd.clone()),
            },
            GraphRow {
                relationship: Some(rel("POMINJE", json!({}))),
                connected: Some(ana.clone()),
                second_relationship: Some(rel("RADI_U", json!({"article": "X"}))),
                other_connected: Some(beograd.clone()),
            },
            first_hop(rel("POMINJE", json!({})), beograd.clone()),
        ];

        let graph = shape_graph(rows);
        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["n1", "n2"]);
    }

    #[test]
    fn test_edges_not_deduplicated() {
        let ana = node("n1", &["Osoba"], json!({"name": "Ana"}));
        let rows = vec![
            first_hop(rel("POMINJE", json!({})), ana.clone()),
            first_hop(rel("POMINJE", json!({})), ana.clone()),
        ];

        let graph = shape_graph(rows);
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.edges.len(), 2);
    }

    #[test]
    fn test_second_hop_edge_links_connected_to_other() {
        let rows = vec![GraphRow {
            relationship: Some(rel("POMINJE", json!({}))),
            connected: Some(node("n1", &["Osoba"], json!({"name": "Ana"}))),
            second_relationship: Some(rel("ZIVI_U", json!({"article": "Naslov"}))),
            other_connected: Some(node("n2", &["Lokacija"], json!({"name": "Novi Sad"}))),
        }];

        let graph = shape_graph(rows);
        assert_eq!(graph.edges.len(), 2);
        assert_eq!(graph.edges[1].from, "n1");
        assert_eq!(graph.edges[1].to, "n2");
        assert_eq!(graph.edges[1].label, "ZIVI_U");
        assert_eq!(graph.nodes[1].group, "lokacija");
    }

    #[test]
    fn test_untyped_first_hop_emits_no_edge() {
        let rows = vec![first_hop(
            rel("", json!({})),
            node("n1", &["Osoba"], json!({"name": "Ana"})),
        )];

        let graph = shape_graph(rows);
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_label_falls_back_to_title_then_synthetic() {
        let titled = shape_node(&node("n1", &["Dokument"], json!({"title": "Ustav"})));
        assert_eq!(titled.label, "Ustav");

        let bare = shape_node(&node("n2", &["Organizacija"], json!({})));
        assert_eq!(bare.label, "organizacija n2");
    }

    #[test]
    fn test_unlabeled_node_uses_entity_group() {
        let shaped = shape_node(&node("n9", &[], json!({})));
        assert_eq!(shaped.group, FALLBACK_LABEL.to_lowercase());
        assert_eq!(shaped.group, "entity");
        assert_eq!(shaped.label, "entity n9");
    }

    #[test]
    fn test_non_string_name_is_rendered() {
        let shaped = shape_node(&node("n3", &["Broj"], json!({"name": 42})));
        assert_eq!(shaped.label, "42");
    }

    #[test]
    fn test_empty_rows() {
        let graph = shape_graph(Vec::new());
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let rows = vec![first_hop(
            rel("POMINJE", json!({})),
            node("n1", &["Osoba"], json!({"name": "Ana"})),
        )];

        let value = serde_json::to_value(shape_graph(rows)).unwrap();
        assert_eq!(
            value,
            json!({
                "nodes": [{"id": "n1", "label": "Ana", "group": "osoba", "properties": {"name": "Ana"}}],
                "edges": [{"from": "n1", "to": "n1", "label": "POMINJE", "properties": {}}]
            })
        );
    }

    #[test]
    fn test_entity_kind_from_label() {
        assert_eq!(EntityKind::from_label("Osoba"), EntityKind::Person);
        assert_eq!(EntityKind::from_label("Umetničko delo"), EntityKind::Artwork);
        assert_eq!(EntityKind::from_label("Nepostojeće"), EntityKind::Entity);
        assert_eq!(EntityKind::from_group("aktivnostdogađaj"), EntityKind::ActivityEvent);
        assert_eq!(EntityKind::from_group(&shape_node(&node("n1", &["Piće"], json!({}))).group), EntityKind::Drink);
    }
}
