//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use newsgraph_core::graph::model::value_text;
use newsgraph_core::{ArticleDetail, ArticleGraph, ArticleId, BiasGroup, EntityKind};
use newsgraph_graph::queries::stats::LabelCount;
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

/// Colour an entity group name by its kind.
fn colored_group(group: &str, kind: EntityKind) -> ColoredString {
    match kind {
        EntityKind::Person => group.cyan(),
        EntityKind::Organization | EntityKind::Institution | EntityKind::Group => group.magenta(),
        EntityKind::Location => group.green(),
        EntityKind::Event | EntityKind::ActivityEvent | EntityKind::Activity => group.yellow(),
        EntityKind::Time | EntityKind::Number => group.blue(),
        _ => group.normal(),
    }
}

/// Print entity counts per label.
pub fn print_label_counts(labels: &[LabelCount]) {
    if labels.is_empty() {
        println!("\n{}", "No entities found.".dimmed());
        return;
    }

    println!();
    println!("{}", "Entities by label".bold());
    for entry in labels {
        println!(
            "  {:<24} {:>8}",
            colored_group(&truncate_visual(&entry.label, 24), entry.kind),
            entry.count
        );
    }
}

/// Print the shaped graph around an article.
pub fn print_article_graph(article_id: &ArticleId, graph: &ArticleGraph) {
    println!("{} {}", "Graph for article".bold(), article_id.to_string().yellow());
    println!("{}", "─".repeat(50));

    if graph.nodes.is_empty() {
        println!("{}", "No connected entities found.".dimmed());
        return;
    }

    println!("{}", "Nodes".bold());
    for node in &graph.nodes {
        let kind = EntityKind::from_group(&node.group);
        println!(
            "  {} [{}] {} {}",
            "●".cyan(),
            colored_group(&node.group, kind),
            truncate_visual(&node.label, 40),
            format!("({})", node.id).dimmed()
        );
    }

    println!();
    println!("{}", "Edges".bold());
    for edge in &graph.edges {
        println!(
            "  {} {} {} {}",
            edge.from.dimmed(),
            format!("-[{}]->", edge.label).yellow(),
            edge.to.dimmed(),
            edge.properties
                .get("article")
                .and_then(value_text)
                .map(|a| format!("({})", truncate_visual(&a, 30)))
                .unwrap_or_default()
                .dimmed()
        );
    }

    println!(
        "\n{} nodes, {} edges.",
        graph.nodes.len().to_string().bold(),
        graph.edges.len().to_string().bold()
    );
}

/// Print a single article.
pub fn print_article(article: &ArticleDetail) {
    println!(
        "{} {}",
        text(&article.title).cyan().bold(),
        format!("({})", article.id).dimmed()
    );
    println!();
    println!("{}: {}", "Source".bold(), text(&article.source));
    println!("{}: {}", "Bias".bold(), text(&article.bias));
    println!("{}: {}", "Date".bold(), text(&article.date));
    println!("{}: {}", "Read time".bold(), text(&article.read_time));
    println!("{}: {}", "URL".bold(), text(&article.url));
    println!();
    println!("{}", text(&article.content));
    println!();
    println!("{}", "Fact check".bold());
    println!("  {}", text(&article.fact_check));
    println!("{}", "Tone".bold());
    println!("  {}", text(&article.tone));
}

/// Print articles grouped by bias and source.
pub fn print_article_groups(groups: &[BiasGroup]) {
    if groups.is_empty() {
        println!("{}", "No articles found.".dimmed());
        return;
    }

    for group in groups {
        println!("{}", group.name.bold());
        for source in &group.sources {
            println!("  {} {}", "●".cyan(), source.name);
            for article in &source.articles {
                println!(
                    "    {} {}",
                    truncate_visual(&article.title, 60),
                    format!("({})", article.id).dimmed()
                );
            }
        }
        println!();
    }
}

fn text(value: &Value) -> String {
    value_text(value).unwrap_or_default()
}

/// Truncate to a visual width, accounting for wide characters.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_visual_keeps_short_text() {
        assert_eq!(truncate_visual("Ana", 10), "Ana");
    }

    #[test]
    fn test_truncate_visual_counts_characters_not_bytes() {
        // "Događaj" is 7 columns wide but 8 bytes long.
        assert_eq!(truncate_visual("Događaj", 7), "Događaj");
        assert_eq!(truncate_visual("Životinja u parku", 8), "Životi..");
    }
}
