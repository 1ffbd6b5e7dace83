use crate::catalog::{QuestCatalog, QuestDescription};
use crate::ui::TooltipTiming;

/// Parse KDL text. Logs a warning and returns None on failure.
fn parse_kdl(content: &str, origin: &str) -> Option<kdl::KdlDocument> {
    match content.parse::<kdl::KdlDocument>() {
        Ok(doc) => Some(doc),
        Err(e) => {
            log::warn!("failed to parse KDL {}: {}", origin, e);
            None
        }
    }
}

/// Helper to get a string value from a child node's first argument.
fn child_str<'a>(children: &'a kdl::KdlDocument, key: &str) -> Option<&'a str> {
    children.get_arg(key)?.as_string()
}

/// Parse tooltip timing from RON text, falling back to defaults.
pub fn parse_tooltip_timing(content: &str, origin: &str) -> TooltipTiming {
    match ron::from_str::<TooltipTiming>(content) {
        Ok(timing) => timing.sanitized(),
        Err(e) => {
            log::warn!("failed to parse RON {}: {}, using default timing", origin, e);
            TooltipTiming::default()
        }
    }
}

/// Load tooltip timing from a RON file.
pub fn load_tooltip_timing(path: &str) -> TooltipTiming {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("failed to read {}: {}, using default timing", path, e);
            return TooltipTiming::default();
        }
    };
    parse_tooltip_timing(&content, path)
}

/// Build a quest catalog from KDL text.
///
/// Format: `quest "identifier" { name "..."; description "..."; category "..." }`.
/// Quests without a name are skipped; duplicate identifiers keep the first.
pub fn parse_quest_catalog(content: &str, origin: &str) -> QuestCatalog {
    let mut catalog = QuestCatalog::new();
    let Some(doc) = parse_kdl(content, origin) else {
        return catalog;
    };

    for node in doc.nodes() {
        if node.name().to_string() != "quest" {
            continue;
        }

        let identifier = match node.get(0).and_then(|v| v.as_string()) {
            Some(id) => id.to_string(),
            None => {
                log::warn!("{}: quest node without identifier, skipped", origin);
                continue;
            }
        };

        let Some(children) = node.children() else {
            log::warn!("{}: quest \"{}\" has no body, skipped", origin, identifier);
            continue;
        };

        let Some(name) = child_str(children, "name") else {
            log::warn!("{}: quest \"{}\" has no name, skipped", origin, identifier);
            continue;
        };

        let data = QuestDescription {
            name: name.to_string(),
            description: child_str(children, "description")
                .unwrap_or_default()
                .to_string(),
            category: child_str(children, "category")
                .unwrap_or_default()
                .to_string(),
            identifier,
        };

        if !catalog.insert(data) {
            log::warn!("{}: duplicate quest identifier, keeping first", origin);
        }
    }

    log::info!("loaded {} quests from {}", catalog.len(), origin);
    catalog
}

/// Load the quest catalog from a KDL file. Returns an empty catalog on
/// read failure.
pub fn load_quest_catalog(path: &str) -> QuestCatalog {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_quest_catalog(&content, path),
        Err(e) => {
            log::warn!("failed to read {}: {}", path, e);
            QuestCatalog::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUESTS: &str = r#"
quest "tutorial-flying" {
    name "Learning to fly"
    description "Dock at the nearest station."
    category "Tutorial"
}
quest "tutorial-trade" {
    name "First contract"
    description "Sell a cargo of water."
}
quest "broken" {
    description "No name here."
}
quest "tutorial-flying" {
    name "Duplicate"
}
sector "ignored" {
    name "Not a quest"
}
"#;

    #[test]
    fn parses_quests_and_skips_invalid() {
        let catalog = parse_quest_catalog(QUESTS, "test");
        assert_eq!(catalog.len(), 2);

        let flying = catalog.find("tutorial-flying").expect("flying quest");
        assert_eq!(flying.name, "Learning to fly");
        assert_eq!(flying.category, "Tutorial");

        let trade = catalog.find("tutorial-trade").expect("trade quest");
        assert_eq!(trade.description, "Sell a cargo of water.");
        assert_eq!(trade.category, "");

        assert!(catalog.find("broken").is_none());
    }

    #[test]
    fn malformed_kdl_yields_empty_catalog() {
        let catalog = parse_quest_catalog("quest \"x\" {", "test");
        assert!(catalog.is_empty());
    }

    #[test]
    fn missing_catalog_file_yields_empty() {
        let catalog = load_quest_catalog("/nonexistent/quests.kdl");
        assert!(catalog.is_empty());
    }

    #[test]
    fn parses_timing_with_partial_fields() {
        let timing = parse_tooltip_timing("(delay: 0.5)", "test");
        assert!((timing.delay - 0.5).abs() < 1e-6);
        assert!((timing.fade_duration - 0.2).abs() < 1e-6);
    }

    #[test]
    fn invalid_timing_falls_back_to_default() {
        let timing = parse_tooltip_timing("(delay: \"soon\")", "test");
        assert_eq!(timing, TooltipTiming::default());
    }

    #[test]
    fn missing_timing_file_falls_back_to_default() {
        let timing = load_tooltip_timing("/nonexistent/tooltip.ron");
        assert_eq!(timing, TooltipTiming::default());
    }

    #[test]
    fn timing_is_sanitized() {
        let timing = parse_tooltip_timing("(delay: 1.0, fade_duration: 0.0)", "test");
        assert!(timing.fade_duration > 0.0);
    }
}
