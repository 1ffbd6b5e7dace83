/// Static description of one quest as authored in the data files.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestDescription {
    pub identifier: String,
    pub name: String,
    pub description: String,
    pub category: String,
}

/// One catalog slot. Wraps the description so entries can grow asset-level
/// metadata without touching `QuestDescription`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestCatalogEntry {
    pub data: QuestDescription,
}

/// All quests known to the game, in authoring order.
#[derive(Debug, Clone, Default)]
pub struct QuestCatalog {
    pub quests: Vec<QuestCatalogEntry>,
}

impl QuestCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Returns false (and keeps the existing entry) if the
    /// identifier is already present.
    pub fn insert(&mut self, data: QuestDescription) -> bool {
        if self.find(&data.identifier).is_some() {
            return false;
        }
        self.quests.push(QuestCatalogEntry { data });
        true
    }

    pub fn find(&self, identifier: &str) -> Option<&QuestDescription> {
        self.quests
            .iter()
            .map(|e| &e.data)
            .find(|d| d.identifier == identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestDescription> {
        self.quests.iter().map(|e| &e.data)
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quest(id: &str, name: &str) -> QuestDescription {
        QuestDescription {
            identifier: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn insert_and_find() {
        let mut catalog = QuestCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.insert(quest("tutorial-flying", "Learning to fly")));
        assert!(catalog.insert(quest("tutorial-trade", "First contract")));

        assert_eq!(catalog.len(), 2);
        let found = catalog.find("tutorial-trade").map(|q| q.name.as_str());
        assert_eq!(found, Some("First contract"));
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn duplicate_identifier_keeps_first() {
        let mut catalog = QuestCatalog::new();
        assert!(catalog.insert(quest("a", "First")));
        assert!(!catalog.insert(quest("a", "Second")));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("a").map(|q| q.name.as_str()), Some("First"));
    }

    #[test]
    fn iter_preserves_order() {
        let mut catalog = QuestCatalog::new();
        catalog.insert(quest("b", "B"));
        catalog.insert(quest("a", "A"));
        let ids: Vec<&str> = catalog.iter().map(|q| q.identifier.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
