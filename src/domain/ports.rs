use crate::domain::model::CatalogItem;

/// Read-only source of item templates. Implementors never hand out
/// mutable access, so dropping an item into a trip cannot alter it.
pub trait CatalogSource {
    fn items(&self) -> &[CatalogItem];

    fn find(&self, id: &str) -> Option<&CatalogItem> {
        self.items().iter().find(|item| item.id == id)
    }
}
