//! Custom actions for the catalog actor.

/// Operations on a [`CatalogItem`](crate::model::CatalogItem) beyond create/get/update.
#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
}
