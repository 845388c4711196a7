//! Record types that mirror the store schema and get passed throughout the
//! TUI. The client only ever reads, so these stay immutable snapshots: each
//! page fetches its own copies on mount and discards them when the user
//! navigates away.

/// The shopping list. Only one instance is ever fetched (id = 1); `content`
/// is a raw multi-line blob that the formatter splits into items for display.
#[derive(Debug, Clone)]
pub struct ShoppingList {
    /// Primary key from the store. Kept even though the UI pins id = 1 so the
    /// card header can echo the row number the way the web client did.
    pub id: i64,
    /// The `liste_de_course` column: free-form text, one item per line.
    pub content: String,
    pub created_at: Option<String>,
}

/// One recipe planned for the current week. `name` doubles as the selection
/// key in the picker, so it is unique in practice even though the store does
/// not enforce it.
#[derive(Debug, Clone)]
pub struct Recipe {
    /// Primary key from the store.
    pub id: i64,
    /// The `noms` column, shown in the picker and as the detail heading.
    pub name: String,
    /// The `recette` column: multi-line body run through the formatter.
    pub body: String,
    pub created_at: Option<String>,
}

/// One entry of the historical catalogue (every recipe ever made). Same shape
/// as [`Recipe`] but stored in its own table with slightly different column
/// names, so the two kinds stay distinct types.
#[derive(Debug, Clone)]
pub struct HistoricalRecipe {
    /// Primary key from the store, carried into the `/historique/:id` route.
    pub id: i64,
    /// The `nom` column.
    pub name: String,
    /// The `recette` column, rendered verbatim on the detail page.
    pub body: String,
    pub created_at: Option<String>,
}

impl HistoricalRecipe {
    /// Case-insensitive substring match on the name, used by the catalogue
    /// search. An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
