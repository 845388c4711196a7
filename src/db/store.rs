use rusqlite::{Connection, Row};
use thiserror::Error;

use crate::models::{HistoricalRecipe, Recipe, ShoppingList};

/// Tagged failure for every read. A single-record query that finds zero rows
/// is `NotFound` so callers can tell "the referenced entity does not exist"
/// (navigable-away) apart from the query itself failing. Nothing here is ever
/// allowed to propagate past a view controller.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("row not found")]
    NotFound,
    #[error("backend query failed: {0}")]
    Backend(#[from] rusqlite::Error),
}

/// Sort directive for list reads.
#[derive(Debug, Clone, Copy)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// One read request: which table, which columns, an optional equality filter
/// and an optional sort. Every query the app issues is described this way so
/// the facade stays the single place SQL gets assembled.
pub struct SelectQuery<'a> {
    pub table: &'a str,
    pub columns: &'a str,
    pub filter: Option<(&'a str, i64)>,
    pub order: Option<(&'a str, SortOrder)>,
}

/// The reads the pages need, fronted by a trait so view controllers can be
/// driven by a fake store in tests. The concrete implementation is
/// [`Database`]; no write operations exist on purpose.
pub trait DataSource {
    /// The single shopping-list row (id = 1), or `None` when no list exists
    /// yet. Absence is an ordinary empty state, not an error.
    fn shopping_list(&self) -> Result<Option<ShoppingList>, StoreError>;
    /// All weekly recipes ordered by name ascending.
    fn recipes(&self) -> Result<Vec<Recipe>, StoreError>;
    /// One weekly recipe; `StoreError::NotFound` when the id matches nothing.
    fn recipe_by_id(&self, id: i64) -> Result<Recipe, StoreError>;
    /// The full historical catalogue ordered by name ascending.
    fn historical_recipes(&self) -> Result<Vec<HistoricalRecipe>, StoreError>;
    /// One historical recipe; `StoreError::NotFound` when the id matches
    /// nothing.
    fn historical_recipe_by_id(&self, id: i64) -> Result<HistoricalRecipe, StoreError>;
}

/// The configured store handle. Constructed once at startup and injected into
/// the app; holds the connection for the lifetime of the process.
pub struct Database {
    conn: Connection,
}

/// Id of the only shopping-list row the client ever asks for.
const SHOPPING_LIST_ID: i64 = 1;

impl Database {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Run one select and map every row. Each call is exactly one request:
    /// no retries, no pagination.
    fn select<T>(
        &self,
        query: &SelectQuery<'_>,
        map: impl FnMut(&Row<'_>) -> rusqlite::Result<T>,
    ) -> Result<Vec<T>, StoreError> {
        let mut sql = format!("SELECT {} FROM {}", query.columns, query.table);
        if let Some((column, _)) = query.filter {
            sql.push_str(&format!(" WHERE {column} = ?1"));
        }
        if let Some((column, order)) = query.order {
            let direction = match order {
                SortOrder::Ascending => "ASC",
                SortOrder::Descending => "DESC",
            };
            sql.push_str(&format!(" ORDER BY {column} COLLATE NOCASE {direction}"));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = match query.filter {
            Some((_, value)) => stmt.query_map([value], map)?.collect::<Result<Vec<_>, _>>()?,
            None => stmt.query_map([], map)?.collect::<Result<Vec<_>, _>>()?,
        };
        Ok(rows)
    }

    /// Like [`Database::select`] but for single-row reads: zero rows becomes
    /// `StoreError::NotFound`.
    fn select_one<T>(
        &self,
        query: &SelectQuery<'_>,
        map: impl FnMut(&Row<'_>) -> rusqlite::Result<T>,
    ) -> Result<T, StoreError> {
        self.select(query, map)?
            .into_iter()
            .next()
            .ok_or(StoreError::NotFound)
    }
}

impl DataSource for Database {
    fn shopping_list(&self) -> Result<Option<ShoppingList>, StoreError> {
        let rows = self.select(
            &SelectQuery {
                table: "alimentation_liste_de_course",
                columns: "id, liste_de_course, created_at",
                filter: Some(("id", SHOPPING_LIST_ID)),
                order: None,
            },
            map_shopping_list,
        )?;
        Ok(rows.into_iter().next())
    }

    fn recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        self.select(
            &SelectQuery {
                table: "alimentation_recette",
                columns: "id, noms, recette, created_at",
                filter: None,
                order: Some(("noms", SortOrder::Ascending)),
            },
            map_recipe,
        )
    }

    fn recipe_by_id(&self, id: i64) -> Result<Recipe, StoreError> {
        self.select_one(
            &SelectQuery {
                table: "alimentation_recette",
                columns: "id, noms, recette, created_at",
                filter: Some(("id", id)),
                order: None,
            },
            map_recipe,
        )
    }

    fn historical_recipes(&self) -> Result<Vec<HistoricalRecipe>, StoreError> {
        self.select(
            &SelectQuery {
                table: "historique_recette",
                columns: "id, nom, recette, created_at",
                filter: None,
                order: Some(("nom", SortOrder::Ascending)),
            },
            map_historical,
        )
    }

    fn historical_recipe_by_id(&self, id: i64) -> Result<HistoricalRecipe, StoreError> {
        self.select_one(
            &SelectQuery {
                table: "historique_recette",
                columns: "id, nom, recette, created_at",
                filter: Some(("id", id)),
                order: None,
            },
            map_historical,
        )
    }
}

fn map_shopping_list(row: &Row<'_>) -> rusqlite::Result<ShoppingList> {
    Ok(ShoppingList {
        id: row.get(0)?,
        content: row.get(1)?,
        created_at: row.get(2)?,
    })
}

fn map_recipe(row: &Row<'_>) -> rusqlite::Result<Recipe> {
    Ok(Recipe {
        id: row.get(0)?,
        name: row.get(1)?,
        body: row.get(2)?,
        created_at: row.get(3)?,
    })
}

fn map_historical(row: &Row<'_>) -> rusqlite::Result<HistoricalRecipe> {
    Ok(HistoricalRecipe {
        id: row.get(0)?,
        name: row.get(1)?,
        body: row.get(2)?,
        created_at: row.get(3)?,
    })
}
