//! Path-based navigation table. Pages never hold references to each other;
//! they request a [`Route`] and the app mounts the matching page. Keeping the
//! mapping a pure lookup means history-style navigation (the Esc "back to
//! home" button, detail redirects) is just another `Route` value.

/// Every page the app can show. The two detail routes carry the clicked
/// record's id as their parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Courses,
    WeeklyRecipes,
    AllRecipes,
    RecipeDetail(i64),
    HistoryDetail(i64),
    /// Catch-all for any path outside the fixed table.
    NotFound,
}

impl Route {
    /// Resolve a literal path against the route table. Unmatched paths (bad
    /// prefixes, trailing garbage, non-numeric ids) all fall through to
    /// [`Route::NotFound`].
    pub fn parse(path: &str) -> Route {
        match path {
            "/" => Route::Home,
            "/courses" => Route::Courses,
            "/recettes-semaine" => Route::WeeklyRecipes,
            "/toutes-recettes" => Route::AllRecipes,
            _ => {
                if let Some(id) = parse_id(path, "/recette/") {
                    Route::RecipeDetail(id)
                } else if let Some(id) = parse_id(path, "/historique/") {
                    Route::HistoryDetail(id)
                } else {
                    Route::NotFound
                }
            }
        }
    }

    /// The inverse of [`Route::parse`] for every reachable route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Courses => "/courses".to_string(),
            Route::WeeklyRecipes => "/recettes-semaine".to_string(),
            Route::AllRecipes => "/toutes-recettes".to_string(),
            Route::RecipeDetail(id) => format!("/recette/{id}"),
            Route::HistoryDetail(id) => format!("/historique/{id}"),
            Route::NotFound => "/404".to_string(),
        }
    }
}

fn parse_id(path: &str, prefix: &str) -> Option<i64> {
    path.strip_prefix(prefix)?.parse().ok()
}
