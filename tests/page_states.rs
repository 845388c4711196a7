//! View-controller behavior against a fake data source: state-machine
//! transitions, selection lookup, live search filtering, and the detail-page
//! redirect contract.

use carnet_cuisine::db::{DataSource, StoreError};
use carnet_cuisine::models::{HistoricalRecipe, Recipe, ShoppingList};
use carnet_cuisine::routes::Route;
use carnet_cuisine::ui::pages::{
    CataloguePage, CoursesPage, HistoryDetailPage, LoadState, PageEvent, RecipeDetailPage,
    WeeklyPage,
};
use carnet_cuisine::ui::Page;
use carnet_cuisine::App;

/// In-memory stand-in for the store. `fail` makes every read report a
/// transport failure.
#[derive(Default)]
struct FakeStore {
    shopping: Option<ShoppingList>,
    recipes: Vec<Recipe>,
    historical: Vec<HistoricalRecipe>,
    fail: bool,
}

fn transport_failure() -> StoreError {
    StoreError::Backend(rusqlite::Error::InvalidQuery)
}

impl DataSource for FakeStore {
    fn shopping_list(&self) -> Result<Option<ShoppingList>, StoreError> {
        if self.fail {
            return Err(transport_failure());
        }
        Ok(self.shopping.clone())
    }

    fn recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        if self.fail {
            return Err(transport_failure());
        }
        Ok(self.recipes.clone())
    }

    fn recipe_by_id(&self, id: i64) -> Result<Recipe, StoreError> {
        if self.fail {
            return Err(transport_failure());
        }
        self.recipes
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn historical_recipes(&self) -> Result<Vec<HistoricalRecipe>, StoreError> {
        if self.fail {
            return Err(transport_failure());
        }
        Ok(self.historical.clone())
    }

    fn historical_recipe_by_id(&self, id: i64) -> Result<HistoricalRecipe, StoreError> {
        if self.fail {
            return Err(transport_failure());
        }
        self.historical
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}

fn recipe(id: i64, name: &str) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        body: "PRÉPARATION:\n- Cuire".to_string(),
        created_at: None,
    }
}

fn historical(id: i64, name: &str) -> HistoricalRecipe {
    HistoricalRecipe {
        id,
        name: name.to_string(),
        body: "Réchauffer doucement.".to_string(),
        created_at: None,
    }
}

#[test]
fn courses_page_loads_the_list() {
    let store = FakeStore {
        shopping: Some(ShoppingList {
            id: 1,
            content: "Lait\nPain".to_string(),
            created_at: None,
        }),
        ..FakeStore::default()
    };

    let mut page = CoursesPage::new();
    let event = page.start(&store);
    assert_eq!(event, PageEvent::None);
    assert!(matches!(&page.state, LoadState::Loaded(l) if l.content == "Lait\nPain"));
}

#[test]
fn courses_page_absent_list_is_an_empty_state_not_an_error() {
    let store = FakeStore::default();
    let mut page = CoursesPage::new();
    let event = page.start(&store);
    assert_eq!(event, PageEvent::None);
    assert!(matches!(page.state, LoadState::Empty));
}

#[test]
fn courses_page_failure_surfaces_a_toast_and_stays() {
    let store = FakeStore {
        fail: true,
        ..FakeStore::default()
    };
    let mut page = CoursesPage::new();
    match page.start(&store) {
        PageEvent::Toast(toast) => {
            assert_eq!(toast.title, "Erreur");
            assert_eq!(toast.description, "Impossible de charger la liste de courses");
        }
        other => panic!("expected a toast, got {other:?}"),
    }
    assert!(matches!(page.state, LoadState::Failed));
}

#[test]
fn weekly_selection_finds_the_exact_record() {
    let store = FakeStore {
        recipes: vec![recipe(1, "Crêpes"), recipe(2, "Soupe")],
        ..FakeStore::default()
    };
    let mut page = WeeklyPage::new();
    page.start(&store);

    page.select_name("Soupe");
    assert_eq!(page.chosen.as_ref().map(|r| r.id), Some(2));
}

#[test]
fn weekly_selection_of_an_unknown_name_clears_the_detail() {
    let store = FakeStore {
        recipes: vec![recipe(1, "Crêpes")],
        ..FakeStore::default()
    };
    let mut page = WeeklyPage::new();
    page.start(&store);

    page.select_name("Crêpes");
    assert!(page.chosen.is_some());
    page.select_name("Cassoulet");
    assert!(page.chosen.is_none());
}

#[test]
fn weekly_empty_list_enters_the_empty_state() {
    let store = FakeStore::default();
    let mut page = WeeklyPage::new();
    assert_eq!(page.start(&store), PageEvent::None);
    assert!(matches!(page.state, LoadState::Empty));
}

#[test]
fn catalogue_search_matches_substrings_case_insensitively() {
    let store = FakeStore {
        historical: vec![
            historical(1, "Tarte aux pommes"),
            historical(2, "Soupe"),
            historical(3, "Tartare"),
        ],
        ..FakeStore::default()
    };
    let mut page = CataloguePage::new();
    page.start(&store);

    for ch in "tar".chars() {
        page.push_query_char(ch);
    }
    let names: Vec<&str> = page.filtered().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Tarte aux pommes", "Tartare"]);
}

#[test]
fn catalogue_empty_query_shows_everything() {
    let store = FakeStore {
        historical: vec![historical(1, "Tarte aux pommes"), historical(2, "Soupe")],
        ..FakeStore::default()
    };
    let mut page = CataloguePage::new();
    page.start(&store);

    page.push_query_char('x');
    assert!(page.filtered().is_empty());
    page.clear_query();
    assert_eq!(page.filtered().len(), 2);
}

#[test]
fn catalogue_narrowing_the_query_clamps_the_selection() {
    let store = FakeStore {
        historical: vec![
            historical(1, "Tarte aux pommes"),
            historical(2, "Soupe"),
            historical(3, "Tartare"),
        ],
        ..FakeStore::default()
    };
    let mut page = CataloguePage::new();
    page.start(&store);

    page.move_selection(2);
    assert_eq!(page.selected, 2);
    for ch in "soupe".chars() {
        page.push_query_char(ch);
    }
    assert_eq!(page.selected, 0);
    assert_eq!(page.current().map(|r| r.id), Some(2));
    assert_eq!(page.activate(), Some(Route::HistoryDetail(2)));
}

#[test]
fn recipe_detail_loads_by_id() {
    let store = FakeStore {
        recipes: vec![recipe(7, "Crêpes")],
        ..FakeStore::default()
    };
    let mut page = RecipeDetailPage::new(7);
    assert_eq!(page.start(&store), PageEvent::None);
    assert!(matches!(&page.state, LoadState::Loaded(r) if r.name == "Crêpes"));
}

#[test]
fn recipe_detail_not_found_redirects_home() {
    let store = FakeStore::default();
    let mut page = RecipeDetailPage::new(99);
    match page.start(&store) {
        PageEvent::Redirect(route, toast) => {
            assert_eq!(route, Route::Home);
            assert_eq!(toast.title, "Recette introuvable");
            assert_eq!(toast.description, "Cette recette n'existe pas");
        }
        other => panic!("expected a redirect, got {other:?}"),
    }
}

#[test]
fn history_detail_transport_failure_redirects_with_the_generic_toast() {
    let store = FakeStore {
        fail: true,
        ..FakeStore::default()
    };
    let mut page = HistoryDetailPage::new(1);
    match page.start(&store) {
        PageEvent::Redirect(route, toast) => {
            assert_eq!(route, Route::Home);
            assert_eq!(toast.title, "Erreur");
            assert_eq!(toast.description, "Impossible de charger la recette");
        }
        other => panic!("expected a redirect, got {other:?}"),
    }
}

#[test]
fn app_redirects_home_when_a_detail_route_finds_nothing() {
    let mut app = App::new(FakeStore::default());
    app.open_path("/recette/42");

    assert_eq!(app.route(), Route::Home);
    let toast = app.toast().expect("a toast should survive the redirect");
    assert_eq!(toast.title, "Recette introuvable");
    assert!(matches!(app.page(), Page::Home(_)));
}

#[test]
fn app_mounts_a_loaded_detail_page() {
    let store = FakeStore {
        historical: vec![historical(5, "Tartare")],
        ..FakeStore::default()
    };
    let mut app = App::new(store);
    app.open_path("/historique/5");

    assert_eq!(app.route(), Route::HistoryDetail(5));
    assert!(app.toast().is_none());
    match app.page() {
        Page::HistoryDetail(detail) => {
            assert!(matches!(&detail.state, LoadState::Loaded(r) if r.name == "Tartare"));
        }
        _ => panic!("expected the history detail page"),
    }
}

#[test]
fn navigating_away_clears_the_toast() {
    let mut app = App::new(FakeStore::default());
    app.open_path("/recette/42");
    assert!(app.toast().is_some());

    app.open_path("/courses");
    assert!(app.toast().is_none());
    assert_eq!(app.route(), Route::Courses);
}

#[test]
fn unknown_paths_fall_through_to_not_found() {
    let mut app = App::new(FakeStore::default());
    app.open_path("/nimporte-quoi");
    assert_eq!(app.route(), Route::NotFound);
    assert!(matches!(app.page(), Page::NotFound));
}
