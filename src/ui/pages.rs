//! One view controller per page. Each controller owns its fetch state machine
//! (`Idle → Loading → Loaded | Empty | Failed`) plus whatever selection or
//! search sub-state the page needs, and knows nothing about rendering. The
//! app mounts a fresh controller on every navigation and invokes `start()`
//! exactly once as the entry action, so "fetch on mount" is explicit instead
//! of hidden in a lifecycle hook.

use crate::db::{DataSource, StoreError};
use crate::models::{HistoricalRecipe, Recipe, ShoppingList};
use crate::routes::Route;

/// Fetch lifecycle of a page. Terminal states can only go back to `Loading`
/// through a re-mount, which is exactly what navigating away and back does.
#[derive(Debug)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Empty,
    Failed,
}

/// A transient failure notification: fixed title, fixed per-page description,
/// no retry affordance. Rendered in the footer until the next navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

impl Toast {
    fn error(description: &str) -> Self {
        Self {
            title: "Erreur".to_string(),
            description: description.to_string(),
        }
    }

    fn introuvable() -> Self {
        Self {
            title: "Recette introuvable".to_string(),
            description: "Cette recette n'existe pas".to_string(),
        }
    }
}

/// What a controller asks the app to do after its entry action ran.
#[derive(Debug, PartialEq, Eq)]
pub enum PageEvent {
    /// Nothing to surface.
    None,
    /// Show a toast and stay on the page.
    Toast(Toast),
    /// Show a toast and navigate away. Detail pages go home when their record
    /// is unusable, since the id in the route references nothing renderable.
    Redirect(Route, Toast),
}

/// One navigation card on the home page.
pub struct Section {
    pub title: &'static str,
    pub description: &'static str,
    pub route: Route,
}

/// The three destinations the home page links to, in display order.
pub const SECTIONS: [Section; 3] = [
    Section {
        title: "Liste de courses",
        description: "Gérez vos listes de courses hebdomadaires",
        route: Route::Courses,
    },
    Section {
        title: "Recettes de la semaine",
        description: "Découvrez les recettes planifiées pour cette semaine",
        route: Route::WeeklyRecipes,
    },
    Section {
        title: "Toutes les Recettes",
        description: "Explorez toute votre collection de recettes",
        route: Route::AllRecipes,
    },
];

/// Home: three static navigation cards, no fetch.
pub struct HomePage {
    pub selected: usize,
}

impl HomePage {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = SECTIONS.len() as isize;
        let next = (self.selected as isize + delta).clamp(0, len - 1);
        self.selected = next as usize;
    }

    /// The route behind the focused card.
    pub fn activate(&self) -> Route {
        SECTIONS[self.selected].route
    }
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

/// Shopping-list page: fetches the single row (id = 1) on mount.
pub struct CoursesPage {
    pub state: LoadState<ShoppingList>,
}

impl CoursesPage {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
        }
    }

    pub fn start(&mut self, store: &dyn DataSource) -> PageEvent {
        self.state = LoadState::Loading;
        match store.shopping_list() {
            Ok(Some(liste)) => {
                self.state = LoadState::Loaded(liste);
                PageEvent::None
            }
            Ok(None) => {
                self.state = LoadState::Empty;
                PageEvent::None
            }
            Err(_) => {
                self.state = LoadState::Failed;
                PageEvent::Toast(Toast::error("Impossible de charger la liste de courses"))
            }
        }
    }
}

impl Default for CoursesPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Weekly-recipes page: a picker over the loaded list plus the inline detail
/// of whichever recipe is chosen.
pub struct WeeklyPage {
    pub state: LoadState<Vec<Recipe>>,
    /// Index of the focused picker entry.
    pub picker: usize,
    /// The chosen recipe, cloned out of the loaded list by name lookup.
    pub chosen: Option<Recipe>,
}

impl WeeklyPage {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            picker: 0,
            chosen: None,
        }
    }

    pub fn start(&mut self, store: &dyn DataSource) -> PageEvent {
        self.state = LoadState::Loading;
        match store.recipes() {
            Ok(recettes) if recettes.is_empty() => {
                self.state = LoadState::Empty;
                PageEvent::None
            }
            Ok(recettes) => {
                self.state = LoadState::Loaded(recettes);
                PageEvent::None
            }
            Err(_) => {
                self.state = LoadState::Failed;
                PageEvent::Toast(Toast::error("Impossible de charger les recettes"))
            }
        }
    }

    /// The loaded list, or an empty slice in every other state.
    pub fn recipes(&self) -> &[Recipe] {
        match &self.state {
            LoadState::Loaded(recettes) => recettes,
            _ => &[],
        }
    }

    pub fn move_picker(&mut self, delta: isize) {
        let len = self.recipes().len();
        if len == 0 {
            return;
        }
        let next = (self.picker as isize + delta).clamp(0, len as isize - 1);
        self.picker = next as usize;
    }

    /// Look a name up against the already-loaded list. Choosing a name that
    /// is not in the list clears the detail view instead of erroring.
    pub fn select_name(&mut self, name: &str) {
        self.chosen = self.recipes().iter().find(|r| r.name == name).cloned();
    }

    /// Choose the picker's focused entry.
    pub fn choose_current(&mut self) {
        if let Some(recette) = self.recipes().get(self.picker) {
            let name = recette.name.clone();
            self.select_name(&name);
        }
    }

    pub fn clear_selection(&mut self) {
        self.chosen = None;
    }
}

impl Default for WeeklyPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Full-catalogue page: every historical recipe, filtered live by a free-text
/// query on the name. The displayed list is always recomputed from the loaded
/// list, so clearing the query restores everything.
pub struct CataloguePage {
    pub state: LoadState<Vec<HistoricalRecipe>>,
    pub query: String,
    pub selected: usize,
}

impl CataloguePage {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            query: String::new(),
            selected: 0,
        }
    }

    pub fn start(&mut self, store: &dyn DataSource) -> PageEvent {
        self.state = LoadState::Loading;
        match store.historical_recipes() {
            Ok(recettes) if recettes.is_empty() => {
                self.state = LoadState::Empty;
                PageEvent::None
            }
            Ok(recettes) => {
                self.state = LoadState::Loaded(recettes);
                PageEvent::None
            }
            Err(_) => {
                self.state = LoadState::Failed;
                PageEvent::Toast(Toast::error("Impossible de charger les recettes"))
            }
        }
    }

    /// The loaded catalogue, or an empty slice in every other state.
    pub fn loaded(&self) -> &[HistoricalRecipe] {
        match &self.state {
            LoadState::Loaded(recettes) => recettes,
            _ => &[],
        }
    }

    /// The displayed list: case-insensitive substring match on the name. An
    /// empty query returns the whole catalogue.
    pub fn filtered(&self) -> Vec<&HistoricalRecipe> {
        self.loaded()
            .iter()
            .filter(|r| r.matches(&self.query))
            .collect()
    }

    pub fn push_query_char(&mut self, ch: char) {
        self.query.push(ch);
        self.clamp_selection();
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.clamp_selection();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.clamp_selection();
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.filtered().len();
        if len == 0 {
            return;
        }
        let next = (self.selected as isize + delta).clamp(0, len as isize - 1);
        self.selected = next as usize;
    }

    pub fn current(&self) -> Option<&HistoricalRecipe> {
        self.filtered().get(self.selected).copied()
    }

    /// The route behind the focused card, when one is focused.
    pub fn activate(&self) -> Option<Route> {
        self.current().map(|r| Route::HistoryDetail(r.id))
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

impl Default for CataloguePage {
    fn default() -> Self {
        Self::new()
    }
}

/// Detail page for one weekly recipe, keyed by the id in the route.
pub struct RecipeDetailPage {
    pub id: i64,
    pub state: LoadState<Recipe>,
    /// Vertical scroll offset for long bodies.
    pub scroll: u16,
}

impl RecipeDetailPage {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            state: LoadState::Idle,
            scroll: 0,
        }
    }

    pub fn scroll_by(&mut self, delta: i16) {
        self.scroll = self.scroll.saturating_add_signed(delta);
    }

    pub fn start(&mut self, store: &dyn DataSource) -> PageEvent {
        self.state = LoadState::Loading;
        match store.recipe_by_id(self.id) {
            Ok(recette) => {
                self.state = LoadState::Loaded(recette);
                PageEvent::None
            }
            Err(StoreError::NotFound) => {
                self.state = LoadState::Failed;
                PageEvent::Redirect(Route::Home, Toast::introuvable())
            }
            Err(_) => {
                self.state = LoadState::Failed;
                PageEvent::Redirect(Route::Home, Toast::error("Impossible de charger la recette"))
            }
        }
    }
}

/// Detail page for one historical recipe. Same contract as
/// [`RecipeDetailPage`], different table.
pub struct HistoryDetailPage {
    pub id: i64,
    pub state: LoadState<HistoricalRecipe>,
    /// Vertical scroll offset for long bodies.
    pub scroll: u16,
}

impl HistoryDetailPage {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            state: LoadState::Idle,
            scroll: 0,
        }
    }

    pub fn scroll_by(&mut self, delta: i16) {
        self.scroll = self.scroll.saturating_add_signed(delta);
    }

    pub fn start(&mut self, store: &dyn DataSource) -> PageEvent {
        self.state = LoadState::Loading;
        match store.historical_recipe_by_id(self.id) {
            Ok(recette) => {
                self.state = LoadState::Loaded(recette);
                PageEvent::None
            }
            Err(StoreError::NotFound) => {
                self.state = LoadState::Failed;
                PageEvent::Redirect(Route::Home, Toast::introuvable())
            }
            Err(_) => {
                self.state = LoadState::Failed;
                PageEvent::Redirect(Route::Home, Toast::error("Impossible de charger la recette"))
            }
        }
    }
}
