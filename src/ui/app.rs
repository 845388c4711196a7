use std::cmp::min;

use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::db::DataSource;
use crate::format::{recipe_lines, shopping_list_items};
use crate::models::HistoricalRecipe;
use crate::routes::Route;

use super::helpers::{centered_rect, recipe_body_text, skeleton_lines};
use super::pages::{
    CataloguePage, CoursesPage, HistoryDetailPage, HomePage, LoadState, PageEvent,
    RecipeDetailPage, Toast, WeeklyPage, SECTIONS,
};

/// Footer space reserved for the toast line and key instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height allocation per recipe card in the catalogue list.
const CATALOGUE_CARD_HEIGHT: u16 = 4;
/// Picker rows kept on screen at once on the weekly page.
const PICKER_VISIBLE_ROWS: usize = 8;

/// The mounted controller for the active route. One variant per page keeps
/// the rendering dispatch and the key dispatch in the same shape as the route
/// table.
pub enum Page {
    Home(HomePage),
    Courses(CoursesPage),
    Weekly(WeeklyPage),
    Catalogue(CataloguePage),
    RecipeDetail(RecipeDetailPage),
    HistoryDetail(HistoryDetailPage),
    NotFound,
}

/// Fine-grained input modes. Search only exists on the catalogue page.
enum Mode {
    Normal,
    Searching,
}

/// Central application state: the injected store handle, the active route and
/// its mounted page, and the footer toast.
pub struct App<S: DataSource> {
    store: S,
    route: Route,
    page: Page,
    toast: Option<Toast>,
    mode: Mode,
}

impl<S: DataSource> App<S> {
    /// Build the app and mount the home page.
    pub fn new(store: S) -> Self {
        let mut app = Self {
            store,
            route: Route::Home,
            page: Page::Home(HomePage::new()),
            toast: None,
            mode: Mode::Normal,
        };
        app.navigate(Route::Home);
        app
    }

    /// Resolve a literal path against the route table and navigate to it.
    pub fn open_path(&mut self, path: &str) {
        self.navigate(Route::parse(path));
    }

    /// Mount the page for `route` and run its entry action. Mounting is also
    /// the re-fetch trigger: coming back to a page always reloads it. A
    /// failed detail fetch redirects home with its toast surviving the hop.
    pub fn navigate(&mut self, route: Route) {
        self.mode = Mode::Normal;
        self.toast = None;
        self.route = route;

        let event = match route {
            Route::Home => {
                self.page = Page::Home(HomePage::new());
                PageEvent::None
            }
            Route::Courses => {
                let mut page = CoursesPage::new();
                let event = page.start(&self.store);
                self.page = Page::Courses(page);
                event
            }
            Route::WeeklyRecipes => {
                let mut page = WeeklyPage::new();
                let event = page.start(&self.store);
                self.page = Page::Weekly(page);
                event
            }
            Route::AllRecipes => {
                let mut page = CataloguePage::new();
                let event = page.start(&self.store);
                self.page = Page::Catalogue(page);
                event
            }
            Route::RecipeDetail(id) => {
                let mut page = RecipeDetailPage::new(id);
                let event = page.start(&self.store);
                self.page = Page::RecipeDetail(page);
                event
            }
            Route::HistoryDetail(id) => {
                let mut page = HistoryDetailPage::new(id);
                let event = page.start(&self.store);
                self.page = Page::HistoryDetail(page);
                event
            }
            Route::NotFound => {
                self.page = Page::NotFound;
                PageEvent::None
            }
        };

        match event {
            PageEvent::None => {}
            PageEvent::Toast(toast) => self.toast = Some(toast),
            PageEvent::Redirect(target, toast) => {
                self.navigate(target);
                self.toast = Some(toast);
            }
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    /// Process one key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match self.mode {
            Mode::Searching => {
                self.handle_search_key(code);
                false
            }
            Mode::Normal => self.handle_normal_key(code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> bool {
        if code == KeyCode::Char('q') {
            return true;
        }

        // Navigation is deferred until after the page borrow ends.
        let mut goto: Option<Route> = None;
        let mut exit = false;

        match &mut self.page {
            Page::Home(home) => match code {
                KeyCode::Esc => exit = true,
                KeyCode::Left | KeyCode::Up => home.move_selection(-1),
                KeyCode::Right | KeyCode::Down => home.move_selection(1),
                KeyCode::Enter => goto = Some(home.activate()),
                _ => {}
            },
            Page::Courses(_) => {
                if code == KeyCode::Esc {
                    goto = Some(Route::Home);
                }
            }
            Page::Weekly(weekly) => match code {
                KeyCode::Up => weekly.move_picker(-1),
                KeyCode::Down => weekly.move_picker(1),
                KeyCode::Enter => weekly.choose_current(),
                KeyCode::Esc => {
                    if weekly.chosen.is_some() {
                        weekly.clear_selection();
                    } else {
                        goto = Some(Route::Home);
                    }
                }
                _ => {}
            },
            Page::Catalogue(catalogue) => match code {
                KeyCode::Up => catalogue.move_selection(-1),
                KeyCode::Down => catalogue.move_selection(1),
                KeyCode::PageUp => catalogue.move_selection(-5),
                KeyCode::PageDown => catalogue.move_selection(5),
                KeyCode::Char('/') | KeyCode::Char('f') => self.mode = Mode::Searching,
                KeyCode::Enter => goto = catalogue.activate(),
                KeyCode::Esc => goto = Some(Route::Home),
                _ => {}
            },
            Page::RecipeDetail(detail) => match code {
                KeyCode::Up => detail.scroll_by(-1),
                KeyCode::Down => detail.scroll_by(1),
                KeyCode::PageUp => detail.scroll_by(-5),
                KeyCode::PageDown => detail.scroll_by(5),
                KeyCode::Esc => goto = Some(Route::Home),
                _ => {}
            },
            Page::HistoryDetail(detail) => match code {
                KeyCode::Up => detail.scroll_by(-1),
                KeyCode::Down => detail.scroll_by(1),
                KeyCode::PageUp => detail.scroll_by(-5),
                KeyCode::PageDown => detail.scroll_by(5),
                KeyCode::Esc => goto = Some(Route::Home),
                _ => {}
            },
            Page::NotFound => {
                if matches!(code, KeyCode::Esc | KeyCode::Enter) {
                    goto = Some(Route::Home);
                }
            }
        }

        if let Some(route) = goto {
            self.navigate(route);
        }
        exit
    }

    /// Keys while the catalogue search input is open. Every keystroke that
    /// edits the query refilters synchronously; Esc closes and clears.
    fn handle_search_key(&mut self, code: KeyCode) {
        let mut goto: Option<Route> = None;

        match &mut self.page {
            Page::Catalogue(catalogue) => match code {
                KeyCode::Esc => {
                    catalogue.clear_query();
                    self.mode = Mode::Normal;
                }
                KeyCode::Up => catalogue.move_selection(-1),
                KeyCode::Down => catalogue.move_selection(1),
                KeyCode::Backspace => catalogue.pop_query_char(),
                KeyCode::Enter => goto = catalogue.activate(),
                KeyCode::Char(ch) if !ch.is_control() => catalogue.push_query_char(ch),
                _ => {}
            },
            _ => self.mode = Mode::Normal,
        }

        if let Some(route) = goto {
            self.navigate(route);
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.page {
            Page::Home(home) => self.draw_home(frame, content_area, home),
            Page::Courses(courses) => self.draw_courses(frame, content_area, courses),
            Page::Weekly(weekly) => self.draw_weekly(frame, content_area, weekly),
            Page::Catalogue(catalogue) => self.draw_catalogue(frame, content_area, catalogue),
            Page::RecipeDetail(detail) => self.draw_recipe_detail(frame, content_area, detail),
            Page::HistoryDetail(detail) => self.draw_history_detail(frame, content_area, detail),
            Page::NotFound => self.draw_not_found(frame, content_area),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        if let (Mode::Searching, Page::Catalogue(catalogue)) = (&self.mode, &self.page) {
            self.draw_search_bar(frame, area, &catalogue.query);
        }
    }

    fn draw_home(&self, frame: &mut Frame, area: Rect, home: &HomePage) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(7),
                Constraint::Length(2),
            ])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "Mon Carnet de Cuisine",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Bienvenue dans votre espace culinaire personnel",
                Style::default().add_modifier(Modifier::ITALIC),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(chunks[1]);

        for (idx, section) in SECTIONS.iter().enumerate() {
            let mut block = Block::default()
                .borders(Borders::ALL)
                .title(section.title);
            if idx == home.selected {
                block = block.style(Style::default().fg(Color::Yellow));
            }
            let card = Paragraph::new(section.description)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block);
            frame.render_widget(card, columns[idx]);
        }

        let quote = Paragraph::new(Span::styled(
            "« La cuisine est un art et tout le monde peut être un artiste »",
            Style::default().add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(quote, chunks[2]);
    }

    fn draw_courses(&self, frame: &mut Frame, area: Rect, courses: &CoursesPage) {
        let chunks = self.split_header(area);
        self.draw_page_header(
            frame,
            chunks[0],
            "Ma Liste de Courses",
            "Mes courses soigneusement organisées",
        );

        match &courses.state {
            LoadState::Idle | LoadState::Loading => self.draw_skeleton_card(frame, chunks[1]),
            LoadState::Empty | LoadState::Failed => self.draw_empty_state(
                frame,
                chunks[1],
                "Aucune liste trouvée",
                "Votre liste de courses apparaîtra ici une fois ajoutée à la base de données.",
            ),
            LoadState::Loaded(liste) => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        "Tous mes essentiels pour cuisiner",
                        Style::default().fg(Color::DarkGray),
                    )),
                    Line::from(""),
                ];
                for item in shopping_list_items(&liste.content) {
                    lines.push(Line::from(vec![
                        Span::styled("  • ", Style::default().fg(Color::Yellow)),
                        Span::raw(item),
                    ]));
                }
                let card = Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(format!("Ma Liste de Courses  #{}", liste.id)),
                    );
                frame.render_widget(card, chunks[1]);
            }
        }
    }

    fn draw_weekly(&self, frame: &mut Frame, area: Rect, weekly: &WeeklyPage) {
        let chunks = self.split_header(area);
        self.draw_page_header(
            frame,
            chunks[0],
            "Mes Recettes",
            "Découvrez et savourez vos recettes préférées",
        );

        match &weekly.state {
            LoadState::Idle | LoadState::Loading => self.draw_skeleton_card(frame, chunks[1]),
            LoadState::Empty | LoadState::Failed => self.draw_empty_state(
                frame,
                chunks[1],
                "Aucune recette disponible",
                "Commencez par ajouter vos premières recettes pour les voir apparaître ici.",
            ),
            LoadState::Loaded(recettes) => {
                let picker_height = (min(PICKER_VISIBLE_ROWS, recettes.len()) + 2) as u16;
                let parts = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(picker_height), Constraint::Min(3)])
                    .split(chunks[1]);

                self.draw_picker(frame, parts[0], weekly);

                if let Some(chosen) = &weekly.chosen {
                    let body = recipe_body_text(&recipe_lines(&chosen.body));
                    let card = Paragraph::new(body).wrap(Wrap { trim: false }).block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(chosen.name.clone()),
                    );
                    frame.render_widget(card, parts[1]);
                } else {
                    self.draw_empty_state(
                        frame,
                        parts[1],
                        "Sélectionnez une recette",
                        "Choisissez une recette dans le menu ci-dessus pour afficher ses détails.",
                    );
                }
            }
        }
    }

    fn draw_picker(&self, frame: &mut Frame, area: Rect, weekly: &WeeklyPage) {
        let recettes = weekly.recipes();
        let capacity = area.height.saturating_sub(2).max(1) as usize;
        let start = if weekly.picker >= capacity {
            weekly.picker + 1 - capacity
        } else {
            0
        };

        let chosen_name = weekly.chosen.as_ref().map(|r| r.name.as_str());
        let lines: Vec<Line<'static>> = recettes
            .iter()
            .enumerate()
            .skip(start)
            .take(capacity)
            .map(|(idx, recette)| {
                let pointer = if idx == weekly.picker { "▶ " } else { "  " };
                let mut style = Style::default();
                if Some(recette.name.as_str()) == chosen_name {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Line::from(Span::styled(format!("{pointer}{}", recette.name), style))
            })
            .collect();

        let picker = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Choisir une recette"),
        );
        frame.render_widget(picker, area);
    }

    fn draw_catalogue(&self, frame: &mut Frame, area: Rect, catalogue: &CataloguePage) {
        let total = catalogue.loaded().len();
        let plural = if total > 1 { "s" } else { "" };
        let chunks = self.split_header(area);
        self.draw_page_header(
            frame,
            chunks[0],
            "Toutes les Recettes",
            &format!("{total} recette{plural} disponible{plural}"),
        );

        match &catalogue.state {
            LoadState::Idle | LoadState::Loading => self.draw_skeleton_card(frame, chunks[1]),
            LoadState::Empty | LoadState::Failed => self.draw_empty_state(
                frame,
                chunks[1],
                "Aucune recette",
                "Commencez par ajouter vos premières recettes pour les voir apparaître ici.",
            ),
            LoadState::Loaded(_) => {
                let filtered = catalogue.filtered();
                if filtered.is_empty() {
                    self.draw_empty_state(
                        frame,
                        chunks[1],
                        "Aucun résultat",
                        "Aucune recette ne correspond à la recherche.",
                    );
                } else {
                    self.render_catalogue_cards(frame, chunks[1], &filtered, catalogue.selected);
                }
            }
        }
    }

    fn render_catalogue_cards(
        &self,
        frame: &mut Frame,
        area: Rect,
        recettes: &[&HistoricalRecipe],
        selected: usize,
    ) {
        if area.height == 0 {
            return;
        }

        let card_height = CATALOGUE_CARD_HEIGHT as usize;
        let capacity = ((area.height as usize) / card_height).max(1);
        let len = recettes.len();
        let mut start = if selected >= capacity {
            selected + 1 - capacity
        } else {
            0
        };
        if start + capacity > len {
            start = len.saturating_sub(capacity);
        }

        for (offset, recette) in recettes.iter().skip(start).take(capacity).enumerate() {
            let idx = start + offset;
            let card_area = Rect {
                x: area.x,
                y: area.y + (offset * card_height) as u16,
                width: area.width,
                height: card_height as u16,
            };

            let mut block = Block::default().borders(Borders::ALL);
            if idx == selected {
                block = block.style(Style::default().fg(Color::Yellow));
            }

            let pointer = if idx == selected { "▶ " } else { "  " };
            let name_line = Line::from(Span::styled(
                format!("{pointer}{}", recette.name),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            let subtitle = Line::from(Span::styled(
                "  Fiche de recette",
                Style::default().fg(Color::DarkGray),
            ));

            let card = Paragraph::new(vec![name_line, subtitle]).block(block);
            frame.render_widget(card, card_area);
        }
    }

    fn draw_recipe_detail(&self, frame: &mut Frame, area: Rect, detail: &RecipeDetailPage) {
        match &detail.state {
            LoadState::Loaded(recette) => {
                let body = recipe_body_text(&recipe_lines(&recette.body));
                let card = Paragraph::new(body)
                    .wrap(Wrap { trim: false })
                    .scroll((detail.scroll, 0))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(recette.name.clone()),
                    );
                frame.render_widget(card, area);
            }
            _ => self.draw_skeleton_card(frame, area),
        }
    }

    fn draw_history_detail(&self, frame: &mut Frame, area: Rect, detail: &HistoryDetailPage) {
        match &detail.state {
            LoadState::Loaded(recette) => {
                // Historical bodies are shown verbatim, line for line.
                let lines: Vec<Line<'static>> = recette
                    .body
                    .split('\n')
                    .map(|line| Line::from(line.to_string()))
                    .collect();
                let card = Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((detail.scroll, 0))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(recette.name.clone()),
                    );
                frame.render_widget(card, area);
            }
            _ => self.draw_skeleton_card(frame, area),
        }
    }

    fn draw_not_found(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 40, area);
        let block = Block::default().borders(Borders::ALL).title("404");
        let lines = vec![
            Line::from(Span::styled(
                "Oups ! Cette page n'existe pas.",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Appuyez sur Échap pour revenir à l'accueil.",
                Style::default().fg(Color::Gray),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, popup_area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(toast) = &self.toast {
            Line::from(vec![
                Span::styled(
                    toast.title.clone(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", toast.description),
                    Style::default().fg(Color::Red),
                ),
            ])
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_search_bar(&self, frame: &mut Frame, area: Rect, query: &str) {
        let height = 3u16.min(area.height);
        let popup_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height,
        };
        frame.render_widget(Clear, popup_area);

        let block = Block::default().borders(Borders::ALL).title("Recherche");
        let paragraph = Paragraph::new(Span::raw(format!("Recherche : {query}")))
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        let cursor_x = inner.x + "Recherche : ".len() as u16 + query.chars().count() as u16;
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match (&self.page, &self.mode) {
            (Page::Catalogue(_), Mode::Searching) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Parcourir   "),
                Span::styled("[Entrée]", key_style),
                Span::raw(" Ouvrir   "),
                Span::styled("[Échap]", key_style),
                Span::raw(" Fermer la recherche"),
            ]),
            (Page::Home(_), _) => Line::from(vec![
                Span::styled("[←→]", key_style),
                Span::raw(" Naviguer   "),
                Span::styled("[Entrée]", key_style),
                Span::raw(" Ouvrir   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quitter"),
            ]),
            (Page::Weekly(_), _) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Choisir   "),
                Span::styled("[Entrée]", key_style),
                Span::raw(" Afficher   "),
                Span::styled("[Échap]", key_style),
                Span::raw(" Retour   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quitter"),
            ]),
            (Page::Catalogue(_), _) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Parcourir   "),
                Span::styled("[/]", key_style),
                Span::raw(" Rechercher   "),
                Span::styled("[Entrée]", key_style),
                Span::raw(" Ouvrir   "),
                Span::styled("[Échap]", key_style),
                Span::raw(" Retour   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quitter"),
            ]),
            (Page::RecipeDetail(_) | Page::HistoryDetail(_), _) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Défiler   "),
                Span::styled("[Échap]", key_style),
                Span::raw(" Retour   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quitter"),
            ]),
            _ => Line::from(vec![
                Span::styled("[Échap]", key_style),
                Span::raw(" Retour à l'accueil   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quitter"),
            ]),
        }
    }

    fn split_header(&self, area: Rect) -> std::rc::Rc<[Rect]> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area)
    }

    fn draw_page_header(&self, frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                title.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(subtitle.to_string()),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, area);
    }

    fn draw_skeleton_card(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL);
        let inner_width = area.width.saturating_sub(4);
        let rows = area.height.saturating_sub(2).min(6) as usize;
        let card = Paragraph::new(skeleton_lines(rows, inner_width)).block(block);
        frame.render_widget(card, area);
    }

    fn draw_empty_state(&self, frame: &mut Frame, area: Rect, title: &str, message: &str) {
        let lines = vec![
            Line::from(Span::styled(
                title.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(message.to_string()),
        ];
        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(card, area);
    }
}
