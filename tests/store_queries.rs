use carnet_cuisine::{open_in_memory, DataSource, Database, StoreError};

fn empty_store() -> Database {
    Database::new(open_in_memory().unwrap())
}

fn seeded_store() -> Database {
    let conn = open_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO alimentation_liste_de_course (id, liste_de_course)
             VALUES (1, 'Lait\nPain\nOeufs');
         INSERT INTO alimentation_recette (id, noms, recette) VALUES
             (1, 'Soupe', 'Faire bouillir.'),
             (2, 'Crêpes', 'INGRÉDIENTS:\n- Farine'),
             (3, 'tarte fine', 'Étaler la pâte.');
         INSERT INTO historique_recette (id, nom, recette) VALUES
             (10, 'Tartare', 'Couper menu.'),
             (11, 'Soupe', 'Réchauffer.'),
             (12, 'Tarte aux pommes', 'PRÉPARATION:\n- Peler les pommes');",
    )
    .unwrap();
    Database::new(conn)
}

#[test]
fn shopping_list_is_absent_on_a_fresh_store() {
    let store = empty_store();
    assert!(store.shopping_list().unwrap().is_none());
}

#[test]
fn shopping_list_reads_only_row_one() {
    let store = seeded_store();
    let liste = store.shopping_list().unwrap().unwrap();
    assert_eq!(liste.id, 1);
    assert_eq!(liste.content, "Lait\nPain\nOeufs");
    assert!(liste.created_at.is_none());
}

#[test]
fn other_list_rows_are_invisible() {
    let conn = open_in_memory().unwrap();
    conn.execute(
        "INSERT INTO alimentation_liste_de_course (id, liste_de_course) VALUES (2, 'Beurre')",
        [],
    )
    .unwrap();
    let store = Database::new(conn);
    assert!(store.shopping_list().unwrap().is_none());
}

#[test]
fn recipes_come_back_ordered_by_name() {
    let store = seeded_store();
    let names: Vec<String> = store
        .recipes()
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    // Case-insensitive ordering, so the lowercase entry is not pushed last.
    assert_eq!(names, vec!["Crêpes", "Soupe", "tarte fine"]);
}

#[test]
fn recipes_on_an_empty_store_is_an_empty_list_not_an_error() {
    let store = empty_store();
    assert!(store.recipes().unwrap().is_empty());
    assert!(store.historical_recipes().unwrap().is_empty());
}

#[test]
fn recipe_by_id_returns_the_matching_row() {
    let store = seeded_store();
    let recette = store.recipe_by_id(2).unwrap();
    assert_eq!(recette.name, "Crêpes");
    assert_eq!(recette.body, "INGRÉDIENTS:\n- Farine");
}

#[test]
fn recipe_by_id_distinguishes_not_found() {
    let store = seeded_store();
    assert!(matches!(
        store.recipe_by_id(99),
        Err(StoreError::NotFound)
    ));
}

#[test]
fn historical_recipes_come_back_ordered_by_name() {
    let store = seeded_store();
    let names: Vec<String> = store
        .historical_recipes()
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["Soupe", "Tartare", "Tarte aux pommes"]);
}

#[test]
fn historical_recipe_by_id_round_trips() {
    let store = seeded_store();
    let recette = store.historical_recipe_by_id(12).unwrap();
    assert_eq!(recette.name, "Tarte aux pommes");
    assert!(matches!(
        store.historical_recipe_by_id(999),
        Err(StoreError::NotFound)
    ));
}

#[test]
fn ensure_schema_honors_the_path_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("store.sqlite");
    std::env::set_var("CARNET_DB_PATH", &path);

    let conn = carnet_cuisine::ensure_schema().unwrap();
    assert!(path.exists());
    // The schema is in place: an empty read works immediately.
    let store = Database::new(conn);
    assert!(store.shopping_list().unwrap().is_none());

    std::env::remove_var("CARNET_DB_PATH");
}
