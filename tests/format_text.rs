use carnet_cuisine::format::{recipe_lines, shopping_list_items, RecipeLine};

#[test]
fn shopping_list_drops_blank_lines() {
    let items = shopping_list_items("Lait\n\nPain\nOeufs");
    assert_eq!(items, vec!["Lait", "Pain", "Oeufs"]);
}

#[test]
fn shopping_list_trims_each_item() {
    let items = shopping_list_items("  Lait \n\t\nPain  ");
    assert_eq!(items, vec!["Lait", "Pain"]);
}

#[test]
fn empty_shopping_list_has_no_items() {
    assert!(shopping_list_items("").is_empty());
    assert!(shopping_list_items("\n\n").is_empty());
}

#[test]
fn recipe_body_is_classified() {
    let lines = recipe_lines("INGRÉDIENTS:\n- Farine\n- Sucre\n\nDescription libre.");
    assert_eq!(
        lines,
        vec![
            RecipeLine::Heading("INGRÉDIENTS:".to_string()),
            RecipeLine::Bullet("Farine".to_string()),
            RecipeLine::Bullet("Sucre".to_string()),
            RecipeLine::Blank,
            RecipeLine::Paragraph("Description libre.".to_string()),
        ]
    );
}

#[test]
fn formatting_is_deterministic() {
    let body = "PRÉPARATION:\n• Mélanger\n\nCuire 20 minutes.";
    assert_eq!(recipe_lines(body), recipe_lines(body));
}

#[test]
fn headings_require_uppercase_letters_and_a_colon() {
    // Accented uppercase counts, lowercase anywhere disqualifies.
    assert_eq!(
        recipe_lines("PRÉPARATION:")[0],
        RecipeLine::Heading("PRÉPARATION:".to_string())
    );
    assert_eq!(
        recipe_lines("CUISSON AU FOUR:")[0],
        RecipeLine::Heading("CUISSON AU FOUR:".to_string())
    );
    assert_eq!(
        recipe_lines("Ingrédients:")[0],
        RecipeLine::Paragraph("Ingrédients:".to_string())
    );
    // Missing colon stays prose.
    assert_eq!(
        recipe_lines("INGRÉDIENTS")[0],
        RecipeLine::Paragraph("INGRÉDIENTS".to_string())
    );
    // A colon alone is not a heading.
    assert_eq!(recipe_lines(":")[0], RecipeLine::Paragraph(":".to_string()));
}

#[test]
fn bullet_markers_are_stripped_from_the_payload() {
    assert_eq!(
        recipe_lines("- Farine")[0],
        RecipeLine::Bullet("Farine".to_string())
    );
    assert_eq!(
        recipe_lines("•   Sucre glace")[0],
        RecipeLine::Bullet("Sucre glace".to_string())
    );
    assert_eq!(
        recipe_lines("-Sel")[0],
        RecipeLine::Bullet("Sel".to_string())
    );
}

#[test]
fn blank_lines_survive_in_recipe_bodies() {
    let lines = recipe_lines("Un\n\nDeux");
    assert_eq!(
        lines,
        vec![
            RecipeLine::Paragraph("Un".to_string()),
            RecipeLine::Blank,
            RecipeLine::Paragraph("Deux".to_string()),
        ]
    );
}

/// No characters are silently dropped besides bullet markers and surrounding
/// whitespace: the non-blank payloads match the trimmed non-blank input lines
/// with their markers removed.
#[test]
fn classification_loses_no_content() {
    let body = "PLAT DU JOUR:\n-  Pâtes au beurre\n• Salade verte\n\nServir bien chaud.";

    let payloads: Vec<String> = recipe_lines(body)
        .into_iter()
        .filter_map(|line| match line {
            RecipeLine::Blank => None,
            RecipeLine::Heading(text)
            | RecipeLine::Bullet(text)
            | RecipeLine::Paragraph(text) => Some(text),
        })
        .collect();

    let expected: Vec<String> = body
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.strip_prefix(['-', '•'])
                .map(str::trim_start)
                .unwrap_or(line)
                .to_string()
        })
        .collect();

    assert_eq!(payloads, expected);
}
