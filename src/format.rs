//! Pure text classification for recipe bodies and the shopping list. The
//! store keeps both as free-form multi-line blobs; everything about their
//! display structure (headings, bullets, spacing) is reconstructed here so
//! the rendering layer only has to style typed lines.

/// One classified display line of a recipe body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeLine {
    /// An empty line kept as an explicit spacer between sections.
    Blank,
    /// A section title such as `INGRÉDIENTS:`. The colon stays in the
    /// payload because it is part of how the author wrote the heading.
    Heading(String),
    /// A `-` or `•` item with the marker stripped from the payload.
    Bullet(String),
    /// Anything else: ordinary prose.
    Paragraph(String),
}

/// Split a recipe body into classified lines, preserving empty lines as
/// [`RecipeLine::Blank`] so paragraph spacing survives the round trip. Same
/// input always yields the same sequence; no I/O happens here.
pub fn recipe_lines(content: &str) -> Vec<RecipeLine> {
    content.split('\n').map(|raw| classify(raw.trim())).collect()
}

/// Split the shopping list into displayable items: one per line, trimmed,
/// with lines that end up empty dropped entirely.
pub fn shopping_list_items(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn classify(line: &str) -> RecipeLine {
    if line.is_empty() {
        return RecipeLine::Blank;
    }
    if is_section_heading(line) {
        return RecipeLine::Heading(line.to_string());
    }
    if let Some(rest) = line.strip_prefix(['-', '•']) {
        return RecipeLine::Bullet(rest.trim_start().to_string());
    }
    RecipeLine::Paragraph(line.to_string())
}

/// A heading is a line of uppercase/accented letters and spaces ending in a
/// colon. The accepted accent range is `À`..=`Ÿ`, matching how the recipes
/// are actually typed (French section titles like `PRÉPARATION:`).
fn is_section_heading(line: &str) -> bool {
    let Some(head) = line.strip_suffix(':') else {
        return false;
    };
    !head.is_empty()
        && head
            .chars()
            .all(|ch| ch.is_ascii_uppercase() || ('À'..='Ÿ').contains(&ch) || ch.is_whitespace())
}
