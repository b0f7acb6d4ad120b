use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(content: Option<&Path>) -> Result<(), String> {
    let store = super::load_content(content)?;

    if store.is_empty() {
        println!("  No chapters found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Chapter", "Cards", "Example"]);

    for (name, cards) in store.iter() {
        let example = cards
            .first()
            .map(ToString::to_string)
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![name.to_string(), cards.len().to_string(), example]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} chapters, {} cards",
        store.len(),
        store.card_count()
    );

    Ok(())
}
