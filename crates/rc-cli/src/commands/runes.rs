use comfy_table::{ContentArrangement, Table};
use rc_mechanics::rune::{RUNE_CATALOG, RuneKind};
use rc_mechanics::{EscalationScheme, Rune};

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Rune", "Meanings", "Effect"]);

    let scheme = EscalationScheme::STANDARD;
    for info in RUNE_CATALOG {
        let rune = Rune::new(info.name);
        let effect = if !rune.is_multiplier() {
            "—".to_string()
        } else if rune.kind() == RuneKind::Vas {
            format!("cost ×2, +{} die step", scheme.vas)
        } else {
            format!("cost ×3, +{} die steps", scheme.uus)
        };
        table.add_row(vec![info.name.to_string(), info.meanings.join(", "), effect]);
    }

    println!("{table}");
    println!();
    println!("  {} runes", RUNE_CATALOG.len());
    Ok(())
}
