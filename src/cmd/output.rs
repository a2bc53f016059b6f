use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print `name  value` pairs with the names padded to a common width.
pub fn print_pairs(pairs: &IndexMap<String, String>) {
    let width = pairs.keys().map(|k| k.chars().count()).max().unwrap_or(0);
    for (name, value) in pairs {
        println!("{name:<width$}  {value}");
    }
    println!("\n({} channels)", pairs.len());
}

pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
