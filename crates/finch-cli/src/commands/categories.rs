//! Category lexicon commands

use anyhow::Result;
use finch_core::{category_info, similar_categories};

pub fn cmd_category_info(id: &str, json: bool) -> Result<()> {
    let info = category_info(id);

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{} {} ({})", info.icon, info.name, info.color);
    }

    Ok(())
}

pub fn cmd_category_similar(name: &str, json: bool) -> Result<()> {
    let keywords = similar_categories(name);

    if json {
        println!("{}", serde_json::to_string_pretty(&keywords)?);
    } else if keywords.is_empty() {
        println!("🤷 No related keywords for '{}'", name);
    } else {
        println!("🔎 Related to '{}': {}", name, keywords.join(", "));
    }

    Ok(())
}
