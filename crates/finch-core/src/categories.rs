//! Category lexicon
//!
//! Static mapping from category identifiers to display metadata plus a
//! keyword-similarity index. Lookups are total: every input string resolves
//! to *some* [`CategoryInfo`], so the UI layer never has to handle a missing
//! category.

use crate::models::CategoryInfo;

/// Neutral fallback shown for identifiers we cannot say anything about
const FALLBACK: (&str, &str, &str) = ("Other", "💳", "#9E9E9E");

/// Legacy numeric category keys from early installs, kept so old persisted
/// rows still render. "1".."8" in insertion order of the original picker.
const LEGACY_KEYS: &[(&str, &str, &str, &str)] = &[
    ("1", "Food", "🍔", "#FF7043"),
    ("2", "Transport", "🚕", "#42A5F5"),
    ("3", "Shopping", "🛍️", "#AB47BC"),
    ("4", "Entertainment", "🎬", "#EC407A"),
    ("5", "Bills", "🧾", "#FFA726"),
    ("6", "Health", "💊", "#66BB6A"),
    ("7", "Salary", "💰", "#26A69A"),
    ("8", "Other", "💳", "#9E9E9E"),
];

/// Known category identifiers, matched case-insensitively.
///
/// Evaluated in order; the order only matters for readability since the
/// identifiers are distinct.
const KNOWN: &[(&str, &str, &str, &str)] = &[
    ("food", "Food", "🍔", "#FF7043"),
    ("groceries", "Groceries", "🛒", "#8D6E63"),
    ("transport", "Transport", "🚕", "#42A5F5"),
    ("fuel", "Fuel", "⛽", "#78909C"),
    ("shopping", "Shopping", "🛍️", "#AB47BC"),
    ("entertainment", "Entertainment", "🎬", "#EC407A"),
    ("bills", "Bills", "🧾", "#FFA726"),
    ("rent", "Rent", "🏠", "#5C6BC0"),
    ("health", "Health", "💊", "#66BB6A"),
    ("education", "Education", "📚", "#29B6F6"),
    ("travel", "Travel", "✈️", "#26C6DA"),
    ("salary", "Salary", "💰", "#26A69A"),
    ("freelance", "Freelance", "💻", "#7E57C2"),
    ("bonus", "Bonus", "🎁", "#FFCA28"),
    ("investment", "Investment", "📈", "#9CCC65"),
    ("rental income", "Rental Income", "🏘️", "#5C6BC0"),
    ("refund", "Refund", "↩️", "#4DB6AC"),
    ("other income", "Other Income", "💵", "#81C784"),
    ("other", "Other", "💳", "#9E9E9E"),
];

/// Identifiers longer than this are treated as opaque persisted keys
/// (generated ids that leaked into the category field), never shown raw.
const OPAQUE_ID_LEN: usize = 20;

/// Keyword groups for grouping similar transactions. First group whose
/// keyword relates to the input (substring either way) wins.
const SIMILAR: &[(&str, &[&str])] = &[
    ("food", &["food", "lunch", "dinner", "breakfast", "snack", "restaurant", "coffee"]),
    ("transport", &["transport", "uber", "taxi", "bus", "metro", "fuel", "petrol"]),
    ("shopping", &["shopping", "clothes", "electronics", "amazon", "flipkart"]),
    ("entertainment", &["entertainment", "movie", "game", "music", "concert"]),
    ("bills", &["bills", "rent", "electricity", "water", "internet", "phone"]),
    ("health", &["health", "doctor", "medicine", "pharmacy", "hospital"]),
    ("salary", &["salary", "wage", "payroll", "income"]),
    ("investment", &["investment", "dividend", "interest", "stocks", "mutual fund"]),
];

/// Resolve a category identifier to display metadata. Total function.
pub fn category_info(id: &str) -> CategoryInfo {
    for (key, name, icon, color) in LEGACY_KEYS {
        if id == *key {
            return info(name, icon, color);
        }
    }

    let lower = id.trim().to_lowercase();
    for (key, name, icon, color) in KNOWN {
        if lower == *key {
            return info(name, icon, color);
        }
    }

    // Long unrecognized identifiers are opaque keys, not labels. Counted
    // in chars: a short non-ASCII label is not an opaque key.
    if id.chars().count() > OPAQUE_ID_LEN {
        let (name, icon, color) = FALLBACK;
        return info(name, icon, color);
    }

    // Short unrecognized identifiers are still human-meaningful; show them
    // title-cased with a neutral badge.
    let label = if lower.is_empty() {
        FALLBACK.0.to_string()
    } else {
        title_case(&lower)
    };
    CategoryInfo {
        name: label,
        icon: FALLBACK.1.to_string(),
        color: FALLBACK.2.to_string(),
    }
}

/// Related keywords for a category name, for grouping suggestions.
///
/// Matches bidirectionally: a table keyword containing the input or the
/// input containing a table keyword both count. Returns an empty slice when
/// nothing relates.
pub fn similar_categories(name: &str) -> &'static [&'static str] {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return &[];
    }

    for (_, keywords) in SIMILAR {
        for keyword in *keywords {
            if keyword.contains(&needle) || needle.contains(keyword) {
                return keywords;
            }
        }
    }

    &[]
}

fn info(name: &str, icon: &str, color: &str) -> CategoryInfo {
    CategoryInfo {
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
