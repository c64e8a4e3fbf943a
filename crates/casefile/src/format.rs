//! Text formatting shared by the renderers

use crate::entity::Family;
use chrono::NaiveDate;

/// `05-Mar-2024`
pub fn format_date_dmy(date: NaiveDate) -> String {
    date.format("%d-%b-%Y").to_string()
}

/// `2024-03-05`
pub fn format_date_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format integer with comma thousand separators
pub fn format_with_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut result = String::new();

    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }

    if n < 0 {
        result.insert(0, '-');
    }
    result
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 21st
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Primary's name, then " and " and the dependents joined by ", "
pub fn tenant_names(family: &Family) -> String {
    let dependents: Vec<&str> = family.dependents().iter().map(|d| d.display_name()).collect();
    join_tenants(family.primary().display_name(), &dependents)
}

fn join_tenants(primary: &str, dependents: &[&str]) -> String {
    if dependents.is_empty() {
        primary.to_string()
    } else {
        format!("{primary} and {}", dependents.join(", "))
    }
}

/// Split after `at` characters; the tail is empty for short text
pub fn split_at_char(text: &str, at: usize) -> (&str, &str) {
    match text.char_indices().nth(at) {
        Some((index, _)) => text.split_at(index),
        None => (text, ""),
    }
}
