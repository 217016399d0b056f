//! Splitting of catalogue lines.
//!
//! A line is a list of fields separated by `‣`. The trailing list fields hold
//! items separated by `‖`, and each item holds values separated by `․`.

/// Separates the fields of a line.
pub const FIELD_SEPARATOR: char = '\u{2023}';
/// Separates the items of a list field.
pub const ITEM_SEPARATOR: char = '\u{2016}';
/// Separates the values of a list item.
pub const VALUE_SEPARATOR: char = '\u{2024}';

/// One entry of a list field, e.g. a single actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<'a> {
    pub raw: &'a str,
    pub values: Vec<&'a str>,
}

impl<'a> Item<'a> {
    fn parse(raw: &'a str) -> Self {
        Item {
            raw,
            values: raw.split(VALUE_SEPARATOR).collect(),
        }
    }
}

/// Split a line into its fields. The number of fields is not checked.
pub fn parse_line(line: &str) -> Vec<&str> {
    line.split(FIELD_SEPARATOR).collect()
}

/// Split a list field into its items. An empty field has no items.
pub fn split_list(text: &str) -> impl Iterator<Item = Item<'_>> {
    let items = if text.is_empty() {
        None
    } else {
        Some(text.split(ITEM_SEPARATOR))
    };
    items.into_iter().flatten().map(Item::parse)
}
