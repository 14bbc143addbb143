// src/order.rs
use crate::card::CardRecord;

/// Canonical catalog order: `full_type`, then `name`, both ascending.
///
/// Two stable passes (name, then full_type) rather than one compound key, so
/// records that tie on both keep their incoming order.
pub fn sort_catalog(records: &mut [CardRecord]) {
    records.sort_by(|a, b| a.name.cmp(&b.name));
    records.sort_by(|a, b| a.full_type.cmp(&b.full_type));
}

pub fn is_sorted(records: &[CardRecord]) -> bool {
    records.windows(2).all(|w| {
        (w[0].full_type.as_str(), w[0].name.as_str()) <= (w[1].full_type.as_str(), w[1].name.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, full_type: &str) -> CardRecord {
        CardRecord::new(name, full_type, "u")
    }

    fn names(records: &[CardRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn full_type_then_name() {
        let mut records = vec![
            card("Raigeki", "Spell Card"),
            card("Kuriboh", "Effect Monster"),
            card("Dark Magician", "Normal Monster"),
            card("Ash Blossom", "Effect Monster"),
            card("Mirror Force", "Trap Card"),
            card("Pot of Greed", "Spell Card"),
        ];
        sort_catalog(&mut records);
        assert_eq!(
            names(&records),
            vec!["Ash Blossom", "Kuriboh", "Dark Magician", "Pot of Greed", "Raigeki", "Mirror Force"]
        );
        assert!(is_sorted(&records));
    }

    #[test]
    fn sorting_sorted_input_changes_nothing() {
        let mut records = vec![card("B", "Trap Card"), card("A", "Spell Card"), card("C", "Spell Card")];
        sort_catalog(&mut records);
        let once = records.clone();
        sort_catalog(&mut records);
        assert_eq!(records, once);
    }

    #[test]
    fn full_ties_keep_input_order() {
        let mut first = card("Twin", "Spell Card");
        first.desc = s!("first");
        let mut second = card("Twin", "Spell Card");
        second.desc = s!("second");
        let mut records = vec![card("Zed", "Spell Card"), first, second];
        sort_catalog(&mut records);
        assert_eq!(records[0].desc, "first");
        assert_eq!(records[1].desc, "second");
    }

    #[test]
    fn byte_order_puts_uppercase_first() {
        let mut records = vec![card("apple", "Spell Card"), card("Zebra", "Spell Card")];
        sort_catalog(&mut records);
        assert_eq!(names(&records), vec!["Zebra", "apple"]);
    }
}
