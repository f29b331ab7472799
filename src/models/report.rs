use indexmap::IndexMap;

/// Everything derived from one [`EstimatorConfig`](crate::models::EstimatorConfig).
///
/// Counts are per hour. Money is in yen per hour. Nothing is rounded; rounding
/// only happens when the report is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncomeReport {
    // Treasure and books
    pub treasures_per_hour: f64,
    pub books_per_hour: f64,
    pub mending_books_per_hour: f64,
    pub mending_single_books: f64,
    pub mending_multi_books: f64,
    pub sellable_non_mending_books: f64,
    /// Books nobody buys, run through the grindstone for XP. Negative when the
    /// mending and sellable rates add up to more than 1.
    pub grind_books: f64,
    pub tools_per_hour: f64,

    // Fish
    pub fish_per_hour: f64,
    pub cod: f64,
    pub salmon: f64,
    pub puffer: f64,
    pub tropical: f64,

    // Revenue streams
    pub revenue_fish: f64,
    pub yen_from_fishing: f64,
    pub revenue_mending: f64,
    pub revenue_non_mending: f64,
    pub yen_from_books: f64,
    pub yen_from_tools: f64,
    pub total_yen_per_hour: f64,

    // XP
    pub yen_per_xp: f64,
    pub xp_from_fishing: f64,
    pub xp_from_books: f64,
    pub xp_from_tools: f64,
}

impl IncomeReport {
    /// Number of fields listed by [`entries`](Self::entries).
    pub const FIELD_COUNT: usize = 24;

    /// All fields keyed by name, in display order.
    pub fn entries(&self) -> IndexMap<&'static str, f64> {
        let mut entries = IndexMap::with_capacity(Self::FIELD_COUNT);
        entries.insert("treasures_per_hour", self.treasures_per_hour);
        entries.insert("books_per_hour", self.books_per_hour);
        entries.insert("mending_books_per_hour", self.mending_books_per_hour);
        entries.insert("mending_single_books", self.mending_single_books);
        entries.insert("mending_multi_books", self.mending_multi_books);
        entries.insert("sellable_non_mending_books", self.sellable_non_mending_books);
        entries.insert("grind_books", self.grind_books);
        entries.insert("tools_per_hour", self.tools_per_hour);
        entries.insert("fish_per_hour", self.fish_per_hour);
        entries.insert("cod", self.cod);
        entries.insert("salmon", self.salmon);
        entries.insert("puffer", self.puffer);
        entries.insert("tropical", self.tropical);
        entries.insert("revenue_fish", self.revenue_fish);
        entries.insert("yen_from_fishing", self.yen_from_fishing);
        entries.insert("revenue_mending", self.revenue_mending);
        entries.insert("revenue_non_mending", self.revenue_non_mending);
        entries.insert("yen_from_books", self.yen_from_books);
        entries.insert("yen_from_tools", self.yen_from_tools);
        entries.insert("total_yen_per_hour", self.total_yen_per_hour);
        entries.insert("yen_per_xp", self.yen_per_xp);
        entries.insert("xp_from_fishing", self.xp_from_fishing);
        entries.insert("xp_from_books", self.xp_from_books);
        entries.insert("xp_from_tools", self.xp_from_tools);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> IncomeReport {
        IncomeReport {
            treasures_per_hour: 1.0,
            books_per_hour: 2.0,
            mending_books_per_hour: 3.0,
            mending_single_books: 4.0,
            mending_multi_books: 5.0,
            sellable_non_mending_books: 6.0,
            grind_books: 7.0,
            tools_per_hour: 8.0,
            fish_per_hour: 9.0,
            cod: 10.0,
            salmon: 11.0,
            puffer: 12.0,
            tropical: 13.0,
            revenue_fish: 14.0,
            yen_from_fishing: 15.0,
            revenue_mending: 16.0,
            revenue_non_mending: 17.0,
            yen_from_books: 18.0,
            yen_from_tools: 19.0,
            total_yen_per_hour: 20.0,
            yen_per_xp: 21.0,
            xp_from_fishing: 22.0,
            xp_from_books: 23.0,
            xp_from_tools: 24.0,
        }
    }

    #[test]
    fn test_entries_cover_every_field_in_order() {
        let entries = sample_report().entries();
        assert_eq!(entries.len(), IncomeReport::FIELD_COUNT);

        // Values were assigned 1..=24 in declaration order
        for (index, value) in entries.values().enumerate() {
            assert_eq!(*value, (index + 1) as f64);
        }
    }

    #[test]
    fn test_entries_lookup_by_name() {
        let entries = sample_report().entries();
        assert_eq!(entries["total_yen_per_hour"], 20.0);
        assert_eq!(entries.get_index(0), Some((&"treasures_per_hour", &1.0)));
        assert_eq!(entries.get_index(23), Some((&"xp_from_tools", &24.0)));
    }
}
