/// Helpers shared by sortable list tables
use contracts::shared::list_state::SortDirection;

/// Sort indicator for a header cell
pub fn get_sort_indicator(current_field: &str, field: &str, direction: SortDirection) -> &'static str {
    if current_field == field {
        if direction.is_ascending() { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS class of the sort indicator
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// CSS class of a body row; the recently viewed row is marked
pub fn row_class(highlighted: bool) -> &'static str {
    if highlighted {
        "table__row table__row--recent"
    } else {
        "table__row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_follows_active_column() {
        assert_eq!(get_sort_indicator("nombres", "nombres", SortDirection::Asc), " ▲");
        assert_eq!(get_sort_indicator("nombres", "nombres", SortDirection::Desc), " ▼");
        assert_eq!(get_sort_indicator("carne", "nombres", SortDirection::Asc), " ⇅");
    }

    #[test]
    fn classes() {
        assert!(get_sort_class("a", "a").ends_with("--active"));
        assert_eq!(get_sort_class("a", "b"), "table__sort-indicator");
        assert_eq!(row_class(true), "table__row table__row--recent");
    }
}
