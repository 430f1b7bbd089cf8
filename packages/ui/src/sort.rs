//! Client-side sort state and ordering for the items table.
//!
//! All sorting happens in the browser. The server hands rows back in
//! whatever order the database produced them, so the table view owns the
//! ordering end to end.

use std::cmp::Ordering;

use api::Item;

/// The column the table is sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Description,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column plus direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    /// The table starts out sorted by id, ascending.
    fn default() -> Self {
        Self {
            field: SortField::Id,
            direction: SortDirection::Ascending,
        }
    }
}

impl SortState {
    /// The next state after a click on a column header: the same column
    /// flips direction, a different column becomes active, ascending.
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Ascending,
            }
        }
    }

    /// Arrow suffix for a column header, with its leading space.
    /// Empty for inactive columns.
    pub fn indicator(self, field: SortField) -> &'static str {
        if self.field != field {
            return "";
        }
        match self.direction {
            SortDirection::Ascending => " ↑",
            SortDirection::Descending => " ↓",
        }
    }
}

/// Sort items in place. Ids compare numerically; text columns compare
/// case-insensitively.
pub fn sort_items(items: &mut [Item], state: SortState) {
    items.sort_by(|a, b| {
        let ordering = match state.field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => compare_text(&a.name, &b.name),
            SortField::Description => compare_text(&a.description, &b.description),
        };
        match state.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str, description: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    fn ids(items: &[Item]) -> Vec<i64> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn default_sort_is_id_ascending() {
        let state = SortState::default();
        assert_eq!(state.field, SortField::Id);
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn clicking_the_active_column_flips_direction() {
        let state = SortState::default().toggle(SortField::Id);
        assert_eq!(state.field, SortField::Id);
        assert_eq!(state.direction, SortDirection::Descending);

        let state = state.toggle(SortField::Id);
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn clicking_another_column_switches_to_it_ascending() {
        let state = SortState::default().toggle(SortField::Id);
        assert_eq!(state.direction, SortDirection::Descending);

        let state = state.toggle(SortField::Name);
        assert_eq!(state.field, SortField::Name);
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn descending_id_sort_reverses_the_ascending_order() {
        let mut ascending = vec![item(3, "c", ""), item(1, "a", ""), item(2, "b", "")];
        let mut descending = ascending.clone();

        sort_items(
            &mut ascending,
            SortState {
                field: SortField::Id,
                direction: SortDirection::Ascending,
            },
        );
        sort_items(
            &mut descending,
            SortState {
                field: SortField::Id,
                direction: SortDirection::Descending,
            },
        );

        assert_eq!(ids(&ascending), vec![1, 2, 3]);
        let reversed: Vec<i64> = ids(&descending).into_iter().rev().collect();
        assert_eq!(ids(&ascending), reversed);
    }

    #[test]
    fn text_sort_ignores_case() {
        let mut items = vec![item(1, "Banana", ""), item(2, "apple", "")];

        sort_items(
            &mut items,
            SortState {
                field: SortField::Name,
                direction: SortDirection::Ascending,
            },
        );

        assert_eq!(ids(&items), vec![2, 1]);
    }

    #[test]
    fn description_sort_uses_the_description_column() {
        let mut items = vec![
            item(1, "a", "zebra"),
            item(2, "b", "Aardvark"),
            item(3, "c", "mongoose"),
        ];

        sort_items(
            &mut items,
            SortState {
                field: SortField::Description,
                direction: SortDirection::Ascending,
            },
        );

        assert_eq!(ids(&items), vec![2, 3, 1]);
    }

    #[test]
    fn indicator_marks_only_the_active_column() {
        let state = SortState::default();
        assert_eq!(state.indicator(SortField::Id), " ↑");
        assert_eq!(state.indicator(SortField::Name), "");

        let state = state.toggle(SortField::Id);
        assert_eq!(state.indicator(SortField::Id), " ↓");
    }
}
