use crate::enums::SortDirection;

// Strict comparisons in both directions: equal distances never signal a
// swap, whatever the direction.
pub fn should_swap(a: i32, b: i32, direction: SortDirection) -> bool {
    match direction {
        SortDirection::Ascending => a > b,
        SortDirection::Descending => a < b,
    }
}
