/*
Copyright (c) 2023 Collin Ogren

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use crate::enums::SortDirection;
use crate::route::Route;
use crate::sorter::Sorter;
use crate::sorting_methods::should_swap;

pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn sort(&self, routes: &mut [Route], direction: SortDirection) {
        bubble_sort(routes, direction);
    }
}

// Classic double loop. Every pass runs in full, even when a pass performs
// no swaps; the visualized variant shares the same pass structure.
pub fn bubble_sort(routes: &mut [Route], direction: SortDirection) {
    let n = routes.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            if should_swap(routes[j].distance, routes[j + 1].distance, direction) {
                routes.swap(j, j + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{distances, is_sorted, routes_with_distances, same_multiset};

    #[test]
    fn sorts_ascending() {
        let mut routes = routes_with_distances(&[50, 10, 40, 10, -3]);
        bubble_sort(&mut routes, SortDirection::Ascending);
        assert_eq!(distances(&routes), vec![-3, 10, 10, 40, 50]);
    }

    #[test]
    fn sorts_descending() {
        let mut routes = routes_with_distances(&[50, 10, 40, 10, -3]);
        bubble_sort(&mut routes, SortDirection::Descending);
        assert_eq!(distances(&routes), vec![50, 40, 10, 10, -3]);
    }

    #[test]
    fn equal_keys_descending_stay_put() {
        let mut routes = routes_with_distances(&[5, 5, 1]);
        bubble_sort(&mut routes, SortDirection::Descending);
        assert_eq!(distances(&routes), vec![5, 5, 1]);
        // Strict comparator: the two 5s were never exchanged.
        assert_eq!(routes[0].start, "start0");
        assert_eq!(routes[1].start, "start1");
    }

    #[test]
    fn empty_and_single_are_no_ops() {
        let mut routes = routes_with_distances(&[]);
        bubble_sort(&mut routes, SortDirection::Ascending);
        assert!(routes.is_empty());

        let mut routes = routes_with_distances(&[7]);
        bubble_sort(&mut routes, SortDirection::Descending);
        assert_eq!(distances(&routes), vec![7]);
    }

    #[test]
    fn sorting_twice_changes_nothing() {
        let mut routes = routes_with_distances(&[9, 1, 8, 2, 7, 3]);
        bubble_sort(&mut routes, SortDirection::Ascending);
        let once = routes.clone();
        bubble_sort(&mut routes, SortDirection::Ascending);
        assert_eq!(routes, once);
    }

    #[test]
    fn output_is_a_permutation_of_the_input() {
        let original = routes_with_distances(&[4, -1, 4, 0, 12, -1, 4]);
        let mut routes = original.clone();
        bubble_sort(&mut routes, SortDirection::Ascending);
        assert!(same_multiset(&original, &routes));
        assert!(is_sorted(&routes, SortDirection::Ascending));
    }
}
