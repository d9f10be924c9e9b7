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

pub struct QuickSort;

impl Sorter for QuickSort {
    fn sort(&self, routes: &mut [Route], direction: SortDirection) {
        quick_sort(routes, 0, routes.len() as isize - 1, direction);
    }
}

// Sorts the inclusive range [low, high]. The pivot is always the last
// element of the range, so already-sorted input degrades to O(n^2).
// Recursion depth is O(n) worst case; the right side is handled by the
// outer loop instead of a second recursive call.
pub fn quick_sort(routes: &mut [Route], low: isize, high: isize, direction: SortDirection) {
    let mut low = low;
    loop {
        if low >= high {
            return;
        }

        assert!(
            low >= 0 && (high as usize) < routes.len(),
            "sort range [{}, {}] is out of bounds for {} routes",
            low,
            high,
            routes.len()
        );

        let pivot_index = partition(routes, low, high, direction);
        quick_sort(routes, low, pivot_index - 1, direction);
        low = pivot_index + 1;
    }
}

// Ascending keeps distances <= pivot on the left, descending keeps
// distances >= pivot on the left. Returns the pivot's resting index.
fn partition(routes: &mut [Route], low: isize, high: isize, direction: SortDirection) -> isize {
    let pivot = routes[high as usize].distance;
    let mut i = low - 1;

    for j in low..high {
        if should_swap(routes[j as usize].distance, pivot, direction) {
            continue;
        }
        i += 1;
        routes.swap(i as usize, j as usize);
    }

    routes.swap((i + 1) as usize, high as usize);
    i + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{distances, is_sorted, routes_with_distances, same_multiset};

    #[test]
    fn sorts_ascending_around_last_element_pivot() {
        let mut routes = routes_with_distances(&[50, 10, 40]);
        // First pivot is 40, the last element of the full range.
        let pivot_index = partition(&mut routes, 0, 2, SortDirection::Ascending);
        assert_eq!(pivot_index, 1);
        assert_eq!(routes[1].distance, 40);

        let mut routes = routes_with_distances(&[50, 10, 40]);
        quick_sort(&mut routes, 0, 2, SortDirection::Ascending);
        assert_eq!(distances(&routes), vec![10, 40, 50]);
    }

    #[test]
    fn sorts_descending() {
        let mut routes = routes_with_distances(&[3, -8, 22, 0, 22, 5]);
        let high = routes.len() as isize - 1;
        quick_sort(&mut routes, 0, high, SortDirection::Descending);
        assert_eq!(distances(&routes), vec![22, 22, 5, 3, 0, -8]);
    }

    #[test]
    fn partition_splits_around_the_pivot() {
        let mut routes = routes_with_distances(&[9, 1, 7, 3, 5]);
        let p = partition(&mut routes, 0, 4, SortDirection::Ascending);
        let pivot = routes[p as usize].distance;
        assert_eq!(pivot, 5);
        for j in 0..p {
            assert!(routes[j as usize].distance <= pivot);
        }
        for j in p + 1..routes.len() as isize {
            assert!(routes[j as usize].distance > pivot);
        }
    }

    #[test]
    fn partition_splits_around_the_pivot_descending() {
        let mut routes = routes_with_distances(&[2, 8, 4, 6, 5]);
        let p = partition(&mut routes, 0, 4, SortDirection::Descending);
        let pivot = routes[p as usize].distance;
        assert_eq!(pivot, 5);
        for j in 0..p {
            assert!(routes[j as usize].distance >= pivot);
        }
        for j in p + 1..routes.len() as isize {
            assert!(routes[j as usize].distance < pivot);
        }
    }

    #[test]
    fn empty_and_single_ranges_are_no_ops() {
        let mut routes = routes_with_distances(&[]);
        quick_sort(&mut routes, 0, -1, SortDirection::Ascending);
        assert!(routes.is_empty());

        let mut routes = routes_with_distances(&[4]);
        quick_sort(&mut routes, 0, 0, SortDirection::Ascending);
        assert_eq!(distances(&routes), vec![4]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_range_indices_panic() {
        let mut routes = routes_with_distances(&[1, 2, 3]);
        quick_sort(&mut routes, 0, 7, SortDirection::Ascending);
    }

    #[test]
    fn already_sorted_input_is_unchanged() {
        let mut routes = routes_with_distances(&[1, 2, 3, 4, 5]);
        let high = routes.len() as isize - 1;
        quick_sort(&mut routes, 0, high, SortDirection::Ascending);
        assert_eq!(distances(&routes), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn output_is_a_permutation_of_the_input() {
        let original = routes_with_distances(&[4, -1, 4, 0, 12, -1, 4]);
        let mut routes = original.clone();
        let high = routes.len() as isize - 1;
        quick_sort(&mut routes, 0, high, SortDirection::Ascending);
        assert!(same_multiset(&original, &routes));
        assert!(is_sorted(&routes, SortDirection::Ascending));
    }

    #[test]
    fn agrees_with_bubble_sort_on_random_input() {
        use rand::prelude::*;

        let mut rng = StdRng::seed_from_u64(0x5eed);
        for len in [0usize, 1, 2, 3, 17, 64] {
            let input: Vec<i32> = (0..len).map(|_| rng.gen_range(-100..100)).collect();
            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                let mut quick = routes_with_distances(&input);
                let mut bubble = quick.clone();
                quick_sort(&mut quick, 0, len as isize - 1, direction);
                crate::bubble_sort::bubble_sort(&mut bubble, direction);
                assert_eq!(distances(&quick), distances(&bubble));
                assert!(is_sorted(&quick, direction));
            }
        }
    }
}
