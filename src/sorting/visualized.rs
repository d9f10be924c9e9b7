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

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use async_channel::Sender;

use crate::enums::{SortDirection, SortType};
use crate::route::Route;
use crate::sorting_methods::should_swap;

pub const SWAP_DELAY: Duration = Duration::from_millis(100);

// Fire-and-forget updates for an observer. Snapshots carry the full list
// state after a swap; statuses are human-readable progress lines.
#[derive(Debug, Clone)]
pub enum SortUpdate {
    Snapshot(Vec<Route>),
    Status(String),
}

pub async fn visualized_sort(
    sort_type: SortType,
    mut routes: Vec<Route>,
    direction: SortDirection,
    updates: Sender<SortUpdate>,
) -> Vec<Route> {
    match sort_type {
        SortType::BubbleSort => {
            bubble_sort_visualized(&mut routes, direction, &updates).await;
        }
        SortType::QuickSort => {
            let total = routes.len();
            let high = routes.len() as isize - 1;
            quick_sort_visualized(&mut routes, 0, high, total, direction, &updates).await;
        }
    }

    routes
}

async fn bubble_sort_visualized(
    routes: &mut Vec<Route>,
    direction: SortDirection,
    updates: &Sender<SortUpdate>,
) {
    let n = routes.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            if should_swap(routes[j].distance, routes[j + 1].distance, direction) {
                routes.swap(j, j + 1);
                publish_snapshot(routes, updates).await;
            }
        }
        publish_status(
            format!("Bubble sort: {}% complete", (i + 1) * 100 / (n - 1)),
            updates,
        )
        .await;
    }
}

// Recursive async, so the future is boxed by hand.
fn quick_sort_visualized<'a>(
    routes: &'a mut Vec<Route>,
    low: isize,
    high: isize,
    total: usize,
    direction: SortDirection,
    updates: &'a Sender<SortUpdate>,
) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
    Box::pin(async move {
        if low >= high {
            return;
        }

        let pivot_index = partition_visualized(routes, low, high, direction, updates).await;

        // Progress estimate is partition-local (elements in this partition
        // over total elements), so it is not monotonic across partitions.
        let in_partition = (high - low + 1) as usize;
        publish_status(
            format!("Quick sort: {}% complete", in_partition * 100 / total),
            updates,
        )
        .await;

        quick_sort_visualized(routes, low, pivot_index - 1, total, direction, updates).await;
        quick_sort_visualized(routes, pivot_index + 1, high, total, direction, updates).await;
    })
}

// Same element placement as quick_sort::partition; publishes after every
// swap, the pivot placement included.
async fn partition_visualized(
    routes: &mut Vec<Route>,
    low: isize,
    high: isize,
    direction: SortDirection,
    updates: &Sender<SortUpdate>,
) -> isize {
    let pivot = routes[high as usize].distance;
    let mut i = low;

    for j in low..high {
        if should_swap(routes[j as usize].distance, pivot, direction) {
            continue;
        }
        routes.swap(i as usize, j as usize);
        publish_snapshot(routes, updates).await;
        i += 1;
    }

    routes.swap(i as usize, high as usize);
    publish_snapshot(routes, updates).await;

    i
}

async fn publish_snapshot(routes: &[Route], updates: &Sender<SortUpdate>) {
    let _ = updates.send(SortUpdate::Snapshot(routes.to_vec())).await;
    async_std::task::sleep(SWAP_DELAY).await;
}

async fn publish_status(status: String, updates: &Sender<SortUpdate>) {
    let _ = updates.send(SortUpdate::Status(status)).await;
}
