use crate::enums::SortDirection;
use crate::route::Route;

pub fn routes_with_distances(values: &[i32]) -> Vec<Route> {
    values
        .iter()
        .enumerate()
        .map(|(i, distance)| Route::new(format!("start{}", i), format!("dest{}", i), *distance))
        .collect()
}

pub fn distances(routes: &[Route]) -> Vec<i32> {
    routes.iter().map(|route| route.distance).collect()
}

pub fn is_sorted(routes: &[Route], direction: SortDirection) -> bool {
    routes.windows(2).all(|pair| match direction {
        SortDirection::Ascending => pair[0].distance <= pair[1].distance,
        SortDirection::Descending => pair[0].distance >= pair[1].distance,
    })
}

pub fn same_multiset(a: &[Route], b: &[Route]) -> bool {
    let key = |route: &Route| (route.start.clone(), route.destination.clone(), route.distance);

    let mut a: Vec<_> = a.iter().map(key).collect();
    let mut b: Vec<_> = b.iter().map(key).collect();
    a.sort();
    b.sort();

    a == b
}
