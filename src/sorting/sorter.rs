use crate::enums::SortDirection;
use crate::route::Route;

pub trait Sorter {
    fn sort(&self, routes: &mut [Route], direction: SortDirection);
}
