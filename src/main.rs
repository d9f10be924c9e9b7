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

//#![windows_subsystem = "windows"]

use crate::gui::RouteSorterGui;

#[path = "model/route.rs"]
mod route;

#[path = "sorting/enums.rs"]
mod enums;

#[path = "sorting/methods.rs"]
mod sorting_methods;

#[path = "sorting/sorter.rs"]
mod sorter;

#[path = "sorting/bubble_sort.rs"]
mod bubble_sort;

#[path = "sorting/quick_sort.rs"]
mod quick_sort;

#[path = "sorting/visualized.rs"]
mod visualized_sort;

#[path = "io/route_repository.rs"]
mod route_repository;

#[path = "io/file_utils.rs"]
mod file_utils;

#[path = "settings/settings.rs"]
mod settings;

#[path = "ui/gui.rs"]
mod gui;

#[path = "ui/edit_state.rs"]
mod edit_state;

#[path = "ui/route_field.rs"]
mod route_field;

#[path = "ui/route_row.rs"]
mod route_row;

#[cfg(test)]
#[path = "sorting/test_support.rs"]
mod test_support;

fn main() -> Result<(), iced::Error> {
    iced::application(RouteSorterGui::title, RouteSorterGui::update, RouteSorterGui::view)
        .subscription(RouteSorterGui::subscription)
        .theme(RouteSorterGui::theme)
        .run_with(RouteSorterGui::new)
}
