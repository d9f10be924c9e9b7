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

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Instant;

use iced::alignment::Vertical;
use iced::keyboard::key::Named;
use iced::widget::scrollable;
use iced::widget::{
    column, container, horizontal_rule, horizontal_space, keyed_column, pick_list, row, text,
    text_input, vertical_space, Button, Text,
};
use iced::{keyboard, widget, window, Alignment, Element, Subscription, Task, Theme};
use native_dialog::{FileDialog, MessageDialog, MessageType};
use once_cell::sync::Lazy;

use crate::bubble_sort::BubbleSort;
use crate::edit_state::{EditState, RouteDraft};
use crate::enums::{SortDirection, SortType};
use crate::file_utils;
use crate::quick_sort::QuickSort;
use crate::route::Route;
use crate::route_field::{DraftField, RouteEdit, TextField};
use crate::route_repository::{RouteRepository, RouteStoreError};
use crate::route_row::{RouteRow, RouteRowMessage};
use crate::settings::Settings;
use crate::sorter::Sorter;
use crate::visualized_sort::{visualized_sort, SortUpdate};

static ROUTES_FILE_INPUT_ID: Lazy<text_input::Id> = Lazy::new(routes_file_input_id);
static SCROLLABLE_ID: Lazy<scrollable::Id> = Lazy::new(scrollable::Id::unique);

fn routes_file_input_id() -> text_input::Id {
    text_input::Id::new(String::from("routes_file_input"))
}

pub struct RouteSorterGui {
    routes: Vec<Route>,
    route_rows: Vec<RouteRow>,
    selected: Option<usize>,

    edit: EditState,
    start_field: DraftField,
    destination_field: DraftField,
    distance_field: DraftField,

    sort_type: SortType,
    sort_direction: SortDirection,
    is_sorting: bool,

    status: String,
    theme: Theme,
    fullscreen: bool,

    settings: Settings,
}

#[derive(Debug, Clone)]
pub enum RouteSorterMessage {
    RoutesFileInput(String),
    FindRoutesFile,
    FindRoutesFileReceived(Option<PathBuf>),
    Reload,
    Save,
    OpenRoutesFolder,

    SortTypeSelected(SortType),
    SortDirectionSelected(SortDirection),
    Sort,
    SortCompleted((Vec<Route>, String)),
    VisualizeSort,
    SortProgress(SortUpdate),
    VisualizeCompleted(Vec<Route>),

    RouteSelected(usize),
    AddRoute,
    EditRoute,
    DeleteRoute,
    StartEdited(RouteEdit),
    DestinationEdited(RouteEdit),
    DistanceEdited(RouteEdit),
    SaveEdit,
    CancelEdit,

    ErrorAcknowledged,
    TabPressed { shift: bool },
    F11Released,
}

impl RouteSorterGui {
    pub fn new() -> (Self, Task<RouteSorterMessage>) {
        let settings = Settings::read();

        let mut gui = RouteSorterGui {
            routes: vec![],
            route_rows: vec![],
            selected: None,
            edit: EditState::Viewing,
            start_field: DraftField::new("Start", String::new(), None),
            destination_field: DraftField::new("Destination", String::new(), None),
            distance_field: DraftField::new("Distance", String::new(), None),
            sort_type: settings.default_sort_type,
            sort_direction: settings.default_sort_direction,
            is_sorting: false,
            status: String::from("Ready to sort"),
            theme: Theme::Dark,
            fullscreen: false,
            settings,
        };

        let mut tasks = vec![];
        tasks.push(text_input::focus(ROUTES_FILE_INPUT_ID.clone()));

        match gui.repository().load() {
            Ok(routes) => {
                gui.routes = routes;
                gui.update_route_rows();
            }
            Err(err) => {
                tasks.push(gui.error_alert(err));
            }
        }

        (gui, Task::batch(tasks))
    }

    pub fn title(&self) -> String {
        String::from("Route Sorter")
    }

    fn repository(&self) -> RouteRepository {
        RouteRepository::new(self.settings.routes_file.clone())
    }

    fn update_route_rows(&mut self) {
        self.route_rows = self
            .routes
            .iter()
            .enumerate()
            .map(|(i, route)| RouteRow::new(i, route.clone(), self.selected == Some(i)))
            .collect();
    }

    fn update_edit_inputs(&mut self) {
        let draft = match self.edit.draft() {
            Some(draft) => draft.clone(),
            None => RouteDraft::default(),
        };

        self.start_field = DraftField::new("Start", draft.start, None);
        self.destination_field = DraftField::new("Destination", draft.destination, None);
        self.distance_field = DraftField::new("Distance", draft.distance, None);
    }

    fn error_alert(&mut self, error: RouteStoreError) -> Task<RouteSorterMessage> {
        let message = error.to_string();
        eprintln!("{}", message);
        self.status = message.clone();

        Task::perform(
            async move {
                match MessageDialog::new()
                    .set_type(MessageType::Error)
                    .set_title("Error")
                    .set_text(&message)
                    .show_alert()
                {
                    Ok(_) => {}
                    Err(_) => {}
                }
            },
            |_| RouteSorterMessage::ErrorAcknowledged,
        )
    }

    fn commit_edit(&mut self) -> Task<RouteSorterMessage> {
        match self.edit.commit(&mut self.routes) {
            Ok(index) => {
                self.selected = Some(index);
                self.edit = EditState::Viewing;
                self.status = String::from("Route saved");
                self.update_route_rows();
                self.update_edit_inputs();
            }
            Err(message) => {
                self.status = message;
            }
        }

        Task::none()
    }

    pub fn update(&mut self, message: RouteSorterMessage) -> Task<RouteSorterMessage> {
        let mut tasks = vec![];
        let mut settings_changed = false;

        let task = match message {
            RouteSorterMessage::RoutesFileInput(path) => {
                self.settings.routes_file = path;
                settings_changed = true;
                Task::none()
            }
            RouteSorterMessage::FindRoutesFile => {
                let current = self.settings.routes_file.clone();

                Task::perform(
                    async move {
                        let location = match Path::new(&current).parent() {
                            Some(parent) if !parent.as_os_str().is_empty() => {
                                parent.display().to_string()
                            }
                            _ => String::from("."),
                        };

                        match FileDialog::new()
                            .set_location(location.as_str())
                            .add_filter("JSON route list", &["json"])
                            .show_open_single_file()
                        {
                            Ok(value) => value,
                            Err(_) => None,
                        }
                    },
                    RouteSorterMessage::FindRoutesFileReceived,
                )
            }
            RouteSorterMessage::FindRoutesFileReceived(path) => {
                match path {
                    Some(path) => {
                        self.settings.routes_file =
                            path.to_str().unwrap_or("").to_string().replace("\\", "/");
                        settings_changed = true;
                    }
                    None => {}
                }

                Task::none()
            }
            RouteSorterMessage::Reload => {
                if self.is_sorting {
                    Task::none()
                } else {
                    match self.repository().load() {
                        Ok(routes) => {
                            self.routes = routes;
                            self.selected = None;
                            self.status = String::from("Routes reloaded");
                            self.update_route_rows();
                            Task::none()
                        }
                        Err(err) => self.error_alert(err),
                    }
                }
            }
            RouteSorterMessage::Save => {
                if self.is_sorting {
                    Task::none()
                } else {
                    match self.repository().save(&self.routes) {
                        Ok(_) => {
                            self.status = format!(
                                "Saved {} routes to \"{}\"",
                                self.routes.len(),
                                self.settings.routes_file
                            );
                            Task::none()
                        }
                        Err(err) => self.error_alert(err),
                    }
                }
            }
            RouteSorterMessage::OpenRoutesFolder => {
                let folder = match Path::new(&self.settings.routes_file).parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => {
                        parent.display().to_string()
                    }
                    _ => String::from("."),
                };
                file_utils::check_and_create_dir(Path::new(&folder));

                thread::spawn(move || match open::that(&folder) {
                    Ok(_) => {}
                    Err(_) => {}
                });

                Task::none()
            }
            RouteSorterMessage::SortTypeSelected(sort_type) => {
                self.sort_type = sort_type;
                self.settings.default_sort_type = sort_type;
                settings_changed = true;
                Task::none()
            }
            RouteSorterMessage::SortDirectionSelected(direction) => {
                self.sort_direction = direction;
                self.settings.default_sort_direction = direction;
                settings_changed = true;
                Task::none()
            }
            RouteSorterMessage::Sort => {
                if self.is_sorting {
                    Task::none()
                } else {
                    self.is_sorting = true;
                    self.status = format!("Sorting using {}...", self.sort_type);

                    let mut routes = self.routes.clone();
                    let sort_type = self.sort_type;
                    let direction = self.sort_direction;

                    Task::perform(
                        async move {
                            let started = Instant::now();
                            let sorter: Box<dyn Sorter> = match sort_type {
                                SortType::BubbleSort => Box::new(BubbleSort),
                                SortType::QuickSort => Box::new(QuickSort),
                            };
                            sorter.sort(&mut routes, direction);
                            let status = format!(
                                "Sorted using {} in {} ms",
                                sort_type,
                                started.elapsed().as_millis()
                            );
                            (routes, status)
                        },
                        RouteSorterMessage::SortCompleted,
                    )
                }
            }
            RouteSorterMessage::SortCompleted((routes, status)) => {
                self.routes = routes;
                self.status = status;
                self.is_sorting = false;
                self.selected = self.selected.filter(|i| *i < self.routes.len());
                self.update_route_rows();
                Task::none()
            }
            RouteSorterMessage::VisualizeSort => {
                if self.is_sorting {
                    Task::none()
                } else {
                    self.is_sorting = true;
                    self.status = format!("Visualizing {}...", self.sort_type);

                    let (sender, receiver) = async_channel::unbounded();
                    let worker = Task::perform(
                        visualized_sort(
                            self.sort_type,
                            self.routes.clone(),
                            self.sort_direction,
                            sender,
                        ),
                        RouteSorterMessage::VisualizeCompleted,
                    );
                    let updates = Task::run(receiver, RouteSorterMessage::SortProgress);

                    Task::batch(vec![worker, updates])
                }
            }
            RouteSorterMessage::SortProgress(update) => {
                match update {
                    SortUpdate::Snapshot(routes) => {
                        self.routes = routes;
                        self.update_route_rows();
                    }
                    SortUpdate::Status(status) => {
                        self.status = status;
                    }
                }

                Task::none()
            }
            RouteSorterMessage::VisualizeCompleted(routes) => {
                self.routes = routes;
                self.is_sorting = false;
                self.status = format!("Visualization of {} completed", self.sort_type);
                self.selected = self.selected.filter(|i| *i < self.routes.len());
                self.update_route_rows();
                Task::none()
            }
            RouteSorterMessage::RouteSelected(index) => {
                if !self.is_sorting {
                    self.selected = Some(index);
                    self.update_route_rows();
                }

                Task::none()
            }
            RouteSorterMessage::AddRoute => {
                if self.is_sorting {
                    Task::none()
                } else {
                    self.edit = EditState::begin_add();
                    self.update_edit_inputs();
                    text_input::focus(DraftField::text_input_id("Start"))
                }
            }
            RouteSorterMessage::EditRoute => {
                if self.is_sorting {
                    Task::none()
                } else {
                    match self.selected {
                        Some(index) if index < self.routes.len() => {
                            self.edit = EditState::begin_edit(index, &self.routes[index]);
                            self.update_edit_inputs();
                            text_input::focus(DraftField::text_input_id("Start"))
                        }
                        _ => Task::none(),
                    }
                }
            }
            RouteSorterMessage::DeleteRoute => {
                if !self.is_sorting {
                    match self.selected {
                        Some(index) if index < self.routes.len() => {
                            let removed = self.routes.remove(index);
                            self.selected = None;
                            self.status = format!(
                                "Deleted route from {} to {}",
                                removed.start, removed.destination
                            );
                            self.update_route_rows();
                        }
                        _ => {}
                    }
                }

                Task::none()
            }
            RouteSorterMessage::StartEdited(edit) => match edit {
                RouteEdit::Edited(value) => {
                    if let Some(draft) = self.edit.draft_mut() {
                        draft.start = value;
                        self.update_edit_inputs();
                    }
                    Task::none()
                }
                RouteEdit::Submitted => self.commit_edit(),
            },
            RouteSorterMessage::DestinationEdited(edit) => match edit {
                RouteEdit::Edited(value) => {
                    if let Some(draft) = self.edit.draft_mut() {
                        draft.destination = value;
                        self.update_edit_inputs();
                    }
                    Task::none()
                }
                RouteEdit::Submitted => self.commit_edit(),
            },
            RouteSorterMessage::DistanceEdited(edit) => match edit {
                RouteEdit::Edited(value) => {
                    if let Some(draft) = self.edit.draft_mut() {
                        draft.distance = value;
                        self.update_edit_inputs();
                    }
                    Task::none()
                }
                RouteEdit::Submitted => self.commit_edit(),
            },
            RouteSorterMessage::SaveEdit => self.commit_edit(),
            RouteSorterMessage::CancelEdit => {
                self.edit = EditState::Viewing;
                self.status = String::from("Edit cancelled");
                self.update_edit_inputs();
                Task::none()
            }
            RouteSorterMessage::ErrorAcknowledged => Task::none(),
            RouteSorterMessage::TabPressed { shift } => {
                if shift {
                    widget::focus_previous()
                } else {
                    widget::focus_next()
                }
            }
            RouteSorterMessage::F11Released => {
                let task = if self.fullscreen {
                    window::get_latest()
                        .and_then(move |window| window::change_mode(window, window::Mode::Windowed))
                } else {
                    window::get_latest().and_then(move |window| {
                        window::change_mode(window, window::Mode::Fullscreen)
                    })
                };

                self.fullscreen = !self.fullscreen;

                task
            }
        };

        if settings_changed {
            self.settings.write();
        }

        tasks.push(task);

        Task::batch(tasks)
    }

    fn main_menu(&self) -> Element<RouteSorterMessage> {
        let routes_file_input = text_input("Path to the routes file", &self.settings.routes_file)
            .on_input(RouteSorterMessage::RoutesFileInput)
            .id(ROUTES_FILE_INPUT_ID.clone());
        let find_button = Button::new(Text::new("...").align_x(Alignment::Center))
            .on_press(RouteSorterMessage::FindRoutesFile)
            .width(32);
        let file_row = row!(routes_file_input, find_button).width(iced::Length::Fill);

        let reload_button = if self.is_sorting {
            Button::new(Text::new("Reload").align_x(Alignment::Center)).width(140)
        } else {
            Button::new(Text::new("Reload").align_x(Alignment::Center))
                .on_press(RouteSorterMessage::Reload)
                .width(140)
        };
        let save_button = if self.is_sorting {
            Button::new(Text::new("Save").align_x(Alignment::Center)).width(140)
        } else {
            Button::new(Text::new("Save").align_x(Alignment::Center))
                .on_press(RouteSorterMessage::Save)
                .width(140)
        };
        let open_folder_button = Button::new(Text::new("Open Containing Folder").align_x(Alignment::Center))
            .on_press(RouteSorterMessage::OpenRoutesFolder)
            .width(220);
        let file_buttons_row = row![
            reload_button,
            horizontal_space().width(10),
            save_button,
            horizontal_space().width(10),
            open_folder_button
        ]
        .align_y(Alignment::Center);

        let sort_type_list = pick_list(
            &SortType::ALL[..],
            Some(self.sort_type),
            RouteSorterMessage::SortTypeSelected,
        )
        .width(140);
        let sort_direction_list = pick_list(
            &SortDirection::ALL[..],
            Some(self.sort_direction),
            RouteSorterMessage::SortDirectionSelected,
        )
        .width(140);
        let sort_button = if self.is_sorting {
            Button::new(Text::new("Sort").align_x(Alignment::Center)).width(140)
        } else {
            Button::new(Text::new("Sort").align_x(Alignment::Center))
                .on_press(RouteSorterMessage::Sort)
                .width(140)
        };
        let visualize_button = if self.is_sorting {
            Button::new(Text::new("Visualize Sort").align_x(Alignment::Center)).width(140)
        } else {
            Button::new(Text::new("Visualize Sort").align_x(Alignment::Center))
                .on_press(RouteSorterMessage::VisualizeSort)
                .width(140)
        };
        let sort_row = row![
            sort_type_list,
            horizontal_space().width(10),
            sort_direction_list,
            horizontal_space().width(10),
            sort_button,
            horizontal_space().width(10),
            visualize_button
        ]
        .align_y(Alignment::Center);

        let add_button = if self.is_sorting {
            Button::new(Text::new("Add").align_x(Alignment::Center)).width(140)
        } else {
            Button::new(Text::new("Add").align_x(Alignment::Center))
                .on_press(RouteSorterMessage::AddRoute)
                .width(140)
        };
        let can_edit_selection = !self.is_sorting && self.selected.is_some();
        let edit_button = if can_edit_selection {
            Button::new(Text::new("Edit").align_x(Alignment::Center))
                .on_press(RouteSorterMessage::EditRoute)
                .width(140)
        } else {
            Button::new(Text::new("Edit").align_x(Alignment::Center)).width(140)
        };
        let delete_button = if can_edit_selection {
            Button::new(Text::new("Delete").align_x(Alignment::Center))
                .on_press(RouteSorterMessage::DeleteRoute)
                .width(140)
        } else {
            Button::new(Text::new("Delete").align_x(Alignment::Center)).width(140)
        };
        let edit_row = row![
            add_button,
            horizontal_space().width(10),
            edit_button,
            horizontal_space().width(10),
            delete_button
        ]
        .align_y(Alignment::Center);

        let header = row![
            text("").width(20),
            text("Start").width(iced::Length::FillPortion(2)),
            text("Destination").width(iced::Length::FillPortion(2)),
            text("Distance").width(iced::Length::Fill)
        ];

        let route_list: Element<_> = keyed_column(self.route_rows.iter().map(|route_row| {
            let index = route_row.index;
            (
                route_row.index,
                route_row.view().map(move |message| match message {
                    RouteRowMessage::Selected => RouteSorterMessage::RouteSelected(index),
                }),
            )
        }))
        .spacing(2)
        .into();
        let routes_scrollable = scrollable(route_list)
            .width(iced::Length::Fill)
            .id(SCROLLABLE_ID.clone());

        let column = column![
            file_row,
            vertical_space().height(10),
            file_buttons_row,
            vertical_space().height(10),
            sort_row,
            vertical_space().height(10),
            edit_row,
            vertical_space().height(10),
            text(&self.status),
            vertical_space().height(10),
            horizontal_rule(1),
            vertical_space().height(10),
            header,
            routes_scrollable
        ]
        .padding(10)
        .width(iced::Length::Fill);

        container(column)
            .center_x(iced::Length::Fill)
            .align_y(Vertical::Top)
            .height(iced::Length::Fill)
            .into()
    }

    fn edit_menu(&self) -> Element<RouteSorterMessage> {
        let title = text(match &self.edit {
            EditState::AddingNew { .. } => "New route",
            EditState::EditingExisting { .. } => "Edit route",
            EditState::Viewing => "",
        });

        let start_row = self
            .start_field
            .view("Start")
            .map(RouteSorterMessage::StartEdited);
        let destination_row = self
            .destination_field
            .view("Destination")
            .map(RouteSorterMessage::DestinationEdited);
        let distance_row = self
            .distance_field
            .view("Distance")
            .map(RouteSorterMessage::DistanceEdited);

        let save_button = Button::new(Text::new("Save").align_x(Alignment::Center))
            .on_press(RouteSorterMessage::SaveEdit)
            .width(140);
        let cancel_button = Button::new(Text::new("Cancel").align_x(Alignment::Center))
            .on_press(RouteSorterMessage::CancelEdit)
            .width(140);
        let buttons_row = row![save_button, horizontal_space().width(10), cancel_button];

        let column = column![
            title,
            vertical_space().height(10),
            start_row,
            vertical_space().height(5),
            destination_row,
            vertical_space().height(5),
            distance_row,
            vertical_space().height(10),
            buttons_row,
            vertical_space().height(10),
            text(&self.status)
        ]
        .padding(10)
        .max_width(600);

        container(column)
            .center_x(iced::Length::Fill)
            .align_y(Vertical::Top)
            .height(iced::Length::Fill)
            .into()
    }

    pub fn view(&self) -> Element<RouteSorterMessage> {
        if self.edit.is_viewing() {
            self.main_menu()
        } else {
            self.edit_menu()
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn subscription(&self) -> Subscription<RouteSorterMessage> {
        let mut subscriptions = vec![];

        let tab = keyboard::on_key_press(|key_code, modifiers| match (key_code, modifiers) {
            (keyboard::Key::Named(Named::Tab), _) => Some(RouteSorterMessage::TabPressed {
                shift: modifiers.shift(),
            }),
            _ => None,
        });
        subscriptions.push(tab);

        let f11_up = keyboard::on_key_release(|key_code, _modifiers| match key_code {
            keyboard::Key::Named(Named::F11) => Some(RouteSorterMessage::F11Released),
            _ => None,
        });
        subscriptions.push(f11_up);

        Subscription::batch(subscriptions)
    }
}
