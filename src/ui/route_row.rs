use iced::widget::{row, text, Button};
use iced::{Alignment, Element};

use crate::route::Route;

#[derive(Debug, Clone)]
pub enum RouteRowMessage {
    Selected,
}

#[derive(Debug, Clone)]
pub struct RouteRow {
    pub(crate) index: usize,
    pub(crate) route: Route,
    pub(crate) selected: bool,
}

impl RouteRow {
    pub fn new(index: usize, route: Route, selected: bool) -> Self {
        RouteRow {
            index,
            route,
            selected,
        }
    }

    pub fn view(&self) -> Element<RouteRowMessage> {
        let marker = text(if self.selected { ">" } else { "" }).width(20);

        let content = row![
            marker,
            text(&self.route.start).width(iced::Length::FillPortion(2)),
            text(&self.route.destination).width(iced::Length::FillPortion(2)),
            text(format!("{}", self.route.distance)).width(iced::Length::Fill),
        ]
        .align_y(Alignment::Center);

        Button::new(content)
            .on_press(RouteRowMessage::Selected)
            .width(iced::Length::Fill)
            .into()
    }
}
