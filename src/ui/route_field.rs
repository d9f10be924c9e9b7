use iced::alignment::Vertical;
use iced::widget::{row, text, text_input};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub enum RouteEdit {
    Edited(String),
    Submitted,
}

pub trait TextField<T, E> {
    fn new(id: T, value: String, requested_width: Option<Length>) -> Self;
    fn text_input_id(id: T) -> text_input::Id;

    fn view(&self, id: T) -> Element<E>;
}

#[derive(Debug, Clone)]
pub struct DraftField {
    pub(crate) label: &'static str,
    pub(crate) value: String,
    pub(crate) requested_width: Option<Length>,
}

impl TextField<&'static str, RouteEdit> for DraftField {
    fn new(label: &'static str, value: String, requested_width: Option<Length>) -> Self {
        DraftField {
            label,
            value,
            requested_width,
        }
    }

    fn text_input_id(label: &'static str) -> text_input::Id {
        text_input::Id::new(label)
    }

    fn view(&self, label: &'static str) -> Element<RouteEdit> {
        let mut field = text_input(label, &self.value)
            .id(Self::text_input_id(label))
            .on_input(RouteEdit::Edited)
            .on_submit(RouteEdit::Submitted);

        field = match &self.requested_width {
            Some(width) => {
                field = field.width(*width);
                field
            }
            None => field,
        };

        row![
            text(self.label).width(120).align_y(Vertical::Center).height(30),
            field
        ]
        .into()
    }
}
