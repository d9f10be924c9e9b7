use crate::route::Route;

// String-typed working copy of a route while it is being edited. Nothing
// in the route list changes until the draft is committed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteDraft {
    pub start: String,
    pub destination: String,
    pub distance: String,
}

impl RouteDraft {
    pub fn from_route(route: &Route) -> Self {
        Self {
            start: route.start.clone(),
            destination: route.destination.clone(),
            distance: route.distance.to_string(),
        }
    }

    pub fn parse(&self) -> Result<Route, String> {
        let distance = match self.distance.trim().parse::<i32>() {
            Ok(value) => value,
            Err(_) => return Err(String::from("Distance must be a whole number")),
        };

        Ok(Route::new(
            self.start.trim().to_string(),
            self.destination.trim().to_string(),
            distance,
        ))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum EditState {
    Viewing,
    AddingNew { draft: RouteDraft },
    EditingExisting { index: usize, draft: RouteDraft },
}

impl EditState {
    pub fn begin_add() -> Self {
        EditState::AddingNew {
            draft: RouteDraft::default(),
        }
    }

    pub fn begin_edit(index: usize, route: &Route) -> Self {
        EditState::EditingExisting {
            index,
            draft: RouteDraft::from_route(route),
        }
    }

    pub fn is_viewing(&self) -> bool {
        matches!(self, EditState::Viewing)
    }

    pub fn draft(&self) -> Option<&RouteDraft> {
        match self {
            EditState::Viewing => None,
            EditState::AddingNew { draft } => Some(draft),
            EditState::EditingExisting { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut RouteDraft> {
        match self {
            EditState::Viewing => None,
            EditState::AddingNew { draft } => Some(draft),
            EditState::EditingExisting { draft, .. } => Some(draft),
        }
    }

    // Commits the working copy into the list. The list stays untouched
    // whenever this returns Err; cancelling is simply dropping the state.
    pub fn commit(&self, routes: &mut Vec<Route>) -> Result<usize, String> {
        match self {
            EditState::Viewing => Err(String::from("Nothing is being edited")),
            EditState::AddingNew { draft } => {
                let route = draft.parse()?;
                routes.push(route);
                Ok(routes.len() - 1)
            }
            EditState::EditingExisting { index, draft } => {
                let route = draft.parse()?;
                match routes.get_mut(*index) {
                    Some(slot) => {
                        *slot = route;
                        Ok(*index)
                    }
                    None => Err(String::from("The edited route no longer exists")),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_routes() -> Vec<Route> {
        vec![
            Route::new(String::from("Vilnius"), String::from("Kaunas"), 102),
            Route::new(String::from("Kaunas"), String::from("Klaipeda"), 216),
        ]
    }

    #[test]
    fn adding_appends_the_parsed_draft() {
        let mut routes = sample_routes();
        let mut edit = EditState::begin_add();

        let draft = edit.draft_mut().unwrap();
        draft.start = String::from("Klaipeda");
        draft.destination = String::from("Palanga");
        draft.distance = String::from("33");

        let index = edit.commit(&mut routes).unwrap();
        assert_eq!(index, 2);
        assert_eq!(routes.len(), 3);
        assert_eq!(routes[2].destination, "Palanga");
        assert_eq!(routes[2].distance, 33);
    }

    #[test]
    fn editing_replaces_only_the_target_route() {
        let mut routes = sample_routes();
        let mut edit = EditState::begin_edit(1, &routes[1]);

        edit.draft_mut().unwrap().distance = String::from("210");

        let index = edit.commit(&mut routes).unwrap();
        assert_eq!(index, 1);
        assert_eq!(routes[1].distance, 210);
        assert_eq!(routes[1].start, "Kaunas");
        assert_eq!(routes[0], sample_routes()[0]);
    }

    #[test]
    fn the_draft_is_a_working_copy() {
        let routes = sample_routes();
        let mut edit = EditState::begin_edit(0, &routes[0]);

        edit.draft_mut().unwrap().start = String::from("Somewhere else");

        // Not committed, so the list still holds the original.
        assert_eq!(routes[0].start, "Vilnius");

        // Cancelling is dropping the edit state.
        edit = EditState::Viewing;
        assert!(edit.is_viewing());
        assert_eq!(routes, sample_routes());
    }

    #[test]
    fn a_non_numeric_distance_blocks_the_commit() {
        let mut routes = sample_routes();
        let mut edit = EditState::begin_add();
        edit.draft_mut().unwrap().distance = String::from("far");

        assert!(edit.commit(&mut routes).is_err());
        assert_eq!(routes, sample_routes());
    }

    #[test]
    fn negative_distances_are_accepted() {
        let draft = RouteDraft {
            start: String::from("A"),
            destination: String::from("B"),
            distance: String::from("-12"),
        };
        assert_eq!(draft.parse().unwrap().distance, -12);
    }

    #[test]
    fn whitespace_is_trimmed_on_commit() {
        let draft = RouteDraft {
            start: String::from("  Vilnius "),
            destination: String::from(" Kaunas"),
            distance: String::from(" 102 "),
        };
        let route = draft.parse().unwrap();
        assert_eq!(route.start, "Vilnius");
        assert_eq!(route.destination, "Kaunas");
        assert_eq!(route.distance, 102);
    }

    #[test]
    fn committing_while_viewing_is_rejected() {
        let mut routes = sample_routes();
        assert!(EditState::Viewing.commit(&mut routes).is_err());
        assert_eq!(routes, sample_routes());
    }
}
