use serde_derive::{Deserialize, Serialize};

// Field names stay PascalCase on disk so routes.json files written by
// earlier builds of the tool keep loading.
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Route {
    pub start: String,
    pub destination: String,
    pub distance: i32,
}

impl Route {
    pub fn new(start: String, destination: String, distance: i32) -> Self {
        Self {
            start,
            destination,
            distance,
        }
    }
}
