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

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::file_utils;
use crate::route::Route;

#[derive(Debug, Error)]
pub enum RouteStoreError {
    #[error("Failed to load routes from \"{path}\": {reason}")]
    Load { path: String, reason: String },
    #[error("Failed to save routes to \"{path}\": {reason}")]
    Save { path: String, reason: String },
}

// Whole-file JSON persistence for the route list. The file path is supplied
// by the caller.
pub struct RouteRepository {
    path: PathBuf,
}

impl RouteRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    // A missing file is not an error, it just means no routes were saved
    // yet.
    pub fn load(&self) -> Result<Vec<Route>, RouteStoreError> {
        if !self.path.exists() {
            return Ok(vec![]);
        }

        let json = fs::read_to_string(&self.path).map_err(|err| self.load_error(err))?;
        serde_json::from_str(&json).map_err(|err| self.load_error(err))
    }

    pub fn save(&self, routes: &[Route]) -> Result<(), RouteStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                file_utils::check_and_create_dir(parent);
            }
        }

        let json = serde_json::to_string_pretty(routes).map_err(|err| self.save_error(err))?;
        fs::write(&self.path, json).map_err(|err| self.save_error(err))
    }

    fn load_error(&self, err: impl ToString) -> RouteStoreError {
        RouteStoreError::Load {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        }
    }

    fn save_error(&self, err: impl ToString) -> RouteStoreError {
        RouteStoreError::Save {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("route_sorter_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn missing_file_loads_as_empty_list() {
        let repository = RouteRepository::new(scratch_file("missing"));
        assert!(repository.load().unwrap().is_empty());
    }

    #[test]
    fn saved_routes_load_back() {
        let path = scratch_file("round_trip");
        let repository = RouteRepository::new(&path);

        let routes = vec![
            Route::new(String::from("Vilnius"), String::from("Kaunas"), 102),
            Route::new(String::from("Kaunas"), String::from("Klaipeda"), 216),
        ];
        repository.save(&routes).unwrap();
        assert_eq!(repository.load().unwrap(), routes);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn routes_are_stored_with_pascal_case_fields() {
        let path = scratch_file("field_names");
        let repository = RouteRepository::new(&path);

        let routes = vec![Route::new(String::from("A"), String::from("B"), 5)];
        repository.save(&routes).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"Start\""));
        assert!(json.contains("\"Destination\""));
        assert!(json.contains("\"Distance\""));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_json_is_a_load_error() {
        let path = scratch_file("malformed");
        fs::write(&path, "not json at all").unwrap();

        let repository = RouteRepository::new(&path);
        match repository.load() {
            Err(RouteStoreError::Load { .. }) => {}
            other => panic!("expected a load error, got {:?}", other.map(|r| r.len())),
        }

        let _ = fs::remove_file(&path);
    }
}
