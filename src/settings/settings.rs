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
use std::path::Path;

use serde_derive::{Deserialize, Serialize};

use crate::enums::{SortDirection, SortType};

#[derive(Clone)]
#[derive(Serialize, Deserialize)]
pub struct Settings {
    pub(crate) routes_file: String,
    pub(crate) default_sort_type: SortType,
    pub(crate) default_sort_direction: SortDirection,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            routes_file: String::from("./routes.json"),
            default_sort_type: SortType::QuickSort,
            default_sort_direction: SortDirection::Ascending,
        }
    }
}

impl Settings {
    pub fn read() -> Self {
        let settings_path = Path::new("./settings/settings.toml");
        if !settings_path.exists() {
            match fs::create_dir_all("./settings") {
                Ok(_) => {}
                Err(err) => eprintln!("Failed to create settings directory: {}", err),
            };
            let toml = match toml::to_string(&Settings::default()) {
                Ok(v) => v,
                Err(err) => {
                    eprintln!("Failed to serialize default settings.toml file: {}", err);
                    format!("Failed to serialize default settings.toml file: {}", err)
                }
            };
            match fs::write(settings_path, toml) {
                Ok(_) => {}
                Err(err) => eprintln!("Failed to write to settings.toml file: {}", err),
            }
        }

        let contents = match fs::read_to_string(settings_path) {
            Ok(v) => v,
            Err(err) => {
                eprintln!("Failed to read settings file: {}\nUsing default values.", err);
                return Settings::default();
            }
        };

        let settings: Settings = match toml::from_str(&contents) {
            Ok(s) => s,
            Err(err) => {
                eprintln!("Failed to read settings file: {}\nUsing default values.", err);
                Settings::default()
            }
        };

        settings
    }

    pub fn write(&self) {
        let toml = match toml::to_string(self) {
            Ok(v) => v,
            Err(err) => {
                eprintln!("Failed to serialize settings: {}", err);
                return;
            }
        };

        match fs::write("./settings/settings.toml", toml) {
            Ok(_) => {}
            Err(err) => eprintln!("Failed to write to settings.toml file: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_bundled_routes_file() {
        let settings = Settings::default();
        assert_eq!(settings.routes_file, "./routes.json");
        assert_eq!(settings.default_sort_type, SortType::QuickSort);
        assert_eq!(settings.default_sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn settings_round_trip_through_toml() {
        let mut settings = Settings::default();
        settings.routes_file = String::from("/tmp/other_routes.json");
        settings.default_sort_type = SortType::BubbleSort;
        settings.default_sort_direction = SortDirection::Descending;

        let toml = toml::to_string(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.routes_file, settings.routes_file);
        assert_eq!(parsed.default_sort_type, SortType::BubbleSort);
        assert_eq!(parsed.default_sort_direction, SortDirection::Descending);
    }
}
