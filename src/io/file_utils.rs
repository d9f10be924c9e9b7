use std::fs;
use std::path::Path;

pub fn check_and_create_dir(path: &Path) -> bool {
    if path.exists() {
        return true;
    }

    match fs::create_dir_all(path) {
        Ok(_) => {
            println!("\"{}\" has been created", path.display());
            true
        }
        Err(_) => {
            eprintln!("Failed to create directory \"{}\"", path.display());
            false
        }
    }
}
