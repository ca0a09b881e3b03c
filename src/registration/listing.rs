//! Human-readable route listings.
//!
//! One registration statement per route, in registration order:
//!
//! ```text
//! // Routes for UserController
//! Route::get('api/v1/users', 'App\Http\Controllers\UserController@getUsers');
//! ```

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::routing::Route;

/// Extension of listing files.
const LISTING_EXTENSION: &str = "routes";

/// Renders and writes route listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteListing;

impl RouteListing {
    /// Render the listing for one controller.
    pub fn render(identifier: &str, routes: &[Route]) -> String {
        let mut out = format!("// Routes for {identifier}\n");
        for route in routes {
            let _ = writeln!(
                out,
                "Route::{}('{}', '{}');",
                route.verb, route.slug, route.target
            );
        }
        out
    }

    /// File name for a controller's listing; path separators and other
    /// unsafe characters become `_`.
    pub fn file_name(identifier: &str) -> String {
        let stem: String = identifier
            .trim_matches('\\')
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{stem}.{LISTING_EXTENSION}")
    }

    /// Write the listing into `directory`, creating it if needed.
    ///
    /// The file is written to a temporary sibling and renamed into place,
    /// so readers never observe a partial listing. The temporary file is
    /// removed on failure.
    pub fn write(directory: &Path, identifier: &str, routes: &[Route]) -> io::Result<PathBuf> {
        fs::create_dir_all(directory)?;

        let file_name = Self::file_name(identifier);
        let path = directory.join(&file_name);
        let tmp_path = directory.join(format!(".{file_name}.tmp"));

        let result = write_synced(&tmp_path, Self::render(identifier, routes).as_bytes())
            .and_then(|()| fs::rename(&tmp_path, &path));
        if let Err(e) = result {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        tracing::info!(
            path = %path.display(),
            routes = routes.len(),
            "Route listing written"
        );
        Ok(path)
    }
}

fn write_synced(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(contents)?;
    writer.flush()?;
    writer.get_ref().sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::route::build_route;
    use crate::routing::HttpVerb;

    fn routes() -> Vec<Route> {
        vec![
            build_route("api/v1", "users", HttpVerb::Get, "App\\UserController", "getUsers"),
            build_route("api/v1", "{id}", HttpVerb::Delete, "App\\UserController", "deleteUser"),
        ]
    }

    #[test]
    fn test_render() {
        let listing = RouteListing::render("UserController", &routes());
        assert_eq!(
            listing,
            "// Routes for UserController\n\
             Route::get('api/v1/users', 'App\\UserController@getUsers');\n\
             Route::delete('api/v1/{id}', 'App\\UserController@deleteUser');\n"
        );
    }

    #[test]
    fn test_file_name() {
        assert_eq!(RouteListing::file_name("UserController"), "UserController.routes");
        assert_eq!(
            RouteListing::file_name("App\\Http\\Controllers\\UserController"),
            "App_Http_Controllers_UserController.routes"
        );
        assert_eq!(RouteListing::file_name("../etc/passwd"), ".._etc_passwd.routes");
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = std::env::temp_dir()
            .join("dynamic_routes_listing_test")
            .join(std::process::id().to_string());
        let _ = fs::remove_dir_all(&dir);

        let path = RouteListing::write(&dir, "UserController", &routes()).unwrap();
        assert_eq!(path, dir.join("UserController.routes"));

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, RouteListing::render("UserController", &routes()));
        assert!(!dir.join(".UserController.routes.tmp").exists());

        fs::remove_dir_all(&dir).unwrap_or_default();
    }

    #[test]
    fn test_write_failure_leaves_no_temp_file() {
        let dir = std::env::temp_dir()
            .join("dynamic_routes_listing_fail")
            .join(std::process::id().to_string());
        let _ = fs::remove_dir_all(&dir);
        // A directory squatting on the destination makes the rename fail.
        fs::create_dir_all(dir.join("UserController.routes").join("occupied")).unwrap();

        assert!(RouteListing::write(&dir, "UserController", &routes()).is_err());
        assert!(!dir.join(".UserController.routes.tmp").exists());

        fs::remove_dir_all(&dir).unwrap_or_default();
    }
}
