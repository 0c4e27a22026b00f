/// Static JSON asset holding the "Our Journey" milestones.
pub const TIMELINE_DATA_PATH: &str = "/_data/timelinedb.json";

/// Backend path serving the recipe list.
pub const RECIPES_PATH: &str = "/recipes";

/// Relative image names are resolved against this root.
pub const ASSET_IMAGE_ROOT: &str = "/img/";

pub fn get_backend_url() -> &'static str {
    if cfg!(debug_assertions) {
        "http://localhost:5000"
    } else {
        ""
    }
}

/// Resolve an `image` field to something an `<img src>` can use.
///
/// Absolute paths and full URLs are passed through untouched, bare file names
/// are placed under [`ASSET_IMAGE_ROOT`].
pub fn asset_url(path: &str) -> String {
    let path = path.trim();
    if path.starts_with('/') || path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}{}", ASSET_IMAGE_ROOT, path)
    }
}
