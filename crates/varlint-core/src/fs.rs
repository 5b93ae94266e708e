use std::path::{Component, Path, PathBuf};

/// Express `path` relative to the current directory when it lives under it,
/// and drop any `./` component.
pub fn relativize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok())
        .unwrap_or(path);

    relative
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

pub fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
