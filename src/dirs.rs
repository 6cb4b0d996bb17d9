static PROJECT_DIRS: once_cell::sync::Lazy<
    Option<directories::ProjectDirs>,
> = once_cell::sync::Lazy::new(|| {
    directories::ProjectDirs::from("", "", "watchface")
});

pub fn config_file() -> Option<std::path::PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

pub fn log_file() -> Option<std::path::PathBuf> {
    data_dir().map(|dir| dir.join("watchface.log"))
}

fn config_dir() -> Option<std::path::PathBuf> {
    PROJECT_DIRS
        .as_ref()
        .map(|dirs| dirs.config_dir().to_path_buf())
}

fn data_dir() -> Option<std::path::PathBuf> {
    PROJECT_DIRS.as_ref().map(|dirs| dirs.data_dir().to_path_buf())
}
