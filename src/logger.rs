// the terminal belongs to the clock while it runs, so log lines go to a
// file instead of stderr
pub fn init() {
    let file = crate::dirs::log_file().and_then(|path| {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).ok()?;
        }
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .ok()
    });

    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if let Some(file) = file {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    } else {
        builder.filter_level(log::LevelFilter::Off);
    }
    // only fails if a logger is already installed, which is fine
    let _ = builder.try_init();
}
