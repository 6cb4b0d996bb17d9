// this has to run before the runtime starts any threads, since the local
// offset can't be read soundly from a multithreaded process on most unixes
pub fn get_offset() -> time::UtcOffset {
    time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
        log::warn!("couldn't determine the local time offset: {}", e);
        time::UtcOffset::UTC
    })
}

pub fn screen_size() -> (u16, u16) {
    terminal_size::terminal_size().map_or(
        (24, 80),
        |(terminal_size::Width(w), terminal_size::Height(h))| (h, w),
    )
}
