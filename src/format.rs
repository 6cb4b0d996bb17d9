const CLOCK: &[time::format_description::FormatItem<'_>] =
    time::macros::format_description!("[hour]:[minute]:[second]");

pub fn time(time: time::Time) -> String {
    // every component of a Time is in range for this description, so this
    // can't actually fail
    time.format(CLOCK).unwrap_or_else(|_| {
        format!(
            "{:02}:{:02}:{:02}",
            time.hour(),
            time.minute(),
            time.second()
        )
    })
}

pub fn interval(dur: std::time::Duration) -> String {
    let millis = dur.as_millis();
    if millis >= 1000 && millis % 1000 == 0 {
        format!("{}s", millis / 1000)
    } else {
        format!("{}ms", millis)
    }
}

#[test]
fn test_time() {
    assert_eq!(time(time::macros::time!(03:07:09)), "03:07:09");
    assert_eq!(time(time::macros::time!(00:00:00)), "00:00:00");
    assert_eq!(time(time::macros::time!(23:59:59)), "23:59:59");
    assert_eq!(time(time::macros::time!(12:30:05.75)), "12:30:05");
}

#[test]
fn test_interval() {
    assert_eq!(interval(std::time::Duration::from_millis(100)), "100ms");
    assert_eq!(interval(std::time::Duration::from_secs(2)), "2s");
    assert_eq!(interval(std::time::Duration::from_millis(1500)), "1500ms");
}
