use chrono::{SecondsFormat, Utc};

pub fn seconds_to_music_time(total_seconds: i64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;

    format!("{:0}:{:02}", minutes, seconds)
}

pub fn millis_to_music_time(total_millis: i64) -> String {
    seconds_to_music_time(total_millis / 1000)
}

pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}
