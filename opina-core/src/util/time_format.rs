use opina_entities::time::Timestamp;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_DAY: i64 = 86_400;

const MONTHS_ABBR: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// Renders the age of `timestamp` relative to the injected `now` as the
/// user-facing Spanish string.
///
/// Ages below one day are relative ("Hace 5 segundos"), older timestamps
/// are rendered as an absolute date. The age is floored to whole seconds;
/// a timestamp in the future (clock skew) counts as zero seconds old.
pub fn fuzzy_age(timestamp: Timestamp, now: Timestamp) -> String {
    let age_secs = (now.as_secs() - timestamp.as_secs()).max(0);
    if age_secs < SECS_PER_MINUTE {
        plural(age_secs, "segundo")
    } else if age_secs < SECS_PER_HOUR {
        plural(age_secs / SECS_PER_MINUTE, "minuto")
    } else if age_secs < SECS_PER_DAY {
        plural(age_secs / SECS_PER_HOUR, "hora")
    } else {
        absolute(timestamp)
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("Hace 1 {unit}")
    } else {
        format!("Hace {n} {unit}s")
    }
}

fn absolute(timestamp: Timestamp) -> String {
    let dt = timestamp.to_datetime();
    let month = MONTHS_ABBR[u8::from(dt.month()) as usize - 1];
    format!(
        "{} {} {}, {:02}:{:02}",
        dt.day(),
        month,
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}
