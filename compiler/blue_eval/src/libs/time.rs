//! The `time` module.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use blue_value::{parse_args, register, Arity, BuiltinFunction, EvalResult, Scope, Value};

fn since_epoch() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

/// Seconds since the Unix epoch.
fn time(_: Option<&Value>, _: &[Value]) -> EvalResult {
    Ok(Value::float(since_epoch().as_secs_f64()))
}

/// Milliseconds since the Unix epoch.
fn millis(_: Option<&Value>, _: &[Value]) -> EvalResult {
    Ok(Value::int(
        i64::try_from(since_epoch().as_millis()).unwrap_or(i64::MAX),
    ))
}

/// Block for `ms` milliseconds; negative values do not sleep.
fn sleep(_: Option<&Value>, args: &[Value]) -> EvalResult {
    let args = parse_args("i", args)?;
    let ms = args.int(0).and_then(|ms| u64::try_from(ms).ok()).unwrap_or(0);
    std::thread::sleep(Duration::from_millis(ms));
    Ok(Value::Nil)
}

/// `ctime(ms)`: milliseconds since the epoch as `Mon Jan  2 15:04:05 2006`,
/// in UTC.
fn ctime(_: Option<&Value>, args: &[Value]) -> EvalResult {
    let args = parse_args("i", args)?;
    let secs = args.int(0).unwrap_or(0) / 1000;
    Ok(Value::string(format_ctime(secs)))
}

const WEEKDAYS: [&str; 7] = ["Thu", "Fri", "Sat", "Sun", "Mon", "Tue", "Wed"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn format_ctime(secs: i64) -> String {
    let days = secs.div_euclid(86_400);
    let clock = secs.rem_euclid(86_400);
    let (year, month, day) = civil_from_days(days);
    let weekday = WEEKDAYS[usize::try_from(days.rem_euclid(7)).unwrap_or(0)];
    let month = MONTHS[usize::try_from(month - 1).unwrap_or(0)];
    format!(
        "{weekday} {month} {day:>2} {:02}:{:02}:{:02} {year}",
        clock / 3600,
        clock % 3600 / 60,
        clock % 60
    )
}

/// Proleptic Gregorian (year, month 1-12, day 1-31) of a day count from
/// 1970-01-01.
fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

static FUNCTIONS: [BuiltinFunction; 4] = [
    BuiltinFunction::new("time", Arity::NoArgs, time),
    BuiltinFunction::new("millis", Arity::NoArgs, millis),
    BuiltinFunction::new("sleep", Arity::VarArgs, sleep),
    BuiltinFunction::new("ctime", Arity::VarArgs, ctime),
];

pub(crate) fn module() -> Value {
    let members = Scope::new();
    register(&members, &FUNCTIONS, &[]);
    Value::module("time", "<builtin>", members)
}
