//! "Time from now" phrases in Brazilian Portuguese.
//!
//! Thresholds follow the usual relative-time ladder: up to 44 s is "poucos
//! segundos", up to 89 s "um minuto", up to 44 min in minutes, up to 89 min
//! "uma hora", up to 21 h in hours, up to 35 h "um dia", up to 25 days in
//! days, up to 45 days "um mês", up to 10 months in months, up to 17 months
//! "um ano", then years. Months are averaged at 30.4375 days.

use chrono::{DateTime, Utc};

const DAYS_PER_MONTH: f64 = 30.4375;

/// Describe `then` relative to `now`, e.g. `há 3 dias` or `em uma hora`.
#[must_use]
pub fn from_now(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let millis = then.signed_duration_since(now).num_milliseconds();
    #[allow(clippy::cast_precision_loss)]
    let seconds = (millis as f64 / 1000.0).abs();
    let phrase = phrase_for(seconds);
    if millis > 0 {
        format!("em {phrase}")
    } else {
        format!("há {phrase}")
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn phrase_for(seconds: f64) -> String {
    let secs = seconds.round() as u64;
    if secs <= 44 {
        return "poucos segundos".into();
    }
    if secs <= 89 {
        return "um minuto".into();
    }

    let minutes = (seconds / 60.0).round() as u64;
    if minutes <= 44 {
        return counted(minutes, "um minuto", "minutos");
    }
    if minutes <= 89 {
        return "uma hora".into();
    }

    let hours = (seconds / 3600.0).round() as u64;
    if hours <= 21 {
        return counted(hours, "uma hora", "horas");
    }
    if hours <= 35 {
        return "um dia".into();
    }

    let days = (seconds / 86_400.0).round() as u64;
    if days <= 25 {
        return counted(days, "um dia", "dias");
    }
    if days <= 45 {
        return "um mês".into();
    }

    let months = (seconds / 86_400.0 / DAYS_PER_MONTH).round() as u64;
    if months <= 10 {
        return counted(months, "um mês", "meses");
    }
    if months <= 17 {
        return "um ano".into();
    }

    let years = (seconds / 86_400.0 / DAYS_PER_MONTH / 12.0).round() as u64;
    counted(years, "um ano", "anos")
}

/// Rounding can land a count on 1 right past a threshold; say it in the singular.
fn counted(n: u64, singular: &str, plural: &str) -> String {
    if n <= 1 {
        singular.to_string()
    } else {
        format!("{n} {plural}")
    }
}
