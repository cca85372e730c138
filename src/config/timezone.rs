use anyhow::{Context, Result, bail};
use time::UtcOffset;

pub const LOCAL_TIMEZONE: &str = "local";

/// Resolves the configured timezone, asking the OS when it is `local`.
pub fn resolve_offset(value: &str) -> Result<UtcOffset> {
    if value.trim().eq_ignore_ascii_case(LOCAL_TIMEZONE) {
        return Ok(UtcOffset::current_local_offset().unwrap_or_else(|_| {
            log::warn!("could not determine the local UTC offset; using UTC");
            UtcOffset::UTC
        }));
    }
    parse_timezone(value)
}

pub fn parse_timezone(value: &str) -> Result<UtcOffset> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("UTC") || trimmed.eq_ignore_ascii_case("Z") {
        return Ok(UtcOffset::UTC);
    }

    let mut chars = trimmed.chars();
    let sign = match chars.next() {
        Some('+') => 1,
        Some('-') => -1,
        Some(_) => bail!("timezone '{}' must start with '+' or '-'", value),
        None => bail!("timezone is empty"),
    };

    let mut parts = chars.as_str().split(':');
    let hours_str = parts
        .next()
        .with_context(|| format!("timezone '{}' missing hour component", value))?;
    let minutes_str = parts.next().unwrap_or("0");

    if parts.next().is_some() {
        bail!("timezone '{}' has too many components", value);
    }

    let hours: i8 = hours_str
        .parse()
        .with_context(|| format!("timezone '{}' hour component invalid", value))?;
    let minutes: i8 = minutes_str
        .parse()
        .with_context(|| format!("timezone '{}' minute component invalid", value))?;

    UtcOffset::from_hms(sign * hours, sign * minutes, 0)
        .with_context(|| format!("timezone '{}' out of range", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_utc_variants() {
        assert_eq!(parse_timezone("UTC").unwrap(), UtcOffset::UTC);
        assert_eq!(parse_timezone("z").unwrap(), UtcOffset::UTC);
    }

    #[test]
    fn parse_positive_offset() {
        let offset = parse_timezone("+08:00").unwrap();
        assert_eq!(offset.whole_hours(), 8);
    }

    #[test]
    fn parse_negative_offset_with_minutes() {
        let offset = parse_timezone("-03:30").unwrap();
        assert_eq!(offset.whole_hours(), -3);
        assert_eq!(offset.minutes_past_hour(), -30);
    }

    #[test]
    fn local_always_resolves() {
        assert!(resolve_offset("local").is_ok());
        assert!(resolve_offset("Local").is_ok());
    }

    #[test]
    fn reject_invalid_values() {
        assert!(parse_timezone("Asia/Shanghai").is_err());
        assert!(parse_timezone("+8:00:00").is_err());
        assert!(parse_timezone("").is_err());
        assert!(resolve_offset("+99:00").is_err());
    }
}
