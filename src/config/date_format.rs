use anyhow::{Context, Result, bail};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::format_description::{self, BorrowedFormatItem};

pub const DEFAULT_DATE_FORMAT: &str = "[year]-[month]-[day] [hour]:[minute]:[second]";

pub fn parse_format(value: &str) -> Result<()> {
    if value == "RFC3339" {
        return Ok(());
    }

    let items = format_description::parse_borrowed::<2>(value)?;
    if !items
        .iter()
        .any(|item| matches!(item, BorrowedFormatItem::Component(_)))
    {
        bail!("date_format must contain at least one date or time component");
    }
    Ok(())
}

/// Formats `timestamp` with a `time` format description or the `RFC3339` keyword.
pub fn format_timestamp(timestamp: OffsetDateTime, value: &str) -> Result<String> {
    if value == "RFC3339" {
        return timestamp
            .format(&Rfc3339)
            .context("failed to format timestamp as RFC3339");
    }

    let items = format_description::parse_borrowed::<2>(value)
        .with_context(|| format!("date_format '{}' is invalid", value))?;
    timestamp
        .format(items.as_slice())
        .with_context(|| format!("failed to format timestamp with '{}'", value))
}
