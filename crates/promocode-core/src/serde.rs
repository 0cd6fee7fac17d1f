// Module name shadows the `serde` crate; use `::serde` for the external crate.
use ::serde::Serializer;
use chrono::NaiveDateTime;

/// Layout used for promo code validity dates on the wire.
pub const DISPLAY_DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Render a zone-less timestamp as `dd.mm.yyyy HH:MM:SS`.
pub fn format_display_datetime(dt: &NaiveDateTime) -> String {
    dt.format(DISPLAY_DATETIME_FORMAT).to_string()
}

/// Serialize `NaiveDateTime` with [`DISPLAY_DATETIME_FORMAT`].
pub fn to_display_datetime<S>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&format_display_datetime(dt))
}
