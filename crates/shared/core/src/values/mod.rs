mod amount;
mod price;
mod volume;

pub use amount::{Amount, divide};
pub use price::Price;
pub use volume::Volume;

pub use instruments_ports::Timestamp;

/// Symbol identifier for a tradeable security
pub type Symbol = String;

/// Minor units per major currency unit (cents per dollar)
pub const MINOR_UNITS: i64 = 100;

/// Write a cent count as `$X,XXX.XX`, with a leading `-` for negatives
pub(crate) fn write_currency(f: &mut std::fmt::Formatter<'_>, cents: i64) -> std::fmt::Result {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let minor = abs % MINOR_UNITS as u64;
    let major = (abs / MINOR_UNITS as u64).to_string();

    let mut grouped = String::with_capacity(major.len() + major.len() / 3);
    for (i, digit) in major.chars().enumerate() {
        if i > 0 && (major.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    write!(f, "{sign}${grouped}.{minor:02}")
}
