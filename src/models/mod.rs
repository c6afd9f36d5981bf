//! Typed records decoded from the upstream JSON.
//!
//! All records are read-only snapshots of one API response.

pub mod board;
pub mod catalog;
pub mod thread;

/// Decodes an optional `0`/`1` flag. Absent fields stay `None`.
pub(crate) fn maybe_de_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = <Option<u32> as serde::Deserialize>::deserialize(deserializer)?;
    Ok(value.map(|v| v == 1))
}

/// Decodes a mandatory `0`/`1` flag.
pub(crate) fn de_bool<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: u32 = serde::Deserialize::deserialize(d)?;
    Ok(value == 1)
}

pub(crate) mod macros {
    macro_rules! str_opt_ref {
        ($x:expr) => {
            $x.as_ref().map(|x| x.as_ref())
        };
    }

    pub(crate) use str_opt_ref;
}
