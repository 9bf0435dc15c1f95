use serde::Deserialize;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{BannerError, BannerResult};

impl Rgb8 {
    /// Parse `#RGB` or `#RRGGBB` (case-insensitive, `#` optional).
    pub fn from_hex(s: &str) -> BannerResult<Self> {
        parse_hex(s).map_err(BannerError::validation)
    }
}

impl std::str::FromStr for Rgb8 {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr([u8; 3]),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr([r, g, b]) => Ok(Self::new(r, g, b)),
        }
    }
}

fn parse_hex(s: &str) -> Result<Rgb8, String> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color \"{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    match digits.len() {
        3 => {
            // #abc expands to #aabbcc
            let mut out = [0u8; 3];
            for (slot, ch) in out.iter_mut().zip(digits.chars()) {
                let pair: String = [ch, ch].iter().collect();
                *slot = hex_byte(&pair)?;
            }
            Ok(Rgb8::new(out[0], out[1], out[2]))
        }
        6 => Ok(Rgb8::new(
            hex_byte(&digits[0..2])?,
            hex_byte(&digits[2..4])?,
            hex_byte(&digits[4..6])?,
        )),
        _ => Err(format!(
            "hex color \"{s}\" must be #RGB or #RRGGBB (case-insensitive)"
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
