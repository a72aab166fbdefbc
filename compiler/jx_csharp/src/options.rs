//! Translation options.

use crate::width::{CastPair, CastTable, PrimitiveWidth};

/// Options for [`translate_unit`](crate::translate_unit).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Cast spellings used by the `>>>` rewrite.
    pub cast_table: CastTable,
}

impl TranslateOptions {
    /// Apply a `--cast=<bits>:<signed>:<unsigned>` override.
    pub fn apply_cast_override(&mut self, arg: &str) -> Result<(), String> {
        let (width, pair) = parse_cast_override(arg)?;
        self.cast_table = std::mem::take(&mut self.cast_table).with_pair(width, pair);
        Ok(())
    }
}

/// Parse `<bits>:<signed>:<unsigned>`, e.g. `32:Int32:UInt32`.
pub fn parse_cast_override(arg: &str) -> Result<(PrimitiveWidth, CastPair), String> {
    let mut parts = arg.split(':');
    let (Some(bits), Some(signed), Some(unsigned), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(format!(
            "invalid cast override '{arg}': expected <bits>:<signed>:<unsigned>"
        ));
    };
    let width = bits
        .parse::<u32>()
        .ok()
        .and_then(PrimitiveWidth::from_bits)
        .ok_or_else(|| format!("invalid width '{bits}': expected 8, 16, 32 or 64"))?;
    if !is_type_name(signed) || !is_type_name(unsigned) {
        return Err(format!(
            "invalid cast override '{arg}': type names must be identifiers"
        ));
    }
    Ok((width, CastPair::new(signed, unsigned)))
}

/// Dotted names are allowed (`System.UInt32`).
fn is_type_name(text: &str) -> bool {
    !text.is_empty()
        && text.split('.').all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|c| c.is_alphabetic() || c == '_')
                && chars.all(|c| c.is_alphanumeric() || c == '_')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_replaces_one_width() {
        let mut options = TranslateOptions::default();
        assert_eq!(options.apply_cast_override("32:Int32:System.UInt32"), Ok(()));
        let pair = options.cast_table.pair(PrimitiveWidth::W32);
        assert_eq!(pair.signed, "Int32");
        assert_eq!(pair.unsigned, "System.UInt32");
        assert_eq!(options.cast_table.pair(PrimitiveWidth::W8).signed, "sbyte");
    }

    #[test]
    fn malformed_overrides() {
        for bad in ["32:int", "32:int:uint:x", "12:a:b", "x:a:b", "8::byte", "8:s byte:byte"] {
            assert!(parse_cast_override(bad).is_err(), "{bad}");
        }
    }
}
