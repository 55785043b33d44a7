//! Tolerant, ordered interpretation of the analysis endpoint's response.
//!
//! The endpoint's JSON shape has changed across backend versions and carries
//! no version field, so decoding tries a fixed priority list of known shapes
//! and takes the first structural match. The order itself is an invariant:
//! the direct shape is the current backend's fast path, the wrapped shapes
//! are kept for compatibility during backend migration.

use serde::de::Error as _;
use serde::Deserialize;
use tracing::{debug, warn};

use menulens_core::{Menu, ScanError};

/// A recognized response layout, in the role of a (matcher, extractor) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Top-level `Menu` object.
    Direct,
    /// Array of wrappers, each holding `output.menu`; first element wins.
    WrappedArray,
    /// Single object with a top-level `menu` field.
    LegacyWrapped,
}

/// Priority order of shape attempts. First structural match wins.
pub const STRATEGY_ORDER: [ResponseShape; 3] = [
    ResponseShape::Direct,
    ResponseShape::WrappedArray,
    ResponseShape::LegacyWrapped,
];

#[derive(Deserialize)]
struct OutputWrapper {
    output: OutputEnvelope,
}

#[derive(Deserialize)]
struct OutputEnvelope {
    menu: Menu,
}

#[derive(Deserialize)]
struct LegacyEnvelope {
    menu: Menu,
}

impl ResponseShape {
    fn try_extract(self, raw: &[u8]) -> Result<Menu, serde_json::Error> {
        match self {
            ResponseShape::Direct => serde_json::from_slice(raw),
            ResponseShape::WrappedArray => {
                let wrappers: Vec<OutputWrapper> = serde_json::from_slice(raw)?;
                wrappers
                    .into_iter()
                    .next()
                    .map(|first| first.output.menu)
                    .ok_or_else(|| serde_json::Error::custom("wrapped array is empty"))
            }
            ResponseShape::LegacyWrapped => {
                serde_json::from_slice::<LegacyEnvelope>(raw).map(|e| e.menu)
            }
        }
    }
}

/// Decode response bytes into a [`Menu`] via the first matching shape.
///
/// A mismatch for one shape never propagates; it advances to the next. When
/// every shape fails, the error carries the final attempt's structural error
/// and the raw response text for diagnostics — that text is logged, never
/// shown to the user.
pub fn interpret(raw: &[u8]) -> Result<Menu, ScanError> {
    let mut last_err: Option<serde_json::Error> = None;
    for shape in STRATEGY_ORDER {
        match shape.try_extract(raw) {
            Ok(menu) => {
                debug!(shape = ?shape, sections = menu.sections.len(), "Response shape matched");
                return Ok(menu);
            }
            Err(err) => {
                debug!(shape = ?shape, error = %err, "Response shape did not match");
                last_err = Some(err);
            }
        }
    }

    let raw_text = String::from_utf8_lossy(raw).into_owned();
    warn!(response = %raw_text, "No known response shape matched");
    Err(ScanError::Decoding {
        source: last_err.expect("at least one shape attempted"),
        raw: raw_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_order_is_fixed() {
        assert_eq!(
            STRATEGY_ORDER,
            [
                ResponseShape::Direct,
                ResponseShape::WrappedArray,
                ResponseShape::LegacyWrapped,
            ]
        );
    }

    #[test]
    fn test_direct_shape_wins() {
        let menu = interpret(br#"{"currency":"USD","sections":[]}"#).unwrap();
        assert_eq!(menu.currency, "USD");
        assert!(menu.sections.is_empty());
    }

    #[test]
    fn test_wrapped_array_takes_first_element_only() {
        let raw = br#"[
            {"output":{"menu":{"currency":"EUR","sections":[
                {"category_name":"Mains","items":[{"name":"Soup","price":5.5}]}]}}},
            {"output":{"menu":{"currency":"USD","sections":[]}}}
        ]"#;
        let menu = interpret(raw).unwrap();
        assert_eq!(menu.currency, "EUR");
        assert_eq!(menu.sections.len(), 1);
        assert_eq!(menu.sections[0].category_name, "Mains");
        assert_eq!(menu.sections[0].items[0].name, "Soup");
        assert_eq!(menu.sections[0].items[0].price, 5.5);
    }

    #[test]
    fn test_legacy_wrapped_shape() {
        let menu = interpret(br#"{"menu":{"currency":"GBP","sections":[]}}"#).unwrap();
        assert_eq!(menu.currency, "GBP");
        assert!(menu.sections.is_empty());
    }

    #[test]
    fn test_all_shapes_fail_yields_decoding_error() {
        let err = interpret(br#"{"unexpected":"shape"}"#).unwrap_err();
        match err {
            ScanError::Decoding { raw, .. } => {
                assert!(raw.contains("unexpected"));
            }
            other => panic!("expected Decoding, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_array_is_a_structural_mismatch() {
        let err = interpret(b"[]").unwrap_err();
        assert!(matches!(err, ScanError::Decoding { .. }));
    }

    #[test]
    fn test_ids_are_fresh_per_decode() {
        let raw = br#"{"currency":"USD","sections":[
            {"category_name":"Mains","items":[{"name":"Soup","price":5.5}]}]}"#;
        let first = interpret(raw).unwrap();
        let second = interpret(raw).unwrap();
        // Content identical, identifiers independent of content.
        assert_eq!(first, second);
        assert_ne!(first.sections[0].id, second.sections[0].id);
        assert_ne!(first.sections[0].items[0].id, second.sections[0].items[0].id);
    }
}
