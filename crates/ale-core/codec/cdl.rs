//! ASC CDL parsing and formatting
//!
//! Handles the `ASC_SOP` column, `(s s s)(o o o)(p p p)`, and the
//! `ASC_SAT` column, a single saturation scalar. Values are parsed
//! structurally only; no colour math is applied.

use ale_timeline::{Metadata, MetadataValue};
use tracing::warn;

use crate::{
    utils::{parse_finite, AleError},
    Result,
};

/// Metadata key for the slope/offset/power map
const KEY_SOP: &str = "asc_sop";
/// Metadata key for saturation
const KEY_SAT: &str = "asc_sat";
/// Metadata key for slope
const KEY_SLOPE: &str = "slope";
/// Metadata key for offset
const KEY_OFFSET: &str = "offset";
/// Metadata key for power
const KEY_POWER: &str = "power";

/// Slope, offset and power triples
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SopValues {
    /// Per-channel slope
    pub slope: [f64; 3],
    /// Per-channel offset
    pub offset: [f64; 3],
    /// Per-channel power
    pub power: [f64; 3],
}

/// CDL values carried by one clip
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CdlData {
    /// Slope/offset/power, when `ASC_SOP` parsed
    pub sop: Option<SopValues>,
    /// Saturation, when `ASC_SAT` parsed
    pub saturation: Option<f64>,
}

impl CdlData {
    /// Whether neither part is present
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sop.is_none() && self.saturation.is_none()
    }

    /// Structured metadata form stored under the clip's `cdl` key
    #[must_use]
    pub fn to_metadata(&self) -> MetadataValue {
        let mut map = Metadata::new();
        if let Some(sop) = &self.sop {
            let triple = |values: &[f64; 3]| {
                MetadataValue::List(values.iter().copied().map(MetadataValue::Number).collect())
            };
            let mut sop_map = Metadata::new();
            sop_map.insert(KEY_SLOPE.into(), triple(&sop.slope));
            sop_map.insert(KEY_OFFSET.into(), triple(&sop.offset));
            sop_map.insert(KEY_POWER.into(), triple(&sop.power));
            map.insert(KEY_SOP.into(), MetadataValue::Map(sop_map));
        }
        if let Some(sat) = self.saturation {
            map.insert(KEY_SAT.into(), MetadataValue::Number(sat));
        }
        MetadataValue::Map(map)
    }

    /// Read back the structured metadata form
    ///
    /// Returns `None` when the value holds neither part.
    #[must_use]
    pub fn from_metadata(value: &MetadataValue) -> Option<Self> {
        let map = value.as_map()?;
        let sop = map.get(KEY_SOP).and_then(MetadataValue::as_map).and_then(|sop| {
            Some(SopValues {
                slope: triple_from(sop.get(KEY_SLOPE)?)?,
                offset: triple_from(sop.get(KEY_OFFSET)?)?,
                power: triple_from(sop.get(KEY_POWER)?)?,
            })
        });
        let saturation = map.get(KEY_SAT).and_then(MetadataValue::as_f64);

        let cdl = Self { sop, saturation };
        (!cdl.is_empty()).then_some(cdl)
    }
}

/// Three numbers from a metadata list
fn triple_from(value: &MetadataValue) -> Option<[f64; 3]> {
    match value.as_list()? {
        [a, b, c] => Some([a.as_f64()?, b.as_f64()?, c.as_f64()?]),
        _ => None,
    }
}

/// Parse an `ASC_SOP` value
///
/// Parentheses are ignored; the first nine whitespace-separated numbers are
/// slope, offset and power in that order.
///
/// # Errors
///
/// Returns [`AleError::InvalidCdl`] if fewer than nine tokens are present or
/// one of them is not a number.
pub fn parse_sop(text: &str) -> Result<SopValues> {
    let cleaned = text.replace(['(', ')'], " ");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    if tokens.len() < 9 {
        return Err(AleError::invalid_cdl(
            text.trim(),
            format!("ASC_SOP needs 9 values, found {}", tokens.len()),
        ));
    }

    let mut values = [0.0_f64; 9];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        *slot = parse_finite(token)
            .ok_or_else(|| AleError::invalid_cdl(text.trim(), format!("'{token}' is not a number")))?;
    }

    Ok(SopValues {
        slope: [values[0], values[1], values[2]],
        offset: [values[3], values[4], values[5]],
        power: [values[6], values[7], values[8]],
    })
}

/// Parse an `ASC_SAT` value
///
/// # Errors
///
/// Returns [`AleError::InvalidCdl`] if the value is not a number.
pub fn parse_saturation(text: &str) -> Result<f64> {
    parse_finite(text).ok_or_else(|| AleError::invalid_cdl(text.trim(), "saturation is not a number"))
}

/// Parse both CDL columns, reporting the parts that failed
///
/// Empty inputs are skipped. The data is `None` when nothing parsed.
#[must_use]
pub fn parse_cdl_detailed(sop_text: &str, sat_text: &str) -> (Option<CdlData>, Vec<AleError>) {
    let mut cdl = CdlData::default();
    let mut errors = Vec::new();

    if !sop_text.trim().is_empty() {
        match parse_sop(sop_text) {
            Ok(sop) => cdl.sop = Some(sop),
            Err(e) => errors.push(e),
        }
    }
    if !sat_text.trim().is_empty() {
        match parse_saturation(sat_text) {
            Ok(sat) => cdl.saturation = Some(sat),
            Err(e) => errors.push(e),
        }
    }

    ((!cdl.is_empty()).then_some(cdl), errors)
}

/// Parse both CDL columns, ignoring parts that fail
///
/// CDL is optional: `None` is returned when both inputs are empty or both fail.
#[must_use]
pub fn parse_cdl(sop_text: &str, sat_text: &str) -> Option<CdlData> {
    let (cdl, errors) = parse_cdl_detailed(sop_text, sat_text);
    for error in &errors {
        warn!(%error, "ignoring unparseable CDL value");
    }
    cdl
}

/// Render slope/offset/power as `(s s s)(o o o)(p p p)` with four decimals
#[must_use]
pub fn format_sop(sop: &SopValues) -> String {
    let [s0, s1, s2] = sop.slope;
    let [o0, o1, o2] = sop.offset;
    let [p0, p1, p2] = sop.power;
    format!("({s0:.4} {s1:.4} {s2:.4})({o0:.4} {o1:.4} {o2:.4})({p0:.4} {p1:.4} {p2:.4})")
}

/// Render saturation as the shortest exact decimal with a fractional digit
#[must_use]
pub fn format_saturation(saturation: f64) -> String {
    let mut text = saturation.to_string();
    if saturation.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "(0.87 0.93 0.99)(-0.08 -0.09 -0.08)(0.99 1.02 1.01)";

    #[test]
    fn parses_sample_sop() {
        let sop = parse_sop(SAMPLE).unwrap();
        assert_eq!(sop.slope, [0.87, 0.93, 0.99]);
        assert_eq!(sop.offset, [-0.08, -0.09, -0.08]);
        assert_eq!(sop.power, [0.99, 1.02, 1.01]);
    }

    #[test]
    fn sop_without_parentheses_and_extra_values() {
        let sop = parse_sop("1 1 1 0 0 0 1 1 1 9").unwrap();
        assert_eq!(sop.power, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn short_or_bad_sop_fails() {
        assert!(matches!(parse_sop("(1 1 1)(0 0 0)"), Err(AleError::InvalidCdl { .. })));
        let err = parse_sop("(1 x 1)(0 0 0)(1 1 1)").unwrap_err();
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn format_is_four_decimals() {
        let sop = parse_sop(SAMPLE).unwrap();
        assert_eq!(
            format_sop(&sop),
            "(0.8700 0.9300 0.9900)(-0.0800 -0.0900 -0.0800)(0.9900 1.0200 1.0100)"
        );
        let four = "(0.8714 0.9334 0.9947)(-0.0870 -0.0922 -0.0808)(0.9988 1.0218 1.0101)";
        assert_eq!(format_sop(&parse_sop(four).unwrap()), four);
    }

    #[test]
    fn saturation_text() {
        assert_eq!(parse_saturation(" 0.9 ").unwrap(), 0.9);
        assert!(parse_saturation("high").is_err());
        assert_eq!(format_saturation(0.9), "0.9");
        assert_eq!(format_saturation(1.0), "1.0");
        assert_eq!(format_saturation(1.25), "1.25");
    }

    #[test]
    fn cdl_is_optional() {
        assert_eq!(parse_cdl("", ""), None);
        assert_eq!(parse_cdl("garbage", "nope"), None);

        let only_sat = parse_cdl("garbage", "0.9").unwrap();
        assert!(only_sat.sop.is_none());
        assert_eq!(only_sat.saturation, Some(0.9));

        let (cdl, errors) = parse_cdl_detailed(SAMPLE, "bad");
        assert!(cdl.unwrap().sop.is_some());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn metadata_round_trip() {
        let cdl = CdlData {
            sop: Some(parse_sop(SAMPLE).unwrap()),
            saturation: Some(0.9),
        };
        let value = cdl.to_metadata();
        let map = value.as_map().unwrap();
        assert_eq!(map.get("asc_sat").and_then(MetadataValue::as_f64), Some(0.9));
        assert_eq!(CdlData::from_metadata(&value), Some(cdl));

        assert_eq!(CdlData::from_metadata(&MetadataValue::from("x")), None);
        assert_eq!(CdlData::from_metadata(&MetadataValue::Map(Metadata::new())), None);
    }
}
