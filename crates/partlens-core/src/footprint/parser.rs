use once_cell::sync::Lazy;
use regex::Regex;

/// One copper pad, in board-space mm. `number` is whatever identifier the
/// footprint text carried; it need not match a described pin.
#[derive(Debug, Clone, PartialEq)]
pub struct PadGeometry {
    pub number: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A decorative silkscreen line segment, in board-space mm.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, Default)]
pub struct FootprintGeometry {
    pub pads: Vec<PadGeometry>,
    pub outlines: Vec<OutlineSegment>,
}

impl FootprintGeometry {
    pub fn is_empty(&self) -> bool {
        self.pads.is_empty() && self.outlines.is_empty()
    }
}

static PAD_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(pad\s").unwrap());
static LINE_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(fp_line[\s(]").unwrap());
static PAD_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\(pad\s+("[^"]*"|[^\s()]+)"#).unwrap());
static AT_FIELDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s*at\s+([^\s()]+)\s+([^\s()]+)").unwrap());
static SIZE_FIELDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s*size\s+([^\s()]+)\s+([^\s()]+)").unwrap());
static START_FIELDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s*start\s+([^\s()]+)\s+([^\s()]+)").unwrap());
static END_FIELDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s*end\s+([^\s()]+)\s+([^\s()]+)").unwrap());

/// Best-effort scan of KiCad footprint text for pad and silkscreen-line
/// records. This is deliberately not a grammar parser: records that do not
/// match the expected shape are skipped, nested sub-records may appear in any
/// order between the matched anchors, and truncated input never panics.
pub fn parse_footprint(text: &str) -> FootprintGeometry {
    let mut geometry = FootprintGeometry::default();

    for m in PAD_START.find_iter(text) {
        let record = record_slice(text, m.start());
        if let Some(pad) = extract_pad(record) {
            geometry.pads.push(pad);
        }
    }

    for m in LINE_START.find_iter(text) {
        let record = record_slice(text, m.start());
        if let Some(line) = extract_line(record) {
            geometry.outlines.push(line);
        }
    }

    geometry
}

/// Slice one parenthesized record starting at `start` (which must point at a
/// '('). Falls back to end-of-input for unbalanced/truncated records.
fn record_slice(text: &str, start: usize) -> &str {
    let mut depth = 0usize;
    for (offset, byte) in text.as_bytes()[start..].iter().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return &text[start..=start + offset];
                }
            }
            _ => {}
        }
    }
    &text[start..]
}

fn extract_pad(record: &str) -> Option<PadGeometry> {
    let number = PAD_NUMBER
        .captures(record)
        .map(|c| c[1].trim_matches('"').to_string())?;
    // First two fields of (at ...); a trailing rotation field is ignored.
    let at = AT_FIELDS.captures(record)?;
    let size = SIZE_FIELDS.captures(record)?;

    let width = number_or_zero(&size[1]);
    let height = number_or_zero(&size[2]);
    if width <= 0.0 || height <= 0.0 {
        // Degenerate pads are dropped rather than rendered at zero size.
        return None;
    }

    Some(PadGeometry {
        number,
        x: number_or_zero(&at[1]),
        y: number_or_zero(&at[2]),
        width,
        height,
    })
}

fn extract_line(record: &str) -> Option<OutlineSegment> {
    let start = START_FIELDS.captures(record)?;
    let end = END_FIELDS.captures(record)?;
    Some(OutlineSegment {
        x1: number_or_zero(&start[1]),
        y1: number_or_zero(&start[2]),
        x2: number_or_zero(&end[1]),
        y2: number_or_zero(&end[2]),
    })
}

fn number_or_zero(field: &str) -> f64 {
    field.parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOIC_FRAGMENT: &str = r#"(footprint "SOIC-4_Test"
  (layer "F.Cu")
  (descr "not a pad, not a line")
  (fp_line (start -2.0 -1.5) (end 2.0 -1.5) (stroke (width 0.12) (type solid)) (layer "F.SilkS"))
  (fp_line (start -2.0 1.5) (end 2.0 1.5) (stroke (width 0.12) (type solid)) (layer "F.SilkS"))
  (pad "1" smd rect (at -2.0 0.0) (size 0.5 1.2) (layers "F.Cu" "F.Paste" "F.Mask"))
  (pad "2" smd rect (at -2.0 1.27 90) (size 0.5 1.2) (layers "F.Cu"))
  (pad "3" smd rect (layers "F.Cu") (at 2.0 0.0) (size 0.5 1.2))
  (pad "4" smd rect (at 2.0 1.27) (size 0.5 1.2))
  (model "soic.step" (offset (xyz 0 0 0)))
)"#;

    #[test]
    fn test_extracts_all_well_formed_records() {
        let geometry = parse_footprint(SOIC_FRAGMENT);
        assert_eq!(geometry.pads.len(), 4);
        assert_eq!(geometry.outlines.len(), 2);

        assert_eq!(geometry.pads[0].number, "1");
        assert_eq!(geometry.pads[0].x, -2.0);
        assert_eq!(geometry.pads[0].y, 0.0);
        assert_eq!(geometry.pads[0].width, 0.5);
        assert_eq!(geometry.pads[0].height, 1.2);

        assert_eq!(geometry.outlines[0].x1, -2.0);
        assert_eq!(geometry.outlines[0].y1, -1.5);
        assert_eq!(geometry.outlines[0].x2, 2.0);
        assert_eq!(geometry.outlines[0].y2, -1.5);
    }

    #[test]
    fn test_rotation_field_is_ignored() {
        let geometry = parse_footprint(SOIC_FRAGMENT);
        assert_eq!(geometry.pads[1].x, -2.0);
        assert_eq!(geometry.pads[1].y, 1.27);
    }

    #[test]
    fn test_sub_records_in_any_order() {
        // Pad "3" has (layers ...) before (at ...).
        let geometry = parse_footprint(SOIC_FRAGMENT);
        assert_eq!(geometry.pads[2].number, "3");
        assert_eq!(geometry.pads[2].x, 2.0);
    }

    #[test]
    fn test_unquoted_pad_number() {
        let geometry = parse_footprint(r#"(pad 7 smd rect (at 1.0 2.0) (size 0.3 0.3))"#);
        assert_eq!(geometry.pads.len(), 1);
        assert_eq!(geometry.pads[0].number, "7");
    }

    #[test]
    fn test_empty_and_matchless_input() {
        assert!(parse_footprint("").is_empty());
        assert!(parse_footprint("no records here at all").is_empty());
        assert!(parse_footprint("(footprint \"X\" (attr smd))").is_empty());
    }

    #[test]
    fn test_malformed_records_are_skipped_not_fatal() {
        let geometry = parse_footprint(
            r#"(pad "1" smd rect (size 0.5 1.2))
               (pad "2" smd rect (at 1.0 1.0) (size 0.5 1.2))
               (fp_line (start 0 0))"#,
        );
        // Pad "1" lacks (at ...), the line lacks (end ...).
        assert_eq!(geometry.pads.len(), 1);
        assert_eq!(geometry.pads[0].number, "2");
        assert!(geometry.outlines.is_empty());
    }

    #[test]
    fn test_truncated_record_does_not_panic() {
        let geometry = parse_footprint(r#"(pad "5" smd rect (at 1.5 -0.5) (size 0.4 0.9"#);
        assert_eq!(geometry.pads.len(), 1);
        assert_eq!(geometry.pads[0].x, 1.5);
        assert_eq!(geometry.pads[0].height, 0.9);
    }

    #[test]
    fn test_non_positive_pad_size_is_dropped() {
        let geometry = parse_footprint(
            r#"(pad "1" smd rect (at 0 0) (size 0 1.2))
               (pad "2" smd rect (at 0 0) (size 0.5 -1.0))
               (pad "3" smd rect (at 0 0) (size 0.5 1.2))"#,
        );
        assert_eq!(geometry.pads.len(), 1);
        assert_eq!(geometry.pads[0].number, "3");
    }

    #[test]
    fn test_unparsable_number_becomes_zero() {
        let geometry = parse_footprint(r#"(pad "1" smd rect (at oops 2.5) (size 0.5 1.2))"#);
        assert_eq!(geometry.pads.len(), 1);
        assert_eq!(geometry.pads[0].x, 0.0);
        assert_eq!(geometry.pads[0].y, 2.5);
    }
}
