//! The styled certificate node.
//!
//! The markup mirrors the on-screen card: a white face at the 210/297
//! paper aspect, a gold double border with rounded corners, a centered
//! heading over a horizontal rule, the thank-you body naming the record
//! holder, and the issue date along the bottom. Presentation only; the
//! pipeline treats the result as an opaque styled node.

use crate::record::IdentityRecord;

/// Layout size of the node at screen resolution, in SVG user units.
pub const NODE_WIDTH: u32 = 420;
pub const NODE_HEIGHT: u32 = 594;

/// Heading shown across the top of the certificate.
pub const TITLE: &str = "Certificate of Achievement";
/// Second body line, under the personalized thank-you.
pub const THANKS_NOTE: &str = "ที่มาร่วมทดสอบระบบของเรา";
/// Label in front of the issue date.
pub const DATE_LABEL: &str = "วันที่ออกใบประกาศ:";

const FACE: &str = "#ffffff";
const BORDER_OUTER: &str = "#facc15";
const BORDER_INNER: &str = "#fde047";
const HEADING: &str = "#1f2937";
const BODY: &str = "#374151";
const FOOTER: &str = "#4b5563";
const RULE: &str = "#d1d5db";

/// The personalized first body line.
pub fn thank_you_line(record: &IdentityRecord) -> String {
    let prefix = record.prefix.map(|p| p.as_str()).unwrap_or("");
    format!(
        "ขอขอบคุณ {} {} {}",
        prefix,
        record.first_name.trim(),
        record.last_name.trim()
    )
}

/// Build the certificate markup for a record and a formatted issue date.
///
/// The record is expected to be validated already; fields are printed
/// as-is after trimming.
pub fn certificate_svg(record: &IdentityRecord, issue_date: &str) -> String {
    let heading = xml_escape(&TITLE.to_uppercase());
    let thanks = xml_escape(&thank_you_line(record));
    let note = xml_escape(THANKS_NOTE);
    let date_line = xml_escape(&format!("{} {}", DATE_LABEL, issue_date));

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <rect x="0" y="0" width="{w}" height="{h}" rx="12" fill="{face}"/>
  <rect x="4" y="4" width="412" height="586" rx="10" fill="none" stroke="{outer}" stroke-width="8"/>
  <rect x="16" y="16" width="388" height="562" rx="8" fill="none" stroke="{inner}" stroke-width="2"/>
  <text x="210" y="84" text-anchor="middle" font-family="sans-serif" font-size="24" font-weight="bold" fill="{heading_fill}">{heading}</text>
  <line x1="70" y1="104" x2="350" y2="104" stroke="{rule}" stroke-width="1"/>
  <text x="210" y="156" text-anchor="middle" font-family="sans-serif" font-size="16" fill="{body_fill}">{thanks}</text>
  <text x="210" y="182" text-anchor="middle" font-family="sans-serif" font-size="16" fill="{body_fill}">{note}</text>
  <text x="210" y="556" text-anchor="middle" font-family="sans-serif" font-size="11" fill="{footer_fill}">{date_line}</text>
</svg>
"##,
        w = NODE_WIDTH,
        h = NODE_HEIGHT,
        face = FACE,
        outer = BORDER_OUTER,
        inner = BORDER_INNER,
        heading_fill = HEADING,
        body_fill = BODY,
        footer_fill = FOOTER,
        rule = RULE,
        heading = heading,
        thanks = thanks,
        note = note,
        date_line = date_line,
    )
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
