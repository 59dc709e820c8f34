//! Download statistics extraction
//!
//! The report is a fixed-shape HTML table in which every download row is
//! written over two lines: the first carries the path of the downloaded
//! archive, the second a right-aligned cell with the download count.
//!
//! ```text
//! <tr><td>/tracecompass/releases/1.0.0/rcp/trace-compass-1.0.0-20150610-1449-linux.gtk.x86_64.tar.gz</td>
//!     <td align="right">3</td></tr>
//! ```
//!
//! Rows that do not have exactly this shape are skipped whole.

use regex::{Captures, Regex};

use crate::config::ExtractConfig;
use crate::domain::Record;
use crate::error::Result;

/// Builds the record pattern for the given path segment.
///
/// Archive names read `<product>-<version>-<date>-<time>-<platform>.<classifier…>.<ext>`;
/// only the platform and the archive family are captured.
fn record_pattern(report_root: &str) -> String {
    format!(
        concat!(
            r"\b{root}/(?P<version>[0-9][0-9A-Za-z.]*)/",
            r#"(?:[^/\s"'<>]+/)*"#,
            r#"[^/\s"'<>]*?-\d+-\d+-(?P<platform>[A-Za-z0-9_]+)\."#,
            r"(?:[A-Za-z0-9_]+\.)*?(?P<format>tar|zip)\b[^\n]*\n",
            r#"[ \t]*<td align="right">[ \t]*(?P<count>\d+)[ \t]*</td>"#,
        ),
        root = regex::escape(report_root)
    )
}

/// Extracts download records from a statistics report
#[derive(Debug, Clone)]
pub struct StatExtractor {
    pattern: Regex,
}

impl StatExtractor {
    /// Create an extractor for the given configuration
    pub fn new(config: &ExtractConfig) -> Result<Self> {
        let pattern = Regex::new(&record_pattern(&config.report_root))?;
        Ok(StatExtractor { pattern })
    }

    /// Lazily yields every record found in `text`, in input order.
    ///
    /// Unrelated lines are skipped; a report without any record yields
    /// an empty sequence.
    pub fn extract<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Record> + 'a {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| record_from(&caps))
            .inspect(|record| log::debug!("extracted record {}", record))
    }

    /// Renders every record as a CSV line terminated by `\n`.
    pub fn extract_csv(&self, text: &str) -> String {
        self.extract(text).fold(String::new(), |mut csv, record| {
            csv.push_str(&record.to_string());
            csv.push('\n');
            csv
        })
    }
}

fn record_from(caps: &Captures<'_>) -> Option<Record> {
    Some(Record::new(
        caps.name("version")?.as_str(),
        caps.name("platform")?.as_str(),
        caps.name("format")?.as_str(),
        caps.name("count")?.as_str(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> StatExtractor {
        StatExtractor::new(&ExtractConfig::default()).unwrap()
    }

    #[test]
    fn test_single_record() {
        let text = concat!(
            "<tr><td>/tracecompass/releases/1.0.0/rcp/trace-compass-1.0.0-20150610-1449-linux.gtk.x86_64.tar.gz</td>\n",
            "    <td align=\"right\">3</td></tr>\n",
        );
        let records: Vec<Record> = extractor().extract(text).collect();
        assert_eq!(records, vec![Record::new("1.0.0", "linux", "tar", "3")]);
    }

    #[test]
    fn test_zip_archive() {
        let text = concat!(
            "<td>/tracecompass/releases/1.0.0/rcp/trace-compass-1.0.0-20150610-1449-win32.win32.x86.zip</td>\n",
            "<td align=\"right\">  12</td>\n",
        );
        let records: Vec<Record> = extractor().extract(text).collect();
        assert_eq!(records, vec![Record::new("1.0.0", "win32", "zip", "12")]);
    }

    #[test]
    fn test_no_records() {
        let text = "<html><body><p>nothing to see</p></body></html>\n";
        assert_eq!(extractor().extract(text).count(), 0);
        assert_eq!(extractor().extract_csv(text), "");
    }

    #[test]
    fn test_count_on_same_line_is_skipped() {
        let text = "<td>/releases/1.0.0/rcp/trace-compass-1.0.0-20150610-1449-linux.gtk.x86_64.tar.gz</td><td align=\"right\">3</td>\n";
        assert_eq!(extractor().extract(text).count(), 0);
    }

    #[test]
    fn test_malformed_count_cell_is_skipped() {
        let text = concat!(
            "<td>/releases/1.0.0/rcp/trace-compass-1.0.0-20150610-1449-linux.gtk.x86_64.tar.gz</td>\n",
            "<td align=\"left\">3</td>\n",
        );
        assert_eq!(extractor().extract(text).count(), 0);
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = concat!(
            "<td>/releases/1.1.0/rcp/trace-compass-1.1.0-20150909-1200-macosx.cocoa.x86_64.tar.gz</td>\r\n",
            "<td align=\"right\">5</td>\r\n",
        );
        assert_eq!(extractor().extract_csv(text), "1.1.0,macosx,tar,5\n");
    }

    #[test]
    fn test_custom_report_root() {
        let config = ExtractConfig {
            report_root: "stable".to_string(),
        };
        let extractor = StatExtractor::new(&config).unwrap();
        let text = concat!(
            "/stable/2.0.0/rcp/trace-compass-2.0.0-20160608-0800-linux.gtk.x86.tar.gz\n",
            "<td align=\"right\">1</td>\n",
        );
        assert_eq!(extractor.extract_csv(text), "2.0.0,linux,tar,1\n");
    }
}
