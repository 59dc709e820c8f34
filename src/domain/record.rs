use std::fmt;

/// One row of the download statistics report
///
/// Fields are kept as the text found in the report; the count in
/// particular is never reparsed as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub version: String,
    pub platform: String,
    pub format: String,
    pub count: String,
}

impl Record {
    /// Create a new record
    pub fn new(
        version: impl Into<String>,
        platform: impl Into<String>,
        format: impl Into<String>,
        count: impl Into<String>,
    ) -> Self {
        Record {
            version: version.into(),
            platform: platform.into(),
            format: format.into(),
            count: count.into(),
        }
    }
}

/// CSV form: `version,platform,format,count`
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.version, self.platform, self.format, self.count
        )
    }
}
