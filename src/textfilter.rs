//! Classification of raw OCR strings into dates and Romanian plate numbers.
//!
//! OCR output is noisy: spurious spaces inside codes, partial matches, stray
//! characters. Everything that does not match a grammar is silently dropped;
//! a non-match is a normal outcome, never an error.

use lazy_static::lazy_static;
use regex::Regex;

/// The two-letter county codes that can prefix a Romanian plate. Bucharest
/// plates use the single letter `B` instead and allow 2 or 3 digits.
pub const COUNTY_CODES: [&str; 40] = [
    "AB", "AG", "AR", "BC", "BH", "BN", "BR", "BT", "BV", "BZ", "CJ", "CL", "CS", "CT", "CV",
    "DB", "DJ", "GJ", "GL", "GR", "HD", "HR", "IF", "IL", "IS", "MH", "MM", "MS", "NT", "OT",
    "PH", "SB", "SJ", "SM", "TL", "TM", "TR", "VL", "VN", "VS",
];

lazy_static! {
    /// day/month/4-digit-year or 4-digit-year/month/2-digit-day.
    static ref DATE_PATTERN: Regex =
        Regex::new(r"\d{1,2}/\d{1,2}/\d{4}|\d{4}/\d{1,2}/\d{2}").unwrap();

    /// Broad plate shape: captures both the county format and the Bucharest
    /// format before locale validation.
    static ref CANDIDATE_PATTERN: Regex =
        Regex::new(r"[A-Z]{2}\d{2}[A-Z]{3}|B\d{2,3}[A-Z]{3}").unwrap();

    /// Full locale grammar: `B` + 2-3 digits + 3 letters, or a valid county
    /// code + exactly 2 digits + 3 letters.
    static ref RO_PLATE_PATTERN: Regex = Regex::new(&ro_plate_regex()).unwrap();
}

fn ro_plate_regex() -> String {
    let mut pattern = String::from(r"B\d{2,3}[A-Z]{3}");
    for county in COUNTY_CODES {
        pattern.push('|');
        pattern.push_str(county);
        pattern.push_str(r"\d{2}[A-Z]{3}");
    }
    pattern
}

/// OCR confusion workaround: `CI` is not a county code but is how the
/// detector commonly misreads `CJ`.
fn normalize_county_confusions(candidate: &str) -> String {
    match candidate.strip_prefix("CI") {
        Some(rest) => format!("CJ{rest}"),
        None => candidate.to_string(),
    }
}

/// Validate broad candidates against the full locale grammar. First match
/// per candidate only; non-matching candidates are dropped.
fn filter_romanian_plates<S: AsRef<str>>(candidates: &[S]) -> Vec<String> {
    let mut plates = Vec::new();
    for candidate in candidates {
        let normalized = normalize_county_confusions(candidate.as_ref());
        if let Some(m) = RO_PLATE_PATTERN.find(&normalized) {
            plates.push(m.as_str().to_string());
        }
    }
    plates
}

/// Filters dates and Romanian number plate texts out of OCR batches.
///
/// The compiled grammars are process-wide immutable statics, so the filter
/// itself is a zero-sized handle that is free to construct anywhere.
pub struct TextFilter;

impl TextFilter {
    pub fn new() -> Self {
        TextFilter
    }

    /// Classify a batch of raw OCR strings into `(dates, plates)`.
    ///
    /// Dates come back in input order and are not deduplicated; plates are
    /// the candidates that survive the locale grammar, also in input order
    /// and not deduplicated (aggregation dedup is the caller's job).
    pub fn filter_dates_and_plates<S: AsRef<str>>(
        &self,
        texts: &[S],
    ) -> (Vec<String>, Vec<String>) {
        let mut dates = Vec::new();
        let mut candidates = Vec::new();

        for text in texts {
            // Strip every inner space, not just the ends; OCR loves to
            // insert them in the middle of plate codes.
            let compact = text.as_ref().replace(' ', "");

            if let Some(m) = DATE_PATTERN.find(&compact) {
                dates.push(m.as_str().to_string());
            }

            if let Some(m) = CANDIDATE_PATTERN.find(&compact) {
                candidates.push(m.as_str().to_string());
            }
        }

        let plates = filter_romanian_plates(&candidates);
        (dates, plates)
    }

    /// Date tokens only, for text taken from the frame margins.
    pub fn filter_dates<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        let mut dates = Vec::new();
        for text in texts {
            let compact = text.as_ref().replace(' ', "");
            if let Some(m) = DATE_PATTERN.find(&compact) {
                dates.push(m.as_str().to_string());
            }
        }
        dates
    }

    /// The first date found in the batch, if any.
    pub fn first_date<S: AsRef<str>>(&self, texts: &[S]) -> Option<String> {
        self.filter_dates(texts).into_iter().next()
    }
}

impl Default for TextFilter {
    fn default() -> Self {
        Self::new()
    }
}
