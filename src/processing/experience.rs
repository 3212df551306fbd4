//! Years-of-experience estimation from free-text work history

use regex::Regex;

/// Word-count bands used when the text never states a number of years.
/// Checked top to bottom: (more than this many words, estimated years).
const WORD_COUNT_BANDS: [(usize, u32); 3] = [(100, 5), (50, 3), (10, 1)];

/// Rough, deterministic estimate of years of experience.
pub struct ExperienceEstimator {
    years_regex: Regex,
}

impl Default for ExperienceEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperienceEstimator {
    pub fn new() -> Self {
        // "5 years", "5+ years", "1 year", "10years"; ASCII digits only
        let years_regex = Regex::new(r"(?i)([0-9]+)\+?\s*years?")
            .expect("Invalid years regex");

        Self { years_regex }
    }

    /// Estimate whole years of experience from a work-history description.
    ///
    /// An explicit "<N> years" mention wins; otherwise longer descriptions are
    /// assumed to cover more experience.
    pub fn estimate(&self, text: &str) -> u32 {
        if text.trim().is_empty() {
            return 0;
        }

        if let Some(years) = self.explicit_years(text) {
            return years;
        }

        Self::years_from_word_count(text.split_whitespace().count())
    }

    /// First explicit "<N> year(s)" mention, if any.
    pub fn explicit_years(&self, text: &str) -> Option<u32> {
        let captures = self.years_regex.captures(text)?;
        let digits = captures.get(1)?.as_str();

        // Absurdly long digit runs saturate instead of being dropped.
        Some(digits.parse::<u32>().unwrap_or(u32::MAX))
    }

    fn years_from_word_count(word_count: usize) -> u32 {
        WORD_COUNT_BANDS
            .iter()
            .find(|(min_words, _)| word_count > *min_words)
            .map(|(_, years)| *years)
            .unwrap_or(0)
    }
}
