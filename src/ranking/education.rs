//! Keyword-based education field classification for the dashboard breakdown

use crate::error::{Result, ResumeRankerError};
use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Category used when no keyword matches or the text is blank.
pub const OTHER_CATEGORY: &str = "Other / Not Specified";

/// Categories in priority order; the first category with any hit wins.
const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Computer Science",
        &[
            "computer science",
            "informatics",
            "software engineering",
            "artificial intelligence",
            "data science",
            "information system",
        ],
    ),
    (
        "Engineering",
        &["engineering", "electrical", "network", "telecommunications", "mechanical", "civil"],
    ),
    (
        "Business",
        &["business", "management", "mba", "marketing", "finance", "accounting"],
    ),
    ("Mathematics & Statistics", &["mathematics", "statistics", "actuarial"]),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Multi-pattern, case-insensitive classifier over education text.
pub struct EducationClassifier {
    matcher: AhoCorasick,
    categories: Vec<String>,
    /// Category index for each pattern id
    pattern_category: Vec<usize>,
}

impl EducationClassifier {
    /// Create a classifier with the built-in category table
    pub fn new() -> Result<Self> {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .map(|(name, keywords)| {
                (name.to_string(), keywords.iter().map(|k| k.to_string()).collect())
            })
            .collect();
        Self::with_categories(categories)
    }

    /// Create a classifier from `(category, keywords)` pairs in priority order
    pub fn with_categories(categories: Vec<(String, Vec<String>)>) -> Result<Self> {
        let mut names = Vec::with_capacity(categories.len());
        let mut patterns = Vec::new();
        let mut pattern_category = Vec::new();

        for (index, (name, keywords)) in categories.into_iter().enumerate() {
            names.push(name);
            for keyword in keywords {
                patterns.push(keyword);
                pattern_category.push(index);
            }
        }

        // Standard match kind so overlapping hits ("software engineering" vs
        // "engineering") are all reported and priority decides.
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| ResumeRankerError::Processing(format!("Failed to build education matcher: {}", e)))?;

        Ok(Self {
            matcher,
            categories: names,
            pattern_category,
        })
    }

    /// Category for a single education description.
    pub fn classify(&self, education: &str) -> &str {
        self.matcher
            .find_overlapping_iter(education)
            .map(|m| self.pattern_category[m.pattern().as_usize()])
            .min()
            .map(|index| self.categories[index].as_str())
            .unwrap_or(OTHER_CATEGORY)
    }

    /// Count per category, largest first; ties keep category priority order.
    pub fn breakdown<'t>(&self, educations: impl IntoIterator<Item = &'t str>) -> Vec<CategoryCount> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for education in educations {
            *counts.entry(self.classify(education)).or_insert(0) += 1;
        }

        let mut breakdown: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(category, count)| CategoryCount {
                category: category.to_string(),
                count,
            })
            .collect();

        breakdown.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| self.priority(&a.category).cmp(&self.priority(&b.category)))
        });
        breakdown
    }

    fn priority(&self, category: &str) -> usize {
        self.categories
            .iter()
            .position(|c| c == category)
            .unwrap_or(self.categories.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_fields() {
        let classifier = EducationClassifier::new().unwrap();

        assert_eq!(classifier.classify("BSc Computer Science, MIT"), "Computer Science");
        assert_eq!(classifier.classify("MEng Electrical"), "Engineering");
        assert_eq!(classifier.classify("MBA, Wharton"), "Business");
        assert_eq!(classifier.classify("PhD in STATISTICS"), "Mathematics & Statistics");
    }

    #[test]
    fn test_priority_beats_position() {
        let classifier = EducationClassifier::new().unwrap();

        // "engineering" matches too, but Computer Science comes first
        assert_eq!(classifier.classify("Software Engineering degree"), "Computer Science");
        assert_eq!(classifier.classify("Finance minor, Data Science major"), "Computer Science");
    }

    #[test]
    fn test_unmatched_falls_back_to_other() {
        let classifier = EducationClassifier::new().unwrap();

        assert_eq!(classifier.classify("BA History"), OTHER_CATEGORY);
        assert_eq!(classifier.classify(""), OTHER_CATEGORY);
    }

    #[test]
    fn test_breakdown_ordering() {
        let classifier = EducationClassifier::new().unwrap();
        let educations = [
            "BA Marketing",
            "Computer Science",
            "BSc Informatics",
            "Civil Engineering",
            "Accounting",
            "Philosophy",
        ];

        let breakdown = classifier.breakdown(educations);

        assert_eq!(
            breakdown,
            vec![
                CategoryCount { category: "Computer Science".to_string(), count: 2 },
                CategoryCount { category: "Business".to_string(), count: 2 },
                CategoryCount { category: "Engineering".to_string(), count: 1 },
                CategoryCount { category: OTHER_CATEGORY.to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_custom_categories() {
        let classifier = EducationClassifier::with_categories(vec![(
            "Design".to_string(),
            vec!["design".to_string(), "arts".to_string()],
        )])
        .unwrap();

        assert_eq!(classifier.classify("Fine Arts"), "Design");
        assert_eq!(classifier.classify("Law"), OTHER_CATEGORY);
    }
}
