//! Content-filter verdict types.
//!
//! The same verdict shape appears twice in the provider protocol: attached
//! to a successful-but-filtered completion, and nested inside the structured
//! error payload when the request itself is rejected. Both paths share the
//! single fixed-order scan in [`ContentFilterResults::first_flagged`] so the
//! two cannot drift.

use serde::{Deserialize, Serialize};

/// Severity level assigned by the provider's content filter.
///
/// Parses from the provider's lowercase wire form and displays capitalized,
/// the casing used in caller-facing messages.
///
/// # Examples
///
/// ```
/// use savonarola_core::Severity;
///
/// let severity: Severity = serde_json::from_str("\"high\"").unwrap();
/// assert_eq!(format!("{}", severity), "High");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// No harmful content detected
    Safe,
    /// Low-severity harmful content
    Low,
    /// Medium-severity harmful content
    Medium,
    /// High-severity harmful content
    High,
}

/// Verdict for a single filter category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentFilterResult {
    /// Whether this category tripped the filter
    pub filtered: bool,
    /// Severity level assigned to this category
    pub severity: Severity,
}

/// Per-category filter verdicts.
///
/// Field names match the provider's wire keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentFilterResults {
    /// Hate and discrimination
    pub hate: ContentFilterResult,
    /// Self-harm
    pub self_harm: ContentFilterResult,
    /// Sexual content
    pub sexual: ContentFilterResult,
    /// Violence
    pub violence: ContentFilterResult,
}

impl ContentFilterResults {
    /// Verdict for a single category.
    pub fn get(&self, category: FilterCategory) -> &ContentFilterResult {
        match category {
            FilterCategory::Hate => &self.hate,
            FilterCategory::SelfHarm => &self.self_harm,
            FilterCategory::Sexual => &self.sexual,
            FilterCategory::Violence => &self.violence,
        }
    }

    /// First category whose filter tripped, scanning in the fixed order
    /// hate, self-harm, sexual, violence.
    ///
    /// # Examples
    ///
    /// ```
    /// use savonarola_core::{ContentFilterResult, ContentFilterResults, FilterCategory, Severity};
    ///
    /// let clear = ContentFilterResult { filtered: false, severity: Severity::Safe };
    /// let results = ContentFilterResults {
    ///     hate: clear,
    ///     self_harm: clear,
    ///     sexual: clear,
    ///     violence: ContentFilterResult { filtered: true, severity: Severity::Medium },
    /// };
    ///
    /// let (category, verdict) = results.first_flagged().unwrap();
    /// assert_eq!(category, FilterCategory::Violence);
    /// assert_eq!(verdict.severity, Severity::Medium);
    /// ```
    pub fn first_flagged(&self) -> Option<(FilterCategory, ContentFilterResult)> {
        FilterCategory::ORDERED.into_iter().find_map(|category| {
            let verdict = *self.get(category);
            verdict.filtered.then_some((category, verdict))
        })
    }
}

/// The four filter categories.
///
/// Displays as the category label used in caller-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FilterCategory {
    /// Hate and discrimination
    #[display("Hate")]
    Hate,
    /// Self-harm
    #[display("Self-harm")]
    SelfHarm,
    /// Sexual content
    #[display("Inappropriate sexual")]
    Sexual,
    /// Violence
    #[display("Violent")]
    Violence,
}

impl FilterCategory {
    /// Inspection order shared by the result-filter and request-filter paths.
    pub const ORDERED: [FilterCategory; 4] = [
        FilterCategory::Hate,
        FilterCategory::SelfHarm,
        FilterCategory::Sexual,
        FilterCategory::Violence,
    ];
}
