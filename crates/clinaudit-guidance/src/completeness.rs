use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use ts_rs::TS;

use clinaudit_core::models::question::QuestionSpec;

use crate::scorer::round2;

/// Content areas a well-formed audit questionnaire should cover.
/// Declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CoverageDomain {
    Demographics,
    ClinicalPresentation,
    Intervention,
    Outcomes,
    ProcessMetrics,
}

impl CoverageDomain {
    pub const ALL: [CoverageDomain; 5] = [
        CoverageDomain::Demographics,
        CoverageDomain::ClinicalPresentation,
        CoverageDomain::Intervention,
        CoverageDomain::Outcomes,
        CoverageDomain::ProcessMetrics,
    ];

    /// Lower-case substrings whose presence in a question marks the domain
    /// as covered.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            CoverageDomain::Demographics => &["age", "sex", "gender", "ethnicity"],
            CoverageDomain::ClinicalPresentation => &["diagnosis", "symptom", "presentation"],
            CoverageDomain::Intervention => &["treatment", "surgery", "procedure", "intervention"],
            CoverageDomain::Outcomes => &["outcome", "complication", "mortality", "readmission"],
            CoverageDomain::ProcessMetrics => &["time", "delay", "waiting", "duration"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CoverageDomain::Demographics => "demographics",
            CoverageDomain::ClinicalPresentation => "clinical_presentation",
            CoverageDomain::Intervention => "intervention",
            CoverageDomain::Outcomes => "outcomes",
            CoverageDomain::ProcessMetrics => "process_metrics",
        }
    }

    fn matches(self, lowered_text: &str) -> bool {
        self.keywords()
            .iter()
            .any(|keyword| lowered_text.contains(keyword))
    }
}

impl fmt::Display for CoverageDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CompletenessReport {
    /// Covered domains as a percentage of all five.
    pub completeness_score: f64,
    pub domains_covered: BTreeMap<CoverageDomain, bool>,
    /// Uncovered domains, in domain order.
    pub missing_domains: Vec<CoverageDomain>,
}

impl CompletenessReport {
    pub fn is_covered(&self, domain: CoverageDomain) -> bool {
        self.domains_covered.get(&domain).copied().unwrap_or(false)
    }
}

/// Which domains any question's text touches.
pub fn check_completeness<Q: AsRef<QuestionSpec>>(questions: &[Q]) -> CompletenessReport {
    let texts: Vec<String> = questions
        .iter()
        .map(|q| q.as_ref().question_text.to_lowercase())
        .collect();

    let domains_covered: BTreeMap<CoverageDomain, bool> = CoverageDomain::ALL
        .into_iter()
        .map(|domain| (domain, texts.iter().any(|text| domain.matches(text))))
        .collect();

    let missing_domains: Vec<CoverageDomain> = domains_covered
        .iter()
        .filter(|&(_, &covered)| !covered)
        .map(|(&domain, _)| domain)
        .collect();

    let covered = CoverageDomain::ALL.len() - missing_domains.len();
    let completeness_score = round2(covered as f64 / CoverageDomain::ALL.len() as f64 * 100.0);

    CompletenessReport {
        completeness_score,
        domains_covered,
        missing_domains,
    }
}
