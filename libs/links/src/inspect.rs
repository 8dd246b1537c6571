//! Development-time URL diagnostics.
//!
//! Inspects a relative URL for the parameter values that indicate an
//! upstream bug: the literal strings `NaN`, `undefined`, and `null` that
//! leak into query strings when an unvalidated value is stringified.
//! Intended for debug panels and log output, not for control flow.

use eduscheme_id::{Candidate, EntityId};

use crate::query::parse_query;

/// A recognizable bad value in a query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamProblem {
    /// The literal string `NaN`; the backend will reject it with a 422.
    LiteralNan,
    /// The literal string `undefined`; indicates missing upstream data.
    LiteralUndefined,
    /// The literal string `null`; likely a dropped lookup result.
    LiteralNull,
}

impl ParamProblem {
    /// Classifies a raw parameter value.
    #[must_use]
    pub fn detect(value: &str) -> Option<Self> {
        match value {
            "NaN" => Some(ParamProblem::LiteralNan),
            "undefined" => Some(ParamProblem::LiteralUndefined),
            "null" => Some(ParamProblem::LiteralNull),
            _ => None,
        }
    }

    /// A short description of why the value is a problem.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            ParamProblem::LiteralNan => "literal 'NaN' value, will cause 422 API errors",
            ParamProblem::LiteralUndefined => "literal 'undefined' value, indicates missing data",
            ParamProblem::LiteralNull => "literal 'null' value, may cause validation errors",
        }
    }
}

/// One query parameter as seen by the inspector.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamReport {
    /// Parameter name.
    pub name: String,
    /// Raw decoded value.
    pub value: String,
    /// The value coerced through the strict identifier grammar, if it
    /// passes.
    pub parsed_id: Option<EntityId>,
    /// Detected problem, if any.
    pub problem: Option<ParamProblem>,
}

/// Inspection result for a relative URL.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlReport {
    /// Path portion of the URL.
    pub path: String,
    /// Every query parameter, in order of appearance.
    pub params: Vec<ParamReport>,
}

impl UrlReport {
    /// Returns true if any parameter carries a recognizable bad value.
    #[must_use]
    pub fn has_problems(&self) -> bool {
        self.params.iter().any(|p| p.problem.is_some())
    }

    /// Iterates over the problematic parameters only.
    pub fn problems(&self) -> impl Iterator<Item = &ParamReport> {
        self.params.iter().filter(|p| p.problem.is_some())
    }
}

/// Inspects a relative URL (path plus optional query string).
#[must_use]
pub fn inspect_url(url: &str) -> UrlReport {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url, ""),
    };

    let params = parse_query(query)
        .into_iter()
        .map(|(name, value)| {
            let parsed_id = Candidate::Text(value.clone()).to_valid_id();
            let problem = ParamProblem::detect(&value);
            ParamReport {
                name,
                value,
                parsed_id,
                problem,
            }
        })
        .collect();

    UrlReport {
        path: path.to_string(),
        params,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_url_has_no_problems() {
        let report = inspect_url("/admin/terms?form_grade_id=5");
        assert!(!report.has_problems());
        assert_eq!(report.path, "/admin/terms");
        assert_eq!(report.params.len(), 1);
        assert_eq!(report.params[0].parsed_id.map(|id| id.get()), Some(5));
    }

    #[test]
    fn flags_literal_nan() {
        let report = inspect_url("/admin/terms?form_grade_id=NaN");
        assert!(report.has_problems());
        let param = report.problems().next().unwrap();
        assert_eq!(param.problem, Some(ParamProblem::LiteralNan));
        assert_eq!(param.parsed_id, None);
    }

    #[test]
    fn flags_undefined_and_null() {
        let report = inspect_url("/admin/subjects?term_id=undefined&page=null");
        let problems: Vec<_> = report.problems().map(|p| p.problem).collect();
        assert_eq!(
            problems,
            vec![
                Some(ParamProblem::LiteralUndefined),
                Some(ParamProblem::LiteralNull)
            ]
        );
    }

    #[test]
    fn url_without_query_is_clean() {
        let report = inspect_url("/admin/terms");
        assert_eq!(report.path, "/admin/terms");
        assert!(report.params.is_empty());
        assert!(!report.has_problems());
    }

    #[test]
    fn non_id_text_is_reported_without_problem() {
        let report = inspect_url("/admin/subjects?sort=name");
        assert!(!report.has_problems());
        assert_eq!(report.params[0].parsed_id, None);
        assert_eq!(report.params[0].value, "name");
    }
}
