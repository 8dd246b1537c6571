//! Named route builders for the admin screens.
//!
//! Each builder is a pure function from an identifier candidate to a
//! navigation URL. Builders that place the ID in a path segment validate
//! it up front: interpolating an invalid ID into a path is exactly the
//! class of broken link the builder layer exists to prevent.

use eduscheme_id::{Candidate, EntityId, FormGradeId, SchoolLevelId, SubjectId, TermId};

use crate::build::create_safe_url;
use crate::error::LinkError;

/// Validates a path-segment identifier, naming the parameter on failure.
fn require_id(name: &str, value: Candidate) -> Result<EntityId, LinkError> {
    value.to_valid_id().ok_or_else(|| LinkError::InvalidIdParam {
        name: name.to_string(),
        value: value.to_string(),
    })
}

// =============================================================================
// Terms
// =============================================================================

/// Term list filtered to one form/grade.
pub fn terms_for_form_grade(form_grade_id: impl Into<Candidate>) -> Result<String, LinkError> {
    create_safe_url("/admin/terms", [(FormGradeId::QUERY_KEY, form_grade_id.into())])
}

/// New-term form pre-bound to a form/grade.
pub fn new_term_for_form_grade(form_grade_id: impl Into<Candidate>) -> Result<String, LinkError> {
    create_safe_url(
        "/admin/terms/new",
        [(FormGradeId::QUERY_KEY, form_grade_id.into())],
    )
}

/// Edit screen for a term.
pub fn edit_term(term_id: impl Into<Candidate>) -> Result<String, LinkError> {
    let id = require_id(TermId::QUERY_KEY, term_id.into())?;
    Ok(format!("/admin/terms/{id}/edit"))
}

// =============================================================================
// Subjects
// =============================================================================

/// Subject list filtered to one term.
pub fn subjects_for_term(term_id: impl Into<Candidate>) -> Result<String, LinkError> {
    create_safe_url("/admin/subjects", [(TermId::QUERY_KEY, term_id.into())])
}

/// New-subject form pre-bound to a term.
pub fn new_subject_for_term(term_id: impl Into<Candidate>) -> Result<String, LinkError> {
    create_safe_url("/admin/subjects/new", [(TermId::QUERY_KEY, term_id.into())])
}

/// Edit screen for a subject.
pub fn edit_subject(subject_id: impl Into<Candidate>) -> Result<String, LinkError> {
    let id = require_id(SubjectId::QUERY_KEY, subject_id.into())?;
    Ok(format!("/admin/subjects/{id}/edit"))
}

/// Detail view for a subject.
pub fn view_subject(subject_id: impl Into<Candidate>) -> Result<String, LinkError> {
    let id = require_id(SubjectId::QUERY_KEY, subject_id.into())?;
    Ok(format!("/admin/subjects/{id}"))
}

// =============================================================================
// Forms / Grades
// =============================================================================

/// Form/grade list filtered to one school level.
pub fn forms_grades_for_school_level(
    school_level_id: impl Into<Candidate>,
) -> Result<String, LinkError> {
    create_safe_url(
        "/admin/forms-grades",
        [(SchoolLevelId::QUERY_KEY, school_level_id.into())],
    )
}

/// New-form/grade form pre-bound to a school level.
pub fn new_form_grade_for_school_level(
    school_level_id: impl Into<Candidate>,
) -> Result<String, LinkError> {
    create_safe_url(
        "/admin/forms-grades/new",
        [(SchoolLevelId::QUERY_KEY, school_level_id.into())],
    )
}

/// Edit screen for a form/grade.
pub fn edit_form_grade(form_grade_id: impl Into<Candidate>) -> Result<String, LinkError> {
    let id = require_id(FormGradeId::QUERY_KEY, form_grade_id.into())?;
    Ok(format!("/admin/forms-grades/{id}/edit"))
}

/// Detail view for a form/grade.
pub fn view_form_grade(form_grade_id: impl Into<Candidate>) -> Result<String, LinkError> {
    let id = require_id(FormGradeId::QUERY_KEY, form_grade_id.into())?;
    Ok(format!("/admin/forms-grades/{id}"))
}
