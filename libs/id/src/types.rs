//! Validated entity IDs and typed per-resource wrappers.
//!
//! `EntityId` is the canonical validated identifier: a strictly positive
//! integer. The typed wrappers below mirror the curriculum hierarchy so
//! IDs for different resources cannot be mixed up.

use crate::define_entity_id;
use crate::error::IdError;

/// A validated entity identifier: a strictly positive integer.
///
/// Construction goes through [`EntityId::new`] or [`EntityId::parse_str`],
/// so a held `EntityId` always satisfies the validity invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(i64);

impl EntityId {
    /// Creates an ID from a raw integer, rejecting zero and negatives.
    pub fn new(id: i64) -> Result<Self, IdError> {
        if id > 0 {
            Ok(Self(id))
        } else {
            Err(IdError::NotPositive(id))
        }
    }

    /// Returns the underlying integer value.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Parses an ID from canonical positive-integer text.
    ///
    /// The accepted grammar is `^[1-9][0-9]*$`: no sign, no leading
    /// zeros, no whitespace, base 10 only.
    pub fn parse_str(s: &str) -> Result<Self, IdError> {
        if s.is_empty() {
            return Err(IdError::Empty);
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            // Signed digit runs are numeric but not canonical; anything
            // else is plain non-numeric text.
            let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
            if unsigned != s && !unsigned.is_empty() && unsigned.bytes().all(|b| b.is_ascii_digit())
            {
                if let Ok(value) = s.parse::<i64>() {
                    if value <= 0 {
                        return Err(IdError::NotPositive(value));
                    }
                }
                return Err(IdError::NotCanonical {
                    actual: s.to_string(),
                });
            }
            return Err(IdError::NotNumeric {
                actual: s.to_string(),
            });
        }

        if s.len() > 1 && s.starts_with('0') {
            return Err(IdError::NotCanonical {
                actual: s.to_string(),
            });
        }

        let value = s.parse::<i64>().map_err(|_| IdError::OutOfRange {
            actual: s.to_string(),
        })?;

        Self::new(value)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EntityId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl From<EntityId> for i64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl serde::Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let id = i64::deserialize(deserializer)?;
        Self::new(id).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Curriculum Hierarchy
// =============================================================================

define_entity_id!(SchoolLevelId, "school_level_id");
define_entity_id!(SectionId, "section_id");
define_entity_id!(FormGradeId, "form_grade_id");
define_entity_id!(TermId, "term_id");
define_entity_id!(SubjectId, "subject_id");
define_entity_id!(TopicId, "topic_id");
define_entity_id!(SubtopicId, "subtopic_id");

// =============================================================================
// Tests
// =============================================================================
