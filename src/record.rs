use serde::Serialize;

pub const GRADE_MIN: f64 = 0.0;
pub const GRADE_MAX: f64 = 10.0;
/// Inclusive pass mark: an average of exactly 6 is Approved.
pub const PASS_THRESHOLD: f64 = 6.0;

/// Punctuation rejected in id / first name / last name.
const FORBIDDEN_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '[', ']', '{', '}', ';',
    '\'', '"', '\\', '|', ',', '.', '<', '>', '/', '?',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    FirstName,
    LastName,
    Grade1,
    Grade2,
    Grade3,
}

impl Field {
    pub fn parse(name: &str) -> Option<Field> {
        match name {
            "id" => Some(Field::Id),
            "firstName" => Some(Field::FirstName),
            "lastName" => Some(Field::LastName),
            "grade1" => Some(Field::Grade1),
            "grade2" => Some(Field::Grade2),
            "grade3" => Some(Field::Grade3),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    Approved,
    Failed,
}

/// In-progress form state. `average` and `classification` stay at their
/// defaults while editing; only a successful submit populates them (on the
/// returned `FinalRecord`, never on the draft itself).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub grade1: f64,
    pub grade2: f64,
    pub grade3: f64,
    pub average: f64,
    pub classification: Option<Classification>,
}

impl Default for DraftRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            grade1: 0.0,
            grade2: 0.0,
            grade3: 0.0,
            average: 0.0,
            classification: None,
        }
    }
}

/// A draft that passed every check, with the derived fields filled in.
/// Immutable once appended to the roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub grade1: f64,
    pub grade2: f64,
    pub grade3: f64,
    pub average: f64,
    pub classification: Classification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    MissingRequiredField,
    InvalidCharacter,
    NameContainsDigit,
    GradeOutOfRange,
}

impl FailureKind {
    pub fn code(self) -> &'static str {
        match self {
            FailureKind::MissingRequiredField => "missing_required_field",
            FailureKind::InvalidCharacter => "invalid_character",
            FailureKind::NameContainsDigit => "name_contains_digit",
            FailureKind::GradeOutOfRange => "grade_out_of_range",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl ValidationFailure {
    fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Non-numeric text maps to NaN rather than a panic or a silent zero; NaN is
/// outside [GRADE_MIN, GRADE_MAX], so an unparseable grade can never reach a
/// FinalRecord.
fn parse_grade(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Apply one raw field edit to the draft. Grade fields are coerced through
/// `parse_grade`; text fields are stored verbatim. Returns a fresh draft,
/// leaving the input untouched.
pub fn normalize(draft: &DraftRecord, field: Field, raw: &str) -> DraftRecord {
    let mut next = draft.clone();
    match field {
        Field::Id => next.id = raw.to_string(),
        Field::FirstName => next.first_name = raw.to_string(),
        Field::LastName => next.last_name = raw.to_string(),
        Field::Grade1 => next.grade1 = parse_grade(raw),
        Field::Grade2 => next.grade2 = parse_grade(raw),
        Field::Grade3 => next.grade3 = parse_grade(raw),
    }
    next
}

fn contains_forbidden_char(s: &str) -> bool {
    s.chars().any(|c| FORBIDDEN_CHARS.contains(&c))
}

/// Run the ordered checks over a complete draft and, if all pass, derive the
/// average and classification. Stops at the first failing check; never
/// aggregates multiple failures and never panics on well-typed input.
pub fn validate_and_derive(draft: &DraftRecord) -> Result<FinalRecord, ValidationFailure> {
    if draft.id.trim().is_empty()
        || draft.first_name.trim().is_empty()
        || draft.last_name.trim().is_empty()
    {
        return Err(ValidationFailure::new(
            FailureKind::MissingRequiredField,
            "id, first name and last name are all required",
        ));
    }

    if contains_forbidden_char(&draft.id)
        || contains_forbidden_char(&draft.first_name)
        || contains_forbidden_char(&draft.last_name)
    {
        return Err(ValidationFailure::new(
            FailureKind::InvalidCharacter,
            "special characters are not allowed in id, first name or last name",
        ));
    }

    if draft.first_name.chars().any(|c| c.is_ascii_digit())
        || draft.last_name.chars().any(|c| c.is_ascii_digit())
    {
        return Err(ValidationFailure::new(
            FailureKind::NameContainsDigit,
            "first and last name must not contain digits",
        ));
    }

    // `contains` is false for NaN, so unparsed grades land here too.
    let grades = [draft.grade1, draft.grade2, draft.grade3];
    if grades.iter().any(|g| !(GRADE_MIN..=GRADE_MAX).contains(g)) {
        return Err(ValidationFailure::new(
            FailureKind::GradeOutOfRange,
            "grades must be between 0 and 10",
        ));
    }

    let average = (draft.grade1 + draft.grade2 + draft.grade3) / 3.0;
    let classification = if average >= PASS_THRESHOLD {
        Classification::Approved
    } else {
        Classification::Failed
    };

    Ok(FinalRecord {
        id: draft.id.clone(),
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        grade1: draft.grade1,
        grade2: draft.grade2,
        grade3: draft.grade3,
        average,
        classification,
    })
}
