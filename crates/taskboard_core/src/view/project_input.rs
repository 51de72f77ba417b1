//! Project creation form.
//!
//! # Responsibility
//! - Validate raw form text into a new project request.
//! - Hand accepted input to the store and reset the form.
//!
//! # Invariants
//! - Rejected input leaves the form fields untouched and the store unchanged.
//! - Accepted input clears all three fields.

use crate::config::InputRules;
use crate::model::project::ProjectId;
use crate::store::project_store::ProjectStore;
use crate::validation::{check, ConstraintViolation, Validatable};
use crate::view::component::Component;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Coarse message shown to the user for any rejected submission.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input, please try again!";

/// Validated creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Reason a submission was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    Title(ConstraintViolation),
    Description(ConstraintViolation),
    People(ConstraintViolation),
    /// People count passed its bounds but is not a non-negative whole number.
    PeopleNotWhole(f64),
}

impl InputError {
    /// Form field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Description(_) => "description",
            Self::People(_) | Self::PeopleNotWhole(_) => "people",
        }
    }

    /// Message suitable for a blocking alert.
    pub fn user_message(&self) -> &'static str {
        INVALID_INPUT_MESSAGE
    }
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title(err) | Self::Description(err) | Self::People(err) => {
                write!(f, "{INVALID_INPUT_MESSAGE} ({}: {err})", self.field())
            }
            Self::PeopleNotWhole(value) => write!(
                f,
                "{INVALID_INPUT_MESSAGE} (people: {value} is not a whole number)"
            ),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Title(err) | Self::Description(err) | Self::People(err) => Some(err),
            Self::PeopleNotWhole(_) => None,
        }
    }
}

/// Current field contents, for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInputView {
    pub element_id: &'static str,
    pub title: String,
    pub description: String,
    pub people: String,
}

/// Raw text held by the creation form.
#[derive(Debug, Clone, Default)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub people: String,
    rules: InputRules,
}

impl ProjectInput {
    /// Creates an empty form. `rules` are trusted as given; use `try_new`
    /// for rules that did not come through `BoardConfig`.
    pub fn new(rules: InputRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Creates an empty form after checking that `rules` admit some count.
    ///
    /// # Errors
    /// - Returns the `InputRules::check` message for an unsatisfiable range.
    pub fn try_new(rules: InputRules) -> Result<Self, String> {
        rules.check()?;
        Ok(Self::new(rules))
    }

    /// Replaces all three raw field values.
    pub fn fill(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) {
        self.title = title.into();
        self.description = description.into();
        self.people = people.into();
    }

    /// Validates the current fields without touching the store.
    pub fn gather(&self) -> Result<NewProject, InputError> {
        let people = coerce_number(&self.people);

        check(&Validatable::new(self.title.as_str()).required()).map_err(InputError::Title)?;
        check(
            &Validatable::new(self.description.as_str())
                .required()
                .min_length(self.rules.description_min_length),
        )
        .map_err(InputError::Description)?;
        check(
            &Validatable::new(people)
                .required()
                .min(self.rules.people_min)
                .max(self.rules.people_max),
        )
        .map_err(InputError::People)?;

        if people.fract() != 0.0 || people < 0.0 || people > f64::from(u32::MAX) {
            return Err(InputError::PeopleNotWhole(people));
        }

        Ok(NewProject {
            title: self.title.clone(),
            description: self.description.clone(),
            people: people as u32,
        })
    }

    /// Validates, adds the project to `store`, and clears the form.
    ///
    /// # Errors
    /// - Returns the first failing field; the form and store are unchanged.
    pub fn submit(&mut self, store: &mut ProjectStore) -> Result<ProjectId, InputError> {
        let request = match self.gather() {
            Ok(request) => request,
            Err(err) => {
                warn!(
                    "event=input_rejected module=input status=error field={} reason={}",
                    err.field(),
                    err
                );
                return Err(err);
            }
        };

        let id = store.add_project(request.title, request.description, request.people);
        debug!("event=input_submitted module=input status=ok id={}", id);
        self.clear();
        Ok(id)
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

impl Component for ProjectInput {
    type View = ProjectInputView;

    fn render_content(&self) -> ProjectInputView {
        ProjectInputView {
            element_id: "user-input",
            title: self.title.clone(),
            description: self.description.clone(),
            people: self.people.clone(),
        }
    }
}

/// Numeric coercion of a form field: blank is zero, decimal text parses,
/// anything else is NaN.
///
/// Only decimal notation is understood; prefixed forms such as `0x5` or
/// `0b11` become NaN and fail validation.
fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}
