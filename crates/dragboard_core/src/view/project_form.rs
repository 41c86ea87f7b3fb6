//! Project input form.
//!
//! # Responsibility
//! - Hold raw field values in the mounted input elements.
//! - Validate on submit and hand valid input to the store.
//!
//! # Invariants
//! - An invalid submit never reaches `ProjectStore::add_project` and keeps the inputs.
//! - A valid submit clears every input.

use crate::dom::document::PROJECT_INPUT_TEMPLATE;
use crate::dom::element::{find_by_id, ElementHandle};
use crate::dom::{InsertPosition, Mount, MountError};
use crate::model::project::ProjectId;
use crate::store::project_store::ProjectStore;
use crate::validation::{validate, Validatable};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

pub const FORM_ELEMENT_ID: &str = "user-input";
pub const DESCRIPTION_MIN_LENGTH: usize = 5;
pub const PEOPLE_MIN: i64 = 1;
pub const PEOPLE_MAX: i64 = 5;

/// Input fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    People,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Title, FormField::Description, FormField::People];

    /// Element id of the input holding this field.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

/// Submit failure shown to the user as a blocking alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// One or more fields failed validation; the store was not touched.
    InvalidInput(Vec<FormField>),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(_) => write!(f, "Invalid input, please try again!"),
        }
    }
}

impl Error for FormError {}

/// Validated values ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ProjectInput {
    title: String,
    description: String,
    people_count: u32,
}

pub struct ProjectForm {
    store: Rc<ProjectStore>,
    element: ElementHandle,
}

impl ProjectForm {
    /// Mounts the form at the start of `host_id`.
    pub fn mount(
        store: Rc<ProjectStore>,
        mount: &dyn Mount,
        host_id: &str,
    ) -> Result<Self, MountError> {
        let element = mount.mount(PROJECT_INPUT_TEMPLATE, host_id, InsertPosition::Start)?;
        element.borrow_mut().id = Some(FORM_ELEMENT_ID.to_string());
        Ok(Self { store, element })
    }

    pub fn element(&self) -> &ElementHandle {
        &self.element
    }

    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        if let Some(input) = find_by_id(&self.element, field.element_id()) {
            input
                .borrow_mut()
                .attributes
                .insert("value".to_string(), value.into());
        }
    }

    pub fn field_value(&self, field: FormField) -> String {
        let Some(input) = find_by_id(&self.element, field.element_id()) else {
            return String::new();
        };
        let value = input.borrow().attribute("value").unwrap_or_default().to_string();
        value
    }

    /// Validates the current inputs and creates a project from them.
    pub fn submit(&self) -> Result<ProjectId, FormError> {
        let input = self.gather().inspect_err(|err| {
            if let FormError::InvalidInput(fields) = err {
                warn!(
                    "event=form_submit module=view status=error reason=invalid_input fields={:?}",
                    fields
                );
            }
        })?;
        let id = self
            .store
            .add_project(input.title, input.description, input.people_count);
        self.clear_inputs();
        Ok(id)
    }

    fn gather(&self) -> Result<ProjectInput, FormError> {
        let title = self.field_value(FormField::Title).trim().to_string();
        let description = self.field_value(FormField::Description).trim().to_string();
        let people_raw = self.field_value(FormField::People).trim().to_string();
        let people = people_raw.parse::<i64>().ok();

        let mut invalid = Vec::new();
        if !validate(&Validatable::text(title.as_str()).required()) {
            invalid.push(FormField::Title);
        }
        if !validate(
            &Validatable::text(description.as_str())
                .required()
                .min_length(DESCRIPTION_MIN_LENGTH),
        ) {
            invalid.push(FormField::Description);
        }
        let people_ok = people.is_some_and(|count| {
            validate(
                &Validatable::number(count)
                    .required()
                    .range(PEOPLE_MIN, PEOPLE_MAX),
            )
        });
        if !people_ok {
            invalid.push(FormField::People);
        }

        match people.and_then(|count| u32::try_from(count).ok()) {
            Some(people_count) if invalid.is_empty() => Ok(ProjectInput {
                title,
                description,
                people_count,
            }),
            _ => Err(FormError::InvalidInput(invalid)),
        }
    }

    fn clear_inputs(&self) {
        for field in FormField::ALL {
            self.set_field(field, "");
        }
    }
}
