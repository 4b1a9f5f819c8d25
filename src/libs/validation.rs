//! Input validation for task forms.
//!
//! The store trusts its callers, so every presentation surface runs these
//! checks before dispatching `add_task` or `edit_task`. Lengths are counted in
//! characters, not bytes.

use super::task::{parse_date, Category, NewTask, ParseError, TaskPatch};
use thiserror::Error;

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Title must be at least {} characters", TITLE_MIN_CHARS)]
    TitleTooShort,
    #[error("Title must be at most {} characters", TITLE_MAX_CHARS)]
    TitleTooLong,
    #[error("Description must be at most {} characters", DESCRIPTION_MAX_CHARS)]
    DescriptionTooLong,
    #[error("Date is required")]
    DateRequired,
    #[error("Category is required")]
    CategoryRequired,
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Raw form values as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub title: String,
    pub description: Option<String>,
    pub date: String,
    pub category: String,
}

pub fn validate_title(title: &str) -> Result<String, ValidationError> {
    let title = title.trim();
    let chars = title.chars().count();
    if chars == 0 {
        return Err(ValidationError::TitleRequired);
    }
    if chars < TITLE_MIN_CHARS {
        return Err(ValidationError::TitleTooShort);
    }
    if chars > TITLE_MAX_CHARS {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(title.to_string())
}

/// Blank descriptions normalize to `None`.
pub fn validate_description(description: Option<&str>) -> Result<Option<String>, ValidationError> {
    let Some(description) = description.map(str::trim).filter(|d| !d.is_empty()) else {
        return Ok(None);
    };
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(Some(description.to_string()))
}

/// Checks a complete form and converts it into store input.
pub fn validate_new_task(form: &TaskForm) -> Result<NewTask, ValidationError> {
    let title = validate_title(&form.title)?;
    let description = validate_description(form.description.as_deref())?;
    if form.date.trim().is_empty() {
        return Err(ValidationError::DateRequired);
    }
    let date = parse_date(&form.date)?;
    if form.category.trim().is_empty() {
        return Err(ValidationError::CategoryRequired);
    }
    let category: Category = form.category.parse()?;

    Ok(NewTask {
        title,
        description,
        date,
        category,
    })
}

/// Raw edit values; `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct TaskEditForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
}

/// Checks the supplied fields of an edit. An empty description clears it.
pub fn validate_patch(form: &TaskEditForm) -> Result<TaskPatch, ValidationError> {
    let mut patch = TaskPatch::default();
    if let Some(title) = &form.title {
        patch.title = Some(validate_title(title)?);
    }
    if let Some(description) = &form.description {
        patch.description = Some(validate_description(Some(description))?);
    }
    if let Some(date) = &form.date {
        patch.date = Some(parse_date(date)?);
    }
    if let Some(category) = &form.category {
        patch.category = Some(category.parse()?);
    }
    Ok(patch)
}
