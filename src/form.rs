//! The admin entry form: a stateful draft of the five required fields.
//!
//! Submission is atomic from the form's perspective — it either produces a
//! complete draft for the catalog store or is refused before reaching it.

use crate::catalog::{Category, EntryDraft};
use thiserror::Error;

/// Category preselected when the form opens or resets.
pub const DEFAULT_CATEGORY: Category = Category::Action;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("'{0}' is required")]
    Missing(&'static str),
}

/// Which form field currently has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Category,
    GameUrl,
    Thumbnail,
    Description,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Category => "Category",
            FormField::GameUrl => "Game URL",
            FormField::Thumbnail => "Thumbnail URL",
            FormField::Description => "Description",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Category,
            FormField::Category => FormField::GameUrl,
            FormField::GameUrl => FormField::Thumbnail,
            FormField::Thumbnail => FormField::Description,
            FormField::Description => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Category => FormField::Title,
            FormField::GameUrl => FormField::Category,
            FormField::Thumbnail => FormField::GameUrl,
            FormField::Description => FormField::Thumbnail,
        }
    }
}

/// In-progress entry draft plus focus state.
#[derive(Debug)]
pub struct EntryForm {
    pub title: String,
    pub category: Category,
    pub game_url: String,
    pub thumbnail: String,
    pub description: String,
    pub focused: FormField,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY)
    }
}

impl EntryForm {
    pub fn new(default_category: Category) -> Self {
        Self {
            title: String::new(),
            category: default_category,
            game_url: String::new(),
            thumbnail: String::new(),
            description: String::new(),
            focused: FormField::Title,
        }
    }

    /// Append a character to the focused text field. The category field takes
    /// no free text — it cycles via `cycle_category`.
    pub fn type_char(&mut self, c: char) {
        match self.focused {
            FormField::Title => self.title.push(c),
            FormField::GameUrl => self.game_url.push(c),
            FormField::Thumbnail => self.thumbnail.push(c),
            FormField::Description => self.description.push(c),
            FormField::Category => {}
        }
    }

    /// Delete the last character of the focused text field.
    pub fn backspace(&mut self) {
        match self.focused {
            FormField::Title => {
                self.title.pop();
            }
            FormField::GameUrl => {
                self.game_url.pop();
            }
            FormField::Thumbnail => {
                self.thumbnail.pop();
            }
            FormField::Description => {
                self.description.pop();
            }
            FormField::Category => {}
        }
    }

    /// Step the category selection forward or backward through the closed set.
    pub fn cycle_category(&mut self, forward: bool) {
        let all = Category::ALL;
        let idx = all.iter().position(|&c| c == self.category).unwrap_or(0);
        let next = if forward {
            (idx + 1) % all.len()
        } else {
            (idx + all.len() - 1) % all.len()
        };
        self.category = all[next];
    }

    /// Produce a draft if every field is filled; otherwise name the first
    /// missing field and leave the form untouched.
    pub fn submit(&self) -> Result<EntryDraft, FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::Missing(FormField::Title.label()));
        }
        if self.game_url.trim().is_empty() {
            return Err(FormError::Missing(FormField::GameUrl.label()));
        }
        if self.thumbnail.trim().is_empty() {
            return Err(FormError::Missing(FormField::Thumbnail.label()));
        }
        if self.description.trim().is_empty() {
            return Err(FormError::Missing(FormField::Description.label()));
        }
        Ok(EntryDraft {
            title: self.title.clone(),
            category: self.category,
            game_url: self.game_url.clone(),
            thumbnail: self.thumbnail.clone(),
            description: self.description.clone(),
        })
    }

    /// Reset all fields to their defaults after a successful add.
    pub fn clear(&mut self, default_category: Category) {
        *self = Self::new(default_category);
    }
}
