//! Editable form state for the add-player and add-record screens.
//!
//! Forms hold raw text exactly as typed. Conversion into domain input
//! (trimming, required fields, numeric coercion) happens in `roster-core`.

use std::marker::PhantomData;

use chrono::Local;
use roster_core::{InputError, NewPlayer, RecordInput, input::DATE_FORMAT};

use crate::services::lookup::LookupFeedback;

/// A fixed, ordered set of fields making up a form.
pub trait FormField: Copy + Eq + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn index(self) -> usize {
        Self::ALL.iter().position(|field| *field == self).unwrap_or(0)
    }
}

/// Text values for each field of `F` plus the focused field.
#[derive(Clone, Debug)]
pub struct Form<F> {
    values: Vec<String>,
    focus: usize,
    _fields: PhantomData<F>,
}

impl<F: FormField> Default for Form<F> {
    fn default() -> Self {
        Self {
            values: vec![String::new(); F::ALL.len()],
            focus: 0,
            _fields: PhantomData,
        }
    }
}

impl<F: FormField> Form<F> {
    pub fn value(&self, field: F) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: F, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn focused(&self) -> F {
        F::ALL[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % F::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + F::ALL.len() - 1) % F::ALL.len();
    }

    /// Append a character to the focused field. Control characters are ignored.
    pub fn insert_char(&mut self, ch: char) {
        if !ch.is_control() {
            self.values[self.focus].push(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.values[self.focus].pop();
    }

    /// Clear every field and return focus to the first one.
    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(String::clear);
        self.focus = 0;
    }

    /// `(field, value, focused)` triples in display order.
    pub fn fields(&self) -> impl Iterator<Item = (F, &str, bool)> {
        F::ALL
            .iter()
            .zip(&self.values)
            .enumerate()
            .map(|(i, (field, value))| (*field, value.as_str(), i == self.focus))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerField {
    Name,
    Role,
    Country,
}

impl FormField for PlayerField {
    const ALL: &'static [Self] = &[Self::Name, Self::Role, Self::Country];

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Role => "Role",
            Self::Country => "Country",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordField {
    Opponent,
    Runs,
    Balls,
    Wickets,
    Overs,
    Date,
}

impl FormField for RecordField {
    const ALL: &'static [Self] = &[
        Self::Opponent,
        Self::Runs,
        Self::Balls,
        Self::Wickets,
        Self::Overs,
        Self::Date,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Opponent => "Opponent",
            Self::Runs => "Runs",
            Self::Balls => "Balls",
            Self::Wickets => "Wickets",
            Self::Overs => "Overs",
            Self::Date => "Date",
        }
    }
}

/// Add-player form with the latest lookup feedback.
///
/// `generation` changes on every reset, so a lookup started from an earlier
/// instance of the form can be recognised when its result arrives.
#[derive(Clone, Debug, Default)]
pub struct PlayerForm {
    pub form: Form<PlayerField>,
    pub lookup: Option<LookupFeedback>,
    generation: u64,
}

impl PlayerForm {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn name(&self) -> &str {
        self.form.value(PlayerField::Name)
    }

    pub fn to_new_player(&self) -> Result<NewPlayer, InputError> {
        NewPlayer::new(
            self.form.value(PlayerField::Name),
            self.form.value(PlayerField::Role),
            self.form.value(PlayerField::Country),
        )
    }

    pub fn reset(&mut self) {
        self.form.clear();
        self.lookup = None;
        self.generation = self.generation.wrapping_add(1);
    }
}

/// Add-record form. The date defaults to today.
#[derive(Clone, Debug)]
pub struct RecordForm {
    pub form: Form<RecordField>,
}

impl Default for RecordForm {
    fn default() -> Self {
        let mut form = Self {
            form: Form::default(),
        };
        form.reset();
        form
    }
}

impl RecordForm {
    pub fn to_input(&self) -> Result<RecordInput, InputError> {
        let input = RecordInput {
            opponent: self.form.value(RecordField::Opponent).to_owned(),
            runs: self.form.value(RecordField::Runs).to_owned(),
            balls: self.form.value(RecordField::Balls).to_owned(),
            wickets: self.form.value(RecordField::Wickets).to_owned(),
            overs: self.form.value(RecordField::Overs).to_owned(),
            date: self.form.value(RecordField::Date).to_owned(),
        };
        input.validate()?;
        Ok(input)
    }

    /// Clear all fields and pre-fill the date with today's local date.
    pub fn reset(&mut self) {
        self.form.clear();
        self.form
            .set(RecordField::Date, Local::now().date_naive().format(DATE_FORMAT).to_string());
    }
}
