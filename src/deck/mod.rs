//! Swipe-based ingredient triage.
//!
//! A deck starts with every ingredient from a shopping list as a candidate.
//! Swiping right keeps an ingredient for meal generation, swiping left drops
//! it. Every mutation that changes the kept selection is reported to the
//! registered listener, synchronously and in gesture order.

mod gesture;

pub use gesture::{SwipeGesture, ThresholdGesture, DEFAULT_SWIPE_THRESHOLD};

use crate::emoji;
use crate::error::{MealError, Result};
use crate::model::ShoppingList;
use log::debug;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckPhase {
    /// Candidates remain to be triaged
    Active,
    /// Every candidate has been swiped
    Exhausted,
}

type SelectionListener = Box<dyn FnMut(&[String]) + Send>;

pub struct IngredientDeck {
    initial: Vec<String>,
    candidates: Vec<String>,
    kept: Vec<String>,
    listener: Option<SelectionListener>,
}

impl IngredientDeck {
    /// Build a deck from ingredient names. Blank names are skipped and names
    /// that differ only in case collapse onto their first occurrence.
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut initial: Vec<String> = Vec::new();
        for name in ingredients {
            let name = name.into().trim().to_string();
            if name.is_empty() || initial.iter().any(|n| same_ingredient(n, &name)) {
                continue;
            }
            initial.push(name);
        }

        IngredientDeck {
            candidates: initial.clone(),
            initial,
            kept: Vec::new(),
            listener: None,
        }
    }

    /// Seed a deck from the product titles on a shopping list
    pub fn from_list(list: &ShoppingList) -> Self {
        Self::new(list.item_titles())
    }

    /// Register the callback that receives the full kept sequence after each
    /// selection change. Replaces any previous listener.
    pub fn on_selection_changed<F>(&mut self, listener: F)
    where
        F: FnMut(&[String]) + Send + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn kept(&self) -> &[String] {
        &self.kept
    }

    pub fn initial(&self) -> &[String] {
        &self.initial
    }

    /// Names that were swiped left
    pub fn discarded(&self) -> Vec<&str> {
        self.initial
            .iter()
            .filter(|name| !self.candidates.contains(name) && !self.kept.contains(name))
            .map(String::as_str)
            .collect()
    }

    pub fn phase(&self) -> DeckPhase {
        if self.candidates.is_empty() {
            DeckPhase::Exhausted
        } else {
            DeckPhase::Active
        }
    }

    /// The card currently on top of the deck
    pub fn top(&self) -> Option<&str> {
        self.candidates.first().map(String::as_str)
    }

    /// Remaining candidates paired with their display glyph
    pub fn cards(&self) -> impl Iterator<Item = (&str, &'static str)> + '_ {
        self.candidates
            .iter()
            .map(|name| (name.as_str(), emoji::resolve(name)))
    }

    /// Meal generation needs at least one kept ingredient
    pub fn can_generate(&self) -> bool {
        !self.kept.is_empty()
    }

    /// Apply a swipe to a candidate.
    ///
    /// Fails with [`MealError::StaleIngredient`] when `name` is not a current
    /// candidate, leaving the deck untouched.
    pub fn swipe(&mut self, name: &str, direction: SwipeDirection) -> Result<()> {
        let position = self
            .candidates
            .iter()
            .position(|candidate| same_ingredient(candidate, name))
            .ok_or_else(|| MealError::StaleIngredient(name.to_string()))?;

        let ingredient = self.candidates.remove(position);
        debug!("Swiped {:?} on '{}'", direction, ingredient);

        if direction == SwipeDirection::Right {
            self.kept.push(ingredient);
            self.notify();
        }

        Ok(())
    }

    /// Resolve the end of a drag on `name` through `gesture`. Drags that do
    /// not cross the threshold leave the deck unchanged and return `None`.
    pub fn drag_end<G>(&mut self, name: &str, offset: f64, gesture: &G) -> Result<Option<SwipeDirection>>
    where
        G: SwipeGesture + ?Sized,
    {
        match gesture.on_drag_end(offset) {
            Some(direction) => {
                self.swipe(name, direction)?;
                Ok(Some(direction))
            }
            None => Ok(None),
        }
    }

    /// Put every ingredient back and clear the selection
    pub fn reset(&mut self) {
        self.candidates = self.initial.clone();
        self.kept.clear();
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.kept);
        }
    }
}

impl fmt::Debug for IngredientDeck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngredientDeck")
            .field("candidates", &self.candidates)
            .field("kept", &self.kept)
            .field("initial", &self.initial)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

fn same_ingredient(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
