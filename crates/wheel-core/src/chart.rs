use crate::category::{Category, CategoryId};
use crate::geometry::{self, LabelAnchor, Point, SegmentAddress, TOTAL_RINGS, Wedge};
use crate::selection::{Fill, Selection};
use std::collections::BTreeMap;
use thiserror::Error;

pub const MIN_CATEGORIES: usize = 1;
pub const MAX_CATEGORIES: usize = 10;

pub type Selections = BTreeMap<CategoryId, Selection>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChartError {
    #[error("Category '{0}' already exists")]
    DuplicateCategory(CategoryId),
    #[error("Unknown category '{0}'")]
    UnknownCategory(CategoryId),
    #[error("A wheel holds at most {} categories", MAX_CATEGORIES)]
    TooManyCategories,
    #[error("A wheel needs at least {} category", MIN_CATEGORIES)]
    TooFewCategories,
}

/// Checks that a category list fits one wheel: unique ids, between `MIN_CATEGORIES` and
/// `MAX_CATEGORIES` entries.
pub fn validate_categories(categories: &[Category]) -> Result<(), ChartError> {
    if categories.len() < MIN_CATEGORIES {
        return Err(ChartError::TooFewCategories);
    }
    if categories.len() > MAX_CATEGORIES {
        return Err(ChartError::TooManyCategories);
    }
    for (i, category) in categories.iter().enumerate() {
        if categories[..i].iter().any(|c| c.id == category.id) {
            return Err(ChartError::DuplicateCategory(category.id.clone()));
        }
    }
    Ok(())
}

/// Categories of the wheel plus the selection recorded for each.
///
/// Every update returns a new chart and leaves `self` untouched, so callers can keep old
/// values around for undo or snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    categories: Vec<Category>,
    selections: Selections,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(Category::defaults())
    }
}

impl Chart {
    /// Takes the list as given. Lists read from config or disk go through `try_new` or
    /// `validate_categories` first.
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            selections: Selections::new(),
        }
    }

    pub fn try_new(categories: Vec<Category>) -> Result<Self, ChartError> {
        validate_categories(&categories)?;
        Ok(Self::new(categories))
    }

    /// Builds a chart from stored parts, dropping selections for unknown categories and
    /// repairing any stressed value that does not lie beyond typical.
    pub fn from_parts(categories: Vec<Category>, selections: Selections) -> Self {
        let selections = selections
            .into_iter()
            .filter(|(id, _)| categories.iter().any(|c| &c.id == id))
            .map(|(id, s)| (id, s.normalized()))
            .collect();
        Self {
            categories,
            selections,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn selection(&self, id: &CategoryId) -> Selection {
        self.selections.get(id).copied().unwrap_or_default()
    }

    pub fn hit(&self, point: Point) -> Option<SegmentAddress> {
        if self.categories.is_empty() {
            return None;
        }
        geometry::hit_test(point, self.categories.len())
    }

    /// `None` when the point misses the rings; no transition runs in that case.
    pub fn click(&self, point: Point) -> Option<Self> {
        let address = self.hit(point)?;
        Some(self.select(address))
    }

    pub fn select(&self, address: SegmentAddress) -> Self {
        let Some(category) = self.categories.get(address.category) else {
            log::warn!("Ignoring selection for missing category {}", address.category);
            return self.clone();
        };

        let current = self.selection(&category.id);
        let next = current.transition(address.segment_number());
        log::debug!(
            "{}: segment {} {:?} -> {:?}",
            category.id,
            address.segment_number(),
            current,
            next
        );

        self.with_selection(category.id.clone(), next)
    }

    pub fn reset(&self, id: &CategoryId) -> Self {
        self.with_selection(id.clone(), Selection::UNSET)
    }

    pub fn reset_all(&self) -> Self {
        Self {
            categories: self.categories.clone(),
            selections: Selections::new(),
        }
    }

    fn with_selection(&self, id: CategoryId, selection: Selection) -> Self {
        let mut selections = self.selections.clone();
        if selection.is_unset() {
            selections.remove(&id);
        } else {
            selections.insert(id, selection);
        }
        Self {
            categories: self.categories.clone(),
            selections,
        }
    }

    /// Swaps in a new category list, keeping selections of categories that survive.
    pub fn with_categories(&self, categories: Vec<Category>) -> Self {
        Self::from_parts(categories, self.selections.clone())
    }

    pub fn add_category(&self, category: Category) -> Result<Self, ChartError> {
        if self.categories.iter().any(|c| c.id == category.id) {
            return Err(ChartError::DuplicateCategory(category.id));
        }
        if self.categories.len() >= MAX_CATEGORIES {
            return Err(ChartError::TooManyCategories);
        }

        let mut categories = self.categories.clone();
        categories.push(category);
        Ok(Self {
            categories,
            selections: self.selections.clone(),
        })
    }

    pub fn remove_category(&self, id: &CategoryId) -> Result<Self, ChartError> {
        let categories: Vec<_> = self
            .categories
            .iter()
            .filter(|c| &c.id != id)
            .cloned()
            .collect();

        if categories.len() == self.categories.len() {
            return Err(ChartError::UnknownCategory(id.clone()));
        }
        if categories.len() < MIN_CATEGORIES {
            return Err(ChartError::TooFewCategories);
        }
        Ok(Self::from_parts(categories, self.selections.clone()))
    }

    /// Every (category, ring) cell with its outline and fill, for a full redraw.
    pub fn segments(&self) -> impl Iterator<Item = SegmentView<'_>> {
        let count = self.categories.len();
        self.categories
            .iter()
            .enumerate()
            .flat_map(move |(c, category)| {
                let selection = self.selection(&category.id);
                (0..TOTAL_RINGS).map(move |ring| {
                    let address = SegmentAddress::new(c, ring);
                    SegmentView {
                        address,
                        category,
                        wedge: Wedge::calculate(address, count),
                        fill: selection.fill_for_ring(ring),
                    }
                })
            })
    }

    pub fn labels(&self) -> impl Iterator<Item = (&Category, LabelAnchor)> {
        let count = self.categories.len();
        self.categories
            .iter()
            .enumerate()
            .map(move |(c, category)| (category, LabelAnchor::calculate(c, count)))
    }
}

#[derive(Debug, Clone)]
pub struct SegmentView<'a> {
    pub address: SegmentAddress,
    pub category: &'a Category,
    pub wedge: Wedge,
    pub fill: Fill,
}
