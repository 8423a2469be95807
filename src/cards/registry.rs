//! Card catalog for lookup, search, and pagination.
//!
//! The `CardCatalog` stores every known card in insertion order and
//! answers the card-browser queries: name search, type and aspect
//! filters, and page slicing.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::aspect::Aspect;
use super::definition::{Card, CardId, CardType};

/// Default page size for catalog queries.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Catalog query parameters.
///
/// Deserializes directly from `?search=&type=&aspect=&page=&limit=`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardQuery {
    /// Case-insensitive substring of the card name.
    #[serde(default)]
    pub search: Option<String>,

    /// Case-insensitive card type name.
    #[serde(default, rename = "type")]
    pub card_type: Option<String>,

    /// Case-insensitive aspect name.
    #[serde(default)]
    pub aspect: Option<String>,

    /// 1-based page number.
    #[serde(default)]
    pub page: Option<u32>,

    #[serde(default)]
    pub limit: Option<u32>,
}

impl CardQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    #[must_use]
    pub fn card_type(mut self, name: impl Into<String>) -> Self {
        self.card_type = Some(name.into());
        self
    }

    #[must_use]
    pub fn aspect(mut self, name: impl Into<String>) -> Self {
        self.aspect = Some(name.into());
        self
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Effective page, treating missing or zero as 1.
    #[must_use]
    pub fn effective_page(&self) -> u32 {
        self.page.filter(|&p| p > 0).unwrap_or(1)
    }

    /// Effective limit, treating missing or zero as the default.
    #[must_use]
    pub fn effective_limit(&self) -> u32 {
        self.limit.filter(|&l| l > 0).unwrap_or(DEFAULT_PAGE_LIMIT)
    }

    fn matches(&self, card: &Card) -> bool {
        if let Some(search) = non_empty(&self.search) {
            let needle = search.to_lowercase();
            if !card.name.to_lowercase().contains(&needle) {
                return false;
            }
        }

        if let Some(type_name) = non_empty(&self.card_type) {
            if !card.card_type.matches(type_name) {
                return false;
            }
        }

        if let Some(aspect_name) = non_empty(&self.aspect) {
            // Unknown aspect names match nothing.
            match aspect_name.parse::<Aspect>() {
                Ok(aspect) if card.has_aspect(aspect) => {}
                _ => return false,
            }
        }

        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Pagination metadata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Matches before pagination.
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    /// `ceil(total / limit)`.
    pub pages: u32,
}

/// One page of results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// Catalog of card definitions.
///
/// ## Example
///
/// ```
/// use swu_deckbuilder::cards::{Card, CardCatalog, CardId, CardQuery, CardType};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(Card::new("1", "Darth Vader", CardType::Leader));
/// catalog.register(Card::new("2", "Rebel Trooper", CardType::Unit));
///
/// assert_eq!(catalog.get(&CardId::new("1")).unwrap().name, "Darth Vader");
///
/// let page = catalog.query(&CardQuery::new().search("vader"));
/// assert_eq!(page.meta.total, 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: Card) {
        if self.index.contains_key(&card.id) {
            panic!("Card with ID {} already registered", card.id);
        }
        self.index.insert(card.id.clone(), self.cards.len());
        self.cards.push(card);
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Find cards by type.
    pub fn find_by_type<'a>(&'a self, card_type: &'a CardType) -> impl Iterator<Item = &'a Card> {
        self.cards.iter().filter(move |c| &c.card_type == card_type)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }

    /// Filter then paginate.
    ///
    /// Filters apply in order: name search, type, aspect. Pages past the
    /// end come back empty with accurate metadata.
    #[must_use]
    pub fn query(&self, query: &CardQuery) -> Page<Card> {
        let page = query.effective_page();
        let limit = query.effective_limit();

        let matched: Vec<&Card> = self.cards.iter().filter(|c| query.matches(c)).collect();
        let total = matched.len();

        let start = (page as usize - 1).saturating_mul(limit as usize);
        let data = matched
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();

        Page {
            data,
            meta: PageMeta {
                total,
                page,
                limit,
                pages: total.div_ceil(limit as usize) as u32,
            },
        }
    }
}

impl FromIterator<Card> for CardCatalog {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for card in iter {
            catalog.register(card);
        }
        catalog
    }
}
