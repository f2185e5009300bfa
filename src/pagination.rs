use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use url::Url;

/// The API never returns more than this many items per page.
pub const MAX_COUNT: u32 = 100;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

impl FromStr for Order {
    type Err = &'static str;

    fn from_str(order: &str) -> Result<Self, Self::Err> {
        match order {
            "asc" => Ok(Order::Asc),
            "desc" => Ok(Order::Desc),
            _ => Err("order must be equal to one of the allowed values"),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Listing options for paginated endpoints.
///
/// Every field is optional: a zero `count`/`page`, a missing `order` and an
/// empty or missing `from`/`to` are left out of the query string, and the
/// server falls back to its defaults (page 1, 100 items, ascending).
/// Out-of-range values are dropped the same way instead of failing the call.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub count: u32,
    pub page: u32,
    pub order: Option<Order>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl Pagination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }

    /// The options used for one page of a fan-out walk: the caller's
    /// ordering and range are kept, the page size is pinned to the maximum.
    pub fn for_page(&self, page: u32) -> Self {
        Self {
            count: MAX_COUNT,
            page,
            order: self.order,
            from: self.from.clone(),
            to: self.to.clone(),
        }
    }

    /// Query pairs that pass validation, sorted by key.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);

        if (1..=MAX_COUNT).contains(&self.count) {
            pairs.push(("count", self.count.to_string()));
        }

        if let Some(from) = self.from.as_deref().filter(|from| !from.is_empty()) {
            pairs.push(("from", from.to_string()));
        }

        if let Some(order) = self.order {
            pairs.push(("order", order.as_str().to_string()));
        }

        if self.page > 0 {
            pairs.push(("page", self.page.to_string()));
        }

        if let Some(to) = self.to.as_deref().filter(|to| !to.is_empty()) {
            pairs.push(("to", to.to_string()));
        }

        pairs
    }
}

pub trait ApplyPagination {
    fn apply_pagination(&mut self, pagination: &Pagination);
}

impl ApplyPagination for Url {
    fn apply_pagination(&mut self, pagination: &Pagination) {
        let pairs = pagination.query_pairs();

        // an empty `query_pairs_mut` would still leave a dangling `?`
        if pairs.is_empty() {
            return;
        }

        let mut query_pairs = self.query_pairs_mut();

        for (key, value) in &pairs {
            query_pairs.append_pair(key, value);
        }
    }
}
