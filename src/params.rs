//! Request parameters common to every API call.

/// Sort keys accepted by list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    Activity,
    Creation,
    Hot,
    Week,
    Month,
    Score,
}

impl Sort {
    /// Wire value for the `sort` parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Activity => "activity",
            Self::Creation => "creation",
            Self::Hot => "hot",
            Self::Week => "week",
            Self::Month => "month",
            // The API spells the score sort "votes" on the wire.
            Self::Score => "votes",
        }
    }

    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "activity" => Some(Self::Activity),
            "creation" => Some(Self::Creation),
            "hot" => Some(Self::Hot),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "votes" => Some(Self::Score),
            _ => None,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    /// Wire value for the `order` parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Common arguments sent with an API request.
///
/// `site` is always emitted in the query string, even when empty; every
/// other field is omitted at its zero value rather than encoded as a
/// default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    /// Site to query (e.g. [`crate::constants::STACK_OVERFLOW`]).
    pub site: String,
    pub sort: Option<Sort>,
    pub order: Option<Order>,
    /// 1-based page number; 0 leaves paging to the server default.
    pub page: u32,
    /// Results per page; 0 leaves the server default.
    pub page_size: u32,
    /// Response filter token; empty means the server default filter.
    pub filter: String,
    /// Positional arguments substituted into the path template's
    /// placeholders (see [`crate::endpoint::fill_placeholders`]).
    pub args: Vec<String>,
}

impl Params {
    /// Canonical query pairs for these parameters.
    ///
    /// Values are not percent-encoded here; that happens when the URL is
    /// assembled. Pair order follows field declaration order, so output
    /// is deterministic.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("site", self.site.clone())];
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.as_str().to_string()));
        }
        if self.page != 0 {
            pairs.push(("page", self.page.to_string()));
        }
        if self.page_size != 0 {
            pairs.push(("pagesize", self.page_size.to_string()));
        }
        if !self.filter.is_empty() {
            pairs.push(("filter", self.filter.clone()));
        }
        pairs
    }
}
