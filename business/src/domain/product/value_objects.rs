/// Window over an ordered sequence: `skip` items are dropped, then at most
/// `limit` items are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: usize,
    pub skip: usize,
}

impl Pagination {
    pub fn new(limit: usize, skip: usize) -> Self {
        Self { limit, skip }
    }

    /// Returns `items[skip..skip + limit]`, clamped to the available length.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.skip.min(items.len());
        let end = start.saturating_add(self.limit).min(items.len());
        &items[start..end]
    }
}

/// Numeric range with an exclusive lower bound and an inclusive upper bound.
///
/// A missing bound leaves the range open in that direction: without a `min`,
/// a value of `0` is admitted rather than excluded by an implicit `0` floor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl BoundRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        let above_min = self.min.is_none_or(|min| value > min);
        let within_max = self.max.is_none_or(|max| value <= max);
        above_min && within_max
    }
}

/// Defaults applied when a request omits `limit` or `skip`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDefaults {
    pub limit: usize,
    pub skip: usize,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self { limit: 10, skip: 0 }
    }
}

/// Upper bound applied to a requested product id before the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdBound {
    /// Ids must be lower than the catalog length.
    #[default]
    Strict,
    /// Ids may be equal to the catalog length; such a lookup finds nothing.
    Inclusive,
}

impl IdBound {
    pub fn admits(&self, id: u64, catalog_len: usize) -> bool {
        let len = catalog_len as u64;
        match self {
            IdBound::Strict => id < len,
            IdBound::Inclusive => id <= len,
        }
    }
}

impl std::fmt::Display for IdBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdBound::Strict => write!(f, "strict"),
            IdBound::Inclusive => write!(f, "inclusive"),
        }
    }
}

impl std::str::FromStr for IdBound {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(IdBound::Strict),
            "inclusive" => Ok(IdBound::Inclusive),
            _ => Err(format!("Invalid product id bound: {}", s)),
        }
    }
}
