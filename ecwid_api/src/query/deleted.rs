use super::{
    common::{push_opt, Paging},
    Paginated, Query,
};

/// Date window for the deleted-entity feeds (products, customers, orders,
/// coupons). Dates are passed through as given: `YYYY-MM-DD`, a full
/// timestamp, or UNIX seconds.
#[derive(Debug, Clone, Default)]
pub struct DeletedQuery {
    pub paging: Paging,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

impl Query for DeletedQuery {
    fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_opt(&mut pairs, "from_date", &self.from_date);
        push_opt(&mut pairs, "to_date", &self.to_date);
        self.paging.push_offset(&mut pairs);
        self.paging.push_limit(&mut pairs);
        pairs
    }
}

impl Paginated for DeletedQuery {
    fn paging_mut(&mut self) -> &mut Paging {
        &mut self.paging
    }
}

impl DeletedQuery {
    pub fn with_from_date(mut self, from_date: &str) -> Self {
        self.from_date = Some(from_date.to_string());
        self
    }

    pub fn with_to_date(mut self, to_date: &str) -> Self {
        self.to_date = Some(to_date.to_string());
        self
    }
}
