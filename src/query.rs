//! List Query Building
//!
//! Maps the filter inputs to `/products` query parameters. A blank filter is
//! omitted entirely: an empty string means "no filter", not "filter for empty".

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Fixed page size of the listing
pub const PAGE_SIZE: u32 = 20;

/// Characters that cannot appear raw in a query value
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'?');

/// Raw filter input values, exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilters {
    pub name: String,
    pub category: String,
    pub min_price: String,
    pub max_price: String,
    pub active: String,
}

impl ListFilters {
    /// Query string for a page of the listing. Sort is fixed at `id,asc`.
    pub fn to_query(&self, page: u32) -> String {
        let mut pairs: Vec<String> = Vec::new();
        push_if_present(&mut pairs, "name", &self.name);
        push_if_present(&mut pairs, "category", &self.category);
        push_if_present(&mut pairs, "minPrice", &self.min_price);
        push_if_present(&mut pairs, "maxPrice", &self.max_price);
        push_if_present(&mut pairs, "active", &self.active);
        pairs.push(format!("page={}", page));
        pairs.push(format!("size={}", PAGE_SIZE));
        pairs.push("sort=id,asc".to_string());
        pairs.join("&")
    }
}

fn push_if_present(pairs: &mut Vec<String>, key: &str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        pairs.push(format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_filters_are_omitted() {
        let filters = ListFilters::default();
        assert_eq!(filters.to_query(0), "page=0&size=20&sort=id,asc");
    }

    #[test]
    fn test_whitespace_only_counts_as_blank() {
        let filters = ListFilters {
            name: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(filters.to_query(0), "page=0&size=20&sort=id,asc");
    }

    #[test]
    fn test_set_filters_are_included_verbatim() {
        let filters = ListFilters {
            name: "arroz".to_string(),
            category: "Mercearia".to_string(),
            min_price: "1.5".to_string(),
            max_price: "20".to_string(),
            active: "true".to_string(),
        };
        assert_eq!(
            filters.to_query(2),
            "name=arroz&category=Mercearia&minPrice=1.5&maxPrice=20&active=true&page=2&size=20&sort=id,asc"
        );
    }

    #[test]
    fn test_partial_filters() {
        let filters = ListFilters {
            category: "Bebidas".to_string(),
            active: "false".to_string(),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query(0),
            "category=Bebidas&active=false&page=0&size=20&sort=id,asc"
        );
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let filters = ListFilters {
            name: "café & pão".to_string(),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query(0),
            "name=caf%C3%A9%20%26%20p%C3%A3o&page=0&size=20&sort=id,asc"
        );
    }
}
