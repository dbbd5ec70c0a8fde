//! Parsing of the `sort` query value for room listings.
//!
//! Accepted values are `""`, `id`, `price`, `-id` and `-price`. A leading `-`
//! selects descending order; an empty value means ascending by id.

use std::str::FromStr;

use crate::errors::ServiceError;

/// Column a room listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    Price,
}

impl SortField {
    pub fn column_name(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Price => "price",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoomSort {
    pub field: SortField,
    pub descending: bool,
}

impl FromStr for RoomSort {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(RoomSort::default());
        }
        let (descending, name) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let field = match name {
            "id" => SortField::Id,
            "price" => SortField::Price,
            _ => return Err(ServiceError::WrongSortField),
        };
        Ok(RoomSort { field, descending })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<RoomSort, ServiceError> { s.parse() }

    #[test]
    fn empty_means_id_ascending() {
        assert_eq!(parse(""), Ok(RoomSort { field: SortField::Id, descending: false }));
        assert_eq!(parse(""), parse("id"));
    }

    #[test]
    fn accepted_fields() {
        assert_eq!(parse("price"), Ok(RoomSort { field: SortField::Price, descending: false }));
        assert_eq!(parse("-id"), Ok(RoomSort { field: SortField::Id, descending: true }));
        assert_eq!(parse("-price"), Ok(RoomSort { field: SortField::Price, descending: true }));
    }

    #[test]
    fn rejects_unknown_and_single_char() {
        for bad in ["bogus", "-bogus", "x", "-", "--id", "Price", "id ", " id", "-i"] {
            assert_eq!(parse(bad), Err(ServiceError::WrongSortField), "input {bad:?}");
        }
    }

    #[test]
    fn column_names() {
        assert_eq!(SortField::Id.column_name(), "id");
        assert_eq!(SortField::Price.column_name(), "price");
    }
}
