//! Person search and sort allow-list.
//!
//! Search requests name record fields as plain strings. Those names never
//! reach SQL directly: they are resolved through [`PersonField`], which maps
//! each accepted name to a fixed column.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// A person record field that may be named in a search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonField {
    Id,
    Name,
    FavoriteFood,
    FavoriteMovie,
    Status,
    Active,
    CreatedAt,
    UpdatedAt,
}

impl PersonField {
    /// Every accepted field, in declaration order.
    pub const ALL: [PersonField; 8] = [
        PersonField::Id,
        PersonField::Name,
        PersonField::FavoriteFood,
        PersonField::FavoriteMovie,
        PersonField::Status,
        PersonField::Active,
        PersonField::CreatedAt,
        PersonField::UpdatedAt,
    ];

    /// The JSON name clients use for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            PersonField::Id => "id",
            PersonField::Name => "name",
            PersonField::FavoriteFood => "favoriteFood",
            PersonField::FavoriteMovie => "favoriteMovie",
            PersonField::Status => "status",
            PersonField::Active => "active",
            PersonField::CreatedAt => "createdAt",
            PersonField::UpdatedAt => "updatedAt",
        }
    }

    /// The `people` table column backing this field.
    pub fn column(self) -> &'static str {
        match self {
            PersonField::Id => "id",
            PersonField::Name => "name",
            PersonField::FavoriteFood => "favorite_food",
            PersonField::FavoriteMovie => "favorite_movie",
            PersonField::Status => "status",
            PersonField::Active => "active",
            PersonField::CreatedAt => "created_at",
            PersonField::UpdatedAt => "updated_at",
        }
    }

    /// Whether a substring-contains filter can be applied to this field.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            PersonField::Name
                | PersonField::FavoriteFood
                | PersonField::FavoriteMovie
                | PersonField::Status
        )
    }
}

impl fmt::Display for PersonField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown person field '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Sort order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// SQL keyword for an `ORDER BY` clause.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Desc)
        } else {
            Err(CoreError::Validation(format!(
                "Sort order must be 'asc' or 'desc', got '{s}'"
            )))
        }
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Keep records whose `field` contains `needle` (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsFilter {
    pub field: PersonField,
    pub needle: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: PersonField,
    pub order: SortOrder,
}

/// A validated search over person records.
///
/// An absent filter matches every record; an absent sort leaves the store's
/// default order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonQuery {
    pub filter: Option<ContainsFilter>,
    pub sort: Option<Sort>,
}

impl PersonQuery {
    /// Build a query from the raw request inputs.
    ///
    /// The filter applies only when both `property` and `query` are
    /// non-empty, and the sort only when both `sort_by` and `order` are.
    /// A half-specified pair is ignored rather than rejected.
    pub fn parse(
        property: Option<&str>,
        query: Option<&str>,
        sort_by: Option<&str>,
        order: Option<&str>,
    ) -> Result<Self, CoreError> {
        let filter = match (non_empty(property), non_empty(query)) {
            (Some(property), Some(needle)) => {
                let field: PersonField = property.parse()?;
                if !field.is_text() {
                    return Err(CoreError::Validation(format!(
                        "Field '{field}' does not support substring search"
                    )));
                }
                Some(ContainsFilter {
                    field,
                    needle: needle.to_string(),
                })
            }
            _ => None,
        };

        let sort = match (non_empty(sort_by), non_empty(order)) {
            (Some(sort_by), Some(order)) => Some(Sort {
                field: sort_by.parse()?,
                order: order.parse()?,
            }),
            _ => None,
        };

        Ok(Self { filter, sort })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
