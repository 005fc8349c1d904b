//! Sort-key mapping between client-facing DTO fields and stored entity
//! columns.
//!
//! Clients sort on DTO fields (`name`, `age`), but the store only knows entity
//! columns (`first_name`, `date_of_birth`). Each (DTO, entity) pair registers
//! a table resolving every sortable client key to one or more target columns,
//! optionally with a reverted direction: sorting by `age` ascending means
//! sorting by `date_of_birth` descending.
//!
//! The registry is built once at startup, stored in the application state and
//! never written again, so request handlers can read it concurrently without
//! synchronization. A missing table or a duplicate registration is a
//! configuration defect and panics; only per-request key validation is
//! reported back to the caller as a boolean.

use std::any::{type_name, TypeId};
use std::collections::HashMap;

use thiserror::Error;

/// Physical ordering direction of one resolved sort step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Target columns for one client-facing sort key.
#[derive(Debug, Clone)]
pub struct PropertyMappingValue {
    target_fields: Vec<&'static str>,
    revert: bool,
}

impl PropertyMappingValue {
    pub fn new(target_fields: Vec<&'static str>) -> Self {
        Self {
            target_fields,
            revert: false,
        }
    }

    /// A mapping whose natural order is the inverse of the exposed key's
    /// order.
    pub fn reverted(target_fields: Vec<&'static str>) -> Self {
        Self {
            target_fields,
            revert: true,
        }
    }
}

/// One ordering step to apply on the underlying store, produced by
/// [`PropertyMappingRegistry::resolve_order_by`]. Steps apply in order; later
/// steps break ties left by earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderingStep {
    pub target_field: &'static str,
    pub direction: SortDirection,
}

/// Resolving an order-by clause against a key the mapping table does not
/// contain. Callers validate with [`PropertyMappingRegistry::is_valid_mapping`]
/// first, so hitting this is an internal fault, not a client error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("order by clause references unknown sort key {key:?}")]
    UnknownSortKey { key: String },
}

type PropertyMappingTable = HashMap<String, PropertyMappingValue>;

/// Process-wide table of sort-key mappings, keyed by (source DTO, target
/// entity) type pair.
pub struct PropertyMappingRegistry {
    tables: HashMap<(TypeId, TypeId), PropertyMappingTable>,
}

impl PropertyMappingRegistry {
    /// Builds the registry with every mapping the application uses. Called
    /// once at startup, before the first request is served.
    pub fn new() -> Self {
        let mut registry = Self {
            tables: HashMap::new(),
        };

        registry.register::<crate::model::author::AuthorDto, entity::author::Model>(vec![
            ("id", PropertyMappingValue::new(vec!["id"])),
            ("genre", PropertyMappingValue::new(vec!["genre"])),
            ("age", PropertyMappingValue::reverted(vec!["date_of_birth"])),
            (
                "name",
                PropertyMappingValue::new(vec!["first_name", "last_name"]),
            ),
        ]);

        registry
    }

    /// Stores the mapping table for the `(Source, Target)` pair. Keys are
    /// normalized to lowercase so later lookups are case-insensitive.
    ///
    /// # Panics
    /// When the pair is registered twice, or when two keys collide under
    /// case-insensitive comparison. Both are programming errors in the
    /// startup configuration.
    fn register<Source: 'static, Target: 'static>(
        &mut self,
        entries: Vec<(&str, PropertyMappingValue)>,
    ) {
        let mut table = PropertyMappingTable::new();
        for (key, value) in entries {
            if table.insert(key.to_lowercase(), value).is_some() {
                panic!(
                    "duplicate sort key {:?} in property mapping <{}, {}>",
                    key,
                    type_name::<Source>(),
                    type_name::<Target>()
                );
            }
        }

        let pair = (TypeId::of::<Source>(), TypeId::of::<Target>());
        if self.tables.insert(pair, table).is_some() {
            panic!(
                "property mapping <{}, {}> registered twice",
                type_name::<Source>(),
                type_name::<Target>()
            );
        }
    }

    /// # Panics
    /// When no table was registered for the pair; a missing mapping is a
    /// startup defect, not a recoverable request error.
    fn resolve<Source: 'static, Target: 'static>(&self) -> &PropertyMappingTable {
        let pair = (TypeId::of::<Source>(), TypeId::of::<Target>());
        match self.tables.get(&pair) {
            Some(table) => table,
            None => panic!(
                "no property mapping registered for <{}, {}>",
                type_name::<Source>(),
                type_name::<Target>()
            ),
        }
    }

    /// Validates a client-supplied `orderBy` string against the registered
    /// table for the pair.
    ///
    /// An empty or blank string is always valid. Otherwise every
    /// comma-separated clause is trimmed and truncated at its first space
    /// (so `"name desc"` validates the key `"name"`), then looked up
    /// case-insensitively. Pure validation, no side effects.
    pub fn is_valid_mapping<Source: 'static, Target: 'static>(&self, fields: &str) -> bool {
        if fields.trim().is_empty() {
            return true;
        }

        let table = self.resolve::<Source, Target>();

        fields.split(',').all(|clause| {
            let trimmed = clause.trim();
            let key = match trimmed.find(' ') {
                Some(index) => &trimmed[..index],
                None => trimmed,
            };
            table.contains_key(&key.to_lowercase())
        })
    }

    /// Expands a validated `orderBy` string into physical ordering steps.
    ///
    /// Each clause `key[ direction]` contributes one step per target field of
    /// the key, in table order; a reverted mapping flips the clause's stated
    /// direction. Clauses keep their left-to-right order so later clauses
    /// break ties. Blank clauses are skipped; no clauses at all leaves the
    /// store's own (deterministic but unspecified) order in place.
    ///
    /// # Returns
    /// - `Ok(Vec<OrderingStep>)` - Resolved steps, possibly empty
    /// - `Err(MappingError::UnknownSortKey)` - A clause names an unmapped key,
    ///   meaning validation was bypassed upstream
    pub fn resolve_order_by<Source: 'static, Target: 'static>(
        &self,
        order_by: &str,
    ) -> Result<Vec<OrderingStep>, MappingError> {
        let table = self.resolve::<Source, Target>();
        let mut steps = Vec::new();

        for clause in order_by.split(',') {
            let trimmed = clause.trim();
            if trimmed.is_empty() {
                continue;
            }

            let (key, stated_direction) = match trimmed.find(' ') {
                Some(index) => {
                    let direction = if trimmed[index + 1..].trim().eq_ignore_ascii_case("desc") {
                        SortDirection::Descending
                    } else {
                        SortDirection::Ascending
                    };
                    (&trimmed[..index], direction)
                }
                None => (trimmed, SortDirection::Ascending),
            };

            let mapping = table.get(&key.to_lowercase()).ok_or_else(|| {
                MappingError::UnknownSortKey {
                    key: key.to_string(),
                }
            })?;

            let direction = if mapping.revert {
                stated_direction.reversed()
            } else {
                stated_direction
            };

            for target_field in mapping.target_fields.iter().copied() {
                steps.push(OrderingStep {
                    target_field,
                    direction,
                });
            }
        }

        Ok(steps)
    }
}

impl Default for PropertyMappingRegistry {
    fn default() -> Self {
        Self::new()
    }
}
