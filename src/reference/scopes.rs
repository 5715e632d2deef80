use crate::core::{Category, Scope};
use crate::errors::{CarbonError, Result};
use std::collections::BTreeMap;

/// Category to scope policy.
///
/// This is the single source of truth for scope aggregation. A category that
/// is missing here fails the calculation instead of defaulting to a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeMap {
    scopes: BTreeMap<Category, Scope>,
}

impl ScopeMap {
    pub fn new(entries: impl IntoIterator<Item = (Category, Scope)>) -> Self {
        Self {
            scopes: entries.into_iter().collect(),
        }
    }

    /// GHG Protocol assignment:
    /// - Scope 1: gas, fuel, company vehicles
    /// - Scope 2: electricity
    /// - Scope 3: domestic flights, international flights, purchases
    pub fn ghg_protocol() -> Self {
        Self::new([
            (Category::Electricity, Scope::Scope2),
            (Category::Gas, Scope::Scope1),
            (Category::Fuel, Scope::Scope1),
            (Category::Vehicles, Scope::Scope1),
            (Category::DomesticFlights, Scope::Scope3),
            (Category::InternationalFlights, Scope::Scope3),
            (Category::Purchases, Scope::Scope3),
        ])
    }

    pub fn scope_of(&self, category: Category) -> Result<Scope> {
        self.scopes
            .get(&category)
            .copied()
            .ok_or_else(|| CarbonError::unknown_category(category.key()))
    }

    pub fn scope_of_key(&self, category: &str) -> Result<Scope> {
        self.scope_of(category.parse()?)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Scope)> + '_ {
        self.scopes.iter().map(|(c, s)| (*c, *s))
    }

    pub fn categories_in(&self, scope: Scope) -> Vec<Category> {
        self.iter()
            .filter(|(_, s)| *s == scope)
            .map(|(c, _)| c)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ghg_protocol_assignment() {
        let map = ScopeMap::ghg_protocol();
        assert_eq!(map.scope_of(Category::Electricity).unwrap(), Scope::Scope2);
        assert_eq!(
            map.categories_in(Scope::Scope1),
            vec![Category::Gas, Category::Fuel, Category::Vehicles]
        );
        assert_eq!(
            map.categories_in(Scope::Scope3),
            vec![
                Category::DomesticFlights,
                Category::InternationalFlights,
                Category::Purchases
            ]
        );
    }

    #[test]
    fn test_unregistered_category_fails_loudly() {
        let map = ScopeMap::new([(Category::Electricity, Scope::Scope2)]);
        let err = map.scope_of(Category::Purchases).unwrap_err();
        assert!(matches!(err, CarbonError::UnknownCategory { ref category } if category == "purchases"));
    }

    #[test]
    fn test_scope_of_unknown_key() {
        let map = ScopeMap::ghg_protocol();
        assert!(map.scope_of_key("refrigerants").is_err());
        assert_eq!(map.scope_of_key("gas").unwrap(), Scope::Scope1);
    }
}
