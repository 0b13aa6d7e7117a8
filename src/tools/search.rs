//! Catalog search

use serde::Serialize;

use crate::models::{catalog, FoodDefinition};

/// Summary of a food for search results
#[derive(Debug, Serialize)]
pub struct FoodSummary {
    pub id: String,
    pub name: String,
    pub reference_grams: f64,
    pub calories: f64,
    pub units: Vec<String>,
}

impl From<&FoodDefinition> for FoodSummary {
    fn from(food: &FoodDefinition) -> Self {
        Self {
            id: food.id.clone(),
            name: food.name.clone(),
            reference_grams: food.base.reference_grams,
            calories: food.base.macros.calories,
            units: food.unit_options(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchFoodsResponse {
    pub query: String,
    pub items: Vec<FoodSummary>,
    pub total: usize,
}

/// Case-insensitive substring search over `foods`
///
/// A blank query returns nothing rather than everything.
pub fn search_in<'a>(foods: &'a [FoodDefinition], query: &str) -> Vec<&'a FoodDefinition> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    foods
        .iter()
        .filter(|food| food.name.to_lowercase().contains(&needle))
        .collect()
}

/// Search the built-in catalog
pub fn search_foods(query: &str) -> Vec<&'static FoodDefinition> {
    search_in(catalog(), query)
}

pub fn search_response(query: &str) -> SearchFoodsResponse {
    let items: Vec<FoodSummary> = search_foods(query).into_iter().map(FoodSummary::from).collect();
    SearchFoodsResponse {
        query: query.to_string(),
        total: items.len(),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(results: &[&FoodDefinition]) -> Vec<String> {
        results.iter().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn test_no_match_and_no_query_are_both_empty() {
        assert!(search_foods("zzz").is_empty());
        assert!(search_foods("").is_empty());
        assert!(search_foods("   ").is_empty());
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert_eq!(names(&search_foods("MILK")), vec!["Milk (toned)"]);
        assert_eq!(names(&search_foods("breast")), vec!["Chicken Breast (cooked)"]);
    }

    #[test]
    fn test_results_keep_catalog_order() {
        // "o" appears in Roti, Milk (toned) and Chicken Breast (cooked)
        assert_eq!(
            names(&search_foods("o")),
            vec!["Roti", "Milk (toned)", "Chicken Breast (cooked)"]
        );
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        // only blank queries are special; the query itself is not trimmed
        assert!(search_foods(" roti").is_empty());
        assert_eq!(names(&search_foods("breast (")), vec!["Chicken Breast (cooked)"]);
    }

    #[test]
    fn test_search_response() {
        let response = search_response("roti");
        assert_eq!(response.total, 1);
        assert_eq!(response.items[0].id, "roti");
        assert_eq!(response.items[0].units, vec!["piece", "grams"]);
    }
}
