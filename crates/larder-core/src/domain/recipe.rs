//! Recipe request and result types.
//!
//! The returned recipe text is opaque: nothing in larder parses or
//! structures it.

use serde::{Deserialize, Serialize};

use crate::ports::CoreError;

const INVALID_INGREDIENTS: &str = "Ingredients are required and must be an array";

/// A request for generated recipe text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRequest {
    /// Ingredient names; must be non-empty after validation.
    pub ingredients: Vec<String>,
    /// Optional dietary-preference tags (e.g. "vegan").
    #[serde(default)]
    pub preferences: Vec<String>,
}

/// Outcome reported by a recipe generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeResult {
    /// Generated recipe text.
    Success(String),
    /// Human-readable reason the collaborator failed.
    Failure(String),
}

impl RecipeRequest {
    pub fn new(ingredients: Vec<String>, preferences: Vec<String>) -> Self {
        Self {
            ingredients,
            preferences,
        }
    }

    /// A request for a single ingredient with no preferences.
    pub fn for_ingredient(name: impl Into<String>) -> Self {
        Self::new(vec![name.into()], Vec::new())
    }

    /// Parse an untyped request body.
    ///
    /// `ingredients` must be present and a JSON array of strings; a missing
    /// or non-array value is rejected with the same message as an empty one.
    /// `preferences` is optional and a non-array value is ignored.
    pub fn from_json(body: &serde_json::Value) -> Result<Self, CoreError> {
        let ingredients = body
            .get("ingredients")
            .and_then(serde_json::Value::as_array)
            .ok_or_else(|| CoreError::Validation(INVALID_INGREDIENTS.to_string()))?
            .iter()
            .map(|value| {
                value
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| CoreError::Validation(INVALID_INGREDIENTS.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let preferences = body
            .get("preferences")
            .and_then(serde_json::Value::as_array)
            .map(|values| {
                values
                    .iter()
                    .filter_map(serde_json::Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self::new(ingredients, preferences).validated()
    }

    /// Drop blank entries and reject a request with no ingredients left.
    pub fn validated(self) -> Result<Self, CoreError> {
        let ingredients = normalize(self.ingredients);
        if ingredients.is_empty() {
            return Err(CoreError::Validation(INVALID_INGREDIENTS.to_string()));
        }

        Ok(Self {
            ingredients,
            preferences: normalize(self.preferences),
        })
    }

    /// The prompt sent to the generation collaborator.
    pub fn prompt(&self) -> String {
        let ingredients_list = self.ingredients.join(", ");
        let preferences_text = if self.preferences.is_empty() {
            String::new()
        } else {
            format!(
                "Consider these dietary preferences: {}.",
                self.preferences.join(", ")
            )
        };

        format!(
            "Create a recipe using some or all of these ingredients: {ingredients_list}.\n\
             {preferences_text}\n\
             Format the recipe with:\n\
             1. A creative title\n\
             2. A brief description\n\
             3. List of ingredients with quantities\n\
             4. Step-by-step cooking instructions\n\
             5. Cooking time and difficulty level\n"
        )
    }

    /// Identity of the request for duplicate-submission detection.
    ///
    /// Order and case of the entries do not matter.
    pub fn submission_key(&self) -> String {
        let canonical = |values: &[String]| {
            let mut lowered: Vec<String> = values.iter().map(|v| v.to_lowercase()).collect();
            lowered.sort();
            lowered.join(",")
        };
        format!(
            "{}|{}",
            canonical(&self.ingredients),
            canonical(&self.preferences)
        )
    }
}

fn normalize(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_ingredients_rejected() {
        let result = RecipeRequest::new(Vec::new(), Vec::new()).validated();
        assert!(matches!(result, Err(CoreError::Validation(msg)) if msg == INVALID_INGREDIENTS));
    }

    #[test]
    fn test_blank_ingredients_rejected() {
        let result = RecipeRequest::new(vec!["  ".to_string()], Vec::new()).validated();
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_missing_ingredients() {
        let result = RecipeRequest::from_json(&json!({ "preferences": ["vegan"] }));
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_from_json_ingredients_not_a_list() {
        let result = RecipeRequest::from_json(&json!({ "ingredients": "tomato" }));
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_from_json_valid() {
        let request = RecipeRequest::from_json(&json!({
            "ingredients": ["tomato", "cheese"],
            "preferences": ["vegan"]
        }))
        .unwrap();
        assert_eq!(request.ingredients, vec!["tomato", "cheese"]);
        assert_eq!(request.preferences, vec!["vegan"]);
    }

    #[test]
    fn test_from_json_preferences_optional() {
        let request = RecipeRequest::from_json(&json!({ "ingredients": ["rice"] })).unwrap();
        assert!(request.preferences.is_empty());
    }

    #[test]
    fn test_prompt_mentions_ingredients_and_preferences() {
        let request = RecipeRequest::new(
            vec!["tomato".to_string(), "cheese".to_string()],
            vec!["vegan".to_string()],
        );
        let prompt = request.prompt();
        assert!(prompt.contains("ingredients: tomato, cheese."));
        assert!(prompt.contains("Consider these dietary preferences: vegan."));
        assert!(prompt.contains("5. Cooking time and difficulty level"));
    }

    #[test]
    fn test_prompt_without_preferences() {
        let prompt = RecipeRequest::for_ingredient("Bread").prompt();
        assert!(!prompt.contains("dietary preferences"));
    }

    #[test]
    fn test_submission_key_ignores_order_and_case() {
        let a = RecipeRequest::new(vec!["Tomato".into(), "cheese".into()], vec![]);
        let b = RecipeRequest::new(vec!["cheese".into(), "tomato".into()], vec![]);
        let c = RecipeRequest::new(vec!["cheese".into()], vec![]);
        assert_eq!(a.submission_key(), b.submission_key());
        assert_ne!(a.submission_key(), c.submission_key());
    }
}
