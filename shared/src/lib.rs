use serde::{Deserialize, Serialize};
use std::fmt;

/// Day slot for a meal, serialized in the backend's upper-case wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days in display order, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Wire/display name, e.g. "MONDAY".
    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "MONDAY",
            DayOfWeek::Tuesday => "TUESDAY",
            DayOfWeek::Wednesday => "WEDNESDAY",
            DayOfWeek::Thursday => "THURSDAY",
            DayOfWeek::Friday => "FRIDAY",
            DayOfWeek::Saturday => "SATURDAY",
            DayOfWeek::Sunday => "SUNDAY",
        }
    }

    /// Three-letter abbreviation for grid column headers.
    pub fn abbrev(&self) -> &'static str {
        &self.as_str()[..3]
    }

    /// Parse the wire name back into a day, e.g. from a select element value.
    pub fn from_name(value: &str) -> Option<DayOfWeek> {
        DayOfWeek::ALL.into_iter().find(|day| day.as_str() == value)
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Meal slot within a day, serialized in the backend's upper-case wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    /// All meal types in display order.
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    /// Wire/display name, e.g. "BREAKFAST".
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "BREAKFAST",
            MealType::Lunch => "LUNCH",
            MealType::Dinner => "DINNER",
        }
    }

    /// Parse the wire name back into a meal type.
    pub fn from_name(value: &str) -> Option<MealType> {
        MealType::ALL.into_iter().find(|meal| meal.as_str() == value)
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single meal assignment as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Opaque identifier assigned by the server on creation.
    pub id: i64,
    pub day_of_week: DayOfWeek,
    pub meal_type: MealType,
    /// Free-text dish name (non-empty when created by the client).
    pub item_name: String,
}

/// Body for creating a new meal; the server assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMealRequest {
    pub day_of_week: DayOfWeek,
    pub meal_type: MealType,
    pub item_name: String,
}

/// Look up the meal occupying a grid slot.
///
/// Returns the first meal in collection order matching both fields. The
/// backend is expected to keep at most one meal per slot; if it ever returns
/// duplicates, the later ones are not visible through this lookup.
pub fn meal_for_slot(meals: &[Meal], day: DayOfWeek, meal_type: MealType) -> Option<&Meal> {
    meals
        .iter()
        .find(|meal| meal.day_of_week == day && meal.meal_type == meal_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meal(id: i64, day: DayOfWeek, meal_type: MealType, item: &str) -> Meal {
        Meal {
            id,
            day_of_week: day,
            meal_type,
            item_name: item.to_string(),
        }
    }

    #[test]
    fn meal_serializes_in_backend_wire_format() {
        let value =
            serde_json::to_value(meal(7, DayOfWeek::Monday, MealType::Breakfast, "Oatmeal"))
                .unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "dayOfWeek": "MONDAY",
                "mealType": "BREAKFAST",
                "itemName": "Oatmeal"
            })
        );
    }

    #[test]
    fn meal_deserializes_from_backend_json() {
        let parsed: Meal = serde_json::from_str(
            r#"{"id":42,"dayOfWeek":"SUNDAY","mealType":"DINNER","itemName":"Roast"}"#,
        )
        .unwrap();
        assert_eq!(parsed, meal(42, DayOfWeek::Sunday, MealType::Dinner, "Roast"));
    }

    #[test]
    fn create_request_uses_camel_case_fields() {
        let request = CreateMealRequest {
            day_of_week: DayOfWeek::Friday,
            meal_type: MealType::Lunch,
            item_name: "Tacos".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"dayOfWeek": "FRIDAY", "mealType": "LUNCH", "itemName": "Tacos"})
        );
    }

    #[test]
    fn slot_lookup_returns_first_match() {
        let meals = vec![
            meal(1, DayOfWeek::Tuesday, MealType::Lunch, "Soup"),
            meal(2, DayOfWeek::Monday, MealType::Breakfast, "Oatmeal"),
            meal(3, DayOfWeek::Monday, MealType::Breakfast, "Pancakes"),
        ];

        let found = meal_for_slot(&meals, DayOfWeek::Monday, MealType::Breakfast).unwrap();
        assert_eq!(found.id, 2);
        assert_eq!(found.item_name, "Oatmeal");
    }

    #[test]
    fn slot_lookup_misses_on_partial_match() {
        let meals = vec![meal(1, DayOfWeek::Monday, MealType::Breakfast, "Oatmeal")];

        assert!(meal_for_slot(&meals, DayOfWeek::Monday, MealType::Lunch).is_none());
        assert!(meal_for_slot(&meals, DayOfWeek::Tuesday, MealType::Breakfast).is_none());
    }

    #[test]
    fn slot_lookup_on_empty_collection() {
        for day in DayOfWeek::ALL {
            for meal_type in MealType::ALL {
                assert!(meal_for_slot(&[], day, meal_type).is_none());
            }
        }
    }

    #[test]
    fn day_names_round_trip() {
        for day in DayOfWeek::ALL {
            assert_eq!(DayOfWeek::from_name(day.as_str()), Some(day));
        }
        assert_eq!(DayOfWeek::from_name("FUNDAY"), None);
    }

    #[test]
    fn meal_type_names_round_trip() {
        for meal_type in MealType::ALL {
            assert_eq!(MealType::from_name(meal_type.as_str()), Some(meal_type));
        }
        assert_eq!(MealType::from_name("BRUNCH"), None);
    }

    #[test]
    fn day_abbreviations_are_three_letters() {
        assert_eq!(DayOfWeek::Monday.abbrev(), "MON");
        assert_eq!(DayOfWeek::Sunday.abbrev(), "SUN");
        for day in DayOfWeek::ALL {
            assert_eq!(day.abbrev().len(), 3);
        }
    }
}
