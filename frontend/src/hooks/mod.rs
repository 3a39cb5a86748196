pub mod use_meal_plan;
