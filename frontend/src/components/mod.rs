pub mod header;
pub mod meal_form;
pub mod portfolio;
pub mod week_grid;
