use shared::{DayOfWeek, MealType};
use yew::prelude::*;

use crate::hooks::use_meal_plan::MealDraft;

#[derive(Properties, PartialEq)]
pub struct MealFormProps {
    pub draft: MealDraft,
    pub on_day_change: Callback<Event>,
    pub on_meal_type_change: Callback<Event>,
    pub on_item_change: Callback<Event>,
    pub on_save: Callback<()>,
}

/// Form for drafting a new meal: day select, meal-type select, item input,
/// save button. The save button is a no-op while the item name is blank.
#[function_component(MealForm)]
pub fn meal_form(props: &MealFormProps) -> Html {
    let on_save = {
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit(()))
    };

    html! {
        <div class="meal-form">
            <select
                class="form-select"
                value={props.draft.day_of_week.as_str()}
                onchange={props.on_day_change.clone()}
            >
                { for DayOfWeek::ALL.iter().map(|day| html! {
                    <option
                        key={day.as_str()}
                        value={day.as_str()}
                        selected={*day == props.draft.day_of_week}
                    >
                        {day.as_str()}
                    </option>
                })}
            </select>

            <select
                class="form-select"
                value={props.draft.meal_type.as_str()}
                onchange={props.on_meal_type_change.clone()}
            >
                { for MealType::ALL.iter().map(|meal_type| html! {
                    <option
                        key={meal_type.as_str()}
                        value={meal_type.as_str()}
                        selected={*meal_type == props.draft.meal_type}
                    >
                        {meal_type.as_str()}
                    </option>
                })}
            </select>

            <input
                class="form-input"
                type="text"
                placeholder="Enter a meal..."
                value={props.draft.item_name.clone()}
                onchange={props.on_item_change.clone()}
            />

            <button class="btn btn-save" onclick={on_save}>{"Save"}</button>
        </div>
    }
}
