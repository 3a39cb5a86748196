use shared::{meal_for_slot, DayOfWeek, Meal, MealType};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WeekGridProps {
    pub meals: Vec<Meal>,
    pub on_delete: Callback<i64>,
}

/// The 7-day × 3-slot weekly grid. Each slot shows its meal with a delete
/// button, or a dashed placeholder when empty. Slot contents come from a
/// first-match scan over the fetched collection; with at most 21 active
/// meals per week there is nothing to index.
#[function_component(WeekGrid)]
pub fn week_grid(props: &WeekGridProps) -> Html {
    html! {
        <div class="week-grid">
            { for DayOfWeek::ALL.iter().map(|day| html! {
                <div class="day-column" key={day.as_str()}>
                    <div class="day-header">{day.abbrev()}</div>
                    <div class="day-slots">
                        { for MealType::ALL.iter().map(|meal_type| {
                            let slot = meal_for_slot(&props.meals, *day, *meal_type);
                            html! {
                                <div class="slot" key={meal_type.as_str()}>
                                    <div class="slot-label">{meal_type.as_str()}</div>
                                    {match slot {
                                        Some(meal) => {
                                            let on_delete = props.on_delete.clone();
                                            let id = meal.id;
                                            html! {
                                                <div class="slot-filled">
                                                    <span class="slot-item">{&meal.item_name}</span>
                                                    <button
                                                        class="btn-delete"
                                                        title="Delete meal"
                                                        onclick={Callback::from(move |_: MouseEvent| on_delete.emit(id))}
                                                    >
                                                        {"✕"}
                                                    </button>
                                                </div>
                                            }
                                        }
                                        None => html! { <div class="slot-empty"></div> },
                                    }}
                                </div>
                            }
                        })}
                    </div>
                </div>
            })}
        </div>
    }
}
