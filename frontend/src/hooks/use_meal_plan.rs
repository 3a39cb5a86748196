use std::rc::Rc;

use shared::{CreateMealRequest, DayOfWeek, Meal, MealType};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::services::api::ApiClient;

const CONFIRM_GENERATE: &str = "Overwrite all meals with AI Plan?";
const GENERATE_FAILED: &str = "AI is busy! Try again.";

/// Unsaved form state for a prospective new meal. The day and meal-type
/// selections survive a save; only the item name is cleared.
#[derive(Clone, PartialEq)]
pub struct MealDraft {
    pub day_of_week: DayOfWeek,
    pub meal_type: MealType,
    pub item_name: String,
}

impl Default for MealDraft {
    fn default() -> Self {
        Self {
            day_of_week: DayOfWeek::Monday,
            meal_type: MealType::Breakfast,
            item_name: String::new(),
        }
    }
}

impl MealDraft {
    /// A draft is savable once the item name is non-empty. Anything beyond
    /// that is the backend's call.
    pub fn is_savable(&self) -> bool {
        !self.item_name.is_empty()
    }

    pub fn to_request(&self) -> CreateMealRequest {
        CreateMealRequest {
            day_of_week: self.day_of_week,
            meal_type: self.meal_type,
            item_name: self.item_name.clone(),
        }
    }
}

/// Planner view state. `meals` is the last successfully fetched collection;
/// the view never patches it incrementally, it only replaces it wholesale
/// after a refresh.
#[derive(Clone, PartialEq, Default)]
pub struct PlannerState {
    pub meals: Vec<Meal>,
    pub draft: MealDraft,
    /// True strictly while a generate-plan call is outstanding. Gates the
    /// generate trigger only; save and delete are not blocked by it.
    pub generating: bool,
    /// Sequence number of the most recently issued refresh.
    refresh_seq: u64,
}

pub enum PlannerAction {
    /// A refresh round trip with this sequence number was issued.
    RefreshStarted { seq: u64 },
    /// A refresh came back. Applied only if `seq` is still the latest issued;
    /// responses overtaken by a newer refresh are discarded rather than
    /// overwriting fresher data.
    MealsLoaded { seq: u64, meals: Vec<Meal> },
    DraftDayChanged(DayOfWeek),
    DraftMealTypeChanged(MealType),
    DraftItemChanged(String),
    /// The draft was accepted by the server; clear the item name and keep the
    /// day/meal-type selections.
    DraftSaved,
    GenerateStarted,
    GenerateFinished,
}

impl Reducible for PlannerState {
    type Action = PlannerAction;

    fn reduce(self: Rc<Self>, action: PlannerAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PlannerAction::RefreshStarted { seq } => next.refresh_seq = seq,
            PlannerAction::MealsLoaded { seq, meals } => {
                if seq == next.refresh_seq {
                    next.meals = meals;
                }
            }
            PlannerAction::DraftDayChanged(day) => next.draft.day_of_week = day,
            PlannerAction::DraftMealTypeChanged(meal_type) => next.draft.meal_type = meal_type,
            PlannerAction::DraftItemChanged(item_name) => next.draft.item_name = item_name,
            PlannerAction::DraftSaved => next.draft.item_name.clear(),
            PlannerAction::GenerateStarted => next.generating = true,
            PlannerAction::GenerateFinished => next.generating = false,
        }
        Rc::new(next)
    }
}

/// Gate for the destructive generate flow: without an affirmative
/// confirmation nothing is dispatched and no request goes out. When
/// confirmed, the busy flag is raised before the request is issued. Returns
/// whether the flow proceeded.
fn begin_generate_if_confirmed(
    confirmed: bool,
    dispatch_start: impl FnOnce(),
    issue_request: impl FnOnce(),
) -> bool {
    if !confirmed {
        return false;
    }
    dispatch_start();
    issue_request();
    true
}

pub struct UseMealPlanResult {
    pub state: PlannerState,
    pub actions: UseMealPlanActions,
}

#[derive(Clone, PartialEq)]
pub struct UseMealPlanActions {
    pub refresh_meals: Callback<()>,
    pub save_meal: Callback<()>,
    pub delete_meal: Callback<i64>,
    pub generate_plan: Callback<()>,
    pub on_day_change: Callback<Event>,
    pub on_meal_type_change: Callback<Event>,
    pub on_item_change: Callback<Event>,
}

/// State synchronization for the weekly planner.
///
/// Every mutating action issues one gateway call followed by one dependent
/// full-collection refetch; there are no optimistic updates. Failures leave
/// `meals` at the last successful sync.
#[hook]
pub fn use_meal_plan(api_client: &ApiClient) -> UseMealPlanResult {
    let state = use_reducer(PlannerState::default);
    // Monotonic counter for refresh round trips; see PlannerAction::MealsLoaded.
    let refresh_counter = use_mut_ref(|| 0u64);

    // Refresh the full meal collection. List failures are logged only; the
    // grid keeps showing the last successful sync.
    let refresh_meals = {
        let api_client = api_client.clone();
        let state = state.clone();
        let refresh_counter = refresh_counter.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let state = state.clone();
            let seq = {
                let mut counter = refresh_counter.borrow_mut();
                *counter += 1;
                *counter
            };
            state.dispatch(PlannerAction::RefreshStarted { seq });

            spawn_local(async move {
                match api_client.list_meals().await {
                    Ok(meals) => {
                        state.dispatch(PlannerAction::MealsLoaded { seq, meals });
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to fetch meals:", e.to_string());
                    }
                }
            });
        })
    };

    // Save the draft, then refetch. On failure nothing changes and no error
    // is surfaced to the user.
    let save_meal = {
        let api_client = api_client.clone();
        let refresh_meals = refresh_meals.clone();

        use_callback(state.clone(), move |_, state| {
            if !state.draft.is_savable() {
                return;
            }
            let api_client = api_client.clone();
            let state = state.clone();
            let refresh_meals = refresh_meals.clone();
            let request = state.draft.to_request();

            spawn_local(async move {
                match api_client.create_meal(&request).await {
                    Ok(_created) => {
                        state.dispatch(PlannerAction::DraftSaved);
                        refresh_meals.emit(());
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to save meal:", e.to_string());
                    }
                }
            });
        })
    };

    // Delete a meal by id. The refetch runs whether or not the delete call
    // succeeded, so a failed delete degrades to a plain refresh.
    let delete_meal = {
        let api_client = api_client.clone();
        let refresh_meals = refresh_meals.clone();

        use_callback((), move |id: i64, _| {
            let api_client = api_client.clone();
            let refresh_meals = refresh_meals.clone();

            spawn_local(async move {
                if let Err(e) = api_client.delete_meal(id).await {
                    gloo::console::error!("Failed to delete meal:", e.to_string());
                }
                refresh_meals.emit(());
            });
        })
    };

    // Ask the backend to regenerate the whole week. Destructive, so the user
    // must confirm first. This is the only action with user-visible error
    // feedback.
    let generate_plan = {
        let api_client = api_client.clone();
        let state = state.clone();
        let refresh_meals = refresh_meals.clone();

        use_callback((), move |_, _| {
            let confirmed = web_sys::window()
                .map(|window| window.confirm_with_message(CONFIRM_GENERATE).unwrap_or(false))
                .unwrap_or(false);

            let api_client = api_client.clone();
            let state = state.clone();
            let refresh_meals = refresh_meals.clone();
            let effect_state = state.clone();

            begin_generate_if_confirmed(
                confirmed,
                || state.dispatch(PlannerAction::GenerateStarted),
                move || {
                    spawn_local(async move {
                        match api_client.generate_plan().await {
                            Ok(()) => {
                                refresh_meals.emit(());
                                effect_state.dispatch(PlannerAction::GenerateFinished);
                            }
                            Err(e) => {
                                effect_state.dispatch(PlannerAction::GenerateFinished);
                                gloo::console::error!("Failed to generate plan:", e.to_string());
                                if let Some(window) = web_sys::window() {
                                    let _ = window.alert_with_message(GENERATE_FAILED);
                                }
                            }
                        }
                    });
                },
            );
        })
    };

    // Form input handlers
    let on_day_change = {
        let state = state.clone();
        use_callback((), move |e: Event, _| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(day) = DayOfWeek::from_name(&select.value()) {
                state.dispatch(PlannerAction::DraftDayChanged(day));
            }
        })
    };

    let on_meal_type_change = {
        let state = state.clone();
        use_callback((), move |e: Event, _| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(meal_type) = MealType::from_name(&select.value()) {
                state.dispatch(PlannerAction::DraftMealTypeChanged(meal_type));
            }
        })
    };

    let on_item_change = {
        let state = state.clone();
        use_callback((), move |e: Event, _| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            state.dispatch(PlannerAction::DraftItemChanged(input.value()));
        })
    };

    // Initial load when the planner becomes active
    use_effect_with((), {
        let refresh_meals = refresh_meals.clone();
        move |_| {
            refresh_meals.emit(());
            || ()
        }
    });

    let actions = UseMealPlanActions {
        refresh_meals,
        save_meal,
        delete_meal,
        generate_plan,
        on_day_change,
        on_meal_type_change,
        on_item_change,
    };

    UseMealPlanResult {
        state: (*state).clone(),
        actions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn reduce(state: PlannerState, action: PlannerAction) -> PlannerState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn meal(id: i64, day: DayOfWeek, meal_type: MealType, item: &str) -> Meal {
        Meal {
            id,
            day_of_week: day,
            meal_type,
            item_name: item.to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn latest_refresh_response_lands() {
        let state = reduce(PlannerState::default(), PlannerAction::RefreshStarted { seq: 1 });
        let state = reduce(
            state,
            PlannerAction::MealsLoaded {
                seq: 1,
                meals: vec![meal(1, DayOfWeek::Monday, MealType::Breakfast, "Oatmeal")],
            },
        );
        assert_eq!(state.meals.len(), 1);
        assert_eq!(state.meals[0].item_name, "Oatmeal");
    }

    #[wasm_bindgen_test]
    fn overtaken_refresh_response_is_discarded() {
        let state = reduce(PlannerState::default(), PlannerAction::RefreshStarted { seq: 1 });
        let state = reduce(state, PlannerAction::RefreshStarted { seq: 2 });

        // Slow response from the first refresh arrives after the second was
        // issued; it must not overwrite anything.
        let state = reduce(
            state,
            PlannerAction::MealsLoaded {
                seq: 1,
                meals: vec![meal(1, DayOfWeek::Monday, MealType::Breakfast, "Stale")],
            },
        );
        assert!(state.meals.is_empty());

        let state = reduce(
            state,
            PlannerAction::MealsLoaded {
                seq: 2,
                meals: vec![meal(2, DayOfWeek::Monday, MealType::Breakfast, "Fresh")],
            },
        );
        assert_eq!(state.meals[0].item_name, "Fresh");
    }

    #[wasm_bindgen_test]
    fn saving_clears_item_name_but_keeps_selections() {
        let mut state = PlannerState::default();
        state.draft = MealDraft {
            day_of_week: DayOfWeek::Friday,
            meal_type: MealType::Dinner,
            item_name: "Pizza".to_string(),
        };

        let state = reduce(state, PlannerAction::DraftSaved);
        assert_eq!(state.draft.item_name, "");
        assert_eq!(state.draft.day_of_week, DayOfWeek::Friday);
        assert_eq!(state.draft.meal_type, MealType::Dinner);
    }

    #[wasm_bindgen_test]
    fn generate_flag_follows_call_lifetime() {
        let state = PlannerState::default();
        assert!(!state.generating);

        let state = reduce(state, PlannerAction::GenerateStarted);
        assert!(state.generating);

        let state = reduce(state, PlannerAction::GenerateFinished);
        assert!(!state.generating);
    }

    #[wasm_bindgen_test]
    fn draft_edits_update_single_fields() {
        let state = reduce(
            PlannerState::default(),
            PlannerAction::DraftDayChanged(DayOfWeek::Wednesday),
        );
        let state = reduce(state, PlannerAction::DraftMealTypeChanged(MealType::Lunch));
        let state = reduce(state, PlannerAction::DraftItemChanged("Soup".to_string()));

        assert_eq!(state.draft.day_of_week, DayOfWeek::Wednesday);
        assert_eq!(state.draft.meal_type, MealType::Lunch);
        assert_eq!(state.draft.item_name, "Soup");
    }

    #[wasm_bindgen_test]
    fn only_empty_drafts_are_blocked_from_saving() {
        let mut draft = MealDraft::default();
        assert!(!draft.is_savable());

        // Any non-empty text is accepted, whitespace included; the client
        // does not validate beyond "non-empty".
        draft.item_name = "   ".to_string();
        assert!(draft.is_savable());

        draft.item_name = "Oatmeal".to_string();
        assert!(draft.is_savable());
    }

    #[wasm_bindgen_test]
    fn unconfirmed_generate_changes_nothing() {
        let state = RefCell::new(PlannerState::default());
        let issued = Cell::new(false);

        let proceeded = begin_generate_if_confirmed(
            false,
            || {
                let next = reduce(state.borrow().clone(), PlannerAction::GenerateStarted);
                *state.borrow_mut() = next;
            },
            || issued.set(true),
        );

        assert!(!proceeded);
        assert!(!issued.get());
        assert!(*state.borrow() == PlannerState::default());
    }

    #[wasm_bindgen_test]
    fn confirmed_generate_raises_flag_then_issues_call() {
        let state = RefCell::new(PlannerState::default());
        let issued = Cell::new(false);

        let proceeded = begin_generate_if_confirmed(
            true,
            || {
                let next = reduce(state.borrow().clone(), PlannerAction::GenerateStarted);
                *state.borrow_mut() = next;
            },
            || issued.set(true),
        );

        assert!(proceeded);
        assert!(issued.get());
        assert!(state.borrow().generating);
    }
}
