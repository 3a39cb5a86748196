use yew::prelude::*;

use crate::components::header::Header;
use crate::components::meal_form::MealForm;
use crate::components::portfolio::Portfolio;
use crate::components::week_grid::WeekGrid;
use crate::hooks::use_meal_plan::{use_meal_plan, UseMealPlanResult};
use crate::services::api::ApiClient;

#[derive(Clone, Copy, PartialEq)]
enum ViewMode {
    Planner,
    Portfolio,
}

#[derive(Properties, PartialEq)]
struct PlannerPageProps {
    on_show_portfolio: Callback<()>,
}

/// The interactive planner. Mounting it triggers the initial meal fetch, so
/// switching back from the portfolio page resynchronizes with the server.
#[function_component(PlannerPage)]
fn planner_page(props: &PlannerPageProps) -> Html {
    let api_client = ApiClient::new();
    let UseMealPlanResult { state, actions } = use_meal_plan(&api_client);

    html! {
        <div class="planner">
            <Header
                generating={state.generating}
                on_generate={actions.generate_plan.clone()}
                on_show_portfolio={props.on_show_portfolio.clone()}
            />
            <MealForm
                draft={state.draft.clone()}
                on_day_change={actions.on_day_change.clone()}
                on_meal_type_change={actions.on_meal_type_change.clone()}
                on_item_change={actions.on_item_change.clone()}
                on_save={actions.save_meal.clone()}
            />
            <WeekGrid
                meals={state.meals.clone()}
                on_delete={actions.delete_meal.clone()}
            />
        </div>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| ViewMode::Planner);

    let show_portfolio = {
        let view = view.clone();
        Callback::from(move |_| view.set(ViewMode::Portfolio))
    };
    let show_planner = {
        let view = view.clone();
        Callback::from(move |_| view.set(ViewMode::Planner))
    };

    match *view {
        ViewMode::Planner => html! { <PlannerPage on_show_portfolio={show_portfolio} /> },
        ViewMode::Portfolio => html! { <Portfolio on_back={show_planner} /> },
    }
}
