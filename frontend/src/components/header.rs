use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// True while a generate-plan call is outstanding; disables the trigger.
    pub generating: bool,
    pub on_generate: Callback<()>,
    pub on_show_portfolio: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_generate = {
        let on_generate = props.on_generate.clone();
        Callback::from(move |_: MouseEvent| on_generate.emit(()))
    };
    let on_show_portfolio = {
        let on_show_portfolio = props.on_show_portfolio.clone();
        Callback::from(move |_: MouseEvent| on_show_portfolio.emit(()))
    };

    html! {
        <header class="header">
            <div class="header-title">
                <h1>{"AI Chef Planner 👨‍🍳"}</h1>
                <p class="subtitle">{"Your Autonomous Sunday Agent"}</p>
            </div>
            <div class="header-actions">
                <button class="btn btn-secondary" onclick={on_show_portfolio}>
                    {"How I Built This"}
                </button>
                <button
                    class="btn btn-generate"
                    onclick={on_generate}
                    disabled={props.generating}
                >
                    {if props.generating {
                        "Chef is thinking..."
                    } else {
                        "AI Surprise Me"
                    }}
                </button>
            </div>
        </header>
    }
}
