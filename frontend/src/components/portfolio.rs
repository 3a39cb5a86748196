use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub on_back: Callback<()>,
}

struct StackCard {
    title: &'static str,
    detail: &'static str,
    tag: &'static str,
}

const STACK: [StackCard; 5] = [
    StackCard {
        title: "Frontend",
        detail: "Yew + WebAssembly",
        tag: "Browser",
    },
    StackCard {
        title: "Backend",
        detail: "REST API",
        tag: "Cloud",
    },
    StackCard {
        title: "Database",
        detail: "PostgreSQL",
        tag: "Managed",
    },
    StackCard {
        title: "AI Model",
        detail: "Gemini 2.0",
        tag: "Google",
    },
    StackCard {
        title: "Agent",
        detail: "Scheduler",
        tag: "Autonomous",
    },
];

const TIMELINE: [(&str, &str); 4] = [
    (
        "Week 1",
        "CRUD skeleton: meal grid, add/delete form, REST endpoints.",
    ),
    (
        "Week 2",
        "Wired the AI planning step behind a single generate endpoint.",
    ),
    (
        "Week 3",
        "Made generation autonomous with a Sunday scheduler agent.",
    ),
    (
        "Week 4",
        "Deployed frontend and backend separately, added this page.",
    ),
];

/// Static "how I built this" page. Content only, no data flow; the single
/// interactive element is the back button.
#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <div class="portfolio">
            <nav class="portfolio-nav">
                <button class="btn btn-back" onclick={on_back}>
                    {"← Back to Meal Planner"}
                </button>
            </nav>

            <section class="portfolio-hero">
                <h1>{"Architecture & Engineering Journey"}</h1>
                <p>
                    {"A look at how this system is put together, from the \
                      WebAssembly client to the autonomous planning agent \
                      behind the generate button."}
                </p>
            </section>

            <section class="portfolio-stack">
                <h2>{"The Tech Stack"}</h2>
                <div class="stack-cards">
                    { for STACK.iter().map(|card| html! {
                        <div class="stack-card" key={card.title}>
                            <h3>{card.title}</h3>
                            <p>{card.detail}</p>
                            <span class="stack-tag">{card.tag}</span>
                        </div>
                    })}
                </div>
            </section>

            <section class="portfolio-architecture">
                <h2>{"System Architecture"}</h2>
                <ul>
                    <li>{"The browser client keeps no storage of its own; it re-fetches the full week after every change."}</li>
                    <li>{"The backend owns the meal collection and exposes four endpoints: list, create, delete, generate."}</li>
                    <li>{"Generate hands the whole week to the AI model and replaces the collection in one step."}</li>
                    <li>{"A scheduled agent runs the same generation every Sunday without anyone clicking anything."}</li>
                </ul>
            </section>

            <section class="portfolio-timeline">
                <h2>{"Build Timeline"}</h2>
                <ol>
                    { for TIMELINE.iter().map(|(week, entry)| html! {
                        <li key={*week}>
                            <strong>{*week}</strong>
                            {" — "}
                            {*entry}
                        </li>
                    })}
                </ol>
            </section>
        </div>
    }
}
