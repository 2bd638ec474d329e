use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::{Header, NoticeBanner, NotificationsPanel, PlannedExpensesSection, TeamPanel};
use config::AppConfig;
use hooks::use_budgets::use_budgets;
use hooks::use_notices::use_notices;
use hooks::use_notifications::use_notifications;
use hooks::use_planned_expenses::use_planned_expenses;
use hooks::use_team_members::use_team_members;
use services::api::ApiClient;
use services::logging::Logger;
use services::session::{browser_session, redirect_to_login};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let api_client = {
        let config = props.config.clone();
        use_state(move || ApiClient::new(&config, browser_session()))
    };
    let authenticated = api_client.session().is_authenticated();

    let notices = use_notices(api_client.session());
    let budgets = use_budgets(&api_client, &notices.actions);
    let selected_budget_id = budgets.state.selected_budget_id;

    let expenses = use_planned_expenses(&api_client, selected_budget_id, &notices.actions);
    let notifications = use_notifications(&api_client, selected_budget_id, &notices.actions);
    let team = use_team_members(&api_client, selected_budget_id, &notices.actions);

    use_effect_with(authenticated, |authenticated| {
        if !*authenticated {
            Logger::info_with_component("app", "No session token, redirecting to login");
            redirect_to_login();
        }
        || ()
    });

    html! {
        <div class="app">
            <Header
                budgets={budgets.state.budgets.clone()}
                selected_budget_id={selected_budget_id}
                budgets_loading={budgets.state.loading}
                on_select_budget={budgets.actions.select_budget.clone()}
            />

            <NoticeBanner
                notices={notices.notices.clone()}
                on_dismiss={notices.actions.dismiss.clone()}
            />

            <main class="main-content">
                {if selected_budget_id.is_some() {
                    html! {
                        <>
                            <NotificationsPanel
                                notifications={notifications.notifications.clone()}
                                loading={notifications.loading}
                            />
                            <PlannedExpensesSection
                                state={expenses.state.clone()}
                                actions={expenses.actions.clone()}
                            />
                            <TeamPanel
                                members={team.members.clone()}
                                loading={team.loading}
                            />
                        </>
                    }
                } else if budgets.state.loading {
                    html! { <div class="loading">{"Ładowanie budżetów..."}</div> }
                } else {
                    html! { <div class="empty-state">{"Nie masz jeszcze żadnego budżetu."}</div> }
                }}
            </main>
        </div>
    }
}

fn main() {
    let config = AppConfig::from_env().unwrap_or_else(|e| {
        gloo::console::error!(format!("Invalid build configuration, using defaults: {:#}", e));
        AppConfig::default()
    });

    if let Err(e) = Logger::init(&config) {
        gloo::console::error!(format!("Logger already initialised: {}", e));
    }
    log::info!("Budget planner starting against {}", config.api_base_url);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
