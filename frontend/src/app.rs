//! Application shell: header with backend health, resource tabs, and the
//! list view of the active tab.
//!
//! The shell loads the client configuration once before rendering any list,
//! so every request goes to the configured API base.

use common::api::Resource;
use common::config::ClientConfig;
use common::error::ApiError;
use common::model::appointment::Appointment;
use common::model::doctor::Doctor;
use common::model::health::HealthReport;
use common::model::patient::Patient;
use yew::platform::spawn_local;
use yew::{classes, html, Component, Context, Html};

use crate::api;
use crate::components::records::list::RecordList;

pub enum Msg {
    ConfigLoaded(ClientConfig),
    HealthChecked(Result<HealthReport, ApiError>),
    SetTab(Resource),
}

pub struct App {
    config: Option<ClientConfig>,
    health: Option<Result<HealthReport, ApiError>>,
    active_tab: Resource,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(api::load_config().await));
        });

        Self {
            config: None,
            health: None,
            active_tab: Resource::Patients,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                log::info!("records API at {}", config.api_base_url);
                let client = api::client(&config);
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::HealthChecked(client.health().await));
                });
                self.config = Some(config);
                true
            }
            Msg::HealthChecked(result) => {
                if let Err(err) = &result {
                    log::warn!("health check failed: {}", err);
                }
                self.health = Some(result);
                true
            }
            Msg::SetTab(tab) => {
                if self.active_tab == tab {
                    return false;
                }
                self.active_tab = tab;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="app">
                <header class="app-header">
                    <div>
                        <h1>{ "Healthcare Records" }</h1>
                        <p>{ "Patients, doctors and appointments" }</p>
                    </div>
                    { self.health_badge() }
                </header>

                <nav class="app-nav">
                    { for Resource::ALL.into_iter().map(|tab| html! {
                        <button
                            class={classes!(if tab == self.active_tab { "active" } else { "" })}
                            onclick={link.callback(move |_| Msg::SetTab(tab))}
                        >
                            { tab.label() }
                        </button>
                    }) }
                </nav>

                <main class="app-main">{ self.active_list() }</main>
            </div>
        }
    }
}

impl App {
    fn active_list(&self) -> Html {
        let Some(config) = self.config.clone() else {
            return html! { <div class="loading">{ "Loading configuration..." }</div> };
        };

        match self.active_tab {
            Resource::Patients => html! { <RecordList<Patient> {config} /> },
            Resource::Doctors => html! { <RecordList<Doctor> {config} /> },
            Resource::Appointments => html! { <RecordList<Appointment> {config} /> },
        }
    }

    fn health_badge(&self) -> Html {
        let (class, text) = match &self.health {
            None => ("health-badge", "Checking backend...".to_string()),
            Some(Ok(report)) if report.is_healthy() => (
                "health-badge",
                format!(
                    "{}: healthy",
                    report.service.as_deref().unwrap_or("Backend")
                ),
            ),
            Some(Ok(report)) => ("health-badge down", format!("Backend: {}", report.status)),
            Some(Err(_)) => ("health-badge down", "Backend unreachable".to_string()),
        };
        html! { <span class={class}>{ text }</span> }
    }
}
