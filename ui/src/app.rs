use std::time::Duration;

use chrono::Utc;
use roster_business::{Route, UserListState, navigate};
use roster_states::Time;

use crate::{pages, state::State, widgets};

/// How often to repaint while the users load is in flight, so its result shows up.
const LOADING_REPAINT: Duration = Duration::from_millis(100);

pub struct RosterApp {
    state: State,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        *self.state.ctx.state_mut::<Time>().as_mut() = Utc::now();

        // Results from background tasks, and the computes reading them, settle before drawing
        self.state.ctx.run_computed();

        // Login and logout change which routes are reachable
        let current = self.state.ctx.state::<Route>().clone();
        let route = navigate(&mut self.state.ctx, current);

        if route != Route::Login {
            egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
                egui::MenuBar::new().ui(ui, |ui| {
                    widgets::nav_bar(&mut self.state.ctx, ui);
                });
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| match route {
            Route::Login => {
                pages::login_page(&mut self.state, ui);
            }
            Route::Home => {
                pages::home_page(&mut self.state, ui);
            }
            Route::UserData => {
                pages::user_data_page(&mut self.state, ui);
            }
            Route::Settings => {
                pages::settings_page(&mut self.state, ui);
            }
            Route::NotFound(path) => {
                ui.label(format!("No page at {path}"));
            }
        });

        if self.state.ctx.state::<UserListState>().load().is_loading() {
            ctx.request_repaint_after(LOADING_REPAINT);
        }

        self.state.ctx.run_computed();
    }
}
