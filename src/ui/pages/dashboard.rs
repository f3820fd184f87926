use desk_shell::components::{draw_main_content, MainContentModel, MainContentProps};
use desk_shell::layout::{LayoutConfig, ShellTheme};
use eframe::egui::{self, Color32, Margin, RichText, Rounding};

use crate::state::clients::ClientStatus;
use crate::state::dispatches::DispatchStatus;
use crate::state::inventory::StockStatus;
use crate::state::{AppState, Route};
use crate::ui::theme::ThemeTokens;

pub fn draw(ctx: &egui::Context, layout: &LayoutConfig, state: &mut AppState, tokens: &ThemeTokens) {
    let mut page = DashboardPage { state, tokens };
    draw_main_content(ctx, layout, &mut page);
}

struct DashboardPage<'a> {
    state: &'a AppState,
    tokens: &'a ThemeTokens,
}

impl MainContentModel for DashboardPage<'_> {
    fn theme(&self) -> ShellTheme {
        crate::ui::shell_theme(self.tokens)
    }

    fn props(&self) -> MainContentProps {
        MainContentProps {
            title: Some("Panel general".to_string()),
            subtitle: Some(Route::Dashboard.description().to_string()),
            actions: Vec::new(),
        }
    }

    fn on_action(&mut self, _action_id: &str) {}

    fn show_content(&mut self, ui: &mut egui::Ui) {
        let palette = &self.tokens.palette;

        let clients = self.state.clients.browser.records();
        let active_clients = clients
            .iter()
            .filter(|c| c.status == ClientStatus::Activo)
            .count();

        let items = self.state.inventory.browser.records();
        let available_items = items
            .iter()
            .filter(|i| i.status == StockStatus::Disponible)
            .count();

        let dispatches = self.state.dispatches.browser.records();
        let in_transit = dispatches
            .iter()
            .filter(|d| d.status == DispatchStatus::EnRuta)
            .count();
        let delayed = dispatches
            .iter()
            .filter(|d| d.status == DispatchStatus::Retrasado)
            .count();

        ui.horizontal_wrapped(|ui| {
            tile(
                ui,
                self.tokens,
                "Clientes activos",
                &format!("{} de {}", active_clients, clients.len()),
                palette.success,
            );
            tile(
                ui,
                self.tokens,
                "Ítems disponibles",
                &format!("{} de {}", available_items, items.len()),
                palette.primary,
            );
            tile(
                ui,
                self.tokens,
                "Despachos en ruta",
                &in_transit.to_string(),
                palette.warning,
            );
            tile(
                ui,
                self.tokens,
                "Despachos retrasados",
                &delayed.to_string(),
                palette.danger,
            );
        });

        ui.add_space(18.0);
        ui.label(
            RichText::new(
                "Los datos mostrados provienen del conjunto de muestra embebido. \
                 Conecte la API del backend para operar sobre datos reales.",
            )
            .color(palette.text_weak),
        );
    }
}

fn tile(ui: &mut egui::Ui, tokens: &ThemeTokens, caption: &str, value: &str, accent: Color32) {
    egui::Frame::none()
        .fill(tokens.palette.faint_background)
        .stroke(egui::Stroke::new(1.0, tokens.palette.border))
        .rounding(Rounding::same(8.0))
        .inner_margin(Margin::symmetric(16.0, 12.0))
        .show(ui, |ui| {
            ui.set_min_width(170.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(value).color(accent).size(24.0).strong());
                ui.label(
                    RichText::new(caption)
                        .color(tokens.palette.text_weak)
                        .size(12.0),
                );
            });
        });
}
