use desk_shell::components::{draw_main_content, MainContentModel, MainContentProps};
use desk_shell::layout::{LayoutConfig, ShellTheme};
use eframe::egui::{self, RichText};

use crate::config;
use crate::state::{AppState, Route};
use crate::ui::theme::{ThemeMode, ThemeTokens};

pub fn draw(ctx: &egui::Context, layout: &LayoutConfig, state: &mut AppState, tokens: &ThemeTokens) {
    let mut page = ConfiguracionPage { state, tokens };
    draw_main_content(ctx, layout, &mut page);
}

struct ConfiguracionPage<'a> {
    state: &'a mut AppState,
    tokens: &'a ThemeTokens,
}

impl MainContentModel for ConfiguracionPage<'_> {
    fn theme(&self) -> ShellTheme {
        crate::ui::shell_theme(self.tokens)
    }

    fn props(&self) -> MainContentProps {
        MainContentProps {
            title: Some(Route::Configuracion.label().to_string()),
            subtitle: Some(Route::Configuracion.description().to_string()),
            actions: Vec::new(),
        }
    }

    fn on_action(&mut self, _action_id: &str) {}

    fn show_content(&mut self, ui: &mut egui::Ui) {
        let palette = &self.tokens.palette;

        ui.heading("Apariencia");
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Tema actual:").color(palette.text_weak));
            ui.label(self.state.theme_mode.label());
            let action_label = match self.state.theme_mode {
                ThemeMode::Light => "Cambiar a modo oscuro",
                ThemeMode::Dark => "Cambiar a modo claro",
            };
            if ui.button(action_label).clicked() {
                let ctx = ui.ctx().clone();
                self.state.toggle_theme(&ctx);
            }
        });
        ui.label(
            RichText::new("La preferencia se guarda de inmediato y se aplica al reiniciar.")
                .color(palette.text_weak)
                .size(12.0),
        );

        ui.add_space(16.0);
        ui.separator();
        ui.add_space(8.0);

        ui.heading("Datos locales");
        ui.add_space(6.0);
        match config::default_config_path() {
            Some(path) => {
                ui.label(RichText::new("Archivo de preferencias:").color(palette.text_weak));
                ui.monospace(path.display().to_string());
            }
            None => {
                ui.label(
                    RichText::new("Este sistema no expone un directorio de configuración.")
                        .color(palette.text_weak),
                );
            }
        }

        ui.add_space(16.0);
        ui.separator();
        ui.add_space(8.0);

        ui.heading("Acerca de");
        ui.add_space(6.0);
        ui.label(format!("LogiCRM {}", env!("CARGO_PKG_VERSION")));
        ui.label(
            RichText::new("Cliente de escritorio para la gestión comercial y logística.")
                .color(palette.text_weak),
        );
    }
}
