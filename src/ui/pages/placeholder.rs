use desk_shell::components::{draw_main_content, MainContentModel, MainContentProps};
use desk_shell::layout::{LayoutConfig, ShellTheme};
use eframe::egui::{self, RichText};

use crate::state::Route;
use crate::ui::theme::ThemeTokens;

/// Páginas aún sin contenido propio: mantienen el mismo andamiaje que el
/// resto de los módulos.
pub fn draw(ctx: &egui::Context, layout: &LayoutConfig, route: Route, tokens: &ThemeTokens) {
    let mut page = PlaceholderPage { route, tokens };
    draw_main_content(ctx, layout, &mut page);
}

struct PlaceholderPage<'a> {
    route: Route,
    tokens: &'a ThemeTokens,
}

impl MainContentModel for PlaceholderPage<'_> {
    fn theme(&self) -> ShellTheme {
        crate::ui::shell_theme(self.tokens)
    }

    fn props(&self) -> MainContentProps {
        MainContentProps {
            title: Some(self.route.label().to_string()),
            subtitle: Some(self.route.description().to_string()),
            actions: Vec::new(),
        }
    }

    fn on_action(&mut self, _action_id: &str) {}

    fn show_content(&mut self, ui: &mut egui::Ui) {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(self.route.icon()).size(40.0));
            ui.add_space(8.0);
            ui.label(
                RichText::new("Módulo en preparación")
                    .color(self.tokens.palette.text_primary)
                    .size(16.0)
                    .strong(),
            );
            ui.label(
                RichText::new("Estará disponible en una próxima versión del cliente.")
                    .color(self.tokens.palette.text_weak),
            );
        });
    }
}
