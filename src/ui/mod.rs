pub mod editor;
pub mod pages;
pub mod theme;

use desk_shell::components::{
    self, HeaderAction, HeaderModel, HeaderProps, NavigationModel, SidebarItem, SidebarProps,
    SidebarSection,
};
use desk_shell::layout::ShellTheme;
use eframe::egui;

use crate::state::{AppState, Route};
use crate::ui::theme::{ThemeMode, ThemeTokens};

pub fn draw_ui(ctx: &egui::Context, state: &mut AppState) {
    // El acceso al tema vigente es falible: si nadie lo instaló todavía no se
    // dibuja nada con colores inventados.
    let tokens = match theme::tokens() {
        Ok(tokens) => tokens,
        Err(err) => {
            log::error!("no se puede dibujar la interfaz: {err}");
            return;
        }
    };

    let mut layout = std::mem::take(&mut state.layout);

    components::draw_header(
        ctx,
        &layout,
        &mut HeaderBridge {
            state: &mut *state,
            ctx,
            tokens: &tokens,
        },
    );
    components::draw_sidebar(
        ctx,
        &mut layout,
        &mut NavigationBridge {
            state: &mut *state,
            tokens: &tokens,
        },
    );

    pages::draw_active_page(ctx, &layout, state, &tokens);
    editor::draw_client_editor(ctx, state, &tokens);

    state.layout = layout;
}

/// Traducción de los tokens del tema a los colores que consumen los
/// componentes del shell.
pub(crate) fn shell_theme(tokens: &ThemeTokens) -> ShellTheme {
    ShellTheme {
        root_background: tokens.palette.root_background,
        surface_background: tokens.palette.panel_background,
        header_background: tokens.palette.header_background,
        border: tokens.palette.border,
        text_primary: tokens.palette.text_primary,
        text_muted: tokens.palette.text_weak,
        accent: tokens.palette.primary,
        accent_soft: tokens.palette.primary_soft,
    }
}

struct HeaderBridge<'a> {
    state: &'a mut AppState,
    ctx: &'a egui::Context,
    tokens: &'a ThemeTokens,
}

impl HeaderModel for HeaderBridge<'_> {
    fn theme(&self) -> ShellTheme {
        shell_theme(self.tokens)
    }

    fn props(&self) -> HeaderProps {
        let (icon, label) = match self.state.theme_mode {
            ThemeMode::Dark => ("☀", "Modo claro"),
            ThemeMode::Light => ("🌙", "Modo oscuro"),
        };
        HeaderProps {
            title: "LogiCRM".to_string(),
            subtitle: Some("Gestión logística".to_string()),
            logo_acronym: Some("LC".to_string()),
            actions: vec![HeaderAction::new("toggle-theme", label)
                .with_icon(icon)
                .with_tooltip("Alternar entre tema claro y oscuro")],
        }
    }

    fn on_action(&mut self, action_id: &str) {
        if action_id == "toggle-theme" {
            self.state.toggle_theme(self.ctx);
        }
    }
}

struct NavigationBridge<'a> {
    state: &'a mut AppState,
    tokens: &'a ThemeTokens,
}

impl NavigationModel for NavigationBridge<'_> {
    fn theme(&self) -> ShellTheme {
        shell_theme(self.tokens)
    }

    fn props(&self) -> SidebarProps {
        let items = Route::ALL
            .into_iter()
            .map(|route| SidebarItem {
                id: route.path().to_string(),
                label: route.label().to_string(),
                description: Some(route.description().to_string()),
                icon: Some(route.icon().to_string()),
                selected: route == self.state.active_route,
            })
            .collect();

        SidebarProps {
            title: Some("LogiCRM".to_string()),
            sections: vec![SidebarSection {
                id: "modulos".to_string(),
                title: "Módulos".to_string(),
                items,
            }],
            collapse_button_tooltip: Some("Plegar navegación".to_string()),
        }
    }

    fn on_item_selected(&mut self, item_id: &str) {
        self.state.activate_route(item_id);
    }
}
