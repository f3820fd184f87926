pub mod clients;
pub mod dispatches;
pub mod inventory;

pub use clients::ClientsState;
pub use dispatches::DispatchesState;
pub use inventory::InventoryState;

use std::path::PathBuf;

use desk_shell::layout::LayoutConfig;
use desk_shell::AppShell;
use eframe::egui;

use crate::config::AppConfig;
use crate::store::ClientStore;
use crate::ui::theme::{self, ThemeMode};

/// Ancho de ventana bajo el cual la navegación se comporta como capa
/// superpuesta y se pliega al seleccionar una entrada.
const NARROW_VIEWPORT_WIDTH: f32 = 900.0;

/// Rutas de la aplicación. La lista es fija y ordenada; cada ruta corresponde
/// exactamente a una página.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Clientes,
    Inventario,
    Despachos,
    Trazabilidad,
    Reportes,
    Documentos,
    Configuracion,
}

impl Default for Route {
    fn default() -> Self {
        Route::Dashboard
    }
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Dashboard,
        Route::Clientes,
        Route::Inventario,
        Route::Despachos,
        Route::Trazabilidad,
        Route::Reportes,
        Route::Documentos,
        Route::Configuracion,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Clientes => "/clientes",
            Route::Inventario => "/inventario",
            Route::Despachos => "/despachos",
            Route::Trazabilidad => "/trazabilidad",
            Route::Reportes => "/reportes",
            Route::Documentos => "/documentos",
            Route::Configuracion => "/configuracion",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Dashboard => "Inicio",
            Route::Clientes => "Clientes",
            Route::Inventario => "Inventario",
            Route::Despachos => "Despachos",
            Route::Trazabilidad => "Trazabilidad",
            Route::Reportes => "Reportes",
            Route::Documentos => "Documentos",
            Route::Configuracion => "Configuración",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Route::Dashboard => "🏠",
            Route::Clientes => "👥",
            Route::Inventario => "📦",
            Route::Despachos => "🚚",
            Route::Trazabilidad => "🧭",
            Route::Reportes => "📊",
            Route::Documentos => "📄",
            Route::Configuracion => "⚙",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Route::Dashboard => "Resumen general de la operación",
            Route::Clientes => "Cartera de clientes y fichas de contacto",
            Route::Inventario => "Existencias por bodega",
            Route::Despachos => "Guías de despacho y su estado",
            Route::Trazabilidad => "Seguimiento de carga punto a punto",
            Route::Reportes => "Indicadores y reportes operacionales",
            Route::Documentos => "Documentación tributaria y de transporte",
            Route::Configuracion => "Preferencias de la aplicación",
        }
    }

    /// Resolución por coincidencia exacta del path; cualquier otra cadena no
    /// navega.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }
}

pub struct AppState {
    pub config: AppConfig,
    config_path: PathBuf,
    pub layout: LayoutConfig,
    pub theme_mode: ThemeMode,
    pub active_route: Route,
    pub clients: ClientsState,
    pub inventory: InventoryState,
    pub dispatches: DispatchesState,
    pub store: Box<dyn ClientStore>,
}

impl AppState {
    pub fn new(config: AppConfig, config_path: PathBuf, store: Box<dyn ClientStore>) -> Self {
        Self {
            theme_mode: config.theme_mode.unwrap_or_default(),
            config,
            config_path,
            layout: LayoutConfig::default(),
            active_route: Route::default(),
            clients: ClientsState::default(),
            inventory: InventoryState::default(),
            dispatches: DispatchesState::default(),
            store,
        }
    }

    /// Navega a la ruta cuyo path coincide exactamente con `path`.
    pub fn activate_route(&mut self, path: &str) -> bool {
        match Route::from_path(path) {
            Some(route) => {
                self.active_route = route;
                true
            }
            None => {
                log::debug!("ruta desconocida: {path}");
                false
            }
        }
    }

    /// Alterna claro/oscuro y persiste el nuevo modo de forma síncrona. Si la
    /// escritura falla el estado en memoria sigue siendo la referencia.
    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme_mode = self.theme_mode.toggled();
        theme::install(ctx, self.theme_mode);

        self.config.theme_mode = Some(self.theme_mode);
        if let Err(err) = self.config.save(&self.config_path) {
            log::warn!(
                "no se pudo persistir el modo de tema en {}: {err}",
                self.config_path.display()
            );
        }
    }
}

impl AppShell for AppState {
    fn init(&mut self, cc: &eframe::CreationContext<'_>) {
        // Orden de resolución: valor guardado, preferencia del sistema, claro.
        let mode = self.config.theme_mode.unwrap_or_else(|| {
            match cc.integration_info.system_theme {
                Some(eframe::Theme::Dark) => ThemeMode::Dark,
                Some(eframe::Theme::Light) | None => ThemeMode::Light,
            }
        });
        self.theme_mode = mode;
        theme::install(&cc.egui_ctx, mode);
    }

    fn update(&mut self, ctx: &egui::Context) {
        let narrow = ctx.screen_rect().width() < NARROW_VIEWPORT_WIDTH;
        self.layout.set_overlay_navigation(narrow);
        crate::ui::draw_ui(ctx, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LoggingStore;

    fn test_state() -> (AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let state = AppState::new(AppConfig::default(), path, Box::new(LoggingStore::default()));
        (state, dir)
    }

    #[test]
    fn the_route_list_is_fixed_and_ordered() {
        let paths: Vec<&str> = Route::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "/clientes",
                "/inventario",
                "/despachos",
                "/trazabilidad",
                "/reportes",
                "/documentos",
                "/configuracion",
            ]
        );
    }

    #[test]
    fn each_path_resolves_to_exactly_one_route() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/clientes/"), None);
        assert_eq!(Route::from_path("/otra"), None);
    }

    #[test]
    fn activating_a_route_updates_the_state() {
        let (mut state, _dir) = test_state();
        assert_eq!(state.active_route, Route::Dashboard);

        assert!(state.activate_route("/clientes"));
        assert_eq!(state.active_route, Route::Clientes);

        assert!(!state.activate_route("/desconocida"));
        assert_eq!(state.active_route, Route::Clientes);
    }

    #[test]
    fn theme_toggle_persists_and_is_an_involution() {
        let (mut state, dir) = test_state();
        let path = dir.path().join("config.json");
        let ctx = egui::Context::default();
        assert_eq!(state.theme_mode, ThemeMode::Light);

        state.toggle_theme(&ctx);
        assert_eq!(state.theme_mode, ThemeMode::Dark);
        assert_eq!(AppConfig::load(&path).theme_mode, Some(ThemeMode::Dark));

        state.toggle_theme(&ctx);
        assert_eq!(state.theme_mode, ThemeMode::Light);
        assert_eq!(AppConfig::load(&path).theme_mode, Some(ThemeMode::Light));
    }
}
