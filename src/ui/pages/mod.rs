mod clientes;
mod configuracion;
mod dashboard;
mod despachos;
mod inventario;
mod placeholder;

use desk_shell::layout::LayoutConfig;
use eframe::egui;

use crate::state::{AppState, Route};
use crate::ui::theme::ThemeTokens;

pub fn draw_active_page(
    ctx: &egui::Context,
    layout: &LayoutConfig,
    state: &mut AppState,
    tokens: &ThemeTokens,
) {
    match state.active_route {
        Route::Dashboard => dashboard::draw(ctx, layout, state, tokens),
        Route::Clientes => clientes::draw(ctx, layout, state, tokens),
        Route::Inventario => inventario::draw(ctx, layout, state, tokens),
        Route::Despachos => despachos::draw(ctx, layout, state, tokens),
        Route::Configuracion => configuracion::draw(ctx, layout, state, tokens),
        route @ (Route::Trazabilidad | Route::Reportes | Route::Documentos) => {
            placeholder::draw(ctx, layout, route, tokens)
        }
    }
}
