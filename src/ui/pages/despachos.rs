use desk_shell::components::{
    draw_data_table, draw_main_content, DataTableModel, DataTableProps, MainContentModel,
    MainContentProps, PaginationProps, TableCell, TableColumn, TableRow,
};
use desk_shell::layout::{LayoutConfig, ShellTheme};
use eframe::egui::{self, RichText};

use crate::state::dispatches::{DispatchStatus, DispatchesState};
use crate::state::{AppState, Route};
use crate::ui::theme::ThemeTokens;

pub fn draw(ctx: &egui::Context, layout: &LayoutConfig, state: &mut AppState, tokens: &ThemeTokens) {
    let mut page = DespachosPage {
        dispatches: &mut state.dispatches,
        tokens,
    };
    draw_main_content(ctx, layout, &mut page);
}

struct DespachosPage<'a> {
    dispatches: &'a mut DispatchesState,
    tokens: &'a ThemeTokens,
}

impl MainContentModel for DespachosPage<'_> {
    fn theme(&self) -> ShellTheme {
        crate::ui::shell_theme(self.tokens)
    }

    fn props(&self) -> MainContentProps {
        MainContentProps {
            title: Some(Route::Despachos.label().to_string()),
            subtitle: Some(Route::Despachos.description().to_string()),
            actions: Vec::new(),
        }
    }

    fn on_action(&mut self, _action_id: &str) {}

    fn show_content(&mut self, ui: &mut egui::Ui) {
        draw_toolbar(ui, self.dispatches, self.tokens);
        ui.add_space(10.0);

        let mut table = DispatchTable {
            dispatches: &mut *self.dispatches,
            tokens: self.tokens,
        };
        draw_data_table(ui, &mut table);
    }
}

fn draw_toolbar(ui: &mut egui::Ui, dispatches: &mut DispatchesState, tokens: &ThemeTokens) {
    ui.horizontal(|ui| {
        let mut query = dispatches.browser.query().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("Buscar por cliente, guía o destino…")
                .desired_width(280.0),
        );
        if response.changed() {
            dispatches.browser.set_query(query);
        }

        ui.add_space(12.0);
        ui.label(RichText::new("Estado").color(tokens.palette.text_weak));

        let selected = dispatches
            .browser
            .status_filter()
            .map(DispatchStatus::label)
            .unwrap_or("Todos");
        egui::ComboBox::from_id_source("despachos_filtro_estado")
            .width(120.0)
            .selected_text(selected)
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(dispatches.browser.status_filter().is_none(), "Todos")
                    .clicked()
                {
                    dispatches.browser.set_status_filter(None);
                }
                for status in DispatchStatus::ALL {
                    if ui
                        .selectable_label(
                            dispatches.browser.status_filter() == Some(status),
                            status.label(),
                        )
                        .clicked()
                    {
                        dispatches.browser.set_status_filter(Some(status));
                    }
                }
            });
    });
}

struct DispatchTable<'a> {
    dispatches: &'a mut DispatchesState,
    tokens: &'a ThemeTokens,
}

impl DataTableModel for DispatchTable<'_> {
    fn theme(&self) -> ShellTheme {
        crate::ui::shell_theme(self.tokens)
    }

    fn props(&self) -> DataTableProps {
        let palette = &self.tokens.palette;
        let rows = self
            .dispatches
            .browser
            .visible()
            .into_iter()
            .map(|dispatch| {
                let status_color = match dispatch.status {
                    DispatchStatus::Programado => palette.primary,
                    DispatchStatus::EnRuta => palette.warning,
                    DispatchStatus::Entregado => palette.success,
                    DispatchStatus::Retrasado => palette.danger,
                };
                TableRow {
                    id: dispatch.id.to_string(),
                    cells: vec![
                        TableCell::muted(dispatch.code.as_str()),
                        TableCell::text(dispatch.client.as_str()),
                        TableCell::text(dispatch.destination.as_str()),
                        TableCell::text(dispatch.carrier.as_str()),
                        TableCell::text(dispatch.scheduled_for.format("%d-%m-%Y").to_string()),
                        TableCell::badge(dispatch.status.label(), status_color),
                    ],
                }
            })
            .collect();

        DataTableProps {
            columns: vec![
                TableColumn::new("guia", "Guía"),
                TableColumn::new("cliente", "Cliente").with_min_width(170.0),
                TableColumn::new("destino", "Destino").with_min_width(110.0),
                TableColumn::new("transportista", "Transportista").with_min_width(140.0),
                TableColumn::new("fecha", "Fecha"),
                TableColumn::new("estado", "Estado"),
            ],
            rows,
            row_actions: Vec::new(),
            pagination: PaginationProps {
                page: self.dispatches.browser.page(),
                page_size: self.dispatches.browser.page_size(),
                page_size_options: vec![5, 10, 25],
                total_rows: self.dispatches.browser.total_filtered(),
            },
            empty_label: "Sin despachos que coincidan con el filtro.".to_string(),
        }
    }

    fn on_row_action(&mut self, _action_id: &str, _row_id: &str) {}

    fn on_page_change(&mut self, page: usize) {
        self.dispatches.browser.set_page(page);
    }

    fn on_page_size_change(&mut self, page_size: usize) {
        self.dispatches.browser.set_page_size(page_size);
    }
}
