use desk_shell::components::{
    draw_data_table, draw_main_content, DataTableModel, DataTableProps, MainContentAction,
    MainContentModel, MainContentProps, PaginationProps, RowAction, TableCell, TableColumn,
    TableRow,
};
use desk_shell::layout::{LayoutConfig, ShellTheme};
use eframe::egui::{self, RichText};

use crate::state::clients::{ClientStatus, ClientsState};
use crate::state::{AppState, Route};
use crate::ui::theme::ThemeTokens;

pub fn draw(ctx: &egui::Context, layout: &LayoutConfig, state: &mut AppState, tokens: &ThemeTokens) {
    let mut page = ClientesPage {
        clients: &mut state.clients,
        tokens,
    };
    draw_main_content(ctx, layout, &mut page);
}

struct ClientesPage<'a> {
    clients: &'a mut ClientsState,
    tokens: &'a ThemeTokens,
}

impl MainContentModel for ClientesPage<'_> {
    fn theme(&self) -> ShellTheme {
        crate::ui::shell_theme(self.tokens)
    }

    fn props(&self) -> MainContentProps {
        MainContentProps {
            title: Some(Route::Clientes.label().to_string()),
            subtitle: Some(Route::Clientes.description().to_string()),
            actions: vec![MainContentAction::new("nuevo-cliente", "Nuevo cliente").with_icon("➕")],
        }
    }

    fn on_action(&mut self, action_id: &str) {
        if action_id == "nuevo-cliente" {
            self.clients.open_create();
        }
    }

    fn show_content(&mut self, ui: &mut egui::Ui) {
        draw_toolbar(ui, self.clients, self.tokens);
        ui.add_space(10.0);

        let mut table = ClientsTable {
            clients: &mut *self.clients,
            tokens: self.tokens,
        };
        draw_data_table(ui, &mut table);
    }
}

fn draw_toolbar(ui: &mut egui::Ui, clients: &mut ClientsState, tokens: &ThemeTokens) {
    ui.horizontal(|ui| {
        let mut query = clients.browser.query().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("Buscar por razón social, RUT o código…")
                .desired_width(280.0),
        );
        if response.changed() {
            clients.browser.set_query(query);
        }

        ui.add_space(12.0);
        ui.label(RichText::new("Estado").color(tokens.palette.text_weak));

        let selected = clients
            .browser
            .status_filter()
            .map(ClientStatus::label)
            .unwrap_or("Todos");
        egui::ComboBox::from_id_source("clientes_filtro_estado")
            .width(120.0)
            .selected_text(selected)
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(clients.browser.status_filter().is_none(), "Todos")
                    .clicked()
                {
                    clients.browser.set_status_filter(None);
                }
                for status in ClientStatus::ALL {
                    if ui
                        .selectable_label(
                            clients.browser.status_filter() == Some(status),
                            status.label(),
                        )
                        .clicked()
                    {
                        clients.browser.set_status_filter(Some(status));
                    }
                }
            });
    });
}

struct ClientsTable<'a> {
    clients: &'a mut ClientsState,
    tokens: &'a ThemeTokens,
}

impl DataTableModel for ClientsTable<'_> {
    fn theme(&self) -> ShellTheme {
        crate::ui::shell_theme(self.tokens)
    }

    fn props(&self) -> DataTableProps {
        let palette = &self.tokens.palette;
        let rows = self
            .clients
            .browser
            .visible()
            .into_iter()
            .map(|record| {
                let status_color = match record.status {
                    ClientStatus::Activo => palette.success,
                    ClientStatus::Inactivo => palette.danger,
                    ClientStatus::Suspendido => palette.warning,
                };
                TableRow {
                    id: record.id.to_string(),
                    cells: vec![
                        TableCell::muted(record.code.as_str()),
                        TableCell::text(record.name.as_str()),
                        TableCell::text(record.tax_id.as_str()),
                        TableCell::text(record.city.as_str()),
                        TableCell::text(record.kind.label()),
                        TableCell::text(record.sector.as_str()),
                        TableCell::badge(record.status.label(), status_color),
                    ],
                }
            })
            .collect();

        DataTableProps {
            columns: vec![
                TableColumn::new("codigo", "Código"),
                TableColumn::new("razon_social", "Razón social").with_min_width(160.0),
                TableColumn::new("rut", "RUT").with_min_width(100.0),
                TableColumn::new("ciudad", "Ciudad"),
                TableColumn::new("tipo", "Tipo"),
                TableColumn::new("sector", "Sector").with_min_width(120.0),
                TableColumn::new("estado", "Estado"),
            ],
            rows,
            row_actions: vec![
                RowAction::new("ver", "👁", "Ver detalle"),
                RowAction::new("editar", "✏", "Editar"),
            ],
            pagination: PaginationProps {
                page: self.clients.browser.page(),
                page_size: self.clients.browser.page_size(),
                page_size_options: vec![5, 10, 25],
                total_rows: self.clients.browser.total_filtered(),
            },
            empty_label: "Sin clientes que coincidan con el filtro.".to_string(),
        }
    }

    fn on_row_action(&mut self, action_id: &str, row_id: &str) {
        let Some(record) = self.clients.find_record(row_id).cloned() else {
            return;
        };
        match action_id {
            "ver" => self.clients.open_view(&record),
            "editar" => self.clients.open_edit(&record),
            other => log::debug!("acción de fila desconocida: {other}"),
        }
    }

    fn on_page_change(&mut self, page: usize) {
        self.clients.browser.set_page(page);
    }

    fn on_page_size_change(&mut self, page_size: usize) {
        self.clients.browser.set_page_size(page_size);
    }
}
