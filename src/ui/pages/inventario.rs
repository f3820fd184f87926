use desk_shell::components::{
    draw_data_table, draw_main_content, DataTableModel, DataTableProps, MainContentModel,
    MainContentProps, PaginationProps, TableCell, TableColumn, TableRow,
};
use desk_shell::layout::{LayoutConfig, ShellTheme};
use eframe::egui::{self, RichText};

use crate::state::inventory::{InventoryState, StockStatus};
use crate::state::{AppState, Route};
use crate::ui::theme::ThemeTokens;

pub fn draw(ctx: &egui::Context, layout: &LayoutConfig, state: &mut AppState, tokens: &ThemeTokens) {
    let mut page = InventarioPage {
        inventory: &mut state.inventory,
        tokens,
    };
    draw_main_content(ctx, layout, &mut page);
}

struct InventarioPage<'a> {
    inventory: &'a mut InventoryState,
    tokens: &'a ThemeTokens,
}

impl MainContentModel for InventarioPage<'_> {
    fn theme(&self) -> ShellTheme {
        crate::ui::shell_theme(self.tokens)
    }

    fn props(&self) -> MainContentProps {
        MainContentProps {
            title: Some(Route::Inventario.label().to_string()),
            subtitle: Some(Route::Inventario.description().to_string()),
            actions: Vec::new(),
        }
    }

    fn on_action(&mut self, _action_id: &str) {}

    fn show_content(&mut self, ui: &mut egui::Ui) {
        draw_toolbar(ui, self.inventory, self.tokens);
        ui.add_space(10.0);

        let mut table = InventoryTable {
            inventory: &mut *self.inventory,
            tokens: self.tokens,
        };
        draw_data_table(ui, &mut table);
    }
}

fn draw_toolbar(ui: &mut egui::Ui, inventory: &mut InventoryState, tokens: &ThemeTokens) {
    ui.horizontal(|ui| {
        let mut query = inventory.browser.query().to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut query)
                .hint_text("Buscar por descripción, código o bodega…")
                .desired_width(280.0),
        );
        if response.changed() {
            inventory.browser.set_query(query);
        }

        ui.add_space(12.0);
        ui.label(RichText::new("Disponibilidad").color(tokens.palette.text_weak));

        let selected = inventory
            .browser
            .status_filter()
            .map(StockStatus::label)
            .unwrap_or("Todas");
        egui::ComboBox::from_id_source("inventario_filtro_estado")
            .width(120.0)
            .selected_text(selected)
            .show_ui(ui, |ui| {
                if ui
                    .selectable_label(inventory.browser.status_filter().is_none(), "Todas")
                    .clicked()
                {
                    inventory.browser.set_status_filter(None);
                }
                for status in StockStatus::ALL {
                    if ui
                        .selectable_label(
                            inventory.browser.status_filter() == Some(status),
                            status.label(),
                        )
                        .clicked()
                    {
                        inventory.browser.set_status_filter(Some(status));
                    }
                }
            });
    });
}

struct InventoryTable<'a> {
    inventory: &'a mut InventoryState,
    tokens: &'a ThemeTokens,
}

impl DataTableModel for InventoryTable<'_> {
    fn theme(&self) -> ShellTheme {
        crate::ui::shell_theme(self.tokens)
    }

    fn props(&self) -> DataTableProps {
        let palette = &self.tokens.palette;
        let rows = self
            .inventory
            .browser
            .visible()
            .into_iter()
            .map(|item| {
                let status_color = match item.status {
                    StockStatus::Disponible => palette.success,
                    StockStatus::Reservado => palette.warning,
                    StockStatus::Agotado => palette.danger,
                };
                TableRow {
                    id: item.id.to_string(),
                    cells: vec![
                        TableCell::muted(item.code.as_str()),
                        TableCell::text(item.description.as_str()),
                        TableCell::text(item.warehouse.as_str()),
                        TableCell::text(item.stock.to_string()),
                        TableCell::badge(item.status.label(), status_color),
                    ],
                }
            })
            .collect();

        DataTableProps {
            columns: vec![
                TableColumn::new("codigo", "Código"),
                TableColumn::new("descripcion", "Descripción").with_min_width(200.0),
                TableColumn::new("bodega", "Bodega").with_min_width(110.0),
                TableColumn::new("stock", "Stock"),
                TableColumn::new("estado", "Estado"),
            ],
            rows,
            row_actions: Vec::new(),
            pagination: PaginationProps {
                page: self.inventory.browser.page(),
                page_size: self.inventory.browser.page_size(),
                page_size_options: vec![5, 10, 25],
                total_rows: self.inventory.browser.total_filtered(),
            },
            empty_label: "Sin existencias que coincidan con el filtro.".to_string(),
        }
    }

    fn on_row_action(&mut self, _action_id: &str, _row_id: &str) {}

    fn on_page_change(&mut self, page: usize) {
        self.inventory.browser.set_page(page);
    }

    fn on_page_size_change(&mut self, page_size: usize) {
        self.inventory.browser.set_page_size(page_size);
    }
}
