use eframe::egui::{self, Align, Color32, Layout, Margin, RichText, Rounding};
use egui_extras::{Column, TableBuilder};

use crate::layout::ShellTheme;

#[derive(Clone, Debug)]
pub struct TableColumn {
    pub id: String,
    pub title: String,
    pub min_width: f32,
}

impl TableColumn {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            min_width: 70.0,
        }
    }

    pub fn with_min_width(mut self, min_width: f32) -> Self {
        self.min_width = min_width;
        self
    }
}

/// Celda a renderizar: texto plano, texto atenuado o etiqueta de estado.
#[derive(Clone, Debug)]
pub struct TableCell {
    pub text: String,
    pub muted: bool,
    pub badge: Option<Color32>,
}

impl TableCell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            muted: false,
            badge: None,
        }
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            muted: true,
            badge: None,
        }
    }

    pub fn badge(text: impl Into<String>, color: Color32) -> Self {
        Self {
            text: text.into(),
            muted: false,
            badge: Some(color),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TableRow {
    pub id: String,
    pub cells: Vec<TableCell>,
}

#[derive(Clone, Debug)]
pub struct RowAction {
    pub id: String,
    pub icon: String,
    pub tooltip: String,
}

impl RowAction {
    pub fn new(id: impl Into<String>, icon: impl Into<String>, tooltip: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            icon: icon.into(),
            tooltip: tooltip.into(),
        }
    }
}

/// Estado de paginación mostrado en el pie de la tabla. `page` es base cero;
/// el rango visible se reporta en base uno para el usuario.
#[derive(Clone, Debug)]
pub struct PaginationProps {
    pub page: usize,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub total_rows: usize,
}

impl PaginationProps {
    pub fn page_count(&self) -> usize {
        if self.total_rows == 0 || self.page_size == 0 {
            return 1;
        }
        (self.total_rows + self.page_size - 1) / self.page_size
    }

    /// Rango visible en base uno, `(0, 0)` cuando no hay filas.
    pub fn window(&self) -> (usize, usize) {
        if self.total_rows == 0 {
            return (0, 0);
        }
        let start = self.page * self.page_size;
        if start >= self.total_rows {
            return (0, 0);
        }
        let end = (start + self.page_size).min(self.total_rows);
        (start + 1, end)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }
}

#[derive(Clone, Debug)]
pub struct DataTableProps {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
    pub row_actions: Vec<RowAction>,
    pub pagination: PaginationProps,
    pub empty_label: String,
}

pub trait DataTableModel {
    fn theme(&self) -> ShellTheme;
    fn props(&self) -> DataTableProps;
    fn on_row_action(&mut self, action_id: &str, row_id: &str);
    fn on_page_change(&mut self, page: usize);
    fn on_page_size_change(&mut self, page_size: usize);
}

pub fn draw_data_table(ui: &mut egui::Ui, model: &mut dyn DataTableModel) {
    let theme = model.theme();
    let props = model.props();

    let has_actions = !props.row_actions.is_empty();

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in &props.columns {
        builder = builder.column(Column::auto().at_least(column.min_width));
    }
    builder = builder.column(Column::remainder());

    builder
        .header(26.0, |mut header| {
            for column in &props.columns {
                header.col(|ui| {
                    ui.strong(
                        RichText::new(&column.title)
                            .color(theme.text_muted)
                            .size(12.0),
                    );
                });
            }
            header.col(|ui| {
                if has_actions {
                    ui.strong(RichText::new("Acciones").color(theme.text_muted).size(12.0));
                }
            });
        })
        .body(|mut body| {
            for row in &props.rows {
                body.row(30.0, |mut table_row| {
                    for cell in &row.cells {
                        table_row.col(|ui| {
                            draw_cell(ui, &theme, cell);
                        });
                    }
                    table_row.col(|ui| {
                        for action in &props.row_actions {
                            let response = ui
                                .small_button(&action.icon)
                                .on_hover_text(&action.tooltip);
                            if response.clicked() {
                                model.on_row_action(&action.id, &row.id);
                            }
                        }
                    });
                });
            }
        });

    if props.rows.is_empty() {
        ui.add_space(18.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&props.empty_label).color(theme.text_muted));
        });
        ui.add_space(18.0);
    }

    ui.separator();
    draw_pagination(ui, &theme, &props.pagination, model);
}

fn draw_cell(ui: &mut egui::Ui, theme: &ShellTheme, cell: &TableCell) {
    match cell.badge {
        Some(color) => {
            egui::Frame::none()
                .fill(color.gamma_multiply(0.18))
                .rounding(Rounding::same(8.0))
                .inner_margin(Margin::symmetric(8.0, 2.0))
                .show(ui, |ui| {
                    ui.label(RichText::new(&cell.text).color(color).size(12.0));
                });
        }
        None => {
            let color = if cell.muted {
                theme.text_muted
            } else {
                theme.text_primary
            };
            ui.label(RichText::new(&cell.text).color(color));
        }
    }
}

fn draw_pagination(
    ui: &mut egui::Ui,
    theme: &ShellTheme,
    pagination: &PaginationProps,
    model: &mut dyn DataTableModel,
) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Filas por página").color(theme.text_muted).size(12.0));
        let mut page_size = pagination.page_size;
        egui::ComboBox::from_id_source("data_table_page_size")
            .width(60.0)
            .selected_text(page_size.to_string())
            .show_ui(ui, |ui| {
                for option in &pagination.page_size_options {
                    if ui
                        .selectable_label(page_size == *option, option.to_string())
                        .clicked()
                    {
                        page_size = *option;
                    }
                }
            });
        if page_size != pagination.page_size {
            model.on_page_size_change(page_size);
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui
                .add_enabled(pagination.has_next(), egui::Button::new("›"))
                .clicked()
            {
                model.on_page_change(pagination.page + 1);
            }
            if ui
                .add_enabled(pagination.has_previous(), egui::Button::new("‹"))
                .clicked()
            {
                model.on_page_change(pagination.page - 1);
            }
            let (start, end) = pagination.window();
            ui.label(
                RichText::new(format!("{}–{} de {}", start, end, pagination.total_rows))
                    .color(theme.text_muted)
                    .size(12.0),
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pagination(page: usize, page_size: usize, total_rows: usize) -> PaginationProps {
        PaginationProps {
            page,
            page_size,
            page_size_options: vec![5, 10, 25],
            total_rows,
        }
    }

    #[test]
    fn window_reports_one_based_range() {
        assert_eq!(pagination(0, 10, 42).window(), (1, 10));
        assert_eq!(pagination(4, 10, 42).window(), (41, 42));
    }

    #[test]
    fn window_is_empty_without_rows() {
        assert_eq!(pagination(0, 10, 0).window(), (0, 0));
        assert_eq!(pagination(3, 10, 12).window(), (0, 0));
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(pagination(0, 10, 42).page_count(), 5);
        assert_eq!(pagination(0, 10, 40).page_count(), 4);
        assert_eq!(pagination(0, 10, 0).page_count(), 1);
    }

    #[test]
    fn navigation_bounds() {
        let first = pagination(0, 10, 42);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = pagination(4, 10, 42);
        assert!(last.has_previous());
        assert!(!last.has_next());
    }
}
