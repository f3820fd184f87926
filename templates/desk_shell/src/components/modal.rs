use eframe::egui::{self, Align, Align2, Layout, RichText};

use crate::layout::ShellTheme;

/// Widget de captura asociado a un campo del formulario.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldWidget {
    Text,
    Multiline,
    Select(Vec<String>),
}

#[derive(Clone, Debug)]
pub struct FormField {
    pub id: String,
    pub label: String,
    pub value: String,
    pub editable: bool,
    pub widget: FieldWidget,
}

impl FormField {
    pub fn text(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
            editable: true,
            widget: FieldWidget::Text,
        }
    }

    pub fn multiline(
        id: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            widget: FieldWidget::Multiline,
            ..Self::text(id, label, value)
        }
    }

    pub fn select(
        id: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            widget: FieldWidget::Select(options),
            ..Self::text(id, label, value)
        }
    }

    pub fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }
}

/// Un `submit_label` ausente indica un formulario de solo lectura: la única
/// acción disponible es cerrar.
#[derive(Clone, Debug)]
pub struct ModalFormProps {
    pub title: String,
    pub fields: Vec<FormField>,
    pub submit_label: Option<String>,
    pub cancel_label: String,
    pub min_width: f32,
}

pub trait ModalFormModel {
    fn theme(&self) -> ShellTheme;
    fn is_open(&self) -> bool;
    fn props(&self) -> ModalFormProps;
    fn on_field_change(&mut self, field_id: &str, value: String);
    fn on_submit(&mut self);
    fn on_dismiss(&mut self);
}

pub fn draw_modal_form(ctx: &egui::Context, model: &mut dyn ModalFormModel) {
    if !model.is_open() {
        return;
    }

    let theme = model.theme();
    let props = model.props();
    let mut keep_open = true;

    egui::Window::new(&props.title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .open(&mut keep_open)
        .show(ctx, |ui| {
            ui.set_min_width(props.min_width);

            egui::Grid::new("modal_form_fields")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for field in &props.fields {
                        ui.label(RichText::new(&field.label).color(theme.text_muted));
                        draw_field(ui, model, field);
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            ui.separator();
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if let Some(submit_label) = props.submit_label.as_ref() {
                    let button = egui::Button::new(
                        RichText::new(submit_label).color(egui::Color32::WHITE),
                    )
                    .fill(theme.accent);
                    if ui.add(button).clicked() {
                        model.on_submit();
                    }
                }
                if ui.button(&props.cancel_label).clicked() {
                    model.on_dismiss();
                }
            });
        });

    if !keep_open {
        model.on_dismiss();
    }
}

fn draw_field(ui: &mut egui::Ui, model: &mut dyn ModalFormModel, field: &FormField) {
    let mut value = field.value.clone();
    match &field.widget {
        FieldWidget::Text => {
            let response = ui.add_enabled(
                field.editable,
                egui::TextEdit::singleline(&mut value).desired_width(240.0),
            );
            if response.changed() {
                model.on_field_change(&field.id, value);
            }
        }
        FieldWidget::Multiline => {
            let response = ui.add_enabled(
                field.editable,
                egui::TextEdit::multiline(&mut value)
                    .desired_width(240.0)
                    .desired_rows(3),
            );
            if response.changed() {
                model.on_field_change(&field.id, value);
            }
        }
        FieldWidget::Select(options) => {
            let mut changed = false;
            ui.add_enabled_ui(field.editable, |ui| {
                egui::ComboBox::from_id_source(&field.id)
                    .width(240.0)
                    .selected_text(value.clone())
                    .show_ui(ui, |ui| {
                        for option in options {
                            if ui.selectable_label(value == *option, option).clicked() {
                                value = option.clone();
                                changed = true;
                            }
                        }
                    });
            });
            if changed {
                model.on_field_change(&field.id, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_fields_are_not_editable() {
        let field = FormField::text("codigo", "Código", "CLI-001").read_only();
        assert!(!field.editable);
        assert_eq!(field.widget, FieldWidget::Text);
    }

    #[test]
    fn select_keeps_its_options() {
        let field = FormField::select(
            "estado",
            "Estado",
            "Activo",
            vec!["Activo".into(), "Inactivo".into()],
        );
        match field.widget {
            FieldWidget::Select(options) => assert_eq!(options.len(), 2),
            other => panic!("widget inesperado: {:?}", other),
        }
    }
}
