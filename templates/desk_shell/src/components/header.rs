use eframe::egui::{self, Align, Layout, Margin, RichText, Rounding, Sense};

use crate::layout::{LayoutConfig, ShellTheme};

#[derive(Clone, Debug)]
pub struct HeaderProps {
    pub title: String,
    pub subtitle: Option<String>,
    pub actions: Vec<HeaderAction>,
    pub logo_acronym: Option<String>,
}

impl Default for HeaderProps {
    fn default() -> Self {
        Self {
            title: "Shell".to_string(),
            subtitle: None,
            actions: Vec::new(),
            logo_acronym: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HeaderAction {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub tooltip: Option<String>,
    pub enabled: bool,
}

impl HeaderAction {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            tooltip: None,
            enabled: true,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

pub trait HeaderModel {
    fn theme(&self) -> ShellTheme;
    fn props(&self) -> HeaderProps;
    fn on_action(&mut self, action_id: &str);
}

pub fn draw_header(ctx: &egui::Context, layout: &LayoutConfig, model: &mut dyn HeaderModel) {
    if !layout.show_header {
        return;
    }

    let theme = model.theme();
    let props = model.props();

    egui::TopBottomPanel::top("shell_header")
        .exact_height(56.0)
        .frame(
            egui::Frame::none()
                .fill(theme.header_background)
                .stroke(egui::Stroke::new(1.0, theme.border))
                .inner_margin(Margin {
                    left: 16.0,
                    right: 16.0,
                    top: 8.0,
                    bottom: 8.0,
                }),
        )
        .show(ctx, |ui| {
            ui.set_height(40.0);
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                ui.spacing_mut().item_spacing.x = 10.0;
                if let Some(acronym) = props.logo_acronym.as_deref() {
                    draw_logo(ui, &theme, acronym);
                }

                ui.vertical(|ui| {
                    ui.strong(
                        RichText::new(&props.title)
                            .color(theme.text_primary)
                            .size(18.0),
                    );
                    if let Some(subtitle) = props.subtitle.as_ref() {
                        ui.small(RichText::new(subtitle).color(theme.text_muted));
                    }
                });

                ui.add_space(ui.available_width());
                for action in props.actions.iter() {
                    let mut button = egui::Button::new(
                        match &action.icon {
                            Some(icon) => RichText::new(format!("{} {}", icon, action.label)),
                            None => RichText::new(action.label.clone()),
                        }
                        .color(theme.text_primary),
                    )
                    .min_size(egui::vec2(0.0, 32.0));
                    if !action.enabled {
                        button = button.sense(Sense::hover());
                    }
                    let mut response = ui.add(button);
                    if let Some(tooltip) = &action.tooltip {
                        response = response.on_hover_text(tooltip);
                    }
                    if action.enabled && response.clicked() {
                        model.on_action(&action.id);
                    }
                }
            });
        });
}

fn draw_logo(ui: &mut egui::Ui, theme: &ShellTheme, acronym: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(32.0, 32.0), Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect(
        rect,
        Rounding::same(6.0),
        theme.accent_soft,
        egui::Stroke::new(1.5, theme.accent),
    );

    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        acronym,
        egui::FontId::proportional(14.0),
        theme.text_primary,
    );
}
