use std::sync::{OnceLock, RwLock};

use eframe::egui::{self, epaint::Shadow, Color32, FontFamily, FontId, Rounding, Stroke, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Modo de tema de toda la aplicación. Se persiste como una de las dos
/// cadenas literales `"light"` / `"dark"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Light
    }
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Claro",
            ThemeMode::Dark => "Oscuro",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    /// El tema se consultó antes de instalarse en el contexto de egui.
    #[error("el tema todavía no fue instalado en el contexto")]
    NotInstalled,
}

#[derive(Clone, Debug)]
pub struct ThemeTokens {
    pub mode: ThemeMode,
    pub palette: ThemePalette,
    pub spacing: ThemeSpacing,
    pub rounding: ThemeRounding,
}

impl ThemeTokens {
    pub fn from_mode(mode: ThemeMode) -> Self {
        let palette = match mode {
            ThemeMode::Dark => ThemePalette::dark(),
            ThemeMode::Light => ThemePalette::light(),
        };
        Self {
            mode,
            palette,
            spacing: ThemeSpacing::default(),
            rounding: ThemeRounding::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ThemePalette {
    pub dark_mode: bool,
    pub root_background: Color32,
    pub panel_background: Color32,
    pub header_background: Color32,
    pub secondary_background: Color32,
    pub extreme_background: Color32,
    pub faint_background: Color32,
    pub text_primary: Color32,
    pub text_weak: Color32,
    pub border: Color32,
    pub selection_background: Color32,
    pub selection_stroke: Stroke,
    pub primary: Color32,
    pub primary_soft: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub danger: Color32,
}

impl ThemePalette {
    fn dark() -> Self {
        Self {
            dark_mode: true,
            root_background: Color32::from_rgb(24, 26, 29),
            panel_background: Color32::from_rgb(30, 32, 36),
            header_background: Color32::from_rgb(38, 40, 45),
            secondary_background: Color32::from_rgb(44, 46, 52),
            extreme_background: Color32::from_rgb(16, 17, 20),
            faint_background: Color32::from_rgb(34, 36, 40),
            text_primary: Color32::from_rgb(222, 224, 228),
            text_weak: Color32::from_rgb(158, 163, 172),
            border: Color32::from_rgb(56, 59, 66),
            selection_background: Color32::from_rgb(42, 60, 88),
            selection_stroke: Stroke::new(1.0, Color32::from_rgb(74, 124, 186)),
            primary: Color32::from_rgb(84, 158, 227),
            primary_soft: Color32::from_rgb(38, 62, 90),
            success: Color32::from_rgb(102, 187, 106),
            warning: Color32::from_rgb(255, 167, 38),
            danger: Color32::from_rgb(229, 115, 115),
        }
    }

    fn light() -> Self {
        Self {
            dark_mode: false,
            root_background: Color32::from_rgb(246, 247, 249),
            panel_background: Color32::from_rgb(252, 252, 253),
            header_background: Color32::from_rgb(238, 240, 244),
            secondary_background: Color32::from_rgb(230, 233, 238),
            extreme_background: Color32::from_rgb(255, 255, 255),
            faint_background: Color32::from_rgb(240, 242, 245),
            text_primary: Color32::from_rgb(34, 39, 46),
            text_weak: Color32::from_rgb(99, 108, 120),
            border: Color32::from_rgb(208, 211, 217),
            selection_background: Color32::from_rgb(204, 229, 255),
            selection_stroke: Stroke::new(1.0, Color32::from_rgb(0, 92, 170)),
            primary: Color32::from_rgb(25, 118, 210),
            primary_soft: Color32::from_rgb(199, 222, 245),
            success: Color32::from_rgb(46, 125, 50),
            warning: Color32::from_rgb(237, 108, 2),
            danger: Color32::from_rgb(198, 40, 40),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ThemeSpacing {
    pub item_spacing: Vec2,
    pub button_padding: Vec2,
    pub interact_size_y: f32,
}

impl Default for ThemeSpacing {
    fn default() -> Self {
        Self {
            item_spacing: Vec2::new(10.0, 8.0),
            button_padding: Vec2::new(12.0, 6.0),
            interact_size_y: 28.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ThemeRounding {
    pub window: Rounding,
    pub menu: Rounding,
    pub widget: Rounding,
}

impl Default for ThemeRounding {
    fn default() -> Self {
        Self {
            window: Rounding::same(6.0),
            menu: Rounding::same(4.0),
            widget: Rounding::same(4.0),
        }
    }
}

type ThemeCell = RwLock<Option<ThemeTokens>>;

static CURRENT_THEME: OnceLock<ThemeCell> = OnceLock::new();

fn cell() -> &'static ThemeCell {
    CURRENT_THEME.get_or_init(|| RwLock::new(None))
}

fn store_tokens(cell: &ThemeCell, tokens: ThemeTokens) {
    if let Ok(mut guard) = cell.write() {
        *guard = Some(tokens);
    }
}

fn read_tokens(cell: &ThemeCell) -> Result<ThemeTokens, ThemeError> {
    cell.read()
        .ok()
        .and_then(|guard| guard.clone())
        .ok_or(ThemeError::NotInstalled)
}

/// Instala el modo indicado: construye los tokens, aplica el estilo al
/// contexto y deja los tokens disponibles para [`tokens`].
pub fn install(ctx: &egui::Context, mode: ThemeMode) {
    let tokens = ThemeTokens::from_mode(mode);
    apply_style(ctx, &tokens);
    store_tokens(cell(), tokens);
}

/// Tokens del tema vigente. Falla de forma explícita si ningún tema fue
/// instalado todavía: el punto de acceso no inventa un valor por defecto.
pub fn tokens() -> Result<ThemeTokens, ThemeError> {
    read_tokens(cell())
}

fn apply_style(ctx: &egui::Context, tokens: &ThemeTokens) {
    let mut style = (*ctx.style()).clone();
    style.visuals = build_visuals(tokens);
    style.spacing.item_spacing = tokens.spacing.item_spacing;
    style.spacing.button_padding = tokens.spacing.button_padding;
    style.spacing.interact_size.y = tokens.spacing.interact_size_y;
    style
        .text_styles
        .insert(egui::TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional));
    style
        .text_styles
        .insert(egui::TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
    style
        .text_styles
        .insert(egui::TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    style
        .text_styles
        .insert(egui::TextStyle::Small, FontId::new(12.0, FontFamily::Proportional));
    style
        .text_styles
        .insert(egui::TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace));

    ctx.set_style(style);
}

fn build_visuals(tokens: &ThemeTokens) -> egui::Visuals {
    let mut visuals = if tokens.palette.dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    visuals.dark_mode = tokens.palette.dark_mode;
    visuals.override_text_color = Some(tokens.palette.text_primary);
    visuals.window_fill = tokens.palette.panel_background;
    visuals.panel_fill = tokens.palette.root_background;
    visuals.extreme_bg_color = tokens.palette.extreme_background;
    visuals.faint_bg_color = tokens.palette.faint_background;
    visuals.selection.bg_fill = tokens.palette.selection_background;
    visuals.selection.stroke = tokens.palette.selection_stroke;
    visuals.window_rounding = tokens.rounding.window;
    visuals.menu_rounding = tokens.rounding.menu;
    visuals.window_shadow = Shadow {
        offset: Vec2::new(0.0, 4.0),
        blur: 16.0,
        spread: 0.0,
        color: Color32::from_rgba_unmultiplied(0, 0, 0, 48),
    };

    let mut noninteractive = visuals.widgets.noninteractive.clone();
    noninteractive.bg_fill = tokens.palette.panel_background;
    noninteractive.bg_stroke = Stroke::new(1.0, tokens.palette.border);
    noninteractive.fg_stroke = Stroke::new(1.0, tokens.palette.text_primary);
    noninteractive.rounding = tokens.rounding.widget;

    let mut inactive = visuals.widgets.inactive.clone();
    inactive.bg_fill = tokens.palette.secondary_background;
    inactive.weak_bg_fill = tokens.palette.secondary_background;
    inactive.bg_stroke = Stroke::new(1.0, tokens.palette.border);
    inactive.fg_stroke = Stroke::new(1.0, tokens.palette.text_primary);
    inactive.rounding = tokens.rounding.widget;

    let mut hovered = visuals.widgets.hovered.clone();
    hovered.bg_fill = tokens.palette.faint_background;
    hovered.weak_bg_fill = tokens.palette.faint_background;
    hovered.bg_stroke = Stroke::new(1.0, tokens.palette.primary);
    hovered.fg_stroke = Stroke::new(1.0, tokens.palette.text_primary);
    hovered.rounding = tokens.rounding.widget;

    let mut active = visuals.widgets.active;
    active.bg_fill = tokens.palette.primary_soft;
    active.weak_bg_fill = tokens.palette.primary_soft;
    active.bg_stroke = Stroke::new(1.0, tokens.palette.primary);
    active.fg_stroke = Stroke::new(1.0, tokens.palette.text_primary);
    active.rounding = tokens.rounding.widget;

    visuals.widgets.noninteractive = noninteractive;
    visuals.widgets.inactive = inactive;
    visuals.widgets.hovered = hovered;
    visuals.widgets.active = active.clone();
    visuals.widgets.open = active;

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_the_original_mode() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn modes_serialize_as_the_two_literal_strings() {
        assert_eq!(serde_json::to_string(&ThemeMode::Light).unwrap(), "\"light\"");
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let parsed: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, ThemeMode::Dark);
    }

    #[test]
    fn accessor_fails_before_any_install() {
        let local: ThemeCell = RwLock::new(None);
        assert!(matches!(
            read_tokens(&local),
            Err(ThemeError::NotInstalled)
        ));
    }

    #[test]
    fn accessor_returns_the_stored_tokens_after_install() {
        let local: ThemeCell = RwLock::new(None);
        store_tokens(&local, ThemeTokens::from_mode(ThemeMode::Dark));
        let tokens = read_tokens(&local).unwrap();
        assert_eq!(tokens.mode, ThemeMode::Dark);
        assert!(tokens.palette.dark_mode);
    }

    #[test]
    fn applied_style_matches_the_mode() {
        let ctx = egui::Context::default();
        apply_style(&ctx, &ThemeTokens::from_mode(ThemeMode::Dark));
        assert!(ctx.style().visuals.dark_mode);

        apply_style(&ctx, &ThemeTokens::from_mode(ThemeMode::Light));
        assert!(!ctx.style().visuals.dark_mode);
    }
}
