use eframe::egui::{self, Color32, Margin, Stroke};

/// Conjunto mínimo de tokens de estilo utilizados por los componentes del shell.
#[derive(Clone, Debug)]
pub struct ShellTheme {
    pub root_background: Color32,
    pub surface_background: Color32,
    pub header_background: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub accent_soft: Color32,
}

impl Default for ShellTheme {
    fn default() -> Self {
        Self {
            root_background: Color32::from_rgb(246, 247, 249),
            surface_background: Color32::from_rgb(252, 252, 253),
            header_background: Color32::from_rgb(238, 240, 244),
            border: Color32::from_rgb(208, 211, 217),
            text_primary: Color32::from_rgb(34, 39, 46),
            text_muted: Color32::from_rgb(99, 108, 120),
            accent: Color32::from_rgb(25, 118, 210),
            accent_soft: Color32::from_rgb(199, 222, 245),
        }
    }
}

/// Controla la visibilidad y el ancho de los paneles principales del layout.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
    pub show_header: bool,
    pub show_navigation: bool,
    pub navigation_width: f32,
    navigation_collapsed: bool,
    overlay_navigation: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            show_header: true,
            show_navigation: true,
            navigation_width: 240.0,
            navigation_collapsed: false,
            overlay_navigation: false,
        }
    }
}

impl LayoutConfig {
    pub fn navigation_collapsed(&self) -> bool {
        self.navigation_collapsed
    }

    pub fn set_navigation_collapsed(&mut self, collapsed: bool) {
        self.navigation_collapsed = collapsed;
    }

    /// En ventanas angostas la navegación se presenta como capa superpuesta:
    /// al seleccionar una entrada el panel vuelve a plegarse.
    pub fn overlay_navigation(&self) -> bool {
        self.overlay_navigation
    }

    pub fn set_overlay_navigation(&mut self, overlay: bool) {
        self.overlay_navigation = overlay;
    }
}

/// Envoltorio utilitario que pinta un panel principal centralizado.
pub(crate) fn main_surface_frame(theme: &ShellTheme) -> egui::Frame {
    egui::Frame::none()
        .fill(theme.surface_background)
        .stroke(Stroke::new(1.0, theme.border))
        .inner_margin(Margin {
            left: 18.0,
            right: 18.0,
            top: 18.0,
            bottom: 14.0,
        })
}
