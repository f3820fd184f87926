use desk_shell::components::{self, FormField, ModalFormModel, ModalFormProps};
use desk_shell::layout::ShellTheme;
use eframe::egui;

use crate::state::clients::{ClientKind, ClientStatus, ClientsState};
use crate::state::AppState;
use crate::store::ClientStore;
use crate::ui::theme::ThemeTokens;

pub fn draw_client_editor(ctx: &egui::Context, state: &mut AppState, tokens: &ThemeTokens) {
    let mut bridge = EditorBridge {
        clients: &mut state.clients,
        store: state.store.as_mut(),
        tokens,
    };
    components::draw_modal_form(ctx, &mut bridge);
}

struct EditorBridge<'a> {
    clients: &'a mut ClientsState,
    store: &'a mut dyn ClientStore,
    tokens: &'a ThemeTokens,
}

impl ModalFormModel for EditorBridge<'_> {
    fn theme(&self) -> ShellTheme {
        crate::ui::shell_theme(self.tokens)
    }

    fn is_open(&self) -> bool {
        self.clients.editor.is_some()
    }

    fn props(&self) -> ModalFormProps {
        let Some(editor) = self.clients.editor.as_ref() else {
            return ModalFormProps {
                title: String::new(),
                fields: Vec::new(),
                submit_label: None,
                cancel_label: "Cerrar".to_string(),
                min_width: 380.0,
            };
        };

        let editable = editor.mode.fields_editable();
        let draft = &editor.draft;
        let field = |f: FormField| if editable { f } else { f.read_only() };

        let fields = vec![
            field(FormField::text("codigo", "Código", draft.code.as_str())),
            field(FormField::text("razon_social", "Razón social", draft.name.as_str())),
            field(FormField::text("rut", "RUT", draft.tax_id.as_str())),
            field(FormField::text("ciudad", "Ciudad", draft.city.as_str())),
            field(FormField::select(
                "tipo",
                "Tipo",
                draft.kind.label(),
                ClientKind::ALL.iter().map(|k| k.label().to_string()).collect(),
            )),
            field(FormField::text("sector", "Sector", draft.sector.as_str())),
            field(FormField::select(
                "estado",
                "Estado",
                draft.status.label(),
                ClientStatus::ALL
                    .iter()
                    .map(|s| s.label().to_string())
                    .collect(),
            )),
            field(FormField::text("contacto", "Contacto", draft.contact.as_str())),
            field(FormField::text("email", "Email", draft.email.as_str())),
            field(FormField::text("telefono", "Teléfono", draft.phone.as_str())),
            field(FormField::text("direccion", "Dirección", draft.address.as_str())),
            field(FormField::multiline("notas", "Notas", draft.notes.as_str())),
        ];

        ModalFormProps {
            title: editor.mode.title().to_string(),
            fields,
            submit_label: editor.mode.submit_label().map(String::from),
            cancel_label: if editable { "Cancelar" } else { "Cerrar" }.to_string(),
            min_width: 380.0,
        }
    }

    fn on_field_change(&mut self, field_id: &str, value: String) {
        if let Some(editor) = self.clients.editor.as_mut() {
            if editor.mode.fields_editable() {
                editor.draft.set_field(field_id, value);
            }
        }
    }

    fn on_submit(&mut self) {
        self.clients.submit_editor(self.store);
    }

    fn on_dismiss(&mut self) {
        self.clients.dismiss_editor();
    }
}
