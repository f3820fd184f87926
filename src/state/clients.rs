use chrono::NaiveDate;

use crate::browse::{BrowseRecord, Browser};
use crate::store::ClientStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientStatus {
    Activo,
    Inactivo,
    Suspendido,
}

impl ClientStatus {
    pub const ALL: [ClientStatus; 3] = [
        ClientStatus::Activo,
        ClientStatus::Inactivo,
        ClientStatus::Suspendido,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ClientStatus::Activo => "Activo",
            ClientStatus::Inactivo => "Inactivo",
            ClientStatus::Suspendido => "Suspendido",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientKind {
    Corporativo,
    Pyme,
    Persona,
}

impl ClientKind {
    pub const ALL: [ClientKind; 3] = [
        ClientKind::Corporativo,
        ClientKind::Pyme,
        ClientKind::Persona,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ClientKind::Corporativo => "Corporativo",
            ClientKind::Pyme => "Pyme",
            ClientKind::Persona => "Persona",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

/// Ficha de cliente tal como la entrega el conjunto de muestra en memoria.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientRecord {
    pub id: u32,
    pub code: String,
    pub name: String,
    pub tax_id: String,
    pub city: String,
    pub kind: ClientKind,
    pub sector: String,
    pub status: ClientStatus,
    pub contact: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub last_activity: NaiveDate,
}

impl BrowseRecord for ClientRecord {
    type Status = ClientStatus;

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.name, &self.tax_id, &self.code]
    }

    fn status(&self) -> ClientStatus {
        self.status
    }
}

/// Copia mutable de los campos del cliente, propiedad exclusiva del diálogo
/// de edición mientras está abierto. Nunca comparte memoria con la fila
/// mostrada: se descarta al cerrar.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientDraft {
    pub code: String,
    pub name: String,
    pub tax_id: String,
    pub city: String,
    pub kind: ClientKind,
    pub sector: String,
    pub status: ClientStatus,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub notes: String,
}

impl ClientDraft {
    pub fn empty() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            tax_id: String::new(),
            city: String::new(),
            kind: ClientKind::Pyme,
            sector: String::new(),
            status: ClientStatus::Activo,
            contact: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            notes: String::new(),
        }
    }

    pub fn from_record(record: &ClientRecord) -> Self {
        Self {
            code: record.code.clone(),
            name: record.name.clone(),
            tax_id: record.tax_id.clone(),
            city: record.city.clone(),
            kind: record.kind,
            sector: record.sector.clone(),
            status: record.status,
            contact: record.contact.clone(),
            email: record.email.clone(),
            phone: record.phone.clone().unwrap_or_default(),
            address: record.address.clone().unwrap_or_default(),
            notes: record.notes.clone().unwrap_or_default(),
        }
    }

    /// Aplica el cambio de un campo del formulario identificado por su id.
    pub fn set_field(&mut self, field_id: &str, value: String) {
        match field_id {
            "codigo" => self.code = value,
            "razon_social" => self.name = value,
            "rut" => self.tax_id = value,
            "ciudad" => self.city = value,
            "tipo" => {
                if let Some(kind) = ClientKind::from_label(&value) {
                    self.kind = kind;
                }
            }
            "sector" => self.sector = value,
            "estado" => {
                if let Some(status) = ClientStatus::from_label(&value) {
                    self.status = status;
                }
            }
            "contacto" => self.contact = value,
            "email" => self.email = value,
            "telefono" => self.phone = value,
            "direccion" => self.address = value,
            "notas" => self.notes = value,
            other => log::debug!("campo de formulario desconocido: {other}"),
        }
    }

    /// Normaliza el borrador antes de entregarlo al almacén: recorta espacios
    /// y deja el email en minúsculas.
    pub fn normalized(&self) -> Self {
        Self {
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
            tax_id: self.tax_id.trim().to_string(),
            city: self.city.trim().to_string(),
            kind: self.kind,
            sector: self.sector.trim().to_string(),
            status: self.status,
            contact: self.contact.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            notes: self.notes.trim().to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit,
    View,
}

impl EditorMode {
    pub fn title(self) -> &'static str {
        match self {
            EditorMode::Create => "Nuevo cliente",
            EditorMode::Edit => "Editar cliente",
            EditorMode::View => "Detalle del cliente",
        }
    }

    /// Etiqueta del botón de confirmación. En modo detalle no hay envío: la
    /// única acción disponible es cerrar.
    pub fn submit_label(self) -> Option<&'static str> {
        match self {
            EditorMode::Create => Some("Crear cliente"),
            EditorMode::Edit => Some("Guardar cambios"),
            EditorMode::View => None,
        }
    }

    pub fn fields_editable(self) -> bool {
        !matches!(self, EditorMode::View)
    }
}

#[derive(Clone, Debug)]
pub struct ClientEditor {
    pub mode: EditorMode,
    pub draft: ClientDraft,
}

/// Estado de la página de clientes: el listado y, si está abierto, el diálogo
/// de edición.
pub struct ClientsState {
    pub browser: Browser<ClientRecord>,
    pub editor: Option<ClientEditor>,
}

impl Default for ClientsState {
    fn default() -> Self {
        Self {
            browser: Browser::new(sample_clients(), 10),
            editor: None,
        }
    }
}

impl ClientsState {
    pub fn find_record(&self, row_id: &str) -> Option<&ClientRecord> {
        self.browser
            .records()
            .iter()
            .find(|record| record.id.to_string() == row_id)
    }

    pub fn open_create(&mut self) {
        self.editor = Some(ClientEditor {
            mode: EditorMode::Create,
            draft: ClientDraft::empty(),
        });
    }

    pub fn open_edit(&mut self, record: &ClientRecord) {
        self.editor = Some(ClientEditor {
            mode: EditorMode::Edit,
            draft: ClientDraft::from_record(record),
        });
    }

    pub fn open_view(&mut self, record: &ClientRecord) {
        self.editor = Some(ClientEditor {
            mode: EditorMode::View,
            draft: ClientDraft::from_record(record),
        });
    }

    pub fn dismiss_editor(&mut self) {
        self.editor = None;
    }

    /// Entrega el borrador normalizado al almacén y cierra el diálogo sólo si
    /// el almacén lo acepta. El modo detalle nunca llega al almacén.
    pub fn submit_editor(&mut self, store: &mut dyn ClientStore) {
        let Some(editor) = self.editor.as_ref() else {
            return;
        };
        if editor.mode == EditorMode::View {
            return;
        }
        match store.save(&editor.draft.normalized()) {
            Ok(()) => {
                self.editor = None;
            }
            Err(err) => {
                log::warn!("no se pudo confirmar el borrador: {err}");
            }
        }
    }
}

/// Conjunto de muestra embebido en el cliente. En un sistema real estos
/// registros los entrega la API del backend.
pub fn sample_clients() -> Vec<ClientRecord> {
    let fecha = |y: i32, m: u32, d: u32| {
        NaiveDate::from_ymd_opt(y, m, d).expect("fecha de muestra válida")
    };

    vec![
        ClientRecord {
            id: 1,
            code: "CLI-001".into(),
            name: "Lácteos del Sur SpA".into(),
            tax_id: "76.412.880-1".into(),
            city: "Puerto Montt".into(),
            kind: ClientKind::Corporativo,
            sector: "Alimentos y bebidas".into(),
            status: ClientStatus::Activo,
            contact: "Marcela Soto".into(),
            email: "msoto@lacteosdelsur.cl".into(),
            phone: Some("+56 65 231 4890".into()),
            address: Some("Ruta 5 Sur km 1021, Puerto Montt".into()),
            notes: Some("Retiros refrigerados los lunes y jueves.".into()),
            last_activity: fecha(2025, 6, 18),
        },
        ClientRecord {
            id: 2,
            code: "CLI-002".into(),
            name: "Transportes Andina Ltda.".into(),
            tax_id: "77.204.331-5".into(),
            city: "Santiago".into(),
            kind: ClientKind::Pyme,
            sector: "Transporte".into(),
            status: ClientStatus::Activo,
            contact: "Rodrigo Paredes".into(),
            email: "rparedes@tandina.cl".into(),
            phone: Some("+56 2 2844 7712".into()),
            address: None,
            notes: None,
            last_activity: fecha(2025, 7, 2),
        },
        ClientRecord {
            id: 3,
            code: "CLI-003".into(),
            name: "Comercial Huemul".into(),
            tax_id: "65.118.902-K".into(),
            city: "Temuco".into(),
            kind: ClientKind::Pyme,
            sector: "Retail".into(),
            status: ClientStatus::Inactivo,
            contact: "Paula Riquelme".into(),
            email: "priquelme@chuemul.cl".into(),
            phone: None,
            address: Some("Av. Alemania 0671, Temuco".into()),
            notes: Some("Sin despachos desde marzo; contrato en revisión.".into()),
            last_activity: fecha(2025, 3, 11),
        },
        ClientRecord {
            id: 4,
            code: "CLI-004".into(),
            name: "Viñedos Itata S.A.".into(),
            tax_id: "96.553.710-7".into(),
            city: "Chillán".into(),
            kind: ClientKind::Corporativo,
            sector: "Agroindustria".into(),
            status: ClientStatus::Activo,
            contact: "Andrés Fuentealba".into(),
            email: "afuentealba@vitata.cl".into(),
            phone: Some("+56 42 221 9034".into()),
            address: None,
            notes: None,
            last_activity: fecha(2025, 6, 30),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{LoggingStore, StoreError};

    #[derive(Default)]
    struct RecordingStore {
        saved: Vec<ClientDraft>,
    }

    impl ClientStore for RecordingStore {
        fn save(&mut self, draft: &ClientDraft) -> Result<(), StoreError> {
            self.saved.push(draft.clone());
            Ok(())
        }
    }

    struct RejectingStore;

    impl ClientStore for RejectingStore {
        fn save(&mut self, _draft: &ClientDraft) -> Result<(), StoreError> {
            Err(StoreError::Rejected("sin conexión".into()))
        }
    }

    #[test]
    fn sample_set_matches_the_expected_shape() {
        let clients = sample_clients();
        assert_eq!(clients.len(), 4);
        let inactivos = clients
            .iter()
            .filter(|c| c.status == ClientStatus::Inactivo)
            .count();
        assert_eq!(inactivos, 1);
    }

    #[test]
    fn filtering_actives_and_paginating_by_two() {
        let mut state = ClientsState::default();
        state.browser.set_status_filter(Some(ClientStatus::Activo));
        assert_eq!(state.browser.total_filtered(), 3);

        state.browser.set_page_size(2);
        let first: Vec<&str> = state
            .browser
            .visible()
            .iter()
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(first, vec!["CLI-001", "CLI-002"]);

        state.browser.set_page(1);
        let second: Vec<&str> = state
            .browser
            .visible()
            .iter()
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(second, vec!["CLI-004"]);
    }

    #[test]
    fn accented_search_ignores_case() {
        let mut state = ClientsState::default();

        state.browser.set_query("lácteos");
        let lower: Vec<u32> = state.browser.visible().iter().map(|c| c.id).collect();
        state.browser.set_query("LÁCTEOS");
        let upper: Vec<u32> = state.browser.visible().iter().map(|c| c.id).collect();

        assert_eq!(lower, vec![1]);
        assert_eq!(lower, upper);
    }

    #[test]
    fn view_mode_never_reaches_the_store() {
        let mut state = ClientsState::default();
        let record = state.browser.records()[0].clone();
        state.open_view(&record);

        let mut store = RecordingStore::default();
        state.submit_editor(&mut store);

        assert!(store.saved.is_empty());
        assert!(state.editor.is_some(), "el diálogo de detalle sigue abierto");
        assert_eq!(
            state.editor.as_ref().map(|e| e.mode),
            Some(EditorMode::View)
        );
    }

    #[test]
    fn accepted_submit_closes_the_dialog_and_keeps_the_list_intact() {
        let mut state = ClientsState::default();
        let before = state.browser.records().to_vec();
        let record = before[0].clone();

        state.open_edit(&record);
        if let Some(editor) = state.editor.as_mut() {
            editor.draft.set_field("ciudad", "Osorno".into());
        }

        let mut store = RecordingStore::default();
        state.submit_editor(&mut store);

        assert_eq!(store.saved.len(), 1);
        assert_eq!(store.saved[0].city, "Osorno");
        assert!(state.editor.is_none());
        // El envío nunca muta la lista mostrada: el borrador es una copia.
        assert_eq!(state.browser.records(), &before[..]);
    }

    #[test]
    fn rejected_submit_keeps_the_dialog_open() {
        let mut state = ClientsState::default();
        state.open_create();

        state.submit_editor(&mut RejectingStore);
        assert!(state.editor.is_some());
    }

    #[test]
    fn drafts_are_normalized_before_reaching_the_store() {
        let mut state = ClientsState::default();
        state.open_create();
        if let Some(editor) = state.editor.as_mut() {
            editor.draft.set_field("razon_social", "  Frigorífico Llanquihue  ".into());
            editor.draft.set_field("email", "  Ventas@FrigoLL.CL ".into());
        }

        let mut store = RecordingStore::default();
        state.submit_editor(&mut store);

        assert_eq!(store.saved[0].name, "Frigorífico Llanquihue");
        assert_eq!(store.saved[0].email, "ventas@frigoll.cl");
    }

    #[test]
    fn editor_mode_actions() {
        assert_eq!(EditorMode::Create.submit_label(), Some("Crear cliente"));
        assert_eq!(EditorMode::Edit.submit_label(), Some("Guardar cambios"));
        assert_eq!(EditorMode::View.submit_label(), None);
        assert!(!EditorMode::View.fields_editable());
        assert!(EditorMode::Create.fields_editable());
    }

    #[test]
    fn select_fields_map_labels_back_to_variants() {
        let mut draft = ClientDraft::empty();
        draft.set_field("estado", "Suspendido".into());
        draft.set_field("tipo", "Persona".into());
        assert_eq!(draft.status, ClientStatus::Suspendido);
        assert_eq!(draft.kind, ClientKind::Persona);

        // Etiquetas desconocidas no cambian el valor vigente.
        draft.set_field("estado", "Desconocido".into());
        assert_eq!(draft.status, ClientStatus::Suspendido);
    }

    #[test]
    fn logging_store_is_the_default_sink() {
        let mut state = ClientsState::default();
        state.open_create();
        state.submit_editor(&mut LoggingStore::default());
        assert!(state.editor.is_none());
    }
}
