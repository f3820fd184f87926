//! Motor genérico de listado: búsqueda por texto, filtro de estado y
//! paginación sobre un conjunto de registros en memoria.

/// Contrato mínimo que debe cumplir un registro para poder listarse.
pub trait BrowseRecord {
    type Status: Copy + PartialEq;

    /// Campos sobre los que aplica la búsqueda por subcadena.
    fn search_haystack(&self) -> Vec<&str>;

    fn status(&self) -> Self::Status;
}

/// Estado de listado de una página: consulta de texto libre, filtro de
/// igualdad sobre el estado y ventana de paginación. Las filas visibles son
/// siempre un tramo contiguo de la secuencia filtrada, en orden de inserción.
pub struct Browser<R: BrowseRecord> {
    records: Vec<R>,
    query: String,
    status_filter: Option<R::Status>,
    page: usize,
    page_size: usize,
}

impl<R: BrowseRecord> Browser<R> {
    pub fn new(records: Vec<R>, page_size: usize) -> Self {
        Self {
            records,
            query: String::new(),
            status_filter: None,
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 0;
    }

    pub fn status_filter(&self) -> Option<R::Status> {
        self.status_filter
    }

    pub fn set_status_filter(&mut self, filter: Option<R::Status>) {
        self.status_filter = filter;
        self.page = 0;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count().saturating_sub(1));
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Cambiar el tamaño de página siempre vuelve a la primera página para no
    /// dejar la ventana fuera de rango.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    /// Secuencia filtrada completa, en el orden original de los registros.
    pub fn filtered(&self) -> Vec<&R> {
        let needle = self.query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|record| self.matches(record, &needle))
            .collect()
    }

    pub fn total_filtered(&self) -> usize {
        self.filtered().len()
    }

    pub fn page_count(&self) -> usize {
        let total = self.total_filtered();
        if total == 0 {
            return 1;
        }
        (total + self.page_size - 1) / self.page_size
    }

    /// Ventana visible: el tramo `[page * page_size, page * page_size + page_size)`
    /// de la secuencia filtrada. Un resultado vacío es un estado válido.
    pub fn visible(&self) -> Vec<&R> {
        self.filtered()
            .into_iter()
            .skip(self.page * self.page_size)
            .take(self.page_size)
            .collect()
    }

    fn matches(&self, record: &R, needle: &str) -> bool {
        if let Some(wanted) = self.status_filter {
            if record.status() != wanted {
                return false;
            }
        }
        if needle.is_empty() {
            return true;
        }
        record
            .search_haystack()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Estado {
        Activo,
        Inactivo,
    }

    struct Registro {
        nombre: &'static str,
        rut: &'static str,
        codigo: &'static str,
        estado: Estado,
    }

    impl BrowseRecord for Registro {
        type Status = Estado;

        fn search_haystack(&self) -> Vec<&str> {
            vec![self.nombre, self.rut, self.codigo]
        }

        fn status(&self) -> Estado {
            self.estado
        }
    }

    fn registros() -> Vec<Registro> {
        vec![
            Registro {
                nombre: "Lácteos del Sur",
                rut: "76.412.880-1",
                codigo: "CLI-001",
                estado: Estado::Activo,
            },
            Registro {
                nombre: "Transportes Andina",
                rut: "77.204.331-5",
                codigo: "CLI-002",
                estado: Estado::Activo,
            },
            Registro {
                nombre: "Comercial Huemul",
                rut: "65.118.902-K",
                codigo: "CLI-003",
                estado: Estado::Inactivo,
            },
            Registro {
                nombre: "Viñedos Itata",
                rut: "96.553.710-7",
                codigo: "CLI-004",
                estado: Estado::Activo,
            },
            Registro {
                nombre: "Distribuidora Austral",
                rut: "78.990.120-3",
                codigo: "CLI-005",
                estado: Estado::Activo,
            },
        ]
    }

    fn codigos(rows: &[&Registro]) -> Vec<&'static str> {
        rows.iter().map(|r| r.codigo).collect()
    }

    #[test]
    fn visible_window_is_a_contiguous_run_of_the_filtered_sequence() {
        let mut browser = Browser::new(registros(), 2);

        for page in 0..browser.page_count() {
            browser.set_page(page);
            let visible = browser.visible();
            assert!(visible.len() <= browser.page_size());

            let filtered = browser.filtered();
            let start = page * browser.page_size();
            let expected: Vec<&str> = filtered
                .iter()
                .skip(start)
                .take(browser.page_size())
                .map(|r| r.codigo)
                .collect();
            assert_eq!(codigos(&visible), expected);
        }
    }

    #[test]
    fn changing_page_size_resets_the_page_index() {
        let mut browser = Browser::new(registros(), 2);
        browser.set_page(2);
        assert_eq!(browser.page(), 2);

        browser.set_page_size(3);
        assert_eq!(browser.page(), 0);
        assert_eq!(codigos(&browser.visible()), vec!["CLI-001", "CLI-002", "CLI-003"]);
    }

    #[test]
    fn search_is_case_insensitive_including_accents() {
        let mut browser = Browser::new(registros(), 10);

        browser.set_query("lácteos");
        let lower = codigos(&browser.visible());
        browser.set_query("LÁCTEOS");
        let upper = codigos(&browser.visible());

        assert_eq!(lower, vec!["CLI-001"]);
        assert_eq!(lower, upper);
    }

    #[test]
    fn search_matches_any_haystack_field() {
        let mut browser = Browser::new(registros(), 10);

        browser.set_query("cli-004");
        assert_eq!(codigos(&browser.visible()), vec!["CLI-004"]);

        browser.set_query("77.204");
        assert_eq!(codigos(&browser.visible()), vec!["CLI-002"]);
    }

    #[test]
    fn status_filter_is_exact_and_clearable() {
        let mut browser = Browser::new(registros(), 10);

        browser.set_status_filter(Some(Estado::Activo));
        assert_eq!(browser.total_filtered(), 4);
        assert!(browser.visible().iter().all(|r| r.estado == Estado::Activo));

        browser.set_query("comercial");
        assert!(browser.visible().is_empty());

        browser.set_status_filter(None);
        assert_eq!(codigos(&browser.visible()), vec!["CLI-003"]);
    }

    #[test]
    fn empty_result_is_a_valid_state() {
        let mut browser = Browser::new(registros(), 10);
        browser.set_query("no existe en ninguna parte");
        assert_eq!(browser.total_filtered(), 0);
        assert!(browser.visible().is_empty());
        assert_eq!(browser.page_count(), 1);
    }

    #[test]
    fn filtered_sequence_preserves_insertion_order() {
        let browser = Browser::new(registros(), 10);
        assert_eq!(
            codigos(&browser.filtered()),
            vec!["CLI-001", "CLI-002", "CLI-003", "CLI-004", "CLI-005"]
        );
    }

    #[test]
    fn page_is_clamped_to_the_last_page() {
        let mut browser = Browser::new(registros(), 2);
        browser.set_page(99);
        assert_eq!(browser.page(), 2);
        assert_eq!(codigos(&browser.visible()), vec!["CLI-005"]);
    }
}
