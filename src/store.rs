use thiserror::Error;

use crate::state::clients::ClientDraft;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("el almacén rechazó el registro: {0}")]
    Rejected(String),
}

/// Punto de integración con la capa de persistencia. El diálogo de edición
/// entrega aquí el borrador confirmado; la implementación real (API del
/// backend) queda a cargo de quien la integre.
pub trait ClientStore {
    fn save(&mut self, draft: &ClientDraft) -> Result<(), StoreError>;
}

/// Implementación incluida con el cliente: registra el borrador en la bitácora
/// y lo acepta. No persiste nada.
#[derive(Default)]
pub struct LoggingStore;

impl ClientStore for LoggingStore {
    fn save(&mut self, draft: &ClientDraft) -> Result<(), StoreError> {
        log::info!(
            "borrador de cliente listo para persistir: código={} razón social={}",
            draft.code,
            draft.name
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_store_accepts_every_draft() {
        let mut store = LoggingStore::default();
        let draft = ClientDraft::empty();
        assert!(store.save(&draft).is_ok());
    }
}
