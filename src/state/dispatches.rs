use chrono::NaiveDate;

use crate::browse::{BrowseRecord, Browser};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchStatus {
    Programado,
    EnRuta,
    Entregado,
    Retrasado,
}

impl DispatchStatus {
    pub const ALL: [DispatchStatus; 4] = [
        DispatchStatus::Programado,
        DispatchStatus::EnRuta,
        DispatchStatus::Entregado,
        DispatchStatus::Retrasado,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DispatchStatus::Programado => "Programado",
            DispatchStatus::EnRuta => "En ruta",
            DispatchStatus::Entregado => "Entregado",
            DispatchStatus::Retrasado => "Retrasado",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DispatchRecord {
    pub id: u32,
    pub code: String,
    pub client: String,
    pub destination: String,
    pub carrier: String,
    pub status: DispatchStatus,
    pub scheduled_for: NaiveDate,
}

impl BrowseRecord for DispatchRecord {
    type Status = DispatchStatus;

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.client, &self.code, &self.destination]
    }

    fn status(&self) -> DispatchStatus {
        self.status
    }
}

pub struct DispatchesState {
    pub browser: Browser<DispatchRecord>,
}

impl Default for DispatchesState {
    fn default() -> Self {
        Self {
            browser: Browser::new(sample_dispatches(), 10),
        }
    }
}

pub fn sample_dispatches() -> Vec<DispatchRecord> {
    let fecha = |y: i32, m: u32, d: u32| {
        NaiveDate::from_ymd_opt(y, m, d).expect("fecha de muestra válida")
    };

    vec![
        DispatchRecord {
            id: 1,
            code: "GD-2451".into(),
            client: "Lácteos del Sur SpA".into(),
            destination: "Puerto Montt".into(),
            carrier: "Transportes Andina".into(),
            status: DispatchStatus::EnRuta,
            scheduled_for: fecha(2025, 7, 28),
        },
        DispatchRecord {
            id: 2,
            code: "GD-2452".into(),
            client: "Viñedos Itata S.A.".into(),
            destination: "Valparaíso".into(),
            carrier: "Ruta Austral Cargo".into(),
            status: DispatchStatus::Programado,
            scheduled_for: fecha(2025, 8, 4),
        },
        DispatchRecord {
            id: 3,
            code: "GD-2453".into(),
            client: "Comercial Huemul".into(),
            destination: "Temuco".into(),
            carrier: "Transportes Andina".into(),
            status: DispatchStatus::Entregado,
            scheduled_for: fecha(2025, 7, 15),
        },
        DispatchRecord {
            id: 4,
            code: "GD-2454".into(),
            client: "Lácteos del Sur SpA".into(),
            destination: "Castro".into(),
            carrier: "Naviera Chiloé".into(),
            status: DispatchStatus::Retrasado,
            scheduled_for: fecha(2025, 7, 22),
        },
        DispatchRecord {
            id: 5,
            code: "GD-2455".into(),
            client: "Viñedos Itata S.A.".into(),
            destination: "Concepción".into(),
            carrier: "Ruta Austral Cargo".into(),
            status: DispatchStatus::Programado,
            scheduled_for: fecha(2025, 8, 11),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_filter_by_status_and_text_together() {
        let mut state = DispatchesState::default();

        state.browser.set_status_filter(Some(DispatchStatus::Programado));
        state.browser.set_query("viñedos");
        let codes: Vec<&str> = state
            .browser
            .visible()
            .iter()
            .map(|d| d.code.as_str())
            .collect();
        assert_eq!(codes, vec!["GD-2452", "GD-2455"]);
    }
}
