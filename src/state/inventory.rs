use crate::browse::{BrowseRecord, Browser};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockStatus {
    Disponible,
    Reservado,
    Agotado,
}

impl StockStatus {
    pub const ALL: [StockStatus; 3] = [
        StockStatus::Disponible,
        StockStatus::Reservado,
        StockStatus::Agotado,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Disponible => "Disponible",
            StockStatus::Reservado => "Reservado",
            StockStatus::Agotado => "Agotado",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InventoryItem {
    pub id: u32,
    pub code: String,
    pub description: String,
    pub warehouse: String,
    pub stock: u32,
    pub status: StockStatus,
}

impl BrowseRecord for InventoryItem {
    type Status = StockStatus;

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.description, &self.code, &self.warehouse]
    }

    fn status(&self) -> StockStatus {
        self.status
    }
}

pub struct InventoryState {
    pub browser: Browser<InventoryItem>,
}

impl Default for InventoryState {
    fn default() -> Self {
        Self {
            browser: Browser::new(sample_inventory(), 10),
        }
    }
}

pub fn sample_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: 1,
            code: "INV-1001".into(),
            description: "Pallet europeo 120x80".into(),
            warehouse: "Bodega Central".into(),
            stock: 320,
            status: StockStatus::Disponible,
        },
        InventoryItem {
            id: 2,
            code: "INV-1002".into(),
            description: "Contenedor refrigerado 20 pies".into(),
            warehouse: "Patio Puerto".into(),
            stock: 6,
            status: StockStatus::Reservado,
        },
        InventoryItem {
            id: 3,
            code: "INV-1003".into(),
            description: "Film stretch industrial".into(),
            warehouse: "Bodega Central".into(),
            stock: 0,
            status: StockStatus::Agotado,
        },
        InventoryItem {
            id: 4,
            code: "INV-1004".into(),
            description: "Caja isotérmica 40 L".into(),
            warehouse: "Bodega Sur".into(),
            stock: 84,
            status: StockStatus::Disponible,
        },
        InventoryItem {
            id: 5,
            code: "INV-1005".into(),
            description: "Zuncho plástico 16 mm".into(),
            warehouse: "Bodega Sur".into(),
            stock: 45,
            status: StockStatus::Disponible,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_generic_browser_also_drives_inventory() {
        let mut state = InventoryState::default();

        state.browser.set_query("bodega sur");
        let codes: Vec<&str> = state
            .browser
            .visible()
            .iter()
            .map(|i| i.code.as_str())
            .collect();
        assert_eq!(codes, vec!["INV-1004", "INV-1005"]);

        state.browser.set_query("");
        state.browser.set_status_filter(Some(StockStatus::Agotado));
        assert_eq!(state.browser.total_filtered(), 1);
    }
}
