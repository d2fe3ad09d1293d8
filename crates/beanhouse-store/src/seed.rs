//! Fixed bean catalogue loaded on first startup.

use beanhouse_core::{NewBean, ShopError};
use tracing::info;

use crate::Store;

/// Beans the shop opens with.
pub const CATALOGUE: [NewBean<'static>; 3] = [
    NewBean {
        name: "Yirgacheffe",
        origin: "Ethiopia",
        roast_level: "Light",
        flavor: "floral, lemon, citrus",
        price: 180,
    },
    NewBean {
        name: "Mandheling G1",
        origin: "Indonesia",
        roast_level: "Dark",
        flavor: "herbal, butter, dark chocolate",
        price: 150,
    },
    NewBean {
        name: "Cerrado",
        origin: "Brazil",
        roast_level: "Medium",
        flavor: "nutty, caramel, low acidity",
        price: 120,
    },
];

/// Seeds the catalogue if the bean table is empty. Returns the number of rows inserted.
pub fn seed_if_empty(store: &Store) -> Result<usize, ShopError> {
    let count = store.count_beans()?;
    if count > 0 {
        info!("Database already has {} beans, skipping seed", count);
        return Ok(0);
    }

    store.insert_beans(&CATALOGUE)?;
    for bean in &CATALOGUE {
        info!("  Seeded: {} ({})", bean.name, bean.origin);
    }
    info!("Seeded {} beans", CATALOGUE.len());
    Ok(CATALOGUE.len())
}
