use plantstock::core::db::InventoryDb;
use plantstock::entry::PlantaDetails;

/// Creates an InventoryDb backed by a fresh database file.
/// Returns both the db and the temp directory (which must be kept alive).
pub async fn create_test_db() -> (InventoryDb, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("test-inventory.db");
    let db = InventoryDb::new(&path)
        .await
        .expect("Failed to open test database");
    (db, dir)
}

/// Creates PlantaDetails with id 0, as the entry form does for a new item.
pub fn make_details(name: &str, price: &str, quantity: &str) -> PlantaDetails {
    PlantaDetails {
        id: 0,
        name: name.to_string(),
        price: price.to_string(),
        quantity: quantity.to_string(),
    }
}
