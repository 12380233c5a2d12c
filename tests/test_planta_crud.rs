//! Integration tests for Planta CRUD against the sqlite-backed repository.
//!
//! Tests cover:
//! - Inserting with assigned and explicit ids
//! - Querying by id and listing in id order
//! - Updating fields
//! - Deleting

mod common;

use common::*;

#[tokio::test]
async fn test_insert_assigns_id() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;

    // 1. Insert with id 0 ("not yet stored")
    let planta = Planta {
        id: 0,
        name: "Fern".to_string(),
        price: 9.99,
        quantity: 4,
    };
    let stored = db.insert_planta(&planta).await?;

    // 2. Verify the stored row carries a real id
    assert!(stored.id > 0);
    assert_eq!(stored.name, "Fern");
    assert_eq!(stored.price, 9.99);
    assert_eq!(stored.quantity, 4);

    // 3. Reload by id
    let reloaded = db.get_planta_by_id(stored.id).await?;
    assert_eq!(reloaded, Some(stored));

    Ok(())
}

#[tokio::test]
async fn test_insert_keeps_explicit_id() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;

    let planta = Planta {
        id: 42,
        name: "Oak".to_string(),
        price: 3.0,
        quantity: 10,
    };
    let stored = db.insert_planta(&planta).await?;
    assert_eq!(stored, planta);

    Ok(())
}

#[tokio::test]
async fn test_get_plantas_orders_by_id() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;

    for name in ["Fern", "Rose", "Cactus"] {
        db.insert_planta(&Planta {
            id: 0,
            name: name.to_string(),
            price: 1.0,
            quantity: 1,
        })
        .await?;
    }

    let plantas = db.get_plantas().await?;
    assert_eq!(plantas.len(), 3);
    let names: Vec<_> = plantas.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Fern", "Rose", "Cactus"]);
    assert!(plantas.windows(2).all(|w| w[0].id < w[1].id));

    Ok(())
}

#[tokio::test]
async fn test_update_planta() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;

    // 1. Insert
    let stored = db
        .insert_planta(&Planta {
            id: 0,
            name: "Fern".to_string(),
            price: 9.99,
            quantity: 4,
        })
        .await?;

    // 2. Update price and quantity
    let updated = db
        .update_planta(&Planta {
            price: 7.5,
            quantity: 6,
            ..stored.clone()
        })
        .await?;
    assert_eq!(updated.id, stored.id);
    assert_eq!(updated.name, "Fern");
    assert_eq!(updated.price, 7.5);
    assert_eq!(updated.quantity, 6);

    // 3. Verify persisted
    let reloaded = db.get_planta_by_id(stored.id).await?;
    assert_eq!(reloaded, Some(updated));

    Ok(())
}

#[tokio::test]
async fn test_delete_planta() -> anyhow::Result<()> {
    let (db, _temp_dir) = create_test_db().await;

    // 1. Insert
    let stored = db
        .insert_planta(&Planta {
            id: 0,
            name: "Rose".to_string(),
            price: 12.5,
            quantity: 3,
        })
        .await?;
    let id = stored.id;
    assert_eq!(db.get_plantas().await?.len(), 1);

    // 2. Delete
    db.delete_planta(stored).await?;

    // 3. Verify gone
    assert!(db.get_planta_by_id(id).await?.is_none());
    assert!(db.get_plantas().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_database_persists_across_reopen() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let path = dir.path().join("inventory.db");

    let db = InventoryDb::new(&path).await?;
    db.insert_planta(&Planta {
        id: 0,
        name: "Fern".to_string(),
        price: 9.99,
        quantity: 4,
    })
    .await?;
    db.close().await?;

    let db = InventoryDb::new(&path).await?;
    let plantas = db.get_plantas().await?;
    assert_eq!(plantas.len(), 1);
    assert_eq!(plantas[0].name, "Fern");

    Ok(())
}
