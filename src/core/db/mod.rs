mod planta;
mod state;

use std::{path::Path, sync::Arc};

use state::InventoryState;

pub use planta::{Planta, PlantaRepository};

/// Handle to the inventory database. Cheap to clone; all clones share
/// one connection pool.
#[derive(Debug, Clone)]
pub struct InventoryDb {
    state: Arc<InventoryState>,
}

impl InventoryDb {
    /// Open (creating if missing) the database at `db_file` and run any
    /// pending migrations.
    pub async fn new<P: AsRef<Path>>(db_file: P) -> anyhow::Result<Self> {
        Ok(Self {
            state: Arc::new(InventoryState::new(db_file).await?),
        })
    }

    pub async fn close(&self) -> anyhow::Result<()> {
        self.state.close().await
    }
}

impl PlantaRepository for InventoryDb {
    async fn get_plantas(&self) -> anyhow::Result<Vec<Planta>> {
        Ok(sqlx::query_as::<_, Planta>(
            r#"SELECT id, name, price, quantity FROM planta ORDER BY id ASC"#,
        )
        .fetch_all(self.state.pool())
        .await?)
    }

    async fn get_planta_by_id(&self, id: i64) -> anyhow::Result<Option<Planta>> {
        Ok(sqlx::query_as::<_, Planta>(
            r#"SELECT id, name, price, quantity FROM planta WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(self.state.pool())
        .await?)
    }

    async fn insert_planta(&self, planta: &Planta) -> anyhow::Result<Planta> {
        // id 0 means "not yet stored": bind NULL and let sqlite assign one.
        let id = (planta.id != 0).then_some(planta.id);
        let record = sqlx::query_as::<_, Planta>(
            r#"INSERT INTO planta (id, name, price, quantity) VALUES ($1, $2, $3, $4)
            RETURNING id, name, price, quantity"#,
        )
        .bind(id)
        .bind(&planta.name)
        .bind(planta.price)
        .bind(planta.quantity)
        .fetch_one(self.state.pool())
        .await?;
        tracing::info!(id = record.id, name = %record.name, "inserted planta");
        Ok(record)
    }

    async fn update_planta(&self, planta: &Planta) -> anyhow::Result<Planta> {
        let record = sqlx::query_as::<_, Planta>(
            r#"UPDATE planta SET name = $1, price = $2, quantity = $3
            WHERE id = $4
            RETURNING id, name, price, quantity"#,
        )
        .bind(&planta.name)
        .bind(planta.price)
        .bind(planta.quantity)
        .bind(planta.id)
        .fetch_one(self.state.pool())
        .await?;
        Ok(record)
    }

    async fn delete_planta(&self, planta: Planta) -> anyhow::Result<()> {
        sqlx::query(r#"DELETE FROM planta WHERE id = $1"#)
            .bind(planta.id)
            .execute(self.state.pool())
            .await?;
        Ok(())
    }
}
