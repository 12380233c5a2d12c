use sqlx::FromRow;

/// A persisted inventory item.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Planta {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

pub trait PlantaRepository {
    fn get_plantas(&self) -> impl Future<Output = anyhow::Result<Vec<Planta>>>;
    fn get_planta_by_id(&self, id: i64) -> impl Future<Output = anyhow::Result<Option<Planta>>>;
    fn insert_planta(&self, planta: &Planta) -> impl Future<Output = anyhow::Result<Planta>>;
    fn update_planta(&self, planta: &Planta) -> impl Future<Output = anyhow::Result<Planta>>;
    fn delete_planta(&self, planta: Planta) -> impl Future<Output = anyhow::Result<()>>;
}
