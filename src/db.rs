use std::time::Duration;

use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};

use crate::entity::{CartProducts, Carts, Categories, Products, Users};

/// Create a SeaORM connection pool.
pub async fn create_orm_conn(database_url: &str, max_connections: u32) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;
    tracing::debug!(max_connections, "database connection established");
    Ok(conn)
}

/// Creates any missing table straight from the entity definitions.
///
/// Tables are created parents first so foreign keys resolve. Existing tables
/// are left untouched; there is no versioned migration history.
pub async fn sync_schema(conn: &DatabaseConnection) -> Result<()> {
    create_table(conn, Users).await?;
    create_table(conn, Categories).await?;
    create_table(conn, Products).await?;
    create_table(conn, Carts).await?;
    create_table(conn, CartProducts).await?;
    Ok(())
}

async fn create_table<E>(conn: &DatabaseConnection, entity: E) -> Result<()>
where
    E: EntityTrait + Copy,
{
    let table = entity.table_name().to_owned();
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    conn.execute(backend.build(&statement)).await?;
    for mut index in schema.create_index_from_entity(entity) {
        index.if_not_exists();
        conn.execute(backend.build(&index)).await?;
    }
    tracing::debug!(table = %table, "table ensured");
    Ok(())
}
