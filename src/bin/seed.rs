use storefront_api::{
    config::AppConfig,
    db::{create_orm_conn, sync_schema},
    dto::{products::CreateProductRequest, users::RegisterRequest},
    error::AppError,
    models::{Category, ROLE_ADMIN, ROLE_USER},
    state::AppState,
};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url, config.max_connections).await?;
    sync_schema(&orm).await?;
    let state = AppState::new(orm);

    let admin_id = ensure_user(&state, "admin", "admin123", ROLE_ADMIN).await?;
    let user_id = ensure_user(&state, "lisa", "765", ROLE_USER).await?;
    seed_catalog(&state).await?;

    println!("Seed completed. Admin ID: {admin_id}, User ID: {user_id}");
    Ok(())
}

async fn ensure_user(
    state: &AppState,
    username: &str,
    password: &str,
    role: &str,
) -> anyhow::Result<Uuid> {
    let payload = RegisterRequest {
        username: username.to_string(),
        password: password.to_string(),
        email: format!("{username}@example.com"),
        address: String::new(),
    };

    let user_id = match state.users.add_user_with_role(payload, role).await {
        Ok(user) => user.id,
        Err(AppError::DuplicateUser(_)) => state
            .users
            .get_user_by_username(username)
            .await?
            .map(|user| user.id)
            .ok_or_else(|| anyhow::anyhow!("user {username} disappeared"))?,
        Err(err) => return Err(err.into()),
    };

    println!("Ensured user {username} (role={role})");
    Ok(user_id)
}

async fn ensure_category(state: &AppState, name: &str) -> anyhow::Result<Category> {
    let existing = state
        .categories
        .get_categories()
        .await?
        .into_iter()
        .find(|category| category.name == name);
    match existing {
        Some(category) => Ok(category),
        None => Ok(state.categories.add_category(name).await?),
    }
}

async fn seed_catalog(state: &AppState) -> anyhow::Result<()> {
    let catalog = vec![
        ("Beverages", "Cold Brew Coffee", "Slow steeped for 18 hours", 45000, 500, 40),
        ("Beverages", "Green Tea", "Loose leaf, 100g tin", 30000, 120, 60),
        ("Snacks", "Roasted Almonds", "Lightly salted", 52000, 250, 80),
        ("Snacks", "Dark Chocolate Bar", "72% cacao", 25000, 100, 150),
    ];

    let existing: Vec<String> = state
        .products
        .get_products()
        .await?
        .into_iter()
        .map(|product| product.name)
        .collect();

    for (category, name, description, price, weight, quantity) in catalog {
        if existing.iter().any(|n| n == name) {
            continue;
        }
        let category = ensure_category(state, category).await?;
        state
            .products
            .add_product(CreateProductRequest {
                name: name.to_string(),
                category_id: category.id,
                description: Some(description.to_string()),
                price,
                image: None,
                weight,
                quantity,
            })
            .await?;
    }

    println!("Seeded catalog");
    Ok(())
}
