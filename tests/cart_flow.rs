mod common;

use std::collections::HashSet;

use storefront_api::{
    dto::carts::{CartRequest, UpdateCartProductRequest},
    error::AppError,
};
use uuid::Uuid;

#[tokio::test]
async fn products_by_cart_id_returns_exactly_the_linked_products() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let category = common::create_category(&state, "Snacks").await?;
    let almonds = common::create_product(&state, "Almonds", category.id).await?;
    let chocolate = common::create_product(&state, "Chocolate", category.id).await?;
    let crackers = common::create_product(&state, "Crackers", category.id).await?;

    let cart = state.carts.add_cart(CartRequest::default()).await?;
    let other = state.carts.add_cart(CartRequest::default()).await?;

    state.carts.add_cart_product(cart.id, almonds.id).await?;
    state.carts.add_cart_product(cart.id, chocolate.id).await?;
    state.carts.add_cart_product(other.id, crackers.id).await?;

    let products = state.carts.get_products_by_cart_id(cart.id).await?;
    let ids: HashSet<Uuid> = products.iter().map(|p| p.id).collect();
    assert_eq!(products.len(), 2);
    assert_eq!(ids, HashSet::from([almonds.id, chocolate.id]));

    let other_products = state.carts.get_products_by_cart_id(other.id).await?;
    assert_eq!(other_products.len(), 1);
    assert_eq!(other_products[0].id, crackers.id);

    assert_eq!(state.carts.get_cart_products().await?.len(), 3);
    Ok(())
}

#[tokio::test]
async fn repeated_links_yield_each_product_once() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let category = common::create_category(&state, "Snacks").await?;
    let almonds = common::create_product(&state, "Almonds", category.id).await?;
    let cart = state.carts.add_cart(CartRequest::default()).await?;

    state.carts.add_cart_product(cart.id, almonds.id).await?;
    state.carts.add_cart_product(cart.id, almonds.id).await?;

    let products = state.carts.get_products_by_cart_id(cart.id).await?;
    assert_eq!(products.len(), 1);
    Ok(())
}

#[tokio::test]
async fn empty_or_unknown_cart_has_no_products() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let cart = state.carts.add_cart(CartRequest::default()).await?;

    assert!(state.carts.get_products_by_cart_id(cart.id).await?.is_empty());
    assert!(state.carts.get_products_by_cart_id(Uuid::new_v4()).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn links_require_existing_cart_and_product() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let category = common::create_category(&state, "Snacks").await?;
    let almonds = common::create_product(&state, "Almonds", category.id).await?;
    let cart = state.carts.add_cart(CartRequest::default()).await?;

    let err = state
        .carts
        .add_cart_product(Uuid::new_v4(), almonds.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = state
        .carts
        .add_cart_product(cart.id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    assert!(state.carts.get_cart_products().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn cart_owner_round_trips_and_updates() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let alice = state
        .users
        .add_user(common::register_request("alice", "pw"))
        .await?;
    let bob = state
        .users
        .add_user(common::register_request("bob", "pw"))
        .await?;

    let cart = state
        .carts
        .add_cart(CartRequest {
            user_id: Some(alice.id),
        })
        .await?;
    let fetched = state.carts.get_cart(cart.id).await?.expect("cart");
    assert_eq!(fetched.user_id, Some(alice.id));
    assert_eq!(state.carts.get_carts_by_user(alice.id).await?.len(), 1);

    let moved = state
        .carts
        .update_cart(
            cart.id,
            CartRequest {
                user_id: Some(bob.id),
            },
        )
        .await?;
    assert_eq!(moved.user_id, Some(bob.id));
    let fetched = state.carts.get_cart(cart.id).await?.expect("cart");
    assert_eq!(fetched.user_id, Some(bob.id));

    let err = state
        .carts
        .add_cart(CartRequest {
            user_id: Some(Uuid::new_v4()),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(state.carts.get_carts().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn update_and_delete_cart_product() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let category = common::create_category(&state, "Snacks").await?;
    let almonds = common::create_product(&state, "Almonds", category.id).await?;
    let chocolate = common::create_product(&state, "Chocolate", category.id).await?;
    let cart = state.carts.add_cart(CartRequest::default()).await?;

    let link = state.carts.add_cart_product(cart.id, almonds.id).await?;
    let updated = state
        .carts
        .update_cart_product(
            link.id,
            UpdateCartProductRequest {
                product_id: Some(chocolate.id),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.cart_id, cart.id);
    assert_eq!(updated.product_id, chocolate.id);

    let products = state.carts.get_products_by_cart_id(cart.id).await?;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, chocolate.id);

    assert!(state.carts.delete_cart_product(link.id).await?);
    assert!(state.carts.get_products_by_cart_id(cart.id).await?.is_empty());
    assert!(!state.carts.delete_cart_product(link.id).await?);

    let err = state
        .carts
        .update_cart_product(link.id, UpdateCartProductRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    Ok(())
}

#[tokio::test]
async fn deleting_a_cart_removes_its_links() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let category = common::create_category(&state, "Snacks").await?;
    let almonds = common::create_product(&state, "Almonds", category.id).await?;
    let cart = state.carts.add_cart(CartRequest::default()).await?;
    state.carts.add_cart_product(cart.id, almonds.id).await?;

    assert!(state.carts.delete_cart(cart.id).await?);
    assert!(state.carts.get_cart(cart.id).await?.is_none());
    assert!(state.carts.get_cart_products().await?.is_empty());
    assert!(state.products.get_product(almonds.id).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn deleting_a_product_removes_its_links() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let category = common::create_category(&state, "Snacks").await?;
    let almonds = common::create_product(&state, "Almonds", category.id).await?;
    let chocolate = common::create_product(&state, "Chocolate", category.id).await?;
    let cart = state.carts.add_cart(CartRequest::default()).await?;
    state.carts.add_cart_product(cart.id, almonds.id).await?;
    state.carts.add_cart_product(cart.id, chocolate.id).await?;

    assert!(state.products.delete_product(almonds.id).await?);
    let links = state.carts.get_cart_products().await?;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].product_id, chocolate.id);

    let products = state.carts.get_products_by_cart_id(cart.id).await?;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, chocolate.id);
    assert!(state.carts.get_cart(cart.id).await?.is_some());
    Ok(())
}
