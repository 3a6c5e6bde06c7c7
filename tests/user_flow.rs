mod common;

use storefront_api::{
    dto::{carts::CartRequest, users::UpdateUserRequest},
    error::AppError,
    models::ROLE_USER,
};
use uuid::Uuid;

#[tokio::test]
async fn check_user_exists_flips_after_registration() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    assert!(!state.users.check_user_exists("alice").await?);
    state
        .users
        .add_user(common::register_request("alice", "wonderland"))
        .await?;
    assert!(state.users.check_user_exists("alice").await?);
    Ok(())
}

#[tokio::test]
async fn registered_user_round_trips() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let added = state
        .users
        .add_user(common::register_request("bob", "builder"))
        .await?;

    assert_eq!(added.role, ROLE_USER);
    assert_ne!(added.password_hash, "builder");

    let fetched = state.users.get_user(added.id).await?.expect("user");
    assert_eq!(fetched.username, "bob");
    assert_eq!(fetched.email, "bob@example.com");
    assert_eq!(fetched.address, "1 Market Street");
    assert_eq!(fetched.password_hash, added.password_hash);

    let by_name = state.users.get_user_by_username("bob").await?.expect("user");
    assert_eq!(by_name.id, added.id);
    assert_eq!(state.users.get_users().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn duplicate_username_is_rejected_and_first_user_kept() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let first = state
        .users
        .add_user(common::register_request("alice", "first"))
        .await?;

    let mut second = common::register_request("alice", "second");
    second.email = "other@example.com".to_string();
    let err = state.users.add_user(second).await.unwrap_err();
    assert!(matches!(err, AppError::DuplicateUser(ref name) if name == "alice"));

    let users = state.users.get_users().await?;
    assert_eq!(users.len(), 1);
    let kept = &users[0];
    assert_eq!(kept.id, first.id);
    assert_eq!(kept.email, "alice@example.com");
    assert!(state.users.check_login("alice", "first").await?.is_some());
    Ok(())
}

#[tokio::test]
async fn check_login_verifies_the_password() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = state
        .users
        .add_user(common::register_request("carol", "s3cret"))
        .await?;

    let logged_in = state.users.check_login("carol", "s3cret").await?.expect("login");
    assert_eq!(logged_in.id, user.id);

    assert!(state.users.check_login("carol", "wrong").await?.is_none());
    assert!(state.users.check_login("nobody", "s3cret").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn update_user_applies_fields_and_rehashes_password() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = state
        .users
        .add_user(common::register_request("dave", "old-pass"))
        .await?;

    let updated = state
        .users
        .update_user(
            user.id,
            UpdateUserRequest {
                email: Some("dave@shop.test".to_string()),
                password: Some("new-pass".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.id, user.id);
    assert_eq!(updated.username, "dave");
    assert_eq!(updated.email, "dave@shop.test");
    assert_eq!(updated.address, user.address);

    let fetched = state.users.get_user(user.id).await?.expect("user");
    assert_eq!(fetched.email, "dave@shop.test");
    assert!(state.users.check_login("dave", "new-pass").await?.is_some());
    assert!(state.users.check_login("dave", "old-pass").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn renaming_onto_a_taken_username_is_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    state
        .users
        .add_user(common::register_request("erin", "pw"))
        .await?;
    let frank = state
        .users
        .add_user(common::register_request("frank", "pw"))
        .await?;

    let err = state
        .users
        .update_user(
            frank.id,
            UpdateUserRequest {
                username: Some("erin".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateUser(_)));

    let unchanged = state.users.get_user(frank.id).await?.expect("user");
    assert_eq!(unchanged.username, "frank");
    Ok(())
}

#[tokio::test]
async fn update_unknown_user_is_not_found() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let err = state
        .users
        .update_user(Uuid::new_v4(), UpdateUserRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    Ok(())
}

#[tokio::test]
async fn delete_user_then_lookup_is_absent() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = state
        .users
        .add_user(common::register_request("gina", "pw"))
        .await?;

    assert!(state.users.delete_user(user.id).await?);
    assert!(state.users.get_user(user.id).await?.is_none());
    assert!(!state.users.check_user_exists("gina").await?);
    assert!(!state.users.delete_user(user.id).await?);
    Ok(())
}

#[tokio::test]
async fn update_user_cannot_change_the_role() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = state
        .users
        .add_user(common::register_request("hank", "pw"))
        .await?;

    let payload: UpdateUserRequest = serde_json::from_value(serde_json::json!({
        "email": "hank@shop.test",
        "role": "admin",
    }))?;
    let updated = state.users.update_user(user.id, payload).await?;
    assert_eq!(updated.email, "hank@shop.test");
    assert_eq!(updated.role, ROLE_USER);

    let fetched = state.users.get_user(user.id).await?.expect("user");
    assert_eq!(fetched.role, ROLE_USER);
    Ok(())
}

#[tokio::test]
async fn update_user_rejects_an_empty_password() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = state
        .users
        .add_user(common::register_request("ivy", "keep-me"))
        .await?;

    let err = state
        .users
        .update_user(
            user.id,
            UpdateUserRequest {
                password: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    assert!(state.users.check_login("ivy", "keep-me").await?.is_some());
    Ok(())
}

#[tokio::test]
async fn login_trims_the_username_like_registration() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = state
        .users
        .add_user(common::register_request(" jade ", "pw"))
        .await?;
    assert_eq!(user.username, "jade");

    let logged_in = state.users.check_login(" jade ", "pw").await?.expect("login");
    assert_eq!(logged_in.id, user.id);
    assert!(state.users.check_login("jade", "pw").await?.is_some());
    Ok(())
}

#[tokio::test]
async fn deleting_a_user_clears_cart_owner() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = state
        .users
        .add_user(common::register_request("kim", "pw"))
        .await?;
    let cart = state
        .carts
        .add_cart(CartRequest {
            user_id: Some(user.id),
        })
        .await?;

    assert!(state.users.delete_user(user.id).await?);
    let orphan = state.carts.get_cart(cart.id).await?.expect("cart kept");
    assert_eq!(orphan.user_id, None);
    assert!(state.carts.get_carts_by_user(user.id).await?.is_empty());
    Ok(())
}
