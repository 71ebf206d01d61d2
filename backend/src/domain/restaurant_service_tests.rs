//! Tests for the restaurant domain service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::UserId;
use crate::domain::ports::MockRestaurantRepository;

#[fixture]
fn owner() -> UserId {
    UserId::new("11111111-1111-4111-8111-111111111111").expect("fixture owner id")
}

#[fixture]
fn stranger() -> UserId {
    UserId::new("22222222-2222-4222-8222-222222222222").expect("fixture stranger id")
}

fn restaurant(id: i64, name: &str, owner: &UserId) -> Restaurant {
    Restaurant::new(
        RestaurantId::new(id).expect("fixture id"),
        RestaurantName::new(name).expect("fixture name"),
        owner.clone(),
    )
}

fn id(raw: i64) -> RestaurantId {
    RestaurantId::new(raw).expect("fixture id")
}

fn service(repo: MockRestaurantRepository) -> RestaurantService<MockRestaurantRepository> {
    RestaurantService::new(Arc::new(repo))
}

#[rstest]
#[tokio::test]
async fn list_returns_repository_rows(owner: UserId) {
    let mut repo = MockRestaurantRepository::new();
    let rows = vec![restaurant(1, "KFC", &owner), restaurant(2, "Nandos", &owner)];
    let expected = rows.clone();
    repo.expect_list().times(1).return_once(move || Ok(rows));

    let listed = service(repo).list_restaurants().await.expect("list succeeds");
    assert_eq!(listed, expected);
}

#[rstest]
#[case(RestaurantRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(RestaurantRepositoryError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn list_maps_repository_errors(
    #[case] failure: RestaurantRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockRestaurantRepository::new();
    repo.expect_list().times(1).return_once(move || Err(failure));

    let error = service(repo).list_restaurants().await.expect_err("list fails");
    assert_eq!(error.code(), expected);
}

#[rstest]
#[tokio::test]
async fn find_reports_missing_records() {
    let mut repo = MockRestaurantRepository::new();
    repo.expect_find_by_id()
        .with(eq(id(9)))
        .times(1)
        .return_once(|_| Ok(None));

    let error = service(repo).find_restaurant(id(9)).await.expect_err("missing");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "restaurant 9 not found");
    assert_eq!(error.details(), Some(&json!({ "restaurantId": 9 })));
}

#[rstest]
#[tokio::test]
async fn create_stores_valid_names(owner: UserId) {
    let mut repo = MockRestaurantRepository::new();
    let stored = restaurant(1, "KFC", &owner);
    let expected = stored.clone();
    let expected_owner = owner.clone();
    repo.expect_insert()
        .withf(move |new| new.name.as_ref() == "KFC" && new.owner_id == expected_owner)
        .times(1)
        .return_once(move |_| Ok(stored));

    let outcome = service(repo)
        .create_restaurant(CreateRestaurantRequest {
            name: " KFC ".to_owned(),
            owner_id: owner,
        })
        .await
        .expect("create succeeds");

    assert_eq!(outcome, CreateRestaurantOutcome::Created(expected));
}

#[rstest]
#[case("")]
#[case("kf")]
#[case("  k ")]
#[tokio::test]
async fn create_rejects_short_names_without_touching_the_store(
    owner: UserId,
    #[case] name: &str,
) {
    let mut repo = MockRestaurantRepository::new();
    repo.expect_insert().never();

    let outcome = service(repo)
        .create_restaurant(CreateRestaurantRequest {
            name: name.to_owned(),
            owner_id: owner,
        })
        .await
        .expect("validation is not an error");

    let CreateRestaurantOutcome::Rejected(rejection) = outcome else {
        panic!("expected rejection, got {outcome:?}");
    };
    assert_eq!(rejection.attempted_name, name);
    assert_eq!(
        rejection.errors,
        vec!["Name is too short (minimum is 3 characters)".to_owned()]
    );
}

#[rstest]
#[tokio::test]
async fn update_renames_without_checking_ownership(owner: UserId) {
    let mut repo = MockRestaurantRepository::new();
    let current = restaurant(3, "KFC", &owner);
    let renamed = restaurant(3, "Kentucky Fried Chicken", &owner);
    let expected = renamed.clone();
    repo.expect_find_by_id()
        .with(eq(id(3)))
        .return_once(move |_| Ok(Some(current)));
    repo.expect_update_name()
        .withf(|restaurant_id, name| {
            *restaurant_id == id(3) && name.as_ref() == "Kentucky Fried Chicken"
        })
        .times(1)
        .return_once(move |_, _| Ok(Some(renamed)));

    let outcome = service(repo)
        .update_restaurant(UpdateRestaurantRequest {
            id: id(3),
            name: "Kentucky Fried Chicken".to_owned(),
        })
        .await
        .expect("update succeeds");

    assert_eq!(outcome, UpdateRestaurantOutcome::Updated(expected));
}

#[rstest]
#[tokio::test]
async fn update_with_short_name_keeps_the_record(owner: UserId) {
    let mut repo = MockRestaurantRepository::new();
    let current = restaurant(3, "KFC", &owner);
    let expected = current.clone();
    repo.expect_find_by_id()
        .return_once(move |_| Ok(Some(current)));
    repo.expect_update_name().never();

    let outcome = service(repo)
        .update_restaurant(UpdateRestaurantRequest {
            id: id(3),
            name: "k".to_owned(),
        })
        .await
        .expect("validation is not an error");

    let UpdateRestaurantOutcome::Rejected { current, rejection } = outcome else {
        panic!("expected rejection, got {outcome:?}");
    };
    assert_eq!(current, expected);
    assert_eq!(rejection.attempted_name, "k");
}

#[rstest]
#[tokio::test]
async fn update_reports_missing_records() {
    let mut repo = MockRestaurantRepository::new();
    repo.expect_find_by_id().return_once(|_| Ok(None));
    repo.expect_update_name().never();

    let error = service(repo)
        .update_restaurant(UpdateRestaurantRequest {
            id: id(4),
            name: "Burger Bar".to_owned(),
        })
        .await
        .expect_err("missing");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn destroy_by_owner_deletes(owner: UserId) {
    let mut repo = MockRestaurantRepository::new();
    let current = restaurant(5, "KFC", &owner);
    let expected = current.clone();
    repo.expect_find_by_id()
        .return_once(move |_| Ok(Some(current)));
    repo.expect_delete()
        .with(eq(id(5)))
        .times(1)
        .return_once(|_| Ok(true));

    let outcome = service(repo)
        .destroy_restaurant(DestroyRestaurantRequest {
            id: id(5),
            caller: owner,
        })
        .await
        .expect("destroy succeeds");

    assert_eq!(outcome, DestroyRestaurantOutcome::Deleted(expected));
}

#[rstest]
#[tokio::test]
async fn destroy_by_stranger_leaves_record(owner: UserId, stranger: UserId) {
    let mut repo = MockRestaurantRepository::new();
    let current = restaurant(5, "KFC", &owner);
    let expected = current.clone();
    repo.expect_find_by_id()
        .return_once(move |_| Ok(Some(current)));
    repo.expect_delete().never();

    let outcome = service(repo)
        .destroy_restaurant(DestroyRestaurantRequest {
            id: id(5),
            caller: stranger,
        })
        .await
        .expect("refusal is not an error");

    assert_eq!(outcome, DestroyRestaurantOutcome::NotOwner(expected));
}

#[rstest]
#[tokio::test]
async fn destroy_racing_a_concurrent_delete_is_not_found(owner: UserId) {
    let mut repo = MockRestaurantRepository::new();
    let current = restaurant(5, "KFC", &owner);
    repo.expect_find_by_id()
        .return_once(move |_| Ok(Some(current)));
    repo.expect_delete().return_once(|_| Ok(false));

    let error = service(repo)
        .destroy_restaurant(DestroyRestaurantRequest {
            id: id(5),
            caller: owner,
        })
        .await
        .expect_err("row vanished");
    assert_eq!(error.code(), ErrorCode::NotFound);
}
