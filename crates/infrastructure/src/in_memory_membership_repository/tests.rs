use std::sync::Arc;

use memberpoint_application::{MembershipRepository, NewMembership};
use memberpoint_core::{AppError, NonEmptyString};
use memberpoint_domain::{AccumulationAmount, MembershipId, MembershipKind, Point};

use super::InMemoryMembershipRepository;

fn user(value: &str) -> NonEmptyString {
    NonEmptyString::new(value).unwrap_or_else(|_| unreachable!())
}

fn amount(value: i64) -> AccumulationAmount {
    AccumulationAmount::new(value).unwrap_or_else(|_| unreachable!())
}

fn new_membership(user_id: &str, kind: MembershipKind, point: i64) -> NewMembership {
    NewMembership {
        user_id: user(user_id),
        kind,
        point: Point::new(point).unwrap_or_else(|_| unreachable!()),
    }
}

#[tokio::test]
async fn create_assigns_sequential_ids() {
    let repository = InMemoryMembershipRepository::new();

    let first = repository
        .create(new_membership("aaa", MembershipKind::Naver, 0))
        .await;
    let second = repository
        .create(new_membership("aaa", MembershipKind::Kakao, 0))
        .await;

    assert!(matches!(first, Ok(ref membership) if membership.id() == MembershipId::new(1)));
    assert!(matches!(second, Ok(ref membership) if membership.id() == MembershipId::new(2)));
}

#[tokio::test]
async fn duplicate_user_and_kind_is_conflict() {
    let repository = InMemoryMembershipRepository::new();

    let first = repository
        .create(new_membership("aaa", MembershipKind::Kakao, 10000))
        .await;
    assert!(first.is_ok());

    let second = repository
        .create(new_membership("aaa", MembershipKind::Kakao, 0))
        .await;
    assert!(matches!(second, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn concurrent_duplicate_registrations_admit_one_record() {
    let repository = Arc::new(InMemoryMembershipRepository::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let repository = repository.clone();
            tokio::spawn(async move {
                repository
                    .create(new_membership("racer", MembershipKind::Line, 0))
                    .await
                    .is_ok()
            })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap_or(false) {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    let listed = repository.list_by_user(&user("racer")).await;
    assert_eq!(listed.map(|memberships| memberships.len()).unwrap_or(0), 1);
}

#[tokio::test]
async fn list_does_not_leak_across_users() {
    let repository = InMemoryMembershipRepository::new();
    assert!(
        repository
            .create(new_membership("left", MembershipKind::Naver, 0))
            .await
            .is_ok()
    );
    assert!(
        repository
            .create(new_membership("right", MembershipKind::Naver, 0))
            .await
            .is_ok()
    );

    let listed = repository.list_by_user(&user("left")).await.unwrap_or_default();

    assert_eq!(listed.len(), 1);
    assert!(listed[0].is_owned_by(&user("left")));
}

#[tokio::test]
async fn accumulate_point_updates_stored_balance() {
    let repository = InMemoryMembershipRepository::new();
    let membership = repository
        .create(new_membership("aaa", MembershipKind::Kakao, 0))
        .await
        .unwrap_or_else(|_| unreachable!());

    let accumulated = repository
        .accumulate_point(&user("aaa"), membership.id(), amount(10000))
        .await;

    assert!(matches!(accumulated, Ok(Some(ref saved)) if saved.point().value() == 10000));
    let found = repository
        .find_by_user_and_kind(&user("aaa"), MembershipKind::Kakao)
        .await;
    assert!(matches!(found, Ok(Some(ref found)) if found.point().value() == 10000));
}

#[tokio::test]
async fn accumulate_point_ignores_foreign_and_deleted_memberships() {
    let repository = InMemoryMembershipRepository::new();
    let membership = repository
        .create(new_membership("owner", MembershipKind::Naver, 5))
        .await
        .unwrap_or_else(|_| unreachable!());

    let foreign = repository
        .accumulate_point(&user("intruder"), membership.id(), amount(10000))
        .await;
    assert!(matches!(foreign, Ok(None)));

    assert!(matches!(
        repository.delete_by_id(membership.id()).await,
        Ok(true)
    ));
    let deleted = repository
        .accumulate_point(&user("owner"), membership.id(), amount(1))
        .await;
    assert!(matches!(deleted, Ok(None)));
}

#[tokio::test]
async fn accumulate_point_overflow_keeps_balance() {
    let repository = InMemoryMembershipRepository::new();
    let membership = repository
        .create(new_membership("aaa", MembershipKind::Line, i64::MAX))
        .await
        .unwrap_or_else(|_| unreachable!());

    let overflow = repository
        .accumulate_point(&user("aaa"), membership.id(), amount(1))
        .await;

    assert!(matches!(overflow, Err(AppError::Validation(_))));
    let found = repository.find_by_id(membership.id()).await;
    assert!(matches!(found, Ok(Some(ref found)) if found.point().value() == i64::MAX));
}

#[tokio::test]
async fn concurrent_accumulations_are_not_lost() {
    let repository = Arc::new(InMemoryMembershipRepository::new());
    let membership = repository
        .create(new_membership("racer", MembershipKind::Kakao, 0))
        .await
        .unwrap_or_else(|_| unreachable!());

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let repository = repository.clone();
            let membership_id = membership.id();
            tokio::spawn(async move {
                repository
                    .accumulate_point(&user("racer"), membership_id, amount(1))
                    .await
                    .is_ok()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap_or(false));
    }

    let found = repository.find_by_id(membership.id()).await;
    assert!(matches!(found, Ok(Some(ref found)) if found.point().value() == 50));
}

#[tokio::test]
async fn delete_of_missing_membership_reports_false() {
    let repository = InMemoryMembershipRepository::new();

    let removed = repository.delete_by_id(MembershipId::new(-1)).await;

    assert!(matches!(removed, Ok(false)));
}
