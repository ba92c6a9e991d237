//! Demo data for a fresh store

use quill_core::{DataService, NewAccount, NewPost, Result};

/// Populate a service with three accounts and three posts
///
/// Goes through the regular create operations so every seeded record gets a
/// generated id and passes the same checks as client input.
pub async fn seed_demo_data<S: DataService + ?Sized>(service: &S) -> Result<()> {
    let tim = service
        .create_account(NewAccount::new("Tim", "tim@example.com").with_age(46))
        .await?;
    let sarah = service
        .create_account(NewAccount::new("Sarah", "sarah@example.com"))
        .await?;
    let mike = service
        .create_account(NewAccount::new("Mike", "mike@example.com"))
        .await?;

    service
        .create_post(NewPost::new("Title #", "", false, tim.id))
        .await?;
    service
        .create_post(NewPost::new("GraphQL 101", "", true, sarah.id))
        .await?;
    service
        .create_post(NewPost::new("Title #", "GraphQL 201", true, mike.id))
        .await?;

    tracing::debug!("Seeded demo data");
    Ok(())
}
