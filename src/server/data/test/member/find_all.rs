use super::*;

/// Tests that members come back in insertion order.
///
/// Expected: Ok with both members ordered by id
#[tokio::test]
async fn returns_members_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_member(db).await?;
    let second = factory::create_member(db).await?;

    let repo = MemberRepository::new(db);
    let members = repo.find_all().await?;

    assert_eq!(members, vec![first, second]);

    Ok(())
}
