use super::*;

/// Tests renaming an existing member.
///
/// Verifies the name changes and the address is left alone.
///
/// Expected: Ok(true) with the new name stored
#[tokio::test]
async fn renames_existing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let repo = MemberRepository::new(db);
    let updated = repo.update_name(member.id, "renamed".to_string()).await?;

    assert!(updated);
    let stored = repo.find_by_id(member.id).await?.unwrap();
    assert_eq!(stored.name, "renamed");
    assert_eq!(stored.city, member.city);

    Ok(())
}

/// Expected: Ok(false) when no member has the id
#[tokio::test]
async fn returns_false_for_missing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    assert!(!repo.update_name(404, "nobody".to_string()).await?);

    Ok(())
}
