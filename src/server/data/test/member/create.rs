use super::*;

/// Tests creating a member with an address.
///
/// Verifies that every address part lands in its own column and that the returned
/// id retrieves the stored row.
///
/// Expected: Ok with member created
#[tokio::test]
async fn creates_member_with_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo
        .create(CreateMemberParams {
            name: "userA".to_string(),
            address: Some(Address::new("Seoul", "1st", "11111")),
        })
        .await?;

    let stored = entity::prelude::Member::find_by_id(member.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "userA");
    assert_eq!(stored.city.as_deref(), Some("Seoul"));
    assert_eq!(stored.street.as_deref(), Some("1st"));
    assert_eq!(stored.zipcode.as_deref(), Some("11111"));

    Ok(())
}

/// Tests creating a member without an address.
///
/// Expected: Ok with all address columns null
#[tokio::test]
async fn creates_member_without_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo
        .create(CreateMemberParams {
            name: "userB".to_string(),
            address: None,
        })
        .await?;

    let stored = repo.find_by_id(member.id).await?.unwrap();
    assert_eq!(stored.city, None);
    assert_eq!(stored.street, None);
    assert_eq!(stored.zipcode, None);

    Ok(())
}
