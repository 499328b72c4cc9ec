use super::*;

/// Tests that only exact name matches are counted.
///
/// Expected: 1 for the exact name, 0 for a prefix of it
#[tokio::test]
async fn counts_exact_matches_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .name("kim")
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .name("kimchi")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    assert_eq!(repo.count_by_name("kim").await?, 1);
    assert_eq!(repo.count_by_name("ki").await?, 0);

    Ok(())
}

/// Expected: 0 on an empty table
#[tokio::test]
async fn returns_zero_without_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    assert_eq!(repo.count_by_name("anyone").await?, 0);

    Ok(())
}
