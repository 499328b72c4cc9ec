use super::*;

/// Tests that the flat projection repeats root columns once per line.
///
/// Expected: Three rows for two orders after 1 statement
#[tokio::test]
async fn repeats_root_columns_per_line() -> Result<(), DbErr> {
    let mut test = TestBuilder::new().with_shop_tables().build().await.unwrap();
    let counter = test.count_queries().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let book = factory::create_book(db).await?;
    let movie = factory::create_movie(db).await?;
    let (member, _, first, _) =
        factory::helpers::create_order_with_items(db, &[(&book, 1), (&movie, 2)]).await?;
    let (_, _, second, _) = factory::helpers::create_order_with_items(db, &[(&movie, 1)]).await?;
    counter.reset();

    let repo = OrderQueryRepository::new(db);
    let rows = repo.find_flat_rows().await?;

    assert_eq!(counter.get(), 1);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].order_id, first.id);
    assert_eq!(rows[1].order_id, first.id);
    assert_eq!(rows[0].name, member.name);
    assert_eq!(rows[1].name, member.name);
    assert_eq!(rows[1].item_name, movie.name);
    assert_eq!(rows[2].order_id, second.id);

    Ok(())
}
