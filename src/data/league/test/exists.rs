use super::*;

/// Tests that an existing league is reported as present.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_league() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(League).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let league = factory::league::LeagueFactory::new(db)
        .guild_id("100")
        .name("Chess")
        .build()
        .await?;

    let repo = LeagueRepository::new(db);
    assert!(repo.exists(100, &league.name).await?);

    Ok(())
}

/// Tests that a league in another guild does not count.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_other_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(League).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::league::LeagueFactory::new(db)
        .guild_id("100")
        .name("Chess")
        .build()
        .await?;

    let repo = LeagueRepository::new(db);
    assert!(!repo.exists(999, "Chess").await?);

    Ok(())
}
