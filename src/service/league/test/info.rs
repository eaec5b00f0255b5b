use super::*;

/// Tests that a freshly created league reports its creator as owner and sole
/// leaderboard member with a score of 0.
///
/// Expected: Ok with one leaderboard entry for the owner
#[tokio::test]
async fn reports_creator_as_owner_and_only_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = LeagueLocks::new();
    let service = LeagueService::new(db, &locks);

    service.create(GUILD, "Chess", OWNER).await?;
    let summary = service.info(GUILD, "Chess").await?;

    assert_eq!(summary.league.owner_id, OWNER);
    assert_eq!(summary.member_ids(), vec![OWNER]);
    assert_eq!(summary.score_of(OWNER), Some(0));

    Ok(())
}

/// Tests looking up a league that does not exist.
///
/// Expected: Err(LeagueNotFound)
#[tokio::test]
async fn fails_for_missing_league() {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = LeagueLocks::new();
    let service = LeagueService::new(db, &locks);

    let result = service.info(GUILD, "Nope").await;

    assert!(matches!(
        result,
        Err(AppError::LeagueErr(LeagueError::LeagueNotFound(ref name))) if name == "Nope"
    ));
}

/// Tests that surrounding whitespace in the name is ignored.
///
/// Expected: Ok with the league named without whitespace
#[tokio::test]
async fn trims_league_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = LeagueLocks::new();
    let service = LeagueService::new(db, &locks);

    service.create(GUILD, "  Chess ", OWNER).await?;
    let summary = service.info(GUILD, "Chess").await?;

    assert_eq!(summary.league.name, "Chess");

    Ok(())
}

/// Tests that the leaderboard is returned highest score first.
///
/// Expected: Ok with entries ordered by score
#[tokio::test]
async fn orders_leaderboard() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = LeagueLocks::new();
    let service = LeagueService::new(db, &locks);

    let (league, _) = factory::helpers::create_league_with_owner(db).await.unwrap();
    factory::helpers::create_leaderboard_entry(db, league.id, "77", 12)
        .await
        .unwrap();

    let guild_id: u64 = league.guild_id.parse().unwrap();
    let summary = service.info(guild_id, &league.name).await?;

    assert_eq!(summary.leaderboard[0].user_id, 77);
    assert_eq!(summary.leaderboard[0].score, 12);
    assert_eq!(summary.leaderboard.len(), 2);

    Ok(())
}
