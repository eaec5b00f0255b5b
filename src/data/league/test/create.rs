use super::*;

/// Tests creating a new league.
///
/// Verifies that the repository inserts the league with the given guild, name and
/// owner, and that `jobs` and `latest` start out empty.
///
/// Expected: Ok with league created
#[tokio::test]
async fn creates_league() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(League).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LeagueRepository::new(db);
    let league = repo
        .create(CreateLeagueParam {
            guild_id: 100,
            name: "Chess".to_string(),
            owner_id: 200,
        })
        .await?;

    assert!(league.id > 0);
    assert_eq!(league.guild_id, 100);
    assert_eq!(league.name, "Chess");
    assert_eq!(league.owner_id, 200);
    assert!(league.jobs.is_empty());
    assert!(league.latest.is_empty());

    // Verify league exists in database with guild stored as string
    let db_league = entity::prelude::League::find_by_id(league.id).one(db).await?;
    assert_eq!(db_league.unwrap().guild_id, "100");

    Ok(())
}

/// Tests creating leagues with the same name in different guilds.
///
/// Verifies that league names are only scoped within a guild.
///
/// Expected: Ok with two distinct leagues
#[tokio::test]
async fn creates_same_name_in_different_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(League).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LeagueRepository::new(db);
    let first = repo
        .create(CreateLeagueParam {
            guild_id: 100,
            name: "Chess".to_string(),
            owner_id: 200,
        })
        .await?;
    let second = repo
        .create(CreateLeagueParam {
            guild_id: 101,
            name: "Chess".to_string(),
            owner_id: 200,
        })
        .await?;

    assert_ne!(first.id, second.id);
    assert_eq!(entity::prelude::League::find().count(db).await?, 2);

    Ok(())
}

/// Tests that the schema rejects a second league with the same name in a guild.
///
/// Expected: Err(DbErr) classified as a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_name_in_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LeagueRepository::new(db);
    let param = CreateLeagueParam {
        guild_id: 100,
        name: "Chess".to_string(),
        owner_id: 200,
    };
    repo.create(param.clone()).await?;

    let result = repo.create(param).await;

    let err = match result {
        Err(AppError::DbErr(err)) => err,
        other => panic!("expected a database error, got {other:?}"),
    };
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(entity::prelude::League::find().count(db).await?, 1);

    Ok(())
}
