use super::*;

/// Tests inviting two members to a league.
///
/// Expected: Ok and both members have the league in their invitations
#[tokio::test]
async fn invites_all_members() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = LeagueLocks::new();
    let service = LeagueService::new(db, &locks);

    service.create(GUILD, "Alpha", OWNER).await?;
    let outcome = service.invite(GUILD, "Alpha", &[10, 11]).await?;

    assert_eq!(outcome.invited, vec![10, 11]);
    assert!(outcome.skipped.is_empty());
    assert_eq!(record(db, 10).await.unwrap().invitations, vec!["Alpha"]);
    assert_eq!(record(db, 11).await.unwrap().invitations, vec!["Alpha"]);

    Ok(())
}

/// Tests inviting to a league that does not exist.
///
/// Expected: Err(LeagueNotFound) and no member records written
#[tokio::test]
async fn fails_for_missing_league_without_writes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = LeagueLocks::new();
    let service = LeagueService::new(db, &locks);

    let result = service.invite(GUILD, "Nope", &[10, 11]).await;

    assert!(matches!(
        result,
        Err(AppError::LeagueErr(LeagueError::LeagueNotFound(_)))
    ));
    assert!(record(db, 10).await.is_none());
    assert!(record(db, 11).await.is_none());

    Ok(())
}

/// Tests that inviting the same member twice keeps a single invitation.
///
/// Expected: second invite reports the member as skipped
#[tokio::test]
async fn does_not_duplicate_invitations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = LeagueLocks::new();
    let service = LeagueService::new(db, &locks);

    service.create(GUILD, "Alpha", OWNER).await?;
    service.invite(GUILD, "Alpha", &[10]).await?;
    let outcome = service.invite(GUILD, "Alpha", &[10, 10]).await?;

    assert!(outcome.invited.is_empty());
    assert_eq!(outcome.skipped, vec![10]);
    assert_eq!(record(db, 10).await.unwrap().invitations, vec!["Alpha"]);

    Ok(())
}

/// Tests that members who already joined, including the owner, are skipped.
///
/// Expected: owner skipped, no invitation recorded for them
#[tokio::test]
async fn skips_members_who_already_joined() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = LeagueLocks::new();
    let service = LeagueService::new(db, &locks);

    service.create(GUILD, "Alpha", OWNER).await?;
    let outcome = service.invite(GUILD, "Alpha", &[OWNER, 10]).await?;

    assert_eq!(outcome.invited, vec![10]);
    assert_eq!(outcome.skipped, vec![OWNER]);
    assert!(record(db, OWNER).await.unwrap().invitations.is_empty());

    Ok(())
}

/// Tests that pending invitations are listed per member.
///
/// Expected: invitations listed oldest first; unknown member has none
#[tokio::test]
async fn lists_pending_invitations() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = LeagueLocks::new();
    let service = LeagueService::new(db, &locks);

    service.create(GUILD, "Alpha", OWNER).await?;
    service.create(GUILD, "Beta", OWNER).await?;
    service.invite(GUILD, "Beta", &[10]).await?;
    service.invite(GUILD, "Alpha", &[10]).await?;

    assert_eq!(service.invitations(GUILD, 10).await?, vec!["Beta", "Alpha"]);
    assert!(service.invitations(GUILD, 99).await?.is_empty());

    Ok(())
}
