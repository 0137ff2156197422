use super::*;

/// Tests filtering preference IDs down to existing ones.
///
/// Expected: only the stored ID is returned
#[tokio::test]
async fn returns_only_existing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_preference_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let preference = factory::preference::create_preference(db).await?;

    let ids = PreferenceRepository::new(db)
        .get_existing_ids(&[preference.id, 999])
        .await?;

    assert_eq!(ids, vec![preference.id]);

    Ok(())
}
