use anyhow::{Context, Result};
use wardrobe_core::{ClothingItem, ItemKind};
use wardrobe_generate::{ClothesFactory, IdGenerator, ItemFields, seeded_rng};
use wardrobe_store::{ItemStore, MemoryStore, StoreError};

#[tokio::test]
async fn inserted_item_is_fetched_back_unchanged() -> Result<()> {
    let store = MemoryStore::new();
    assert_eq!(store.engine(), "memory");
    let factory = ClothesFactory::new();
    let item = factory.create(
        "Top",
        ItemFields {
            size: Some(40),
            color: Some("Red".to_string()),
            price: Some(25.5),
            material: Some("Cotton".to_string()),
            sleeves: Some(true),
            ..ItemFields::default()
        },
    )?;

    let id = store.insert_item(&item).await?;
    assert_eq!(Some(id), item.id);

    let record = store
        .fetch_item_by_id(id)
        .await?
        .context("inserted row should be found")?;
    let fetched = ClothingItem::try_from(record)?;
    assert_eq!(fetched, item);
    Ok(())
}

#[tokio::test]
async fn items_without_id_get_the_next_id() -> Result<()> {
    let store = MemoryStore::new();
    let boots = ClothingItem::new(ItemKind::Footwear).with_material("Leather");

    let first = store.insert_item(&boots).await?;
    let second = store.insert_item(&boots).await?;
    assert_eq!((first, second), (1, 2));

    let all = store.fetch_all_data().await?;
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|row| row.category.as_deref() == Some("Footwear")));
    Ok(())
}

#[tokio::test]
async fn duplicate_ids_are_rejected() -> Result<()> {
    let store = MemoryStore::new();
    let hat = ClothingItem::new(ItemKind::Headwear {
        style: Some("Hat".to_string()),
    })
    .with_id(3_777);

    store.insert_item(&hat).await?;
    let err = store.insert_item(&hat).await.expect_err("duplicate insert");
    assert!(matches!(err, StoreError::DuplicateId(3_777)));
    assert_eq!(store.fetch_all_data().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn random_batch_round_trips() -> Result<()> {
    let store = MemoryStore::new();
    let factory = ClothesFactory::with_ids(IdGenerator::new().unique_ticks(true));
    let items = factory.create_random_batch(25, &mut seeded_rng(5))?;

    for item in &items {
        store.insert_item(item).await?;
    }

    let mut fetched = Vec::new();
    for record in store.fetch_all_data().await? {
        fetched.push(ClothingItem::try_from(record)?);
    }

    let mut expected = items.clone();
    expected.sort_by_key(|item| item.id);
    assert_eq!(fetched, expected);
    assert!(store.fetch_item_by_id(-1).await?.is_none());
    Ok(())
}
