//! Repository Integration Tests
//!
//! Exercised against in-memory SQLite (fresh store per test) or a
//! tempdir-backed file when reopening matters.

#[cfg(test)]
mod tests {
    use crate::domain::{
        Barcode, Category, Entity, Inventory, Location, Product, SortOrder, Tag,
    };
    use crate::repository::{
        init_db, upsert, BarcodeRepository, CategoryRepository, DbState, InventoryRepository,
        LocationRepository, ProductRepository, Repository, TagRepository,
    };
    use chrono::NaiveDate;
    use std::path::Path;

    async fn fresh_store() -> DbState {
        init_db(Path::new(":memory:")).await.expect("failed to init test store")
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn seeds_default_categories_and_locations() {
        let store = fresh_store().await;

        let categories = CategoryRepository::new(store.conn_handle()).list().await.unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(categories.len(), 4);
        assert!(names.contains(&"Food - Perishable"));
        assert!(names.contains(&"Food - Nonperishable"));
        assert!(names.contains(&"Medicine - Prescription"));
        assert!(names.contains(&"Medicine - Over the Counter"));

        let locations = LocationRepository::new(store.conn_handle()).list().await.unwrap();
        assert_eq!(locations.len(), 8);
        assert!(locations.iter().any(|l| l.name == "Kitchen - Fridge"));
        assert!(locations.iter().any(|l| l.name == "Bathroom - Cabinet"));
        assert!(locations.iter().all(|l| l.id > 0));
    }

    #[tokio::test]
    async fn reopening_the_store_does_not_reseed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expire_bee.db");

        let first = init_db(&path).await.unwrap();
        drop(first);

        let second = init_db(&path).await.unwrap();
        let categories = CategoryRepository::new(second.conn_handle()).list().await.unwrap();
        let locations = LocationRepository::new(second.conn_handle()).list().await.unwrap();
        assert_eq!(categories.len(), 4);
        assert_eq!(locations.len(), 8);
    }

    #[tokio::test]
    async fn reseeding_never_happens_even_after_emptying_a_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expire_bee.db");

        let first = init_db(&path).await.unwrap();
        let repo = CategoryRepository::new(first.conn_handle());
        for category in repo.list().await.unwrap() {
            repo.delete(category.id).await.unwrap();
        }
        drop(first);

        let second = init_db(&path).await.unwrap();
        let categories = CategoryRepository::new(second.conn_handle()).list().await.unwrap();
        assert!(categories.is_empty());
    }

    #[tokio::test]
    async fn upsert_without_id_inserts_and_assigns_fresh_id() {
        let store = fresh_store().await;
        let repo = TagRepository::new(store.conn_handle());

        let first = upsert(&repo, &Tag::new(0, "Leftovers".into(), "#00AA00".into()))
            .await
            .unwrap();
        let second = upsert(&repo, &Tag::new(0, "Frozen".into(), "#0000AA".into()))
            .await
            .unwrap();

        assert!(first > 0);
        assert!(second > 0);
        assert_ne!(first, second);
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn upsert_with_id_updates_in_place() {
        let store = fresh_store().await;
        let repo = TagRepository::new(store.conn_handle());

        let created = repo
            .create(&Tag::new(0, "Opened".into(), "#AAAAAA".into()))
            .await
            .unwrap();

        let renamed = Tag::new(created.id, "Opened!".into(), "#BBBBBB".into());
        let id = upsert(&repo, &renamed).await.unwrap();

        assert_eq!(id, created.id);
        let tags = repo.list().await.unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "Opened!");
        assert_eq!(tags[0].color, "#BBBBBB");
    }

    // Pins the unsaved-sentinel quirk: a record that genuinely carries id 0
    // routes to insert, never to update.
    #[tokio::test]
    async fn upsert_treats_zero_id_as_unsaved() {
        let store = fresh_store().await;
        let repo = LocationRepository::new(store.conn_handle());

        let saved = repo.create(&Location::new(0, "Garage".into())).await.unwrap();
        let zero_again = Location::new(0, "Garage".into());
        let id = upsert(&repo, &zero_again).await.unwrap();

        assert_ne!(id, 0);
        assert_ne!(id, saved.id);
        // Two rows now share a name; the store never deduplicates
        let garages: Vec<Location> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .filter(|l| l.name == "Garage")
            .collect();
        assert_eq!(garages.len(), 2);
    }

    #[tokio::test]
    async fn product_round_trips_category_and_tags() {
        let store = fresh_store().await;
        let repo = ProductRepository::new(store.conn_handle());

        let mut product = Product::new(0, "Oat Milk".into());
        product.category_id = Some(1);
        product.tag_ids = vec![3, 5, 5];

        let created = repo.create(&product).await.unwrap();
        let found = repo.find_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(found.name, "Oat Milk");
        assert_eq!(found.category_id, Some(1));
        // Duplicates in the list are stored as given
        assert_eq!(found.tag_ids, vec![3, 5, 5]);
    }

    #[tokio::test]
    async fn product_lookup_by_name() {
        let store = fresh_store().await;
        let repo = ProductRepository::new(store.conn_handle());

        repo.create(&Product::new(0, "Ibuprofen".into())).await.unwrap();

        let found = repo.find_by_name("Ibuprofen").await.unwrap();
        assert!(found.is_some());
        assert!(repo.find_by_name("Aspirin").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn barcode_lookup_by_code() {
        let store = fresh_store().await;
        let products = ProductRepository::new(store.conn_handle());
        let barcodes = BarcodeRepository::new(store.conn_handle());

        let product = products.create(&Product::new(0, "Pasta".into())).await.unwrap();
        barcodes
            .create(&Barcode::new(0, "8076802085738".into(), product.id))
            .await
            .unwrap();

        let hit = barcodes.find_by_code("8076802085738").await.unwrap().unwrap();
        assert_eq!(hit.product_id, product.id);
        assert!(barcodes.find_by_code("0000000000000").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn several_barcodes_may_point_at_one_product() {
        let store = fresh_store().await;
        let barcodes = BarcodeRepository::new(store.conn_handle());

        barcodes.create(&Barcode::new(0, "111".into(), 7)).await.unwrap();
        barcodes.create(&Barcode::new(0, "222".into(), 7)).await.unwrap();

        let all = barcodes.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|b| b.product_id == 7));
    }

    #[tokio::test]
    async fn inventory_round_trips_dates_and_notes() {
        let store = fresh_store().await;
        let repo = InventoryRepository::new(store.conn_handle());

        let mut unit = Inventory::new(0, "Greek Yogurt".into());
        unit.purchase_date = Some(date(2026, 8, 1));
        unit.expiration_date = Some(date(2026, 8, 20));
        unit.quantity = 4;
        unit.location_id = Some(1);
        unit.notes = "back of the shelf".into();

        let created = repo.create(&unit).await.unwrap();
        let found = repo.find_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(found.purchase_date, Some(date(2026, 8, 1)));
        assert_eq!(found.expiration_date, Some(date(2026, 8, 20)));
        assert_eq!(found.opened_date, None);
        assert_eq!(found.quantity, 4);
        assert_eq!(found.notes, "back of the shelf");
    }

    #[tokio::test]
    async fn list_views_sorts_by_expiration_with_dateless_rows_last() {
        let store = fresh_store().await;
        let repo = InventoryRepository::new(store.conn_handle());

        let mut soon = Inventory::new(0, "Milk".into());
        soon.expiration_date = Some(date(2026, 8, 10));
        let mut later = Inventory::new(0, "Cheese".into());
        later.expiration_date = Some(date(2026, 9, 1));
        let dateless = Inventory::new(0, "Salt".into());

        repo.create(&later).await.unwrap();
        repo.create(&dateless).await.unwrap();
        repo.create(&soon).await.unwrap();

        let views = repo.list_views(date(2026, 8, 7), SortOrder::Date).await.unwrap();
        let names: Vec<&str> = views.iter().map(|v| v.inventory.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Cheese", "Salt"]);

        assert_eq!(views[0].expire_days, Some(3));
        assert_eq!(views[1].expire_days, Some(25));
        assert_eq!(views[2].expire_days, None);
    }

    #[tokio::test]
    async fn list_views_sorts_by_name_and_location() {
        let store = fresh_store().await;
        let repo = InventoryRepository::new(store.conn_handle());

        let mut fridge = Inventory::new(0, "butter".into());
        fridge.location_id = Some(1);
        let mut pantry = Inventory::new(0, "Apricots".into());
        pantry.location_id = Some(3);
        let homeless = Inventory::new(0, "candles".into());

        repo.create(&pantry).await.unwrap();
        repo.create(&homeless).await.unwrap();
        repo.create(&fridge).await.unwrap();

        let by_name = repo.list_views(date(2026, 8, 7), SortOrder::Name).await.unwrap();
        let names: Vec<&str> = by_name.iter().map(|v| v.inventory.name.as_str()).collect();
        assert_eq!(names, vec!["Apricots", "butter", "candles"]);

        let by_location = repo
            .list_views(date(2026, 8, 7), SortOrder::Location)
            .await
            .unwrap();
        let names: Vec<&str> = by_location.iter().map(|v| v.inventory.name.as_str()).collect();
        assert_eq!(names, vec!["butter", "Apricots", "candles"]);
    }

    #[tokio::test]
    async fn deleting_a_category_leaves_dangling_references() {
        let store = fresh_store().await;
        let categories = CategoryRepository::new(store.conn_handle());
        let products = ProductRepository::new(store.conn_handle());

        let category = categories.create(&Category::new(0, "Snacks".into())).await.unwrap();
        let mut product = Product::new(0, "Crackers".into());
        product.category_id = Some(category.id);
        let product = products.create(&product).await.unwrap();

        categories.delete(category.id).await.unwrap();

        // Reference integrity is advisory: the product keeps the stale id
        let found = products.find_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(found.category_id, Some(category.id));
        assert!(categories.find_by_id(category.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn upsert_works_through_the_trait_object() {
        let store = fresh_store().await;
        let repo: Box<dyn Repository<Category>> =
            Box::new(CategoryRepository::new(store.conn_handle()));

        let id = upsert(repo.as_ref(), &Category::new(0, "Cleaning".into())).await.unwrap();
        assert!(id > 0);
        assert_eq!(repo.find_by_id(id).await.unwrap().unwrap().id(), id);
    }
}
