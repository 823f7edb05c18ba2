use blogfolio_counter::registry::{record_visit, reset, snapshot};
use blogfolio_counter::VisitorFingerprint;
use blogfolio_page::PageContext;
use blogfolio_store::{JsonFileStore, KvStore, MemoryStore};
use tempfile::tempdir;

fn load_page(ctx: &mut PageContext, visitor: usize) -> bool {
    ctx.new_session(Box::new(MemoryStore::new()));
    let fingerprint = VisitorFingerprint::from_raw(&format!("visitor-{}", visitor));
    record_visit(ctx, &fingerprint).incremented
}

#[test]
fn test_n_unique_loads_count_n() {
    let mut ctx = PageContext::in_memory();
    for i in 0..25 {
        assert!(load_page(&mut ctx, i));
    }
    let snap = snapshot(&ctx);
    assert_eq!(snap.count, 25);
    assert_eq!(snap.visitor_ids, 25);
}

#[test]
fn test_reset_then_next_load_counts_again() {
    let mut ctx = PageContext::in_memory();
    load_page(&mut ctx, 1);
    load_page(&mut ctx, 2);

    reset(&mut ctx);
    let snap = snapshot(&ctx);
    assert_eq!(snap.count, 0);
    assert_eq!(snap.visitor_ids, 0);

    assert!(load_page(&mut ctx, 1));
    assert_eq!(snapshot(&ctx).count, 1);
}

#[test]
fn test_count_survives_restart_with_file_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("local.json");

    for i in 0..3 {
        let mut ctx = PageContext::new(
            Box::new(JsonFileStore::open(&path)),
            Box::new(MemoryStore::new()),
        );
        load_page(&mut ctx, i);
    }

    // Same visitor again after a restart is not counted.
    let mut ctx = PageContext::new(
        Box::new(JsonFileStore::open(&path)),
        Box::new(MemoryStore::new()),
    );
    assert!(!load_page(&mut ctx, 0));
    assert_eq!(ctx.local.get("blogfolio-view-count").as_deref(), Some("3"));
}
