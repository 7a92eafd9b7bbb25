#[cfg(test)]
mod tests {
    use eodlog::db::clients::Clients;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ClientTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ClientTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ClientTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ClientTestContext)]
    #[test]
    fn test_upsert_is_idempotent_with_last_write_wins(_ctx: &mut ClientTestContext) {
        let mut clients = Clients::new().unwrap();

        clients.upsert("acme", "Acme Co").unwrap();
        clients.upsert("acme", "Acme Corporation").unwrap();

        let stored: Vec<_> = clients.fetch().unwrap().into_iter().filter(|c| c.key == "acme").collect();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Acme Corporation");
    }

    #[test_context(ClientTestContext)]
    #[test]
    fn test_map_resolves_keys_to_names(_ctx: &mut ClientTestContext) {
        let mut clients = Clients::new().unwrap();

        clients.upsert("globex", "Globex").unwrap();
        clients.upsert("initech", "Initech LLC").unwrap();

        let map = clients.map().unwrap();
        assert_eq!(map.get("globex").map(String::as_str), Some("Globex"));
        assert_eq!(map.get("initech").map(String::as_str), Some("Initech LLC"));
    }

    #[test_context(ClientTestContext)]
    #[test]
    fn test_remove_only_affects_the_local_registry_row(_ctx: &mut ClientTestContext) {
        let mut clients = Clients::new().unwrap();

        clients.upsert("ephemeral", "Short Lived").unwrap();
        clients.remove("ephemeral").unwrap();

        assert!(clients.fetch().unwrap().iter().all(|c| c.key != "ephemeral"));
    }

    #[test_context(ClientTestContext)]
    #[test]
    fn test_upsert_many_pushes_every_pair(_ctx: &mut ClientTestContext) {
        let mut clients = Clients::new().unwrap();

        let mut batch = std::collections::BTreeMap::new();
        batch.insert("batch-a".to_string(), "Batch A".to_string());
        batch.insert("batch-b".to_string(), "Batch B".to_string());
        clients.upsert_many(&batch).unwrap();

        let map = clients.map().unwrap();
        assert_eq!(map.get("batch-a").map(String::as_str), Some("Batch A"));
        assert_eq!(map.get("batch-b").map(String::as_str), Some("Batch B"));
    }
}
