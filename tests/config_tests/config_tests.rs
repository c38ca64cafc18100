//! Config Tests

use std::path::PathBuf;

use gamegraph::config::{Config, IdStrategy, SeedSource};

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.listen_addr, "127.0.0.1:4000");
    assert_eq!(config.seed, SeedSource::Builtin);
    assert_eq!(config.id_strategy, IdStrategy::Sequential);
    assert!(config.graphiql);
    assert_eq!(config.depth_limit, None);
    assert_eq!(config.complexity_limit, None);
}

#[test]
fn test_builder_overrides() {
    let config = Config::builder()
        .listen_addr("0.0.0.0:8080")
        .seed_file("/tmp/seed.json")
        .id_strategy(IdStrategy::Uuid)
        .graphiql(false)
        .depth_limit(4)
        .complexity_limit(50)
        .build();

    assert_eq!(config.listen_addr, "0.0.0.0:8080");
    assert_eq!(config.seed, SeedSource::File(PathBuf::from("/tmp/seed.json")));
    assert_eq!(config.id_strategy, IdStrategy::Uuid);
    assert!(!config.graphiql);
    assert_eq!(config.depth_limit, Some(4));
    assert_eq!(config.complexity_limit, Some(50));
}

#[test]
fn test_socket_addr() {
    let config = Config::default();
    assert_eq!(config.socket_addr().unwrap().port(), 4000);

    let bad = Config::builder().listen_addr("localhost").build();
    assert!(bad.socket_addr().is_err());
}

#[test]
fn test_id_strategy_from_str() {
    assert_eq!("sequential".parse::<IdStrategy>().unwrap(), IdStrategy::Sequential);
    assert_eq!("SEQ".parse::<IdStrategy>().unwrap(), IdStrategy::Sequential);
    assert_eq!("uuid".parse::<IdStrategy>().unwrap(), IdStrategy::Uuid);
    assert!("random".parse::<IdStrategy>().is_err());
}
