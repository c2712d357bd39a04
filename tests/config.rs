use parmap::{MapPoolBuilder, PoolConfig, PoolError};

#[test]
fn defaults_to_host_parallelism() {
    let config = PoolConfig::new();
    assert!(config.host_parallelism() >= 1);
    assert_eq!(config.worker_count(), config.host_parallelism());
    assert_eq!(config.host_parallelism(), num_cpus::get());
}

#[test]
fn accepts_every_count_up_to_host_parallelism() {
    let mut config = PoolConfig::new();
    for count in 1..=config.host_parallelism() {
        assert!(config.set_worker_count(count).is_ok());
        assert_eq!(config.worker_count(), count);
    }
}

#[test]
fn rejects_zero_and_keeps_previous_value() {
    let mut config = PoolConfig::new();
    config.set_worker_count(1).unwrap();

    let err = config.set_worker_count(0).unwrap_err();
    assert!(matches!(err, PoolError::InvalidArgument(_)));
    assert_eq!(config.worker_count(), 1);
}

#[test]
fn rejects_oversubscription_and_keeps_previous_value() {
    let mut config = PoolConfig::new();
    config.set_worker_count(1).unwrap();

    let too_many = config.host_parallelism() + 1;
    let err = config.set_worker_count(too_many).unwrap_err();
    assert!(matches!(err, PoolError::InvalidArgument(_)));
    assert_eq!(config.worker_count(), 1);
}

#[test]
fn builder_rejects_invalid_worker_counts() {
    assert!(MapPoolBuilder::new().worker_count(0).build().is_err());

    let too_many = num_cpus::get() + 1;
    assert!(MapPoolBuilder::new().worker_count(too_many).build().is_err());
}

#[test]
fn pool_setter_mirrors_config_semantics() {
    let mut pool = MapPoolBuilder::new().build().unwrap();
    let previous = pool.worker_count();
    assert_eq!(pool.host_parallelism(), num_cpus::get());

    assert!(pool.set_worker_count(0).is_err());
    assert_eq!(pool.worker_count(), previous);

    pool.set_worker_count(1).unwrap();
    assert_eq!(pool.worker_count(), 1);
}
