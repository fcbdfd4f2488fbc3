use super::*;
use crate::test_utils::arb_messy_string;
use proptest::prelude::*;

/// Generates an arbitrary Config
fn arb_config() -> impl Strategy<Value = Config> {
    (arb_messy_string(), arb_messy_string(), any::<u16>()).prop_map(
        |(database_url, host, port)| Config { database_url, host, port },
    )
}

/// Generates an arbitrary ConfigUpdate
fn arb_config_update() -> impl Strategy<Value = ConfigUpdate> {
    (
        prop::option::of(arb_messy_string()),
        prop::option::of(arb_messy_string()),
        prop::option::of(any::<u16>()),
        prop::option::of(arb_messy_string()),
    )
        .prop_map(|(database_url, host, port, server_url)| ConfigUpdate {
            database_url,
            host,
            port,
            server_url,
        })
}

// ============================================================================
// C1: apply_update Algebraic Properties
// ============================================================================

proptest! {
    /// C1.1: Identity: apply_update(default) == original config
    #[test]
    fn prop_c1_1_identity(config in arb_config()) {
        let updated = config.clone().apply_update(ConfigUpdate::default());
        prop_assert_eq!(updated, config);
    }

    /// C1.2: Each field is replaced exactly when the update carries it
    #[test]
    fn prop_c1_2_field_wise_override(config in arb_config(), update in arb_config_update()) {
        let updated = config.clone().apply_update(update.clone());

        prop_assert_eq!(updated.database_url, update.database_url.unwrap_or(config.database_url));
        prop_assert_eq!(updated.host, update.host.unwrap_or(config.host));
        prop_assert_eq!(updated.port, update.port.unwrap_or(config.port));
    }

    /// C1.3: Last write wins when two updates are applied in sequence
    #[test]
    fn prop_c1_3_last_write_wins(
        config in arb_config(),
        first in arb_config_update(),
        second in arb_config_update(),
    ) {
        let updated = config.clone().apply_update(first.clone()).apply_update(second.clone());

        let expected_port = second.port.or(first.port).unwrap_or(config.port);
        let expected_host = second.host.or(first.host).unwrap_or(config.host);

        prop_assert_eq!(updated.port, expected_port);
        prop_assert_eq!(updated.host, expected_host);
    }
}

// ============================================================================
// C2: Argument mapping
// ============================================================================

proptest! {
    /// C2.1: config_from_args carries every server field and never a client URL
    #[test]
    fn prop_c2_1_args_mapping(
        database_url in prop::option::of(arb_messy_string()),
        host in prop::option::of(arb_messy_string()),
        port in prop::option::of(any::<u16>()),
        debug in any::<bool>(),
    ) {
        let args = CliArgs {
            database_url: database_url.clone(),
            host: host.clone(),
            port,
            debug,
            log_json: false,
        };

        let update = config_from_args(args);

        prop_assert_eq!(update.database_url, database_url);
        prop_assert_eq!(update.host, host);
        prop_assert_eq!(update.port, port);
        prop_assert_eq!(update.server_url, None);
    }

    /// C2.2: the bind address always ends with the configured port
    #[test]
    fn prop_c2_2_bind_address_suffix(config in arb_config()) {
        let suffix = format!(":{}", config.port);
        prop_assert!(config.bind_address().ends_with(&suffix));
    }
}
